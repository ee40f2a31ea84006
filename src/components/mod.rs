//! UI Components
//!
//! Leptos components for the todo page.

mod todo_row;
mod clear_all_button;
mod summary_line;
mod static_todo_section;
mod task_section;
mod new_task_form;

pub use todo_row::TodoRow;
pub use clear_all_button::ClearAllButton;
pub use summary_line::SummaryLine;
pub use static_todo_section::StaticTodoSection;
pub use task_section::TaskSection;
pub use new_task_form::NewTaskForm;
