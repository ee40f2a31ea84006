//! Todo List App
//!
//! Root component: summary line, static todos, new task form, task list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{NewTaskForm, StaticTodoSection, SummaryLine, TaskSection};
use crate::config::AppConfig;
use crate::store::TodoState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Tasks are read from storage once, here
    let state = TodoState::new(&config);
    log::info!(
        "Loaded {} stored tasks under '{}'",
        state.task_list.tasks().len(),
        config.storage_key
    );
    provide_context(Store::new(state));

    view! {
        <div class="todo-page">
            <div class="todo-card">
                <h1>"Todo List"</h1>
                <SummaryLine />

                <StaticTodoSection />

                <NewTaskForm />
                <TaskSection />
            </div>
        </div>
    }
}
