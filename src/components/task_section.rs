//! Task Section Component
//!
//! Persisted tasks shown through the current filter.

use leptos::prelude::*;

use crate::components::{ClearAllButton, TodoRow};
use crate::store::{
    store_clear_tasks, store_commit_task_edit, store_delete_task, store_set_task_pending,
    store_start_task_edit, store_toggle_task, use_todo_store, TodoStateStoreFields,
};

#[component]
pub fn TaskSection() -> impl IntoView {
    let store = use_todo_store();

    let rows = move || {
        let filter = store.filter().get();
        let list = store.task_list().read();
        list.filtered(filter)
            .into_iter()
            .map(|task| {
                let editing = list.editing().is_editing(task.id);
                (task, editing)
            })
            .collect::<Vec<_>>()
    };
    let pending = Signal::derive(move || store.task_list().read().editing().pending().to_string());

    view! {
        <section class="tasks">
            <For
                each=rows
                key=|(task, editing)| (task.id, task.text.clone(), task.completed, *editing)
                children=move |(task, editing)| {
                    let id = task.id;
                    let text = task.text.clone();
                    view! {
                        <TodoRow
                            label=task.text
                            done=task.completed
                            editing=editing
                            pending=pending
                            on_toggle=Callback::new(move |_| store_toggle_task(&store, id))
                            on_start_edit=Callback::new(move |_| store_start_task_edit(&store, id, &text))
                            on_input=Callback::new(move |value: String| store_set_task_pending(&store, &value))
                            on_commit=Callback::new(move |_| store_commit_task_edit(&store))
                            on_delete=Callback::new(move |_| store_delete_task(&store, id))
                        />
                    }
                }
            />
            <ClearAllButton
                label="Clear All Tasks"
                on_clear=Callback::new(move |_| store_clear_tasks(&store))
            />
        </section>
    }
}
