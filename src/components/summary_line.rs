//! Summary Line Component
//!
//! Live task counts.

use leptos::prelude::*;

use crate::store::{use_todo_store, TodoStateStoreFields};

#[component]
pub fn SummaryLine() -> impl IntoView {
    let store = use_todo_store();
    let counts = move || store.task_list().read().counts();

    view! {
        <p class="summary-line">
            {move || {
                let c = counts();
                format!("Total: {}, Completed: {}, Pending: {}", c.total, c.completed, c.pending)
            }}
        </p>
    }
}
