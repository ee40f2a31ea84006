//! Static Todo Section Component
//!
//! The seeded rows with their own edit cursor and clear button.

use leptos::prelude::*;

use crate::components::{ClearAllButton, TodoRow};
use crate::store::{
    store_clear_static, store_commit_static_edit, store_delete_static, store_set_static_pending,
    store_start_static_edit, store_toggle_static, use_todo_store, TodoStateStoreFields,
};

#[component]
pub fn StaticTodoSection() -> impl IntoView {
    let store = use_todo_store();

    let rows = move || {
        let list = store.static_list().read();
        list.items()
            .iter()
            .map(|item| (item.clone(), list.editing().is_editing(item.id)))
            .collect::<Vec<_>>()
    };
    let pending = Signal::derive(move || store.static_list().read().editing().pending().to_string());

    view! {
        <section class="static-todos">
            <h2>"Static Todos"</h2>
            <For
                each=rows
                // Pending text is not part of the key so typing keeps the input
                key=|(item, editing)| (item.id, item.name.clone(), item.is_done, *editing)
                children=move |(item, editing)| {
                    let id = item.id;
                    let name = item.name.clone();
                    view! {
                        <TodoRow
                            label=item.name
                            done=item.is_done
                            editing=editing
                            strike_done=true
                            pending=pending
                            on_toggle=Callback::new(move |_| store_toggle_static(&store, id))
                            on_start_edit=Callback::new(move |_| store_start_static_edit(&store, id, &name))
                            on_input=Callback::new(move |value: String| store_set_static_pending(&store, &value))
                            on_commit=Callback::new(move |_| store_commit_static_edit(&store))
                            on_delete=Callback::new(move |_| store_delete_static(&store, id))
                        />
                    }
                }
            />
            <ClearAllButton
                label="Clear All Static Todos"
                on_clear=Callback::new(move |_| store_clear_static(&store))
            />
        </section>
    }
}
