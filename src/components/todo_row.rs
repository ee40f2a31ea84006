//! Todo Row Component
//!
//! One row of either list: checkbox, text or edit input, Edit/Save, Delete.

use leptos::prelude::*;

/// A single list row
///
/// The row is rebuilt by its parent whenever `label`, `done` or `editing`
/// change; the edit input itself follows `pending` reactively.
#[component]
pub fn TodoRow(
    #[prop(into)] label: String,
    done: bool,
    editing: bool,
    /// Strike through the label of done rows
    #[prop(optional)] strike_done: bool,
    pending: Signal<String>,
    on_toggle: Callback<()>,
    on_start_edit: Callback<()>,
    on_input: Callback<String>,
    on_commit: Callback<()>,
    on_delete: Callback<()>,
) -> impl IntoView {
    let text_class = if done && strike_done { "row-text done" } else { "row-text" };

    view! {
        <div class="todo-row">
            <div class="todo-row-main">
                <input
                    type="checkbox"
                    prop:checked=done
                    on:change=move |_| on_toggle.run(())
                />
                {if editing {
                    view! {
                        <input
                            type="text"
                            class="edit-input"
                            prop:value=move || pending.get()
                            on:input=move |ev| on_input.run(event_target_value(&ev))
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    on_commit.run(());
                                }
                            }
                        />
                    }.into_any()
                } else {
                    view! { <span class=text_class>{label}</span> }.into_any()
                }}
            </div>
            <div class="todo-row-actions">
                {if editing {
                    view! {
                        <button class="save-btn" on:click=move |_| on_commit.run(())>"Save"</button>
                    }.into_any()
                } else {
                    view! {
                        <button class="edit-btn" on:click=move |_| on_start_edit.run(())>"Edit"</button>
                    }.into_any()
                }}
                <button class="delete-btn" on:click=move |_| on_delete.run(())>"Delete"</button>
            </div>
        </div>
    }
}
