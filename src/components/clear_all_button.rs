//! Clear All Button Component

use leptos::prelude::*;

/// Centered button that empties one list, no confirmation
#[component]
pub fn ClearAllButton(
    #[prop(into)] label: String,
    on_clear: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="clear-all-row">
            <button class="clear-all-btn" on:click=move |_| on_clear.run(())>
                {label}
            </button>
        </div>
    }
}
