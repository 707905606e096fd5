//! Delete Confirm Button Component
//!
//! Inline remove button for draft list entries, with confirm/cancel.

use leptos::prelude::*;

/// Shows a × button; clicking it asks "Remove?" with ✓/✗.
///
/// # Arguments
/// * `label` - accessible name of the entry being removed (e.g. "step 3")
/// * `on_confirm` - run once the user confirms
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] label: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirm_delete, set_confirm_delete) = signal(false);
    let aria = format!("Remove {}", label);

    view! {
        <Show when=move || !confirm_delete.get()>
            <button
                type="button"
                class="delete-btn"
                aria-label=aria.clone()
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_confirm_delete.set(true);
                }
            >
                "×"
            </button>
        </Show>
        <Show when=move || confirm_delete.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Remove?"</span>
                <button
                    type="button"
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    type="button"
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
