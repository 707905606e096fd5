//! Add Note Dialog
//!
//! Posts a note on a saved recipe from its detail page.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::RecipeNote;
use crate::notify::{Notifier, Notify};
use crate::session::Session;
use crate::submit::post_note;

use super::{reset_after_close, Dialog};

#[component]
pub fn AddNoteDialog(
    open: RwSignal<bool>,
    session: Session,
    notifier: Notifier,
    recipe_id: u32,
    on_added: Callback<RecipeNote>,
) -> impl IntoView {
    let text = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);
    let reset = move || text.set(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(username) = session.username() else {
            notifier.warning("Log in to add notes.");
            return;
        };
        let note = text.get_untracked();

        submitting.set(true);
        spawn_local(async move {
            if let Some(saved) = post_note(&session.api(), &notifier, recipe_id, &note, &username).await {
                on_added.run(saved);
                open.set(false);
                reset_after_close(reset);
            }
            submitting.set(false);
        });
    };

    view! {
        <Dialog open=open title="Add a Note" on_close=Callback::new(move |_| reset_after_close(reset))>
            <form class="dialog-form" on:submit=on_submit>
                <label>
                    "Note"
                    <textarea
                        name="note"
                        rows="4"
                        prop:value=move || text.get()
                        on:input=move |ev| text.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="dialog-actions">
                    <button type="button" on:click=move |_| { open.set(false); reset_after_close(reset); }>"Cancel"</button>
                    <button type="submit" class="primary" disabled=move || submitting.get()>"Add note"</button>
                </div>
            </form>
        </Dialog>
    }
}
