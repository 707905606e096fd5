//! Rate & Review Dialog
//!
//! Currently just the favorite flag for a recipe.

use leptos::prelude::*;

use crate::notify::Notifier;
use crate::session::Session;

use super::Dialog;

#[component]
pub fn RateReviewDialog(
    open: RwSignal<bool>,
    session: Session,
    notifier: Notifier,
    recipe_id: u32,
) -> impl IntoView {
    let starred = RwSignal::new(false);

    Effect::new(move |_| {
        if open.get() {
            starred.set(untrack(|| session.is_favorite(recipe_id)));
        }
    });

    let submit = move |_| {
        session.request_favorite(notifier, recipe_id, starred.get_untracked());
        open.set(false);
    };

    view! {
        <Dialog open=open title="Rate & Review">
            <p class="dialog-text">"Please fill out the information below to rate and review this recipe."</p>
            <label class="checkbox-label">
                <input
                    type="checkbox"
                    name="isStarred"
                    prop:checked=move || starred.get()
                    on:change=move |ev| starred.set(event_target_checked(&ev))
                />
                "Favorite?"
            </label>
            <div class="dialog-actions">
                <button type="button" on:click=move |_| open.set(false)>"Cancel"</button>
                <button type="button" class="primary" on:click=submit>"Submit"</button>
            </div>
        </Dialog>
    }
}
