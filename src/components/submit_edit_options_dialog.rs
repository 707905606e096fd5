//! Submit Edit Options Dialog
//!
//! Saving an edited recipe either updates it in place or creates a new
//! recipe forked from it.

use leptos::prelude::*;

use crate::draft::FormMode;

use super::Dialog;

#[component]
pub fn SubmitEditOptionsDialog(
    open: RwSignal<bool>,
    recipe_id: u32,
    on_choose: Callback<FormMode>,
) -> impl IntoView {
    let choice = RwSignal::new(FormMode::Edit(recipe_id));

    let option = move |mode: FormMode, label: &'static str| {
        view! {
            <button
                type="button"
                class=move || if choice.get() == mode { "option-btn selected" } else { "option-btn" }
                on:click=move |_| choice.set(mode)
            >
                {label}
            </button>
        }
    };

    let submit = move |_| {
        open.set(false);
        on_choose.run(choice.get_untracked());
    };

    view! {
        <Dialog open=open title="Update or Create">
            <p class="dialog-text">
                "Do you want to update the current recipe with these changes or create a new recipe?"
            </p>
            <div class="button-group">
                {option(FormMode::Edit(recipe_id), "Update current recipe")}
                {option(FormMode::Fork(recipe_id), "Create new recipe")}
            </div>
            <div class="dialog-actions">
                <button type="button" on:click=move |_| open.set(false)>"Cancel"</button>
                <button type="button" class="primary" on:click=submit>"Submit"</button>
            </div>
        </Dialog>
    }
}
