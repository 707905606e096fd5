//! Add Ingredient Dialog
//!
//! Creates an ingredient in the shared catalog and adds it to the form's
//! picker.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::NewIngredient;
use crate::notify::{Notifier, Notify};
use crate::session::Session;
use crate::store::{store_add_ingredient, CatalogStateStoreFields, CatalogStore};

use super::{reset_after_close, Dialog};

#[component]
pub fn AddIngredientDialog(
    open: RwSignal<bool>,
    session: Session,
    notifier: Notifier,
    catalog: CatalogStore,
) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let reset = move || {
        name.set(String::new());
        category.set(String::new());
        description.set(String::new());
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let ingredient = NewIngredient {
            name: name.get_untracked().trim().to_string(),
            category: category.get_untracked(),
            description: description.get_untracked().trim().to_string(),
        };
        if ingredient.name.is_empty() || ingredient.category.is_empty() {
            notifier.warning("An ingredient needs a name and a category.");
            return;
        }

        submitting.set(true);
        spawn_local(async move {
            match session.api().create_ingredient(&ingredient).await {
                Ok(created) => {
                    notifier.success(format!("Added {}!", created.name));
                    store_add_ingredient(&catalog, created);
                    open.set(false);
                    reset_after_close(reset);
                }
                Err(e) => notifier.errors(&e.messages()),
            }
            submitting.set(false);
        });
    };

    view! {
        <Dialog open=open title="Add an Ingredient" on_close=Callback::new(move |_| reset_after_close(reset))>
            <form class="dialog-form" on:submit=on_submit>
                <label>
                    "Name"
                    <input
                        type="text"
                        name="name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Category"
                    <select name="category" on:change=move |ev| category.set(event_target_value(&ev))>
                        <option value="" selected=move || category.get().is_empty()>"Choose a category"</option>
                        {move || catalog.categories().get().into_iter().map(|c| {
                            let value = c.name.clone();
                            view! {
                                <option value=c.name.clone() selected=move || category.get() == value>{c.name.clone()}</option>
                            }
                        }).collect_view()}
                    </select>
                </label>
                <label>
                    "Description"
                    <textarea
                        name="description"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="dialog-actions">
                    <button type="button" on:click=move |_| { open.set(false); reset_after_close(reset); }>"Cancel"</button>
                    <button type="submit" class="primary" disabled=move || submitting.get()>"Add"</button>
                </div>
            </form>
        </Dialog>
    }
}
