//! Recipe Form Component
//!
//! Add, edit and fork form. Owns the [`RecipeDraft`] and the picker catalog;
//! every change to the draft is a [`DraftUpdate`] applied to the latest
//! state.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::draft::{BasicsField, DraftList, DraftUpdate, FormMode, RecipeDraft};
use crate::models::Recipe;
use crate::notify::{Notifier, Notify};
use crate::session::Session;
use crate::store::{load_catalog, store_set_catalog, CatalogState, CatalogStateStoreFields, CatalogStore};
use crate::submit::save_recipe;

use super::{
    AddIngredientDialog, ItemLineRow, ManageSubsectionsDialog, NoteLineRow, StepLineRow,
    SubmitEditOptionsDialog,
};

#[component]
pub fn RecipeForm(
    session: Session,
    notifier: Notifier,
    mode: FormMode,
    recipe: Option<Recipe>,
    /// Receives the saved recipe and the mode it was saved in
    on_saved: Callback<(Recipe, FormMode)>,
    on_close: Callback<()>,
) -> impl IntoView {
    let draft = RwSignal::new(match &recipe {
        Some(recipe) => RecipeDraft::from_recipe(recipe, mode),
        None => RecipeDraft::empty(),
    });
    let catalog: CatalogStore = Store::new(CatalogState::default());
    let submitting = RwSignal::new(false);
    let subsections_open = RwSignal::new(false);
    let ingredient_open = RwSignal::new(false);
    let options_open = RwSignal::new(false);

    Effect::new(move |_| {
        spawn_local(async move {
            match load_catalog(&session.api()).await {
                Ok(loaded) => store_set_catalog(&catalog, loaded),
                Err(e) => {
                    tracing::warn!(error = %e, "failed to load catalog");
                    notifier.errors(&e.messages());
                }
            }
        });
    });

    let on_update = Callback::new(move |update: DraftUpdate| {
        draft.update(|d| {
            if let Err(e) = d.apply(update) {
                tracing::warn!(error = %e, "draft update rejected");
            }
        });
    });
    let set_basics = move |field: BasicsField| on_update.run(DraftUpdate::Basics(field));

    let submit = move |target: FormMode| {
        let Some(username) = session.username() else {
            notifier.warning("Log in to save recipes.");
            return;
        };
        let snapshot = draft.get_untracked();

        submitting.set(true);
        spawn_local(async move {
            let saved = save_recipe(&session.api(), &notifier, &snapshot, &username, target).await;
            submitting.set(false);
            if let Some(recipe) = saved {
                on_saved.run((recipe, target));
            }
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match mode {
            FormMode::Edit(_) => options_open.set(true),
            _ => submit(mode),
        }
    };

    let subsection_labels = Signal::derive(move || draft.with(|d| d.subsections.clone()));
    let save_subsections = Callback::new(move |labels: Vec<String>| {
        draft.update(|d| d.replace_subsections(labels));
    });

    view! {
        <form class="recipe-form" on:submit=on_submit>
            <h1>{mode.title()}</h1>
            {move || draft.with(|d| d.cover_photo.clone()).map(|url| view! {
                <img class="cover-photo" src=url alt="Cover photo"/>
            })}

            <fieldset class="recipe-basics">
                <label>
                    "Name"
                    <input
                        type="text"
                        name="name"
                        disabled=matches!(mode, FormMode::Edit(_))
                        prop:value=move || draft.with(|d| d.name.clone())
                        on:input=move |ev| set_basics(BasicsField::Name(event_target_value(&ev)))
                    />
                </label>
                <label>
                    "Description"
                    <textarea
                        name="description"
                        prop:value=move || draft.with(|d| d.description.clone())
                        on:input=move |ev| set_basics(BasicsField::Description(event_target_value(&ev)))
                    ></textarea>
                </label>
                <label>
                    "Meal"
                    <select name="mealName" on:change=move |ev| set_basics(BasicsField::MealName(event_target_value(&ev)))>
                        <option value="" selected=move || draft.with(|d| d.meal_name.is_empty())>"Choose a meal"</option>
                        {move || catalog.meals().get().into_iter().map(|meal| {
                            let name = meal.name.clone();
                            view! {
                                <option value=meal.name.clone() selected=move || draft.with(|d| d.meal_name == name)>
                                    {meal.name.clone()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </label>
                <label>
                    "Type"
                    <select name="typeName" on:change=move |ev| set_basics(BasicsField::TypeName(event_target_value(&ev)))>
                        <option value="" selected=move || draft.with(|d| d.type_name.is_empty())>"Choose a type"</option>
                        {move || catalog.types().get().into_iter().map(|kind| {
                            let name = kind.name.clone();
                            view! {
                                <option value=kind.name.clone() selected=move || draft.with(|d| d.type_name == name)>
                                    {kind.name.clone()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </label>
                <label class="checkbox-label">
                    <input
                        type="checkbox"
                        name="private"
                        prop:checked=move || draft.with(|d| d.is_private)
                        on:change=move |ev| set_basics(BasicsField::Private(event_target_checked(&ev)))
                    />
                    "Private"
                </label>
            </fieldset>

            <fieldset class="recipe-items">
                <legend>"Ingredients"</legend>
                <datalist id="ingredient-options">
                    {move || catalog.ingredients().get().into_iter().map(|i| view! { <option value=i.name/> }).collect_view()}
                </datalist>
                <For
                    each=move || draft.with(|d| d.entry_keys(DraftList::Items))
                    key=|entry| *entry
                    children=move |entry| view! {
                        <ItemLineRow draft=draft entry=entry catalog=catalog on_update=on_update/>
                    }
                />
                <div class="list-actions">
                    <button type="button" on:click=move |_| on_update.run(DraftUpdate::Add(DraftList::Items))>
                        "Add ingredient"
                    </button>
                    <button type="button" on:click=move |_| ingredient_open.set(true)>"New ingredient..."</button>
                    <button type="button" on:click=move |_| subsections_open.set(true)>"Manage subsections"</button>
                </div>
            </fieldset>

            <fieldset class="recipe-steps">
                <legend>"Steps"</legend>
                <For
                    each=move || draft.with(|d| d.entry_keys(DraftList::Steps))
                    key=|entry| *entry
                    children=move |entry| view! { <StepLineRow draft=draft entry=entry on_update=on_update/> }
                />
                <button type="button" on:click=move |_| on_update.run(DraftUpdate::Add(DraftList::Steps))>
                    "Add step"
                </button>
            </fieldset>

            <fieldset class="recipe-notes">
                <legend>"Notes"</legend>
                <For
                    each=move || draft.with(|d| d.entry_keys(DraftList::Notes))
                    key=|entry| *entry
                    children=move |entry| view! { <NoteLineRow draft=draft entry=entry on_update=on_update/> }
                />
                <button type="button" on:click=move |_| on_update.run(DraftUpdate::Add(DraftList::Notes))>
                    "Add note"
                </button>
            </fieldset>

            <div class="form-actions">
                <button type="button" on:click=move |_| on_close.run(())>"Cancel"</button>
                <button type="submit" class="primary" disabled=move || submitting.get()>{mode.submit_label()}</button>
            </div>
        </form>

        <ManageSubsectionsDialog open=subsections_open labels=subsection_labels on_save=save_subsections/>
        <AddIngredientDialog open=ingredient_open session=session notifier=notifier catalog=catalog/>
        {match mode {
            FormMode::Edit(recipe_id) => Some(view! {
                <SubmitEditOptionsDialog
                    open=options_open
                    recipe_id=recipe_id
                    on_choose=Callback::new(move |choice| submit(choice))
                />
            }),
            _ => None,
        }}
    }
}
