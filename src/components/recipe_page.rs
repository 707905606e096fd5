//! Recipe Page Component
//!
//! The `/recipes/:id` page: loads the recipe, shows it, and hosts the edit
//! and fork forms and the per-recipe dialogs.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use crate::draft::FormMode;
use crate::fetch::FetchState;
use crate::models::{Recipe, RecipeNote, RecipePhoto};
use crate::notify::Notifier;
use crate::routes::{parse_recipe_id, use_redirect, AppRoute};
use crate::session::Session;

use super::{
    AddNoteDialog, DialAction, FetchError, LoadingSpinner, RateReviewDialog, RecipeDetail, RecipeForm,
    SpeedDial, UnverifiedUserSpeedDial, UploadPhotoDialog,
};

#[component]
pub fn RecipePage(session: Session, notifier: Notifier) -> impl IntoView {
    let params = use_params_map();
    let redirect = use_redirect();
    let recipe = RwSignal::new(FetchState::<Recipe>::Loading);
    let form_mode = RwSignal::new(None::<FormMode>);
    let note_open = RwSignal::new(false);
    let photo_open = RwSignal::new(false);
    let rate_open = RwSignal::new(false);

    let recipe_id = Memo::new(move |_| params.with(|p| p.get("id").and_then(|raw| parse_recipe_id(&raw))));

    Effect::new(move |_| {
        let Some(id) = recipe_id.get() else {
            recipe.set(FetchState::Failed(vec!["Not a valid recipe id.".to_string()]));
            return;
        };
        form_mode.set(None);
        recipe.set(FetchState::Loading);
        spawn_local(async move {
            let result = session.api().get_recipe(id).await;
            if let Err(e) = &result {
                tracing::warn!(recipe_id = id, error = %e, "failed to load recipe");
            }
            recipe.set(FetchState::from_result(result));
        });
    });

    let on_saved = Callback::new(move |(saved, mode): (Recipe, FormMode)| {
        form_mode.set(None);
        match mode {
            FormMode::Edit(_) => recipe.set(FetchState::Loaded(saved)),
            _ => redirect.set(Some(AppRoute::Recipe(saved.id))),
        }
    });
    let on_close = Callback::new(move |_| form_mode.set(None));
    let on_note = Callback::new(move |note: RecipeNote| {
        recipe.update(|state| state.update_loaded(|r| r.notes.push(note)));
    });
    let on_photo = Callback::new(move |photo: RecipePhoto| {
        if photo.is_cover_image {
            recipe.update(|state| state.update_loaded(|r| r.photo_url = Some(photo.url)));
        }
    });

    let actions = move |loaded: &Recipe| {
        let id = loaded.id;
        let mut actions = Vec::new();
        if session.username().as_deref() == Some(loaded.created_by.as_str()) {
            actions.push(DialAction::new("✎", "Edit Recipe", move || form_mode.set(Some(FormMode::Edit(id)))));
        }
        actions.push(DialAction::new("📷", "Add Photo", move || photo_open.set(true)));
        actions.push(DialAction::new("📝", "Add Note", move || note_open.set(true)));
        actions.push(DialAction::new("⑂", "Fork Recipe", move || form_mode.set(Some(FormMode::Fork(id)))));
        actions.push(DialAction::new("★", "Rate & Review", move || rate_open.set(true)));
        actions
    };

    view! {
        <section class="recipe-page">
            {move || match recipe.get() {
                FetchState::Loading => view! { <LoadingSpinner/> }.into_any(),
                FetchState::Failed(messages) => view! { <FetchError messages=messages/> }.into_any(),
                FetchState::Loaded(loaded) => match form_mode.get() {
                    Some(mode) => view! {
                        <RecipeForm
                            session=session
                            notifier=notifier
                            mode=mode
                            recipe=Some(loaded)
                            on_saved=on_saved
                            on_close=on_close
                        />
                    }.into_any(),
                    None => {
                        let dial = if session.is_verified() {
                            view! { <SpeedDial label="Recipe actions" actions=actions(&loaded)/> }.into_any()
                        } else if session.user().is_some() {
                            view! { <UnverifiedUserSpeedDial/> }.into_any()
                        } else {
                            ().into_any()
                        };
                        view! {
                            <RecipeDetail recipe=loaded/>
                            {dial}
                        }.into_any()
                    }
                },
            }}
            // Outside the recipe match so an added note or photo doesn't
            // rebuild the dialog that reported it
            {move || recipe_id.get().map(|id| view! {
                <AddNoteDialog open=note_open session=session notifier=notifier recipe_id=id on_added=on_note/>
                <UploadPhotoDialog open=photo_open session=session notifier=notifier recipe_id=id on_uploaded=on_photo/>
                <RateReviewDialog open=rate_open session=session notifier=notifier recipe_id=id/>
            })}
        </section>
    }
}
