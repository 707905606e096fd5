//! Recipes Home Component
//!
//! The `/recipes` page: list, add-recipe form and the page's speed dial.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::draft::FormMode;
use crate::fetch::FetchState;
use crate::models::{Recipe, RecipeSummary};
use crate::notify::Notifier;
use crate::routes::{use_redirect, AppRoute};
use crate::session::Session;

use super::{DialAction, EmailVerificationPending, RecipeForm, RecipesList, SpeedDial, UnverifiedUserSpeedDial};

#[component]
pub fn RecipesHome(session: Session, notifier: Notifier) -> impl IntoView {
    let redirect = use_redirect();
    let recipes = RwSignal::new(FetchState::<Vec<RecipeSummary>>::Loading);
    let favorites_only = RwSignal::new(false);
    let adding = RwSignal::new(false);

    // Reload when the token changes (login/logout shows different private recipes)
    Effect::new(move |_| {
        let _ = session.token();
        recipes.set(FetchState::Loading);
        spawn_local(async move {
            let result = session.api().list_recipes().await;
            if let Err(e) = &result {
                tracing::warn!(error = %e, "failed to load recipes");
            }
            recipes.set(FetchState::from_result(result));
        });
    });

    let on_saved = Callback::new(move |(recipe, _mode): (Recipe, FormMode)| {
        adding.set(false);
        redirect.set(Some(AppRoute::Recipe(recipe.id)));
    });
    let on_close = Callback::new(move |_| adding.set(false));

    view! {
        <section class="recipes-home">
            {move || session.user().filter(|u| !u.is_verified).map(|u| view! {
                <EmailVerificationPending email=u.email/>
            })}
            <Show
                when=move || adding.get()
                fallback=move || view! {
                    <RecipesList
                        recipes=recipes
                        favorites_only=favorites_only
                        session=session
                        notifier=notifier
                    />
                }
            >
                <RecipeForm
                    session=session
                    notifier=notifier
                    mode=FormMode::Add
                    recipe=None
                    on_saved=on_saved
                    on_close=on_close
                />
            </Show>
            {move || {
                if session.is_verified() {
                    let actions = vec![
                        DialAction::new("📝", "Add a Recipe", move || adding.set(true)),
                        DialAction::new("★", "Show Favorites", move || favorites_only.update(|f| *f = !*f)),
                    ];
                    view! { <SpeedDial label="Recipe list actions" actions=actions/> }.into_any()
                } else if session.user().is_some() {
                    view! { <UnverifiedUserSpeedDial/> }.into_any()
                } else {
                    ().into_any()
                }
            }}
        </section>
    }
}
