//! Recipes List Item Component

use leptos::prelude::*;
use leptos_router::components::A;

use crate::models::RecipeSummary;
use crate::notify::Notifier;
use crate::routes::AppRoute;
use crate::session::Session;

#[component]
pub fn RecipesListItem(recipe: RecipeSummary, session: Session, notifier: Notifier) -> impl IntoView {
    let id = recipe.id;
    let is_favorite = move || session.is_favorite(id);

    view! {
        <article class="recipes-list-item">
            {recipe.photo_url.clone().map(|url| view! {
                <img class="recipe-thumb" src=url alt=recipe.name.clone()/>
            })}
            <div class="recipe-card-body">
                <h2><A href=AppRoute::Recipe(id).path() attr:class="remove-link">{recipe.name.clone()}</A></h2>
                <p>{recipe.description.clone()}</p>
                <p class="recipe-meta">
                    {format!("By {} | {}, {}", recipe.created_by, recipe.meal_name, recipe.type_name)}
                </p>
                {recipe.rating.map(|rating| view! { <p class="recipe-rating">{format!("★ {:.1}", rating)}</p> })}
            </div>
            <Show when=move || session.is_verified()>
                <button
                    class=move || if is_favorite() { "favorite-btn active" } else { "favorite-btn" }
                    aria-label=move || if is_favorite() { "Remove from favorites" } else { "Add to favorites" }
                    on:click=move |_| session.request_favorite(notifier, id, !is_favorite())
                >
                    {move || if is_favorite() { "★" } else { "☆" }}
                </button>
            </Show>
        </article>
    }
}
