//! Recipes List Component
//!
//! Searchable list of recipe cards with a favorites-only filter.

use std::collections::HashSet;

use leptos::prelude::*;

use crate::fetch::FetchState;
use crate::models::RecipeSummary;
use crate::notify::Notifier;
use crate::session::Session;

use super::{FetchError, LoadingSpinner, RecipesListItem};

/// Recipes whose name or description contains `search` (case-insensitive).
/// With `favorites` set, only those ids are kept.
pub fn filter_recipes(
    recipes: &[RecipeSummary],
    search: &str,
    favorites: Option<&HashSet<u32>>,
) -> Vec<RecipeSummary> {
    let needle = search.trim().to_lowercase();
    recipes
        .iter()
        .filter(|r| favorites.map_or(true, |f| f.contains(&r.id)))
        .filter(|r| {
            needle.is_empty()
                || r.name.to_lowercase().contains(&needle)
                || r.description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[component]
pub fn RecipesList(
    recipes: RwSignal<FetchState<Vec<RecipeSummary>>>,
    favorites_only: RwSignal<bool>,
    session: Session,
    notifier: Notifier,
) -> impl IntoView {
    let search = RwSignal::new(String::new());

    let visible = Memo::new(move |_| {
        let favorites = favorites_only.get().then(|| {
            session.user().map(|u| u.favorited_recipes).unwrap_or_default()
        });
        recipes.with(|state| {
            state
                .loaded()
                .map(|list| filter_recipes(list, &search.get(), favorites.as_ref()))
                .unwrap_or_default()
        })
    });

    view! {
        <div class="recipes-list">
            <h1>{move || if favorites_only.get() { "Favorite Recipes" } else { "Recipes" }}</h1>
            <div class="recipes-filters">
                <input
                    type="search"
                    class="recipe-search"
                    placeholder="Search"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <label class="favorites-toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || favorites_only.get()
                        on:change=move |ev| favorites_only.set(event_target_checked(&ev))
                    />
                    "Favorites only"
                </label>
            </div>
            {move || match recipes.get() {
                FetchState::Loading => view! { <LoadingSpinner/> }.into_any(),
                FetchState::Failed(messages) => view! { <FetchError messages=messages/> }.into_any(),
                FetchState::Loaded(_) => view! {
                    <Show
                        when=move || !visible.get().is_empty()
                        fallback=|| view! { <p class="empty-list">"No recipes found."</p> }
                    >
                        <For
                            each=move || visible.get()
                            key=|recipe| recipe.id
                            children=move |recipe| view! {
                                <RecipesListItem recipe=recipe session=session notifier=notifier/>
                            }
                        />
                    </Show>
                }.into_any(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: u32, name: &str, description: &str) -> RecipeSummary {
        RecipeSummary {
            id,
            name: name.into(),
            description: description.into(),
            created_by: "sam".into(),
            meal_name: "Dinner".into(),
            type_name: "Main".into(),
            photo_url: None,
            rating: None,
        }
    }

    fn recipes() -> Vec<RecipeSummary> {
        vec![
            summary(1, "Crab Boil", "Messy"),
            summary(2, "Gumbo", "Dark roux, with crab"),
            summary(3, "Toast", "Breakfast"),
        ]
    }

    #[test]
    fn test_filter_matches_name_or_description() {
        let ids: Vec<u32> = filter_recipes(&recipes(), "CRAB", None).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_filter_blank_search_keeps_all() {
        assert_eq!(filter_recipes(&recipes(), "  ", None).len(), 3);
    }

    #[test]
    fn test_filter_favorites_only() {
        let favorites: HashSet<u32> = [2, 3].into_iter().collect();
        let ids: Vec<u32> = filter_recipes(&recipes(), "crab", Some(&favorites)).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2]);
        assert!(filter_recipes(&recipes(), "", Some(&HashSet::new())).is_empty());
    }
}
