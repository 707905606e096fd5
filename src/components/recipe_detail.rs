//! Recipe Detail Component
//!
//! Read-only view of a saved recipe.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::models::{Recipe, RecipeItem};
use crate::routes::AppRoute;

/// Ingredient lines in order, grouped by subsection in order of first
/// appearance. Lines without a subsection form the leading `None` group.
pub fn group_items_by_subsection(items: &[RecipeItem]) -> Vec<(Option<String>, Vec<RecipeItem>)> {
    let mut sorted: Vec<&RecipeItem> = items.iter().collect();
    sorted.sort_by_key(|item| item.order);

    let mut groups: Vec<(Option<String>, Vec<RecipeItem>)> = Vec::new();
    for item in sorted {
        let label = item.subsection.clone().filter(|s| !s.is_empty());
        match groups.iter_mut().find(|(l, _)| *l == label) {
            Some((_, lines)) => lines.push(item.clone()),
            None => groups.push((label, vec![item.clone()])),
        }
    }
    groups.sort_by_key(|(label, _)| label.is_some());
    groups
}

#[component]
pub fn RecipeDetail(recipe: Recipe) -> impl IntoView {
    let groups = group_items_by_subsection(&recipe.items);
    let mut steps = recipe.steps.clone();
    steps.sort_by_key(|s| s.order);

    view! {
        <article class="recipe-detail">
            {recipe.photo_url.clone().map(|url| view! {
                <img class="cover-photo" src=url alt=recipe.name.clone()/>
            })}
            <h1>{recipe.name.clone()}</h1>
            <h3>{recipe.description.clone()}</h3>
            <p class="recipe-meta">
                {format!("By {} | {}, {}", recipe.created_by, recipe.meal_name, recipe.type_name)}
                {recipe.is_private.then(|| view! { <span class="private-badge">"Private"</span> })}
            </p>
            {recipe.forked_from.map(|source| view! {
                <p class="forked-from">
                    "Forked from " <A href=AppRoute::Recipe(source).path()>"another recipe"</A>
                </p>
            })}

            <section class="recipe-ingredients">
                <h2>"Ingredients"</h2>
                {groups.into_iter().map(|(label, items)| view! {
                    <div class="ingredient-group">
                        {label.map(|l| view! { <h4>{l}</h4> })}
                        <ul>
                            {items.into_iter().map(|item| view! { <li>{item.display_text()}</li> }).collect_view()}
                        </ul>
                    </div>
                }).collect_view()}
            </section>

            <section class="recipe-steps">
                <h2>"Steps"</h2>
                <ol>
                    {steps.into_iter().map(|step| view! { <li>{step.description}</li> }).collect_view()}
                </ol>
            </section>

            {(!recipe.notes.is_empty()).then(|| view! {
                <section class="recipe-notes">
                    <h2>"Notes"</h2>
                    <ul>
                        {recipe.notes.clone().into_iter().map(|note| view! {
                            <li class="recipe-note">
                                <p>{note.note}</p>
                                <small>
                                    {note.username.map(|u| format!("{} ", u))}
                                    {note.time_stamp}
                                </small>
                            </li>
                        }).collect_view()}
                    </ul>
                </section>
            })}
        </article>
    }
}
