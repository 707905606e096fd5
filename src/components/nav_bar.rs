//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;

use crate::notify::{Notifier, Notify};
use crate::routes::{use_redirect, AppRoute};
use crate::session::Session;

#[component]
pub fn NavBar(session: Session, notifier: Notifier) -> impl IntoView {
    let redirect = use_redirect();

    let logout = move |_| {
        session.logout();
        notifier.success("Logged out.");
        redirect.set(Some(AppRoute::Home));
    };

    view! {
        <nav class="nav-bar">
            <A href="/" attr:class="nav-brand">"Recipeats"</A>
            <div class="nav-links">
                <Show
                    when=move || session.user().is_some()
                    fallback=|| view! {
                        <A href="/login">"Log in"</A>
                        <A href="/signup">"Sign up"</A>
                    }
                >
                    <A href="/recipes">"Recipes"</A>
                    <span class="nav-user">{move || session.username().unwrap_or_default()}</span>
                    <button class="nav-logout" on:click=logout>"Log out"</button>
                </Show>
            </div>
        </nav>
    }
}
