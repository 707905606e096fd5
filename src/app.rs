//! Recipeats App
//!
//! Root component: creates the session and notifier, restores the stored
//! login and routes between pages.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{
    GlobalSnackbar, HomePage, LoadingSpinner, LoginForm, NavBar, RecipePage, RecipesHome, SignupForm,
    VerifyEmail,
};
use crate::notify::Notifier;
use crate::session::Session;
use crate::storage;

#[component]
pub fn App() -> impl IntoView {
    let session = Session::new(storage::load_token());
    let notifier = Notifier::default();

    // (Re)load the user whenever the token changes
    Effect::new(move |_| {
        let token = session.token();
        spawn_local(session.bootstrap(token));
    });

    view! {
        <Router>
            <NavBar session=session notifier=notifier/>
            <main class="app-main">
                <Show when=move || !session.is_loading() fallback=|| view! { <LoadingSpinner/> }>
                    <Routes fallback=|| view! { <h1>"Page not found"</h1> }>
                        <Route path=path!("/") view=move || view! { <HomePage session=session/> }/>
                        <Route path=path!("/signup") view=move || view! { <SignupForm session=session notifier=notifier/> }/>
                        <Route path=path!("/login") view=move || view! { <LoginForm session=session notifier=notifier/> }/>
                        <Route path=path!("/recipes") view=move || view! { <RecipesHome session=session notifier=notifier/> }/>
                        <Route path=path!("/recipes/:id") view=move || view! { <RecipePage session=session notifier=notifier/> }/>
                        <Route path=path!("/verify") view=move || view! { <VerifyEmail session=session notifier=notifier/> }/>
                    </Routes>
                </Show>
            </main>
            <GlobalSnackbar notifier=notifier/>
        </Router>
    }
}
