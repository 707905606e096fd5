//! Home Page Component

use leptos::prelude::*;
use leptos_router::components::A;

use crate::session::Session;

#[component]
pub fn HomePage(session: Session) -> impl IntoView {
    view! {
        <section class="home-page">
            <h1>"Recipeats"</h1>
            <p class="tagline">"Save your recipes, fork your friends', and keep notes on every batch."</p>
            {move || match session.user() {
                Some(user) => view! {
                    <p>"Welcome back, " {user.first_name} "!"</p>
                    <A href="/recipes">"Go to your recipes"</A>
                }.into_any(),
                None => view! {
                    <div class="home-actions">
                        <A href="/login">"Log in"</A>
                        <A href="/signup">"Sign up"</A>
                    </div>
                }.into_any(),
            }}
        </section>
    }
}
