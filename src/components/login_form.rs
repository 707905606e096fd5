//! Login Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::LoginCredentials;
use crate::notify::{Notifier, Notify};
use crate::routes::{use_redirect, AppRoute};
use crate::session::Session;

#[component]
pub fn LoginForm(session: Session, notifier: Notifier) -> impl IntoView {
    let redirect = use_redirect();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let credentials = LoginCredentials {
            username: username.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        if credentials.username.is_empty() || credentials.password.is_empty() {
            notifier.warning("Enter your username and password.");
            return;
        }

        submitting.set(true);
        spawn_local(async move {
            match session.api().login(&credentials).await {
                Ok(token) => {
                    tracing::info!(username = %credentials.username, "logged in");
                    session.sign_in(token);
                    notifier.success("Welcome back!");
                    redirect.set(Some(AppRoute::Recipes));
                }
                Err(e) => notifier.errors(&e.messages()),
            }
            submitting.set(false);
        });
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <h1>"Log In"</h1>
            <label>
                "Username"
                <input
                    type="text"
                    name="username"
                    autocomplete="username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Password"
                <input
                    type="password"
                    name="password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </label>
            <button type="submit" disabled=move || submitting.get()>"Log in"</button>
        </form>
    }
}
