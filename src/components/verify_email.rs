//! Verify Email Component
//!
//! Target of the e-mailed verification link (`/verify?token=...`).

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

use crate::fetch::FetchState;
use crate::notify::{Notifier, Notify};
use crate::session::Session;

use super::{FetchError, LoadingSpinner};

#[component]
pub fn VerifyEmail(session: Session, notifier: Notifier) -> impl IntoView {
    let query = use_query_map();
    let state = RwSignal::new(FetchState::<()>::Loading);

    Effect::new(move |_| {
        let Some(token) = query.with_untracked(|q| q.get("token")) else {
            state.set(FetchState::Failed(vec!["Verification link is missing its token.".to_string()]));
            return;
        };
        spawn_local(async move {
            let result = session.api().verify_email(&token).await;
            if let Ok(session_token) = &result {
                session.sign_in(session_token.clone());
                notifier.success("E-mail verified!");
            }
            state.set(FetchState::from_result(result.map(|_| ())));
        });
    });

    view! {
        <section class="verify-email">
            {move || match state.get() {
                FetchState::Loading => view! {
                    <h1>"Verifying..."</h1>
                    <LoadingSpinner/>
                }.into_any(),
                FetchState::Loaded(()) => view! {
                    <h1>"Success!"</h1>
                    <p>"E-mail successfully verified - "</p>
                    <p><A href="/recipes">"click here to get cookin'!"</A></p>
                }.into_any(),
                FetchState::Failed(messages) => view! {
                    <h1>"Verification failed"</h1>
                    <FetchError messages=messages/>
                }.into_any(),
            }}
        </section>
    }
}
