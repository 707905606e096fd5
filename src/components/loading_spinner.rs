//! Loading Spinner Component
//!
//! Placeholder while a fetch is in flight, plus the error panel shown when it
//! fails.

use leptos::prelude::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="loading-spinner" role="status">
            <div class="spinner"></div>
            <span class="visually-hidden">"Loading..."</span>
        </div>
    }
}

/// Messages from a failed fetch
#[component]
pub fn FetchError(messages: Vec<String>) -> impl IntoView {
    view! {
        <div class="fetch-error" role="alert">
            <h2>"Something went wrong"</h2>
            <ul>
                {messages.into_iter().map(|m| view! { <li>{m}</li> }).collect_view()}
            </ul>
        </div>
    }
}
