//! Global Snackbar Component
//!
//! Renders the notifier's current notice at the bottom of the page.

use leptos::prelude::*;

use crate::notify::Notifier;

#[component]
pub fn GlobalSnackbar(notifier: Notifier) -> impl IntoView {
    view! {
        {move || notifier.current().map(|notice| view! {
            <div class=notice.severity.css_class() role="alert">
                <span class="snackbar-message">{notice.message}</span>
                <button class="snackbar-close" on:click=move |_| notifier.dismiss()>"×"</button>
            </div>
        })}
    }
}
