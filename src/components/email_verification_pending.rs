//! Email Verification Pending Component
//!
//! Shown to signed-in users who haven't clicked their verification link.

use leptos::prelude::*;

#[component]
pub fn EmailVerificationPending(#[prop(into)] email: String) -> impl IntoView {
    view! {
        <section class="verification-pending">
            <h1>"Verify Your Email"</h1>
            <p>
                {format!(
                    "A verification e-mail has been sent to {} - please click the link in the message to verify your e-mail address.",
                    email
                )}
            </p>
        </section>
    }
}
