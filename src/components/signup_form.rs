//! Signup Form Component
//!
//! Registration form. The new account starts unverified; the backend mails
//! a verification link.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::SignupData;
use crate::notify::{Notifier, Notify};
use crate::routes::{use_redirect, AppRoute};
use crate::session::Session;

/// Client-side checks run before the signup call
pub fn validate_signup(data: &SignupData) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    let required = [
        ("First name", &data.first_name),
        ("Last name", &data.last_name),
        ("E-mail", &data.email),
        ("Username", &data.username),
        ("Password", &data.password),
    ];
    for (label, value) in required {
        if value.trim().is_empty() {
            errors.push(format!("{} is required.", label));
        }
    }
    if !data.email.trim().is_empty() && !data.email.contains('@') {
        errors.push("E-mail address is not valid.".to_string());
    }
    if data.password != data.confirm_password {
        errors.push("Passwords do not match.".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[component]
pub fn SignupForm(session: Session, notifier: Notifier) -> impl IntoView {
    let redirect = use_redirect();
    let form = RwSignal::new(SignupData::default());
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let data = form.get_untracked();
        if let Err(errors) = validate_signup(&data) {
            notifier.errors(&errors);
            return;
        }

        submitting.set(true);
        spawn_local(async move {
            match session.api().signup(&data).await {
                Ok(token) => {
                    tracing::info!(username = %data.username, "signed up");
                    session.sign_in(token);
                    notifier.success("Account created! Check your e-mail to verify it.");
                    redirect.set(Some(AppRoute::Recipes));
                }
                Err(e) => notifier.errors(&e.messages()),
            }
            submitting.set(false);
        });
    };

    // (label, input name, input type, getter, setter)
    let field = move |label: &'static str,
                      name: &'static str,
                      kind: &'static str,
                      get: fn(&SignupData) -> String,
                      set: fn(&mut SignupData, String)| {
        view! {
            <label>
                {label}
                <input
                    type=kind
                    name=name
                    prop:value=move || form.with(get)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| set(f, value));
                    }
                />
            </label>
        }
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <h1>"Sign Up"</h1>
            {field("First Name", "firstName", "text", |f| f.first_name.clone(), |f, v| f.first_name = v)}
            {field("Last Name", "lastName", "text", |f| f.last_name.clone(), |f, v| f.last_name = v)}
            {field("E-mail", "email", "email", |f| f.email.clone(), |f, v| f.email = v)}
            {field("Username", "username", "text", |f| f.username.clone(), |f, v| f.username = v)}
            {field("Password", "password", "password", |f| f.password.clone(), |f, v| f.password = v)}
            {field("Confirm Password", "confirmPassword", "password", |f| f.confirm_password.clone(), |f, v| f.confirm_password = v)}
            <button type="submit" disabled=move || submitting.get()>"Sign up"</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> SignupData {
        SignupData {
            first_name: "Sam".into(),
            last_name: "Cook".into(),
            email: "sam@example.com".into(),
            username: "sam".into(),
            password: "hunter22".into(),
            confirm_password: "hunter22".into(),
            bio: String::new(),
        }
    }

    #[test]
    fn test_validate_signup_accepts_complete_form() {
        assert_eq!(validate_signup(&filled()), Ok(()));
    }

    #[test]
    fn test_validate_signup_password_mismatch() {
        let mut data = filled();
        data.confirm_password = "hunter23".into();
        assert_eq!(validate_signup(&data), Err(vec!["Passwords do not match.".to_string()]));
    }

    #[test]
    fn test_validate_signup_lists_missing_fields() {
        let mut data = filled();
        data.first_name = "  ".into();
        data.email = "sam.example.com".into();
        let errors = validate_signup(&data).unwrap_err();
        assert_eq!(
            errors,
            vec!["First name is required.".to_string(), "E-mail address is not valid.".to_string()]
        );
    }
}
