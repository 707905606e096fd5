//! User Session
//!
//! Turns a stored bearer token into the signed-in user, and keeps that
//! user's favorites in step with the backend.

use std::collections::HashSet;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Deserialize;

use crate::api::{ApiClient, RecipeBackend};
use crate::config::API_BASE_URL;
use crate::error::SessionError;
use crate::models::UserProfile;
use crate::notify::{Notifier, Notify};
use crate::storage;

/// Claims read from the token payload. The signature is not checked here;
/// the backend verifies it on every request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenClaims {
    pub username: String,
    #[serde(default)]
    pub is_verified: bool,
}

pub fn decode_token(token: &str) -> Result<TokenClaims, SessionError> {
    let mut parts = token.split('.');
    let payload = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(_), Some(payload), Some(_), None) => payload,
        _ => return Err(SessionError::MalformedToken),
    };
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| SessionError::PayloadEncoding(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| SessionError::MissingClaims(e.to_string()))
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_verified: bool,
    pub favorited_recipes: HashSet<u32>,
}

impl User {
    pub fn from_parts(claims: TokenClaims, profile: UserProfile) -> Self {
        User {
            username: claims.username,
            first_name: profile.first_name,
            last_name: profile.last_name,
            email: profile.email,
            is_verified: claims.is_verified,
            favorited_recipes: profile.favorited_recipes.into_iter().collect(),
        }
    }

    pub fn is_favorite(&self, recipe_id: u32) -> bool {
        self.favorited_recipes.contains(&recipe_id)
    }

    pub fn set_favorite(&mut self, recipe_id: u32, favorite: bool) {
        if favorite {
            self.favorited_recipes.insert(recipe_id);
        } else {
            self.favorited_recipes.remove(&recipe_id);
        }
    }
}

/// Decode the token and fetch the matching profile
pub async fn load_user<B: RecipeBackend>(backend: &B, token: &str) -> Result<User, SessionError> {
    let claims = decode_token(token)?;
    let profile = backend.get_user(&claims.username).await?;
    Ok(User::from_parts(claims, profile))
}

/// Bring the backend's favorite state for `recipe_id` to `favorite`.
/// Returns the membership to record locally, or `None` if the call failed
/// and local state must stay as it was.
pub async fn sync_favorite<B: RecipeBackend, N: Notify>(
    backend: &B,
    notifier: &N,
    user: &User,
    recipe_id: u32,
    favorite: bool,
) -> Option<bool> {
    if user.is_favorite(recipe_id) == favorite {
        return Some(favorite);
    }

    let result = if favorite {
        backend.favorite_recipe(&user.username, recipe_id).await
    } else {
        backend.unfavorite_recipe(&user.username, recipe_id).await
    };

    match result {
        Ok(()) => {
            notifier.success(if favorite { "Added to favorites" } else { "Removed from favorites" });
            Some(favorite)
        }
        Err(e) => {
            tracing::warn!(recipe_id, error = %e, "favorite sync failed");
            notifier.errors(&e.messages());
            None
        }
    }
}

/// Reactive session handle passed to components that need the user
#[derive(Clone, Copy)]
pub struct Session {
    token: RwSignal<Option<String>>,
    user: RwSignal<Option<User>>,
    loading: RwSignal<bool>,
}

impl Session {
    pub fn new(token: Option<String>) -> Self {
        Self {
            loading: RwSignal::new(token.is_some()),
            token: RwSignal::new(token),
            user: RwSignal::new(None),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.token.get()
    }

    pub fn user(&self) -> Option<User> {
        self.user.get()
    }

    pub fn username(&self) -> Option<String> {
        self.user.with(|u| u.as_ref().map(|u| u.username.clone()))
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    pub fn is_verified(&self) -> bool {
        self.user.with(|u| u.as_ref().map(|u| u.is_verified).unwrap_or(false))
    }

    pub fn is_favorite(&self, recipe_id: u32) -> bool {
        self.user.with(|u| u.as_ref().map(|u| u.is_favorite(recipe_id)).unwrap_or(false))
    }

    /// Client for the current token
    pub fn api(&self) -> ApiClient {
        ApiClient::new(API_BASE_URL, self.token.get_untracked())
    }

    /// Store a fresh token; the app's bootstrap effect loads the user.
    /// `loading` is only raised for the restore at startup so pages stay
    /// mounted through a login.
    pub fn sign_in(&self, token: String) {
        storage::save_token(&token);
        self.token.set(Some(token));
    }

    pub fn logout(&self) {
        storage::clear_token();
        self.token.set(None);
        self.user.set(None);
        self.loading.set(false);
    }

    pub fn update_user(&self, f: impl FnOnce(&mut User)) {
        self.user.update(|user| {
            if let Some(user) = user {
                f(user);
            }
        });
    }

    /// Ask the backend to (un)favorite `recipe_id`; the user's set changes
    /// once the call succeeds
    pub fn request_favorite(self, notifier: Notifier, recipe_id: u32, favorite: bool) {
        let Some(user) = self.user.get_untracked() else {
            notifier.warning("Log in to save favorites.");
            return;
        };
        spawn_local(async move {
            if let Some(member) = sync_favorite(&self.api(), &notifier, &user, recipe_id, favorite).await {
                self.update_user(|u| u.set_favorite(recipe_id, member));
            }
        });
    }

    /// Populate the user for `token`. Failures leave the session empty.
    pub async fn bootstrap(self, token: Option<String>) {
        let Some(token) = token else {
            self.user.set(None);
            self.loading.set(false);
            return;
        };

        let api = ApiClient::new(API_BASE_URL, Some(token.clone()));
        let result = load_user(&api, &token).await;

        // Logged out or re-signed-in while the profile was loading
        if self.token.get_untracked().as_deref() != Some(token.as_str()) {
            return;
        }
        match result {
            Ok(user) => {
                tracing::info!(username = %user.username, "session restored");
                self.user.set(Some(user));
            }
            Err(e) => {
                tracing::warn!(error = %e, "session bootstrap failed");
                self.user.set(None);
            }
        }
        self.loading.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::notify::Severity;
    use crate::testing::{FakeBackend, RecordingNotifier};
    use futures::executor::block_on;

    fn make_token(payload: &str) -> String {
        format!("eyJhbGciOiJIUzI1NiJ9.{}.c2lnbmF0dXJl", URL_SAFE_NO_PAD.encode(payload))
    }

    fn make_user(favorites: &[u32]) -> User {
        User {
            username: "sam".into(),
            first_name: "Sam".into(),
            last_name: "Cook".into(),
            email: "sam@example.com".into(),
            is_verified: true,
            favorited_recipes: favorites.iter().copied().collect(),
        }
    }

    #[test]
    fn test_decode_token_reads_claims() {
        let token = make_token(r#"{"username":"sam","isVerified":true,"iat":1700000000}"#);
        let claims = decode_token(&token).unwrap();
        assert_eq!(claims, TokenClaims { username: "sam".into(), is_verified: true });
    }

    #[test]
    fn test_decode_token_defaults_unverified() {
        let claims = decode_token(&make_token(r#"{"username":"new_user"}"#)).unwrap();
        assert!(!claims.is_verified);
    }

    #[test]
    fn test_decode_token_rejects_garbage() {
        assert_eq!(decode_token("not-a-token"), Err(SessionError::MalformedToken));
        assert_eq!(decode_token("a.b.c.d"), Err(SessionError::MalformedToken));
        assert!(matches!(decode_token("a.@@@.c"), Err(SessionError::PayloadEncoding(_))));
        assert!(matches!(decode_token(&make_token(r#"{"sub":1}"#)), Err(SessionError::MissingClaims(_))));
    }

    #[test]
    fn test_favorite_then_unfavorite_restores_membership() {
        let backend = FakeBackend::default();
        let notifier = RecordingNotifier::default();
        let mut user = make_user(&[3]);

        for favorite in [true, false] {
            let result = block_on(sync_favorite(&backend, &notifier, &user, 5, favorite));
            assert_eq!(result, Some(favorite));
            user.set_favorite(5, favorite);
            assert_eq!(user.is_favorite(5), favorite);
        }

        assert_eq!(user.favorited_recipes, [3].into_iter().collect());
        assert_eq!(
            backend.calls(),
            vec!["favorite_recipe sam 5".to_string(), "unfavorite_recipe sam 5".to_string()]
        );
        assert_eq!(notifier.severities(), vec![Severity::Success, Severity::Success]);
    }

    #[test]
    fn test_load_user_merges_profile() {
        let backend = FakeBackend::default();
        let token = make_token(r#"{"username":"sam","isVerified":false}"#);

        let user = block_on(load_user(&backend, &token)).unwrap();

        assert_eq!(user.username, "sam");
        assert_eq!(user.email, "sam@example.com");
        assert!(!user.is_verified);
        assert!(user.is_favorite(1));
        assert_eq!(backend.calls(), vec!["get_user sam".to_string()]);
    }

    #[test]
    fn test_load_user_fails_without_profile() {
        let backend = FakeBackend::failing(&["get_user"]);
        let token = make_token(r#"{"username":"sam"}"#);
        let err = block_on(load_user(&backend, &token)).unwrap_err();
        assert!(matches!(err, SessionError::Api(ApiError::Backend { status: 500, .. })));
    }

    #[test]
    fn test_sync_favorite_adds_after_success() {
        let backend = FakeBackend::default();
        let notifier = RecordingNotifier::default();
        let user = make_user(&[]);

        let result = block_on(sync_favorite(&backend, &notifier, &user, 8, true));

        assert_eq!(result, Some(true));
        assert_eq!(backend.calls(), vec!["favorite_recipe sam 8".to_string()]);
        assert_eq!(notifier.severities(), vec![Severity::Success]);
    }

    #[test]
    fn test_sync_favorite_removes_member() {
        let backend = FakeBackend::default();
        let notifier = RecordingNotifier::default();
        let mut user = make_user(&[8]);

        let result = block_on(sync_favorite(&backend, &notifier, &user, 8, false));
        if let Some(favorite) = result {
            user.set_favorite(8, favorite);
        }

        assert!(!user.is_favorite(8));
        assert_eq!(backend.calls(), vec!["unfavorite_recipe sam 8".to_string()]);
    }

    #[test]
    fn test_sync_favorite_failure_keeps_local_state() {
        let backend = FakeBackend::failing(&["favorite_recipe"]);
        let notifier = RecordingNotifier::default();
        let mut user = make_user(&[]);

        let result = block_on(sync_favorite(&backend, &notifier, &user, 8, true));
        if let Some(favorite) = result {
            user.set_favorite(8, favorite);
        }

        assert_eq!(result, None);
        assert!(!user.is_favorite(8));
        assert_eq!(notifier.severities(), vec![Severity::Error]);
    }

    #[test]
    fn test_sync_favorite_skips_call_when_already_matching() {
        let backend = FakeBackend::default();
        let notifier = RecordingNotifier::default();
        let user = make_user(&[8]);

        assert_eq!(block_on(sync_favorite(&backend, &notifier, &user, 8, true)), Some(true));
        assert!(backend.calls().is_empty());
        assert!(notifier.notices().is_empty());
    }
}
