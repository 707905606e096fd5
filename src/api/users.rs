//! User Endpoints
//!
//! Signup, login, email verification, profiles and favorites.

use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{LoginCredentials, SignupData, UserProfile};
use crate::routes::encode_component;

#[derive(Deserialize)]
struct TokenEnvelope {
    token: String,
}

#[derive(Deserialize)]
struct UserEnvelope {
    user: UserProfile,
}

#[derive(Serialize)]
struct VerifyBody<'a> {
    token: &'a str,
}

impl ApiClient {
    /// Register; answers with a token for the new, still unverified, user
    pub async fn signup(&self, data: &SignupData) -> Result<String, ApiError> {
        let envelope: TokenEnvelope = self.post("users/signup", data).await?;
        Ok(envelope.token)
    }

    pub async fn login(&self, credentials: &LoginCredentials) -> Result<String, ApiError> {
        let envelope: TokenEnvelope = self.post("users/login", credentials).await?;
        Ok(envelope.token)
    }

    /// Trade the emailed verification token for a verified session token
    pub async fn verify_email(&self, token: &str) -> Result<String, ApiError> {
        let envelope: TokenEnvelope = self.post("users/verify", &VerifyBody { token }).await?;
        Ok(envelope.token)
    }

    pub async fn get_user(&self, username: &str) -> Result<UserProfile, ApiError> {
        let envelope: UserEnvelope = self.get(&format!("users/{}", encode_component(username))).await?;
        Ok(envelope.user)
    }

    pub async fn favorite_recipe(&self, username: &str, recipe_id: u32) -> Result<(), ApiError> {
        let endpoint = format!("users/{}/favorites/{}", encode_component(username), recipe_id);
        let _: IgnoredAny = self.post(&endpoint, &serde_json::json!({})).await?;
        Ok(())
    }

    pub async fn unfavorite_recipe(&self, username: &str, recipe_id: u32) -> Result<(), ApiError> {
        let endpoint = format!("users/{}/favorites/{}", encode_component(username), recipe_id);
        let _: IgnoredAny = self.delete(&endpoint).await?;
        Ok(())
    }
}
