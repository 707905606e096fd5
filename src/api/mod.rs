//! REST Client
//!
//! Thin wrapper over the recipe backend, organized by resource. Every call
//! carries the bearer token when one is held; failures come back as
//! [`ApiError`] with the backend's messages normalized to a list.

mod recipes;
mod catalog;
mod users;
mod photos;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::models::{
    BasicsPayload, ItemPayload, NewRecipe, NotePayload, Recipe, RecipeNote, StepPayload, UserProfile,
};

/// Backend calls the submission, session and favorite flows depend on
#[allow(async_fn_in_trait)]
pub trait RecipeBackend {
    async fn get_recipe(&self, recipe_id: u32) -> Result<Recipe, ApiError>;
    async fn create_recipe(&self, recipe: &NewRecipe) -> Result<Recipe, ApiError>;
    async fn add_note(&self, recipe_id: u32, note: &NotePayload) -> Result<RecipeNote, ApiError>;
    async fn update_basics(&self, recipe_id: u32, basics: &BasicsPayload) -> Result<(), ApiError>;
    async fn update_items(&self, recipe_id: u32, items: &[ItemPayload]) -> Result<(), ApiError>;
    async fn update_steps(&self, recipe_id: u32, steps: &[StepPayload]) -> Result<(), ApiError>;
    async fn update_notes(&self, recipe_id: u32, notes: &[NotePayload], username: &str) -> Result<(), ApiError>;
    async fn get_user(&self, username: &str) -> Result<UserProfile, ApiError>;
    async fn favorite_recipe(&self, username: &str, recipe_id: u32) -> Result<(), ApiError>;
    async fn unfavorite_recipe(&self, username: &str, recipe_id: u32) -> Result<(), ApiError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token,
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        tracing::debug!(endpoint, "GET");
        let response = self
            .authorize(Request::get(&self.url(endpoint)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_response(response).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, endpoint: &str, body: &B) -> Result<T, ApiError> {
        tracing::debug!(endpoint, "POST");
        self.send_json(Request::post(&self.url(endpoint)), body).await
    }

    async fn patch<B: Serialize, T: DeserializeOwned>(&self, endpoint: &str, body: &B) -> Result<T, ApiError> {
        tracing::debug!(endpoint, "PATCH");
        self.send_json(Request::patch(&self.url(endpoint)), body).await
    }

    async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        tracing::debug!(endpoint, "DELETE");
        let response = self
            .authorize(Request::delete(&self.url(endpoint)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_response(response).await
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self
            .authorize(builder)
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_response(response).await
    }
}

async fn read_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    if !response.ok() {
        let err = ApiError::from_error_body(status, &body);
        tracing::error!(status, error = %err, "API error");
        return Err(err);
    }
    parse_body(&body)
}

/// Parse a success body; an empty body reads as JSON `null`
fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

impl RecipeBackend for ApiClient {
    async fn get_recipe(&self, recipe_id: u32) -> Result<Recipe, ApiError> {
        ApiClient::get_recipe(self, recipe_id).await
    }

    async fn create_recipe(&self, recipe: &NewRecipe) -> Result<Recipe, ApiError> {
        ApiClient::create_recipe(self, recipe).await
    }

    async fn add_note(&self, recipe_id: u32, note: &NotePayload) -> Result<RecipeNote, ApiError> {
        ApiClient::add_note(self, recipe_id, note).await
    }

    async fn update_basics(&self, recipe_id: u32, basics: &BasicsPayload) -> Result<(), ApiError> {
        ApiClient::update_basics(self, recipe_id, basics).await
    }

    async fn update_items(&self, recipe_id: u32, items: &[ItemPayload]) -> Result<(), ApiError> {
        ApiClient::update_items(self, recipe_id, items).await
    }

    async fn update_steps(&self, recipe_id: u32, steps: &[StepPayload]) -> Result<(), ApiError> {
        ApiClient::update_steps(self, recipe_id, steps).await
    }

    async fn update_notes(&self, recipe_id: u32, notes: &[NotePayload], username: &str) -> Result<(), ApiError> {
        ApiClient::update_notes(self, recipe_id, notes, username).await
    }

    async fn get_user(&self, username: &str) -> Result<UserProfile, ApiError> {
        ApiClient::get_user(self, username).await
    }

    async fn favorite_recipe(&self, username: &str, recipe_id: u32) -> Result<(), ApiError> {
        ApiClient::favorite_recipe(self, username, recipe_id).await
    }

    async fn unfavorite_recipe(&self, username: &str, recipe_id: u32) -> Result<(), ApiError> {
        ApiClient::unfavorite_recipe(self, username, recipe_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_endpoint() {
        let api = ApiClient::new("http://localhost:3001/", None);
        assert_eq!(api.url("recipes/4/notes"), "http://localhost:3001/recipes/4/notes");
    }

    #[test]
    fn test_parse_body_accepts_empty_for_unit() {
        let unit: () = parse_body("").unwrap();
        assert_eq!(unit, ());

        let value: serde_json::Value = parse_body(r#"{"recipe":{"id":1}}"#).unwrap();
        assert_eq!(value["recipe"]["id"], 1);

        let err = parse_body::<Vec<u32>>("{").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
