//! Recipe Endpoints
//!
//! `recipes`, `recipes/{id}` and the per-section update routes.

use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{
    BasicsPayload, ItemPayload, NewRecipe, NotePayload, Recipe, RecipeNote, RecipeSummary, StepPayload,
};

// ========================
// Envelopes
// ========================

#[derive(Deserialize)]
struct RecipesEnvelope {
    recipes: Vec<RecipeSummary>,
}

#[derive(Deserialize)]
struct RecipeEnvelope {
    recipe: Recipe,
}

#[derive(Deserialize)]
struct NoteEnvelope {
    note: RecipeNote,
}

#[derive(Serialize)]
struct ItemsBody<'a> {
    items: &'a [ItemPayload],
}

#[derive(Serialize)]
struct StepsBody<'a> {
    steps: &'a [StepPayload],
}

#[derive(Serialize)]
struct NotesBody<'a> {
    notes: &'a [NotePayload],
    username: &'a str,
}

// ========================
// Calls
// ========================

impl ApiClient {
    pub async fn list_recipes(&self) -> Result<Vec<RecipeSummary>, ApiError> {
        let envelope: RecipesEnvelope = self.get("recipes").await?;
        Ok(envelope.recipes)
    }

    pub async fn get_recipe(&self, recipe_id: u32) -> Result<Recipe, ApiError> {
        let envelope: RecipeEnvelope = self.get(&format!("recipes/{}", recipe_id)).await?;
        Ok(envelope.recipe)
    }

    pub async fn create_recipe(&self, recipe: &NewRecipe) -> Result<Recipe, ApiError> {
        let envelope: RecipeEnvelope = self.post("recipes", recipe).await?;
        Ok(envelope.recipe)
    }

    pub async fn add_note(&self, recipe_id: u32, note: &NotePayload) -> Result<RecipeNote, ApiError> {
        let envelope: NoteEnvelope = self.post(&format!("recipes/{}/notes", recipe_id), note).await?;
        Ok(envelope.note)
    }

    pub async fn update_basics(&self, recipe_id: u32, basics: &BasicsPayload) -> Result<(), ApiError> {
        let _: IgnoredAny = self.patch(&format!("recipes/{}/basics", recipe_id), basics).await?;
        Ok(())
    }

    pub async fn update_items(&self, recipe_id: u32, items: &[ItemPayload]) -> Result<(), ApiError> {
        let _: IgnoredAny = self.patch(&format!("recipes/{}/items", recipe_id), &ItemsBody { items }).await?;
        Ok(())
    }

    pub async fn update_steps(&self, recipe_id: u32, steps: &[StepPayload]) -> Result<(), ApiError> {
        let _: IgnoredAny = self.patch(&format!("recipes/{}/steps", recipe_id), &StepsBody { steps }).await?;
        Ok(())
    }

    pub async fn update_notes(&self, recipe_id: u32, notes: &[NotePayload], username: &str) -> Result<(), ApiError> {
        let body = NotesBody { notes, username };
        let _: IgnoredAny = self.patch(&format!("recipes/{}/notes", recipe_id), &body).await?;
        Ok(())
    }
}
