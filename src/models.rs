//! Frontend Models
//!
//! Data structures matching the backend's JSON (camelCase on the wire).

use serde::{Deserialize, Serialize};

/// Recipe card shown in the list view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub created_by: String,
    #[serde(default)]
    pub meal_name: String,
    #[serde(default)]
    pub type_name: String,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
}

/// One ingredient line of a saved recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeItem {
    pub id: u32,
    pub amount: f64,
    #[serde(default)]
    pub unit: Option<String>,
    pub ingredient: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub subsection: Option<String>,
    pub order: u32,
}

impl RecipeItem {
    /// "1.5 cup flour, sifted"
    pub fn display_text(&self) -> String {
        let mut text = format_amount(self.amount);
        if let Some(unit) = self.unit.as_deref().filter(|u| !u.is_empty()) {
            text.push(' ');
            text.push_str(unit);
        }
        if !self.ingredient.is_empty() {
            text.push(' ');
            text.push_str(&self.ingredient);
        }
        if let Some(description) = self.description.as_deref().filter(|d| !d.is_empty()) {
            text.push_str(", ");
            text.push_str(description);
        }
        text
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeStep {
    pub id: u32,
    pub description: String,
    pub order: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeNote {
    pub id: u32,
    pub note: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub time_stamp: Option<String>,
}

/// Full recipe as returned by `recipes/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub created_by: String,
    #[serde(default)]
    pub meal_name: String,
    #[serde(default)]
    pub type_name: String,
    #[serde(rename = "private", default)]
    pub is_private: bool,
    #[serde(default)]
    pub items: Vec<RecipeItem>,
    #[serde(default)]
    pub steps: Vec<RecipeStep>,
    #[serde(default)]
    pub notes: Vec<RecipeNote>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub forked_from: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipePhoto {
    pub id: u32,
    pub url: String,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub is_cover_image: bool,
}

// ========================
// Catalog
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeType {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub short: String,
    pub singular: String,
    pub plural: String,
}

impl Unit {
    /// "tbsp (tablespoons)"
    pub fn label(&self) -> String {
        format!("{} ({})", self.short, self.plural)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

// ========================
// Users
// ========================

/// Profile returned by `users/{username}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub favorited_recipes: Vec<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    #[serde(skip_serializing)]
    pub confirm_password: String,
    pub bio: String,
}

// ========================
// Request payloads
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub amount: f64,
    pub unit: Option<String>,
    pub ingredient: String,
    pub description: Option<String>,
    pub subsection: Option<String>,
    pub order: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub description: String,
    pub order: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub note: String,
    pub username: String,
}

/// Body of `POST recipes`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecipe {
    pub name: String,
    pub description: String,
    pub meal_name: String,
    pub type_name: String,
    #[serde(rename = "private")]
    pub is_private: bool,
    pub created_by: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forked_from: Option<u32>,
    pub items: Vec<ItemPayload>,
    pub steps: Vec<StepPayload>,
}

/// Body of `PATCH recipes/{id}/basics`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicsPayload {
    pub description: String,
    pub meal_name: String,
    pub type_name: String,
    #[serde(rename = "private")]
    pub is_private: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewIngredient {
    pub name: String,
    pub category: String,
    pub description: String,
}

/// Text fields of a photo upload; the file travels alongside
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhotoUpload {
    pub caption: String,
    pub is_cover_image: bool,
    pub username: String,
}

/// Render an amount without a trailing ".0"
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{}", amount as i64)
    } else {
        let text = format!("{:.3}", amount);
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
