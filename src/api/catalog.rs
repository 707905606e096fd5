//! Catalog Endpoints
//!
//! Lookup lists feeding the authoring form's pickers.

use serde::Deserialize;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{Category, Ingredient, Meal, NewIngredient, RecipeType, Unit};

#[derive(Deserialize)]
struct MealsEnvelope {
    meals: Vec<Meal>,
}

#[derive(Deserialize)]
struct TypesEnvelope {
    types: Vec<RecipeType>,
}

#[derive(Deserialize)]
struct UnitsEnvelope {
    units: Vec<Unit>,
}

#[derive(Deserialize)]
struct IngredientsEnvelope {
    ingredients: Vec<Ingredient>,
}

#[derive(Deserialize)]
struct IngredientEnvelope {
    ingredient: Ingredient,
}

#[derive(Deserialize)]
struct CategoriesEnvelope {
    categories: Vec<Category>,
}

impl ApiClient {
    pub async fn list_meals(&self) -> Result<Vec<Meal>, ApiError> {
        let envelope: MealsEnvelope = self.get("meals").await?;
        Ok(envelope.meals)
    }

    pub async fn list_types(&self) -> Result<Vec<RecipeType>, ApiError> {
        let envelope: TypesEnvelope = self.get("types").await?;
        Ok(envelope.types)
    }

    pub async fn list_units(&self) -> Result<Vec<Unit>, ApiError> {
        let envelope: UnitsEnvelope = self.get("units").await?;
        Ok(envelope.units)
    }

    pub async fn list_ingredients(&self) -> Result<Vec<Ingredient>, ApiError> {
        let envelope: IngredientsEnvelope = self.get("ingredients").await?;
        Ok(envelope.ingredients)
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        let envelope: CategoriesEnvelope = self.get("categories").await?;
        Ok(envelope.categories)
    }

    pub async fn create_ingredient(&self, ingredient: &NewIngredient) -> Result<Ingredient, ApiError> {
        let envelope: IngredientEnvelope = self.post("ingredients", ingredient).await?;
        Ok(envelope.ingredient)
    }
}
