//! Catalog Store
//!
//! Picker data for the recipe form (meals, types, units, ingredients and
//! ingredient categories), held in a reactive_stores store so each picker
//! only re-renders when its own list changes.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::models::{Category, Ingredient, Meal, RecipeType, Unit};

#[derive(Clone, Debug, Default, Store)]
pub struct CatalogState {
    pub meals: Vec<Meal>,
    pub types: Vec<RecipeType>,
    pub units: Vec<Unit>,
    /// Sorted by name
    pub ingredients: Vec<Ingredient>,
    pub categories: Vec<Category>,
}

pub type CatalogStore = Store<CatalogState>;

/// Fetch every picker list side by side
pub async fn load_catalog(api: &ApiClient) -> Result<CatalogState, ApiError> {
    let (meals, types, units, ingredients, categories) = futures::join!(
        api.list_meals(),
        api.list_types(),
        api.list_units(),
        api.list_ingredients(),
        api.list_categories(),
    );
    let mut ingredients = ingredients?;
    ingredients.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

    Ok(CatalogState {
        meals: meals?,
        types: types?,
        units: units?,
        ingredients,
        categories: categories?,
    })
}

/// Insert keeping name order; an ingredient with the same name is replaced
pub fn insert_ingredient(ingredients: &mut Vec<Ingredient>, ingredient: Ingredient) {
    if let Some(existing) = ingredients.iter_mut().find(|i| i.name.eq_ignore_ascii_case(&ingredient.name)) {
        *existing = ingredient;
        return;
    }
    let key = ingredient.name.to_lowercase();
    let at = ingredients.partition_point(|i| i.name.to_lowercase() < key);
    ingredients.insert(at, ingredient);
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_catalog(store: &CatalogStore, catalog: CatalogState) {
    *store.meals().write() = catalog.meals;
    *store.types().write() = catalog.types;
    *store.units().write() = catalog.units;
    *store.ingredients().write() = catalog.ingredients;
    *store.categories().write() = catalog.categories;
}

/// Add a freshly created ingredient to the picker
pub fn store_add_ingredient(store: &CatalogStore, ingredient: Ingredient) {
    insert_ingredient(&mut store.ingredients().write(), ingredient);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredient(name: &str) -> Ingredient {
        Ingredient { name: name.to_string(), category: "Produce".into(), description: String::new() }
    }

    #[test]
    fn test_insert_ingredient_keeps_order() {
        let mut list = vec![ingredient("apple"), ingredient("Carrot")];
        insert_ingredient(&mut list, ingredient("banana"));
        insert_ingredient(&mut list, ingredient("zucchini"));
        let names: Vec<&str> = list.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["apple", "banana", "Carrot", "zucchini"]);
    }

    #[test]
    fn test_insert_ingredient_replaces_same_name() {
        let mut list = vec![ingredient("Basil")];
        let mut updated = ingredient("basil");
        updated.category = "Herbs".into();
        insert_ingredient(&mut list, updated);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].category, "Herbs");
    }
}
