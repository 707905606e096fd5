//! Test Doubles
//!
//! In-memory backend and notifier for exercising the async flows natively.

use std::cell::RefCell;

use crate::api::RecipeBackend;
use crate::error::ApiError;
use crate::models::{
    BasicsPayload, ItemPayload, NewRecipe, NotePayload, Recipe, RecipeItem, RecipeNote, RecipeStep,
    StepPayload, UserProfile,
};
use crate::notify::{Notice, Notify, Severity};

/// Id given to every recipe the fake creates
pub const CREATED_ID: u32 = 77;

#[derive(Default)]
pub struct FakeBackend {
    /// Method names that answer with a 500
    failing: Vec<String>,
    /// Note texts whose `add_note` call fails
    failing_notes: Vec<String>,
    calls: RefCell<Vec<String>>,
    created: RefCell<Option<NewRecipe>>,
    items: RefCell<Vec<ItemPayload>>,
    steps: RefCell<Vec<StepPayload>>,
    notes: RefCell<Vec<NotePayload>>,
}

impl FakeBackend {
    pub fn failing(methods: &[&str]) -> Self {
        Self {
            failing: methods.iter().map(|m| m.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn failing_notes(notes: &[&str]) -> Self {
        Self {
            failing_notes: notes.iter().map(|n| n.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn created(&self) -> Option<NewRecipe> {
        self.created.borrow().clone()
    }

    pub fn sent_items(&self) -> Vec<ItemPayload> {
        self.items.borrow().clone()
    }

    pub fn sent_steps(&self) -> Vec<StepPayload> {
        self.steps.borrow().clone()
    }

    pub fn sent_notes(&self) -> Vec<NotePayload> {
        self.notes.borrow().clone()
    }

    fn record(&self, method: &str, detail: String) -> Result<(), ApiError> {
        let entry = if detail.is_empty() { method.to_string() } else { format!("{} {}", method, detail) };
        self.calls.borrow_mut().push(entry);
        if self.failing.iter().any(|m| m == method) {
            return Err(ApiError::Backend { status: 500, messages: vec![format!("{} failed", method)] });
        }
        Ok(())
    }
}

pub fn sample_recipe(id: u32) -> Recipe {
    Recipe {
        id,
        name: "Crab Boil".into(),
        description: "Messy".into(),
        created_by: "sam".into(),
        meal_name: "Dinner".into(),
        type_name: "Seafood".into(),
        is_private: false,
        items: vec![RecipeItem {
            id: 3,
            amount: 1.0,
            unit: Some("lb".into()),
            ingredient: "crab".into(),
            description: None,
            subsection: None,
            order: 1,
        }],
        steps: vec![RecipeStep { id: 4, description: "eat it".into(), order: 1 }],
        notes: vec![],
        photo_url: None,
        forked_from: None,
    }
}

impl RecipeBackend for FakeBackend {
    async fn get_recipe(&self, recipe_id: u32) -> Result<Recipe, ApiError> {
        self.record("get_recipe", recipe_id.to_string())?;
        Ok(sample_recipe(recipe_id))
    }

    async fn create_recipe(&self, recipe: &NewRecipe) -> Result<Recipe, ApiError> {
        self.record("create_recipe", recipe.name.clone())?;
        *self.created.borrow_mut() = Some(recipe.clone());
        Ok(Recipe {
            id: CREATED_ID,
            name: recipe.name.clone(),
            created_by: recipe.created_by.clone(),
            forked_from: recipe.forked_from,
            ..sample_recipe(CREATED_ID)
        })
    }

    async fn add_note(&self, recipe_id: u32, note: &NotePayload) -> Result<RecipeNote, ApiError> {
        self.record("add_note", format!("{} {}", recipe_id, note.note))?;
        if self.failing_notes.contains(&note.note) {
            return Err(ApiError::Backend { status: 400, messages: vec!["note rejected".into()] });
        }
        self.notes.borrow_mut().push(note.clone());
        Ok(RecipeNote {
            id: 100 + self.notes.borrow().len() as u32,
            note: note.note.clone(),
            username: Some(note.username.clone()),
            time_stamp: None,
        })
    }

    async fn update_basics(&self, recipe_id: u32, _basics: &BasicsPayload) -> Result<(), ApiError> {
        self.record("update_basics", recipe_id.to_string())
    }

    async fn update_items(&self, recipe_id: u32, items: &[ItemPayload]) -> Result<(), ApiError> {
        self.record("update_items", recipe_id.to_string())?;
        *self.items.borrow_mut() = items.to_vec();
        Ok(())
    }

    async fn update_steps(&self, recipe_id: u32, steps: &[StepPayload]) -> Result<(), ApiError> {
        self.record("update_steps", recipe_id.to_string())?;
        *self.steps.borrow_mut() = steps.to_vec();
        Ok(())
    }

    async fn update_notes(&self, recipe_id: u32, notes: &[NotePayload], username: &str) -> Result<(), ApiError> {
        self.record("update_notes", format!("{} {}", recipe_id, username))?;
        *self.notes.borrow_mut() = notes.to_vec();
        Ok(())
    }

    async fn get_user(&self, username: &str) -> Result<UserProfile, ApiError> {
        self.record("get_user", username.to_string())?;
        Ok(UserProfile {
            username: username.to_string(),
            first_name: "Sam".into(),
            last_name: "Cook".into(),
            email: format!("{}@example.com", username),
            favorited_recipes: vec![1],
        })
    }

    async fn favorite_recipe(&self, username: &str, recipe_id: u32) -> Result<(), ApiError> {
        self.record("favorite_recipe", format!("{} {}", username, recipe_id))
    }

    async fn unfavorite_recipe(&self, username: &str, recipe_id: u32) -> Result<(), ApiError> {
        self.record("unfavorite_recipe", format!("{} {}", username, recipe_id))
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    notices: RefCell<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    pub fn severities(&self) -> Vec<Severity> {
        self.notices.borrow().iter().map(|n| n.severity).collect()
    }
}

impl Notify for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}
