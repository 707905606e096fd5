//! Recipe Submission
//!
//! Normalizes a [`RecipeDraft`] into request payloads and runs the create,
//! fork and edit flows against a [`RecipeBackend`].

use futures::future::join_all;

use crate::api::RecipeBackend;
use crate::draft::{FormMode, ItemLine, NoteLine, RecipeDraft, StepLine};
use crate::error::{DraftError, SubmitError};
use crate::models::{BasicsPayload, ItemPayload, NewRecipe, NotePayload, Recipe, RecipeNote, StepPayload};
use crate::notify::Notify;

// ========================
// Normalization
// ========================

/// Parse a quantity typed into an ingredient line: `2`, `1.5`, `1/2` or
/// `1 1/2`. Blank text is zero.
pub fn parse_amount(text: &str) -> Option<f64> {
    let parts: Vec<&str> = text.split_whitespace().collect();
    let amount = match parts.as_slice() {
        [] => 0.0,
        [single] if single.contains('/') => parse_fraction(single)?,
        [single] => single.parse::<f64>().ok()?,
        [whole, fraction] => whole.parse::<u32>().ok()? as f64 + parse_fraction(fraction)?,
        _ => return None,
    };
    (amount.is_finite() && amount >= 0.0).then_some(amount)
}

fn parse_fraction(text: &str) -> Option<f64> {
    let (numerator, denominator) = text.split_once('/')?;
    let numerator: u32 = numerator.parse().ok()?;
    let denominator: u32 = denominator.parse().ok()?;
    if denominator == 0 {
        return None;
    }
    Some(numerator as f64 / denominator as f64)
}

fn non_empty(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Ingredient lines in draft order with `order` 1..N. Saved ids are kept
/// only when `keep_ids` is set.
pub fn item_payloads(items: &[ItemLine], keep_ids: bool) -> Result<Vec<ItemPayload>, DraftError> {
    items
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let amount = parse_amount(&line.amount).ok_or_else(|| DraftError::InvalidAmount {
                line: i + 1,
                text: line.amount.clone(),
            })?;
            Ok(ItemPayload {
                id: line.id.filter(|_| keep_ids),
                amount,
                unit: non_empty(&line.unit),
                ingredient: line.ingredient.trim().to_string(),
                description: non_empty(&line.description),
                subsection: non_empty(&line.subsection),
                order: i as u32 + 1,
            })
        })
        .collect()
}

pub fn step_payloads(steps: &[StepLine], keep_ids: bool) -> Vec<StepPayload> {
    steps
        .iter()
        .enumerate()
        .map(|(i, line)| StepPayload {
            id: line.id.filter(|_| keep_ids),
            description: line.description.clone(),
            order: i as u32 + 1,
        })
        .collect()
}

/// Notes with text, stamped with the author
pub fn note_payloads(notes: &[NoteLine], username: &str, keep_ids: bool) -> Vec<NotePayload> {
    notes
        .iter()
        .filter(|line| !line.note.trim().is_empty())
        .map(|line| NotePayload {
            id: line.id.filter(|_| keep_ids),
            note: line.note.clone(),
            username: username.to_string(),
        })
        .collect()
}

pub fn basics_payload(draft: &RecipeDraft) -> BasicsPayload {
    BasicsPayload {
        description: draft.description.clone(),
        meal_name: draft.meal_name.clone(),
        type_name: draft.type_name.clone(),
        is_private: draft.is_private,
    }
}

/// Body for `POST recipes`. Only fork mode records a source recipe.
pub fn prepare_new_recipe(draft: &RecipeDraft, username: &str, mode: FormMode) -> Result<NewRecipe, DraftError> {
    let name = non_empty(&draft.name).ok_or(DraftError::MissingName)?;
    Ok(NewRecipe {
        name,
        description: draft.description.clone(),
        meal_name: draft.meal_name.clone(),
        type_name: draft.type_name.clone(),
        is_private: draft.is_private,
        created_by: username.to_string(),
        forked_from: match mode {
            FormMode::Fork(source) => Some(source),
            _ => None,
        },
        items: item_payloads(&draft.items, false)?,
        steps: step_payloads(&draft.steps, false),
    })
}

// ========================
// Flows
// ========================

/// Result of a submission whose main call succeeded
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    pub recipe: Recipe,
    /// Follow-up calls that failed without undoing the main call
    pub failed_calls: usize,
}

/// Create the recipe, then its notes. Failed notes are dropped; the recipe
/// stays.
pub async fn submit_new_recipe<B: RecipeBackend>(
    backend: &B,
    draft: &RecipeDraft,
    username: &str,
    mode: FormMode,
) -> Result<SubmitOutcome, SubmitError> {
    let new_recipe = prepare_new_recipe(draft, username, mode)?;
    let notes = note_payloads(&draft.notes, username, false);

    let recipe = backend.create_recipe(&new_recipe).await?;
    tracing::info!(recipe_id = recipe.id, notes = notes.len(), "recipe created");

    let results = join_all(notes.iter().map(|note| backend.add_note(recipe.id, note))).await;
    let failed_calls = results
        .iter()
        .filter_map(|r| r.as_ref().err())
        .inspect(|e| tracing::warn!(recipe_id = recipe.id, error = %e, "note not saved"))
        .count();

    Ok(SubmitOutcome { recipe, failed_calls })
}

/// Send basics, items, steps and notes side by side, then re-fetch the
/// recipe so the caller can replace its view
pub async fn submit_recipe_edits<B: RecipeBackend>(
    backend: &B,
    draft: &RecipeDraft,
    recipe_id: u32,
    username: &str,
) -> Result<SubmitOutcome, SubmitError> {
    let basics = basics_payload(draft);
    let items = item_payloads(&draft.items, true)?;
    let steps = step_payloads(&draft.steps, true);
    let notes = note_payloads(&draft.notes, username, true);

    let (basics, items, steps, notes) = futures::join!(
        backend.update_basics(recipe_id, &basics),
        backend.update_items(recipe_id, &items),
        backend.update_steps(recipe_id, &steps),
        backend.update_notes(recipe_id, &notes, username),
    );
    let results = [basics, items, steps, notes];
    let errors: Vec<_> = results.into_iter().filter_map(Result::err).collect();
    for e in &errors {
        tracing::warn!(recipe_id, error = %e, "recipe update failed");
    }
    if errors.len() == 4 {
        return Err(errors[0].clone().into());
    }

    let recipe = backend.get_recipe(recipe_id).await?;
    Ok(SubmitOutcome { recipe, failed_calls: errors.len() })
}

fn report_outcome<N: Notify>(notifier: &N, success: &str, failed_calls: usize) {
    match failed_calls {
        0 => notifier.success(success),
        1 => notifier.warning(format!("{} One related update failed.", success)),
        n => notifier.warning(format!("{} {} related updates failed.", success, n)),
    }
}

/// Submit the form in whatever mode it is in, reporting through `notifier`.
/// Returns the saved recipe on success.
pub async fn save_recipe<B: RecipeBackend, N: Notify>(
    backend: &B,
    notifier: &N,
    draft: &RecipeDraft,
    username: &str,
    mode: FormMode,
) -> Option<Recipe> {
    let (result, success) = match mode {
        FormMode::Add => (submit_new_recipe(backend, draft, username, mode).await, "Recipe added!"),
        FormMode::Fork(_) => (submit_new_recipe(backend, draft, username, mode).await, "Recipe forked!"),
        FormMode::Edit(id) => (submit_recipe_edits(backend, draft, id, username).await, "Recipe updated!"),
    };

    match result {
        Ok(outcome) => {
            report_outcome(notifier, success, outcome.failed_calls);
            Some(outcome.recipe)
        }
        Err(e) => {
            tracing::warn!(error = %e, ?mode, "recipe submit failed");
            notifier.errors(&e.messages());
            None
        }
    }
}

/// Post a single note from the detail page
pub async fn post_note<B: RecipeBackend, N: Notify>(
    backend: &B,
    notifier: &N,
    recipe_id: u32,
    text: &str,
    username: &str,
) -> Option<RecipeNote> {
    let Some(note) = non_empty(text) else {
        notifier.warning("Note is empty.");
        return None;
    };
    let payload = NotePayload { id: None, note, username: username.to_string() };
    match backend.add_note(recipe_id, &payload).await {
        Ok(note) => {
            notifier.success("Note added!");
            Some(note)
        }
        Err(e) => {
            notifier.errors(&e.messages());
            None
        }
    }
}
