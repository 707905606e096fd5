//! Recipe Draft
//!
//! In-memory recipe being authored. Ingredient lines, steps and notes are
//! dynamic lists; each entry is addressed by an [`EntryKey`] rather than a
//! position, and every change goes through a typed [`DraftUpdate`].

use crate::error::DraftError;
use crate::models::{format_amount, Recipe};

/// Which form the draft is feeding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    /// Editing the recipe with this id
    Edit(u32),
    /// Creating a new recipe forked from this id
    Fork(u32),
}

impl FormMode {
    pub fn title(&self) -> &'static str {
        match self {
            FormMode::Add => "Add a Recipe",
            FormMode::Edit(_) => "Edit a Recipe",
            FormMode::Fork(_) => "Fork a Recipe",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Add => "Submit recipe",
            FormMode::Edit(_) => "Save edits",
            FormMode::Fork(_) => "Create fork",
        }
    }
}

/// Identity of a list entry. Saved entries are addressed by backend id,
/// entries added in this draft by their synthetic key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKey {
    Saved(u32),
    Draft(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftList {
    Items,
    Steps,
    Notes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    Amount,
    Unit,
    Ingredient,
    Description,
    Subsection,
    Note,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BasicsField {
    Name(String),
    Description(String),
    MealName(String),
    TypeName(String),
    Private(bool),
}

/// A single change to the draft
#[derive(Debug, Clone, PartialEq)]
pub enum DraftUpdate {
    Basics(BasicsField),
    Add(DraftList),
    Edit {
        list: DraftList,
        key: EntryKey,
        field: EntryField,
        value: String,
    },
    Remove {
        list: DraftList,
        key: EntryKey,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemLine {
    pub id: Option<u32>,
    pub key: u32,
    /// Free text until submit
    pub amount: String,
    pub unit: String,
    pub ingredient: String,
    pub description: String,
    pub subsection: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepLine {
    pub id: Option<u32>,
    pub key: u32,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NoteLine {
    pub id: Option<u32>,
    pub key: u32,
    pub note: String,
}

trait DraftEntry: Sized {
    const LIST: DraftList;

    fn blank(key: u32) -> Self;
    fn id(&self) -> Option<u32>;
    fn key(&self) -> u32;
    fn field(&self, field: EntryField) -> Option<&str>;
    fn field_mut(&mut self, field: EntryField) -> Option<&mut String>;

    fn entry_key(&self) -> EntryKey {
        match self.id() {
            Some(id) => EntryKey::Saved(id),
            None => EntryKey::Draft(self.key()),
        }
    }

    fn accepts(field: EntryField) -> bool {
        Self::blank(0).field(field).is_some()
    }
}

impl DraftEntry for ItemLine {
    const LIST: DraftList = DraftList::Items;

    fn blank(key: u32) -> Self {
        ItemLine {
            id: None,
            key,
            amount: String::new(),
            unit: String::new(),
            ingredient: String::new(),
            description: String::new(),
            subsection: String::new(),
        }
    }

    fn id(&self) -> Option<u32> {
        self.id
    }

    fn key(&self) -> u32 {
        self.key
    }

    fn field(&self, field: EntryField) -> Option<&str> {
        match field {
            EntryField::Amount => Some(&self.amount),
            EntryField::Unit => Some(&self.unit),
            EntryField::Ingredient => Some(&self.ingredient),
            EntryField::Description => Some(&self.description),
            EntryField::Subsection => Some(&self.subsection),
            EntryField::Note => None,
        }
    }

    fn field_mut(&mut self, field: EntryField) -> Option<&mut String> {
        match field {
            EntryField::Amount => Some(&mut self.amount),
            EntryField::Unit => Some(&mut self.unit),
            EntryField::Ingredient => Some(&mut self.ingredient),
            EntryField::Description => Some(&mut self.description),
            EntryField::Subsection => Some(&mut self.subsection),
            EntryField::Note => None,
        }
    }
}

impl DraftEntry for StepLine {
    const LIST: DraftList = DraftList::Steps;

    fn blank(key: u32) -> Self {
        StepLine { id: None, key, description: String::new() }
    }

    fn id(&self) -> Option<u32> {
        self.id
    }

    fn key(&self) -> u32 {
        self.key
    }

    fn field(&self, field: EntryField) -> Option<&str> {
        match field {
            EntryField::Description => Some(&self.description),
            _ => None,
        }
    }

    fn field_mut(&mut self, field: EntryField) -> Option<&mut String> {
        match field {
            EntryField::Description => Some(&mut self.description),
            _ => None,
        }
    }
}

impl DraftEntry for NoteLine {
    const LIST: DraftList = DraftList::Notes;

    fn blank(key: u32) -> Self {
        NoteLine { id: None, key, note: String::new() }
    }

    fn id(&self) -> Option<u32> {
        self.id
    }

    fn key(&self) -> u32 {
        self.key
    }

    fn field(&self, field: EntryField) -> Option<&str> {
        match field {
            EntryField::Note => Some(&self.note),
            _ => None,
        }
    }

    fn field_mut(&mut self, field: EntryField) -> Option<&mut String> {
        match field {
            EntryField::Note => Some(&mut self.note),
            _ => None,
        }
    }
}

fn find_entry<E: DraftEntry>(entries: &[E], key: EntryKey) -> Option<&E> {
    entries.iter().find(|e| e.entry_key() == key)
}

fn edit_entry<E: DraftEntry>(
    entries: &mut [E],
    key: EntryKey,
    field: EntryField,
    value: String,
) -> Result<(), DraftError> {
    if !E::accepts(field) {
        return Err(DraftError::FieldNotInList { list: E::LIST, field });
    }
    let slot = entries
        .iter_mut()
        .find(|e| e.entry_key() == key)
        .and_then(|e| e.field_mut(field))
        .ok_or(DraftError::UnknownEntry { list: E::LIST, key })?;
    *slot = value;
    Ok(())
}

fn remove_entry<E: DraftEntry>(entries: &mut Vec<E>, key: EntryKey) -> Result<(), DraftError> {
    let before = entries.len();
    entries.retain(|e| e.entry_key() != key);
    if entries.len() == before {
        return Err(DraftError::UnknownEntry { list: E::LIST, key });
    }
    Ok(())
}

/// Recipe being authored in the add/edit/fork form
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecipeDraft {
    pub name: String,
    pub description: String,
    pub meal_name: String,
    pub type_name: String,
    pub is_private: bool,
    pub items: Vec<ItemLine>,
    pub steps: Vec<StepLine>,
    pub notes: Vec<NoteLine>,
    /// Labels offered for grouping ingredient lines
    pub subsections: Vec<String>,
    pub cover_photo: Option<String>,
    pub forked_from: Option<u32>,
    next_key: u32,
}

impl RecipeDraft {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Seed a draft from a saved recipe. Forks remember their source.
    pub fn from_recipe(recipe: &Recipe, mode: FormMode) -> Self {
        let mut draft = RecipeDraft {
            name: recipe.name.clone(),
            description: recipe.description.clone(),
            meal_name: recipe.meal_name.clone(),
            type_name: recipe.type_name.clone(),
            is_private: recipe.is_private,
            cover_photo: recipe.photo_url.clone(),
            forked_from: match mode {
                FormMode::Fork(source) => Some(source),
                _ => None,
            },
            ..Default::default()
        };

        let mut items: Vec<_> = recipe.items.iter().collect();
        items.sort_by_key(|i| i.order);
        for item in items {
            let key = draft.fresh_key();
            draft.items.push(ItemLine {
                id: Some(item.id),
                key,
                amount: format_amount(item.amount),
                unit: item.unit.clone().unwrap_or_default(),
                ingredient: item.ingredient.clone(),
                description: item.description.clone().unwrap_or_default(),
                subsection: item.subsection.as_deref().unwrap_or_default().trim().to_string(),
            });
        }

        let mut steps: Vec<_> = recipe.steps.iter().collect();
        steps.sort_by_key(|s| s.order);
        for step in steps {
            let key = draft.fresh_key();
            draft.steps.push(StepLine { id: Some(step.id), key, description: step.description.clone() });
        }

        for note in &recipe.notes {
            let key = draft.fresh_key();
            draft.notes.push(NoteLine { id: Some(note.id), key, note: note.note.clone() });
        }

        draft.subsections = derive_subsections(&draft.items);
        draft
    }

    fn fresh_key(&mut self) -> u32 {
        self.next_key += 1;
        self.next_key
    }

    /// Apply one change against the current state of the draft
    pub fn apply(&mut self, update: DraftUpdate) -> Result<(), DraftError> {
        match update {
            DraftUpdate::Basics(field) => {
                self.set_basics(field);
                Ok(())
            }
            DraftUpdate::Add(list) => {
                self.add_entry(list);
                Ok(())
            }
            DraftUpdate::Edit { list, key, field, value } => self.edit(list, key, field, value),
            DraftUpdate::Remove { list, key } => match list {
                DraftList::Items => remove_entry(&mut self.items, key),
                DraftList::Steps => remove_entry(&mut self.steps, key),
                DraftList::Notes => remove_entry(&mut self.notes, key),
            },
        }
    }

    fn set_basics(&mut self, field: BasicsField) {
        match field {
            BasicsField::Name(v) => self.name = v,
            BasicsField::Description(v) => self.description = v,
            BasicsField::MealName(v) => self.meal_name = v,
            BasicsField::TypeName(v) => self.type_name = v,
            BasicsField::Private(v) => self.is_private = v,
        }
    }

    /// Append a blank entry and return its key
    pub fn add_entry(&mut self, list: DraftList) -> EntryKey {
        let key = self.fresh_key();
        match list {
            DraftList::Items => self.items.push(ItemLine::blank(key)),
            DraftList::Steps => self.steps.push(StepLine::blank(key)),
            DraftList::Notes => self.notes.push(NoteLine::blank(key)),
        }
        EntryKey::Draft(key)
    }

    fn edit(&mut self, list: DraftList, key: EntryKey, field: EntryField, value: String) -> Result<(), DraftError> {
        match list {
            DraftList::Items => {
                if field == EntryField::Subsection && !value.is_empty() && !self.subsections.contains(&value) {
                    return Err(DraftError::UnknownSubsection(value));
                }
                edit_entry(&mut self.items, key, field, value)
            }
            DraftList::Steps => edit_entry(&mut self.steps, key, field, value),
            DraftList::Notes => edit_entry(&mut self.notes, key, field, value),
        }
    }

    /// Current text of one field, for binding inputs
    pub fn field_value(&self, list: DraftList, key: EntryKey, field: EntryField) -> Option<String> {
        let value = match list {
            DraftList::Items => find_entry(&self.items, key)?.field(field),
            DraftList::Steps => find_entry(&self.steps, key)?.field(field),
            DraftList::Notes => find_entry(&self.notes, key)?.field(field),
        };
        value.map(String::from)
    }

    pub fn entry_keys(&self, list: DraftList) -> Vec<EntryKey> {
        match list {
            DraftList::Items => self.items.iter().map(DraftEntry::entry_key).collect(),
            DraftList::Steps => self.steps.iter().map(DraftEntry::entry_key).collect(),
            DraftList::Notes => self.notes.iter().map(DraftEntry::entry_key).collect(),
        }
    }

    /// Replace the subsection set; lines pointing at a label that is gone
    /// have their subsection cleared
    pub fn replace_subsections(&mut self, labels: Vec<String>) {
        let mut next: Vec<String> = Vec::with_capacity(labels.len());
        for label in labels {
            let label = label.trim().to_string();
            if !label.is_empty() && !next.contains(&label) {
                next.push(label);
            }
        }

        for item in &mut self.items {
            if !item.subsection.is_empty() && !next.contains(&item.subsection) {
                item.subsection.clear();
            }
        }
        self.subsections = next;
    }
}

impl ItemLine {
    pub fn entry_key(&self) -> EntryKey {
        DraftEntry::entry_key(self)
    }
}

impl StepLine {
    pub fn entry_key(&self) -> EntryKey {
        DraftEntry::entry_key(self)
    }
}

impl NoteLine {
    pub fn entry_key(&self) -> EntryKey {
        DraftEntry::entry_key(self)
    }
}

/// Distinct non-empty subsection labels, in order of first use
pub fn derive_subsections(items: &[ItemLine]) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();
    for item in items {
        let label = item.subsection.trim();
        if !label.is_empty() && !labels.iter().any(|l| l == label) {
            labels.push(label.to_string());
        }
    }
    labels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RecipeItem, RecipeNote, RecipeStep};

    fn edit(list: DraftList, key: EntryKey, field: EntryField, value: &str) -> DraftUpdate {
        DraftUpdate::Edit { list, key, field, value: value.to_string() }
    }

    fn make_recipe() -> Recipe {
        let item = |id: u32, order: u32, ingredient: &str, subsection: Option<&str>| RecipeItem {
            id,
            amount: 2.0,
            unit: Some("cup".into()),
            ingredient: ingredient.into(),
            description: None,
            subsection: subsection.map(String::from),
            order,
        };
        Recipe {
            id: 9,
            name: "Layer Cake".into(),
            description: "Tall".into(),
            created_by: "sam".into(),
            meal_name: "Dessert".into(),
            type_name: "Cake".into(),
            is_private: false,
            items: vec![
                item(12, 2, "sugar", Some("Frosting")),
                item(11, 1, "flour", Some("Cake")),
                item(13, 3, "butter", Some("Frosting")),
                item(14, 4, "salt", None),
            ],
            steps: vec![
                RecipeStep { id: 21, description: "frost".into(), order: 2 },
                RecipeStep { id: 20, description: "bake".into(), order: 1 },
            ],
            notes: vec![RecipeNote { id: 30, note: "chill first".into(), username: None, time_stamp: None }],
            photo_url: Some("cake.jpg".into()),
            forked_from: None,
        }
    }

    #[test]
    fn test_add_then_delete_preserves_order() {
        let mut draft = RecipeDraft::empty();
        let keys: Vec<EntryKey> = (0..5).map(|_| draft.add_entry(DraftList::Steps)).collect();
        for (i, key) in keys.iter().enumerate() {
            draft.apply(edit(DraftList::Steps, *key, EntryField::Description, &format!("step {}", i))).unwrap();
        }

        draft.apply(DraftUpdate::Remove { list: DraftList::Steps, key: keys[2] }).unwrap();

        assert_eq!(draft.steps.len(), 4);
        let texts: Vec<&str> = draft.steps.iter().map(|s| s.description.as_str()).collect();
        assert_eq!(texts, vec!["step 0", "step 1", "step 3", "step 4"]);
    }

    #[test]
    fn test_added_keys_are_unique_across_lists() {
        let mut draft = RecipeDraft::empty();
        let a = draft.add_entry(DraftList::Items);
        let b = draft.add_entry(DraftList::Notes);
        let c = draft.add_entry(DraftList::Items);
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_eq!(draft.entry_keys(DraftList::Items), vec![a, c]);
    }

    #[test]
    fn test_edit_touches_only_one_field() {
        let mut draft = RecipeDraft::empty();
        let keys: Vec<EntryKey> = (0..3).map(|_| draft.add_entry(DraftList::Items)).collect();
        draft.apply(edit(DraftList::Items, keys[0], EntryField::Ingredient, "eggs")).unwrap();
        draft.apply(edit(DraftList::Items, keys[1], EntryField::Ingredient, "milk")).unwrap();
        let before = draft.clone();

        draft.apply(edit(DraftList::Items, keys[1], EntryField::Amount, "3")).unwrap();

        assert_eq!(draft.items[0], before.items[0]);
        assert_eq!(draft.items[2], before.items[2]);
        let mut expected = before.items[1].clone();
        expected.amount = "3".into();
        assert_eq!(draft.items[1], expected);
        assert_eq!(draft.steps, before.steps);
        assert_eq!(draft.name, before.name);
    }

    #[test]
    fn test_edit_after_earlier_removal_hits_right_entry() {
        let mut draft = RecipeDraft::empty();
        let first = draft.add_entry(DraftList::Notes);
        let second = draft.add_entry(DraftList::Notes);
        draft.apply(DraftUpdate::Remove { list: DraftList::Notes, key: first }).unwrap();

        draft.apply(edit(DraftList::Notes, second, EntryField::Note, "keep me")).unwrap();

        assert_eq!(draft.notes.len(), 1);
        assert_eq!(draft.notes[0].note, "keep me");
    }

    #[test]
    fn test_edit_rejects_wrong_field_and_unknown_key() {
        let mut draft = RecipeDraft::empty();
        let key = draft.add_entry(DraftList::Steps);
        let before = draft.clone();

        let err = draft.apply(edit(DraftList::Steps, key, EntryField::Amount, "1")).unwrap_err();
        assert_eq!(err, DraftError::FieldNotInList { list: DraftList::Steps, field: EntryField::Amount });

        let missing = EntryKey::Draft(999);
        let err = draft.apply(edit(DraftList::Steps, missing, EntryField::Description, "x")).unwrap_err();
        assert_eq!(err, DraftError::UnknownEntry { list: DraftList::Steps, key: missing });

        let err = draft.apply(DraftUpdate::Remove { list: DraftList::Items, key }).unwrap_err();
        assert_eq!(err, DraftError::UnknownEntry { list: DraftList::Items, key });

        assert_eq!(draft, before);
    }

    #[test]
    fn test_basics_updates() {
        let mut draft = RecipeDraft::empty();
        draft.apply(DraftUpdate::Basics(BasicsField::Name("Gumbo".into()))).unwrap();
        draft.apply(DraftUpdate::Basics(BasicsField::MealName("Dinner".into()))).unwrap();
        draft.apply(DraftUpdate::Basics(BasicsField::Private(true))).unwrap();
        assert_eq!(draft.name, "Gumbo");
        assert_eq!(draft.meal_name, "Dinner");
        assert!(draft.is_private);
    }

    #[test]
    fn test_from_recipe_orders_lines_and_uses_saved_keys() {
        let draft = RecipeDraft::from_recipe(&make_recipe(), FormMode::Edit(9));

        let ingredients: Vec<&str> = draft.items.iter().map(|i| i.ingredient.as_str()).collect();
        assert_eq!(ingredients, vec!["flour", "sugar", "butter", "salt"]);
        assert_eq!(draft.items[0].entry_key(), EntryKey::Saved(11));
        assert_eq!(draft.items[0].amount, "2");
        assert_eq!(draft.steps[0].description, "bake");
        assert_eq!(draft.notes[0].entry_key(), EntryKey::Saved(30));
        assert_eq!(draft.subsections, vec!["Cake".to_string(), "Frosting".to_string()]);
        assert_eq!(draft.cover_photo.as_deref(), Some("cake.jpg"));
        assert_eq!(draft.forked_from, None);
    }

    #[test]
    fn test_fork_remembers_source() {
        let draft = RecipeDraft::from_recipe(&make_recipe(), FormMode::Fork(9));
        assert_eq!(draft.forked_from, Some(9));
    }

    #[test]
    fn test_delete_subsection_clears_referencing_lines() {
        let mut draft = RecipeDraft::from_recipe(&make_recipe(), FormMode::Edit(9));

        draft.replace_subsections(vec!["Cake".into()]);

        assert_eq!(draft.subsections, vec!["Cake".to_string()]);
        let labels: Vec<&str> = draft.items.iter().map(|i| i.subsection.as_str()).collect();
        assert_eq!(labels, vec!["Cake", "", "", ""]);
    }

    #[test]
    fn test_unchanged_subsections_keep_padded_labels() {
        let mut recipe = make_recipe();
        recipe.items[0].subsection = Some("Filling ".into());
        let mut draft = RecipeDraft::from_recipe(&recipe, FormMode::Edit(9));
        assert_eq!(draft.subsections, vec!["Cake".to_string(), "Filling".to_string(), "Frosting".to_string()]);

        let editor = crate::subsections::SubsectionEditor::new(&draft.subsections);
        draft.replace_subsections(editor.labels());

        let sugar = draft.items.iter().find(|i| i.ingredient == "sugar").unwrap();
        assert_eq!(sugar.subsection, "Filling");
        assert_eq!(draft.subsections, vec!["Cake".to_string(), "Filling".to_string(), "Frosting".to_string()]);
    }

    #[test]
    fn test_rename_subsection_clears_old_label() {
        let mut draft = RecipeDraft::from_recipe(&make_recipe(), FormMode::Edit(9));

        draft.replace_subsections(vec!["Cake".into(), "Icing".into(), " Icing ".into(), "".into()]);

        assert_eq!(draft.subsections, vec!["Cake".to_string(), "Icing".to_string()]);
        assert!(draft.items.iter().all(|i| i.subsection != "Frosting"));
    }

    #[test]
    fn test_item_subsection_must_exist() {
        let mut draft = RecipeDraft::empty();
        draft.replace_subsections(vec!["Filling".into()]);
        let key = draft.add_entry(DraftList::Items);

        let err = draft.apply(edit(DraftList::Items, key, EntryField::Subsection, "Crust")).unwrap_err();
        assert_eq!(err, DraftError::UnknownSubsection("Crust".into()));

        draft.apply(edit(DraftList::Items, key, EntryField::Subsection, "Filling")).unwrap();
        assert_eq!(draft.field_value(DraftList::Items, key, EntryField::Subsection).as_deref(), Some("Filling"));

        draft.apply(edit(DraftList::Items, key, EntryField::Subsection, "")).unwrap();
        assert_eq!(draft.items[0].subsection, "");
    }

    #[test]
    fn test_derive_subsections_skips_empty_and_duplicates() {
        let mut draft = RecipeDraft::empty();
        draft.subsections = vec!["A".into(), "B".into()];
        for label in ["B", "", "A", "B"] {
            let key = draft.add_entry(DraftList::Items);
            draft.apply(edit(DraftList::Items, key, EntryField::Subsection, label)).unwrap();
        }
        assert_eq!(derive_subsections(&draft.items), vec!["B".to_string(), "A".to_string()]);
    }
}
