//! Subsection Editor
//!
//! Working copy of a recipe's subsection labels while the manage-subsections
//! dialog is open. Entries are keyed so a rename doesn't lose its row.

use crate::error::DraftError;

#[derive(Debug, Clone, PartialEq)]
pub struct SubsectionEntry {
    pub key: u32,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubsectionEditor {
    entries: Vec<SubsectionEntry>,
    next_key: u32,
}

impl SubsectionEditor {
    pub fn new(labels: &[String]) -> Self {
        let mut editor = Self::default();
        for label in labels {
            editor.next_key += 1;
            editor.entries.push(SubsectionEntry { key: editor.next_key, label: label.clone() });
        }
        editor
    }

    pub fn entries(&self) -> &[SubsectionEntry] {
        &self.entries
    }

    /// Append an empty row and return its key
    pub fn add(&mut self) -> u32 {
        self.next_key += 1;
        self.entries.push(SubsectionEntry { key: self.next_key, label: String::new() });
        self.next_key
    }

    pub fn rename(&mut self, key: u32, label: String) -> Result<(), DraftError> {
        let entry = self.entries.iter_mut()
            .find(|e| e.key == key)
            .ok_or(DraftError::UnknownSubsectionKey(key))?;
        entry.label = label;
        Ok(())
    }

    pub fn remove(&mut self, key: u32) -> Result<(), DraftError> {
        let before = self.entries.len();
        self.entries.retain(|e| e.key != key);
        if self.entries.len() == before {
            return Err(DraftError::UnknownSubsectionKey(key));
        }
        Ok(())
    }

    pub fn label(&self, key: u32) -> Option<String> {
        self.entries.iter().find(|e| e.key == key).map(|e| e.label.clone())
    }

    /// Labels to hand back to the draft, blanks dropped
    pub fn labels(&self) -> Vec<String> {
        self.entries.iter()
            .map(|e| e.label.trim().to_string())
            .filter(|l| !l.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::{DraftList, DraftUpdate, EntryField, RecipeDraft};

    fn labels(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_new_keeps_order() {
        let editor = SubsectionEditor::new(&labels(&["Filling", "Crust"]));
        assert_eq!(editor.labels(), labels(&["Filling", "Crust"]));
        assert_ne!(editor.entries()[0].key, editor.entries()[1].key);
    }

    #[test]
    fn test_add_rename_remove() {
        let mut editor = SubsectionEditor::new(&labels(&["Filling"]));
        let key = editor.add();
        assert_eq!(editor.labels(), labels(&["Filling"]));

        editor.rename(key, "Frosting".into()).unwrap();
        assert_eq!(editor.label(key).as_deref(), Some("Frosting"));

        let first = editor.entries()[0].key;
        editor.remove(first).unwrap();
        assert_eq!(editor.labels(), labels(&["Frosting"]));

        assert_eq!(editor.remove(first), Err(DraftError::UnknownSubsectionKey(first)));
        assert_eq!(editor.rename(99, "x".into()), Err(DraftError::UnknownSubsectionKey(99)));
    }

    #[test]
    fn test_removed_subsection_cascades_into_draft() {
        let mut draft = RecipeDraft::empty();
        draft.replace_subsections(labels(&["Filling", "Crust"]));
        let filling = draft.add_entry(DraftList::Items);
        let crust = draft.add_entry(DraftList::Items);
        draft.apply(DraftUpdate::Edit {
            list: DraftList::Items, key: filling, field: EntryField::Subsection, value: "Filling".into(),
        }).unwrap();
        draft.apply(DraftUpdate::Edit {
            list: DraftList::Items, key: crust, field: EntryField::Subsection, value: "Crust".into(),
        }).unwrap();

        let mut editor = SubsectionEditor::new(&draft.subsections);
        let crust_row = editor.entries()[1].key;
        editor.remove(crust_row).unwrap();
        draft.replace_subsections(editor.labels());

        assert_eq!(draft.items[0].subsection, "Filling");
        assert_eq!(draft.items[1].subsection, "");
    }
}
