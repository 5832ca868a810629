//! Inline rename of a single row.
//!
//! ```text
//!   Idle ──begin──▶ Editing ──commit──▶ Idle  (Committed | Unchanged | Rejected)
//!                      │
//!                      └────cancel────▶ Idle  (draft discarded)
//! ```
//!
//! The editor never talks to the server; a `Committed` outcome tells the
//! caller to issue the rename.

use uuid::Uuid;

use explorer_entity::Item;
use explorer_entity::item::path::SEPARATOR;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum State {
    #[default]
    Idle,
    Editing {
        item_id: Uuid,
        is_folder: bool,
        original: String,
        draft: String,
    },
}

/// Result of pressing Enter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// The trimmed new name; the caller should send the rename.
    Committed(String),
    /// Same name as before, or nothing was being edited.
    Unchanged,
    /// Validation failed; the text reverts and the reason is shown to the
    /// user.
    Rejected(String),
}

/// Rename editor for one row.
#[derive(Debug, Clone, Default)]
pub struct RenameEditor {
    state: State,
}

impl RenameEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start editing `item` with its current name as the draft.
    pub fn begin(&mut self, item: &Item) {
        self.state = State::Editing {
            item_id: item.id,
            is_folder: item.is_folder,
            original: item.name.clone(),
            draft: item.name.clone(),
        };
    }

    /// Replace the draft text. Ignored while idle.
    pub fn input(&mut self, text: impl Into<String>) {
        if let State::Editing { draft, .. } = &mut self.state {
            *draft = text.into();
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, State::Editing { .. })
    }

    /// Current draft, while editing.
    pub fn draft(&self) -> Option<&str> {
        match &self.state {
            State::Editing { draft, .. } => Some(draft),
            State::Idle => None,
        }
    }

    /// Validate the draft against `siblings` (the other items of the same
    /// folder) and return to idle. Only siblings of the same kind clash.
    pub fn commit(&mut self, siblings: &[Item]) -> RenameOutcome {
        let State::Editing {
            item_id,
            is_folder,
            original,
            draft,
        } = std::mem::take(&mut self.state)
        else {
            return RenameOutcome::Unchanged;
        };

        let name = draft.trim();
        if name.is_empty() {
            return RenameOutcome::Rejected("Name cannot be empty".to_string());
        }
        if name.contains(SEPARATOR) {
            return RenameOutcome::Rejected(format!("Name cannot contain \"{SEPARATOR}\""));
        }
        if name == original {
            return RenameOutcome::Unchanged;
        }

        let clash = siblings
            .iter()
            .any(|s| s.id != item_id && s.is_folder == is_folder && s.name == name);
        if clash {
            let kind = if is_folder { "folder" } else { "file" };
            return RenameOutcome::Rejected(format!(
                "A {kind} with the name \"{name}\" already exists"
            ));
        }

        RenameOutcome::Committed(name.to_string())
    }

    /// Escape or blur: discard the draft.
    pub fn cancel(&mut self) {
        self.state = State::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn item(name: &str, is_folder: bool) -> Item {
        let now = Utc::now();
        Item {
            id: Uuid::new_v4(),
            path: format!("home/{name}"),
            is_folder,
            file_key: None,
            parent_folder_id: Some(Uuid::nil()),
            name: name.to_string(),
            created_by: "alice".to_string(),
            created_at: now,
            updated_by: "alice".to_string(),
            updated_at: now,
        }
    }

    #[test]
    fn test_commit_trimmed_name() {
        let docs = item("Docs", true);
        let mut editor = RenameEditor::new();
        editor.begin(&docs);
        assert_eq!(editor.draft(), Some("Docs"));
        editor.input("  Documents ");
        assert_eq!(
            editor.commit(std::slice::from_ref(&docs)),
            RenameOutcome::Committed("Documents".to_string())
        );
        assert!(!editor.is_editing());
    }

    #[test]
    fn test_empty_and_same_name() {
        let docs = item("Docs", true);
        let mut editor = RenameEditor::new();

        editor.begin(&docs);
        editor.input("   ");
        assert_eq!(
            editor.commit(&[]),
            RenameOutcome::Rejected("Name cannot be empty".to_string())
        );
        assert!(!editor.is_editing());

        editor.begin(&docs);
        assert_eq!(editor.commit(&[]), RenameOutcome::Unchanged);
    }

    #[test]
    fn test_duplicate_only_within_same_kind() {
        let docs = item("Docs", true);
        let other_folder = item("Notes", true);
        let same_name_file = item("Readme", false);
        let siblings = vec![docs.clone(), other_folder, same_name_file];

        let mut editor = RenameEditor::new();
        editor.begin(&docs);
        editor.input("Notes");
        assert_eq!(
            editor.commit(&siblings),
            RenameOutcome::Rejected("A folder with the name \"Notes\" already exists".to_string())
        );

        editor.begin(&docs);
        editor.input("Readme");
        assert_eq!(
            editor.commit(&siblings),
            RenameOutcome::Committed("Readme".to_string())
        );
    }

    #[test]
    fn test_separator_rejected() {
        let docs = item("Docs", true);
        let mut editor = RenameEditor::new();
        editor.begin(&docs);
        editor.input("a/b");
        assert_eq!(
            editor.commit(std::slice::from_ref(&docs)),
            RenameOutcome::Rejected("Name cannot contain \"/\"".to_string())
        );
        assert!(!editor.is_editing());
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut editor = RenameEditor::new();
        editor.begin(&item("Docs", true));
        editor.input("Other");
        editor.cancel();
        assert!(editor.draft().is_none());
        assert_eq!(editor.commit(&[]), RenameOutcome::Unchanged);
    }
}
