//! Item entity model.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use explorer_core::types::{SortBy, SortDirection, SortKey};

use super::path::is_below;

/// A file or folder in the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Item {
    /// Unique item identifier, generated at creation.
    pub id: Uuid,
    /// Materialized location from the root (e.g. `home/Projects/`).
    /// Folders end with `/`, files do not.
    pub path: String,
    /// Whether this row is a folder. Immutable after creation.
    pub is_folder: bool,
    /// File type tag for files; always `None` for folders.
    pub file_key: Option<String>,
    /// Parent folder (null only for the root).
    pub parent_folder_id: Option<Uuid>,
    /// Display name.
    pub name: String,
    /// Identity that created the item; the only one allowed to change it.
    pub created_by: String,
    /// When the item was created.
    pub created_at: DateTime<Utc>,
    /// Identity of the last mutation.
    pub updated_by: String,
    /// When the item was last changed.
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Check if this is the root folder (no parent).
    pub fn is_root(&self) -> bool {
        self.parent_folder_id.is_none()
    }

    /// Whether `actor` is the creator of this item.
    pub fn is_created_by(&self, actor: &str) -> bool {
        self.created_by == actor
    }

    /// Listing order: folders before files, then the requested key, then id.
    pub fn listing_order(&self, other: &Self, sort: SortBy) -> Ordering {
        let by_key = match sort.key() {
            SortKey::CreatedAt => self.created_at.cmp(&other.created_at),
            SortKey::Name => self
                .name
                .to_lowercase()
                .cmp(&other.name.to_lowercase())
                .then_with(|| self.name.cmp(&other.name)),
        };
        let by_key = match sort.direction() {
            SortDirection::Asc => by_key,
            SortDirection::Desc => by_key.reverse(),
        };

        other
            .is_folder
            .cmp(&self.is_folder)
            .then(by_key)
            .then_with(|| self.id.cmp(&other.id))
    }
}

/// Data required to insert a new item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateItem {
    /// Display name.
    pub name: String,
    /// Folder or file.
    pub is_folder: bool,
    /// File type tag (ignored for folders).
    pub file_key: Option<String>,
    /// Parent folder.
    pub parent_folder_id: Option<Uuid>,
    /// Creator identity; also recorded as the first updater.
    pub created_by: String,
    /// Materialized path.
    pub path: String,
}

/// A prefix substitution applied to every descendant path of a moved or
/// renamed folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathRewrite {
    /// Old folder path (with trailing slash).
    pub from: String,
    /// New folder path (with trailing slash).
    pub to: String,
}

impl PathRewrite {
    /// Rewrite `path` if it lies strictly below `from`.
    pub fn apply(&self, path: &str) -> Option<String> {
        if !is_below(&self.from, path) {
            return None;
        }
        Some(format!("{}{}", self.to, &path[self.from.len()..]))
    }
}

/// Field changes for an existing item. `None` leaves a column untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemChanges {
    /// New display name.
    pub name: Option<String>,
    /// New parent folder.
    pub parent_folder_id: Option<Uuid>,
    /// New materialized path.
    pub path: Option<String>,
    /// Identity performing the change.
    pub updated_by: String,
    /// Descendant path rewrite performed in the same transaction.
    pub descendants: Option<PathRewrite>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn item(name: &str, is_folder: bool, minute: u32) -> Item {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, minute, 0).unwrap();
        Item {
            id: Uuid::new_v4(),
            path: format!("home/{name}"),
            is_folder,
            file_key: None,
            parent_folder_id: Some(Uuid::nil()),
            name: name.to_string(),
            created_by: "alice".to_string(),
            created_at: at,
            updated_by: "alice".to_string(),
            updated_at: at,
        }
    }

    #[test]
    fn test_folders_precede_files_in_every_mode() {
        let file = item("aaa", false, 0);
        let folder = item("zzz", true, 59);
        for mode in SortBy::ALL {
            assert_eq!(folder.listing_order(&file, mode), Ordering::Less);
        }
    }

    #[test]
    fn test_name_order_ignores_case() {
        let lower = item("apple", false, 0);
        let upper = item("Banana", false, 0);
        assert_eq!(lower.listing_order(&upper, SortBy::NameAsc), Ordering::Less);
        assert_eq!(lower.listing_order(&upper, SortBy::NameDesc), Ordering::Greater);
    }

    #[test]
    fn test_created_order() {
        let old = item("b", true, 1);
        let new = item("a", true, 2);
        assert_eq!(old.listing_order(&new, SortBy::CreatedAsc), Ordering::Less);
        assert_eq!(old.listing_order(&new, SortBy::CreatedDesc), Ordering::Greater);
    }

    #[test]
    fn test_path_rewrite_only_touches_descendants() {
        let rewrite = PathRewrite {
            from: "home/Docs/".to_string(),
            to: "home/Documents/".to_string(),
        };
        assert_eq!(
            rewrite.apply("home/Docs/a/b").as_deref(),
            Some("home/Documents/a/b")
        );
        assert_eq!(rewrite.apply("home/Docs/"), None);
        assert_eq!(rewrite.apply("home/Docsx/a"), None);
    }

    #[test]
    fn test_serializes_with_column_names() {
        let json = serde_json::to_value(item("Docs", true, 0)).unwrap();
        assert!(json.get("parent_folder_id").is_some());
        assert!(json.get("is_folder").is_some());
    }
}
