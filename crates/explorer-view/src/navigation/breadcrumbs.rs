//! The breadcrumb stack.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use explorer_core::error::AppError;
use explorer_entity::Item;

/// One level of the breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crumb {
    /// Folder id; `None` for the root.
    pub id: Option<Uuid>,
    /// Display name.
    pub name: String,
    /// Materialized folder path, with trailing slash.
    pub path: String,
}

impl Crumb {
    /// The root crumb for a tree whose root folder is named `root_name`.
    pub fn root(root_name: &str) -> Self {
        Self {
            id: None,
            name: root_name.to_string(),
            path: format!("{root_name}/"),
        }
    }

    /// Whether this crumb stands for the root folder.
    pub fn is_root(&self) -> bool {
        self.id.is_none()
    }
}

/// Ordered trail of folders from the root to the current folder.
///
/// Index 0 is always the root, so the stack is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumbs {
    stack: Vec<Crumb>,
}

impl Default for Breadcrumbs {
    fn default() -> Self {
        Self::new("home")
    }
}

impl Breadcrumbs {
    /// A trail positioned at the root.
    pub fn new(root_name: &str) -> Self {
        Self {
            stack: vec![Crumb::root(root_name)],
        }
    }

    /// Build a trail from crumbs. The first crumb must be the root and no
    /// other crumb may be.
    pub fn from_crumbs(crumbs: Vec<Crumb>) -> Result<Self, AppError> {
        let Some((first, rest)) = crumbs.split_first() else {
            return Err(AppError::validation("Breadcrumbs cannot be empty"));
        };
        if !first.is_root() || rest.iter().any(Crumb::is_root) {
            return Err(AppError::validation(
                "Breadcrumbs must start at the root and contain it only once",
            ));
        }
        Ok(Self { stack: crumbs })
    }

    /// Open a folder: push it and make it current. Files are ignored and
    /// `false` is returned.
    pub fn descend(&mut self, item: &Item) -> bool {
        if !item.is_folder {
            return false;
        }
        self.stack.push(Crumb {
            id: Some(item.id),
            name: item.name.clone(),
            path: item.path.clone(),
        });
        true
    }

    /// Truncate the trail so the crumb at `index` becomes current.
    pub fn jump_to(&mut self, index: usize) -> Result<&Crumb, AppError> {
        if index >= self.stack.len() {
            return Err(AppError::validation(format!(
                "Breadcrumb index {index} out of range (depth {})",
                self.stack.len()
            )));
        }
        self.stack.truncate(index + 1);
        Ok(self.current())
    }

    /// The current folder's crumb.
    pub fn current(&self) -> &Crumb {
        // The root is never popped.
        &self.stack[self.stack.len() - 1]
    }

    /// The current folder id; `None` at the root.
    pub fn current_folder_id(&self) -> Option<Uuid> {
        self.current().id
    }

    /// The current folder path.
    pub fn current_path(&self) -> &str {
        &self.current().path
    }

    /// The root crumb.
    pub fn root(&self) -> &Crumb {
        &self.stack[0]
    }

    /// Whether the current folder is the root.
    pub fn is_at_root(&self) -> bool {
        self.stack.len() == 1
    }

    /// Number of crumbs, root included.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Crumbs from the root down.
    pub fn iter(&self) -> impl Iterator<Item = &Crumb> {
        self.stack.iter()
    }
}
