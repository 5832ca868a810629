//! File types selected by an item's `file_key`.
//!
//! Files carry no content here; a file type says how a file looks and which
//! opener shows it. Types are plain table entries resolved by key.

use serde::{Deserialize, Serialize};

use explorer_core::error::AppError;

/// Description of one file type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileType {
    /// Display name, shown in the details `Type` column.
    pub name: String,
    /// Value stored in `file_key`.
    pub key: String,
    /// Icon reference; when absent an initials badge is drawn instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Accent colour (`#rrggbb`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Handle of the component that opens files of this type.
    pub opener: String,
}

impl FileType {
    pub fn new(key: impl Into<String>, name: impl Into<String>, opener: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
            icon: None,
            color: None,
            opener: opener.into(),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Registered file types, in registration order (the "new file" menu order).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileTypeRegistry {
    types: Vec<FileType>,
}

impl FileTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry, rejecting duplicate keys.
    pub fn from_types(types: impl IntoIterator<Item = FileType>) -> Result<Self, AppError> {
        let mut registry = Self::new();
        for file_type in types {
            registry.register(file_type)?;
        }
        Ok(registry)
    }

    /// Add a type. Keys must be non-blank and unique.
    pub fn register(&mut self, file_type: FileType) -> Result<(), AppError> {
        if file_type.key.trim().is_empty() {
            return Err(AppError::validation("File type key cannot be empty"));
        }
        if self.resolve(&file_type.key).is_some() {
            return Err(AppError::conflict(format!(
                "File type '{}' is already registered",
                file_type.key
            )));
        }
        self.types.push(file_type);
        Ok(())
    }

    pub fn resolve(&self, key: &str) -> Option<&FileType> {
        self.types.iter().find(|t| t.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileType> {
        self.types.iter()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Two-letter badge for a file key: the first two characters of a single
/// word, or the first letters of the first two words of a hyphenated key.
pub fn initials(key: &str) -> String {
    let mut words = key.split('-').filter(|w| !w.is_empty());
    let badge: String = match (words.next(), words.next()) {
        (Some(first), Some(second)) => first.chars().take(1).chain(second.chars().take(1)).collect(),
        (Some(only), None) => only.chars().take(2).collect(),
        _ => String::new(),
    };
    badge.to_uppercase()
}
