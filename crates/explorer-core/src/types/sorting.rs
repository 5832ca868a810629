//! Sort modes for child listings.
//!
//! Every listing is partitioned folders-first; the [`SortBy`] mode only
//! orders items within each partition.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl SortDirection {
    /// Return the SQL keyword for this direction.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// The column an item listing is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Creation timestamp.
    CreatedAt,
    /// Display name, compared case-insensitively.
    Name,
}

/// One of the four user-selectable orderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    /// Oldest first.
    CreatedAsc,
    /// Newest first.
    CreatedDesc,
    /// A to Z.
    #[default]
    NameAsc,
    /// Z to A.
    NameDesc,
}

impl SortBy {
    /// All modes in menu order.
    pub const ALL: [SortBy; 4] = [
        Self::CreatedAsc,
        Self::CreatedDesc,
        Self::NameAsc,
        Self::NameDesc,
    ];

    /// The column this mode orders by.
    pub fn key(&self) -> SortKey {
        match self {
            Self::CreatedAsc | Self::CreatedDesc => SortKey::CreatedAt,
            Self::NameAsc | Self::NameDesc => SortKey::Name,
        }
    }

    /// The direction this mode orders in.
    pub fn direction(&self) -> SortDirection {
        match self {
            Self::CreatedAsc | Self::NameAsc => SortDirection::Asc,
            Self::CreatedDesc | Self::NameDesc => SortDirection::Desc,
        }
    }

    /// Wire name, as used in query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreatedAsc => "created_asc",
            Self::CreatedDesc => "created_desc",
            Self::NameAsc => "name_asc",
            Self::NameDesc => "name_desc",
        }
    }

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::CreatedAsc => "Create Time ASC",
            Self::CreatedDesc => "Create Time DESC",
            Self::NameAsc => "Name ASC",
            Self::NameDesc => "Name DESC",
        }
    }

    /// Full `ORDER BY` body. Built only from this closed set, never from
    /// caller input.
    pub fn order_by_sql(&self) -> &'static str {
        match self {
            Self::CreatedAsc => "is_folder DESC, created_at ASC, id ASC",
            Self::CreatedDesc => "is_folder DESC, created_at DESC, id ASC",
            Self::NameAsc => "is_folder DESC, LOWER(name) ASC, name ASC, id ASC",
            Self::NameDesc => "is_folder DESC, LOWER(name) DESC, name DESC, id ASC",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortBy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| {
                AppError::validation(format!(
                    "Invalid sortBy '{s}': expected one of created_asc, created_desc, name_asc, name_desc"
                ))
            })
    }
}
