//! View and sort selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use explorer_core::error::AppError;
use explorer_core::types::SortBy;

/// Query key of the view mode.
pub const VIEW_PARAM: &str = "view";
/// Query key of the sort mode.
pub const SORT_PARAM: &str = "sortBy";

/// One of the six presentation layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    ExtraLarge,
    Large,
    #[default]
    Medium,
    Small,
    List,
    Details,
}

/// Size triple of a view mode, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    /// Edge of the item icon.
    pub icon_size: u32,
    /// Tile width; `None` means the row takes its natural width.
    pub item_width: Option<u32>,
    /// Horizontal gap between tiles.
    pub gap: u32,
}

impl Metrics {
    /// Size of the badge drawn inside a file icon.
    pub fn content_icon_size(&self) -> u32 {
        self.icon_size / 2
    }
}

/// How items are arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Wrapped grid of tiles.
    IconGrid,
    /// Single column of rows.
    List,
    /// Table with [`Layout::DETAILS_COLUMNS`].
    Details,
}

impl Layout {
    /// Column headers of the details table.
    pub const DETAILS_COLUMNS: [&'static str; 4] = ["Name", "Modified", "Type", "Creator"];
}

impl ViewMode {
    /// All modes in menu order.
    pub const ALL: [ViewMode; 6] = [
        Self::ExtraLarge,
        Self::Large,
        Self::Medium,
        Self::Small,
        Self::List,
        Self::Details,
    ];

    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ExtraLarge => "extra_large",
            Self::Large => "large",
            Self::Medium => "medium",
            Self::Small => "small",
            Self::List => "list",
            Self::Details => "details",
        }
    }

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ExtraLarge => "Extra Large Icon",
            Self::Large => "Large Icon",
            Self::Medium => "Medium Icon",
            Self::Small => "Small Icon",
            Self::List => "List",
            Self::Details => "Details",
        }
    }

    pub fn metrics(&self) -> Metrics {
        let (icon_size, item_width, gap) = match self {
            Self::ExtraLarge => (200, Some(250), 60),
            Self::Large => (64, Some(200), 50),
            Self::Medium => (48, Some(150), 40),
            Self::Small => (32, Some(120), 30),
            Self::List | Self::Details => (16, None, 0),
        };
        Metrics {
            icon_size,
            item_width,
            gap,
        }
    }

    pub fn layout(&self) -> Layout {
        match self {
            Self::List => Layout::List,
            Self::Details => Layout::Details,
            _ => Layout::IconGrid,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| AppError::validation(format!("Invalid view mode '{s}'")))
    }
}

/// Session view state. Lives only in memory and in the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    #[serde(rename = "view")]
    pub view_mode: ViewMode,
    pub sort_by: SortBy,
}

impl ViewState {
    /// Query parameters for this state.
    pub fn to_query_pairs(&self) -> [(&'static str, &'static str); 2] {
        [
            (VIEW_PARAM, self.view_mode.as_str()),
            (SORT_PARAM, self.sort_by.as_str()),
        ]
    }

    /// Read `view` and `sortBy` from a query string; absent parameters
    /// keep their defaults, unknown values are validation errors.
    pub fn from_query(query: &str) -> Result<Self, AppError> {
        let mut state = Self::default();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match &*key {
                VIEW_PARAM => state.view_mode = value.parse()?,
                SORT_PARAM => state.sort_by = value.parse()?,
                _ => {}
            }
        }
        Ok(state)
    }

    /// Write `view` and `sortBy` into `url`, keeping other parameters.
    pub fn apply_to_url(&self, url: &mut Url) {
        let kept: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(key, _)| key != VIEW_PARAM && key != SORT_PARAM)
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        for (key, value) in &kept {
            pairs.append_pair(key, value);
        }
        for (key, value) in self.to_query_pairs() {
            pairs.append_pair(key, value);
        }
    }
}
