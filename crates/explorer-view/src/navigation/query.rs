//! Mirror of the breadcrumb stack in URL query parameters.
//!
//! Three parallel parameters describe the trail:
//!
//! | Parameter  | Content                                        |
//! |------------|------------------------------------------------|
//! | `folderId` | id of the current folder                       |
//! | `path`     | crumb names joined with `/` (`home/Docs/Sub`)  |
//! | `ids`      | crumb ids joined with `,`, root as `null`      |
//!
//! At the root all three are absent.

use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use explorer_core::error::AppError;
use explorer_entity::item::path::SEPARATOR;

use super::breadcrumbs::{Breadcrumbs, Crumb};

/// Query key of the current folder id.
pub const FOLDER_ID_PARAM: &str = "folderId";
/// Query key of the `/`-joined crumb names.
pub const PATH_PARAM: &str = "path";
/// Query key of the `,`-joined crumb ids.
pub const IDS_PARAM: &str = "ids";
/// Stand-in for the root's missing id inside `ids`.
pub const ROOT_ID_SENTINEL: &str = "null";

const NAVIGATION_PARAMS: [&str; 3] = [FOLDER_ID_PARAM, PATH_PARAM, IDS_PARAM];

/// The raw navigation parameters of a URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationQuery {
    /// `folderId` value.
    pub folder_id: Option<String>,
    /// `path` value.
    pub path: Option<String>,
    /// `ids` value.
    pub ids: Option<String>,
}

/// Outcome of rebuilding navigation from a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Restored {
    /// No navigation parameters: start at the root.
    Root(Breadcrumbs),
    /// The full trail was rebuilt.
    Full(Breadcrumbs),
    /// Only `folderId` was present. The folder is current but the trail
    /// shows the root alone.
    Degraded {
        /// Folder to list.
        folder_id: Uuid,
        /// Root-only trail.
        breadcrumbs: Breadcrumbs,
    },
}

impl Restored {
    /// The folder whose children should be listed; `None` for the root.
    pub fn folder_id(&self) -> Option<Uuid> {
        match self {
            Self::Root(crumbs) | Self::Full(crumbs) => crumbs.current_folder_id(),
            Self::Degraded { folder_id, .. } => Some(*folder_id),
        }
    }

    /// The trail to display.
    pub fn breadcrumbs(&self) -> &Breadcrumbs {
        match self {
            Self::Root(crumbs) | Self::Full(crumbs) => crumbs,
            Self::Degraded { breadcrumbs, .. } => breadcrumbs,
        }
    }

    /// Take the trail, dropping the restore classification.
    pub fn into_breadcrumbs(self) -> Breadcrumbs {
        match self {
            Self::Root(crumbs) | Self::Full(crumbs) => crumbs,
            Self::Degraded { breadcrumbs, .. } => breadcrumbs,
        }
    }
}

impl NavigationQuery {
    /// Serialize a trail. At the root every parameter is `None`.
    pub fn from_breadcrumbs(crumbs: &Breadcrumbs) -> Self {
        let Some(current) = crumbs.current_folder_id() else {
            return Self::default();
        };

        let names: Vec<&str> = crumbs.iter().map(|c| c.name.as_str()).collect();
        let ids: Vec<String> = crumbs
            .iter()
            .map(|c| match c.id {
                Some(id) => id.to_string(),
                None => ROOT_ID_SENTINEL.to_string(),
            })
            .collect();

        Self {
            folder_id: Some(current.to_string()),
            path: Some(names.join("/")),
            ids: Some(ids.join(",")),
        }
    }

    /// Read the navigation parameters from a raw query string (without the
    /// leading `?`). Empty values count as absent.
    pub fn from_query(query: &str) -> Self {
        let mut nav = Self::default();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            if value.is_empty() {
                continue;
            }
            let slot = match &*key {
                FOLDER_ID_PARAM => &mut nav.folder_id,
                PATH_PARAM => &mut nav.path,
                IDS_PARAM => &mut nav.ids,
                _ => continue,
            };
            *slot = Some(value.into_owned());
        }
        nav
    }

    /// Read the navigation parameters of `url`.
    pub fn from_url(url: &Url) -> Self {
        Self::from_query(url.query().unwrap_or_default())
    }

    /// Whether no parameter is set (the root).
    pub fn is_empty(&self) -> bool {
        self.folder_id.is_none() && self.path.is_none() && self.ids.is_none()
    }

    /// Parameters in URL order, skipping absent ones.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        [
            (FOLDER_ID_PARAM, &self.folder_id),
            (PATH_PARAM, &self.path),
            (IDS_PARAM, &self.ids),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.clone().map(|v| (key, v)))
        .collect()
    }

    /// Replace the navigation parameters of `url`, keeping every other
    /// parameter in place. An empty query string is removed entirely.
    pub fn apply_to_url(&self, url: &mut Url) {
        let kept: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(key, _)| !NAVIGATION_PARAMS.contains(&&**key))
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        let ours = self.to_query_pairs();

        if kept.is_empty() && ours.is_empty() {
            url.set_query(None);
            return;
        }

        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        for (key, value) in &kept {
            pairs.append_pair(key, value);
        }
        for (key, value) in &ours {
            pairs.append_pair(key, value);
        }
    }

    /// Rebuild navigation state.
    ///
    /// With all three parameters the trail is rebuilt by pairing names and
    /// ids position by position; crumb paths are the cumulative names. With
    /// only `folderId` the folder is restored and the trail degrades to the
    /// root. Malformed ids, a trail that does not start at the root, or a
    /// `folderId` that disagrees with the last crumb are validation errors.
    pub fn restore(&self, root_name: &str) -> Result<Restored, AppError> {
        let folder_id = self.folder_id.as_deref().map(parse_id).transpose()?;

        let (Some(folder_id), Some(path), Some(ids)) = (folder_id, &self.path, &self.ids) else {
            return Ok(match folder_id {
                Some(folder_id) => Restored::Degraded {
                    folder_id,
                    breadcrumbs: Breadcrumbs::new(root_name),
                },
                None => Restored::Root(Breadcrumbs::new(root_name)),
            });
        };

        let names: Vec<&str> = path.split(SEPARATOR).filter(|part| !part.is_empty()).collect();
        let ids: Vec<&str> = ids.split(',').collect();
        if names.len() != ids.len() {
            return Err(AppError::validation(format!(
                "{PATH_PARAM} and {IDS_PARAM} must have the same number of entries"
            )));
        }

        let mut cumulative = String::new();
        let mut crumbs = Vec::new();

        for (name, id) in names.into_iter().zip(ids) {
            cumulative.push_str(name);
            cumulative.push(SEPARATOR);
            let id = match id {
                ROOT_ID_SENTINEL => None,
                other => Some(parse_id(other)?),
            };
            crumbs.push(Crumb {
                id,
                name: name.to_string(),
                path: cumulative.clone(),
            });
        }

        let crumbs = Breadcrumbs::from_crumbs(crumbs)?;
        if crumbs.current_folder_id() != Some(folder_id) {
            return Err(AppError::validation(format!(
                "{FOLDER_ID_PARAM} does not match the last entry of {IDS_PARAM}"
            )));
        }

        Ok(Restored::Full(crumbs))
    }
}

fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw.trim())
        .map_err(|_| AppError::validation(format!("Invalid folder id '{raw}'")))
}
