//! Settings of the item tree itself.

use serde::{Deserialize, Serialize};

/// Root folder and bootstrap identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplorerConfig {
    /// Display name of the root folder; its path is `"{root_name}/"`.
    #[serde(default = "default_root_name")]
    pub root_name: String,
    /// Identity recorded as creator of the root folder.
    #[serde(default = "default_system_identity")]
    pub system_identity: String,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            root_name: default_root_name(),
            system_identity: default_system_identity(),
        }
    }
}

impl ExplorerConfig {
    /// Materialized path of the root folder.
    pub fn root_path(&self) -> String {
        format!("{}/", self.root_name)
    }
}

fn default_root_name() -> String {
    "home".to_string()
}

fn default_system_identity() -> String {
    "system".to_string()
}
