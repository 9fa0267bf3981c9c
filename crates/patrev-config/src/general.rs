//! General application configuration.

use serde::{Deserialize, Serialize};

const fn default_confirm_destructive() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Ask before deleting projects or removing documents.
    #[serde(default = "default_confirm_destructive")]
    pub confirm_destructive: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            confirm_destructive: default_confirm_destructive(),
        }
    }
}
