use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ProjectStatus;
use crate::errors::CoreError;

/// A patent review project.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(with = "crate::timestamp::iso_utc")]
    #[schemars(with = "String")]
    pub last_updated: DateTime<Utc>,
    pub status: ProjectStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Request body for `POST /api/projects`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
}

impl NewProject {
    /// Build a create request from user input, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if the trimmed name is empty.
    pub fn new(name: &str) -> Result<Self, CoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::Validation("project name must not be empty".into()));
        }
        Ok(Self {
            name: name.to_string(),
        })
    }
}
