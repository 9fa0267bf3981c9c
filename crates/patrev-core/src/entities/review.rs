use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ReviewStatus;

/// One configurable check the review engine can run.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewParameter {
    pub id: String,
    pub name: String,
    pub description: String,
    pub default_prompt: String,
    pub is_enabled: bool,
    /// User override for `default_prompt`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_prompt: Option<String>,
}

/// Request body for `POST /api/projects/{id}/review`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReviewConfig {
    pub parameters: Vec<ReviewParameter>,
    pub guidelines: String,
}

impl ReviewConfig {
    /// Keep only the enabled parameters, verbatim, alongside the guidelines.
    #[must_use]
    pub fn from_enabled(parameters: &[ReviewParameter], guidelines: &str) -> Self {
        Self {
            parameters: parameters
                .iter()
                .filter(|param| param.is_enabled)
                .cloned()
                .collect(),
            guidelines: guidelines.to_string(),
        }
    }
}

/// A downloadable file produced by a review.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Artifact {
    pub url: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChangeCategory {
    pub name: String,
    pub changes: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSummary {
    pub total_changes: u32,
    pub categories: Vec<ChangeCategory>,
}

impl ReviewSummary {
    /// Percentage of `total_changes` each category accounts for, in order.
    ///
    /// A zero total yields 0.0 for every category rather than NaN.
    #[must_use]
    pub fn category_shares(&self) -> Vec<(&str, f64)> {
        self.categories
            .iter()
            .map(|category| {
                let share = if self.total_changes == 0 {
                    0.0
                } else {
                    f64::from(category.changes) / f64::from(self.total_changes) * 100.0
                };
                (category.name.as_str(), share)
            })
            .collect()
    }
}

/// Output of a finished review run. Produced entirely server-side.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResult {
    pub id: String,
    pub project_id: String,
    #[serde(with = "crate::timestamp::iso_utc")]
    #[schemars(with = "String")]
    pub completed_at: DateTime<Utc>,
    pub status: ReviewStatus,
    pub updated_specification: Artifact,
    pub change_log: Artifact,
    pub summary: ReviewSummary,
}
