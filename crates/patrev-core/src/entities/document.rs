use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::DocumentType;

/// A file uploaded to a project. The owning project is implied by the
/// request path it was listed under.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: DocumentType,
    #[serde(with = "crate::timestamp::iso_utc")]
    #[schemars(with = "String")]
    pub uploaded_at: DateTime<Utc>,
    /// Remote location the document can be viewed or downloaded from.
    pub url: String,
}
