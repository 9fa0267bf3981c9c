use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Sender;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub content: String,
    pub sender: Sender,
    #[serde(with = "crate::timestamp::iso_utc")]
    #[schemars(with = "String")]
    pub timestamp: DateTime<Utc>,
}

/// Request body for `POST /api/projects/{id}/chat`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewChatMessage {
    pub content: String,
}
