use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The signed-in user, as known to the client after login.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct User {
    pub email: String,
    pub name: String,
}
