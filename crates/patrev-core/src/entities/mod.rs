//! Entity structs for the review API's resources.
//!
//! Field names serialize as `camelCase` to match the API. All structs derive
//! `JsonSchema` so the wire format can be validated in tests.

mod chat;
mod document;
mod project;
mod review;
mod user;

pub use chat::{ChatMessage, NewChatMessage};
pub use document::Document;
pub use project::{NewProject, Project};
pub use review::{
    Artifact, ChangeCategory, ReviewConfig, ReviewParameter, ReviewResult, ReviewSummary,
};
pub use user::User;
