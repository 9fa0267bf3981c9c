mod auth;
mod chat;
mod document;
mod project;
mod review;

pub use auth::{AuthCommands, AuthLoginArgs};
pub use chat::ChatCommands;
pub use document::DocumentCommands;
pub use project::ProjectCommands;
pub use review::{ReviewCommands, ReviewStartArgs};
