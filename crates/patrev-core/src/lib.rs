//! # patrev-core
//!
//! Domain types shared by every patrev crate.
//!
//! - Entity structs mirroring the review API's JSON payloads (`camelCase` on
//!   the wire)
//! - Status and kind enums (`snake_case` on the wire)
//! - Validation errors raised before a request is ever issued
//! - Timestamp parsing that tolerates offset-less ISO strings

pub mod entities;
pub mod enums;
pub mod errors;
pub mod timestamp;

pub use errors::CoreError;
