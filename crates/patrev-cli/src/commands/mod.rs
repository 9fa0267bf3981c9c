pub mod auth;
pub mod chat;
pub mod dispatch;
pub mod document;
pub mod project;
pub mod review;
pub mod shared;
