use patrev_auth::{Session, SharedSession};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Debug, Serialize, PartialEq, Eq)]
struct AuthStatusResponse {
    authenticated: bool,
    email: Option<String>,
    name: Option<String>,
    note: Option<String>,
}

impl From<Session> for AuthStatusResponse {
    fn from(session: Session) -> Self {
        let note = match (&session.token, &session.user) {
            (None, _) => Some("not logged in".to_string()),
            (Some(_), None) => Some("session restored from a saved token".to_string()),
            (Some(_), Some(_)) => None,
        };
        Self {
            authenticated: session.is_authenticated(),
            email: session.user.as_ref().map(|user| user.email.clone()),
            name: session.user.map(|user| user.name),
            note,
        }
    }
}

pub fn handle(session: &SharedSession, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&AuthStatusResponse::from(session.snapshot()), flags.format)
}
