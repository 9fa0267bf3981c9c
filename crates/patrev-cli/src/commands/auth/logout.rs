use patrev_auth::SharedSession;
use patrev_auth::token_store::TOKEN_ENV_VAR;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Debug, Serialize, PartialEq, Eq)]
struct AuthLogoutResponse {
    cleared: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<String>,
}

impl AuthLogoutResponse {
    fn new(token_survives: bool) -> Self {
        Self {
            cleared: true,
            note: token_survives.then(|| {
                format!("{TOKEN_ENV_VAR} is still set; the next command will be logged in with it")
            }),
        }
    }
}

pub fn handle(session: &SharedSession, flags: &GlobalFlags) -> anyhow::Result<()> {
    session.logout()?;
    let survives = session.token_survives_logout();
    if survives {
        tracing::warn!("{TOKEN_ENV_VAR} is set; logout cannot clear it");
    }
    output(&AuthLogoutResponse::new(survives), flags.format)
}
