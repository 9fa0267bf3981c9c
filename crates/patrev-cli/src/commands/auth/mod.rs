mod login;
mod logout;
mod status;

use patrev_auth::SharedSession;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;

/// Handle `patrev auth <subcommand>`.
pub fn handle(
    action: &AuthCommands,
    session: &SharedSession,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login(args) => login::handle(args, session, flags),
        AuthCommands::Logout => logout::handle(session, flags),
        AuthCommands::Status => status::handle(session, flags),
    }
}
