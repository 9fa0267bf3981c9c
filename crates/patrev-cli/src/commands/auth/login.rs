use std::io::{BufRead, IsTerminal, Write};

use patrev_auth::{AuthError, SharedSession};
use patrev_core::entities::User;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthLoginArgs;
use crate::output::output;

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    user: Option<User>,
}

pub fn handle(args: &AuthLoginArgs, session: &SharedSession, flags: &GlobalFlags) -> anyhow::Result<()> {
    let password = match &args.password {
        Some(password) => password.clone(),
        None => {
            let stdin = std::io::stdin();
            if stdin.is_terminal() {
                eprint!("Password: ");
                let _ = std::io::stderr().flush();
            }
            read_password(stdin.lock())?
        }
    };

    let session = session.login(&args.email, &password).map_err(|error| match error {
        AuthError::InvalidCredentials => anyhow::anyhow!("login failed: {error}"),
        other => anyhow::Error::new(other).context("login succeeded but the session could not be saved"),
    })?;

    output(
        &AuthLoginResponse {
            authenticated: session.is_authenticated(),
            user: session.user,
        },
        flags.format,
    )
}

/// First line of `reader`, without the line ending.
fn read_password(mut reader: impl BufRead) -> anyhow::Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    let password = line.trim_end_matches(['\r', '\n']);
    if password.is_empty() {
        anyhow::bail!("no password given; pass --password or pipe it on stdin");
    }
    Ok(password.to_string())
}
