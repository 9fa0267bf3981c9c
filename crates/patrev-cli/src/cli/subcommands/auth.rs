use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Log in and persist the session token.
    Login(AuthLoginArgs),
    /// Clear the persisted session.
    Logout,
    /// Show current auth status.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    #[arg(long)]
    pub email: String,
    /// Read from the first line of stdin when omitted.
    #[arg(long)]
    pub password: Option<String>,
}
