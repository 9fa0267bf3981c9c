use clap::Subcommand;

use crate::cli::subcommands::{
    AuthCommands, ChatCommands, DocumentCommands, ProjectCommands, ReviewCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Log in, log out, or show the current session.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Patent review projects.
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },
    /// Documents attached to a project.
    Document {
        #[command(subcommand)]
        action: DocumentCommands,
    },
    /// Assistant chat for a project.
    Chat {
        #[command(subcommand)]
        action: ChatCommands,
    },
    /// Review configuration and results.
    Review {
        #[command(subcommand)]
        action: ReviewCommands,
    },
}
