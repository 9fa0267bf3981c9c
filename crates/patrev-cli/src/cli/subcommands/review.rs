use clap::{Args, Subcommand};

/// Review commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ReviewCommands {
    /// List the available review parameters and their defaults.
    Parameters { project: String },
    /// Configure and start a review.
    Start(ReviewStartArgs),
    /// Show the results of a finished review.
    Results { project: String },
}

#[derive(Clone, Debug, Args)]
pub struct ReviewStartArgs {
    pub project: String,
    /// Enable a parameter by id (repeatable).
    #[arg(long)]
    pub enable: Vec<String>,
    /// Disable a parameter by id (repeatable).
    #[arg(long)]
    pub disable: Vec<String>,
    /// Override a parameter's prompt, as `id=prompt` (repeatable).
    #[arg(long)]
    pub prompt: Vec<String>,
    /// Free-text guidelines for the review.
    #[arg(long)]
    pub guidelines: Option<String>,
}
