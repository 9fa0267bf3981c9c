use clap::Subcommand;

/// Chat commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ChatCommands {
    /// Show the chat history of a project.
    History { project: String },
    /// Send a message to the project assistant.
    Send {
        project: String,
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },
}
