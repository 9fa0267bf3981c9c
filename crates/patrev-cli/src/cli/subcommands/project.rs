use clap::Subcommand;

/// Project commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProjectCommands {
    /// List projects.
    List,
    /// Create a project.
    Create { name: String },
    /// Show a project with its documents and chat history.
    Show { id: String },
    /// Delete a project.
    Delete { id: String },
}
