use std::path::PathBuf;

use clap::Subcommand;

/// Document commands.
#[derive(Clone, Debug, Subcommand)]
pub enum DocumentCommands {
    /// List a project's documents.
    List {
        project: String,
        /// Only documents of this type: specification, disclosure, drawing
        #[arg(long = "type")]
        kind: Option<String>,
    },
    /// Upload a file to a project.
    Upload {
        project: String,
        path: PathBuf,
        /// specification, disclosure, or drawing
        #[arg(long = "type")]
        kind: String,
    },
    /// Remove a document from a project.
    Remove { project: String, id: String },
}
