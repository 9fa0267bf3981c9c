mod list;
mod remove;
mod upload;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::DocumentCommands;
use crate::context::AppContext;

/// Handle `patrev document`.
pub async fn handle(
    action: &DocumentCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        DocumentCommands::List { project, kind } => {
            list::run(project, kind.as_deref(), ctx, flags).await
        }
        DocumentCommands::Upload {
            project,
            path,
            kind,
        } => upload::run(project, path, kind, ctx, flags).await,
        DocumentCommands::Remove { project, id } => remove::run(project, id, ctx, flags).await,
    }
}
