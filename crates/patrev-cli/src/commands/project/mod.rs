mod create;
mod delete;
mod list;
mod show;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProjectCommands;
use crate::context::AppContext;

/// Handle `patrev project`.
pub async fn handle(
    action: &ProjectCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProjectCommands::List => list::run(ctx, flags).await,
        ProjectCommands::Create { name } => create::run(name, ctx, flags).await,
        ProjectCommands::Show { id } => show::run(id, ctx, flags).await,
        ProjectCommands::Delete { id } => delete::run(id, ctx, flags).await,
    }
}
