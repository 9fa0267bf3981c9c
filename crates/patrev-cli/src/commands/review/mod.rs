mod parameters;
mod results;
mod start;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ReviewCommands;
use crate::context::AppContext;

/// Handle `patrev review`.
pub async fn handle(
    action: &ReviewCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ReviewCommands::Parameters { project } => parameters::run(project, ctx, flags).await,
        ReviewCommands::Start(args) => start::run(args, ctx, flags).await,
        ReviewCommands::Results { project } => results::run(project, ctx, flags).await,
    }
}
