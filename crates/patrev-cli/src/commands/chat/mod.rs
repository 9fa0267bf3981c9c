mod history;
mod send;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ChatCommands;
use crate::context::AppContext;

/// Handle `patrev chat`.
pub async fn handle(action: &ChatCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        ChatCommands::History { project } => history::run(project, ctx, flags).await,
        ChatCommands::Send { project, message } => {
            send::run(project, &message.join(" "), ctx, flags).await
        }
    }
}
