use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Project { action } => commands::project::handle(&action, ctx, flags).await,
        Commands::Document { action } => commands::document::handle(&action, ctx, flags).await,
        Commands::Chat { action } => commands::chat::handle(&action, ctx, flags).await,
        Commands::Review { action } => commands::review::handle(&action, ctx, flags).await,
        Commands::Auth { .. } => anyhow::bail!("auth commands are handled before dispatch"),
    }
}
