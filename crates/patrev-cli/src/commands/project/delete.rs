use std::sync::Arc;

use patrev_views::ProjectDetailsView;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::ui::PromptConfirm;

#[derive(Debug, Serialize)]
struct ProjectDeleteResponse<'a> {
    id: &'a str,
    deleted: bool,
}

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let confirm = PromptConfirm::new(flags, ctx.config.general.confirm_destructive);
    let mut view = ProjectDetailsView::new(Arc::clone(&ctx.client), id);

    if !view.delete_project(&confirm).await {
        anyhow::bail!("project '{id}' was not deleted");
    }
    output(&ProjectDeleteResponse { id, deleted: true }, flags.format)
}
