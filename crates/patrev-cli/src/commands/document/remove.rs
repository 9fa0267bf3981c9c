use std::sync::Arc;

use patrev_views::ProjectDetailsView;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::ui::PromptConfirm;

#[derive(Debug, Serialize)]
struct DocumentRemoveResponse<'a> {
    project: &'a str,
    id: &'a str,
    removed: bool,
}

pub async fn run(project: &str, id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let confirm = PromptConfirm::new(flags, ctx.config.general.confirm_destructive);
    let mut view = ProjectDetailsView::new(Arc::clone(&ctx.client), project);

    if !view.remove_document(id, &confirm).await {
        anyhow::bail!("document '{id}' was not removed");
    }
    output(
        &DocumentRemoveResponse {
            project,
            id,
            removed: true,
        },
        flags.format,
    )
}
