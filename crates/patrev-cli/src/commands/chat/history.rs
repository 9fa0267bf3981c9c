use std::sync::Arc;

use patrev_core::entities::ChatMessage;
use patrev_views::ProjectDetailsView;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::page::loaded;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ChatHistoryResponse<'a> {
    messages: &'a [ChatMessage],
}

pub async fn run(project: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut view = ProjectDetailsView::new(Arc::clone(&ctx.client), project);
    view.load().await;

    let details = loaded(view.state(), &format!("project '{project}'"))?;
    output(
        &ChatHistoryResponse {
            messages: &details.messages,
        },
        flags.format,
    )
}
