use std::sync::Arc;

use patrev_core::entities::{ChatMessage, Document, Project};
use patrev_views::ProjectDetailsView;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::page::loaded;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ProjectDetailResponse<'a> {
    project: &'a Project,
    documents: &'a [Document],
    messages: &'a [ChatMessage],
}

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut view = ProjectDetailsView::new(Arc::clone(&ctx.client), id);
    view.load().await;

    let details = loaded(view.state(), &format!("project '{id}'"))?;
    output(
        &ProjectDetailResponse {
            project: &details.project,
            documents: &details.documents,
            messages: &details.messages,
        },
        flags.format,
    )
}
