use std::sync::Arc;

use patrev_core::entities::ReviewParameter;
use patrev_views::ReviewerView;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::page::loaded;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ReviewParametersResponse<'a> {
    project: &'a str,
    parameters: &'a [ReviewParameter],
}

pub async fn run(project: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut view = ReviewerView::new(Arc::clone(&ctx.client), project);
    view.load().await;

    let state = loaded(view.state(), &format!("project '{project}'"))?;
    output(
        &ReviewParametersResponse {
            project: &state.project.name,
            parameters: &state.parameters,
        },
        flags.format,
    )
}
