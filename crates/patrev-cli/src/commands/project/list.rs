use std::sync::Arc;

use patrev_core::entities::Project;
use patrev_views::DashboardView;
use patrev_views::dashboard::EMPTY_MESSAGE;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::page::loaded;
use crate::context::AppContext;
use crate::output::output;
use crate::ui;

#[derive(Debug, Serialize)]
struct ProjectListResponse<'a> {
    projects: &'a [Project],
}

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut view = DashboardView::new(Arc::clone(&ctx.client));
    view.load().await;

    let projects = loaded(view.state(), "project list")?;
    if view.is_empty() {
        ui::note(flags, EMPTY_MESSAGE);
    }
    output(&ProjectListResponse { projects }, flags.format)
}
