use std::sync::Arc;

use patrev_views::NewProjectView;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(name: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut view = NewProjectView::new(Arc::clone(&ctx.client));
    let project = view.create(name).await?;
    output(&project, flags.format)
}
