use std::sync::Arc;

use patrev_core::entities::{Project, ReviewResult};
use patrev_views::ReviewResultsView;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::page::loaded;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct CategoryShare<'a> {
    category: &'a str,
    changes: u32,
    percent: f64,
}

#[derive(Debug, Serialize)]
struct ReviewResultsResponse<'a> {
    project: &'a Project,
    result: &'a ReviewResult,
    categories: Vec<CategoryShare<'a>>,
}

pub async fn run(project: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut view = ReviewResultsView::new(Arc::clone(&ctx.client), project);
    view.load().await;

    let page = loaded(view.state(), &format!("review results for project '{project}'"))?;
    let categories = view
        .category_shares()
        .into_iter()
        .zip(&page.result.summary.categories)
        .map(|((category, percent), raw)| CategoryShare {
            category,
            changes: raw.changes,
            percent: (percent * 10.0).round() / 10.0,
        })
        .collect();

    output(
        &ReviewResultsResponse {
            project: &page.project,
            result: &page.result,
            categories,
        },
        flags.format,
    )
}
