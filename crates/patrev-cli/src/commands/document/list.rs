use std::sync::Arc;

use patrev_core::entities::Document;
use patrev_core::enums::DocumentType;
use patrev_views::ProjectDetailsView;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::page::loaded;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct DocumentListResponse<'a> {
    documents: Vec<&'a Document>,
}

pub async fn run(
    project: &str,
    kind: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let kind = kind
        .map(|raw| parse_enum::<DocumentType>(raw, "type"))
        .transpose()?;

    let mut view = ProjectDetailsView::new(Arc::clone(&ctx.client), project);
    view.load().await;
    let details = loaded(view.state(), &format!("project '{project}'"))?;

    let documents = match kind {
        Some(kind) => details.documents_of(kind).collect(),
        None => details.documents.iter().collect(),
    };
    output(&DocumentListResponse { documents }, flags.format)
}
