use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use patrev_client::UploadFile;
use patrev_core::enums::DocumentType;
use patrev_views::ProjectDetailsView;

use crate::cli::GlobalFlags;
use crate::commands::shared::page::loaded;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    project: &str,
    path: &Path,
    kind: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let kind = parse_enum::<DocumentType>(kind, "type")?;
    let file = UploadFile::from_path(path)
        .await
        .with_context(|| format!("cannot upload {}", path.display()))?;

    let mut view = ProjectDetailsView::new(Arc::clone(&ctx.client), project);
    view.load().await;
    loaded(view.state(), &format!("project '{project}'"))?;

    let file_name = file.file_name.clone();
    if !view.upload_document(file, kind).await {
        return Err(upload_failure(path, &file_name, kind));
    }

    let details = loaded(view.state(), &format!("project '{project}'"))?;
    let document = details
        .documents
        .last()
        .context("uploaded document missing from project")?;
    output(document, flags.format)
}

/// Why an upload returned no document. Only a file the type rejects gets the
/// accepted extensions; anything else was a request failure already logged.
fn upload_failure(path: &Path, file_name: &str, kind: DocumentType) -> anyhow::Error {
    match kind.check_file_name(file_name) {
        Err(rejected) => anyhow::Error::new(rejected),
        Ok(()) => anyhow::anyhow!(
            "upload of {} failed; the request error is logged above",
            path.display()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_extension_lists_accepted_ones() {
        let err = upload_failure(Path::new("/tmp/fig1.gif"), "fig1.gif", DocumentType::Drawing);
        let message = err.to_string();
        assert!(message.contains(".png"), "{message}");
        assert!(message.contains("fig1.gif"), "{message}");
    }

    #[test]
    fn request_failure_does_not_blame_the_file_type() {
        let err = upload_failure(Path::new("/tmp/fig1.png"), "fig1.png", DocumentType::Drawing);
        let message = err.to_string();
        assert!(message.contains("upload of /tmp/fig1.png failed"), "{message}");
        assert!(!message.contains("accepted"), "{message}");
    }
}
