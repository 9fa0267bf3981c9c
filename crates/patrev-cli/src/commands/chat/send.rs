use std::sync::Arc;

use patrev_core::entities::ChatMessage;
use patrev_views::ProjectDetailsView;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::page::loaded;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ChatSendResponse<'a> {
    messages: &'a [ChatMessage],
}

pub async fn run(project: &str, message: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if message.trim().is_empty() {
        anyhow::bail!("message is empty");
    }

    let mut view = ProjectDetailsView::new(Arc::clone(&ctx.client), project);
    view.load().await;
    let before = loaded(view.state(), &format!("project '{project}'"))?.messages.len();

    if !view.send_message(message).await {
        anyhow::bail!("message was not sent");
    }

    let messages = &loaded(view.state(), &format!("project '{project}'"))?.messages;
    output(
        &ChatSendResponse {
            messages: &messages[before..],
        },
        flags.format,
    )
}
