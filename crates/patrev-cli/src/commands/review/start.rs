use std::sync::Arc;

use patrev_client::Transport;
use patrev_core::entities::ReviewConfig;
use patrev_views::{ReviewerState, ReviewerView};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ReviewStartArgs;
use crate::commands::shared::page::loaded;
use crate::commands::shared::parse::parse_pair;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ReviewStartResponse {
    project: String,
    started: bool,
    config: ReviewConfig,
}

pub async fn run(args: &ReviewStartArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let project = args.project.as_str();
    let mut view = ReviewerView::new(Arc::clone(&ctx.client), project);
    view.load().await;
    let state = loaded(view.state(), &format!("project '{project}'"))?;

    check_known_ids(state, args)?;
    apply_args(&mut view, args)?;

    if !view.can_start_review() {
        anyhow::bail!("no review parameter is enabled; pass --enable <id>");
    }
    let Some(config) = view.config() else {
        anyhow::bail!("review configuration is unavailable");
    };
    if !view.start_review().await {
        anyhow::bail!("review for project '{project}' did not start");
    }

    output(
        &ReviewStartResponse {
            project: project.to_string(),
            started: view.is_started(),
            config,
        },
        flags.format,
    )
}

fn check_known_ids(state: &ReviewerState, args: &ReviewStartArgs) -> anyhow::Result<()> {
    let prompt_ids = args
        .prompt
        .iter()
        .map(|raw| parse_pair(raw, "prompt").map(|(id, _)| id))
        .collect::<anyhow::Result<Vec<_>>>()?;

    for id in args.enable.iter().chain(&args.disable).map(String::as_str).chain(prompt_ids) {
        if !state.parameters.iter().any(|param| param.id == id) {
            let known = state
                .parameters
                .iter()
                .map(|param| param.id.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            anyhow::bail!("unknown review parameter '{id}' (known: {known})");
        }
    }
    Ok(())
}

/// Bring the loaded parameters in line with the command-line flags. Enabling
/// an already enabled parameter is a no-op.
fn apply_args<T: Transport>(view: &mut ReviewerView<T>, args: &ReviewStartArgs) -> anyhow::Result<()> {
    for (ids, wanted) in [(&args.enable, true), (&args.disable, false)] {
        for id in ids {
            if is_enabled(view, id) != Some(wanted) {
                view.toggle_parameter(id);
            }
        }
    }
    for raw in &args.prompt {
        let (id, prompt) = parse_pair(raw, "prompt")?;
        view.set_custom_prompt(id, prompt);
    }
    if let Some(guidelines) = &args.guidelines {
        view.set_guidelines(guidelines);
    }
    Ok(())
}

fn is_enabled<T: Transport>(view: &ReviewerView<T>, id: &str) -> Option<bool> {
    view.state()
        .ready()?
        .parameters
        .iter()
        .find(|param| param.id == id)
        .map(|param| param.is_enabled)
}
