use std::io::{BufRead, IsTerminal, Write};
use std::sync::OnceLock;

use patrev_views::Confirm;

use crate::cli::{GlobalFlags, OutputFormat};

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub table_color: bool,
    pub term_width: Option<usize>,
    pub interactive: bool,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let is_tty = std::io::stdout().is_terminal();
    let table_color = is_tty
        && flags.format == OutputFormat::Table
        && !flags.quiet
        && std::env::var_os("NO_COLOR").is_none();

    let term_width = std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 40);

    let _ = UI_PREFS.set(UiPrefs {
        table_color,
        term_width,
        interactive: std::io::stdin().is_terminal(),
    });
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs {
        table_color: false,
        term_width: None,
        interactive: false,
    })
}

/// Print a hint to stderr unless `--quiet`.
pub fn note(flags: &GlobalFlags, message: &str) {
    if !flags.quiet {
        eprintln!("{message}");
    }
}

/// Terminal confirmation for destructive commands.
///
/// `--yes` or `general.confirm_destructive = false` answers yes without
/// asking. Without a terminal to ask on, the answer is no.
pub struct PromptConfirm {
    assume_yes: bool,
    interactive: bool,
}

impl PromptConfirm {
    #[must_use]
    pub fn new(flags: &GlobalFlags, confirm_destructive: bool) -> Self {
        Self {
            assume_yes: flags.yes || !confirm_destructive,
            interactive: prefs().interactive,
        }
    }
}

impl Confirm for PromptConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        if !self.interactive {
            tracing::warn!("confirmation required; rerun with --yes to proceed");
            return false;
        }

        eprint!("{prompt} [y/N] ");
        let _ = std::io::stderr().flush();
        let mut answer = String::new();
        if std::io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        is_yes(&answer)
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
