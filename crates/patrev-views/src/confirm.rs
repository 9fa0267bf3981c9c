//! Confirmation gate for destructive actions.

/// Asked before a deletion or removal is sent. Returning `false` cancels the
/// action without issuing any request.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

/// A fixed answer: `true` for `--yes`, `false` to always decline.
impl Confirm for bool {
    fn confirm(&self, _prompt: &str) -> bool {
        *self
    }
}

/// Adapts a closure into a [`Confirm`].
pub struct ConfirmWith<F>(pub F);

impl<F: Fn(&str) -> bool> Confirm for ConfirmWith<F> {
    fn confirm(&self, prompt: &str) -> bool {
        (self.0)(prompt)
    }
}

pub(crate) const DELETE_PROJECT_PROMPT: &str =
    "Are you sure you want to delete this project? This action cannot be undone.";
pub(crate) const REMOVE_DOCUMENT_PROMPT: &str = "Are you sure you want to remove this document?";
