//! Pure list updates applied after a successful mutation.

use patrev_core::entities::{ChatMessage, Document, Project, ReviewConfig, ReviewParameter};

/// Entities addressed by a string id.
pub trait Identified {
    fn id(&self) -> &str;
}

impl Identified for Project {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for Document {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for ChatMessage {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for ReviewParameter {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Every item except those with `id`, order preserved.
#[must_use]
pub fn remove_by_id<T: Identified + Clone>(items: &[T], id: &str) -> Vec<T> {
    items.iter().filter(|item| item.id() != id).cloned().collect()
}

/// `items` followed by `extra`.
#[must_use]
pub fn append<T: Clone>(items: &[T], extra: impl IntoIterator<Item = T>) -> Vec<T> {
    items.iter().cloned().chain(extra).collect()
}

/// Flip `is_enabled` on the parameter with `id`.
#[must_use]
pub fn toggle_enabled(params: &[ReviewParameter], id: &str) -> Vec<ReviewParameter> {
    params
        .iter()
        .map(|param| {
            let mut param = param.clone();
            if param.id == id {
                param.is_enabled = !param.is_enabled;
            }
            param
        })
        .collect()
}

/// Set `custom_prompt` on the parameter with `id`, verbatim.
#[must_use]
pub fn set_custom_prompt(params: &[ReviewParameter], id: &str, prompt: &str) -> Vec<ReviewParameter> {
    params
        .iter()
        .map(|param| {
            let mut param = param.clone();
            if param.id == id {
                param.custom_prompt = Some(prompt.to_string());
            }
            param
        })
        .collect()
}

/// The review request for the current parameter list.
#[must_use]
pub fn enabled_config(params: &[ReviewParameter], guidelines: &str) -> ReviewConfig {
    ReviewConfig::from_enabled(params, guidelines)
}
