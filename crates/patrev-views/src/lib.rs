//! # patrev-views
//!
//! Screen-level view-models for the patent review client. Each view owns a
//! [`PageState`], issues its page's fetches concurrently, and reconciles
//! local state after mutations without refetching.
//!
//! | View | Loads |
//! |---|---|
//! | [`DashboardView`] | project list |
//! | [`NewProjectView`] | nothing; creates a project |
//! | [`ProjectDetailsView`] | project, documents, chat history |
//! | [`ReviewerView`] | project, review parameters |
//! | [`ReviewResultsView`] | project, review result |
//!
//! Mutation failures are logged and swallowed: the mutation returns `false`
//! and the previous state is kept.

pub mod confirm;
pub mod dashboard;
pub mod error;
pub mod new_project;
pub mod project_details;
pub mod reconcile;
pub mod review_results;
pub mod reviewer;
pub mod state;

pub use confirm::{Confirm, ConfirmWith};
pub use dashboard::DashboardView;
pub use error::ViewError;
pub use new_project::NewProjectView;
pub use project_details::{ProjectDetails, ProjectDetailsView, placeholder_assistant_reply};
pub use review_results::{ReviewResults, ReviewResultsView};
pub use reviewer::{ReviewerState, ReviewerView};
pub use state::{LoadGuard, LoadTicket, PageState};
