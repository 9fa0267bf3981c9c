//! Outcome of a finished review.

use std::sync::Arc;

use patrev_client::{ApiClient, ClientError, Transport};
use patrev_core::entities::{Project, ReviewResult};

use crate::state::{LoadGuard, LoadTicket, PageState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewResults {
    pub project: Project,
    pub result: ReviewResult,
}

pub struct ReviewResultsView<T> {
    client: Arc<ApiClient<T>>,
    project_id: String,
    state: PageState<ReviewResults>,
    guard: LoadGuard,
}

impl<T: Transport> ReviewResultsView<T> {
    #[must_use]
    pub fn new(client: Arc<ApiClient<T>>, project_id: &str) -> Self {
        Self {
            client,
            project_id: project_id.to_string(),
            state: PageState::Loading,
            guard: LoadGuard::default(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &PageState<ReviewResults> {
        &self.state
    }

    pub async fn load(&mut self) {
        let ticket = self.begin_load();
        let result = self.fetch().await;
        self.finish_load(ticket, result);
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.state = PageState::Loading;
        self.guard.begin()
    }

    /// # Errors
    ///
    /// Returns the first client error.
    pub async fn fetch(&self) -> Result<ReviewResults, ClientError> {
        let (project, result) = tokio::try_join!(
            self.client.get_project(&self.project_id),
            self.client.review_results(&self.project_id),
        )?;
        Ok(ReviewResults { project, result })
    }

    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<ReviewResults, ClientError>,
    ) -> bool {
        if !self.guard.accepts(ticket) {
            tracing::debug!(project_id = %self.project_id, "dropping stale review results");
            return false;
        }
        if let Err(error) = &result {
            tracing::error!(project_id = %self.project_id, %error, "failed to load review results");
        }
        self.state = PageState::from_result(result);
        true
    }

    pub fn unmount(&mut self) {
        self.guard.unmount();
    }

    /// Each change category's percentage of the total; empty until loaded.
    #[must_use]
    pub fn category_shares(&self) -> Vec<(&str, f64)> {
        self.state
            .ready()
            .map(|loaded| loaded.result.summary.category_shares())
            .unwrap_or_default()
    }
}
