//! Project list.

use std::sync::Arc;

use patrev_client::{ApiClient, ClientError, Transport};
use patrev_core::entities::Project;

use crate::confirm::{Confirm, DELETE_PROJECT_PROMPT};
use crate::reconcile;
use crate::state::{LoadGuard, LoadTicket, PageState};

/// Shown for any project-list load failure, regardless of cause.
pub const CONNECT_ERROR: &str =
    "Failed to connect to server. Please make sure the server is running.";

/// Shown when the list loaded but is empty.
pub const EMPTY_MESSAGE: &str = "No projects yet. Create a new project to get started.";

pub struct DashboardView<T> {
    client: Arc<ApiClient<T>>,
    state: PageState<Vec<Project>>,
    guard: LoadGuard,
}

impl<T: Transport> DashboardView<T> {
    #[must_use]
    pub fn new(client: Arc<ApiClient<T>>) -> Self {
        Self {
            client,
            state: PageState::Loading,
            guard: LoadGuard::default(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &PageState<Vec<Project>> {
        &self.state
    }

    /// Loaded, with no projects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.ready().is_some_and(Vec::is_empty)
    }

    /// Fetch the project list. Also the retry after an error.
    pub async fn load(&mut self) {
        let ticket = self.begin_load();
        let result = self.fetch().await;
        self.finish_load(ticket, result);
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.state = PageState::Loading;
        self.guard.begin()
    }

    /// Apply a fetched list if `ticket` is still current. Returns whether it
    /// was applied.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Project>, ClientError>,
    ) -> bool {
        if !self.guard.accepts(ticket) {
            tracing::debug!("dropping stale project list");
            return false;
        }
        self.state = match result {
            Ok(projects) => PageState::Ready(projects),
            Err(error) => {
                tracing::error!(%error, "failed to load projects");
                PageState::Error(CONNECT_ERROR.to_string())
            }
        };
        true
    }

    /// The fetch behind [`load`](Self::load), for callers driving the ticket
    /// themselves.
    ///
    /// # Errors
    ///
    /// Returns the client error unchanged.
    pub async fn fetch(&self) -> Result<Vec<Project>, ClientError> {
        self.client.list_projects().await
    }

    pub fn unmount(&mut self) {
        self.guard.unmount();
    }

    /// Delete a project after confirmation and drop it from the list.
    pub async fn delete_project(&mut self, project_id: &str, confirm: &impl Confirm) -> bool {
        if !confirm.confirm(DELETE_PROJECT_PROMPT) {
            return false;
        }
        if let Err(error) = self.client.delete_project(project_id).await {
            tracing::error!(operation = "delete_project", project_id, %error, "mutation failed");
            return false;
        }
        if let Some(projects) = self.state.ready_mut() {
            *projects = reconcile::remove_by_id(projects, project_id);
        }
        true
    }
}
