//! Review configuration: which checks run, their prompts, and free-text
//! guidelines.

use std::sync::Arc;

use patrev_client::{ApiClient, ClientError, Transport};
use patrev_core::entities::{Project, ReviewConfig, ReviewParameter};

use crate::reconcile;
use crate::state::{LoadGuard, LoadTicket, PageState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewerState {
    pub project: Project,
    pub parameters: Vec<ReviewParameter>,
    pub guidelines: String,
}

pub struct ReviewerView<T> {
    client: Arc<ApiClient<T>>,
    project_id: String,
    state: PageState<ReviewerState>,
    guard: LoadGuard,
    started: bool,
}

impl<T: Transport> ReviewerView<T> {
    #[must_use]
    pub fn new(client: Arc<ApiClient<T>>, project_id: &str) -> Self {
        Self {
            client,
            project_id: project_id.to_string(),
            state: PageState::Loading,
            guard: LoadGuard::default(),
            started: false,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &PageState<ReviewerState> {
        &self.state
    }

    /// A review was submitted; callers should move on to the results page.
    #[must_use]
    pub const fn is_started(&self) -> bool {
        self.started
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
    pub async fn fetch(&self) -> Result<ReviewerState, ClientError> {
        let (project, parameters) = tokio::try_join!(
            self.client.get_project(&self.project_id),
            self.client.review_parameters(),
        )?;
        Ok(ReviewerState {
            project,
            parameters,
            guidelines: String::new(),
        })
    }

    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<ReviewerState, ClientError>,
    ) -> bool {
        if !self.guard.accepts(ticket) {
            tracing::debug!(project_id = %self.project_id, "dropping stale reviewer data");
            return false;
        }
        if let Err(error) = &result {
            tracing::error!(project_id = %self.project_id, %error, "failed to load review data");
        }
        self.state = PageState::from_result(result);
        true
    }

    pub fn unmount(&mut self) {
        self.guard.unmount();
    }

    pub fn toggle_parameter(&mut self, parameter_id: &str) {
        if let Some(state) = self.state.ready_mut() {
            state.parameters = reconcile::toggle_enabled(&state.parameters, parameter_id);
        }
    }

    pub fn set_custom_prompt(&mut self, parameter_id: &str, prompt: &str) {
        if let Some(state) = self.state.ready_mut() {
            state.parameters =
                reconcile::set_custom_prompt(&state.parameters, parameter_id, prompt);
        }
    }

    pub fn set_guidelines(&mut self, text: &str) {
        if let Some(state) = self.state.ready_mut() {
            state.guidelines = text.to_string();
        }
    }

    /// At least one parameter is enabled.
    #[must_use]
    pub fn can_start_review(&self) -> bool {
        self.state
            .ready()
            .is_some_and(|state| state.parameters.iter().any(|param| param.is_enabled))
    }

    /// The request [`start_review`](Self::start_review) would send.
    #[must_use]
    pub fn config(&self) -> Option<ReviewConfig> {
        self.state
            .ready()
            .map(|state| reconcile::enabled_config(&state.parameters, &state.guidelines))
    }

    pub async fn start_review(&mut self) -> bool {
        if !self.can_start_review() {
            tracing::warn!(project_id = %self.project_id, "no review parameter enabled");
            return false;
        }
        let Some(config) = self.config() else {
            return false;
        };
        match self.client.start_review(&self.project_id, &config).await {
            Ok(()) => {
                self.started = true;
                true
            }
            Err(error) => {
                tracing::error!(operation = "start_review", project_id = %self.project_id, %error, "mutation failed");
                false
            }
        }
    }
}
