//! Project creation form.

use std::sync::Arc;

use patrev_client::{ApiClient, Transport};
use patrev_core::entities::{NewProject, Project};

use crate::error::ViewError;

pub struct NewProjectView<T> {
    client: Arc<ApiClient<T>>,
    error: Option<String>,
}

impl<T: Transport> NewProjectView<T> {
    #[must_use]
    pub const fn new(client: Arc<ApiClient<T>>) -> Self {
        Self {
            client,
            error: None,
        }
    }

    /// Message from the last failed attempt, cleared on the next one.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Create a project named `name` (trimmed). A blank name never reaches
    /// the server.
    ///
    /// # Errors
    ///
    /// [`ViewError::Invalid`] for a blank name, [`ViewError::Request`] if the
    /// create call fails.
    pub async fn create(&mut self, name: &str) -> Result<Project, ViewError> {
        self.error = None;
        let result = self.submit(name).await;
        if let Err(error) = &result {
            tracing::error!(operation = "create_project", %error, "mutation failed");
            self.error = Some(error.to_string());
        }
        result
    }

    async fn submit(&self, name: &str) -> Result<Project, ViewError> {
        let request = NewProject::new(name)?;
        Ok(self.client.create_project(&request).await?)
    }
}
