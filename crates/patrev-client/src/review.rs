//! Review configuration and results endpoints.

use patrev_core::entities::{ReviewConfig, ReviewParameter, ReviewResult};

use crate::{ApiClient, ClientError, RequestOptions, Transport, project_path};

impl<T: Transport> ApiClient<T> {
    /// `GET /api/review/parameters`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body is not a
    /// parameter list.
    pub async fn review_parameters(&self) -> Result<Vec<ReviewParameter>, ClientError> {
        self.fetch("/api/review/parameters", RequestOptions::get())
            .await
    }

    /// `POST /api/projects/{id}/review`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    pub async fn start_review(
        &self,
        project_id: &str,
        config: &ReviewConfig,
    ) -> Result<(), ClientError> {
        let path = format!("{}/review", project_path(project_id));
        self.call(&path, RequestOptions::post_json(config)?).await
    }

    /// `GET /api/projects/{id}/review/results`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body is not a
    /// review result.
    pub async fn review_results(&self, project_id: &str) -> Result<ReviewResult, ClientError> {
        let path = format!("{}/review/results", project_path(project_id));
        self.fetch(&path, RequestOptions::get()).await
    }
}
