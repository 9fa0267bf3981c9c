//! `/api/projects` endpoints.

use patrev_core::entities::{NewProject, Project};

use crate::{ApiClient, ClientError, RequestOptions, Transport, project_path};

impl<T: Transport> ApiClient<T> {
    /// `GET /api/projects`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body is not a
    /// project list.
    pub async fn list_projects(&self) -> Result<Vec<Project>, ClientError> {
        self.fetch("/api/projects", RequestOptions::get()).await
    }

    /// `POST /api/projects`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body is not a
    /// project.
    pub async fn create_project(&self, project: &NewProject) -> Result<Project, ClientError> {
        self.fetch("/api/projects", RequestOptions::post_json(project)?)
            .await
    }

    /// `GET /api/projects/{id}`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body is not a
    /// project. A missing project is a `RequestFailed` with status 404.
    pub async fn get_project(&self, project_id: &str) -> Result<Project, ClientError> {
        self.fetch(&project_path(project_id), RequestOptions::get())
            .await
    }

    /// `DELETE /api/projects/{id}`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    pub async fn delete_project(&self, project_id: &str) -> Result<(), ClientError> {
        self.call(&project_path(project_id), RequestOptions::delete())
            .await
    }
}
