//! `/api/projects/{id}/documents` endpoints.

use patrev_core::entities::Document;
use patrev_core::enums::DocumentType;

use crate::{
    ApiClient, ClientError, MultipartBody, RequestOptions, Transport, UploadFile, project_path,
};

fn documents_path(project_id: &str) -> String {
    format!("{}/documents", project_path(project_id))
}

impl<T: Transport> ApiClient<T> {
    /// `POST /api/projects/{id}/documents` as `multipart/form-data` with
    /// parts `file` and `type`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body is not a
    /// document.
    pub async fn upload_document(
        &self,
        project_id: &str,
        file: UploadFile,
        kind: DocumentType,
    ) -> Result<Document, ClientError> {
        self.fetch(
            &documents_path(project_id),
            RequestOptions::post_multipart(MultipartBody::document(file, kind)),
        )
        .await
    }

    /// `GET /api/projects/{id}/documents`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body is not a
    /// document list.
    pub async fn list_documents(&self, project_id: &str) -> Result<Vec<Document>, ClientError> {
        self.fetch(&documents_path(project_id), RequestOptions::get())
            .await
    }

    /// `DELETE /api/projects/{id}/documents/{docId}`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    pub async fn remove_document(
        &self,
        project_id: &str,
        document_id: &str,
    ) -> Result<(), ClientError> {
        let path = format!(
            "{}/{}",
            documents_path(project_id),
            urlencoding::encode(document_id)
        );
        self.call(&path, RequestOptions::delete()).await
    }
}
