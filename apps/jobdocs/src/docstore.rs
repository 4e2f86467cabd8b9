//! Document store: where generated JDs and internal notes are created.

use async_trait::async_trait;

use crate::errors::AppError;

/// Creates a document with a plain-text body inside the configured folder
/// and returns its durable URL. Implementations must leave the document in
/// the target folder only.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn create_document(&self, title: &str, body: &str) -> Result<String, AppError>;
}

/// Title of the generated job description document.
pub fn jd_document_title(job_title: &str) -> String {
    format!("【求人票】{job_title}")
}

/// Title of the internal notes document.
pub fn internal_notes_document_title(job_title: &str) -> String {
    format!("[Internal Notes] - {job_title}")
}
