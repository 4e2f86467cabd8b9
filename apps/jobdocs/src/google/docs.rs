//! Google Docs v1 + Drive v3 backend for `DocumentStore`.
//!
//! Flow: create empty doc → insert body text → move into the target folder,
//! removing every previous parent so the doc does not linger in My Drive.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use super::GoogleClient;
use crate::docstore::DocumentStore;
use crate::errors::AppError;

const DOCS_API_BASE: &str = "https://docs.googleapis.com/v1/documents";
const DRIVE_FILES_BASE: &str = "https://www.googleapis.com/drive/v3/files";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatedDocument {
    document_id: String,
}

#[derive(Debug, Deserialize)]
struct DriveFileParents {
    #[serde(default)]
    parents: Vec<String>,
}

pub struct DocsClient {
    google: GoogleClient,
    folder_id: String,
}

impl DocsClient {
    pub fn new(google: GoogleClient, folder_id: String) -> Self {
        Self { google, folder_id }
    }

    async fn insert_body(&self, document_id: &str, body: &str) -> Result<(), AppError> {
        if body.is_empty() {
            return Ok(());
        }
        let url = format!("{DOCS_API_BASE}/{document_id}:batchUpdate");
        let request = self.google.post(&url).json(&json!({
            "requests": [{
                "insertText": {
                    "location": { "index": 1 },
                    "text": body
                }
            }]
        }));
        let _: Value = self.google.send_json("Docs API", request).await?;
        Ok(())
    }

    async fn move_to_folder(&self, document_id: &str) -> Result<(), AppError> {
        let url = format!("{DRIVE_FILES_BASE}/{document_id}");

        let request = self
            .google
            .get(&url)
            .query(&[("fields", "parents"), ("supportsAllDrives", "true")]);
        let current: DriveFileParents = self.google.send_json("Drive API", request).await?;

        let remove = removable_parents(&current.parents, &self.folder_id);
        let mut params = vec![
            ("addParents", self.folder_id.as_str()),
            ("supportsAllDrives", "true"),
        ];
        if !remove.is_empty() {
            params.push(("removeParents", remove.as_str()));
        }
        let request = self.google.patch(&url).json(&json!({})).query(&params);
        let _: Value = self.google.send_json("Drive API", request).await?;
        Ok(())
    }
}

/// Comma-separated parents to detach, never including the target folder.
fn removable_parents(parents: &[String], folder_id: &str) -> String {
    parents
        .iter()
        .filter(|p| p.as_str() != folder_id)
        .cloned()
        .collect::<Vec<_>>()
        .join(",")
}

pub fn document_url(document_id: &str) -> String {
    format!("https://docs.google.com/document/d/{document_id}/edit")
}

#[async_trait]
impl DocumentStore for DocsClient {
    async fn create_document(&self, title: &str, body: &str) -> Result<String, AppError> {
        let request = self.google.post(DOCS_API_BASE).json(&json!({ "title": title }));
        let created: CreatedDocument = self.google.send_json("Docs API", request).await?;

        self.insert_body(&created.document_id, body).await?;
        self.move_to_folder(&created.document_id).await?;

        let url = document_url(&created.document_id);
        info!("Created document '{title}' at {url}");
        Ok(url)
    }
}
