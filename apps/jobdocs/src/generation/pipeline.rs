//! Document pipeline: orchestrates one sheet row end to end.
//!
//! Flow: read headers + row → format JD block and internal notes →
//!       summarize JD prompt → create JD doc → create notes doc →
//!       write both URLs back to their link columns.
//!
//! Any collaborator failure aborts the remaining steps. Links are written only
//! after every document step succeeded, so a failed step never leaves a link.
//! Documents already created are not rolled back.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::docstore::{internal_notes_document_title, jd_document_title, DocumentStore};
use crate::errors::AppError;
use crate::formatting::columns::{
    INTERNAL_NOTES_LINK, JD_LINK, JOB_TITLE_COLUMN, UNKNOWN_JOB_TITLE,
};
use crate::formatting::row_formatter::{build_internal_notes, build_jd_block, JdContentPolicy};
use crate::generation::jd_prompt::build_jd_prompt;
use crate::generation::prompts::JD_PROMPT_VERSION;
use crate::llm_client::Summarizer;
use crate::sheet::links::write_link;
use crate::sheet::{CellValue, HeaderRow, TabularStore, FIRST_DATA_ROW};

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowStatus {
    Processed,
    /// Neither the JD nor the internal notes columns had any content.
    Skipped,
}

impl RowStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RowStatus::Processed => "processed",
            RowStatus::Skipped => "skipped",
        }
    }
}

/// What happened to one row.
#[derive(Debug, Clone, Serialize)]
pub struct RowOutcome {
    pub row: u32,
    pub status: RowStatus,
    pub title: String,
    pub jd_document_url: Option<String>,
    pub internal_notes_url: Option<String>,
    pub processed_at: DateTime<Utc>,
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DocumentPipeline {
    sheet: Arc<dyn TabularStore>,
    documents: Arc<dyn DocumentStore>,
    summarizer: Arc<dyn Summarizer>,
    jd_policy: JdContentPolicy,
    /// Serializes link-column lookups and appends across invocations.
    column_lock: Arc<Mutex<()>>,
}

impl DocumentPipeline {
    pub fn new(
        sheet: Arc<dyn TabularStore>,
        documents: Arc<dyn DocumentStore>,
        summarizer: Arc<dyn Summarizer>,
    ) -> Self {
        Self {
            sheet,
            documents,
            summarizer,
            jd_policy: JdContentPolicy::default(),
            column_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn with_jd_policy(mut self, policy: JdContentPolicy) -> Self {
        self.jd_policy = policy;
        self
    }

    /// Form-submission trigger. Errors are logged and swallowed so the
    /// submitting flow is never disrupted; `None` means the row failed.
    pub async fn handle_form_submission(&self, row: u32) -> Option<RowOutcome> {
        match self.process_row_logged(row).await {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                error!("Form submission for row {row} failed: {e:?}");
                None
            }
        }
    }

    /// Manual trigger on a user selection. The selection must be exactly one
    /// data row; errors are returned to the caller.
    pub async fn handle_selection(&self, start_row: u32, end_row: u32) -> Result<RowOutcome, AppError> {
        let row = resolve_selection(start_row, end_row)?;
        self.process_row_logged(row).await.map_err(|e| {
            error!("Manual processing of row {row} failed: {e:?}");
            e
        })
    }

    async fn process_row_logged(&self, row: u32) -> Result<RowOutcome, AppError> {
        let span = info_span!("process_row", invocation_id = %Uuid::new_v4(), row);
        self.process_row(row).instrument(span).await
    }

    /// Runs every step for `row` (1-based, header row excluded).
    pub async fn process_row(&self, row: u32) -> Result<RowOutcome, AppError> {
        if row < FIRST_DATA_ROW {
            return Err(AppError::Validation(format!(
                "Row {row} is the header row; form responses start at row {FIRST_DATA_ROW}"
            )));
        }

        // Step 1: Read header row and target row
        let headers = self.sheet.read_header_row().await?;
        if headers.is_empty() {
            warn!("Header row is empty; no column can be matched");
        }
        for duplicate in headers.duplicates() {
            warn!("Duplicate header '{duplicate}' in sheet; using its first occurrence");
        }
        let cells = self.sheet.read_row(row).await?;

        // Step 2: Display title
        let title = display_title(&headers, &cells);

        // Steps 3 + 6: Build both contents up front (pure, no side effects)
        let jd_block = build_jd_block(&headers, &cells, self.jd_policy);
        let internal_notes = build_internal_notes(&headers, &cells);

        if jd_block.is_none() && internal_notes.is_none() {
            info!("Row {row} has no JD or internal notes content. Skipping.");
            return Ok(RowOutcome {
                row,
                status: RowStatus::Skipped,
                title,
                jd_document_url: None,
                internal_notes_url: None,
                processed_at: Utc::now(),
            });
        }

        // Steps 4 + 5: Summarize and create the JD document
        let jd_document_url = match &jd_block {
            Some(block) => {
                info!("Generating JD for '{title}' (prompt {JD_PROMPT_VERSION})");
                let summary = self.summarizer.summarize(&build_jd_prompt(block)).await?;
                let url = self
                    .documents
                    .create_document(&jd_document_title(&title), &summary)
                    .await?;
                Some(url)
            }
            None => {
                info!("Row {row} has no JD content; skipping JD generation");
                None
            }
        };

        // Step 7: Internal notes document, raw block as body
        let internal_notes_url = match &internal_notes {
            Some(notes) => Some(
                self.documents
                    .create_document(&internal_notes_document_title(&title), notes)
                    .await?,
            ),
            None => {
                info!("Row {row} has no internal notes content; skipping notes document");
                None
            }
        };

        // Step 8: Write links back
        if let Some(url) = &jd_document_url {
            write_link(self.sheet.as_ref(), &self.column_lock, row, JD_LINK, url).await?;
        }
        if let Some(url) = &internal_notes_url {
            write_link(
                self.sheet.as_ref(),
                &self.column_lock,
                row,
                INTERNAL_NOTES_LINK,
                url,
            )
            .await?;
        }

        info!("Row {row} processed: '{title}'");

        Ok(RowOutcome {
            row,
            status: RowStatus::Processed,
            title,
            jd_document_url,
            internal_notes_url,
            processed_at: Utc::now(),
        })
    }
}

/// Job title of the row, or the placeholder when blank or absent.
pub fn display_title(headers: &HeaderRow, cells: &[CellValue]) -> String {
    headers
        .position(JOB_TITLE_COLUMN)
        .and_then(|position| cells.get(position))
        .map(|cell| cell.to_text().trim().to_string())
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| UNKNOWN_JOB_TITLE.to_string())
}

/// A manual selection must cover exactly one data row.
pub fn resolve_selection(start_row: u32, end_row: u32) -> Result<u32, AppError> {
    if start_row == 0 || end_row == 0 {
        return Err(AppError::Selection("No row selected.".to_string()));
    }
    if start_row != end_row {
        let count = start_row.abs_diff(end_row) + 1;
        return Err(AppError::Selection(format!(
            "Please select a single row. {count} rows are selected."
        )));
    }
    if start_row < FIRST_DATA_ROW {
        return Err(AppError::Selection(
            "The header row cannot be processed. Select a response row.".to_string(),
        ));
    }
    Ok(start_row)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
