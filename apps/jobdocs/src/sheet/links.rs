//! Link columns: where generated document URLs are written back.

use tokio::sync::Mutex;
use tracing::info;

use super::TabularStore;
use crate::errors::AppError;

/// A designated URL column, recognised by any of its header synonyms.
/// The first synonym is the label used when the column has to be created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkColumn {
    pub synonyms: &'static [&'static str],
}

impl LinkColumn {
    pub const fn new(synonyms: &'static [&'static str]) -> Self {
        Self { synonyms }
    }

    pub fn label(&self) -> &'static str {
        self.synonyms.first().copied().unwrap_or_default()
    }
}

/// Writes `url` into the link column of `row`, appending the column first if
/// no header matches. A new column goes right of the used grid, so data under
/// a blank header is never overwritten.
///
/// The header row is re-read under `column_lock` so that the lookup always
/// sees columns appended by earlier writes, including concurrent invocations.
/// Returns the 0-based column the URL was written to.
pub async fn write_link(
    store: &dyn TabularStore,
    column_lock: &Mutex<()>,
    row: u32,
    link: LinkColumn,
    url: &str,
) -> Result<usize, AppError> {
    let _guard = column_lock.lock().await;

    let headers = store.read_header_row().await?;
    let column = match headers.position_of_any(link.synonyms) {
        Some(column) => column,
        None => {
            let column = store.used_column_count().await?.max(headers.len());
            info!("Creating link column '{}' at index {column}", link.label());
            store.append_header(column, link.label()).await?;
            column
        }
    };

    store.write_cell(row, column, url).await?;
    Ok(column)
}
