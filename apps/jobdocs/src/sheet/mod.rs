//! Tabular store: the response spreadsheet the form writes into.
//!
//! The orchestrator only talks to the `TabularStore` trait. The Google Sheets
//! backend lives in `crate::google::sheets`.

pub mod a1;
pub mod cell;
pub mod header;
pub mod links;
#[cfg(test)]
pub mod testing;

use async_trait::async_trait;

use crate::errors::AppError;

pub use cell::CellValue;
pub use header::HeaderRow;

/// Row 1 holds the headers; form responses start at row 2.
pub const FIRST_DATA_ROW: u32 = 2;

/// Read and write access to one sheet. Rows are 1-based, columns 0-based.
#[async_trait]
pub trait TabularStore: Send + Sync {
    async fn read_header_row(&self) -> Result<HeaderRow, AppError>;

    /// Cells of `row`. Trailing blank cells may be omitted.
    async fn read_row(&self, row: u32) -> Result<Vec<CellValue>, AppError>;

    /// Width of the used grid: one past the rightmost non-empty cell in any
    /// row, header included. Data columns with a blank header count.
    async fn used_column_count(&self) -> Result<usize, AppError>;

    async fn write_cell(&self, row: u32, column: usize, value: &str) -> Result<(), AppError>;

    /// Writes a bold header label into row 1 at `column`, growing the grid if needed.
    async fn append_header(&self, column: usize, label: &str) -> Result<(), AppError>;
}
