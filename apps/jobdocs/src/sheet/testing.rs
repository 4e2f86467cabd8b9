//! In-memory `TabularStore` used by unit tests.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{CellValue, HeaderRow, TabularStore};
use crate::errors::AppError;

#[derive(Debug, Default)]
struct Grid {
    /// Row 0 is the header row.
    rows: Vec<Vec<String>>,
    bold_headers: Vec<usize>,
    writes: usize,
    reads: usize,
}

#[derive(Debug, Default)]
pub struct InMemorySheet {
    grid: Mutex<Grid>,
}

impl InMemorySheet {
    pub fn new(headers: Vec<&str>, rows: Vec<Vec<&str>>) -> Self {
        let mut all = vec![headers.into_iter().map(str::to_string).collect::<Vec<_>>()];
        all.extend(
            rows.into_iter()
                .map(|r| r.into_iter().map(str::to_string).collect::<Vec<_>>()),
        );
        Self {
            grid: Mutex::new(Grid {
                rows: all,
                ..Grid::default()
            }),
        }
    }

    pub fn header_labels(&self) -> Vec<String> {
        self.grid.lock().unwrap().rows[0].clone()
    }

    /// `row` is 1-based, `column` 0-based. Missing cells read as "".
    pub fn cell(&self, row: u32, column: usize) -> String {
        let grid = self.grid.lock().unwrap();
        grid.rows
            .get(row as usize - 1)
            .and_then(|r| r.get(column))
            .cloned()
            .unwrap_or_default()
    }

    pub fn bold_headers(&self) -> Vec<usize> {
        self.grid.lock().unwrap().bold_headers.clone()
    }

    /// Number of mutating calls (`write_cell` + `append_header`).
    pub fn write_count(&self) -> usize {
        self.grid.lock().unwrap().writes
    }

    pub fn read_count(&self) -> usize {
        self.grid.lock().unwrap().reads
    }

    fn set(grid: &mut Grid, row: u32, column: usize, value: &str) {
        let row_idx = row as usize - 1;
        if grid.rows.len() <= row_idx {
            grid.rows.resize(row_idx + 1, Vec::new());
        }
        let cells = &mut grid.rows[row_idx];
        if cells.len() <= column {
            cells.resize(column + 1, String::new());
        }
        cells[column] = value.to_string();
    }
}

#[async_trait]
impl TabularStore for InMemorySheet {
    async fn read_header_row(&self) -> Result<HeaderRow, AppError> {
        let mut grid = self.grid.lock().unwrap();
        grid.reads += 1;
        Ok(HeaderRow::new(grid.rows[0].clone()))
    }

    async fn read_row(&self, row: u32) -> Result<Vec<CellValue>, AppError> {
        let mut grid = self.grid.lock().unwrap();
        grid.reads += 1;
        Ok(grid
            .rows
            .get(row as usize - 1)
            .map(|cells| cells.iter().map(|c| CellValue::from(c.as_str())).collect())
            .unwrap_or_default())
    }

    async fn used_column_count(&self) -> Result<usize, AppError> {
        let mut grid = self.grid.lock().unwrap();
        grid.reads += 1;
        Ok(grid
            .rows
            .iter()
            .filter_map(|cells| cells.iter().rposition(|c| !c.is_empty()))
            .map(|last| last + 1)
            .max()
            .unwrap_or(0))
    }

    async fn write_cell(&self, row: u32, column: usize, value: &str) -> Result<(), AppError> {
        let mut grid = self.grid.lock().unwrap();
        grid.writes += 1;
        Self::set(&mut grid, row, column, value);
        Ok(())
    }

    async fn append_header(&self, column: usize, label: &str) -> Result<(), AppError> {
        let mut grid = self.grid.lock().unwrap();
        grid.writes += 1;
        grid.bold_headers.push(column);
        Self::set(&mut grid, 1, column, label);
        Ok(())
    }
}
