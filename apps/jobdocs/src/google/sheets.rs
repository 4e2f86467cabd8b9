//! Google Sheets v4 backend for `TabularStore`.

use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use super::{GoogleApiError, GoogleClient};
use crate::errors::AppError;
use crate::sheet::a1::{cell_range, quote_sheet, row_range};
use crate::sheet::{CellValue, HeaderRow, TabularStore};

const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";
const API_NAME: &str = "Sheets API";

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct SpreadsheetMeta {
    #[serde(default)]
    sheets: Vec<SheetEntry>,
}

#[derive(Debug, Deserialize)]
struct SheetEntry {
    properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SheetProperties {
    sheet_id: i64,
    title: String,
    grid_properties: Option<GridProperties>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GridProperties {
    column_count: Option<usize>,
}

/// One sheet (tab) of one spreadsheet.
pub struct SheetsClient {
    google: GoogleClient,
    spreadsheet_id: String,
    sheet_name: String,
}

impl SheetsClient {
    pub fn new(google: GoogleClient, spreadsheet_id: String, sheet_name: String) -> Self {
        Self {
            google,
            spreadsheet_id,
            sheet_name,
        }
    }

    fn values_url(&self, range: &str) -> Result<Url, GoogleApiError> {
        let mut url = Url::parse(SHEETS_API_BASE)
            .map_err(|e| GoogleApiError::Unexpected(format!("invalid Sheets API URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| GoogleApiError::Unexpected("Sheets API URL cannot be a base".into()))?
            .push(&self.spreadsheet_id)
            .push("values")
            .push(range);
        Ok(url)
    }

    async fn get_values(&self, range: &str) -> Result<Vec<CellValue>, GoogleApiError> {
        let url = self.values_url(range)?;
        let request = self
            .google
            .get(url.as_str())
            .query(&[("valueRenderOption", "FORMATTED_VALUE")]);
        let range: ValueRange = self.google.send_json(API_NAME, request).await?;

        Ok(range
            .values
            .into_iter()
            .next()
            .map(|cells| cells.iter().map(CellValue::from).collect())
            .unwrap_or_default())
    }

    async fn sheet_properties(&self) -> Result<SheetProperties, GoogleApiError> {
        let url = format!("{SHEETS_API_BASE}/{}", self.spreadsheet_id);
        let request = self
            .google
            .get(&url)
            .query(&[("fields", "sheets.properties")]);
        let meta: SpreadsheetMeta = self.google.send_json(API_NAME, request).await?;

        meta.sheets
            .into_iter()
            .map(|s| s.properties)
            .find(|p| p.title == self.sheet_name)
            .ok_or_else(|| {
                GoogleApiError::Unexpected(format!(
                    "sheet '{}' not found in spreadsheet {}",
                    self.sheet_name, self.spreadsheet_id
                ))
            })
    }
}

/// One past the rightmost non-empty cell across all rows.
fn used_width(rows: &[Vec<Value>]) -> usize {
    rows.iter()
        .filter_map(|cells| cells.iter().rposition(|v| !v.is_null() && v.as_str() != Some("")))
        .map(|last| last + 1)
        .max()
        .unwrap_or(0)
}

/// Requests for a bold header cell at `column`, preceded by an
/// `appendDimension` when the grid is not wide enough.
fn header_requests(
    sheet_id: i64,
    column_count: Option<usize>,
    column: usize,
    label: &str,
) -> Vec<Value> {
    let mut requests = Vec::new();

    if let Some(count) = column_count {
        if column >= count {
            requests.push(json!({
                "appendDimension": {
                    "sheetId": sheet_id,
                    "dimension": "COLUMNS",
                    "length": column + 1 - count
                }
            }));
        }
    }

    requests.push(json!({
        "updateCells": {
            "start": { "sheetId": sheet_id, "rowIndex": 0, "columnIndex": column },
            "rows": [{
                "values": [{
                    "userEnteredValue": { "stringValue": label },
                    "userEnteredFormat": { "textFormat": { "bold": true } }
                }]
            }],
            "fields": "userEnteredValue,userEnteredFormat.textFormat.bold"
        }
    }));

    requests
}

#[async_trait]
impl TabularStore for SheetsClient {
    async fn read_header_row(&self) -> Result<HeaderRow, AppError> {
        let cells = self.get_values(&row_range(&self.sheet_name, 1)).await?;
        Ok(HeaderRow::from_cells(&cells))
    }

    async fn read_row(&self, row: u32) -> Result<Vec<CellValue>, AppError> {
        Ok(self.get_values(&row_range(&self.sheet_name, row)).await?)
    }

    async fn used_column_count(&self) -> Result<usize, AppError> {
        let url = self.values_url(&quote_sheet(&self.sheet_name))?;
        let request = self.google.get(url.as_str()).query(&[("fields", "values")]);
        let range: ValueRange = self.google.send_json(API_NAME, request).await?;
        Ok(used_width(&range.values))
    }

    async fn write_cell(&self, row: u32, column: usize, value: &str) -> Result<(), AppError> {
        let range = cell_range(&self.sheet_name, row, column);
        let url = self.values_url(&range)?;
        let request = self
            .google
            .put(url.as_str())
            .query(&[("valueInputOption", "USER_ENTERED")])
            .json(&json!({
                "range": range,
                "majorDimension": "ROWS",
                "values": [[value]]
            }));
        let _: Value = self.google.send_json(API_NAME, request).await?;
        Ok(())
    }

    async fn append_header(&self, column: usize, label: &str) -> Result<(), AppError> {
        let properties = self.sheet_properties().await?;
        let column_count = properties
            .grid_properties
            .and_then(|g| g.column_count);
        let requests = header_requests(properties.sheet_id, column_count, column, label);

        let url = format!("{SHEETS_API_BASE}/{}:batchUpdate", self.spreadsheet_id);
        let request = self
            .google
            .post(&url)
            .json(&json!({ "requests": requests }));
        let _: Value = self.google.send_json(API_NAME, request).await?;

        info!(
            "Added header '{label}' at column {column} of sheet '{}'",
            self.sheet_name
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> SheetsClient {
        SheetsClient::new(
            GoogleClient::new("token".to_string()).unwrap(),
            "abc123".to_string(),
            "Form Responses 1".to_string(),
        )
    }

    #[test]
    fn test_values_url_encodes_range() {
        let url = client().values_url("'Form Responses 1'!2:2").unwrap();
        assert_eq!(
            url.as_str(),
            "https://sheets.googleapis.com/v4/spreadsheets/abc123/values/'Form%20Responses%201'!2:2"
        );
    }

    #[test]
    fn test_header_requests_within_grid_only_update_cell() {
        let requests = header_requests(7, Some(26), 3, "Internal Notes Link");
        assert_eq!(requests.len(), 1);
        let update = &requests[0]["updateCells"];
        assert_eq!(update["start"]["columnIndex"], 3);
        assert_eq!(update["start"]["rowIndex"], 0);
        assert_eq!(
            update["rows"][0]["values"][0]["userEnteredFormat"]["textFormat"]["bold"],
            true
        );
    }

    #[test]
    fn test_header_requests_grow_grid_when_needed() {
        let requests = header_requests(7, Some(26), 26, "ドキュメントリンク");
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0]["appendDimension"]["length"], 1);
        assert_eq!(requests[0]["appendDimension"]["dimension"], "COLUMNS");
        assert_eq!(
            requests[1]["updateCells"]["rows"][0]["values"][0]["userEnteredValue"]["stringValue"],
            "ドキュメントリンク"
        );
    }

    #[test]
    fn test_used_width_counts_cells_past_the_header() {
        let rows = vec![
            vec![json!("Job Title")],
            vec![json!("Engineer"), json!("recruiter note")],
            vec![json!("Designer"), json!(""), json!(3), json!("  ")],
            vec![json!("Planner"), Value::Null, json!("")],
        ];
        assert_eq!(used_width(&rows), 4);
        assert_eq!(used_width(&[]), 0);
    }

    #[test]
    fn test_value_range_without_values_decodes_empty() {
        let range: ValueRange = serde_json::from_str(r#"{"range": "A1:Z1", "majorDimension": "ROWS"}"#).unwrap();
        assert!(range.values.is_empty());
    }
}
