use std::collections::HashSet;

use super::cell::CellValue;

/// The header row of the response sheet, in sheet order.
///
/// Lookup is first-match by exact label. Duplicate labels are tolerated but
/// reported through `duplicates()` so callers can warn about them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderRow {
    labels: Vec<String>,
}

impl HeaderRow {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    pub fn from_cells(cells: &[CellValue]) -> Self {
        Self::new(cells.iter().map(CellValue::to_text).collect())
    }

    /// 0-based position of the first header equal to `label`.
    pub fn position(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|h| h == label)
    }

    /// First position matching any of `labels`, trying them in the given order.
    pub fn position_of_any(&self, labels: &[&str]) -> Option<usize> {
        labels.iter().find_map(|label| self.position(label))
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Non-blank labels that occur more than once, in order of first repetition.
    pub fn duplicates(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut dups = Vec::new();
        for label in &self.labels {
            if label.trim().is_empty() {
                continue;
            }
            if !seen.insert(label.as_str()) && reported.insert(label.as_str()) {
                dups.push(label.as_str());
            }
        }
        dups
    }
}

impl From<Vec<&str>> for HeaderRow {
    fn from(labels: Vec<&str>) -> Self {
        Self::new(labels.into_iter().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_is_first_match() {
        let headers = HeaderRow::from(vec!["A", "B", "A"]);
        assert_eq!(headers.position("A"), Some(0));
        assert_eq!(headers.position("B"), Some(1));
        assert_eq!(headers.position("C"), None);
    }

    #[test]
    fn test_position_of_any_respects_synonym_order() {
        let headers = HeaderRow::from(vec!["Document Link", "ドキュメントリンク"]);
        assert_eq!(
            headers.position_of_any(&["ドキュメントリンク", "Document Link"]),
            Some(1)
        );
    }

    #[test]
    fn test_duplicates_reported_once_each() {
        let headers = HeaderRow::from(vec!["A", "B", "A", "A", "B", "C", "", ""]);
        assert_eq!(headers.duplicates(), vec!["A", "B"]);
    }

    #[test]
    fn test_from_cells_coerces_to_text() {
        let headers = HeaderRow::from_cells(&[
            CellValue::Text("Job Title".to_string()),
            CellValue::Number(2024.0),
            CellValue::Empty,
        ]);
        assert_eq!(headers.labels(), &["Job Title", "2024", ""]);
    }
}
