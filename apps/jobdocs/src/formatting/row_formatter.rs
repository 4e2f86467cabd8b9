//! Row Formatter: turns one sheet row into a labelled text block.
//!
//! Each qualifying column becomes `"<header>:\n<value>\n\n"`. A column
//! qualifies when the policy selects it, its header exists in the header row
//! and its cell is not blank after trimming. The result is trimmed; `None`
//! means nothing qualified and the caller should skip downstream work.
//!
//! Pure and infallible: short rows read as blank, missing headers are skipped.

use std::str::FromStr;

use crate::formatting::columns::{link_headers, INTERNAL_NOTES_COLUMNS, JD_COLUMNS};
use crate::sheet::{CellValue, HeaderRow};

/// Which columns of a row end up in the block.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatPolicy<'a> {
    /// Only the listed headers, in list order.
    Allowlist(&'a [&'a str]),
    /// Every header in sheet order except the listed ones.
    Exclusion(&'a [&'a str]),
}

pub fn format_row(
    headers: &HeaderRow,
    row: &[CellValue],
    policy: &FormatPolicy<'_>,
) -> Option<String> {
    let mut block = String::new();

    match policy {
        FormatPolicy::Allowlist(columns) => {
            for header in columns.iter() {
                if let Some(position) = headers.position(header) {
                    push_entry(&mut block, header, row.get(position));
                }
            }
        }
        FormatPolicy::Exclusion(excluded) => {
            for (position, header) in headers.labels().iter().enumerate() {
                if header.trim().is_empty() || excluded.contains(&header.as_str()) {
                    continue;
                }
                push_entry(&mut block, header, row.get(position));
            }
        }
    }

    let trimmed = block.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn push_entry(block: &mut String, header: &str, cell: Option<&CellValue>) {
    let Some(cell) = cell.filter(|c| !c.is_blank()) else {
        return;
    };
    block.push_str(header);
    block.push_str(":\n");
    block.push_str(&cell.to_text());
    block.push_str("\n\n");
}

/// Which columns feed the JD prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JdContentPolicy {
    /// Only the JD allowlist, in allowlist order.
    #[default]
    Allowlist,
    /// Every filled column except the link columns, in sheet order.
    AllExceptLinks,
}

impl FromStr for JdContentPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "allowlist" => Ok(JdContentPolicy::Allowlist),
            "all-except-links" => Ok(JdContentPolicy::AllExceptLinks),
            other => Err(format!(
                "unknown JD content policy '{other}' (expected 'allowlist' or 'all-except-links')"
            )),
        }
    }
}

/// Block fed into the JD prompt.
pub fn build_jd_block(
    headers: &HeaderRow,
    row: &[CellValue],
    policy: JdContentPolicy,
) -> Option<String> {
    match policy {
        JdContentPolicy::Allowlist => {
            format_row(headers, row, &FormatPolicy::Allowlist(JD_COLUMNS))
        }
        JdContentPolicy::AllExceptLinks => build_all_except_links(headers, row),
    }
}

/// Body of the internal notes document.
pub fn build_internal_notes(headers: &HeaderRow, row: &[CellValue]) -> Option<String> {
    format_row(headers, row, &FormatPolicy::Allowlist(INTERNAL_NOTES_COLUMNS))
}

/// Every filled column except the link columns.
pub fn build_all_except_links(headers: &HeaderRow, row: &[CellValue]) -> Option<String> {
    let excluded = link_headers();
    format_row(headers, row, &FormatPolicy::Exclusion(&excluded))
}
