// Row formatting: column catalogue + the pure row-to-text formatter.

pub mod columns;
pub mod row_formatter;
