//! A1-notation helpers for the Sheets values API.

/// Converts a 0-based column index to its letter form: 0 → `A`, 25 → `Z`, 26 → `AA`.
pub fn column_letters(column: usize) -> String {
    let mut n = column + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

/// Quotes a sheet title for use in a range. Embedded quotes are doubled.
pub fn quote_sheet(sheet: &str) -> String {
    format!("'{}'", sheet.replace('\'', "''"))
}

/// Range covering one whole row, e.g. `'Form Responses 1'!5:5`.
pub fn row_range(sheet: &str, row: u32) -> String {
    format!("{}!{row}:{row}", quote_sheet(sheet))
}

/// Range for a single cell. `row` is 1-based, `column` is 0-based.
pub fn cell_range(sheet: &str, row: u32, column: usize) -> String {
    format!("{}!{}{row}", quote_sheet(sheet), column_letters(column))
}
