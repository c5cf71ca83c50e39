use chrono::NaiveDate;

use crate::error::StoreError;

/// Stored date layout.
pub const DATE_COLUMN_FORMAT: &str = "%Y-%m-%d";

/// Get a required column value from a row, returning CorruptRow on failure.
pub fn get<T: rusqlite::types::FromSql>(
    row: &rusqlite::Row<'_>,
    idx: usize,
    table: &'static str,
    column: &'static str,
) -> Result<T, StoreError> {
    row.get(idx).map_err(|e| StoreError::CorruptRow {
        table,
        column,
        detail: e.to_string(),
    })
}

/// Parse a stored date column, returning CorruptRow on failure.
pub fn parse_date(
    raw: &str,
    table: &'static str,
    column: &'static str,
) -> Result<NaiveDate, StoreError> {
    NaiveDate::parse_from_str(raw, DATE_COLUMN_FORMAT).map_err(|e| StoreError::CorruptRow {
        table,
        column,
        detail: format!("invalid date {raw:?}: {e}"),
    })
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_COLUMN_FORMAT).to_string()
}
