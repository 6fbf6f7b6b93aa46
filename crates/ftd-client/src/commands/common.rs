use crate::{ClientError, ClientResult};

pub const DEFAULT_SOURCE_TABLES: [&str; 4] = [
    "ftds_sep_PGY_2025",
    "ftds_oct_PGY_2025",
    "ftds_nov_PGY_2025",
    "ftds_PGY_2025",
];

pub const DEFAULT_DESTINATION_TABLE: &str = "FTD_MASTER_PGY_CLEAN";

pub const DEFAULT_SNAPSHOT_FILE: &str = "FTD_MASTER_PGY_preview.csv";

/// Business columns in output order. `month_name` follows them.
pub const BUSINESS_COLUMNS: [&str; 7] = [
    "date",
    "id",
    "team",
    "agent",
    "country",
    "affiliate",
    "usd",
];

pub const MONTH_COLUMN: &str = "month_name";

pub const PREVIEW_ROWS: usize = 5;

pub fn output_columns() -> Vec<&'static str> {
    let mut columns = BUSINESS_COLUMNS.to_vec();
    columns.push(MONTH_COLUMN);
    columns
}

/// Table names are interpolated into SQL, so only plain identifiers pass.
pub fn validate_table_name(table: &str) -> ClientResult<()> {
    let valid = !table.is_empty()
        && table
            .chars()
            .all(|value| value.is_ascii_alphanumeric() || value == '_');
    if valid {
        Ok(())
    } else {
        Err(ClientError::invalid_table_name(table))
    }
}

pub(crate) fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
