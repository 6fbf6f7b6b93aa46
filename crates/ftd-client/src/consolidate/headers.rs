//! Detection of exports whose real header landed in the first data row.
//!
//! Some monthly sheets were loaded with placeholder column names (`col1`,
//! `Unnamed: 0`, `0`) and the actual labels sitting in row zero.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::consolidate::{RawTable, SourceValue};

const GENERIC_COLUMN_SHARE: f64 = 0.6;
const LABEL_CELL_SHARE: f64 = 0.5;

/// Short numeric dates such as `2025-09-03` or `03/11`. A single trailing
/// newline is tolerated.
static SIMPLE_DATE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^\d{1,4}([/-]\d{1,2}){1,2}\n?$").ok());

pub fn first_row_looks_like_header(table: &RawTable) -> bool {
    let generic = table
        .columns
        .iter()
        .filter(|name| is_generic_column_name(name))
        .count();
    if (generic as f64) < table.columns.len() as f64 * GENERIC_COLUMN_SHARE {
        return false;
    }

    let Some(first_row) = table.rows.first() else {
        return false;
    };

    let labels = first_row
        .iter()
        .filter(|cell| {
            matches!(cell, SourceValue::Text(value) if !looks_like_simple_date(value))
        })
        .count();
    labels as f64 >= first_row.len() as f64 * LABEL_CELL_SHARE
}

fn looks_like_simple_date(value: &str) -> bool {
    match &*SIMPLE_DATE {
        Some(pattern) => pattern.is_match(value),
        None => false,
    }
}

pub fn is_generic_column_name(name: &str) -> bool {
    let lowered = name.to_lowercase();
    lowered.starts_with("col")
        || lowered.contains("unnamed")
        || matches!(lowered.as_str(), "0" | "1" | "2")
}

/// Replaces the column names with row zero and drops that row. Null cells
/// become empty names.
pub fn promote_header_row(mut table: RawTable) -> RawTable {
    if table.rows.is_empty() {
        return table;
    }

    let header_row = table.rows.remove(0);
    table.columns = header_row
        .iter()
        .map(|cell| cell.as_text().map(|value| value.into_owned()).unwrap_or_default())
        .collect();
    table
}

pub(crate) fn normalize_headers(table: RawTable) -> (RawTable, bool) {
    if first_row_looks_like_header(&table) {
        (promote_header_row(table), true)
    } else {
        (table, false)
    }
}
