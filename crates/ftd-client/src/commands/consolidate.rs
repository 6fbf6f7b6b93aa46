use std::path::{Path, PathBuf};

use crate::ClientResult;
use crate::commands::common::{
    DEFAULT_DESTINATION_TABLE, DEFAULT_SNAPSHOT_FILE, DEFAULT_SOURCE_TABLES, validate_table_name,
};
use crate::consolidate::{self, ConsolidateRequest};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::ConsolidateData;
use crate::state::resolve_database_path;

#[derive(Debug, Default)]
pub struct ConsolidateOptions<'a> {
    pub db_path: Option<&'a Path>,
    pub csv_path: Option<&'a Path>,
    pub tables: Vec<String>,
    pub destination_table: Option<String>,
}

pub fn run_with_options(options: ConsolidateOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let data = collect(options)?;
    success("consolidate", data)
}

/// Runs the whole pipeline and returns the report without the envelope.
pub fn collect(options: ConsolidateOptions<'_>) -> ClientResult<ConsolidateData> {
    let db_path = resolve_database_path(options.db_path)?;

    let source_tables = if options.tables.is_empty() {
        DEFAULT_SOURCE_TABLES
            .iter()
            .map(|table| table.to_string())
            .collect::<Vec<String>>()
    } else {
        options.tables
    };
    for table in &source_tables {
        validate_table_name(table)?;
    }

    let destination_table = options
        .destination_table
        .unwrap_or_else(|| DEFAULT_DESTINATION_TABLE.to_string());
    validate_table_name(&destination_table)?;

    let snapshot_path = options
        .csv_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SNAPSHOT_FILE));

    consolidate::execute(&ConsolidateRequest {
        db_path: &db_path,
        source_tables: &source_tables,
        destination_table: &destination_table,
        snapshot_path: &snapshot_path,
    })
}
