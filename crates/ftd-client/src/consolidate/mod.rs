pub mod amount;
pub mod assemble;
pub mod columns;
pub mod headers;
pub(crate) mod persist;
pub(crate) mod read;
pub(crate) mod snapshot;

use std::borrow::Cow;
use std::path::Path;

use rusqlite::Connection;
use rusqlite::types::ValueRef;
use tracing::{error, info, warn};

use crate::ClientResult;
use crate::commands::common::PREVIEW_ROWS;
use crate::contracts::types::{
    ConsolidateData, ConsolidateOutcome, DestinationReport, FtdRecord, MonthCount, TableReport,
    TableStatus,
};
use crate::state::open_connection;

/// A single cell as it came out of a source table.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl SourceValue {
    pub(crate) fn from_value_ref(value: ValueRef<'_>) -> Self {
        match value {
            ValueRef::Null => Self::Null,
            ValueRef::Integer(number) => Self::Integer(number),
            ValueRef::Real(number) => Self::Real(number),
            ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
                Self::Text(String::from_utf8_lossy(bytes).into_owned())
            }
        }
    }

    pub fn text(value: &str) -> Self {
        Self::Text(value.to_string())
    }

    /// Text rendering of the cell, `None` for null. Integral reals keep a
    /// trailing `.0` so `5.0` does not collapse into an integer id.
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Null => None,
            Self::Integer(number) => Some(Cow::Owned(number.to_string())),
            Self::Real(number) => Some(Cow::Owned(render_real(*number))),
            Self::Text(value) => Some(Cow::Borrowed(value.as_str())),
        }
    }
}

fn render_real(number: f64) -> String {
    if number.is_finite() && number.fract() == 0.0 {
        format!("{number:.1}")
    } else {
        number.to_string()
    }
}

/// Column names plus rows, every row as wide as `columns`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<SourceValue>>,
}

impl RawTable {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<SourceValue>>) -> Self {
        Self { columns, rows }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct ConsolidateRequest<'a> {
    pub(crate) db_path: &'a Path,
    pub(crate) source_tables: &'a [String],
    pub(crate) destination_table: &'a str,
    pub(crate) snapshot_path: &'a Path,
}

struct LoadedTable {
    report: TableReport,
    records: Vec<FtdRecord>,
}

pub(crate) fn execute(request: &ConsolidateRequest<'_>) -> ClientResult<ConsolidateData> {
    let connection = match open_connection(request.db_path) {
        Ok(connection) => connection,
        Err(client_error) => {
            error!(
                db_path = %request.db_path.display(),
                error = %client_error,
                "could not connect to the FTD database"
            );
            return Ok(empty_result(
                request,
                ConsolidateOutcome::NoConnection,
                Vec::new(),
                client_error.message,
            ));
        }
    };

    let mut reports = Vec::new();
    let mut records = Vec::new();
    for table in request.source_tables {
        match load_table(&connection, table) {
            Ok(mut loaded) => {
                reports.push(loaded.report);
                records.append(&mut loaded.records);
            }
            Err(client_error) => {
                warn!(table = %table, error = %client_error, "skipping source table");
                reports.push(TableReport {
                    table: table.clone(),
                    month_label: assemble::month_label(table),
                    status: TableStatus::Failed,
                    original_columns: Vec::new(),
                    raw_rows: 0,
                    header_promoted: false,
                    valid_rows: 0,
                    error: Some(client_error.message),
                });
            }
        }
    }
    drop(connection);

    if records.is_empty() {
        warn!("no source table produced rows, consolidated table not generated");
        return Ok(empty_result(
            request,
            ConsolidateOutcome::NoData,
            reports,
            "No source table produced rows. Nothing was written.".to_string(),
        ));
    }

    let month_counts = count_months(&records);
    info!(
        total_rows = records.len(),
        "consolidated FTD records from all months"
    );
    for month in &month_counts {
        info!(month_name = %month.month_name, rows = month.rows, "month row count");
    }

    snapshot::write_snapshot(request.snapshot_path, &records)?;
    info!(path = %request.snapshot_path.display(), "wrote CSV snapshot");

    let destination = rebuild_destination(request, &records);

    Ok(ConsolidateData {
        outcome: ConsolidateOutcome::Consolidated,
        message: format!(
            "Consolidated {} rows from {} source tables.",
            records.len(),
            reports
                .iter()
                .filter(|report| report.status == TableStatus::Loaded)
                .count()
        ),
        database_path: request.db_path.display().to_string(),
        csv_path: Some(request.snapshot_path.display().to_string()),
        destination_table: request.destination_table.to_string(),
        tables: reports,
        total_rows: records.len() as i64,
        month_counts,
        destination: Some(destination),
        preview: records.iter().take(PREVIEW_ROWS).cloned().collect(),
        records,
    })
}

fn load_table(connection: &Connection, table: &str) -> ClientResult<LoadedTable> {
    info!(table = %table, "reading source table");
    let raw = read::read_table(connection, table)?;
    let original_columns = raw.columns.clone();
    let raw_rows = raw.rows.len() as i64;
    info!(
        table = %table,
        columns = ?original_columns,
        raw_rows,
        "source table loaded"
    );

    let (promoted, header_promoted) = headers::normalize_headers(raw);
    if header_promoted {
        info!(table = %table, "first row taken as header");
    } else {
        info!(table = %table, "original headers kept");
    }

    let standardized = columns::standardize_columns(promoted);
    let month_label = assemble::month_label(table);
    let records = assemble::assemble_records(&standardized, &month_label);
    info!(table = %table, valid_rows = records.len(), "valid rows assembled");

    let status = if records.is_empty() {
        TableStatus::Empty
    } else {
        TableStatus::Loaded
    };

    Ok(LoadedTable {
        report: TableReport {
            table: table.to_string(),
            month_label,
            status,
            original_columns,
            raw_rows,
            header_promoted,
            valid_rows: records.len() as i64,
            error: None,
        },
        records,
    })
}

fn rebuild_destination(request: &ConsolidateRequest<'_>, records: &[FtdRecord]) -> DestinationReport {
    let table = request.destination_table;
    let result = open_connection(request.db_path).and_then(|mut connection| {
        persist::rebuild_destination(&mut connection, table, records)
    });

    match result {
        Ok(rows_inserted) => {
            info!(table = %table, rows_inserted, "destination table rebuilt");
            DestinationReport {
                table: table.to_string(),
                written: true,
                rows_inserted,
                error: None,
            }
        }
        Err(client_error) => {
            warn!(table = %table, error = %client_error, "could not rebuild destination table");
            DestinationReport {
                table: table.to_string(),
                written: false,
                rows_inserted: 0,
                error: Some(client_error.message),
            }
        }
    }
}

/// Row counts per month label, largest first. Ties keep first-seen order.
pub(crate) fn count_months(records: &[FtdRecord]) -> Vec<MonthCount> {
    let mut counts: Vec<MonthCount> = Vec::new();
    for record in records {
        match counts
            .iter_mut()
            .find(|count| count.month_name == record.month_name)
        {
            Some(count) => count.rows += 1,
            None => counts.push(MonthCount {
                month_name: record.month_name.clone(),
                rows: 1,
            }),
        }
    }
    counts.sort_by(|left, right| right.rows.cmp(&left.rows));
    counts
}

fn empty_result(
    request: &ConsolidateRequest<'_>,
    outcome: ConsolidateOutcome,
    tables: Vec<TableReport>,
    message: String,
) -> ConsolidateData {
    ConsolidateData {
        outcome,
        message,
        database_path: request.db_path.display().to_string(),
        csv_path: None,
        destination_table: request.destination_table.to_string(),
        tables,
        month_counts: Vec::new(),
        total_rows: 0,
        destination: None,
        preview: Vec::new(),
        records: Vec::new(),
    }
}
