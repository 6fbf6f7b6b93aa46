use rusqlite::Connection;

use crate::commands::common::quote_identifier;
use crate::consolidate::{RawTable, SourceValue};
use crate::{ClientError, ClientResult};

pub(crate) fn read_table(connection: &Connection, table: &str) -> ClientResult<RawTable> {
    let sql = format!("SELECT * FROM {}", quote_identifier(table));
    let mut statement = connection
        .prepare(&sql)
        .map_err(|error| ClientError::source_table_failed(table, &error.to_string()))?;

    let columns = statement
        .column_names()
        .into_iter()
        .map(str::to_string)
        .collect::<Vec<String>>();
    let width = columns.len();

    let rows_iter = statement
        .query_map([], |row| {
            let mut cells = Vec::with_capacity(width);
            for index in 0..width {
                cells.push(SourceValue::from_value_ref(row.get_ref(index)?));
            }
            Ok(cells)
        })
        .map_err(|error| ClientError::source_table_failed(table, &error.to_string()))?;

    let mut rows = Vec::new();
    for row in rows_iter {
        let cells = row.map_err(|error| ClientError::source_table_failed(table, &error.to_string()))?;
        rows.push(cells);
    }

    Ok(RawTable::new(columns, rows))
}
