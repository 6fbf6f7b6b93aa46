use rusqlite::{Connection, params_from_iter};

use crate::commands::common::{output_columns, quote_identifier};
use crate::contracts::types::FtdRecord;
use crate::{ClientError, ClientResult};

/// Drops and recreates the destination table, then inserts every record
/// row by row. Returns the number of inserted rows.
pub(crate) fn rebuild_destination(
    connection: &mut Connection,
    table: &str,
    records: &[FtdRecord],
) -> ClientResult<i64> {
    let map_error =
        |error: rusqlite::Error| ClientError::destination_write_failed(table, &error.to_string());

    connection
        .execute_batch(&recreate_table_sql(table))
        .map_err(map_error)?;

    let transaction = connection.transaction().map_err(map_error)?;
    let mut inserted = 0_i64;
    {
        let mut statement = transaction
            .prepare(&insert_sql(table))
            .map_err(map_error)?;
        for record in records {
            statement
                .execute(params_from_iter(record.column_values()))
                .map_err(map_error)?;
            inserted += 1;
        }
    }
    transaction.commit().map_err(map_error)?;

    Ok(inserted)
}

fn recreate_table_sql(table: &str) -> String {
    let quoted = quote_identifier(table);
    let column_defs = output_columns()
        .iter()
        .map(|column| format!("    {} TEXT", quote_identifier(column)))
        .collect::<Vec<String>>()
        .join(",\n");
    format!("DROP TABLE IF EXISTS {quoted};\nCREATE TABLE {quoted} (\n{column_defs}\n);")
}

fn insert_sql(table: &str) -> String {
    let columns = output_columns();
    let column_list = columns
        .iter()
        .map(|column| quote_identifier(column))
        .collect::<Vec<String>>()
        .join(", ");
    let placeholders = (1..=columns.len())
        .map(|index| format!("?{index}"))
        .collect::<Vec<String>>()
        .join(", ");
    format!(
        "INSERT INTO {} ({column_list}) VALUES ({placeholders})",
        quote_identifier(table)
    )
}
