use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::commands::common::output_columns;
use crate::contracts::types::FtdRecord;
use crate::{ClientError, ClientResult};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub(crate) fn write_snapshot(path: &Path, records: &[FtdRecord]) -> ClientResult<()> {
    let file = File::create(path)
        .map_err(|error| ClientError::snapshot_write_failed(path, &error.to_string()))?;
    write_snapshot_to(file, records)
        .map_err(|error| ClientError::snapshot_write_failed(path, &error.to_string()))
}

/// Writes a BOM-prefixed CSV with nulls as empty fields.
pub(crate) fn write_snapshot_to<W: Write>(mut writer: W, records: &[FtdRecord]) -> csv::Result<()> {
    writer.write_all(UTF8_BOM)?;

    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(output_columns())?;
    for record in records {
        csv_writer.write_record(record.column_values().map(|value| value.unwrap_or("")))?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::write_snapshot_to;
    use crate::contracts::types::FtdRecord;

    #[test]
    fn snapshot_has_bom_header_and_empty_nulls() {
        let records = vec![
            FtdRecord {
                date: Some("2025-09-01".to_string()),
                id: Some("u-1".to_string()),
                team: Some("Alpha, Beta".to_string()),
                usd: Some("1234.56".to_string()),
                month_name: "Sep".to_string(),
                ..FtdRecord::default()
            },
            FtdRecord {
                country: Some("Perú".to_string()),
                month_name: "Oct".to_string(),
                ..FtdRecord::default()
            },
        ];

        let mut buffer = Vec::new();
        let written = write_snapshot_to(&mut buffer, &records);
        assert!(written.is_ok());

        assert!(buffer.starts_with(b"\xEF\xBB\xBF"));
        let text = String::from_utf8(buffer[3..].to_vec());
        assert!(text.is_ok());
        if let Ok(body) = text {
            let lines = body.lines().collect::<Vec<&str>>();
            assert_eq!(
                lines,
                vec![
                    "date,id,team,agent,country,affiliate,usd,month_name",
                    "2025-09-01,u-1,\"Alpha, Beta\",,,,1234.56,Sep",
                    ",,,,Perú,,,Oct",
                ]
            );
        }
    }
}
