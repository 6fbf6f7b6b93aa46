use crate::commands::common::BUSINESS_COLUMNS;
use crate::consolidate::amount::clean_amount;
use crate::consolidate::{RawTable, SourceValue};
use crate::contracts::types::FtdRecord;

const TABLE_PREFIX: &str = "ftds_";
const TABLE_YEAR_SUFFIX: &str = "_2025";

/// Three-letter month label derived from a source table name:
/// `ftds_nov_PGY_2025` becomes `Nov`.
pub fn month_label(table_name: &str) -> String {
    let stripped = table_name
        .replace(TABLE_PREFIX, "")
        .replace(TABLE_YEAR_SUFFIX, "");
    let mut characters = stripped.chars().take(3);
    match characters.next() {
        Some(first) => first
            .to_uppercase()
            .chain(characters.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Projects a standardized table onto the fixed FTD schema. Missing columns
/// are padded with nulls and rows without any business value are dropped.
pub fn assemble_records(table: &RawTable, month_label: &str) -> Vec<FtdRecord> {
    let indexes =
        BUSINESS_COLUMNS.map(|name| table.columns.iter().position(|column| column == name));

    table
        .rows
        .iter()
        .map(|row| {
            let [date, id, team, agent, country, affiliate, usd] =
                indexes.map(|index| index.and_then(|position| row.get(position)));
            FtdRecord {
                date: date.and_then(clean_text),
                id: id.and_then(clean_text),
                team: team.and_then(clean_text),
                agent: agent.and_then(clean_text),
                country: country.and_then(clean_text),
                affiliate: affiliate.and_then(clean_text),
                usd: usd.and_then(clean_amount),
                month_name: month_label.to_string(),
            }
        })
        .filter(FtdRecord::has_business_value)
        .collect()
}

fn clean_text(cell: &SourceValue) -> Option<String> {
    let text = cell.as_text()?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{assemble_records, month_label};
    use crate::consolidate::{RawTable, SourceValue};

    fn table(columns: &[&str], rows: Vec<Vec<SourceValue>>) -> RawTable {
        RawTable::new(columns.iter().map(|name| name.to_string()).collect(), rows)
    }

    #[test]
    fn month_labels_come_from_table_names() {
        assert_eq!(month_label("ftds_sep_PGY_2025"), "Sep");
        assert_eq!(month_label("ftds_oct_PGY_2025"), "Oct");
        assert_eq!(month_label("ftds_nov_2025"), "Nov");
        assert_eq!(month_label("ftds_PGY_2025"), "Pgy");
        assert_eq!(month_label("ftds_"), "");
    }

    #[test]
    fn fully_empty_rows_are_dropped() {
        let source = table(
            &["date", "id", "usd", "notes"],
            vec![
                vec![
                    SourceValue::Null,
                    SourceValue::text("   "),
                    SourceValue::text("n/a"),
                    SourceValue::text("ignored column"),
                ],
                vec![
                    SourceValue::Null,
                    SourceValue::Null,
                    SourceValue::Null,
                    SourceValue::Null,
                ],
            ],
        );
        assert!(assemble_records(&source, "Sep").is_empty());
    }

    #[test]
    fn one_business_value_keeps_the_row() {
        let source = table(
            &["date", "country"],
            vec![vec![SourceValue::Null, SourceValue::text(" Peru ")]],
        );
        let records = assemble_records(&source, "Oct");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].country.as_deref(), Some("Peru"));
        assert_eq!(records[0].date, None);
        assert_eq!(records[0].usd, None);
        assert_eq!(records[0].month_name, "Oct");
    }

    #[test]
    fn columns_are_projected_and_amounts_cleaned() {
        let source = table(
            &["usd", "agent", "date", "team", "id", "affiliate", "country"],
            vec![vec![
                SourceValue::text("$1.234,56"),
                SourceValue::text("Laura "),
                SourceValue::text("2025-11-02"),
                SourceValue::text("Alpha"),
                SourceValue::Integer(9001),
                SourceValue::text("aff-7"),
                SourceValue::text("Chile"),
            ]],
        );
        let records = assemble_records(&source, "Nov");
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.date.as_deref(), Some("2025-11-02"));
        assert_eq!(record.id.as_deref(), Some("9001"));
        assert_eq!(record.team.as_deref(), Some("Alpha"));
        assert_eq!(record.agent.as_deref(), Some("Laura"));
        assert_eq!(record.country.as_deref(), Some("Chile"));
        assert_eq!(record.affiliate.as_deref(), Some("aff-7"));
        assert_eq!(record.usd.as_deref(), Some("1234.56"));
    }

    #[test]
    fn duplicate_canonical_columns_use_the_first() {
        let source = table(
            &["id", "id"],
            vec![vec![SourceValue::text("first"), SourceValue::text("second")]],
        );
        let records = assemble_records(&source, "Sep");
        assert_eq!(records[0].id.as_deref(), Some("first"));
    }
}
