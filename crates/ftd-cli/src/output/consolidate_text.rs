use std::io;

use serde_json::Value;

const PREVIEW_COLUMNS: [&str; 8] = [
    "date",
    "id",
    "team",
    "agent",
    "country",
    "affiliate",
    "usd",
    "month_name",
];

pub fn render_consolidate(data: &Value) -> io::Result<String> {
    let Some(outcome) = data.get("outcome").and_then(Value::as_str) else {
        return Err(io::Error::other("consolidate payload is missing `outcome`"));
    };

    let mut lines = vec![
        value_str(data, "message").to_string(),
        String::new(),
        format!("  Outcome:      {outcome}"),
        format!("  Database:     {}", value_str(data, "database_path")),
        format!(
            "  CSV snapshot: {}",
            data.get("csv_path")
                .and_then(Value::as_str)
                .unwrap_or("not written")
        ),
        format!("  Destination:  {}", destination_line(data)),
    ];

    let tables = array_of(data, "tables");
    if !tables.is_empty() {
        lines.push(String::new());
        lines.push("Source tables:".to_string());
        let width = tables
            .iter()
            .map(|table| value_str(table, "table").len())
            .max()
            .unwrap_or(0);
        for table in tables {
            lines.push(table_line(table, width));
        }
    }

    let months = array_of(data, "month_counts");
    if !months.is_empty() {
        lines.push(String::new());
        lines.push("Rows per month:".to_string());
        for month in months {
            lines.push(format!(
                "  {:<5} {}",
                value_str(month, "month_name"),
                value_i64(month, "rows")
            ));
        }
        lines.push(format!("  Total {}", value_i64(data, "total_rows")));
    }

    let preview = array_of(data, "preview");
    if !preview.is_empty() {
        lines.push(String::new());
        lines.push("First rows:".to_string());
        lines.extend(preview_lines(preview));
    }

    Ok(lines.join("\n"))
}

fn destination_line(data: &Value) -> String {
    let Some(destination) = data.get("destination").filter(|value| !value.is_null()) else {
        return format!("{} (skipped)", value_str(data, "destination_table"));
    };

    let table = value_str(destination, "table");
    if destination
        .get("written")
        .and_then(Value::as_bool)
        .unwrap_or(false)
    {
        format!(
            "{table} ({} rows inserted)",
            value_i64(destination, "rows_inserted")
        )
    } else {
        format!("{table} (not written: {})", value_str(destination, "error"))
    }
}

fn table_line(table: &Value, width: usize) -> String {
    let name = value_str(table, "table");
    let label = value_str(table, "month_label");
    let status = value_str(table, "status");

    if status == "failed" {
        return format!(
            "  {name:<width$}  {label:<3}  {status:<6}  {}",
            value_str(table, "error")
        );
    }

    let mut line = format!(
        "  {name:<width$}  {label:<3}  {status:<6}  raw {:>5}  valid {:>5}",
        value_i64(table, "raw_rows"),
        value_i64(table, "valid_rows")
    );
    if table
        .get("header_promoted")
        .and_then(Value::as_bool)
        .unwrap_or(false)
    {
        line.push_str("  header from first row");
    }
    line
}

fn preview_lines(rows: &[Value]) -> Vec<String> {
    let cells = rows
        .iter()
        .map(|row| {
            PREVIEW_COLUMNS
                .iter()
                .map(|column| row.get(*column).and_then(Value::as_str).unwrap_or("-"))
                .collect::<Vec<&str>>()
        })
        .collect::<Vec<Vec<&str>>>();

    let widths = PREVIEW_COLUMNS
        .iter()
        .enumerate()
        .map(|(index, header)| {
            cells
                .iter()
                .map(|row| row[index].chars().count())
                .chain(std::iter::once(header.len()))
                .max()
                .unwrap_or(0)
        })
        .collect::<Vec<usize>>();

    let mut lines = vec![format_row(&PREVIEW_COLUMNS, &widths)];
    for row in &cells {
        lines.push(format_row(row, &widths));
    }
    lines
}

fn format_row(values: &[&str], widths: &[usize]) -> String {
    let padded = values
        .iter()
        .zip(widths)
        .map(|(value, width)| {
            let padding = width.saturating_sub(value.chars().count());
            format!("{value}{}", " ".repeat(padding))
        })
        .collect::<Vec<String>>();
    format!("  {}", padded.join("  ").trim_end())
}

fn array_of<'a>(data: &'a Value, key: &str) -> &'a [Value] {
    data.get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

fn value_str<'a>(data: &'a Value, key: &str) -> &'a str {
    data.get(key).and_then(Value::as_str).unwrap_or("")
}

fn value_i64(data: &Value, key: &str) -> i64 {
    data.get(key).and_then(Value::as_i64).unwrap_or(0)
}
