//! Cleaning of free-form monetary strings.
//!
//! Source sheets mix `1.234,56` and `1,234.56`, currency symbols and stray
//! text. The cleaner keeps the numeric text with a dot decimal separator, or
//! drops the value entirely when nothing numeric survives. Only ASCII digits
//! are kept, so the stored text always parses as a plain decimal.

use crate::consolidate::SourceValue;

pub fn clean_amount(value: &SourceValue) -> Option<String> {
    let text = value.as_text()?;
    clean_amount_text(&text)
}

pub fn clean_amount_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    let stripped = trimmed
        .chars()
        .filter(|character| character.is_ascii_digit() || matches!(character, ',' | '.' | '-'))
        .collect::<String>();

    let normalized = match (stripped.rfind('.'), stripped.rfind(',')) {
        (Some(last_dot), Some(last_comma)) => {
            if last_comma > last_dot {
                stripped.replace('.', "").replace(',', ".")
            } else {
                stripped.replace(',', "")
            }
        }
        (None, Some(last_comma)) => {
            let fraction_len = stripped[last_comma + 1..].len();
            if matches!(fraction_len, 2 | 3) {
                stripped.replace(',', ".")
            } else {
                stripped.replace(',', "")
            }
        }
        _ => stripped,
    };

    if normalized.parse::<f64>().is_ok() {
        Some(normalized)
    } else {
        None
    }
}
