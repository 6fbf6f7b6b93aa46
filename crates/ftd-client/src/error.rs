use std::path::Path;

use serde_json::{Value, json};
use thiserror::Error;

pub(crate) const CONSOLIDATE_HELP_COMMAND: &str = "ftd consolidate --help";

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ClientError {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
    pub data: Option<Value>,
}

impl ClientError {
    pub fn new(code: &str, message: &str, recovery_steps: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            recovery_steps,
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn invalid_argument_for_command(message: &str, command: Option<&str>) -> Self {
        let help_hint = match command {
            Some(cmd) => format!("Run `ftd {cmd} --help` for usage."),
            None => "Run `ftd --help` for usage.".to_string(),
        };
        let error = Self::new("invalid_argument", message, vec![help_hint]);
        if let Some(cmd) = command {
            return error.with_data(json!({
                "command_hint": cmd,
            }));
        }
        error
    }

    pub fn invalid_argument_with_recovery(message: &str, recovery_steps: Vec<String>) -> Self {
        Self::new("invalid_argument", message, recovery_steps)
    }

    pub fn invalid_table_name(table: &str) -> Self {
        Self::invalid_argument_with_recovery(
            &format!("Table name `{table}` is not a plain identifier."),
            vec![
                "Use only ASCII letters, digits and underscores in table names.".to_string(),
                format!("Run `{CONSOLIDATE_HELP_COMMAND}` to review the table options."),
            ],
        )
        .with_data(json!({
            "table": table,
        }))
    }

    pub fn database_unavailable(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "database_unavailable",
            &format!("Cannot open FTD database at `{location}`: {detail}"),
            vec![
                format!("Verify that `{location}` exists and is a readable SQLite database."),
                "Pass `--db <path>` or set `FTD_DB_PATH` to point at the source database."
                    .to_string(),
            ],
        )
    }

    pub fn database_locked(path: &Path) -> Self {
        let location = path.display().to_string();
        Self::new(
            "database_locked",
            &format!("FTD database is locked at `{location}`."),
            vec![format!(
                "Close other processes using `{location}` so the lock is released."
            )],
        )
    }

    pub fn source_table_failed(table: &str, detail: &str) -> Self {
        Self::new(
            "source_table_failed",
            &format!("Could not read source table `{table}`: {detail}"),
            vec![format!("Check that table `{table}` exists in the source database.")],
        )
        .with_data(json!({
            "table": table,
        }))
    }

    pub fn destination_write_failed(table: &str, detail: &str) -> Self {
        Self::new(
            "destination_write_failed",
            &format!("Could not rebuild destination table `{table}`: {detail}"),
            vec!["Rerun `ftd consolidate` once the database accepts writes.".to_string()],
        )
        .with_data(json!({
            "table": table,
        }))
    }

    pub fn snapshot_write_failed(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "snapshot_write_failed",
            &format!("Could not write CSV snapshot to `{location}`: {detail}"),
            vec![
                format!("Grant write access to `{location}` or pass `--csv <path>`."),
                format!("Run `{CONSOLIDATE_HELP_COMMAND}` for the snapshot options."),
            ],
        )
    }

    pub fn internal_serialization(message: &str) -> Self {
        Self::new("internal_serialization_error", message, Vec::new())
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
