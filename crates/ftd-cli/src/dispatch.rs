use ftd_client::commands;
use ftd_client::commands::consolidate::ConsolidateOptions;
use ftd_client::{ClientResult, SuccessEnvelope};

use crate::cli::{Cli, Commands};

pub fn dispatch(cli: &Cli) -> ClientResult<SuccessEnvelope> {
    match &cli.command {
        Commands::Consolidate {
            db,
            csv,
            tables,
            destination,
            json: _,
        } => commands::consolidate::run_with_options(ConsolidateOptions {
            db_path: db.as_deref(),
            csv_path: csv.as_deref(),
            tables: tables.clone(),
            destination_table: destination.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use crate::cli::parse_from;

    use super::dispatch;

    #[test]
    fn invalid_destination_is_rejected_before_touching_the_database() {
        let parsed = parse_from([
            "ftd",
            "consolidate",
            "--db",
            "/nonexistent/ftd.db",
            "--destination",
            "bad name",
        ]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            let response = dispatch(&cli);
            assert!(response.is_err());
            if let Err(error) = response {
                assert_eq!(error.code, "invalid_argument");
            }
        }
    }

    #[test]
    fn missing_database_dispatches_to_an_empty_result() {
        let parsed = parse_from([
            "ftd",
            "consolidate",
            "--db",
            "/nonexistent/ftd.db",
            "--csv",
            "/nonexistent/out.csv",
        ]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            let response = dispatch(&cli);
            assert!(response.is_ok());
            if let Ok(success) = response {
                assert_eq!(success.command, "consolidate");
                assert_eq!(success.data["outcome"], "no_connection");
            }
        }
    }
}
