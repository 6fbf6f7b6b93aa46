use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Extended help shown after `ftd consolidate --help`.
pub const CONSOLIDATE_AFTER_HELP: &str = "\
How consolidation works:
  Each monthly FTD table is read in order, its header is repaired when the
  real labels landed in the first row, and source-specific column names are
  mapped onto one fixed schema:

    date, id, team, agent, country, affiliate, usd, month_name

  `usd` is cleaned into plain numeric text (`1.234,56` and `1,234.56` both
  become `1234.56`). `month_name` comes from the table name
  (`ftds_nov_PGY_2025` -> `Nov`). Rows with no business values are dropped.

Outputs:
  1. A UTF-8 CSV snapshot (with BOM) at --csv.
  2. The destination table, dropped and recreated on every run.

Database:
  --db wins, then the FTD_DB_PATH environment variable, then ./ftd.db.
  The database must already exist; a missing file produces an empty result.

Defaults:
  tables:       ftds_sep_PGY_2025, ftds_oct_PGY_2025, ftds_nov_PGY_2025, ftds_PGY_2025
  destination:  FTD_MASTER_PGY_CLEAN
  csv:          FTD_MASTER_PGY_preview.csv

Logging:
  Progress is logged to stderr. Set RUST_LOG (e.g. RUST_LOG=debug) to adjust.
";

#[derive(Debug, Parser)]
#[command(
    name = "ftd",
    version,
    about = "first time deposit consolidation",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Merge the monthly FTD tables into one clean table and CSV snapshot
    #[command(after_long_help = CONSOLIDATE_AFTER_HELP)]
    Consolidate {
        /// Path to the SQLite database holding the monthly tables
        #[arg(long)]
        db: Option<PathBuf>,
        /// Where to write the CSV snapshot
        #[arg(long)]
        csv: Option<PathBuf>,
        /// Source table to read; repeat to read several, in order
        #[arg(long = "table", value_name = "TABLE")]
        tables: Vec<String>,
        /// Destination table to drop, recreate and fill
        #[arg(long)]
        destination: Option<String>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
pub fn parse_from<I, T>(itr: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(itr)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::error::ErrorKind;

    use super::{Commands, parse_from};

    #[test]
    fn consolidate_parses_with_defaults() {
        let parsed = parse_from(["ftd", "consolidate"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            let Commands::Consolidate {
                db,
                csv,
                tables,
                destination,
                json,
            } = cli.command;
            assert_eq!(db, None);
            assert_eq!(csv, None);
            assert!(tables.is_empty());
            assert_eq!(destination, None);
            assert!(!json);
        }
    }

    #[test]
    fn repeated_tables_keep_their_order() {
        let parsed = parse_from([
            "ftd",
            "consolidate",
            "--db",
            "data/ftd.db",
            "--table",
            "ftds_oct_PGY_2025",
            "--table",
            "ftds_sep_PGY_2025",
            "--destination",
            "FTD_MASTER_TEST",
            "--csv",
            "out.csv",
            "--json",
        ]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            let Commands::Consolidate {
                db,
                csv,
                tables,
                destination,
                json,
            } = cli.command;
            assert_eq!(db, Some(PathBuf::from("data/ftd.db")));
            assert_eq!(csv, Some(PathBuf::from("out.csv")));
            assert_eq!(tables, vec!["ftds_oct_PGY_2025", "ftds_sep_PGY_2025"]);
            assert_eq!(destination.as_deref(), Some("FTD_MASTER_TEST"));
            assert!(json);
        }
    }

    #[test]
    fn missing_subcommand_is_an_error() {
        let parsed = parse_from(["ftd"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn help_command_is_rejected() {
        let parsed = parse_from(["ftd", "help"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn consolidate_help_uses_clap_display_help() {
        let parsed = parse_from(["ftd", "consolidate", "--help"]);
        assert!(parsed.is_err());
        if let Err(err) = parsed {
            assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        }
    }
}
