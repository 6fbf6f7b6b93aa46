use std::path::{Path, PathBuf};
use std::time::Duration;

use rusqlite::{Connection, Error as SqliteError, OpenFlags, ffi::ErrorCode};

use crate::{ClientError, ClientResult};

pub const DATABASE_PATH_ENV: &str = "FTD_DB_PATH";
pub const DEFAULT_DATABASE_FILE: &str = "ftd.db";

pub fn resolve_database_path(path_override: Option<&Path>) -> ClientResult<PathBuf> {
    let candidate = match path_override {
        Some(path) => path.to_path_buf(),
        None => match std::env::var_os(DATABASE_PATH_ENV) {
            Some(env_path) if !env_path.is_empty() => PathBuf::from(env_path),
            _ => PathBuf::from(DEFAULT_DATABASE_FILE),
        },
    };

    absolutize(&candidate)
}

/// Opens an existing database read-write. A missing file is an error rather
/// than a fresh empty database.
pub fn open_connection(db_path: &Path) -> ClientResult<Connection> {
    let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
        | OpenFlags::SQLITE_OPEN_URI
        | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    let connection = Connection::open_with_flags(db_path, flags)
        .map_err(|error| map_sqlite_error(db_path, &error))?;
    connection
        .busy_timeout(Duration::from_millis(250))
        .map_err(|error| map_sqlite_error(db_path, &error))?;
    Ok(connection)
}

pub fn map_sqlite_error(path: &Path, error: &SqliteError) -> ClientError {
    let error_code = error.sqlite_error_code();

    if matches!(
        error_code,
        Some(ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked)
    ) {
        return ClientError::database_locked(path);
    }

    ClientError::database_unavailable(path, &error.to_string())
}

fn absolutize(path: &Path) -> ClientResult<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }

    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .map_err(|error| ClientError::database_unavailable(path, &error.to_string()))
}
