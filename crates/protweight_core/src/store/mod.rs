//! Protein store handle.
//!
//! A store is one SQLite file holding the `proteins` table. Callers open it
//! for the duration of a single batch and drop the connection when done.

use log::{error, info};
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::time::{Duration, Instant};

/// Schema generation written to `PRAGMA user_version` once `proteins` exists.
pub const SCHEMA_VERSION: u32 = 1;

const PROTEINS_DDL: &str = include_str!("proteins.sql");

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    Sqlite(rusqlite::Error),
    /// The file was written by a newer build with a different table layout.
    SchemaTooNew { found: u32 },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "protein store: {err}"),
            Self::SchemaTooNew { found } => write!(
                f,
                "protein store schema v{found} is not readable by this build (v{SCHEMA_VERSION})"
            ),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::SchemaTooNew { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Opens (creating if needed) the store file at `path`.
pub fn open_store(path: impl AsRef<Path>) -> StoreResult<Connection> {
    let path = path.as_ref();
    let started_at = Instant::now();
    let opened = Connection::open(path)
        .map_err(StoreError::from)
        .and_then(prepare);

    match &opened {
        Ok(_) => info!(
            "event=store_open module=store status=ok path={} duration_ms={}",
            path.display(),
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=store_open module=store status=error path={} error={}",
            path.display(),
            err
        ),
    }
    opened
}

/// Opens a throwaway store that lives as long as the returned connection.
pub fn open_store_in_memory() -> StoreResult<Connection> {
    prepare(Connection::open_in_memory()?)
}

fn prepare(mut conn: Connection) -> StoreResult<Connection> {
    conn.busy_timeout(Duration::from_secs(5))?;

    let found: u32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;
    match found {
        SCHEMA_VERSION => {}
        0 => {
            let tx = conn.transaction()?;
            tx.execute_batch(PROTEINS_DDL)?;
            tx.pragma_update(None, "user_version", SCHEMA_VERSION)?;
            tx.commit()?;
            info!(
                "event=store_schema module=store status=created version={}",
                SCHEMA_VERSION
            );
        }
        found => return Err(StoreError::SchemaTooNew { found }),
    }
    Ok(conn)
}
