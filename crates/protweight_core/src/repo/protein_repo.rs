//! Protein repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Persist parsed records as `proteins` rows and read them back.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Write paths call `SequenceRecord::validate()` before SQL mutations.
//! - `insert_all` is all-or-nothing: one transaction per batch.
//! - Reads return rows ordered by ascending id.

use crate::model::protein::{PersistedProtein, ProteinId, RecordValidationError, SequenceRecord};
use crate::store::StoreError;
use log::{error, info};
use rusqlite::{params, Connection, Row, TransactionBehavior};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

const PROTEIN_SELECT_SQL: &str = "SELECT
    id,
    name,
    sequence,
    description
FROM proteins";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for protein persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// Record at `index` of the batch failed validation; nothing was written.
    Validation {
        index: usize,
        source: RecordValidationError,
    },
    Store(StoreError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation { index, source } => {
                write!(f, "record #{index} rejected: {source}")
            }
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation { source, .. } => Some(source),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Store(StoreError::Sqlite(value))
    }
}

/// Repository interface for the protein store.
pub trait ProteinRepository {
    /// Inserts every record in order and returns the assigned ids in the
    /// same order. Either all rows are written or none are.
    fn insert_all(&mut self, records: &[SequenceRecord]) -> RepoResult<Vec<ProteinId>>;
    /// Returns every stored row ordered by id.
    fn list_all(&self) -> RepoResult<Vec<PersistedProtein>>;
    /// Returns the number of stored rows.
    fn count(&self) -> RepoResult<u64>;
}

/// SQLite-backed protein repository.
pub struct SqliteProteinRepository<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteProteinRepository<'conn> {
    /// Wraps a connection returned by `open_store`/`open_store_in_memory`.
    pub fn new(conn: &'conn mut Connection) -> Self {
        Self { conn }
    }
}

impl ProteinRepository for SqliteProteinRepository<'_> {
    fn insert_all(&mut self, records: &[SequenceRecord]) -> RepoResult<Vec<ProteinId>> {
        for (index, record) in records.iter().enumerate() {
            record
                .validate()
                .map_err(|source| RepoError::Validation { index, source })?;
        }

        let started_at = Instant::now();
        let result = insert_batch(self.conn, records);
        match &result {
            Ok(ids) => info!(
                "event=protein_insert module=repo status=ok rows={} duration_ms={}",
                ids.len(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=protein_insert module=repo status=error rows={} duration_ms={} error={}",
                records.len(),
                started_at.elapsed().as_millis(),
                err
            ),
        }
        result
    }

    fn list_all(&self) -> RepoResult<Vec<PersistedProtein>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PROTEIN_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut proteins = Vec::new();

        while let Some(row) = rows.next()? {
            proteins.push(parse_protein_row(row)?);
        }

        Ok(proteins)
    }

    fn count(&self) -> RepoResult<u64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM proteins;", [], |row| {
                row.get::<_, i64>(0)
            })?;
        Ok(u64::try_from(count).unwrap_or_default())
    }
}

fn insert_batch(conn: &mut Connection, records: &[SequenceRecord]) -> RepoResult<Vec<ProteinId>> {
    // Dropping `tx` without commit rolls the whole batch back.
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
    let mut ids = Vec::with_capacity(records.len());
    {
        let mut stmt = tx.prepare(
            "INSERT INTO proteins (
                name,
                sequence,
                description
            ) VALUES (?1, ?2, ?3);",
        )?;
        for record in records {
            stmt.execute(params![
                record.name.as_str(),
                record.sequence.as_str(),
                description_to_db(&record.description),
            ])?;
            ids.push(tx.last_insert_rowid());
        }
    }
    tx.commit()?;
    Ok(ids)
}

fn parse_protein_row(row: &Row<'_>) -> RepoResult<PersistedProtein> {
    Ok(PersistedProtein {
        id: row.get("id")?,
        name: row.get("name")?,
        sequence: row.get("sequence")?,
        description: row.get("description")?,
    })
}

fn description_to_db(description: &str) -> Option<&str> {
    if description.is_empty() {
        None
    } else {
        Some(description)
    }
}
