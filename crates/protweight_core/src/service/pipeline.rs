//! Batch pipeline orchestration.
//!
//! # Responsibility
//! - `ingest`: identifiers -> fetch -> parse -> persist.
//! - `analyze`: read -> weigh -> export.
//!
//! # Invariants
//! - Stages run sequentially, one identifier and one row at a time.
//! - Each run opens its own store connection and drops it before
//!   returning, on success and error paths alike.
//! - A failed fetch status skips the identifier; every other failure ends
//!   the run.

use crate::analysis::{analyze_proteins, write_report, ReportError};
use crate::fasta::parse_fasta;
use crate::fetch::{FetchError, SequenceSource};
use crate::model::protein::{AnalysisRow, PersistedProtein, ProteinId, SequenceRecord};
use crate::repo::protein_repo::{ProteinRepository, RepoError, SqliteProteinRepository};
use crate::store::{open_store, StoreError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub type PipelineResult<T> = Result<T, PipelineError>;

/// Fatal pipeline error.
#[derive(Debug)]
pub enum PipelineError {
    Fetch(FetchError),
    Store(StoreError),
    Repo(RepoError),
    Report(ReportError),
}

impl Display for PipelineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fetch(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::Report(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PipelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Fetch(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::Report(err) => Some(err),
        }
    }
}

impl From<FetchError> for PipelineError {
    fn from(value: FetchError) -> Self {
        Self::Fetch(value)
    }
}

impl From<StoreError> for PipelineError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<RepoError> for PipelineError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<ReportError> for PipelineError {
    fn from(value: ReportError) -> Self {
        Self::Report(value)
    }
}

/// Parsed records gathered from a list of identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchedBatch {
    /// Records from every successful fetch, in identifier then file order.
    pub records: Vec<SequenceRecord>,
    /// Identifiers whose fetch returned a non-success status.
    pub skipped: Vec<String>,
}

/// Outcome of one ingest run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestSummary {
    pub requested: usize,
    pub skipped: Vec<String>,
    /// Store ids assigned to the inserted rows, in insertion order.
    pub protein_ids: Vec<ProteinId>,
}

/// Fetches and parses every identifier in order.
pub fn fetch_records<S: SequenceSource + ?Sized>(
    source: &S,
    identifiers: &[String],
) -> PipelineResult<FetchedBatch> {
    let mut batch = FetchedBatch::default();
    for identifier in identifiers {
        match source.fetch(identifier)? {
            Some(text) => {
                let records = parse_fasta(&text);
                if records.is_empty() {
                    warn!(
                        "event=fasta_parse module=service status=empty id={}",
                        identifier
                    );
                }
                batch.records.extend(records);
            }
            None => batch.skipped.push(identifier.clone()),
        }
    }
    Ok(batch)
}

/// Inserts `records` through any repository implementation.
pub fn persist_records<R: ProteinRepository + ?Sized>(
    repo: &mut R,
    records: &[SequenceRecord],
) -> PipelineResult<Vec<ProteinId>> {
    Ok(repo.insert_all(records)?)
}

/// Weighs every stored row and writes the report.
pub fn export_analysis<R: ProteinRepository + ?Sized>(
    repo: &R,
    report_path: &Path,
) -> PipelineResult<Vec<AnalysisRow>> {
    let proteins = repo.list_all()?;
    let rows = analyze_proteins(&proteins);
    write_report(report_path, &rows)?;
    Ok(rows)
}

/// Runs the pipeline stages against one SQLite store file.
pub struct PipelineService<S: SequenceSource> {
    source: S,
    database: PathBuf,
}

impl<S: SequenceSource> PipelineService<S> {
    pub fn new(source: S, database: impl Into<PathBuf>) -> Self {
        Self {
            source,
            database: database.into(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the store path this service writes to.
    pub fn database(&self) -> &Path {
        &self.database
    }

    /// Fetches, parses and stores all `identifiers`.
    ///
    /// Identifiers answered with a non-success status are skipped. The
    /// insert is all-or-nothing.
    pub fn ingest(&self, identifiers: &[String]) -> PipelineResult<IngestSummary> {
        info!(
            "event=ingest module=service status=start identifiers={}",
            identifiers.len()
        );
        let batch = fetch_records(&self.source, identifiers)?;
        let protein_ids = self.store(&batch.records)?;

        let summary = IngestSummary {
            requested: identifiers.len(),
            skipped: batch.skipped,
            protein_ids,
        };
        info!(
            "event=ingest module=service status=ok identifiers={} skipped={} rows={}",
            summary.requested,
            summary.skipped.len(),
            summary.protein_ids.len()
        );
        Ok(summary)
    }

    /// Parses local FASTA text and stores the records.
    pub fn ingest_fasta_text(&self, text: &str) -> PipelineResult<IngestSummary> {
        let records = parse_fasta(text);
        let protein_ids = self.store(&records)?;
        info!(
            "event=ingest module=service status=ok source=local rows={}",
            protein_ids.len()
        );
        Ok(IngestSummary {
            requested: 0,
            skipped: Vec::new(),
            protein_ids,
        })
    }

    /// Returns every stored protein ordered by id.
    pub fn load_proteins(&self) -> PipelineResult<Vec<PersistedProtein>> {
        let mut conn = open_store(&self.database)?;
        let repo = SqliteProteinRepository::new(&mut conn);
        Ok(repo.list_all()?)
    }

    /// Weighs every stored protein and writes the report to `report_path`.
    pub fn analyze(&self, report_path: impl AsRef<Path>) -> PipelineResult<Vec<AnalysisRow>> {
        let mut conn = open_store(&self.database)?;
        let repo = SqliteProteinRepository::new(&mut conn);
        export_analysis(&repo, report_path.as_ref())
    }

    fn store(&self, records: &[SequenceRecord]) -> PipelineResult<Vec<ProteinId>> {
        let mut conn = open_store(&self.database)?;
        let mut repo = SqliteProteinRepository::new(&mut conn);
        persist_records(&mut repo, records)
    }
}
