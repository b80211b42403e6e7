//! Protein sequence ingest and molecular weight analysis.
//!
//! Two sequential batch runs share one SQLite store:
//! - ingest: identifiers -> FASTA fetch -> parse -> persist
//! - analyze: read -> weigh -> CSV report

pub mod analysis;
pub mod config;
pub mod fasta;
pub mod fetch;
pub mod listing;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use analysis::{calculate_weight, weigh_sequence, write_report, ReportError, REPORT_HEADER};
pub use config::{ConfigError, PipelineConfig};
pub use fasta::{parse_fasta, write_fasta};
pub use fetch::{FetchError, FetchResult, HttpFastaSource, SequenceSource};
pub use listing::{parse_identifier_listing, read_identifier_listing, ListingError};
pub use logging::{default_log_level, init_logging, LogTarget};
pub use model::protein::{AnalysisRow, PersistedProtein, ProteinId, SequenceRecord};
pub use repo::protein_repo::{ProteinRepository, RepoError, RepoResult, SqliteProteinRepository};
pub use service::pipeline::{IngestSummary, PipelineError, PipelineResult, PipelineService};
pub use store::{open_store, open_store_in_memory, StoreError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
