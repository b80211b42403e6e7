//! Remote FASTA retrieval.
//!
//! # Responsibility
//! - Define the `SequenceSource` seam used by the ingest pipeline.
//! - Provide the blocking HTTP implementation.
//!
//! # Invariants
//! - One attempt per identifier; no retry, no backoff.
//! - Non-success status is `Ok(None)`; transport failures are `Err`.
//! - Fetchers never parse the body.

mod http;

pub use http::{HttpFastaSource, DEFAULT_URL_TEMPLATE, ID_PLACEHOLDER};

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static IDENTIFIER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.\-]+$").expect("valid identifier regex"));

pub type FetchResult<T> = Result<T, FetchError>;

/// Fetch-layer error. Only raised for failures that end the run.
#[derive(Debug)]
pub enum FetchError {
    /// Identifier contains characters that cannot be placed in a URL path.
    InvalidIdentifier(String),
    /// URL template lacks the `{id}` placeholder.
    InvalidTemplate(String),
    Transport {
        identifier: String,
        source: reqwest::Error,
    },
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidIdentifier(id) => write!(f, "invalid sequence identifier `{id}`"),
            Self::InvalidTemplate(template) => {
                write!(f, "url template `{template}` has no {ID_PLACEHOLDER} placeholder")
            }
            Self::Transport { identifier, source } => {
                write!(f, "request for `{identifier}` failed: {source}")
            }
        }
    }
}

impl Error for FetchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Source of raw FASTA text, one identifier at a time.
pub trait SequenceSource {
    /// Returns the body for `identifier`, or `None` when the remote side
    /// answered with a non-success status.
    fn fetch(&self, identifier: &str) -> FetchResult<Option<String>>;
}

/// Returns whether `identifier` is a usable accession token.
pub fn is_valid_identifier(identifier: &str) -> bool {
    IDENTIFIER_RE.is_match(identifier)
}

#[cfg(test)]
mod tests {
    use super::is_valid_identifier;

    #[test]
    fn identifier_accepts_accession_tokens() {
        assert!(is_valid_identifier("1ABC"));
        assert!(is_valid_identifier("P69905.2"));
        assert!(is_valid_identifier("sp_Q9-1"));
    }

    #[test]
    fn identifier_rejects_path_characters() {
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("1ABC/../x"));
        assert!(!is_valid_identifier("1 ABC"));
        assert!(!is_valid_identifier("1ABC?x=1"));
    }
}
