//! Identifier listing reader.
//!
//! # Responsibility
//! - Turn a plain two-column listing into an ordered identifier list.
//!
//! # Invariants
//! - Output order equals line order; duplicates are kept.
//! - Every returned identifier passes `is_valid_identifier`.

use crate::fetch::is_valid_identifier;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

static COLUMN_SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[,\s]+").expect("valid column separator regex"));

const HEADER_TOKENS: &[&str] = &["id", "identifier"];

/// One listing entry: identifier plus optional free-text label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub identifier: String,
    pub label: Option<String>,
}

#[derive(Debug)]
pub enum ListingError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    InvalidIdentifier {
        line: usize,
        value: String,
    },
}

impl Display for ListingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read listing `{}`: {source}", path.display())
            }
            Self::InvalidIdentifier { line, value } => {
                write!(f, "line {line}: invalid identifier `{value}`")
            }
        }
    }
}

impl Error for ListingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::InvalidIdentifier { .. } => None,
        }
    }
}

/// Parses listing text. Blank lines and `#` comments are skipped; an
/// `id`/`identifier` first column on the first data line is a header.
pub fn parse_identifier_listing(text: &str) -> Result<Vec<ListingEntry>, ListingError> {
    let mut entries = Vec::new();
    let mut seen_data_line = false;

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut columns = COLUMN_SEPARATOR_RE.splitn(line, 2);
        let identifier = columns.next().unwrap_or_default();
        let label = columns
            .next()
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .map(str::to_string);

        let is_first = !seen_data_line;
        seen_data_line = true;
        if is_first
            && HEADER_TOKENS
                .iter()
                .any(|token| identifier.eq_ignore_ascii_case(token))
        {
            continue;
        }

        if !is_valid_identifier(identifier) {
            return Err(ListingError::InvalidIdentifier {
                line: index + 1,
                value: identifier.to_string(),
            });
        }

        entries.push(ListingEntry {
            identifier: identifier.to_string(),
            label,
        });
    }

    Ok(entries)
}

/// Reads and parses a listing file, returning identifiers only.
pub fn read_identifier_listing(path: impl AsRef<Path>) -> Result<Vec<String>, ListingError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| ListingError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_identifier_listing(&text)?
        .into_iter()
        .map(|entry| entry.identifier)
        .collect())
}
