//! Protein sequence records.
//!
//! # Responsibility
//! - Define the parser output (`SequenceRecord`), the stored row
//!   (`PersistedProtein`) and the report row (`AnalysisRow`).
//! - Provide write-path validation shared by the repository.
//!
//! # Invariants
//! - A complete `SequenceRecord` has a non-empty `name` and `sequence`.
//! - `PersistedProtein::id` is unique and never reused.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned row identifier.
pub type ProteinId = i64;

/// Longest `name` the store schema accepts.
pub const MAX_NAME_CHARS: usize = 255;

/// One parsed FASTA entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceRecord {
    /// First whitespace-delimited token of the header line.
    pub name: String,
    /// Header remainder after `name`; empty when absent.
    pub description: String,
    /// Residue lines concatenated with per-line whitespace stripped.
    pub sequence: String,
}

impl SequenceRecord {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        sequence: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            sequence: sequence.into(),
        }
    }

    /// Validates the invariants required before persistence.
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        if self.name.trim().is_empty() {
            return Err(RecordValidationError::EmptyName);
        }
        if self.name.chars().count() > MAX_NAME_CHARS {
            return Err(RecordValidationError::NameTooLong {
                name: self.name.clone(),
                max_chars: MAX_NAME_CHARS,
            });
        }
        if self.sequence.is_empty() {
            return Err(RecordValidationError::EmptySequence {
                name: self.name.clone(),
            });
        }
        Ok(())
    }
}

/// A stored protein row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedProtein {
    pub id: ProteinId,
    pub name: String,
    pub description: Option<String>,
    pub sequence: String,
}

/// Derived per-protein weight, written to the report and never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisRow {
    pub id: ProteinId,
    pub name: String,
    pub molecular_weight: f64,
}

/// Validation failures for records entering the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    EmptyName,
    NameTooLong { name: String, max_chars: usize },
    EmptySequence { name: String },
}

impl Display for RecordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "record name cannot be empty"),
            Self::NameTooLong { name, max_chars } => {
                write!(f, "record name `{name}` exceeds {max_chars} characters")
            }
            Self::EmptySequence { name } => {
                write!(f, "record `{name}` has an empty sequence")
            }
        }
    }
}

impl Error for RecordValidationError {}

#[cfg(test)]
mod tests {
    use super::{RecordValidationError, SequenceRecord, MAX_NAME_CHARS};

    #[test]
    fn validate_accepts_complete_record() {
        let record = SequenceRecord::new("P001", "", "MVLS");
        assert!(record.validate().is_ok());
    }

    #[test]
    fn validate_rejects_missing_parts() {
        assert_eq!(
            SequenceRecord::new(" ", "x", "ACDE").validate(),
            Err(RecordValidationError::EmptyName)
        );
        assert!(matches!(
            SequenceRecord::new("P001", "x", "").validate(),
            Err(RecordValidationError::EmptySequence { .. })
        ));
    }

    #[test]
    fn validate_rejects_overlong_name() {
        let name = "N".repeat(MAX_NAME_CHARS + 1);
        let err = SequenceRecord::new(name, "", "A").validate().unwrap_err();
        assert!(matches!(err, RecordValidationError::NameTooLong { .. }));
    }
}
