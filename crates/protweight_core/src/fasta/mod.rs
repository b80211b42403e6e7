//! FASTA text parsing and rendering.
//!
//! # Responsibility
//! - Turn multi-record FASTA text into ordered `SequenceRecord` values.
//! - Render records back to FASTA text.
//!
//! # Invariants
//! - Parsing is total: any input yields a (possibly empty) record list.
//! - Residue characters are never validated here.

mod parser;

pub use parser::{parse_fasta, write_fasta, DEFAULT_LINE_WIDTH, RECORD_MARKER};
