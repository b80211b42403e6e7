//! Domain model for parsed, persisted and analyzed protein sequences.
//!
//! # Responsibility
//! - Define the record shapes flowing between pipeline stages.
//!
//! # Invariants
//! - Records are plain values; stages pass ownership, never share.
//! - Store identifiers are assigned by SQLite, never by callers.

pub mod protein;
