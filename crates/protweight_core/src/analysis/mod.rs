//! Molecular weight analysis and report export.
//!
//! # Responsibility
//! - Compute an additive per-sequence weight from a fixed residue table.
//! - Write analysis rows to a CSV report.
//!
//! # Invariants
//! - Unrecognized residues contribute zero and never abort a computation.
//! - Report rows keep input order.

mod report;
mod weight;

pub use report::{write_report, ReportError, ReportResult, REPORT_HEADER};
pub use weight::{
    analyze_proteins, calculate_weight, residue_weight, weigh_sequence, WeightBreakdown,
};
