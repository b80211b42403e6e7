//! Pipeline use-case services.
//!
//! # Responsibility
//! - Chain fetch, parse and persist into the ingest run.
//! - Chain read, weigh and export into the analysis run.
//! - Keep the CLI decoupled from storage and transport details.

pub mod pipeline;
