//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the writer/reader contract over the protein store.
//! - Isolate SQLite query details from pipeline orchestration.

pub mod protein_repo;
