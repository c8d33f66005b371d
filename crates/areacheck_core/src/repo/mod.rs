//! Repository layer for result persistence.
//!
//! # Responsibility
//! - Define the storage contract the check service depends on.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository writes enforce `CalculationResult::validate()`.

pub mod result_repo;
