//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate validation, hit-testing and persistence.
//! - Hold the process-wide result history.

pub mod check_service;
pub mod history;
