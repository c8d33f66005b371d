//! Core logic for AreaCheck.
//! Validates submitted points, classifies them against the target area and
//! records results to storage and an in-memory history.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::AppConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::area::{evaluate, regions_containing, Region};
pub use model::point::{
    validate, validate_canvas, validate_form, validate_r, PointField, PointInput,
    PointValidationError, SessionInput, SubmissionMode, ValidatedPoint, DEFAULT_R, R_OPTIONS,
    X_OPTIONS,
};
pub use model::result::{current_clock_text, CalculationResult, ResultValidationError};
pub use repo::result_repo::{RepoError, RepoResult, ResultRepository, SqliteResultRepository};
pub use service::check_service::{AreaCheckService, CheckError};
pub use service::history::ResultHistory;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
