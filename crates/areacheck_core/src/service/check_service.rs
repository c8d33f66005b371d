//! Area check use-case service.
//!
//! # Responsibility
//! - Run validate -> timed hit-test -> persist -> append to history.
//! - Keep CLI/UI callers decoupled from storage details.
//!
//! # Invariants
//! - The hit-test never runs on input that failed validation.
//! - A result reaches the history only after it was persisted.
//! - Validation messages are returned unchanged for display.

use crate::model::area::evaluate;
use crate::model::point::{
    validate, PointInput, PointValidationError, SessionInput, SubmissionMode,
};
use crate::model::result::CalculationResult;
use crate::repo::result_repo::{RepoError, RepoResult, ResultRepository};
use crate::service::history::ResultHistory;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use std::time::Instant;

/// Errors from the area check service.
#[derive(Debug)]
pub enum CheckError {
    /// Submitted input is outside the legal domain for its mode.
    Validation(PointValidationError),
    /// Result storage failed.
    Repo(RepoError),
}

impl Display for CheckError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "failed to store result: {err}"),
        }
    }
}

impl Error for CheckError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<PointValidationError> for CheckError {
    fn from(value: PointValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for CheckError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Use-case service for checking points against the target area.
pub struct AreaCheckService<R: ResultRepository> {
    repo: R,
    history: Arc<ResultHistory>,
}

impl<R: ResultRepository> AreaCheckService<R> {
    /// Creates a service over `repo` that appends to `history`.
    pub fn new(repo: R, history: Arc<ResultHistory>) -> Self {
        Self { repo, history }
    }

    /// Creates a service whose history is seeded from `repo`.
    pub fn with_loaded_history(repo: R) -> RepoResult<Self> {
        let history = Arc::new(ResultHistory::load(&repo)?);
        Ok(Self::new(repo, history))
    }

    /// Validates, classifies and records one submission.
    ///
    /// # Errors
    /// - `CheckError::Validation` when input is rejected for `mode`; nothing
    ///   is evaluated or stored.
    /// - `CheckError::Repo` when storage fails; history is left unchanged.
    pub fn check(
        &self,
        mode: SubmissionMode,
        input: &PointInput,
    ) -> Result<Arc<CalculationResult>, CheckError> {
        let point = validate(mode, input).inspect_err(|err| {
            warn!(
                "event=area_check module=service status=rejected mode={:?} field={} error_code={}",
                mode,
                err.field().as_str(),
                err.code()
            );
        })?;

        let started_at = Instant::now();
        let hit = evaluate(point.x(), point.y(), point.r());
        let elapsed = started_at.elapsed();

        let result = Arc::new(CalculationResult::from_check(point, hit, elapsed));
        self.repo.save_result(&result)?;
        self.history.push_front(Arc::clone(&result));

        info!(
            "event=area_check module=service status=ok mode={:?} hit={} duration_ns={}",
            mode,
            hit,
            result.execution_time_nanos()
        );
        Ok(result)
    }

    /// Checks the current selection held by a session.
    pub fn check_session(
        &self,
        mode: SubmissionMode,
        session: &SessionInput,
    ) -> Result<Arc<CalculationResult>, CheckError> {
        self.check(mode, &session.to_input())
    }

    /// Read-only snapshot of the history, newest first.
    pub fn results(&self) -> Vec<Arc<CalculationResult>> {
        self.history.snapshot()
    }

    /// Shared history handle for display collaborators.
    pub fn history(&self) -> &Arc<ResultHistory> {
        &self.history
    }

    /// Clears storage first, then the in-memory history.
    pub fn clear_results(&self) -> RepoResult<usize> {
        let removed = self.repo.clear_all_results()?;
        self.history.clear();
        info!("event=history_clear module=service status=ok removed={removed}");
        Ok(removed)
    }
}
