//! Process-wide in-memory result history.
//!
//! # Invariants
//! - Append-only except for an explicit `clear()`.
//! - Ordered newest first.
//! - Records are shared as `Arc` and never copied or mutated.

use crate::model::result::CalculationResult;
use crate::repo::result_repo::{RepoResult, ResultRepository};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Thread-safe history of calculation results for display.
#[derive(Debug, Default)]
pub struct ResultHistory {
    entries: RwLock<Vec<Arc<CalculationResult>>>,
}

impl ResultHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a history from results already ordered newest first.
    pub fn seeded(results: Vec<CalculationResult>) -> Self {
        Self {
            entries: RwLock::new(results.into_iter().map(Arc::new).collect()),
        }
    }

    /// Seeds a history from every result stored in `repo`.
    pub fn load(repo: &impl ResultRepository) -> RepoResult<Self> {
        Ok(Self::seeded(repo.load_all_results()?))
    }

    /// Prepends a new result.
    pub fn push_front(&self, result: Arc<CalculationResult>) {
        self.write().insert(0, result);
    }

    /// Read-only copy of the current entries, newest first.
    pub fn snapshot(&self) -> Vec<Arc<CalculationResult>> {
        self.read().clone()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn clear(&self) {
        self.write().clear();
    }

    // Entries are always left consistent, so a poisoned lock is still usable.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Arc<CalculationResult>>> {
        self.entries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Arc<CalculationResult>>> {
        self.entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
