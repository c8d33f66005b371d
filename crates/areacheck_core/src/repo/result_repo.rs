//! Result repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Durably store calculation results and load them for history seeding.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Write paths call `CalculationResult::validate()` before inserting.
//! - Read paths reject invalid persisted rows instead of masking them.
//! - Loads return newest first by insertion order.

use crate::db::DbError;
use crate::model::result::{CalculationResult, ResultValidationError};
use chrono::NaiveDateTime;
use log::{error, info};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const RESULT_SELECT_SQL: &str = "SELECT
    x,
    y,
    r,
    hit,
    timestamp,
    exec_time
FROM results
ORDER BY id DESC";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for result persistence and loading.
#[derive(Debug)]
pub enum RepoError {
    Validation(ResultValidationError),
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted result data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<ResultValidationError> for RepoError {
    fn from(value: ResultValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Persistence collaborator for calculation results.
pub trait ResultRepository {
    /// Stores one result and returns its row id.
    fn save_result(&self, result: &CalculationResult) -> RepoResult<i64>;
    /// Loads every stored result, newest first.
    fn load_all_results(&self) -> RepoResult<Vec<CalculationResult>>;
    /// Deletes every stored result and returns the number of removed rows.
    fn clear_all_results(&self) -> RepoResult<usize>;
}

/// SQLite-backed result repository.
pub struct SqliteResultRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteResultRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ResultRepository for SqliteResultRepository<'_> {
    fn save_result(&self, result: &CalculationResult) -> RepoResult<i64> {
        result.validate()?;

        let exec_time = i64::try_from(result.execution_time_nanos()).map_err(|_| {
            RepoError::InvalidData(format!(
                "execution time {} ns does not fit results.exec_time",
                result.execution_time_nanos()
            ))
        })?;

        let inserted = self.conn.execute(
            "INSERT INTO results (x, y, r, hit, timestamp, exec_time)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                result.x(),
                result.y(),
                result.r(),
                result.is_hit(),
                result.timestamp(),
                exec_time,
            ],
        );
        if let Err(err) = inserted {
            error!("event=result_save module=repo status=error error={err}");
            return Err(err.into());
        }

        let id = self.conn.last_insert_rowid();
        info!(
            "event=result_save module=repo status=ok id={} hit={}",
            id,
            result.is_hit()
        );
        Ok(id)
    }

    fn load_all_results(&self) -> RepoResult<Vec<CalculationResult>> {
        let mut stmt = self.conn.prepare(RESULT_SELECT_SQL)?;
        let mut rows = stmt.query([])?;
        let mut results = Vec::new();

        while let Some(row) = rows.next()? {
            results.push(parse_result_row(row)?);
        }

        info!(
            "event=result_load module=repo status=ok count={}",
            results.len()
        );
        Ok(results)
    }

    fn clear_all_results(&self) -> RepoResult<usize> {
        let removed = self.conn.execute("DELETE FROM results;", [])?;
        info!("event=result_clear module=repo status=ok removed={removed}");
        Ok(removed)
    }
}

fn parse_result_row(row: &Row<'_>) -> RepoResult<CalculationResult> {
    let hit = match row.get::<_, i64>("hit")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid hit value `{other}` in results.hit"
            )));
        }
    };

    let exec_time = row.get::<_, i64>("exec_time")?;
    let execution_time_nanos = u64::try_from(exec_time).map_err(|_| {
        RepoError::InvalidData(format!(
            "negative exec_time `{exec_time}` in results.exec_time"
        ))
    })?;

    let timestamp: NaiveDateTime = row.get("timestamp")?;

    let result = CalculationResult::restore(
        row.get("x")?,
        row.get("y")?,
        row.get("r")?,
        hit,
        execution_time_nanos,
        timestamp,
    )
    .map_err(|err| RepoError::InvalidData(err.to_string()))?;
    Ok(result)
}
