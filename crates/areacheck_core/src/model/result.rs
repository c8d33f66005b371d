//! Calculation result record.
//!
//! # Responsibility
//! - Define the immutable record produced by one successful check.
//! - Provide display helpers used by history views.
//!
//! # Invariants
//! - Fields are private; a record is never mutated after construction.
//! - `r` is a member of `R_OPTIONS` and coordinates are finite.
//! - `timestamp` is local wall-clock time without zone.

use crate::model::point::{is_member, ValidatedPoint, R_OPTIONS};
use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

const TIMESTAMP_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const CLOCK_DISPLAY_FORMAT: &str = "%H:%M:%S %d.%m.%Y";

/// Integrity error for a result record that did not come from a valid check.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultValidationError {
    /// Stored radius is outside `R_OPTIONS`.
    RadiusNotAllowed(f64),
    /// A coordinate is NaN or infinite.
    NonFiniteCoordinate { x: f64, y: f64 },
}

impl Display for ResultValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RadiusNotAllowed(r) => write!(f, "result radius {r} is not an allowed R value"),
            Self::NonFiniteCoordinate { x, y } => {
                write!(f, "result coordinates ({x}, {y}) must be finite")
            }
        }
    }
}

impl Error for ResultValidationError {}

/// One classified point with timing metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    x: f64,
    y: f64,
    r: f64,
    hit: bool,
    /// Hit-test duration in nanoseconds.
    execution_time_nanos: u64,
    /// Serialized as ISO-8601 text.
    timestamp: NaiveDateTime,
}

impl CalculationResult {
    /// Builds a record for a freshly checked point, stamped with local now.
    pub fn from_check(point: ValidatedPoint, hit: bool, execution_time: Duration) -> Self {
        Self {
            x: point.x(),
            y: point.y(),
            r: point.r(),
            hit,
            execution_time_nanos: u64::try_from(execution_time.as_nanos()).unwrap_or(u64::MAX),
            timestamp: Local::now().naive_local(),
        }
    }

    /// Rebuilds a stored record.
    ///
    /// # Errors
    /// - Returns an error when the record violates result invariants.
    pub fn restore(
        x: f64,
        y: f64,
        r: f64,
        hit: bool,
        execution_time_nanos: u64,
        timestamp: NaiveDateTime,
    ) -> Result<Self, ResultValidationError> {
        let result = Self {
            x,
            y,
            r,
            hit,
            execution_time_nanos,
            timestamp,
        };
        result.validate()?;
        Ok(result)
    }

    /// Checks record invariants.
    pub fn validate(&self) -> Result<(), ResultValidationError> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ResultValidationError::NonFiniteCoordinate {
                x: self.x,
                y: self.y,
            });
        }
        if !is_member(&R_OPTIONS, self.r) {
            return Err(ResultValidationError::RadiusNotAllowed(self.r));
        }
        Ok(())
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn is_hit(&self) -> bool {
        self.hit
    }

    pub fn execution_time_nanos(&self) -> u64 {
        self.execution_time_nanos
    }

    pub fn execution_time(&self) -> Duration {
        Duration::from_nanos(self.execution_time_nanos)
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// `"Hit"` or `"Miss"`.
    pub fn hit_status(&self) -> &'static str {
        if self.hit {
            "Hit"
        } else {
            "Miss"
        }
    }

    /// Timestamp as `yyyy-MM-dd HH:mm:ss`.
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_DISPLAY_FORMAT).to_string()
    }

    /// Execution time in milliseconds with six decimals, e.g. `0.001250 ms`.
    pub fn formatted_execution_time(&self) -> String {
        format!("{:.6} ms", self.execution_time_nanos as f64 / 1_000_000.0)
    }
}

/// Current local time as `HH:mm:ss dd.MM.yyyy` for the start page clock.
pub fn current_clock_text() -> String {
    format_clock(Local::now().naive_local())
}

fn format_clock(now: NaiveDateTime) -> String {
    now.format(CLOCK_DISPLAY_FORMAT).to_string()
}
