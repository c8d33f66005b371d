//! Point input model and submission validation.
//!
//! # Responsibility
//! - Define raw, session and validated shapes of the `(x, y, r)` triple.
//! - Reject out-of-domain input before it reaches the hit-test.
//!
//! # Invariants
//! - `ValidatedPoint` can only be obtained through `validate*` functions.
//! - Form mode uses discrete X and bounded continuous Y.
//! - Canvas mode uses continuous X and Y over the graph bounds.
//! - R is always one of `R_OPTIONS`, in both modes.
//! - Checks run in `x`, `y`, `r` order and the first failure wins.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::ops::RangeInclusive;

/// Allowed radius values, shared by both submission modes.
pub const R_OPTIONS: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];

/// Allowed X values for form submissions.
pub const X_OPTIONS: [f64; 9] = [-3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0, 4.0, 5.0];

/// Radius preselected for a fresh session.
pub const DEFAULT_R: f64 = 3.0;

const FORM_Y_RANGE: RangeInclusive<f64> = -3.0..=5.0;
const CANVAS_X_RANGE: RangeInclusive<f64> = -5.0..=5.0;
const CANVAS_Y_RANGE: RangeInclusive<f64> = -5.0..=5.0;

/// Source of a submission; selects the rule set for `x` and `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionMode {
    /// Dropdown/button form with discrete X.
    Form,
    /// Click on the rendered graph with continuous X.
    Canvas,
}

/// Field of the point triple, used for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointField {
    X,
    Y,
    R,
}

impl PointField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::Y => "Y",
            Self::R => "R",
        }
    }
}

/// Validation failure for one field of a submitted point.
///
/// `Display` renders the message shown to the end user unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum PointValidationError {
    /// Required field is absent.
    MissingValue { field: PointField },
    /// Value is present but not a member of the required discrete set.
    InvalidDomain {
        field: PointField,
        mode: Option<SubmissionMode>,
        value: f64,
    },
    /// Value is present but outside the required continuous bound.
    InvalidRange {
        field: PointField,
        mode: SubmissionMode,
        value: f64,
    },
}

impl PointValidationError {
    /// Field that failed validation.
    pub fn field(&self) -> PointField {
        match self {
            Self::MissingValue { field }
            | Self::InvalidDomain { field, .. }
            | Self::InvalidRange { field, .. } => *field,
        }
    }

    /// Stable short code for log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingValue { .. } => "missing_value",
            Self::InvalidDomain { .. } => "invalid_domain",
            Self::InvalidRange { .. } => "invalid_range",
        }
    }
}

impl Display for PointValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingValue { field } => write!(f, "{} is required.", field.as_str()),
            Self::InvalidDomain {
                field: PointField::X,
                ..
            } => write!(
                f,
                "For form submissions, X must be one of the selected values: -3 to 5."
            ),
            Self::InvalidDomain {
                field: PointField::R,
                ..
            } => write!(
                f,
                "R must be one of the allowed whole numbers: 1, 2, 3, 4, 5."
            ),
            Self::InvalidDomain { field, value, .. } => {
                write!(f, "{} value {value} is not allowed.", field.as_str())
            }
            Self::InvalidRange {
                field,
                mode: SubmissionMode::Form,
                ..
            } => write!(
                f,
                "For form submissions, {} must be between -3 and 5.",
                field.as_str()
            ),
            Self::InvalidRange {
                field,
                mode: SubmissionMode::Canvas,
                ..
            } => write!(
                f,
                "For canvas clicks, {} must be between -5 and 5.",
                field.as_str()
            ),
        }
    }
}

impl Error for PointValidationError {}

/// Raw submitted values; `None` marks an absent field.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointInput {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub r: Option<f64>,
}

impl PointInput {
    pub fn new(x: Option<f64>, y: Option<f64>, r: Option<f64>) -> Self {
        Self { x, y, r }
    }

    /// Shorthand for a fully populated input.
    pub fn from_values(x: f64, y: f64, r: f64) -> Self {
        Self::new(Some(x), Some(y), Some(r))
    }
}

/// Point triple that passed validation for some submission mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedPoint {
    x: f64,
    y: f64,
    r: f64,
}

impl ValidatedPoint {
    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn r(&self) -> f64 {
        self.r
    }
}

/// Per-session holder of the user's current selection.
///
/// Replaces ambient session state: the caller owns one value per session and
/// passes it explicitly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionInput {
    x: Option<f64>,
    y: Option<f64>,
    r: Option<f64>,
}

impl Default for SessionInput {
    fn default() -> Self {
        Self {
            x: None,
            y: None,
            r: Some(DEFAULT_R),
        }
    }
}

impl SessionInput {
    pub fn x(&self) -> Option<f64> {
        self.x
    }

    pub fn y(&self) -> Option<f64> {
        self.y
    }

    pub fn r(&self) -> Option<f64> {
        self.r
    }

    pub fn set_x(&mut self, x: Option<f64>) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: Option<f64>) {
        self.y = y;
    }

    pub fn set_r(&mut self, r: Option<f64>) {
        self.r = r;
    }

    /// Snapshot of the current selection as a request input.
    pub fn to_input(&self) -> PointInput {
        PointInput::new(self.x, self.y, self.r)
    }

    /// Whether the selected R is one of the discrete options.
    pub fn is_r_valid(&self) -> bool {
        validate_r(self.r).is_ok()
    }
}

/// Validates `input` with the rule set selected by `mode`.
pub fn validate(
    mode: SubmissionMode,
    input: &PointInput,
) -> Result<ValidatedPoint, PointValidationError> {
    match mode {
        SubmissionMode::Form => validate_form(input.x, input.y, input.r),
        SubmissionMode::Canvas => validate_canvas(input.x, input.y, input.r),
    }
}

/// Validates R against `R_OPTIONS`.
///
/// # Errors
/// - `MissingValue` when `r` is absent.
/// - `InvalidDomain` when `r` is not an exact member of `R_OPTIONS`.
pub fn validate_r(r: Option<f64>) -> Result<f64, PointValidationError> {
    let r = require(PointField::R, r)?;
    if !is_member(&R_OPTIONS, r) {
        return Err(PointValidationError::InvalidDomain {
            field: PointField::R,
            mode: None,
            value: r,
        });
    }
    Ok(r)
}

/// Validates a form submission: discrete X, Y in `[-3, 5]`, discrete R.
pub fn validate_form(
    x: Option<f64>,
    y: Option<f64>,
    r: Option<f64>,
) -> Result<ValidatedPoint, PointValidationError> {
    let x = require(PointField::X, x)?;
    if !is_member(&X_OPTIONS, x) {
        return Err(PointValidationError::InvalidDomain {
            field: PointField::X,
            mode: Some(SubmissionMode::Form),
            value: x,
        });
    }

    let y = require_in_range(PointField::Y, y, SubmissionMode::Form, &FORM_Y_RANGE)?;
    let r = validate_r(r)?;
    Ok(ValidatedPoint { x, y, r })
}

/// Validates a canvas click: X and Y in `[-5, 5]`, discrete R.
pub fn validate_canvas(
    x: Option<f64>,
    y: Option<f64>,
    r: Option<f64>,
) -> Result<ValidatedPoint, PointValidationError> {
    let x = require_in_range(PointField::X, x, SubmissionMode::Canvas, &CANVAS_X_RANGE)?;
    let y = require_in_range(PointField::Y, y, SubmissionMode::Canvas, &CANVAS_Y_RANGE)?;
    let r = validate_r(r)?;
    Ok(ValidatedPoint { x, y, r })
}

fn require(field: PointField, value: Option<f64>) -> Result<f64, PointValidationError> {
    value.ok_or(PointValidationError::MissingValue { field })
}

fn require_in_range(
    field: PointField,
    value: Option<f64>,
    mode: SubmissionMode,
    range: &RangeInclusive<f64>,
) -> Result<f64, PointValidationError> {
    let value = require(field, value)?;
    // NaN fails `contains`, so it is reported as out of range.
    if !range.contains(&value) {
        return Err(PointValidationError::InvalidRange { field, mode, value });
    }
    Ok(value)
}

/// Exact membership: `-0.0` is not a member of a set holding `0.0`.
pub(crate) fn is_member(options: &[f64], value: f64) -> bool {
    options.iter().any(|option| option.to_bits() == value.to_bits())
}

#[cfg(test)]
mod tests {
    use super::{
        validate, validate_canvas, validate_form, validate_r, PointField, PointInput,
        PointValidationError, SessionInput, SubmissionMode, DEFAULT_R,
    };

    #[test]
    fn form_rejects_negative_zero_x() {
        let err = validate_form(Some(-0.0), Some(0.0), Some(1.0)).unwrap_err();
        assert!(matches!(
            err,
            PointValidationError::InvalidDomain {
                field: PointField::X,
                ..
            }
        ));
        assert!(validate_form(Some(0.0), Some(0.0), Some(1.0)).is_ok());
    }

    #[test]
    fn canvas_accepts_negative_zero_x() {
        assert!(validate_canvas(Some(-0.0), Some(0.0), Some(1.0)).is_ok());
    }

    #[test]
    fn r_rejects_negative_zero() {
        assert!(validate_r(Some(-0.0)).is_err());
    }

    #[test]
    fn range_checks_reject_nan() {
        let err = validate_canvas(Some(f64::NAN), Some(0.0), Some(1.0)).unwrap_err();
        assert!(matches!(
            err,
            PointValidationError::InvalidRange {
                field: PointField::X,
                ..
            }
        ));
    }

    #[test]
    fn first_failing_field_wins() {
        let err = validate_form(Some(2.5), Some(10.0), Some(9.0)).unwrap_err();
        assert_eq!(err.field(), PointField::X);
    }

    #[test]
    fn missing_r_is_reported_as_missing_value() {
        let err = validate_r(None).unwrap_err();
        assert_eq!(
            err,
            PointValidationError::MissingValue {
                field: PointField::R
            }
        );
        assert_eq!(err.to_string(), "R is required.");
        assert_eq!(err.code(), "missing_value");
    }

    #[test]
    fn validate_dispatches_on_mode() {
        let input = PointInput::from_values(2.5, 0.0, 1.0);
        assert!(validate(SubmissionMode::Form, &input).is_err());
        assert!(validate(SubmissionMode::Canvas, &input).is_ok());
    }

    #[test]
    fn session_defaults_to_r_three() {
        let mut session = SessionInput::default();
        assert_eq!(session.r(), Some(DEFAULT_R));
        assert!(session.is_r_valid());

        session.set_r(Some(2.5));
        assert!(!session.is_r_valid());

        session.set_x(Some(1.0));
        session.set_y(Some(-1.5));
        assert_eq!(
            session.to_input(),
            PointInput::new(Some(1.0), Some(-1.5), Some(2.5))
        );
    }
}
