use areacheck_core::{
    validate, validate_canvas, validate_form, validate_r, PointField, PointInput,
    PointValidationError, SubmissionMode, R_OPTIONS, X_OPTIONS,
};

#[test]
fn form_rejects_x_outside_discrete_options() {
    let err = validate_form(Some(2.5), Some(0.0), Some(3.0)).unwrap_err();
    assert!(matches!(
        err,
        PointValidationError::InvalidDomain {
            field: PointField::X,
            ..
        }
    ));
    assert_eq!(
        err.to_string(),
        "For form submissions, X must be one of the selected values: -3 to 5."
    );
}

#[test]
fn form_rejects_y_outside_range() {
    let err = validate_form(Some(2.0), Some(10.0), Some(3.0)).unwrap_err();
    assert_eq!(
        err,
        PointValidationError::InvalidRange {
            field: PointField::Y,
            mode: SubmissionMode::Form,
            value: 10.0,
        }
    );
    assert_eq!(
        err.to_string(),
        "For form submissions, Y must be between -3 and 5."
    );
}

#[test]
fn form_accepts_valid_triple() {
    let point = validate_form(Some(2.0), Some(2.0), Some(3.0)).unwrap();
    assert_eq!((point.x(), point.y(), point.r()), (2.0, 2.0, 3.0));
}

#[test]
fn form_accepts_y_bounds_inclusive() {
    assert!(validate_form(Some(0.0), Some(-3.0), Some(1.0)).is_ok());
    assert!(validate_form(Some(0.0), Some(5.0), Some(1.0)).is_ok());
    assert!(validate_form(Some(0.0), Some(-3.0001), Some(1.0)).is_err());
}

#[test]
fn form_accepts_every_x_option() {
    for x in X_OPTIONS {
        assert!(validate_form(Some(x), Some(0.0), Some(1.0)).is_ok(), "x={x}");
    }
}

#[test]
fn canvas_rejects_x_outside_bounds() {
    let err = validate_canvas(Some(-6.0), Some(0.0), Some(1.0)).unwrap_err();
    assert_eq!(
        err,
        PointValidationError::InvalidRange {
            field: PointField::X,
            mode: SubmissionMode::Canvas,
            value: -6.0,
        }
    );
    assert_eq!(err.to_string(), "For canvas clicks, X must be between -5 and 5.");
}

#[test]
fn canvas_rejects_y_outside_bounds() {
    let err = validate_canvas(Some(0.0), Some(5.5), Some(1.0)).unwrap_err();
    assert_eq!(err.to_string(), "For canvas clicks, Y must be between -5 and 5.");
}

#[test]
fn canvas_accepts_continuous_x_that_form_rejects() {
    assert!(validate_canvas(Some(3.0), Some(3.0), Some(2.0)).is_ok());
    assert!(validate_form(Some(3.0), Some(3.0), Some(2.0)).is_ok());

    assert!(validate_canvas(Some(2.5), Some(0.0), Some(2.0)).is_ok());
    assert!(validate_form(Some(2.5), Some(0.0), Some(2.0)).is_err());
}

#[test]
fn canvas_accepts_y_that_form_rejects() {
    let input = PointInput::from_values(1.0, -4.0, 2.0);
    assert!(validate(SubmissionMode::Canvas, &input).is_ok());
    assert!(validate(SubmissionMode::Form, &input).is_err());
}

#[test]
fn r_must_be_exact_member() {
    let err = validate_r(Some(2.5)).unwrap_err();
    assert!(matches!(
        err,
        PointValidationError::InvalidDomain {
            field: PointField::R,
            ..
        }
    ));
    assert_eq!(
        err.to_string(),
        "R must be one of the allowed whole numbers: 1, 2, 3, 4, 5."
    );
    assert_eq!(validate_r(Some(3.0)), Ok(3.0));
    for r in R_OPTIONS {
        assert!(validate_r(Some(r)).is_ok());
    }
    assert!(validate_r(Some(0.0)).is_err());
}

#[test]
fn r_rule_applies_in_both_modes() {
    assert!(validate_form(Some(1.0), Some(1.0), Some(6.0)).is_err());
    assert!(validate_canvas(Some(1.0), Some(1.0), Some(6.0)).is_err());
}

#[test]
fn absent_fields_are_missing_values() {
    let err = validate(SubmissionMode::Form, &PointInput::new(None, Some(1.0), Some(1.0)))
        .unwrap_err();
    assert_eq!(err, PointValidationError::MissingValue { field: PointField::X });

    let err = validate(SubmissionMode::Canvas, &PointInput::new(Some(1.0), None, Some(1.0)))
        .unwrap_err();
    assert_eq!(err, PointValidationError::MissingValue { field: PointField::Y });
    assert_eq!(err.to_string(), "Y is required.");
}

#[test]
fn form_x_membership_is_exact() {
    let err = validate(SubmissionMode::Form, &PointInput::from_values(-0.0, 1.0, 2.0)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "For form submissions, X must be one of the selected values: -3 to 5."
    );
    assert!(validate(SubmissionMode::Form, &PointInput::from_values(0.0, 1.0, 2.0)).is_ok());
}
