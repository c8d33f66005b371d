use areacheck_core::{validate_canvas, CalculationResult, R_OPTIONS, X_OPTIONS};
use std::time::Duration;

#[test]
fn result_serialization_uses_expected_fields() {
    let point = validate_canvas(Some(0.5), Some(-0.5), Some(1.0)).unwrap();
    let result = CalculationResult::from_check(point, true, Duration::from_micros(3));

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["x"], 0.5);
    assert_eq!(json["y"], -0.5);
    assert_eq!(json["r"], 1.0);
    assert_eq!(json["hit"], true);
    assert_eq!(json["execution_time_nanos"], 3_000);
    let timestamp = json["timestamp"].as_str().expect("timestamp is a string");
    assert!(timestamp.starts_with(&result.timestamp().format("%Y-%m-%dT%H:%M:%S").to_string()));
}

#[test]
fn from_check_keeps_elapsed_time() {
    let point = validate_canvas(Some(1.0), Some(1.0), Some(5.0)).unwrap();
    let result = CalculationResult::from_check(point, false, Duration::from_nanos(42));

    assert_eq!(result.execution_time(), Duration::from_nanos(42));
    assert_eq!(result.formatted_execution_time(), "0.000042 ms");
    assert_eq!(result.hit_status(), "Miss");
    assert!(result.validate().is_ok());
}

#[test]
fn option_sets_match_ui_choices() {
    assert_eq!(R_OPTIONS, [1.0, 2.0, 3.0, 4.0, 5.0]);
    assert_eq!(X_OPTIONS.len(), 9);
    assert_eq!(X_OPTIONS.first(), Some(&-3.0));
    assert_eq!(X_OPTIONS.last(), Some(&5.0));
}
