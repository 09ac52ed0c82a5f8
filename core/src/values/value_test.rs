use pretty_assertions::assert_eq;

use crate::{errors::EvalError, values::Value};

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_scalar_round_trip() {
    let value = Value::scalar(3.25);
    assert_eq!(value.double_value().unwrap(), 3.25);
    assert_eq!(value.len(), 1);
    assert!(value.is_scalar());
    assert!(!value.is_nan());
}

#[test]
fn test_vector_keeps_order() {
    let value = Value::vector([1.0, 2.0, 3.0]).unwrap();
    assert_eq!(value.values().unwrap(), &[1.0, 2.0, 3.0]);
    assert_eq!(value.len(), 3);
    assert!(!value.is_scalar());
}

#[test]
fn test_empty_vector_is_invalid() {
    let result = Value::vector(Vec::new());
    assert!(matches!(result, Err(EvalError::InvalidValue)));

    let result = Value::try_from(Vec::<f64>::new());
    assert!(matches!(result, Err(EvalError::InvalidValue)));
}

#[test]
fn test_single_element_vector_is_scalar() {
    let value = Value::vector([7.0]).unwrap();
    assert!(value.is_scalar());
    assert_eq!(value.double_value().unwrap(), 7.0);
}

#[test]
fn test_conversions() {
    assert_eq!(Value::from(2).double_value().unwrap(), 2.0);
    assert_eq!(Value::from(2.5).double_value().unwrap(), 2.5);
    assert_eq!(Value::from("bla").as_str().unwrap(), "bla");
    assert_eq!(Value::from(String::from("bla")).as_str().unwrap(), "bla");

    let slice: &[f64] = &[4.0, 5.0];
    assert_eq!(Value::try_from(slice).unwrap().values().unwrap(), &[4.0, 5.0]);
}

// ============================================================================
// Shape errors
// ============================================================================

#[test]
fn test_double_value_on_vector_fails() {
    let value = Value::vector([1.0, 2.0]).unwrap();
    assert_eq!(
        value.double_value(),
        Err(EvalError::IncompatibleShape { len: 2 })
    );
}

#[test]
fn test_numeric_view_of_text_fails() {
    let value = Value::text("abc");
    assert_eq!(value.values(), Err(EvalError::NotNumeric));
    assert_eq!(value.double_value(), Err(EvalError::NotNumeric));
}

#[test]
fn test_text_view_of_number_fails() {
    assert_eq!(Value::scalar(1.0).as_str(), Err(EvalError::NotText));
}

// ============================================================================
// NaN-ness
// ============================================================================

#[test]
fn test_nan_scalar() {
    assert!(Value::nan().is_nan());
    assert!(Value::scalar(f64::NAN).is_nan());
    assert!(!Value::scalar(0.0).is_nan());
}

#[test]
fn test_vector_is_nan_only_when_every_element_is() {
    assert!(Value::vector([f64::NAN, f64::NAN]).unwrap().is_nan());
    assert!(!Value::vector([f64::NAN, 1.0]).unwrap().is_nan());
    assert!(!Value::vector([1.0, f64::NAN]).unwrap().is_nan());
}

#[test]
fn test_text_is_always_nan() {
    assert!(Value::text("").is_nan());
    assert!(Value::text("42").is_nan());
    assert!(Value::text("42").is_text());
}

#[test]
fn test_infinity_is_not_nan() {
    assert!(!Value::scalar(f64::INFINITY).is_nan());
}

// ============================================================================
// Display
// ============================================================================

#[test]
fn test_display() {
    assert_eq!(Value::scalar(3.0).to_string(), "3.");
    assert_eq!(Value::scalar(0.5).to_string(), "0.5");
    assert_eq!(Value::nan().to_string(), "nan");
    assert_eq!(Value::scalar(f64::NEG_INFINITY).to_string(), "-inf");
    assert_eq!(
        Value::vector([1.0, 2.5, f64::INFINITY]).unwrap().to_string(),
        "[1., 2.5, inf]"
    );
    assert_eq!(Value::text("bla").to_string(), "\"bla\"");
    assert_eq!(format!("{:?}", Value::scalar(1.0)), "Value(1.)");
}
