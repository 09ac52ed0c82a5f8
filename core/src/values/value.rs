use core::fmt;

use ecow::{EcoString, EcoVec};
use static_assertions::assert_impl_all;

use crate::errors::EvalError;

/// An immutable numeric or string payload.
///
/// Numeric payloads are never empty. A single-element payload is a scalar;
/// longer payloads are vectors that broadcast element-wise against scalars.
///
/// NaN-ness is decided once, when the value is built: a string is always NaN,
/// and a numeric payload is NaN only if every element is an IEEE NaN.
#[derive(Clone, PartialEq)]
pub struct Value {
    payload: Payload,
    nan: bool,
}

#[derive(Clone, PartialEq)]
enum Payload {
    Numbers(EcoVec<f64>),
    Text(EcoString),
}

// Values cross threads freely: nothing inside is ever mutated.
assert_impl_all!(Value: Send, Sync);

impl Value {
    // ============================================================================
    // Construction
    // ============================================================================

    /// Create a scalar value.
    pub fn scalar(value: f64) -> Self {
        let mut numbers = EcoVec::with_capacity(1);
        numbers.push(value);
        Self::from_numbers(numbers)
    }

    /// Create a numeric value from a sequence of doubles.
    ///
    /// Fails with [`EvalError::InvalidValue`] if the sequence is empty.
    pub fn vector<I>(values: I) -> Result<Self, EvalError>
    where
        I: IntoIterator<Item = f64>,
    {
        let numbers: EcoVec<f64> = values.into_iter().collect();
        if numbers.is_empty() {
            return Err(EvalError::InvalidValue);
        }
        Ok(Self::from_numbers(numbers))
    }

    /// Create an opaque string value. Strings are always NaN.
    pub fn text(value: impl Into<EcoString>) -> Self {
        Self {
            payload: Payload::Text(value.into()),
            nan: true,
        }
    }

    /// The scalar NaN value.
    pub fn nan() -> Self {
        Self::scalar(f64::NAN)
    }

    /// Callers guarantee `numbers` is non-empty.
    pub(crate) fn from_numbers(numbers: EcoVec<f64>) -> Self {
        debug_assert!(!numbers.is_empty(), "numeric payload must not be empty");
        let nan = numbers.iter().all(|n| n.is_nan());
        Self {
            payload: Payload::Numbers(numbers),
            nan,
        }
    }

    // ============================================================================
    // Inspection
    // ============================================================================

    /// The numeric payload.
    ///
    /// Fails with [`EvalError::NotNumeric`] for string values; check
    /// [`Value::is_nan`] or [`Value::is_text`] first.
    pub fn values(&self) -> Result<&[f64], EvalError> {
        match &self.payload {
            Payload::Numbers(numbers) => Ok(numbers.as_slice()),
            Payload::Text(_) => Err(EvalError::NotNumeric),
        }
    }

    /// Collapse a single-element numeric value to a scalar.
    pub fn double_value(&self) -> Result<f64, EvalError> {
        match self.values()? {
            [value] => Ok(*value),
            numbers => Err(EvalError::IncompatibleShape { len: numbers.len() }),
        }
    }

    /// The string payload.
    pub fn as_str(&self) -> Result<&str, EvalError> {
        match &self.payload {
            Payload::Text(text) => Ok(text.as_str()),
            Payload::Numbers(_) => Err(EvalError::NotText),
        }
    }

    /// True for strings, and for numeric values whose every element is NaN.
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.nan
    }

    pub fn is_text(&self) -> bool {
        matches!(self.payload, Payload::Text(_))
    }

    /// Number of numeric elements. A string counts as one element.
    pub fn len(&self) -> usize {
        match &self.payload {
            Payload::Numbers(numbers) => numbers.len(),
            Payload::Text(_) => 1,
        }
    }

    /// True for single-element numeric values.
    pub fn is_scalar(&self) -> bool {
        matches!(&self.payload, Payload::Numbers(numbers) if numbers.len() == 1)
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::scalar(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::scalar(f64::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::text(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::text(value)
    }
}

impl TryFrom<Vec<f64>> for Value {
    type Error = EvalError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Value::vector(values)
    }
}

impl TryFrom<&[f64]> for Value {
    type Error = EvalError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        Value::vector(values.iter().copied())
    }
}

// ============================================================================
// Formatting
// ============================================================================

fn format_float(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        write!(f, "nan")
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            write!(f, "inf")
        } else {
            write!(f, "-inf")
        }
    } else {
        let s = value.to_string();
        if s.contains('.') || s.contains('e') || s.contains('E') {
            write!(f, "{}", s)
        } else {
            write!(f, "{}.", s)
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.payload {
            Payload::Text(text) => write!(f, "{:?}", text.as_str()),
            Payload::Numbers(numbers) => match numbers.as_slice() {
                [single] => format_float(f, *single),
                many => {
                    write!(f, "[")?;
                    for (i, value) in many.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        format_float(f, *value)?;
                    }
                    write!(f, "]")
                }
            },
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value({})", self)
    }
}
