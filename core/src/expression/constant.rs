use core::fmt;

use super::Expression;
use crate::{errors::EvalError, values::Value};

/// A leaf holding a fixed value.
#[derive(Debug, Clone, PartialEq)]
pub struct Constant(Value);

impl Constant {
    pub fn new(value: impl Into<Value>) -> Self {
        Self(value.into())
    }

    /// Scalar NaN placeholder, used where a parser recovers from an error and
    /// still needs a node to put in the tree.
    pub fn nan() -> Self {
        Self(Value::nan())
    }

    pub fn value(&self) -> &Value {
        &self.0
    }
}

impl Expression for Constant {
    fn evaluate(&self) -> Result<Value, EvalError> {
        Ok(self.0.clone())
    }

    fn is_constant(&self) -> bool {
        true
    }
}

impl From<Value> for Constant {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
