use core::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use ecow::EcoString;

use super::Expression;
use crate::{errors::EvalError, values::Value};

/// A leaf reading the current value of a shared, mutable cell.
///
/// Cloning a `Variable` yields another handle to the same cell, so the host
/// can keep one handle and put another into the tree. Each `evaluate` reads
/// one consistent snapshot of the cell. A new cell holds `0`.
#[derive(Clone)]
pub struct Variable {
    cell: Arc<Cell>,
}

struct Cell {
    name: EcoString,
    value: RwLock<Value>,
}

impl Variable {
    pub fn new(name: impl Into<EcoString>) -> Self {
        Self {
            cell: Arc::new(Cell {
                name: name.into(),
                value: RwLock::new(Value::scalar(0.0)),
            }),
        }
    }

    /// Set the value and return the same handle.
    pub fn with_value(self, value: impl Into<Value>) -> Self {
        self.set(value);
        self
    }

    pub fn name(&self) -> &str {
        &self.cell.name
    }

    pub fn get(&self) -> Value {
        // A panic while holding the lock cannot leave a half-written Value.
        self.cell
            .value
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set(&self, value: impl Into<Value>) {
        *self
            .cell
            .value
            .write()
            .unwrap_or_else(PoisonError::into_inner) = value.into();
    }

    /// True if both handles refer to the same cell.
    pub fn same_cell(&self, other: &Variable) -> bool {
        Arc::ptr_eq(&self.cell, &other.cell)
    }
}

impl Expression for Variable {
    fn evaluate(&self) -> Result<Value, EvalError> {
        Ok(self.get())
    }
}

impl fmt::Debug for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Variable({} = {})", self.cell.name, self.get())
    }
}
