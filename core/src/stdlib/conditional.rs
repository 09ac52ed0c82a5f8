//! The `if` function.
//!
//! `if(condition, then, else)` picks `then` where the condition is exactly
//! `1.0` and `else` everywhere else.
//!
//! A scalar condition selects one branch and evaluates only that branch; a NaN
//! scalar condition is returned as is and neither branch runs. A vector
//! condition evaluates both branches and selects element-wise; NaN elements in
//! the condition simply select `else`.

use ecow::EcoVec;
use tracing::trace;

use crate::{
    errors::EvalError,
    expression::Expression,
    function::{Arity, Function},
    values::Value,
};

#[derive(Debug, Clone, Copy)]
pub struct Conditional;

pub static IF: Conditional = Conditional;

impl Function for Conditional {
    fn name(&self) -> &str {
        "if"
    }

    fn arity(&self) -> Arity {
        Arity::Exactly(3)
    }

    /// Folding would freeze a choice that depends on the shape and content of
    /// the condition, so calls are never folded.
    fn is_natural(&self) -> bool {
        false
    }

    fn eval(&self, args: &[Box<dyn Expression>]) -> Result<Value, EvalError> {
        self.arity().check(self.name(), args.len())?;

        let condition = args[0].evaluate()?;
        if condition.is_text() {
            return Ok(condition);
        }

        let tests = condition.values()?;
        if let [test] = tests {
            if test.is_nan() {
                trace!("NaN condition short-circuits if");
                return Ok(condition);
            }
            return if *test == 1.0 {
                args[1].evaluate()
            } else {
                args[2].evaluate()
            };
        }

        let then_value = args[1].evaluate()?;
        let else_value = args[2].evaluate()?;
        let then_branch = branch_values(&then_value, tests.len())?;
        let else_branch = branch_values(&else_value, tests.len())?;

        let result: EcoVec<f64> = tests
            .iter()
            .enumerate()
            .map(|(i, &test)| {
                if test == 1.0 {
                    pick(then_branch, i)
                } else {
                    pick(else_branch, i)
                }
            })
            .collect();
        Ok(Value::from_numbers(result))
    }
}

/// Numeric payload of a branch, which must be a scalar or match `len`.
fn branch_values(value: &Value, len: usize) -> Result<&[f64], EvalError> {
    let values = value.values()?;
    if values.len() != 1 && values.len() != len {
        return Err(EvalError::ShapeMismatch {
            expected: len,
            found: values.len(),
        });
    }
    Ok(values)
}

#[inline]
fn pick(values: &[f64], i: usize) -> f64 {
    if values.len() == 1 { values[0] } else { values[i] }
}

#[cfg(test)]
#[path = "conditional_test.rs"]
mod conditional_test;
