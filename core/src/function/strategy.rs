//! Arity strategies and the broadcasting driver.
//!
//! Every strategy evaluates its arguments strictly left to right and stops at
//! the first argument whose value is NaN, returning that value unchanged.
//! Binary and n-ary functions then broadcast: length-1 arguments are repeated
//! to the common vector length and the scalar formula runs once per output
//! element.

use ecow::EcoVec;
use smallvec::{SmallVec, smallvec};
use tracing::{debug, trace};

use super::{Arity, Function};
use crate::{errors::EvalError, expression::Expression, values::Value};

/// Most calls have at most a handful of arguments.
type Args = SmallVec<[Value; 4]>;

enum Evaluated {
    /// Every argument evaluated to a non-NaN value.
    Values(Args),
    /// An argument evaluated to NaN; later arguments were not evaluated.
    Poisoned(Value),
}

fn evaluate_args(function: &str, args: &[Box<dyn Expression>]) -> Result<Evaluated, EvalError> {
    let mut values = Args::with_capacity(args.len());
    for (position, arg) in args.iter().enumerate() {
        let value = arg.evaluate()?;
        if value.is_nan() {
            trace!(function, position, "NaN argument short-circuits call");
            return Ok(Evaluated::Poisoned(value));
        }
        values.push(value);
    }
    Ok(Evaluated::Values(values))
}

/// Common output length of a set of argument columns.
///
/// Length-1 columns fit any length. All other columns must agree.
fn broadcast_len(columns: &[&[f64]]) -> Result<usize, EvalError> {
    let mut len = 1;
    for column in columns {
        let n = column.len();
        if n == 1 {
            continue;
        }
        if len == 1 {
            len = n;
        } else if len != n {
            debug!(expected = len, found = n, "broadcast shape mismatch");
            return Err(EvalError::ShapeMismatch {
                expected: len,
                found: n,
            });
        }
    }
    Ok(len)
}

/// Apply `op` element-wise across `args`, broadcasting length-1 arguments.
///
/// For every output index `i`, `op` receives element `i` of each vector
/// argument and element 0 of each scalar argument, in argument order. With no
/// arguments `op` runs once on an empty slice.
///
/// Individual NaN elements are passed through to `op` like any other number;
/// only whole-argument NaN is handled (by the callers, before broadcasting).
///
/// Fails with [`EvalError::ShapeMismatch`] if two arguments are longer than
/// one and differ in length, and with [`EvalError::NotNumeric`] on strings.
pub fn broadcast<F>(args: &[Value], mut op: F) -> Result<Value, EvalError>
where
    F: FnMut(&[f64]) -> f64,
{
    let columns = args
        .iter()
        .map(Value::values)
        .collect::<Result<SmallVec<[&[f64]; 4]>, _>>()?;
    let len = broadcast_len(&columns)?;

    let mut scratch: SmallVec<[f64; 4]> = smallvec![0.0; columns.len()];
    let mut result = EcoVec::with_capacity(len);
    for i in 0..len {
        for (slot, column) in scratch.iter_mut().zip(&columns) {
            *slot = if column.len() == 1 { column[0] } else { column[i] };
        }
        result.push(op(&scratch));
    }
    Ok(Value::from_numbers(result))
}

// ============================================================================
// Unary
// ============================================================================

/// A one-argument function applied element-wise.
#[derive(Debug, Clone, Copy)]
pub struct Unary {
    name: &'static str,
    op: fn(f64) -> f64,
    natural: bool,
}

impl Unary {
    pub const fn new(name: &'static str, op: fn(f64) -> f64) -> Self {
        Self {
            name,
            op,
            natural: true,
        }
    }

    /// A unary function whose result may differ between calls with the same
    /// argument. Calls to it are never folded into constants.
    pub const fn nondeterministic(name: &'static str, op: fn(f64) -> f64) -> Self {
        Self {
            name,
            op,
            natural: false,
        }
    }

    /// Apply the formula to an already evaluated argument.
    ///
    /// A NaN argument is returned unchanged without running the formula.
    pub fn apply(&self, value: Value) -> Result<Value, EvalError> {
        if value.is_nan() {
            trace!(function = self.name, "NaN argument short-circuits call");
            return Ok(value);
        }
        let result = value.values()?.iter().map(|&a| (self.op)(a)).collect();
        Ok(Value::from_numbers(result))
    }
}

impl Function for Unary {
    fn name(&self) -> &str {
        self.name
    }

    fn arity(&self) -> Arity {
        Arity::Exactly(1)
    }

    fn is_natural(&self) -> bool {
        self.natural
    }

    fn eval(&self, args: &[Box<dyn Expression>]) -> Result<Value, EvalError> {
        self.arity().check(self.name, args.len())?;
        self.apply(args[0].evaluate()?)
    }
}

// ============================================================================
// Binary
// ============================================================================

/// A two-argument function, broadcast element-wise.
#[derive(Debug, Clone, Copy)]
pub struct Binary {
    name: &'static str,
    op: fn(f64, f64) -> f64,
}

impl Binary {
    pub const fn new(name: &'static str, op: fn(f64, f64) -> f64) -> Self {
        Self { name, op }
    }

    /// Apply the formula to already evaluated arguments.
    pub fn apply(&self, a: &Value, b: &Value) -> Result<Value, EvalError> {
        for value in [a, b] {
            if value.is_nan() {
                return Ok(value.clone());
            }
        }
        broadcast(&[a.clone(), b.clone()], |xs| (self.op)(xs[0], xs[1]))
    }
}

impl Function for Binary {
    fn name(&self) -> &str {
        self.name
    }

    fn arity(&self) -> Arity {
        Arity::Exactly(2)
    }

    fn eval(&self, args: &[Box<dyn Expression>]) -> Result<Value, EvalError> {
        self.arity().check(self.name, args.len())?;
        match evaluate_args(self.name, args)? {
            Evaluated::Poisoned(value) => Ok(value),
            Evaluated::Values(values) => broadcast(&values, |xs| (self.op)(xs[0], xs[1])),
        }
    }
}

// ============================================================================
// N-ary
// ============================================================================

/// A function of any number of arguments, broadcast element-wise.
///
/// The formula sees one scalar per argument for each output element.
#[derive(Debug, Clone, Copy)]
pub struct Nary {
    name: &'static str,
    op: fn(&[f64]) -> f64,
}

impl Nary {
    pub const fn new(name: &'static str, op: fn(&[f64]) -> f64) -> Self {
        Self { name, op }
    }

    /// Apply the formula to already evaluated arguments.
    ///
    /// The first NaN argument is returned unchanged.
    pub fn apply(&self, values: &[Value]) -> Result<Value, EvalError> {
        if let Some(poisoned) = values.iter().find(|value| value.is_nan()) {
            return Ok(poisoned.clone());
        }
        broadcast(values, self.op)
    }
}

impl Function for Nary {
    fn name(&self) -> &str {
        self.name
    }

    fn arity(&self) -> Arity {
        Arity::Variadic
    }

    fn eval(&self, args: &[Box<dyn Expression>]) -> Result<Value, EvalError> {
        match evaluate_args(self.name, args)? {
            Evaluated::Poisoned(value) => Ok(value),
            Evaluated::Values(values) => broadcast(&values, self.op),
        }
    }
}
