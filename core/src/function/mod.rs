//! Callable functions.
//!
//! This module defines the [`Function`] trait that every call node dispatches
//! through, and the three arity strategies ([`Unary`], [`Binary`], [`Nary`])
//! that implement argument evaluation, NaN short-circuiting and broadcasting
//! once, so a concrete function only supplies a pointwise scalar formula.

mod strategy;


use core::fmt;
use std::sync::Arc;

use crate::{errors::EvalError, expression::Expression, values::Value};

pub use strategy::{Binary, Nary, Unary, broadcast};

/// Shared handle to a function. Built-ins are process-wide statics wrapped in
/// this handle; user functions are heap allocated once at registration.
pub type FunctionRef = Arc<dyn Function>;

/// Number of arguments a function accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many arguments.
    Exactly(usize),
    /// Any number of arguments, including none.
    Variadic,
}

impl Arity {
    /// True if a call with `count` arguments fits this arity.
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exactly(expected) => expected == count,
            Arity::Variadic => true,
        }
    }

    /// Fail with [`EvalError::ArgumentCount`] unless `found` arguments fit.
    pub fn check(self, function: &str, found: usize) -> Result<(), EvalError> {
        match self {
            Arity::Exactly(expected) if !self.accepts(found) => Err(EvalError::ArgumentCount {
                function: function.into(),
                expected,
                found,
            }),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exactly(n) => write!(f, "{}", n),
            Arity::Variadic => write!(f, "any"),
        }
    }
}

/// Trait for callable functions.
///
/// Implementations must be stateless: one instance is shared by every call
/// site and by every thread evaluating a tree that references it.
pub trait Function: Send + Sync {
    /// Name used in diagnostics.
    fn name(&self) -> &str;

    /// Expected argument count.
    fn arity(&self) -> Arity;

    /// Whether the function is pure and evaluates every argument
    /// unconditionally. Only calls to natural functions may be folded into
    /// constants.
    fn is_natural(&self) -> bool {
        true
    }

    /// Evaluate the function over unevaluated argument expressions.
    ///
    /// Implementations decide which arguments to evaluate and in what order.
    fn eval(&self, args: &[Box<dyn Expression>]) -> Result<Value, EvalError>;
}

impl<F: Function + ?Sized> Function for &'static F {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn arity(&self) -> Arity {
        (**self).arity()
    }

    fn is_natural(&self) -> bool {
        (**self).is_natural()
    }

    fn eval(&self, args: &[Box<dyn Expression>]) -> Result<Value, EvalError> {
        (**self).eval(args)
    }
}

impl fmt::Debug for dyn Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name(), self.arity())
    }
}
