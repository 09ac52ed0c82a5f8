//! Tally core: numeric value model and function evaluation.
//!
//! A host parses an expression into a tree of [`Expression`] nodes whose
//! leaves are [`Constant`]s or [`Variable`]s and whose inner nodes are
//! [`Call`]s to a [`Function`]. Evaluating the root yields a [`Value`]: a
//! scalar, an equal-length numeric vector, or an opaque string.

pub mod api;
pub mod errors;
pub mod expression;
pub mod function;
pub mod stdlib;
pub mod values;

pub use api::{Registry, RegistryBuilder, RegistryOptions};
pub use errors::EvalError;
pub use expression::{Call, Constant, Expression, Variable};
pub use function::{Arity, Binary, Function, FunctionRef, Nary, Unary};
pub use values::Value;
