//! Hard evaluation errors.
//!
//! These abort the current `evaluate()` call. Conditions that merely make a
//! result meaningless are not errors: they travel as NaN values instead.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A numeric value was constructed from an empty sequence.
    #[error("a numeric value needs at least one element")]
    InvalidValue,

    /// A multi-element value was collapsed to a scalar.
    #[error("cannot convert a value of length {len} to a scalar")]
    IncompatibleShape { len: usize },

    /// Two vector arguments longer than one disagree on their length.
    #[error("cannot operate on vectors of unequal lengths ({expected} and {found})")]
    ShapeMismatch { expected: usize, found: usize },

    /// The numeric view of a string value was requested.
    #[error("expected a numeric value, found a string")]
    NotNumeric,

    /// The string view of a numeric value was requested.
    #[error("expected a string value, found a number")]
    NotText,

    /// A fixed-arity function received the wrong number of arguments.
    #[error("function '{function}' expects {expected} argument(s), found {found}")]
    ArgumentCount {
        function: String,
        expected: usize,
        found: usize,
    },

    /// No function is registered under the requested name.
    #[error("unknown function '{name}'")]
    UnknownFunction { name: String },
}
