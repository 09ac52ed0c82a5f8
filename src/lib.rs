//! Tally - numeric value model and function evaluation for embeddable
//! arithmetic expressions
//!
//! # Overview
//!
//! Tally evaluates expression trees that a host application has already
//! parsed. Every node produces a [`Value`]: a scalar, a numeric vector, or an
//! opaque string. Functions broadcast scalars against vectors element-wise and
//! propagate NaN values instead of failing, so a computation that cannot be
//! carried out meaningfully yields NaN rather than an error.
//!
//! # Quick Start
//!
//! ```
//! use tally::{Constant, Expression, Registry, Value};
//!
//! let registry = Registry::standard();
//!
//! // max([1, 5, 3], 2)
//! let call = registry
//!     .call(
//!         "max",
//!         vec![
//!             Box::new(Constant::new(Value::vector([1.0, 5.0, 3.0]).unwrap())),
//!             Box::new(Constant::new(2.0)),
//!         ],
//!     )
//!     .unwrap();
//!
//! let result = call.evaluate().unwrap();
//! assert_eq!(result.values().unwrap(), &[2.0, 5.0, 3.0]);
//! ```
//!
//! # Host Functions
//!
//! Supply a pointwise formula to one of the arity strategies and register it:
//!
//! ```
//! use tally::{Nary, Registry, RegistryOptions};
//!
//! static HYPOT: Nary = Nary::new("hypot", |xs| xs.iter().map(|x| x * x).sum::<f64>().sqrt());
//!
//! let registry = Registry::new(RegistryOptions::default(), |builder| {
//!     builder.register("hypot", &HYPOT);
//! });
//! assert!(registry.contains("hypot"));
//! ```

// Re-export public API from tally_core
pub use tally_core::api::{Registry, RegistryBuilder, RegistryOptions};

// Re-export the value model, expressions and functions
pub use tally_core::expression::{self, Call, Constant, Expression, Variable};
pub use tally_core::function::{self, Arity, Binary, Function, FunctionRef, Nary, Unary};
pub use tally_core::stdlib;
pub use tally_core::values::{self, Value};

// Re-export errors
pub use tally_core::errors::EvalError;
