//! Public API for looking up functions by name.
//!
//! A [`Registry`] maps names to shared [`Function`](crate::function::Function)
//! handles. It is built once, read concurrently, and never mutated.
//!
//! # Example
//!
//! ```
//! use tally_core::api::{Registry, RegistryOptions};
//! use tally_core::expression::{Constant, Expression};
//! use tally_core::function::Unary;
//!
//! static TRIPLE: Unary = Unary::new("triple", |a| a * 3.0);
//!
//! let registry = Registry::new(RegistryOptions::default(), |builder| {
//!     builder.register("triple", &TRIPLE);
//! });
//!
//! let call = registry.call("triple", vec![Box::new(Constant::new(2.0))]).unwrap();
//! assert_eq!(call.evaluate().unwrap().double_value().unwrap(), 6.0);
//! ```

pub mod options;
pub mod registry;

pub use options::RegistryOptions;
pub use registry::{Registry, RegistryBuilder};
