//! Runtime values.
//!
//! A [`Value`] is the only data type the engine computes with. It is
//! immutable once built and cheap to clone (payloads are reference counted).

mod value;

pub use value::Value;

#[cfg(test)]
mod value_test;
