//! Aggregates over all arguments of a call.

use crate::function::Nary;

/// Sum of the arguments; `0` with no arguments.
pub static SUM: Nary = Nary::new("sum", |xs| xs.iter().fold(0.0, |acc, x| acc + x));

/// Product of the arguments; `1` with no arguments.
pub static PRODUCT: Nary = Nary::new("product", |xs| xs.iter().fold(1.0, |acc, x| acc * x));
