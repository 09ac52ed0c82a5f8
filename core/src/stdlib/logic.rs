//! Comparisons and logical connectives.
//!
//! Truth is encoded as `1.0` and falsehood as `0.0`. Inputs are true only if
//! they equal `1.0` exactly; any other number (including `2.0`) is false.

use crate::function::{Binary, Nary};

/// Two numbers closer than this are equal for `lte`, `gte` and `eq`.
pub const EPSILON: f64 = 1e-10;

fn truth(b: bool) -> f64 {
    if b { 1.0 } else { 0.0 }
}

pub static LT: Binary = Binary::new("lt", |a, b| truth(a < b));
pub static LTE: Binary = Binary::new("lte", |a, b| truth(a < b || (a - b).abs() < EPSILON));
pub static GT: Binary = Binary::new("gt", |a, b| truth(a > b));
pub static GTE: Binary = Binary::new("gte", |a, b| truth(a > b || (a - b).abs() < EPSILON));
pub static EQ: Binary = Binary::new("eq", |a, b| truth((a - b).abs() < EPSILON));
/// True when the difference exceeds [`EPSILON`]. At a difference of exactly
/// `EPSILON` both `eq` and `neq` are false.
pub static NEQ: Binary = Binary::new("neq", |a, b| truth((a - b).abs() > EPSILON));

/// True iff every argument is exactly `1.0`. True with no arguments.
pub static AND: Nary = Nary::new("and", |xs| truth(xs.iter().all(|&x| x == 1.0)));

/// True iff some argument is exactly `1.0`. False with no arguments.
pub static OR: Nary = Nary::new("or", |xs| truth(xs.iter().any(|&x| x == 1.0)));

#[cfg(test)]
#[path = "logic_test.rs"]
mod logic_test;
