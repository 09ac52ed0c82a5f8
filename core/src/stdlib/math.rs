//! Pointwise math functions.
//!
//! Unary: sin, sinh, cos, cosh, tan, tanh, asin, acos, atan, deg, rad, abs,
//!        round, ceil, floor, exp, ln, log, sqrt, sign, rnd
//! Binary: atan2, min, max, pow, mod, subtract, divide

use crate::function::{Binary, Unary};

// ============================================================================
// Trigonometry
// ============================================================================

pub static SIN: Unary = Unary::new("sin", f64::sin);
pub static SINH: Unary = Unary::new("sinh", f64::sinh);
pub static COS: Unary = Unary::new("cos", f64::cos);
pub static COSH: Unary = Unary::new("cosh", f64::cosh);
pub static TAN: Unary = Unary::new("tan", f64::tan);
pub static TANH: Unary = Unary::new("tanh", f64::tanh);
pub static ASIN: Unary = Unary::new("asin", f64::asin);
pub static ACOS: Unary = Unary::new("acos", f64::acos);
pub static ATAN: Unary = Unary::new("atan", f64::atan);
pub static ATAN2: Binary = Binary::new("atan2", f64::atan2);

/// Radians to degrees.
pub static DEG: Unary = Unary::new("deg", f64::to_degrees);
/// Degrees to radians.
pub static RAD: Unary = Unary::new("rad", f64::to_radians);

// ============================================================================
// Rounding and sign
// ============================================================================

pub static ABS: Unary = Unary::new("abs", f64::abs);
/// Round half up: `round(-2.5) == -2`.
pub static ROUND: Unary = Unary::new("round", round_half_up);
pub static CEIL: Unary = Unary::new("ceil", f64::ceil);
pub static FLOOR: Unary = Unary::new("floor", f64::floor);
/// -1, 0 or 1; zero keeps its sign and NaN stays NaN.
pub static SIGN: Unary = Unary::new("sign", sign);

/// `a - floor(a)` is exact, unlike `a + 0.5`.
fn round_half_up(a: f64) -> f64 {
    let floor = a.floor();
    if a - floor >= 0.5 { floor + 1.0 } else { floor }
}

fn sign(a: f64) -> f64 {
    if a == 0.0 || a.is_nan() { a } else { a.signum() }
}

// ============================================================================
// Exponentiation and logarithms
// ============================================================================

pub static SQRT: Unary = Unary::new("sqrt", f64::sqrt);
pub static EXP: Unary = Unary::new("exp", f64::exp);
/// Natural logarithm.
pub static LN: Unary = Unary::new("ln", f64::ln);
/// Base-10 logarithm.
pub static LOG: Unary = Unary::new("log", f64::log10);
pub static POW: Binary = Binary::new("pow", f64::powf);

// ============================================================================
// Arithmetic
// ============================================================================

/// NaN if either operand is NaN.
pub static MIN: Binary = Binary::new("min", min);
/// NaN if either operand is NaN.
pub static MAX: Binary = Binary::new("max", max);
/// Truncated remainder; the result has the sign of the dividend.
pub static MODULO: Binary = Binary::new("mod", |a, b| a % b);
pub static SUBTRACT: Binary = Binary::new("subtract", |a, b| a - b);
pub static DIVIDE: Binary = Binary::new("divide", |a, b| a / b);

fn min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() { f64::NAN } else { a.min(b) }
}

fn max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() { f64::NAN } else { a.max(b) }
}

// ============================================================================
// Randomness
// ============================================================================

/// A uniform sample from `[0, 1)` scaled by the argument.
pub static RND: Unary = Unary::nondeterministic("rnd", |a| rand::random::<f64>() * a);

#[cfg(test)]
#[path = "math_test.rs"]
mod math_test;
