//! Built-in functions.
//!
//! Every built-in is a stateless static shared by all call sites:
//! - [`math`]: trigonometry, rounding, logarithms, arithmetic, `rnd`
//! - [`logic`]: epsilon comparisons and `and`/`or`
//! - [`aggregate`]: `sum` and `product`
//! - [`conditional`]: `if`
//!
//! Use [`register_stdlib`] to make them available by name in a
//! [`Registry`](crate::api::Registry).

pub mod aggregate;
pub mod conditional;
pub mod logic;
pub mod math;

pub use aggregate::{PRODUCT, SUM};
pub use conditional::IF;
pub use logic::{AND, EPSILON, EQ, GT, GTE, LT, LTE, NEQ, OR};
pub use math::{
    ABS, ACOS, ASIN, ATAN, ATAN2, CEIL, COS, COSH, DEG, DIVIDE, EXP, FLOOR, LN, LOG, MAX, MIN,
    MODULO, POW, RAD, RND, ROUND, SIGN, SIN, SINH, SQRT, SUBTRACT, TAN, TANH,
};

use crate::api::{RegistryBuilder, RegistryOptions};

/// Register every built-in under its catalog name.
///
/// `rnd` is skipped unless `options.include_nondeterministic` is set.
pub fn register_stdlib(builder: &mut RegistryBuilder, options: &RegistryOptions) {
    // Math
    builder
        .register("sin", &SIN)
        .register("sinh", &SINH)
        .register("cos", &COS)
        .register("cosh", &COSH)
        .register("tan", &TAN)
        .register("tanh", &TANH)
        .register("asin", &ASIN)
        .register("acos", &ACOS)
        .register("atan", &ATAN)
        .register("atan2", &ATAN2)
        .register("deg", &DEG)
        .register("rad", &RAD)
        .register("abs", &ABS)
        .register("round", &ROUND)
        .register("ceil", &CEIL)
        .register("floor", &FLOOR)
        .register("sign", &SIGN)
        .register("sqrt", &SQRT)
        .register("exp", &EXP)
        .register("ln", &LN)
        .register("log", &LOG)
        .register("log10", &LOG)
        .register("pow", &POW)
        .register("min", &MIN)
        .register("max", &MAX)
        .register("mod", &MODULO)
        .register("subtract", &SUBTRACT)
        .register("divide", &DIVIDE);

    if options.include_nondeterministic {
        builder.register("rnd", &RND);
    }

    // Aggregates
    builder.register("sum", &SUM).register("product", &PRODUCT);

    // Logic
    builder
        .register("lt", &LT)
        .register("lte", &LTE)
        .register("gt", &GT)
        .register("gte", &GTE)
        .register("eq", &EQ)
        .register("neq", &NEQ)
        .register("and", &AND)
        .register("or", &OR)
        .register("if", &IF);
}
