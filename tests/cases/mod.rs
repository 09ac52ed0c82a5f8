//! Tree-building helpers shared by the integration tests.
//!
//! They stand in for a parser: each helper builds the node a parser would
//! produce for the corresponding piece of syntax.

#![allow(dead_code)]

use tally::{Constant, Expression, Registry, Value, Variable};

pub type Node = Box<dyn Expression>;

/// A numeric literal.
pub fn num(x: f64) -> Node {
    Box::new(Constant::new(x))
}

/// A vector literal.
pub fn vector(values: &[f64]) -> Node {
    Box::new(Constant::new(Value::try_from(values).unwrap()))
}

/// A string literal.
pub fn text(s: &str) -> Node {
    Box::new(Constant::new(s))
}

/// A reference to a variable cell.
pub fn var(variable: &Variable) -> Node {
    Box::new(variable.clone())
}

/// A call to a built-in, by name.
pub fn call(name: &str, args: Vec<Node>) -> Node {
    Box::new(Registry::standard().call(name, args).unwrap())
}

pub fn add(a: Node, b: Node) -> Node {
    call("sum", vec![a, b])
}

pub fn sub(a: Node, b: Node) -> Node {
    call("subtract", vec![a, b])
}

pub fn mul(a: Node, b: Node) -> Node {
    call("product", vec![a, b])
}

pub fn div(a: Node, b: Node) -> Node {
    call("divide", vec![a, b])
}

pub fn neg(a: Node) -> Node {
    sub(num(0.0), a)
}

/// Evaluate and collapse to a scalar.
pub fn scalar(node: &Node) -> f64 {
    node.evaluate().unwrap().double_value().unwrap()
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < tally::stdlib::EPSILON,
        "expected {}, got {}",
        expected,
        actual
    );
}
