//! Unit tests for call nodes and constant folding.

use std::sync::Arc;

use pretty_assertions::assert_eq;

use super::{Call, Expression, Variable};
use crate::{
    errors::EvalError,
    function::FunctionRef,
    stdlib::{IF, PRODUCT, RND, SIN, SUM},
    test_utils::{Probe, constant, init_test_logging, vector},
};

fn call(function: FunctionRef, args: Vec<Box<dyn Expression>>) -> Box<Call> {
    Box::new(Call::new(function, args).unwrap())
}

#[test]
fn test_call_evaluates_function() {
    let node = call(Arc::new(&SUM), vec![constant(1.0), constant(2.0)]);
    assert!(!node.is_constant());
    assert_eq!(node.evaluate().unwrap().double_value().unwrap(), 3.0);
    assert_eq!(node.args().len(), 2);
    assert_eq!(node.function().name(), "sum");
}

#[test]
fn test_call_checks_arity() {
    let result = Call::new(Arc::new(&SIN), vec![]);
    assert_eq!(
        result.err(),
        Some(EvalError::ArgumentCount {
            function: "sin".into(),
            expected: 1,
            found: 0,
        })
    );
    assert!(Call::new(Arc::new(&SUM), vec![]).is_ok());
}

#[test]
fn test_simplify_folds_natural_constant_call() {
    init_test_logging();

    let simplified = call(Arc::new(&SUM), vec![constant(1.0), constant(2.0)]).simplify();
    assert!(simplified.is_constant());
    assert_eq!(simplified.evaluate().unwrap().double_value().unwrap(), 3.0);
}

#[test]
fn test_simplify_folds_nested_calls() {
    // product(sum(1, 2), 4)
    let inner = call(Arc::new(&SUM), vec![constant(1.0), constant(2.0)]);
    let outer = call(Arc::new(&PRODUCT), vec![inner as Box<dyn Expression>, constant(4.0)]);
    let simplified = outer.simplify();
    assert!(simplified.is_constant());
    assert_eq!(simplified.evaluate().unwrap().double_value().unwrap(), 12.0);
}

#[test]
fn test_simplify_keeps_calls_with_variables() {
    let a = Variable::new("a").with_value(1);
    let node = call(Arc::new(&SUM), vec![Box::new(a.clone()) as Box<dyn Expression>, constant(2.0)]);
    let simplified = node.simplify();
    assert!(!simplified.is_constant());

    a.set(10);
    assert_eq!(simplified.evaluate().unwrap().double_value().unwrap(), 12.0);
}

#[test]
fn test_simplify_never_folds_rnd() {
    let simplified = call(Arc::new(&RND), vec![constant(1.0)]).simplify();
    assert!(!simplified.is_constant());
}

#[test]
fn test_simplify_never_folds_if_but_simplifies_arguments() {
    let condition = call(Arc::new(&SUM), vec![constant(0.5), constant(0.5)]);
    let simplified = call(
        Arc::new(&IF),
        vec![condition as Box<dyn Expression>, constant(1.0), constant(2.0)],
    )
    .simplify();
    assert!(!simplified.is_constant());
    assert_eq!(simplified.evaluate().unwrap().double_value().unwrap(), 1.0);
}

#[test]
fn test_simplify_does_not_evaluate_non_natural_arguments() {
    let probe = Probe::new(1.0);
    let simplified =
        call(Arc::new(&IF), vec![probe.boxed(), constant(1.0), constant(2.0)]).simplify();
    assert_eq!(probe.count(), 0);
    simplified.evaluate().unwrap();
    assert_eq!(probe.count(), 1);
}

#[test]
fn test_simplify_leaves_failing_call_unfolded() {
    let node = call(
        Arc::new(&SUM),
        vec![vector(&[1.0, 2.0]), vector(&[1.0, 2.0, 3.0])],
    );
    let simplified = node.simplify();
    assert!(!simplified.is_constant());
    assert!(matches!(
        simplified.evaluate(),
        Err(EvalError::ShapeMismatch { .. })
    ));
}

#[test]
fn test_simplify_folds_nan_result() {
    let simplified = call(Arc::new(&SIN), vec![constant(f64::NAN)]).simplify();
    assert!(simplified.is_constant());
    assert!(simplified.evaluate().unwrap().is_nan());
}

#[test]
fn test_debug_names_function() {
    let node = call(Arc::new(&SIN), vec![constant(1.0)]);
    let debug = format!("{:?}", node);
    assert!(debug.starts_with("Call { function: \"sin\""), "{}", debug);
}
