//! Evaluable expression trees.
//!
//! A tree is built by the host (usually a parser) from three node kinds:
//! [`Constant`] leaves, [`Variable`] leaves reading a shared cell, and
//! [`Call`] nodes applying a [`Function`](crate::function::Function) to owned
//! argument expressions. Trees never share nodes.

mod call;
mod constant;
mod variable;

#[cfg(test)]
mod call_test;

use core::fmt;

pub use call::Call;
pub use constant::Constant;
pub use variable::Variable;

use crate::{errors::EvalError, values::Value};

/// Trait for nodes of an expression tree.
pub trait Expression: IntoExpression + fmt::Debug + Send + Sync {
    /// Compute the value of this node.
    ///
    /// Beyond producing a value (or a hard error) this has no observable
    /// effect on the tree.
    fn evaluate(&self) -> Result<Value, EvalError>;

    /// True if `evaluate` always yields the same value.
    fn is_constant(&self) -> bool {
        false
    }

    /// Return an equivalent, possibly cheaper, expression.
    fn simplify(self: Box<Self>) -> Box<dyn Expression> {
        self.into_expression()
    }
}

/// Upcast from a concrete boxed node to a boxed trait object.
///
/// Implemented for every sized [`Expression`]; it lets `simplify` default to
/// returning the node itself.
pub trait IntoExpression {
    fn into_expression(self: Box<Self>) -> Box<dyn Expression>;
}

impl<T: Expression + 'static> IntoExpression for T {
    fn into_expression(self: Box<Self>) -> Box<dyn Expression> {
        self
    }
}
