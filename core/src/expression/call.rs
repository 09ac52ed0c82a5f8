use core::fmt;

use tracing::debug;

use super::{Constant, Expression};
use crate::{errors::EvalError, function::FunctionRef, values::Value};

/// A function applied to an ordered list of owned argument expressions.
pub struct Call {
    function: FunctionRef,
    args: Vec<Box<dyn Expression>>,
}

impl Call {
    /// Create a call node.
    ///
    /// Fails with [`EvalError::ArgumentCount`] if the function has a fixed
    /// arity that `args` does not match.
    pub fn new(function: FunctionRef, args: Vec<Box<dyn Expression>>) -> Result<Self, EvalError> {
        function.arity().check(function.name(), args.len())?;
        Ok(Self { function, args })
    }

    pub fn function(&self) -> &FunctionRef {
        &self.function
    }

    pub fn args(&self) -> &[Box<dyn Expression>] {
        &self.args
    }
}

impl Expression for Call {
    fn evaluate(&self) -> Result<Value, EvalError> {
        self.function.eval(&self.args)
    }

    /// Simplify every argument, then fold into a [`Constant`] if all of them
    /// are constant and the function is natural.
    ///
    /// A fold whose evaluation fails is abandoned so the error is reported by
    /// `evaluate` instead.
    fn simplify(self: Box<Self>) -> Box<dyn Expression> {
        let Call { function, args } = *self;
        let args: Vec<_> = args.into_iter().map(|arg| arg.simplify()).collect();

        if !function.is_natural() {
            debug!(function = function.name(), "not folding call to non-natural function");
            return Box::new(Call { function, args });
        }

        if args.iter().all(|arg| arg.is_constant()) {
            match function.eval(&args) {
                Ok(value) => {
                    debug!(function = function.name(), %value, "folded call into constant");
                    return Box::new(Constant::from(value));
                }
                Err(err) => {
                    debug!(function = function.name(), %err, "constant call fails; left unfolded");
                }
            }
        }

        Box::new(Call { function, args })
    }
}

impl fmt::Debug for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Call")
            .field("function", &self.function.name())
            .field("args", &self.args)
            .finish()
    }
}
