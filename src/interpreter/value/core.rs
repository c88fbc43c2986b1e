use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::closure::Closure},
};

/// Represents a runtime value in the interpreter.
///
/// Numbers are the only data; functions become values when named with
/// `FunName` so they can be passed as arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64 bit integer.
    Number(i64),
    /// A function together with its defining frame.
    Function(Closure),
}

impl Value {
    /// Converts the value to an `i64`, or returns an error for a function.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    pub const fn as_number(&self, line: usize) -> EvalResult<i64> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Function(_) => Err(RuntimeError::ExpectedNumber { line }),
        }
    }

    /// Converts the value to a closure, or returns an error for a number.
    pub fn into_closure(self, line: usize) -> EvalResult<Closure> {
        match self {
            Self::Function(c) => Ok(c),
            Self::Number(_) => Err(RuntimeError::ExpectedFunction { line }),
        }
    }
}
