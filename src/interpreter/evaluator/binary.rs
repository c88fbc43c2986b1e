use crate::{
    ast::{BinaryOperator, Node},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            environment::Frame,
        },
        value::core::Value,
    },
};

impl Context {
    /// Evaluates both operands, left first, and combines them.
    ///
    /// # Errors
    /// - `ExpectedNumber` if an operand is a function.
    /// - `Overflow` if the result does not fit in 64 bits.
    pub(crate) fn eval_binary_op(&mut self,
                                 op: BinaryOperator,
                                 left: &Node,
                                 right: &Node,
                                 line: usize,
                                 frame: &Frame)
                                 -> EvalResult<Value> {
        let lhs = self.eval(left, frame)?.as_number(line)?;
        let rhs = self.eval(right, frame)?.as_number(line)?;

        apply(op, lhs, rhs, line).map(Value::Number)
    }
}

/// Applies an arithmetic operator with overflow checking.
///
/// ## Example
/// ```
/// use mini::{ast::BinaryOperator, interpreter::evaluator::binary::apply};
///
/// assert_eq!(apply(BinaryOperator::Subtract, 5, 2, 1), Ok(3));
/// assert!(apply(BinaryOperator::Multiply, i64::MAX, 2, 1).is_err());
/// ```
pub const fn apply(op: BinaryOperator, lhs: i64, rhs: i64, line: usize) -> EvalResult<i64> {
    let result = match op {
        BinaryOperator::Add => lhs.checked_add(rhs),
        BinaryOperator::Subtract => lhs.checked_sub(rhs),
        BinaryOperator::Multiply => lhs.checked_mul(rhs),
    };

    match result {
        Some(n) => Ok(n),
        None => Err(RuntimeError::Overflow { line }),
    }
}
