use std::rc::Rc;

use crate::{
    ast::Node,
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
    /// Executes a single statement.
    ///
    /// Handles sequences, function definitions, declarations, assignments,
    /// reads, prints, and returns. Any expression used as a statement is
    /// evaluated for its effects and its value discarded.
    ///
    /// # Returns
    /// `Some(Value)` when the statement is a `Return`, or a sequence ended by
    /// one; `None` otherwise.
    pub fn exec(&mut self, statement: &Node, frame: &Frame) -> EvalResult<Option<Value>> {
        match statement {
            Node::Program { statements, .. } => self.exec_block(statements, frame),
            Node::Function(def) => {
                frame.define_function(Rc::clone(def));
                Ok(None)
            },
            Node::Declaration { names, .. } => {
                for name in names {
                    frame.declare(name);
                }
                Ok(None)
            },
            Node::Assignment { name, value, line } => {
                let value = self.eval(value, frame)?.as_number(*line)?;
                assign(frame, name, value, *line)?;
                Ok(None)
            },
            Node::Read { name, line } => {
                let value = self.input.next_value(*line)?;
                assign(frame, name, value, *line)?;
                Ok(None)
            },
            Node::Print { expr, line } => {
                let value = self.eval(expr, frame)?.as_number(*line)?;
                tracing::trace!(value, line, "print");
                self.output.push(value);
                Ok(None)
            },
            Node::Return { expr, .. } => Ok(Some(self.eval(expr, frame)?)),
            expr => {
                self.eval(expr, frame)?;
                Ok(None)
            },
        }
    }

    /// Executes a statement sequence in order.
    ///
    /// The sequence stops right after a `Return` that is one of its own
    /// statements and yields that value. A `Return` inside a nested sequence
    /// ends only the nested sequence.
    pub fn exec_block(&mut self, statements: &[Node], frame: &Frame) -> EvalResult<Option<Value>> {
        for statement in statements {
            let result = self.exec(statement, frame)?;
            if let Node::Return { .. } = statement {
                return Ok(result);
            }
        }

        Ok(None)
    }
}

/// Assigns to an existing variable.
///
/// # Errors
/// Returns `UndeclaredAssignment` if no frame on the chain declares `name`.
fn assign(frame: &Frame, name: &str, value: i64, line: usize) -> EvalResult<()> {
    frame.assign(name, value)
         .map_err(|_| RuntimeError::UndeclaredAssignment { name: name.to_string(),
                                                           line })
}
