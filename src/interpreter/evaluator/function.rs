use crate::{
    ast::{Node, Param},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            environment::Frame,
        },
        value::{closure::Closure, core::Value},
    },
};

impl Context {
    /// Evaluates a call (`AppFun` or `RunFun`).
    ///
    /// Arguments are evaluated left to right in the caller's frame before the
    /// callee is resolved.
    ///
    /// # Errors
    /// - Errors raised by the arguments.
    /// - `UnboundFunction` if no frame on the chain defines `name`.
    /// - Errors raised by [`Context::call`].
    pub(crate) fn eval_call(&mut self,
                            name: &str,
                            arguments: &[Node],
                            line: usize,
                            frame: &Frame)
                            -> EvalResult<Value> {
        let arg_vals = arguments.iter()
                                .map(|arg| self.eval(arg, frame))
                                .collect::<EvalResult<Vec<_>>>()?;

        let closure = frame.lookup_function(name)
                           .ok_or_else(|| RuntimeError::UnboundFunction { name: name.to_string(),
                                                                          line })?;

        self.call(&closure, arg_vals, line)
    }

    /// Calls a closure with already evaluated arguments.
    ///
    /// A new frame is created whose access link is the closure's defining
    /// frame, not the caller's, so free variables resolve lexically. Numeric
    /// parameters are bound as variables and function parameters as closures
    /// in that frame, then the body runs in it.
    ///
    /// # Returns
    /// The value of the `Return` that ended the body, or 0 if none did.
    ///
    /// # Errors
    /// - `ArgumentCountMismatch` if the argument and parameter counts differ.
    /// - `RecursionLimit` if the call would exceed the configured depth.
    /// - `ExpectedNumber` or `ExpectedFunction` if an argument does not fit its
    ///   parameter.
    /// - Errors raised by the body.
    pub fn call(&mut self, closure: &Closure, arg_vals: Vec<Value>, line: usize) -> EvalResult<Value> {
        let function = closure.function();

        if arg_vals.len() != function.params.len() {
            return Err(RuntimeError::ArgumentCountMismatch { name: function.name.clone(),
                                                             expected: function.params.len(),
                                                             found: arg_vals.len(),
                                                             line });
        }
        if self.call_depth >= self.config.max_call_depth {
            return Err(RuntimeError::RecursionLimit { limit: self.config.max_call_depth,
                                                      line });
        }

        let callee = Frame::child(closure.frame());
        for (param, value) in function.params.iter().zip(arg_vals) {
            match param {
                Param::Number { name, .. } => callee.bind(name, value.as_number(line)?),
                Param::Function { name, .. } => callee.bind_closure(name, value.into_closure(line)?),
            }
        }

        self.call_depth += 1;
        tracing::trace!(function = %function.name, depth = self.call_depth, "call");
        let result = self.exec_block(&function.body, &callee);
        self.call_depth -= 1;

        Ok(result?.unwrap_or(Value::Number(0)))
    }
}
