use crate::{
    ast::Node,
    config::Config,
    error::RuntimeError,
    interpreter::{
        evaluator::{environment::Frame, input::InputStream},
        value::core::Value,
    },
    util::stack::ensure_sufficient_stack,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds everything evaluation touches besides the frames: the
/// numeric input stream, the output buffer, and the current call depth.
///
/// ## Usage
///
/// A `Context` is created once per program run. [`Context::run`] evaluates a
/// root node in a fresh global frame; the output stays available through
/// [`Context::output`] even when evaluation fails part way.
pub struct Context {
    pub(crate) input:      InputStream,
    pub(crate) output:     Vec<i64>,
    pub(crate) call_depth: usize,
    pub(crate) config:     Config,
}

impl Context {
    /// Creates a context reading from `input` with the default [`Config`].
    #[must_use]
    pub fn new(input: InputStream) -> Self {
        Self::with_config(input, Config::default())
    }

    /// Creates a context reading from `input` with the given settings.
    #[must_use]
    pub const fn with_config(input: InputStream, config: Config) -> Self {
        Self { input,
               output: Vec::new(),
               call_depth: 0,
               config }
    }

    /// The values printed so far, in emission order.
    #[must_use]
    pub fn output(&self) -> &[i64] {
        &self.output
    }

    /// Consumes the context and returns the printed values.
    #[must_use]
    pub fn into_output(self) -> Vec<i64> {
        self.output
    }

    /// Evaluates `root` in a new global frame.
    ///
    /// # Returns
    /// The value of `root`: the returned value for a program that executed a
    /// top-level `Return`, 0 for one that did not.
    ///
    /// # Errors
    /// Propagates the first runtime error; evaluation stops there.
    pub fn run(&mut self, root: &Node) -> EvalResult<Value> {
        let global = Frame::global();
        tracing::debug!(construct = %root.construct(), "evaluation started");
        let result = self.eval(root, &global);
        tracing::debug!(printed = self.output.len(),
                        ok = result.is_ok(),
                        "evaluation finished");
        result
    }

    /// Evaluates a node against `frame` and returns its value.
    ///
    /// This is the main entry point for evaluation. Expressions produce their
    /// value; statements are executed and produce the value they return, or 0.
    ///
    /// # Parameters
    /// - `node`: Node to evaluate.
    /// - `frame`: The frame names are resolved in.
    pub fn eval(&mut self, node: &Node, frame: &Frame) -> EvalResult<Value> {
        ensure_sufficient_stack(|| match node {
            Node::Number { value, .. } => Ok(Value::Number(*value)),
            Node::Variable { name, line } => {
                frame.lookup(name)
                     .map(Value::Number)
                     .ok_or_else(|| RuntimeError::UnboundName { name: name.clone(),
                                                                line: *line, })
            },
            Node::BinaryOp { op,
                             left,
                             right,
                             line, } => self.eval_binary_op(*op, left, right, *line, frame),
            Node::Call { name,
                         arguments,
                         line,
                         .. } => self.eval_call(name, arguments, *line, frame),
            Node::FunctionRef { name, line } => {
                frame.lookup_function(name)
                     .map(Value::Function)
                     .ok_or_else(|| RuntimeError::UnboundFunction { name: name.clone(),
                                                                    line: *line, })
            },
            statement => Ok(self.exec(statement, frame)?.unwrap_or(Value::Number(0))),
        })
    }
}
