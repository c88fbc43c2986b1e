#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to use a variable that no enclosing frame declares.
    #[error("Error on line {line}: Unbound name '{name}'.")]
    UnboundName {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called or referenced a function that no enclosing frame defines.
    #[error("Error on line {line}: Unbound function '{name}'.")]
    UnboundFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Assigned to a variable that no enclosing frame declares.
    #[error("Error on line {line}: Assignment to undeclared variable '{name}'.")]
    UndeclaredAssignment {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `Read` found no remaining input.
    #[error("Error on line {line}: Input exhausted.")]
    InputExhausted {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `Read` found input that is not an integer.
    #[error("Error on line {line}: Invalid input '{token}', expected an integer.")]
    InvalidInput {
        /// The offending input token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The call nesting grew past the configured limit.
    #[error("Error on line {line}: Recursion limit of {limit} calls exceeded.")]
    RecursionLimit {
        /// The configured maximum call depth.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The wrong number of arguments was supplied to a function.
    #[error("Error on line {line}: Function '{name}' takes {expected} arguments but {found} were given.")]
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// The number of declared parameters.
        expected: usize,
        /// The number of supplied arguments.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A numeric value was expected, but a function was found.
    #[error("Error on line {line}: Expected number.")]
    ExpectedNumber {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A function value was expected, but a number was found.
    #[error("Error on line {line}: Expected function name.")]
    ExpectedFunction {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Arithmetic operation overflowed.
    #[error("Error on line {line}: Integer overflow while trying to compute result.")]
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
}
