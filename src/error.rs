/// Parsing errors.
///
/// Defines all error types that can occur while classifying tokens and
/// building the tree. Every one of them means the program text is malformed.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// unbound names, exhausted input, or runaway recursion.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure of parsing or evaluating a Mini program.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The program text could not be turned into a tree.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The tree failed while being evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
