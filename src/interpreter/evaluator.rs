/// Arithmetic evaluation.
///
/// Implements `Plus`, `Minus`, and `Mult` with checked 64 bit arithmetic.
pub mod binary;

/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the runtime context, and error
/// propagation.
pub mod core;

/// Environment frames.
///
/// Defines the activation records that hold variable and function bindings
/// and link to their lexically enclosing frame.
pub mod environment;

/// Function evaluation.
///
/// Handles calls: argument evaluation, frame creation, parameter binding, and
/// the call depth limit.
pub mod function;

/// The numeric input stream consumed by `Read`.
pub mod input;

/// Statement evaluation.
///
/// Executes declarations, assignments, reads, prints, returns, function
/// definitions, and statement sequences.
pub mod statement;
