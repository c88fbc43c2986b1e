/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the tree produced by the parser against a chain of
/// environment frames, reading numbers from the input stream and appending
/// printed values to the output.
///
/// # Responsibilities
/// - Evaluates every node variant.
/// - Manages frames, closures, and the call depth.
/// - Reports runtime errors such as unbound names or exhausted input.
pub mod evaluator;
/// The lexer module classifies the whitespace-separated program tokens.
///
/// # Responsibilities
/// - Separates construct keywords and `End` from numbers and identifiers.
/// - Tracks the source line of every token.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// Construct keywords are pushed onto a stack as markers and reduced into
/// nodes when their `End` arrives, so no lookahead is ever needed.
///
/// # Responsibilities
/// - Reduces markers and their children into typed nodes.
/// - Validates the children of every construct.
/// - Reports malformed programs with the line of the offending construct.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// A Mini value is either a number or a closure created from a function name.
pub mod value;
