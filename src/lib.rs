//! # mini
//!
//! mini is an interpreter for the Mini toy language. Programs are written as
//! whitespace-separated tokens in a prefix notation where every construct is
//! opened by a keyword and closed by an explicit `End`. The interpreter builds
//! a tree from the tokens in a single stack-driven pass and evaluates it with
//! lexically scoped frames, recursion, and functions passed as values.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        evaluator::{core::Context, input::InputStream},
        parser::core::build_tree,
    },
};

/// Defines the structure of parsed programs.
///
/// This module declares the construct vocabulary, the `Node` enum, and the
/// function definitions that the tree builder produces and the evaluator
/// walks.
///
/// # Responsibilities
/// - Defines one node variant per construct.
/// - Derives each construct's category from its stable numeric code.
/// - Attaches source lines to nodes for error reporting.
pub mod ast;
/// Evaluation settings.
///
/// Holds the limits evaluation runs under, such as the maximum call depth.
pub mod config;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while building the tree
/// or evaluating it. Every error carries the source line it refers to.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (tree building, evaluation).
/// - Wraps both in a single `Error` for callers running whole programs.
pub mod error;
/// Orchestrates the entire process of program execution.
///
/// This module ties together token classification, tree building, evaluation,
/// and runtime values.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, and evaluator.
/// - Provides the runtime context and environment frames.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities.
pub mod util;

pub use config::Config;
pub use error::Error;

/// Builds the tree for a program.
///
/// # Errors
/// Returns a `ParseError` if the program is malformed.
///
/// # Examples
/// ```
/// use mini::{ast::Construct, parse};
///
/// let root = parse("Pro Print Num 7 End End End").unwrap();
/// assert_eq!(root.construct(), Construct::Pro);
///
/// assert!(parse("Pro Print Num 7 End End").is_err());
/// ```
pub fn parse(source: &str) -> Result<Node, ParseError> {
    build_tree(source)
}

/// Runs a program against the given input and returns the printed values.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use mini::run;
///
/// let source = "Pro Decl a End Read a End Print Mult Id a End Num 2 End End End End";
/// assert_eq!(run(source, "21").unwrap(), vec![42]);
///
/// // Reading with no input left is an error.
/// assert!(run(source, "").is_err());
/// ```
pub fn run(source: &str, input: &str) -> Result<Vec<i64>, Error> {
    run_with_config(source, input, Config::default())
}

/// Runs a program with explicit settings.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
pub fn run_with_config(source: &str, input: &str, config: Config) -> Result<Vec<i64>, Error> {
    let root = parse(source)?;
    let mut context = Context::with_config(InputStream::new(input), config);
    context.run(&root)?;

    Ok(context.into_output())
}

/// Formats printed values the way the output file stores them: each value
/// followed by a single space.
///
/// # Examples
/// ```
/// assert_eq!(mini::format_output(&[1, -2, 3]), "1 -2 3 ");
/// assert_eq!(mini::format_output(&[]), "");
/// ```
#[must_use]
pub fn format_output(values: &[i64]) -> String {
    values.iter().map(|v| format!("{v} ")).collect()
}
