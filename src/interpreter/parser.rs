/// Stack-driven tree building.
///
/// Contains the entry point that shifts tokens onto the build stack and
/// triggers a reduction at every `End`.
pub mod core;

/// Construct reduction.
///
/// Turns a marker and the entries popped above it into a typed node, checking
/// that the children fit the construct.
pub mod reduce;

/// Utility functions for the parser.
///
/// Provides the stack entry type and helpers that convert entries into names,
/// expressions, statements, and parameters.
pub mod utils;
