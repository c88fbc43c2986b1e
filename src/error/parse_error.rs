use crate::ast::Construct;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur during tree building.
pub enum ParseError {
    /// Found a token the lexer could not classify.
    #[error("Error on line {line}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A numeric literal was too large to be represented safely.
    #[error("Error on line {line}: Literal {token} is too large.")]
    LiteralTooLarge {
        /// The literal as written.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An `End` was found with no open construct to close.
    #[error("Error on line {line}: 'End' does not close any construct.")]
    UnmatchedEnd {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The input ended while a construct was still open.
    #[error("Error on line {line}: '{construct}' is never closed by 'End'.")]
    UnclosedConstruct {
        /// The construct left open.
        construct: Construct,
        /// The source line where the construct was opened.
        line:      usize,
    },
    /// The input contained no tokens.
    #[error("Error on line 1: Program is empty.")]
    EmptyProgram,
    /// More than one root node was left after the input was consumed.
    #[error("Error on line {line}: Expected a single root construct but found {count}.")]
    TrailingNodes {
        /// The number of roots left on the stack.
        count: usize,
        /// The source line of the first surplus root.
        line:  usize,
    },
    /// A construct was closed with children it does not accept.
    #[error("Error on line {line}: Malformed '{construct}': {details}.")]
    MalformedConstruct {
        /// The construct being reduced.
        construct: Construct,
        /// What was wrong with its children.
        details:   String,
        /// The source line where the construct was opened.
        line:      usize,
    },
    /// The single remaining entry cannot stand on its own.
    #[error("Error on line {line}: {found} cannot be the program root.")]
    InvalidRoot {
        /// Description of the remaining entry.
        found: String,
        /// The source line of the entry.
        line:  usize,
    },
}
