use logos::Logos;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            reduce::reduce,
            utils::Entry,
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Builds the tree for a whole program.
///
/// Tokens are consumed in a single pass over an explicit stack:
/// - a construct keyword pushes a marker,
/// - a number or identifier pushes a raw entry,
/// - `End` pops entries until it reaches a marker and replaces them with the
///   reduction of that marker's construct.
///
/// Because a marker is only consumed by the `End` that matches it in LIFO
/// order, nested constructs reduce innermost first without lookahead.
///
/// # Parameters
/// - `source`: Whitespace-separated program text.
///
/// # Returns
/// The single root node left on the stack.
///
/// # Errors
/// - `UnexpectedToken` or `LiteralTooLarge` for unlexable tokens.
/// - `UnmatchedEnd` when an `End` finds no marker.
/// - `MalformedConstruct` when a construct's children do not fit it.
/// - `EmptyProgram`, `UnclosedConstruct`, `TrailingNodes`, or `InvalidRoot`
///   when the stack does not end with exactly one node.
pub fn build_tree(source: &str) -> ParseResult<Node> {
    let mut stack: Vec<Entry> = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let line = lexer.extras.line;
        let Ok(token) = token else {
            let slice = lexer.slice().to_string();
            return Err(if slice.bytes().all(|b| b.is_ascii_digit()) {
                           ParseError::LiteralTooLarge { token: slice,
                                                         line }
                       } else {
                           ParseError::UnexpectedToken { token: slice,
                                                         line }
                       });
        };

        match token {
            Token::End => {
                let entry = reduce_top(&mut stack, line)?;
                stack.push(entry);
            },
            Token::Integer(value) => stack.push(Entry::Number { value, line }),
            Token::Identifier(name) => stack.push(Entry::Ident { name, line }),
            keyword => {
                let Some(construct) = keyword.construct() else {
                    return Err(ParseError::UnexpectedToken { token: lexer.slice().to_string(),
                                                             line });
                };
                stack.push(Entry::Marker { construct, line });
            },
        }
    }

    finish(stack)
}

/// Pops entries down to the nearest marker and reduces them.
fn reduce_top(stack: &mut Vec<Entry>, line: usize) -> ParseResult<Entry> {
    let Some(marker_index) = stack.iter().rposition(Entry::is_marker) else {
        return Err(ParseError::UnmatchedEnd { line });
    };

    let children = stack.split_off(marker_index + 1);
    let Some(Entry::Marker { construct,
                             line: marker_line, }) = stack.pop()
    else {
        return Err(ParseError::UnmatchedEnd { line });
    };

    tracing::trace!(%construct, children = children.len(), line = marker_line, "reduce");
    reduce(construct, marker_line, children)
}

/// Checks that exactly one reduced node is left and returns it.
fn finish(mut stack: Vec<Entry>) -> ParseResult<Node> {
    if let Some(Entry::Marker { construct, line }) = stack.iter().rev().find(|e| e.is_marker()) {
        return Err(ParseError::UnclosedConstruct { construct: *construct,
                                                   line:      *line, });
    }

    match stack.len() {
        0 => Err(ParseError::EmptyProgram),
        1 => match stack.pop() {
            Some(Entry::Node(node)) => {
                tracing::debug!(construct = %node.construct(),
                                children = node.child_count(),
                                "tree built");
                Ok(node)
            },
            Some(Entry::Number { value, line }) => Ok(Node::Number { value, line }),
            Some(other) => Err(ParseError::InvalidRoot { found: other.describe(),
                                                         line:  other.line(), }),
            None => Err(ParseError::EmptyProgram),
        },
        count => Err(ParseError::TrailingNodes { count,
                                                 line: stack[1].line() }),
    }
}
