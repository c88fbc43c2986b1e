use crate::{
    ast::{Construct, Node, Param},
    error::ParseError,
    interpreter::parser::core::ParseResult,
};

/// An element of the build stack.
///
/// Markers and raw tokens are shifted directly from the input. `List` and
/// `Para` reduce to intermediate entries that only make sense inside the
/// construct that encloses them; every other construct reduces to a [`Node`].
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// An opened construct awaiting its `End`.
    Marker {
        /// The construct the keyword opened.
        construct: Construct,
        /// Line of the keyword.
        line:      usize,
    },
    /// A bare number token.
    Number {
        /// The parsed value.
        value: i64,
        /// Line of the token.
        line:  usize,
    },
    /// A bare identifier token.
    Ident {
        /// The identifier text.
        name: String,
        /// Line of the token.
        line: usize,
    },
    /// A reduced `List`, resolved by the construct that contains it.
    List {
        /// The list items, unconverted.
        items: Vec<Self>,
        /// Line of the `List` keyword.
        line:  usize,
    },
    /// A reduced `Para`.
    Param(Param),
    /// A reduced node.
    Node(Node),
}

impl Entry {
    /// Tests whether the entry is a pending construct marker.
    #[must_use]
    pub const fn is_marker(&self) -> bool {
        matches!(self, Self::Marker { .. })
    }

    /// Gets the source line the entry started on.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            Self::Marker { line, .. }
            | Self::Number { line, .. }
            | Self::Ident { line, .. }
            | Self::List { line, .. }
            | Self::Param(Param::Number { line, .. } | Param::Function { line, .. }) => *line,
            Self::Node(node) => node.line_number(),
        }
    }

    /// Describes the entry for error messages.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Marker { construct, .. } => format!("unclosed '{construct}'"),
            Self::Number { value, .. } => format!("number {value}"),
            Self::Ident { name, .. } => format!("identifier '{name}'"),
            Self::List { .. } => "'List'".to_string(),
            Self::Param(_) => "'Para'".to_string(),
            Self::Node(node) => format!("'{}'", node.construct()),
        }
    }
}

/// Builds a `MalformedConstruct` error.
pub(in crate::interpreter::parser) fn malformed(construct: Construct,
                                                line: usize,
                                                details: impl Into<String>)
                                                -> ParseError {
    ParseError::MalformedConstruct { construct,
                                     details: details.into(),
                                     line }
}

/// Splits the children of a construct into exactly `N` entries.
///
/// # Errors
/// Returns `MalformedConstruct` if the construct has a different number of
/// children.
pub(in crate::interpreter::parser) fn exactly<const N: usize>(construct: Construct,
                                                              line: usize,
                                                              children: Vec<Entry>)
                                                              -> ParseResult<[Entry; N]> {
    let found = children.len();
    <[Entry; N]>::try_from(children).map_err(|_| {
                                        malformed(construct,
                                                  line,
                                                  format!("expected {N} children but found {found}"))
                                    })
}

/// Converts an entry into an identifier.
///
/// # Errors
/// Returns `MalformedConstruct` for anything but a bare identifier.
pub(in crate::interpreter::parser) fn expect_ident(construct: Construct,
                                                   entry: Entry)
                                                   -> ParseResult<String> {
    match entry {
        Entry::Ident { name, .. } => Ok(name),
        other => {
            Err(malformed(construct,
                          other.line(),
                          format!("expected identifier, found {}", other.describe())))
        },
    }
}

/// Converts an entry into an expression node.
///
/// Bare numbers are accepted as literals.
///
/// # Errors
/// Returns `MalformedConstruct` if the entry cannot produce a value.
pub(in crate::interpreter::parser) fn expect_expression(construct: Construct,
                                                        entry: Entry)
                                                        -> ParseResult<Node> {
    match entry {
        Entry::Number { value, line } => Ok(Node::Number { value, line }),
        Entry::Node(node) if node.is_expression() => Ok(node),
        other => {
            Err(malformed(construct,
                          other.line(),
                          format!("expected expression, found {}", other.describe())))
        },
    }
}

/// Converts an entry into a statement node.
///
/// # Errors
/// Returns `MalformedConstruct` for raw tokens, lists, and parameters.
pub(in crate::interpreter::parser) fn expect_statement(construct: Construct,
                                                       entry: Entry)
                                                       -> ParseResult<Node> {
    match entry {
        Entry::Node(node) => Ok(node),
        other => {
            Err(malformed(construct,
                          other.line(),
                          format!("expected statement, found {}", other.describe())))
        },
    }
}

/// Converts an entry into the items of a `List`.
///
/// # Errors
/// Returns `MalformedConstruct` if the entry is not a reduced `List`.
pub(in crate::interpreter::parser) fn expect_list(construct: Construct,
                                                  entry: Entry)
                                                  -> ParseResult<Vec<Entry>> {
    match entry {
        Entry::List { items, .. } => Ok(items),
        other => {
            Err(malformed(construct,
                          other.line(),
                          format!("expected 'List', found {}", other.describe())))
        },
    }
}

/// Converts a parameter list item into a [`Param`].
///
/// A bare identifier or a `Para` is a numeric parameter; a `FunName` is a
/// function parameter.
///
/// # Errors
/// Returns `MalformedConstruct` for anything else.
pub(in crate::interpreter::parser) fn expect_param(construct: Construct,
                                                   entry: Entry)
                                                   -> ParseResult<Param> {
    match entry {
        Entry::Ident { name, line } => Ok(Param::Number { name, line }),
        Entry::Param(param) => Ok(param),
        Entry::Node(Node::FunctionRef { name, line }) => Ok(Param::Function { name, line }),
        other => {
            Err(malformed(construct,
                          other.line(),
                          format!("expected parameter, found {}", other.describe())))
        },
    }
}
