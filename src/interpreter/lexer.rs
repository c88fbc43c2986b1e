use logos::Logos;

use crate::ast::Construct;

/// Represents a lexical token in the program text.
///
/// Tokens are separated by whitespace. Keywords open constructs, `End` closes
/// the most recently opened one, and everything else is a number or an
/// identifier.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// `Decl`
    #[token("Decl")]
    Decl,
    /// `Para`
    #[token("Para")]
    Para,
    /// `Num`
    #[token("Num")]
    Num,
    /// `Id`
    #[token("Id")]
    Id,
    /// `AppFun`
    #[token("AppFun")]
    AppFun,
    /// `Plus`
    #[token("Plus")]
    Plus,
    /// `Minus`
    #[token("Minus")]
    Minus,
    /// `Mult`
    #[token("Mult")]
    Mult,
    /// `List`
    #[token("List")]
    List,
    /// `Func`
    #[token("Func")]
    Func,
    /// `LetBe`
    #[token("LetBe")]
    LetBe,
    /// `RunFun`
    #[token("RunFun")]
    RunFun,
    /// `Return`
    #[token("Return")]
    Return,
    /// `Read`
    #[token("Read")]
    Read,
    /// `Print`
    #[token("Print")]
    Print,
    /// `Pro`
    #[token("Pro")]
    Pro,
    /// `FunName`
    #[token("FunName")]
    FunName,
    /// `End`, closes the innermost open construct.
    #[token("End")]
    End,
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer, priority = 3)]
    Integer(i64),
    /// Any other token; variable or function names such as `x` or `square`.
    #[regex(r"\S+", |lex| lex.slice().to_string(), allow_greedy = true)]
    Identifier(String),

    /// Line breaks.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Whitespace other than line breaks.
    #[regex(r"[^\S\n]+", logos::skip)]
    Ignored,
}

impl Token {
    /// Returns the construct a keyword token opens, if it is one.
    #[must_use]
    pub const fn construct(&self) -> Option<Construct> {
        match self {
            Self::Decl => Some(Construct::Decl),
            Self::Para => Some(Construct::Para),
            Self::Num => Some(Construct::Num),
            Self::Id => Some(Construct::Id),
            Self::AppFun => Some(Construct::AppFun),
            Self::Plus => Some(Construct::Plus),
            Self::Minus => Some(Construct::Minus),
            Self::Mult => Some(Construct::Mult),
            Self::List => Some(Construct::List),
            Self::Func => Some(Construct::Func),
            Self::LetBe => Some(Construct::LetBe),
            Self::RunFun => Some(Construct::RunFun),
            Self::Return => Some(Construct::Return),
            Self::Read => Some(Construct::Read),
            Self::Print => Some(Construct::Print),
            Self::Pro => Some(Construct::Pro),
            Self::FunName => Some(Construct::FunName),
            _ => None,
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if it fits.
/// - `None`: If the literal is too large, which makes the lexer report an
///   error for this token.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
