use std::vec;

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Whitespace-separated integers consumed in order by `Read`.
///
/// Tokens are parsed only when read, so malformed input after the last value
/// a program reads is never reported.
#[derive(Debug, Clone)]
pub struct InputStream {
    tokens: vec::IntoIter<String>,
}

impl InputStream {
    /// Splits `text` into input tokens.
    ///
    /// ## Example
    /// ```
    /// use mini::interpreter::evaluator::input::InputStream;
    ///
    /// let mut input = InputStream::new("10 -20\n30");
    /// assert_eq!(input.next_value(1), Ok(10));
    /// assert_eq!(input.next_value(1), Ok(-20));
    /// assert_eq!(input.next_value(1), Ok(30));
    /// assert!(input.next_value(1).is_err());
    /// ```
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self { tokens: text.split_whitespace()
                           .map(str::to_string)
                           .collect::<Vec<_>>()
                           .into_iter(), }
    }

    /// An input stream with nothing to read.
    #[must_use]
    pub fn empty() -> Self {
        Self { tokens: Vec::new().into_iter() }
    }

    /// Reads the next integer.
    ///
    /// # Parameters
    /// - `line`: Line of the `Read` for error reporting.
    ///
    /// # Errors
    /// - `InputExhausted` if nothing is left.
    /// - `InvalidInput` if the next token is not an integer.
    pub fn next_value(&mut self, line: usize) -> EvalResult<i64> {
        let token = self.tokens
                        .next()
                        .ok_or(RuntimeError::InputExhausted { line })?;

        token.parse()
             .map_err(|_| RuntimeError::InvalidInput { token, line })
    }
}
