/// Default limit on nested function calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

/// Evaluation settings.
///
/// ## Example
/// ```
/// use mini::Config;
///
/// let config = Config::default().with_max_call_depth(64);
/// assert_eq!(config.max_call_depth, 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Calls nested deeper than this fail with `RecursionLimit`.
    pub max_call_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { max_call_depth: DEFAULT_MAX_CALL_DEPTH }
    }
}

impl Config {
    /// Returns the config with a different call depth limit.
    #[must_use]
    pub const fn with_max_call_depth(mut self, max_call_depth: usize) -> Self {
        self.max_call_depth = max_call_depth;
        self
    }
}
