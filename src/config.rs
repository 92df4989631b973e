/// Maximum parenthesis nesting depth accepted by default.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Evaluation options.
///
/// Each tokenizer/parser owns its own copy; there is no process-wide
/// configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Log every scanned token at debug level.
    pub debug: bool,
    /// Deepest allowed parenthesis nesting. 0 rejects any `(`.
    pub max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { debug: false, max_depth: DEFAULT_MAX_DEPTH }
    }
}

impl Config {
    pub fn new(debug: bool, max_depth: usize) -> Self {
        Self { debug, max_depth }
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
