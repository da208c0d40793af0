//! Analysis configuration.
//!
//! Every run-scoped collection is capped. Items past a cap are counted in
//! [`crate::context::Truncation`] instead of being recorded.

pub const DEFAULT_MAX_TOKENS: usize = 16000;
pub const DEFAULT_MAX_COMMENTS: usize = 6000;
pub const DEFAULT_MAX_DIAGNOSTICS: usize = 6000;
pub const DEFAULT_MAX_DECLARATIONS: usize = 6000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_tokens: usize,
    pub max_comments: usize,
    pub max_diagnostics: usize,
    pub max_declarations: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_tokens: DEFAULT_MAX_TOKENS,
            max_comments: DEFAULT_MAX_COMMENTS,
            max_diagnostics: DEFAULT_MAX_DIAGNOSTICS,
            max_declarations: DEFAULT_MAX_DECLARATIONS,
        }
    }
}

/// Settings for one invocation of the analyzer and its report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub limits: Limits,
    /// Order the symbol table by `(line, lexeme)` rather than scan order.
    pub sorted_symbols: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            limits: Limits::default(),
            sorted_symbols: true,
        }
    }
}
