//! Run-scoped analysis state.
//!
//! One [`AnalysisContext`] holds everything a run produces. It is reset at the
//! start of every run and handed by `&mut` to the scanner and the checker.

use log::warn;

use crate::{
    checker::diagnostics::{Diagnostic, DiagnosticKind, Summary},
    config::Limits,
    declarations::{DeclarationTable, Recorded},
    lexer::tokens::{Comment, Token},
};

/// Number of items dropped per collection once its cap was reached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Truncation {
    pub tokens: usize,
    pub comments: usize,
    pub diagnostics: usize,
    pub declarations: usize,
}

impl Truncation {
    pub fn any(&self) -> bool {
        self.tokens + self.comments + self.diagnostics + self.declarations > 0
    }
}

#[derive(Debug, Clone)]
pub struct AnalysisContext {
    pub tokens: Vec<Token>,
    pub declarations: DeclarationTable,
    pub comments: Vec<Comment>,
    pub diagnostics: Vec<Diagnostic>,
    pub truncated: Truncation,
    limits: Limits,
}

impl Default for AnalysisContext {
    fn default() -> Self {
        AnalysisContext::new(Limits::default())
    }
}

impl AnalysisContext {
    pub fn new(limits: Limits) -> Self {
        AnalysisContext {
            tokens: vec![],
            declarations: DeclarationTable::with_capacity(limits.max_declarations),
            comments: vec![],
            diagnostics: vec![],
            truncated: Truncation::default(),
            limits,
        }
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    pub fn reset(&mut self) {
        self.tokens.clear();
        self.declarations.clear();
        self.declarations.set_capacity(self.limits.max_declarations);
        self.comments.clear();
        self.diagnostics.clear();
        self.truncated = Truncation::default();
    }

    /// Appends a token, returning `false` if the token cap was reached.
    pub fn push_token(&mut self, token: Token) -> bool {
        if self.tokens.len() >= self.limits.max_tokens {
            if self.truncated.tokens == 0 {
                warn!("token limit of {} reached, further tokens are dropped", self.limits.max_tokens);
            }
            self.truncated.tokens += 1;
            return false;
        }
        self.tokens.push(token);
        true
    }

    pub fn push_comment(&mut self, body: String) {
        if self.comments.len() >= self.limits.max_comments {
            if self.truncated.comments == 0 {
                warn!("comment limit of {} reached, further comments are dropped", self.limits.max_comments);
            }
            self.truncated.comments += 1;
            return;
        }
        self.comments.push(Comment { body });
    }

    pub fn declare(&mut self, name: &str, declared_type: &str, line: u32) {
        if self.declarations.record(name, declared_type, line) != Recorded::Full {
            return;
        }
        if self.truncated.declarations == 0 {
            warn!("declaration limit of {} reached, further declarations are dropped", self.limits.max_declarations);
        }
        self.truncated.declarations += 1;
    }

    pub fn report(&mut self, kind: DiagnosticKind, message: String, line: u32) {
        if self.diagnostics.len() >= self.limits.max_diagnostics {
            if self.truncated.diagnostics == 0 {
                warn!("diagnostic limit of {} reached, further diagnostics are dropped", self.limits.max_diagnostics);
            }
            self.truncated.diagnostics += 1;
            return;
        }
        self.diagnostics.push(Diagnostic { kind, message, line });
    }

    pub fn summary(&self) -> Summary {
        Summary::of(&self.diagnostics)
    }
}
