use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    TypeMismatch,
    MisspelledKeyword,
    UseBeforeDeclaration,
    RelationalOperatorMisuse,
}

impl DiagnosticKind {
    pub fn code(&self) -> &'static str {
        match self {
            DiagnosticKind::TypeMismatch => "E1",
            DiagnosticKind::MisspelledKeyword => "E2",
            DiagnosticKind::UseBeforeDeclaration => "E3",
            DiagnosticKind::RelationalOperatorMisuse => "E4",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DiagnosticKind::TypeMismatch => "TypeMismatch",
            DiagnosticKind::MisspelledKeyword => "MisspelledKeyword",
            DiagnosticKind::UseBeforeDeclaration => "IdentifierError",
            DiagnosticKind::RelationalOperatorMisuse => "RelationalError",
        }
    }
}

impl Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.code(), self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    pub line: u32,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

/// Per-kind diagnostic counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub type_mismatch: usize,
    pub misspelled_keyword: usize,
    pub use_before_declaration: usize,
    pub relational_operator_misuse: usize,
    pub total: usize,
}

impl Summary {
    pub fn of(diagnostics: &[Diagnostic]) -> Self {
        let mut summary = Summary::default();

        for diagnostic in diagnostics {
            match diagnostic.kind {
                DiagnosticKind::TypeMismatch => summary.type_mismatch += 1,
                DiagnosticKind::MisspelledKeyword => summary.misspelled_keyword += 1,
                DiagnosticKind::UseBeforeDeclaration => summary.use_before_declaration += 1,
                DiagnosticKind::RelationalOperatorMisuse => summary.relational_operator_misuse += 1,
            }
            summary.total += 1;
        }

        summary
    }

    pub fn count(&self, kind: DiagnosticKind) -> usize {
        match kind {
            DiagnosticKind::TypeMismatch => self.type_mismatch,
            DiagnosticKind::MisspelledKeyword => self.misspelled_keyword,
            DiagnosticKind::UseBeforeDeclaration => self.use_before_declaration,
            DiagnosticKind::RelationalOperatorMisuse => self.relational_operator_misuse,
        }
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "E1={}  E2={}  E3={}  E4={}   Total={}",
            self.type_mismatch,
            self.misspelled_keyword,
            self.use_before_declaration,
            self.relational_operator_misuse,
            self.total
        )
    }
}
