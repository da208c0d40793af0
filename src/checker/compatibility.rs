use log::trace;

use crate::{
    context::AnalysisContext,
    lexer::classify::{is_char_literal, is_string_literal, ValueShape},
};

use super::diagnostics::DiagnosticKind;

const INTEGRAL_TYPES: [&str; 5] = ["int", "Int", "Long", "Short", "Byte"];
const FLOATING_TYPES: [&str; 4] = ["float", "Float", "double", "Double"];
const CHAR_TYPES: [&str; 2] = ["char", "Char"];

/// Strips a single trailing nullability marker.
pub fn strip_nullable(declared_type: &str) -> &str {
    declared_type.strip_suffix('?').unwrap_or(declared_type)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Compatibility {
    Accepted,
    /// The value cannot be assigned to the type.
    Rejected,
    /// The type only takes char literals.
    ExpectedChar,
}

/// Decides whether `value` may be assigned to a variable of `declared_type`.
pub fn compatibility(declared_type: &str, value: &str) -> Compatibility {
    let declared_type = strip_nullable(declared_type);

    if INTEGRAL_TYPES.contains(&declared_type) {
        let ends_alphabetic = value.chars().last().is_some_and(|c| c.is_ascii_alphabetic());
        if is_string_literal(value) || is_char_literal(value) || value.contains('.') || ends_alphabetic {
            return Compatibility::Rejected;
        }
    } else if FLOATING_TYPES.contains(&declared_type) {
        if is_string_literal(value) || is_char_literal(value) {
            return Compatibility::Rejected;
        }
    } else if CHAR_TYPES.contains(&declared_type) && !is_char_literal(value) {
        return Compatibility::ExpectedChar;
    }

    Compatibility::Accepted
}

/// Reports a type mismatch when `value` does not fit `declared_type`.
pub fn check_assignment_type(
    ctx: &mut AnalysisContext,
    declared_type: &str,
    value: &str,
    line: u32,
    variable: &str,
) {
    let stripped = strip_nullable(declared_type);
    let shape = ValueShape::of(value);

    let message = match compatibility(stripped, value) {
        Compatibility::Accepted => return,
        Compatibility::Rejected => format!(
            "{} '{}' cannot take '{}' ({})",
            stripped, variable, value, shape
        ),
        Compatibility::ExpectedChar => format!(
            "{} '{}' must take a char literal, got '{}' ({})",
            stripped, variable, value, shape
        ),
    };

    trace!("type mismatch on line {}: {}", line, message);
    ctx.report(DiagnosticKind::TypeMismatch, message, line);
}
