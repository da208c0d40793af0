use log::debug;

use crate::{
    context::AnalysisContext,
    lexer::{
        classify::{closest_keyword, is_keyword_like, is_relational},
        tokens::{Token, TokenKind},
    },
};

use super::{compatibility::check_assignment_type, diagnostics::DiagnosticKind};

/// Kinds that may stand on either side of a relational operator.
const OPERAND_KINDS: [TokenKind; 4] = [
    TokenKind::Identifier,
    TokenKind::Number,
    TokenKind::String,
    TokenKind::Char,
];

/// Second pass: walks the tokens in scan order and appends diagnostics.
pub fn check(ctx: &mut AnalysisContext) {
    // Diagnostics are appended to the same context, so walk a snapshot.
    let tokens = ctx.tokens.clone();

    for (i, token) in tokens.iter().enumerate() {
        let previous = i.checked_sub(1).map(|p| &tokens[p]);
        let previous_is_keyword = previous.is_some_and(|p| p.is(TokenKind::Keyword));

        if token.is(TokenKind::Identifier) {
            check_misspelled_keyword(ctx, token, previous_is_keyword);
            check_declared(ctx, token, previous_is_keyword);
        }

        check_assignment(ctx, &tokens, i, previous_is_keyword);

        if is_relational(&token.value) {
            check_relational(ctx, &tokens, i);
        }
    }

    debug!(
        "checked {} tokens, {} diagnostics",
        tokens.len(),
        ctx.diagnostics.len()
    );
}

fn check_misspelled_keyword(ctx: &mut AnalysisContext, token: &Token, previous_is_keyword: bool) {
    if previous_is_keyword
        || ctx.declarations.is_declared(&token.value)
        || !is_keyword_like(&token.value)
    {
        return;
    }

    let message = match closest_keyword(&token.value) {
        Some(keyword) => format!("'{}' resembles a keyword (did you mean '{}'?)", token.value, keyword),
        None => format!("'{}' resembles a keyword", token.value),
    };
    ctx.report(DiagnosticKind::MisspelledKeyword, message, token.line);
}

fn check_declared(ctx: &mut AnalysisContext, token: &Token, previous_is_keyword: bool) {
    if previous_is_keyword || ctx.declarations.is_declared(&token.value) {
        return;
    }

    ctx.report(
        DiagnosticKind::UseBeforeDeclaration,
        format!("'{}' used before declaration", token.value),
        token.line,
    );
}

/// `IDENT = VALUE`: type-checks the value against the declared type.
fn check_assignment(ctx: &mut AnalysisContext, tokens: &[Token], i: usize, previous_is_keyword: bool) {
    let (Some(target), Some(operator), Some(value)) = (tokens.get(i), tokens.get(i + 1), tokens.get(i + 2)) else {
        return;
    };
    if !target.is(TokenKind::Identifier) || operator.value != "=" {
        return;
    }

    match ctx.declarations.lookup(&target.value).map(str::to_string) {
        Some(declared_type) => {
            check_assignment_type(ctx, &declared_type, &value.value, target.line, &target.value);
        }
        // An undeclared target not preceded by a keyword was already reported.
        None if previous_is_keyword => ctx.report(
            DiagnosticKind::UseBeforeDeclaration,
            format!("'{}' used before declaration", target.value),
            target.line,
        ),
        None => {}
    }
}

fn check_relational(ctx: &mut AnalysisContext, tokens: &[Token], i: usize) {
    let token = &tokens[i];

    if i == 0 || i == tokens.len() - 1 {
        ctx.report(
            DiagnosticKind::RelationalOperatorMisuse,
            format!("Operator '{}' at invalid position", token.value),
            token.line,
        );
        return;
    }

    let left_ok = tokens[i - 1].is_one_of_many(&OPERAND_KINDS);
    let right_ok = tokens[i + 1].is_one_of_many(&OPERAND_KINDS);

    if !left_ok || !right_ok {
        ctx.report(
            DiagnosticKind::RelationalOperatorMisuse,
            format!("Operator '{}' has invalid operands", token.value),
            token.line,
        );
    }
}
