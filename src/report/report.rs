use crate::{
    checker::diagnostics::Diagnostic,
    config::AnalysisConfig,
    context::AnalysisContext,
    errors::errors::{Error, ErrorTip},
    get_source_line,
    lexer::tokens::Token,
};

const TOKEN_WIDTH: usize = 40;
const KIND_WIDTH: usize = 18;
const LINE_WIDTH: usize = 6;

/// Tokens in presentation order: by line, then lexeme. Scan order is untouched.
pub fn presentation_order(tokens: &[Token]) -> Vec<&Token> {
    let mut sorted: Vec<&Token> = tokens.iter().collect();
    sorted.sort_by(|a, b| a.line.cmp(&b.line).then_with(|| a.value.cmp(&b.value)));
    sorted
}

fn rule(out: &mut String, width: usize) {
    out.push_str(&"-".repeat(width));
    out.push('\n');
}

pub fn render_symbol_table(ctx: &AnalysisContext, sorted: bool) -> String {
    let mut out = String::new();
    let width = TOKEN_WIDTH + KIND_WIDTH + LINE_WIDTH + 10;

    rule(&mut out, width);
    out.push_str(&format!(
        "| {:<TOKEN_WIDTH$} | {:<KIND_WIDTH$} | {:>LINE_WIDTH$} |\n",
        "TOKEN", "ATTRIBUTE", "LINE"
    ));
    rule(&mut out, width);

    let rows: Vec<&Token> = if sorted {
        presentation_order(&ctx.tokens)
    } else {
        ctx.tokens.iter().collect()
    };
    for token in rows {
        out.push_str(&format!(
            "| {:<TOKEN_WIDTH$} | {:<KIND_WIDTH$} | {:>LINE_WIDTH$} |\n",
            token.value,
            token.kind.label(),
            token.line
        ));
    }
    rule(&mut out, width);

    out
}

pub fn render_comments(ctx: &AnalysisContext) -> String {
    let mut out = String::from("COMMENTS\n");

    if ctx.comments.is_empty() {
        out.push_str("(no comments found)\n");
        return out;
    }
    for comment in &ctx.comments {
        out.push_str(&format!("{}\n", comment));
    }

    out
}

/// One diagnostic with the offending source line underneath.
///
/// ```text
/// E1-TypeMismatch: int 'x' cannot take '"hi"' (string literal)
/// -> Input.java
///   |
/// 3 | int x = "hi";
///   |
/// ```
pub fn render_diagnostic(diagnostic: &Diagnostic, file: &str, source: &str) -> String {
    let mut out = String::new();
    let line_string = diagnostic.line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{}\n", diagnostic));
    out.push_str(&format!("-> {}\n", file));
    out.push_str(&format!("{:>padding$}\n", "|"));
    if let Some(text) = get_source_line(source, diagnostic.line) {
        out.push_str(&format!("{} | {}\n", line_string, text.trim()));
    }
    out.push_str(&format!("{:>padding$}\n", "|"));

    out
}

pub fn render_diagnostics(ctx: &AnalysisContext, file: &str, source: &str) -> String {
    let mut out = String::from("ERROR REPORT\n");

    if ctx.diagnostics.is_empty() {
        out.push_str("No errors found.\n");
        return out;
    }
    for diagnostic in &ctx.diagnostics {
        out.push_str(&render_diagnostic(diagnostic, file, source));
    }
    out.push_str(&format!("Summary: {}\n", ctx.summary()));

    out
}

fn render_truncation(ctx: &AnalysisContext) -> String {
    let mut out = String::new();
    let limits = ctx.limits();
    let dropped = [
        ("tokens", ctx.truncated.tokens, limits.max_tokens),
        ("comments", ctx.truncated.comments, limits.max_comments),
        ("diagnostics", ctx.truncated.diagnostics, limits.max_diagnostics),
        ("declarations", ctx.truncated.declarations, limits.max_declarations),
    ];

    for (what, count, limit) in dropped {
        if count > 0 {
            out.push_str(&format!(
                "note: {} {} dropped after reaching the limit of {}\n",
                count, what, limit
            ));
        }
    }

    out
}

/// Full report for one analyzed source: symbol table, comments, diagnostics.
pub fn render(ctx: &AnalysisContext, file: &str, source: &str, config: &AnalysisConfig) -> String {
    let mut out = String::new();

    out.push_str(&render_symbol_table(ctx, config.sorted_symbols));
    out.push('\n');
    out.push_str(&render_comments(ctx));
    out.push('\n');
    out.push_str(&render_diagnostics(ctx, file, source));
    if ctx.truncated.any() {
        out.push('\n');
        out.push_str(&render_truncation(ctx));
    }

    out
}

pub fn render_error(error: &Error) -> String {
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}\n", error.get_source_name()));
    out.push_str(&format!("   {}\n", error.get_internal_error()));

    out
}
