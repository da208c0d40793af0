use log::debug;

use crate::{
    checker::compatibility::{check_assignment_type, strip_nullable},
    context::AnalysisContext,
    declarations::UNKNOWN_TYPE,
    MK_TOKEN,
};

use super::{
    classify::classify,
    cursor::Cursor,
    tokens::{Token, TokenKind},
};

const OPERATOR_CHARS: &str = "+-*/%=<>!&|?:.()";
const SEPARATOR_CHARS: &str = "{}[];,";

pub struct Lexer<'a> {
    cursor: Cursor,
    ctx: &'a mut AnalysisContext,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &str, ctx: &'a mut AnalysisContext) -> Lexer<'a> {
        Lexer {
            cursor: Cursor::new(source),
            ctx,
        }
    }

    pub fn push(&mut self, token: Token) -> bool {
        self.ctx.push_token(token)
    }

    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Records `IDENT -> KEYWORD` when the last two tokens are a keyword then an identifier.
    fn sniff_declaration(&mut self) {
        let [.., keyword, identifier] = self.ctx.tokens.as_slice() else {
            return;
        };
        if !keyword.is(TokenKind::Keyword) || !identifier.is(TokenKind::Identifier) {
            return;
        }

        let (name, declared_type, line) = (identifier.value.clone(), keyword.value.clone(), identifier.line);
        self.ctx.declare(&name, &declared_type, line);
    }
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\u{0B}' | '\u{0C}')
}

fn comment_handler(lexer: &mut Lexer) {
    let mut body = String::new();
    body.extend(lexer.cursor.bump());
    let opener = lexer.cursor.bump();
    body.extend(opener);

    if opener == Some('/') {
        lexer.cursor.eat_while(&mut body, |c| c != '\n');
    } else {
        let mut previous = '\0';
        while let Some(c) = lexer.cursor.bump() {
            body.push(c);
            if previous == '*' && c == '/' {
                break;
            }
            previous = c;
        }
    }

    lexer.ctx.push_comment(body);
}

fn symbol_handler(lexer: &mut Lexer) {
    let mut value = String::new();
    lexer.cursor.eat_while(&mut value, |c| c.is_ascii_alphanumeric() || c == '_');

    let kind = classify(&value);
    let opens_namespace = kind == TokenKind::Keyword && (value == "package" || value == "import");
    let pushed = lexer.push(MK_TOKEN!(kind, value, lexer.line()));

    if opens_namespace {
        namespace_handler(lexer);
    } else if pushed {
        lexer.sniff_declaration();
    }
}

/// Captures the rest of a `package`/`import` line as one token.
fn namespace_handler(lexer: &mut Lexer) {
    while lexer.cursor.at().is_some_and(is_blank) {
        lexer.cursor.bump();
    }
    if matches!(lexer.cursor.at(), None | Some('\n')) {
        return;
    }

    let mut raw = String::new();
    lexer.cursor.eat_while(&mut raw, |c| c != '\n' && c != ';');
    let line = lexer.line();
    if lexer.cursor.next_is(';') {
        lexer.cursor.bump();
    }

    let path = raw.trim();
    if !path.is_empty() {
        lexer.push(MK_TOKEN!(TokenKind::Namespace, path.to_string(), line));
    }
}

fn number_handler(lexer: &mut Lexer) {
    let mut value = String::new();
    let mut seen_dot = false;

    while let Some(c) = lexer.cursor.at() {
        if c.is_ascii_digit() {
            value.push(c);
        } else if c == '.' && !seen_dot && lexer.cursor.peek(1) != Some('.') {
            seen_dot = true;
            value.push(c);
        } else {
            break;
        }
        lexer.cursor.bump();
    }

    // Suffix letters (`f`, `L`, ...) are kept verbatim.
    lexer.cursor.eat_while(&mut value, |c| c.is_ascii_alphabetic());

    lexer.push(MK_TOKEN!(TokenKind::Number, value, lexer.line()));
}

fn char_handler(lexer: &mut Lexer) {
    let mut value = String::new();
    value.extend(lexer.cursor.bump());

    match lexer.cursor.bump() {
        Some('\\') => {
            value.push('\\');
            value.extend(lexer.cursor.bump());
        }
        Some(c) => value.push(c),
        None => {}
    }

    // The closing position is always consumed, even when it is not a quote.
    if let Some(close) = lexer.cursor.bump() {
        if close == '\'' {
            value.push(close);
        }
    }

    lexer.push(MK_TOKEN!(TokenKind::Char, value, lexer.line()));
}

fn string_handler(lexer: &mut Lexer) {
    let mut value = String::new();
    value.extend(lexer.cursor.bump());

    while let Some(c) = lexer.cursor.bump() {
        value.push(c);
        match c {
            '"' => break,
            '\\' => value.extend(lexer.cursor.bump()),
            _ => {}
        }
    }

    lexer.push(MK_TOKEN!(TokenKind::String, value, lexer.line()));
}

fn operator_handler(lexer: &mut Lexer) {
    let Some(first) = lexer.cursor.bump() else {
        return;
    };
    let mut value = first.to_string();

    if let Some(next) = lexer.cursor.at() {
        let fuses = matches!(
            (first, next),
            ('?', '.') | ('?', ':') | ('.', '.') | ('=', '=') | ('!', '=') | ('<', '=') | ('>', '=') | ('&', '&') | ('|', '|')
        );
        if fuses {
            value.push(next);
            lexer.cursor.bump();
        }
    }
    if value == "==" && lexer.cursor.next_is('=') {
        value.extend(lexer.cursor.bump());
    }

    let kind = if value == ":" {
        TokenKind::Separator
    } else {
        TokenKind::Operator
    };
    lexer.push(MK_TOKEN!(kind, value, lexer.line()));
}

fn separator_handler(lexer: &mut Lexer) {
    if let Some(c) = lexer.cursor.bump() {
        lexer.push(MK_TOKEN!(TokenKind::Separator, c.to_string(), lexer.line()));
    }
}

/// Kotlin `(var|val) IDENT [: TYPE] [= VALUE]` declarations, found after scanning.
pub fn kotlin_declaration_pass(ctx: &mut AnalysisContext) {
    let tokens = ctx.tokens.clone();

    for (i, token) in tokens.iter().enumerate() {
        if !token.is_keyword("var") && !token.is_keyword("val") {
            continue;
        }
        let Some(name) = tokens.get(i + 1).filter(|t| t.is(TokenKind::Identifier)) else {
            continue;
        };

        match (tokens.get(i + 2), tokens.get(i + 3)) {
            (Some(colon), Some(annotation)) if colon.value == ":" => {
                let declared_type = strip_nullable(&annotation.value);
                ctx.declare(&name.value, declared_type, name.line);

                if let (Some(assign), Some(value)) = (tokens.get(i + 4), tokens.get(i + 5)) {
                    if assign.value == "=" {
                        check_assignment_type(ctx, declared_type, &value.value, name.line, &name.value);
                    }
                }
            }
            (Some(assign), _) if assign.value == "=" => {
                ctx.declare(&name.value, UNKNOWN_TYPE, name.line);
            }
            _ => {}
        }
    }
}

/// Scans `source` into `ctx`: tokens, comments and declarations.
///
/// Malformed literals and comments never fail; they are captured up to the end
/// of the input. Characters outside the recognised sets are dropped.
pub fn tokenize(source: &str, ctx: &mut AnalysisContext) {
    let mut lex = Lexer::new(source, ctx);

    while let Some(c) = lex.cursor.at() {
        match c {
            c if is_blank(c) || c == '\n' => {
                lex.cursor.bump();
            }
            '/' if matches!(lex.cursor.peek(1), Some('/') | Some('*')) => comment_handler(&mut lex),
            c if c.is_ascii_alphabetic() || c == '_' => symbol_handler(&mut lex),
            c if c.is_ascii_digit() => number_handler(&mut lex),
            '\'' => char_handler(&mut lex),
            '"' => string_handler(&mut lex),
            c if OPERATOR_CHARS.contains(c) => operator_handler(&mut lex),
            c if SEPARATOR_CHARS.contains(c) => separator_handler(&mut lex),
            _ => {
                lex.cursor.bump();
            }
        }
    }

    kotlin_declaration_pass(ctx);

    debug!(
        "scanned {} tokens, {} comments, {} declarations",
        ctx.tokens.len(),
        ctx.comments.len(),
        ctx.declarations.len()
    );
}
