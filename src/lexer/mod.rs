//! Lexical analysis of Java/Kotlin-like source text.
//!
//! The scanner walks the source one character at a time and produces:
//!
//! - An ordered token list (keywords, identifiers, literals, operators, separators
//!   and `package`/`import` namespaces)
//! - The comments it skipped, verbatim
//! - Declarations sniffed from `TYPE IDENT` and Kotlin `var`/`val` patterns

pub mod classify;
pub mod cursor;
pub mod lexer;
pub mod tokens;
