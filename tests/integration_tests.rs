//! Integration tests for end-to-end analysis.
//!
//! These tests drive the public API from a source file on disk through
//! scanning, checking and reporting, and run the `lexcheck` binary.

use std::{io::Write, path::Path};

use assert_cmd::Command;
use lexcheck::{
    analyze_file, analyze_source,
    checker::diagnostics::DiagnosticKind,
    config::AnalysisConfig,
    context::AnalysisContext,
    lexer::tokens::TokenKind,
    report::report::render,
};
use predicates::prelude::*;
use tempfile::NamedTempFile;

const JAVA_SOURCE: &str = r#"// Sample.java - exercises every diagnostic
package com.example.sample;

import java.util.List;

/* block
   comment */
public class Sample {
    public static void main() {
        int count = 10;
        float ratio = 2.5f;
        char grade = 'A';
        String label = "ok";

        count = "ten";
        grade = 7;
        ratio = 'r';

        whiel (count < 3) {
            total = count;
        }

        if (count == ) {
            return;
        }
    }
}
"#;

const KOTLIN_SOURCE: &str = r#"package com.example.kt

import kotlin.collections.List

fun main() {
    var x: Int
    val y: Float = 2.5f
    var a: Int = 3.14
    var c: Char = "hello"
    val name: String = "KotlinTest"
    vaar badVar = 5
    x = 10
    println(undeclared)
}
"#;

fn source_file(contents: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn count(ctx: &AnalysisContext, kind: DiagnosticKind) -> usize {
    ctx.diagnostics.iter().filter(|d| d.kind == kind).count()
}

#[test]
fn test_analyze_java_file() {
    let file = source_file(JAVA_SOURCE, ".java");
    let mut ctx = AnalysisContext::default();

    let source = analyze_file(file.path(), &mut ctx).unwrap();
    assert_eq!(source, JAVA_SOURCE);

    assert_eq!(ctx.comments.len(), 2);
    assert_eq!(ctx.comments[0].body, "// Sample.java - exercises every diagnostic");
    assert_eq!(ctx.comments[1].body, "/* block\n   comment */");

    let namespaces: Vec<&str> = ctx
        .tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Namespace)
        .map(|t| t.value.as_str())
        .collect();
    assert_eq!(namespaces, vec!["com.example.sample", "java.util.List"]);

    assert_eq!(ctx.declarations.lookup("count"), Some("int"));
    assert_eq!(ctx.declarations.lookup("ratio"), Some("float"));
    assert_eq!(ctx.declarations.lookup("grade"), Some("char"));
    assert_eq!(ctx.declarations.lookup("label"), Some("String"));

    // count = "ten", grade = 7, ratio = 'r'
    let mismatch_lines: Vec<u32> = ctx
        .diagnostics
        .iter()
        .filter(|d| d.kind == DiagnosticKind::TypeMismatch)
        .map(|d| d.line)
        .collect();
    assert_eq!(mismatch_lines, vec![15, 16, 17]);

    let misspelled: Vec<&str> = ctx
        .diagnostics
        .iter()
        .filter(|d| d.kind == DiagnosticKind::MisspelledKeyword)
        .map(|d| d.message.as_str())
        .collect();
    assert_eq!(misspelled, vec!["'whiel' resembles a keyword (did you mean 'while'?)"]);

    let undeclared: Vec<(String, u32)> = ctx
        .diagnostics
        .iter()
        .filter(|d| d.kind == DiagnosticKind::UseBeforeDeclaration)
        .map(|d| (d.message.clone(), d.line))
        .collect();
    assert_eq!(
        undeclared,
        vec![
            ("'whiel' used before declaration".to_string(), 19),
            ("'total' used before declaration".to_string(), 20),
        ]
    );

    let relational: Vec<(String, u32)> = ctx
        .diagnostics
        .iter()
        .filter(|d| d.kind == DiagnosticKind::RelationalOperatorMisuse)
        .map(|d| (d.message.clone(), d.line))
        .collect();
    assert_eq!(relational, vec![("Operator '==' has invalid operands".to_string(), 23)]);

    assert_eq!(ctx.summary().total, 7);
}

#[test]
fn test_analyze_kotlin_file() {
    let file = source_file(KOTLIN_SOURCE, ".kt");
    let mut ctx = AnalysisContext::default();
    analyze_file(file.path(), &mut ctx).unwrap();

    // Positional sniffing records `var`/`val` before the annotation is seen.
    assert_eq!(ctx.declarations.lookup("x"), Some("var"));
    assert_eq!(ctx.declarations.lookup("y"), Some("val"));

    let mismatches: Vec<(String, u32)> = ctx
        .diagnostics
        .iter()
        .filter(|d| d.kind == DiagnosticKind::TypeMismatch)
        .map(|d| (d.message.clone(), d.line))
        .collect();
    assert_eq!(
        mismatches,
        vec![
            ("Int 'a' cannot take '3.14' (float literal)".to_string(), 8),
            ("Char 'c' must take a char literal, got '\"hello\"' (string literal)".to_string(), 9),
        ]
    );

    assert_eq!(count(&ctx, DiagnosticKind::MisspelledKeyword), 1);
    let undeclared: Vec<&str> = ctx
        .diagnostics
        .iter()
        .filter(|d| d.kind == DiagnosticKind::UseBeforeDeclaration)
        .map(|d| d.message.as_str())
        .collect();
    assert_eq!(
        undeclared,
        vec![
            "'vaar' used before declaration",
            "'badVar' used before declaration",
            "'println' used before declaration",
            "'undeclared' used before declaration",
        ]
    );
    assert_eq!(count(&ctx, DiagnosticKind::RelationalOperatorMisuse), 0);
}

#[test]
fn test_missing_file_is_fatal() {
    let mut ctx = AnalysisContext::default();
    analyze_source("int a = 1;", &mut ctx);

    let result = analyze_file(Path::new("/definitely/not/here/Input.java"), &mut ctx);

    let error = result.unwrap_err();
    assert_eq!(error.get_error_name(), "CouldNotOpen");
    assert!(ctx.tokens.is_empty());
    assert!(ctx.comments.is_empty());
    assert!(ctx.diagnostics.is_empty());
}

#[test]
fn test_repeated_runs_are_identical() {
    let file = source_file(JAVA_SOURCE, ".java");
    let mut ctx = AnalysisContext::default();

    analyze_file(file.path(), &mut ctx).unwrap();
    let first = render(&ctx, "Sample.java", JAVA_SOURCE, &AnalysisConfig::default());
    let tokens = ctx.tokens.clone();
    let comments = ctx.comments.clone();
    let diagnostics = ctx.diagnostics.clone();

    analyze_file(file.path(), &mut ctx).unwrap();
    let second = render(&ctx, "Sample.java", JAVA_SOURCE, &AnalysisConfig::default());

    assert_eq!(ctx.tokens, tokens);
    assert_eq!(ctx.comments, comments);
    assert_eq!(ctx.diagnostics, diagnostics);
    assert_eq!(first, second);
}

#[test]
fn test_unterminated_string_at_eof() {
    let mut ctx = AnalysisContext::default();
    analyze_source("String s = \"open", &mut ctx);

    let last = ctx.tokens.last().unwrap();
    assert_eq!(last.kind, TokenKind::String);
    assert_eq!(last.value, "\"open");
}

#[test]
fn test_cli_reports_file() {
    let file = source_file("int x = \"hi\"; // E1 test\n", ".java");

    Command::cargo_bin("lexcheck")
        .unwrap()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("E1-TypeMismatch: int 'x' cannot take '\"hi\"'"))
        .stdout(predicate::str::contains("// E1 test"))
        .stdout(predicate::str::contains("Summary: E1=1  E2=0  E3=0  E4=0   Total=1"));
}

#[test]
fn test_cli_clean_file() {
    let file = source_file("int x = 5;\n", ".java");

    Command::cargo_bin("lexcheck")
        .unwrap()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("(no comments found)"))
        .stdout(predicate::str::contains("No errors found."));
}

#[test]
fn test_cli_missing_file_fails() {
    Command::cargo_bin("lexcheck")
        .unwrap()
        .arg("/definitely/not/here/Input.kt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: CouldNotOpen"))
        .stderr(predicate::str::contains("could not analyze /definitely/not/here/Input.kt"));
}

#[test]
fn test_cli_token_limit_from_env() {
    let file = source_file("a b c d\n", ".kt");

    Command::cargo_bin("lexcheck")
        .unwrap()
        .env("LEXCHECK_MAX_TOKENS", "2")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("note: 2 tokens dropped after reaching the limit of 2"));
}
