//! Pure classification helpers over raw lexemes.
//!
//! Everything in here works on text alone: keyword lookup, the literal shape
//! predicates used by the assignment check, and the edit distance used to spot
//! misspelled keywords.

use std::fmt::Display;

use lazy_static::lazy_static;
use regex::Regex;

use super::tokens::{TokenKind, KEYWORDS, RELATIONAL_OPERATORS, RESERVED_LOOKUP};

/// Inputs longer than this skip the exact distance computation.
pub const LEVENSHTEIN_GUARD: usize = 300;

/// Maximum edit distance at which an identifier is considered keyword-like.
pub const KEYWORD_DISTANCE: usize = 2;

lazy_static! {
    static ref INT_SHAPE: Regex = Regex::new(r"^[+-]?[0-9]+$").unwrap();
    static ref FLOAT_MARKER: Regex = Regex::new(r"[.fF]").unwrap();
}

pub fn is_keyword(word: &str) -> bool {
    RESERVED_LOOKUP.contains(word)
}

/// Classifies a word-shaped lexeme as either a keyword or an identifier.
pub fn classify(lexeme: &str) -> TokenKind {
    if is_keyword(lexeme) {
        TokenKind::Keyword
    } else {
        TokenKind::Identifier
    }
}

pub fn is_relational(lexeme: &str) -> bool {
    RELATIONAL_OPERATORS.contains(&lexeme)
}

/// Edit distance with unit cost for insert, delete and substitute.
///
/// Above [`LEVENSHTEIN_GUARD`] characters the result degrades to
/// `|len(a) - len(b)| + 3`, which never counts as keyword-like.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.len() > LEVENSHTEIN_GUARD || b.len() > LEVENSHTEIN_GUARD {
        return a.len().abs_diff(b.len()) + 3;
    }

    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            current[j + 1] = if ca == cb {
                previous[j]
            } else {
                1 + previous[j].min(previous[j + 1]).min(current[j])
            };
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}

pub fn is_keyword_like(word: &str) -> bool {
    word.chars().count() >= 3
        && KEYWORDS
            .iter()
            .any(|keyword| levenshtein(word, keyword) <= KEYWORD_DISTANCE)
}

/// The nearest keyword within [`KEYWORD_DISTANCE`], earliest in keyword order on ties.
pub fn closest_keyword(word: &str) -> Option<&'static str> {
    if word.chars().count() < 3 {
        return None;
    }

    KEYWORDS
        .iter()
        .map(|keyword| (levenshtein(word, keyword), *keyword))
        .filter(|(distance, _)| *distance <= KEYWORD_DISTANCE)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, keyword)| keyword)
}

pub fn is_float_shaped(value: &str) -> bool {
    FLOAT_MARKER.is_match(value)
}

pub fn is_char_literal(value: &str) -> bool {
    value.chars().count() >= 3 && value.starts_with('\'') && value.ends_with('\'')
}

pub fn is_string_literal(value: &str) -> bool {
    value.chars().count() >= 2 && value.starts_with('"') && value.ends_with('"')
}

pub fn is_int_shaped(value: &str) -> bool {
    INT_SHAPE.is_match(value)
}

/// Rough shape of a value token, used to describe rejected assignments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueShape {
    Int,
    Float,
    Char,
    String,
    Other,
}

impl ValueShape {
    pub fn of(value: &str) -> Self {
        if is_string_literal(value) {
            ValueShape::String
        } else if is_char_literal(value) {
            ValueShape::Char
        } else if is_int_shaped(value) {
            ValueShape::Int
        } else if value.starts_with(|c: char| c.is_ascii_digit()) && is_float_shaped(value) {
            ValueShape::Float
        } else {
            ValueShape::Other
        }
    }
}

impl Display for ValueShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueShape::Int => write!(f, "int literal"),
            ValueShape::Float => write!(f, "float literal"),
            ValueShape::Char => write!(f, "char literal"),
            ValueShape::String => write!(f, "string literal"),
            ValueShape::Other => write!(f, "value"),
        }
    }
}
