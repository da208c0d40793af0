use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

/// Java and Kotlin keywords plus the primitive and boxed type names, in lookup order.
pub const KEYWORDS: [&str; 40] = [
    "int", "float", "double", "char", "if", "else", "for", "while", "class",
    "public", "private", "return", "static", "void", "new",
    "fun", "var", "val", "when", "is", "in", "object", "null", "true", "false",
    "package", "import", "override", "data", "sealed", "lateinit",
    "Int", "Float", "Double", "Char", "String", "Boolean", "Long", "Short", "Byte",
];

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashSet<&'static str> = KEYWORDS.iter().copied().collect();
}

pub const RELATIONAL_OPERATORS: [&str; 6] = ["<", ">", "<=", ">=", "==", "!="];

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Number,
    Operator,
    Separator,
    String,
    Char,
    Namespace,
}

impl TokenKind {
    pub fn label(&self) -> &'static str {
        match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Separator => "SEPARATOR",
            TokenKind::String => "STRING",
            TokenKind::Char => "CHAR",
            TokenKind::Namespace => "NAMESPACE",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub line: u32,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) @ {}", self.kind, self.value, self.line)
    }
}

impl Token {
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn is_keyword(&self, value: &str) -> bool {
        self.kind == TokenKind::Keyword && self.value == value
    }
}

/// A comment captured verbatim, delimiters included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub body: String,
}

impl Display for Comment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.body)
    }
}
