use lazy_static::lazy_static;
use serde::Serialize;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("var", TokenKind::VarDecl);
        map.insert("const", TokenKind::ConstDecl);
        map.insert("true", TokenKind::BoolLiteral);
        map.insert("false", TokenKind::BoolLiteral);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
pub enum TokenKind {
    EOF,
    Identifier,
    BoolLiteral,
    IntLiteral,
    FloatLiteral,
    TypeName,

    VarDecl,
    ConstDecl,

    Plus,
    Dash,
    Star,
    Slash,
    Percent,
    Pow, // **

    Tilde,
    Ampersand,
    Pipe,
    Not,
    And,
    Or,

    Greater,
    Less,
    Equals,    // ==
    NotEquals, // !=
    GreaterEquals,
    LessEquals,

    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    Colon,
    Semicolon,
    Dot,
    Assignment, // =

    Unknown,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A classified lexeme. The line is where the lexeme starts.
///
/// Equality compares lexeme and kind only; the line is metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    #[serde(skip)]
    pub line: u32,
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.value == other.value
    }
}

impl Eq for Token {}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} '{}'", self.kind, self.value)
    }
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, line: u32) -> Self {
        Token {
            kind,
            value: value.into(),
            line,
        }
    }

    fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn debug(&self) {
        if self.is_one_of_many(&[
            TokenKind::Identifier,
            TokenKind::TypeName,
            TokenKind::BoolLiteral,
            TokenKind::IntLiteral,
            TokenKind::FloatLiteral,
        ]) {
            println!("{} ({})", self.kind, self.value);
        } else {
            println!("{} ()", self.kind);
        }
    }
}
