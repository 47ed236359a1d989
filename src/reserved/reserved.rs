use std::{
    cmp::Ordering,
    collections::{HashMap, HashSet},
};

use crate::{
    ast::types::TypeDescriptor,
    lexer::tokens::{TokenKind, RESERVED_LOOKUP},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    LeftToRight,
    RightToLeft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fixity {
    Prefix,
    Infix,
    Postfix,
}

/// How an operator token binds. Punctuation is registered with
/// precedence 0 and no fixity so it can still be lexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorDescriptor {
    pub kind: TokenKind,
    pub precedence: u32,
    pub associativity: Associativity,
    pub fixity: &'static [Fixity],
}

impl OperatorDescriptor {
    pub fn has_fixity(&self, fixity: Fixity) -> bool {
        self.fixity.contains(&fixity)
    }
}

/// What a reserved lexeme stands for.
#[derive(Debug, Clone, PartialEq)]
pub enum Reserved {
    Keyword(TokenKind),
    Type(TypeDescriptor),
    Operator(OperatorDescriptor),
}

/// Keywords, built-in types and operators of the language.
///
/// Built once and shared by reference between the tokenizer and the parser.
#[derive(Debug, Clone, Default)]
pub struct ReservedRegistry {
    lexemes: HashMap<String, Reserved>,
    operators: HashMap<TokenKind, OperatorDescriptor>,
    literal_types: HashMap<TokenKind, TypeDescriptor>,
    special_chars: HashSet<char>,
}

const PREFIX_INFIX: &[Fixity] = &[Fixity::Prefix, Fixity::Infix];
const INFIX: &[Fixity] = &[Fixity::Infix];
const NONE: &[Fixity] = &[];

impl ReservedRegistry {
    pub fn new() -> Self {
        let mut registry = ReservedRegistry::default();
        registry.special_chars.insert('_');
        registry
    }

    /// The registry of the standard language.
    pub fn standard() -> Self {
        use Associativity::*;

        let mut registry = ReservedRegistry::new();

        for (word, kind) in RESERVED_LOOKUP.iter() {
            registry.register_keyword(word, *kind);
        }

        registry.register_type(TypeDescriptor::int());
        registry.register_type(TypeDescriptor::float());
        registry.register_type(TypeDescriptor::bool());

        registry.register_literal(TokenKind::IntLiteral, TypeDescriptor::int());
        registry.register_literal(TokenKind::FloatLiteral, TypeDescriptor::float());
        registry.register_literal(TokenKind::BoolLiteral, TypeDescriptor::bool());

        // Assignment
        registry.register_operator("=", TokenKind::Assignment, 1, RightToLeft, INFIX);

        // Logical and bitwise
        registry.register_operator("||", TokenKind::Or, 2, LeftToRight, INFIX);
        registry.register_operator("&&", TokenKind::And, 3, LeftToRight, INFIX);
        registry.register_operator("|", TokenKind::Pipe, 4, LeftToRight, INFIX);
        registry.register_operator("&", TokenKind::Ampersand, 5, LeftToRight, INFIX);

        // Relational
        registry.register_operator("==", TokenKind::Equals, 6, LeftToRight, INFIX);
        registry.register_operator("!=", TokenKind::NotEquals, 6, LeftToRight, INFIX);
        registry.register_operator("<", TokenKind::Less, 7, LeftToRight, INFIX);
        registry.register_operator(">", TokenKind::Greater, 7, LeftToRight, INFIX);
        registry.register_operator("<=", TokenKind::LessEquals, 7, LeftToRight, INFIX);
        registry.register_operator(">=", TokenKind::GreaterEquals, 7, LeftToRight, INFIX);

        // Additive and multiplicative
        registry.register_operator("+", TokenKind::Plus, 10, LeftToRight, PREFIX_INFIX);
        registry.register_operator("-", TokenKind::Dash, 10, LeftToRight, PREFIX_INFIX);
        registry.register_operator("*", TokenKind::Star, 20, LeftToRight, INFIX);
        registry.register_operator("/", TokenKind::Slash, 20, LeftToRight, INFIX);
        registry.register_operator("%", TokenKind::Percent, 20, LeftToRight, INFIX);
        registry.register_operator("**", TokenKind::Pow, 30, LeftToRight, INFIX);

        // Lexable only
        registry.register_operator("~", TokenKind::Tilde, 40, LeftToRight, NONE);
        registry.register_operator("!", TokenKind::Not, 40, LeftToRight, NONE);

        // Punctuation
        registry.register_operator("(", TokenKind::OpenParen, 0, LeftToRight, NONE);
        registry.register_operator(")", TokenKind::CloseParen, 0, LeftToRight, NONE);
        registry.register_operator("{", TokenKind::OpenCurly, 0, LeftToRight, NONE);
        registry.register_operator("}", TokenKind::CloseCurly, 0, LeftToRight, NONE);
        registry.register_operator(":", TokenKind::Colon, 0, LeftToRight, NONE);
        registry.register_operator(";", TokenKind::Semicolon, 0, LeftToRight, NONE);
        registry.register_operator(".", TokenKind::Dot, 0, LeftToRight, NONE);

        registry
    }

    pub fn register_keyword(&mut self, word: &str, kind: TokenKind) {
        self.lexemes.insert(word.to_string(), Reserved::Keyword(kind));
    }

    pub fn register_type(&mut self, data_type: TypeDescriptor) {
        self.lexemes.insert(data_type.id.clone(), Reserved::Type(data_type));
    }

    /// Maps a literal token kind to the type of the values it denotes.
    pub fn register_literal(&mut self, kind: TokenKind, data_type: TypeDescriptor) {
        self.literal_types.insert(kind, data_type);
    }

    /// Registers an operator lexeme. Every character of the lexeme becomes
    /// a special character that terminates identifiers.
    pub fn register_operator(
        &mut self,
        lexeme: &str,
        kind: TokenKind,
        precedence: u32,
        associativity: Associativity,
        fixity: &'static [Fixity],
    ) {
        let descriptor = OperatorDescriptor {
            kind,
            precedence,
            associativity,
            fixity,
        };

        self.special_chars.extend(lexeme.chars());
        self.operators.insert(kind, descriptor);
        self.lexemes.insert(lexeme.to_string(), Reserved::Operator(descriptor));
    }

    pub fn lookup(&self, lexeme: &str) -> Option<&Reserved> {
        self.lexemes.get(lexeme)
    }

    /// Kind of a completed identifier-class lexeme.
    pub fn classify_word(&self, word: &str) -> TokenKind {
        match self.lookup(word) {
            Some(Reserved::Keyword(kind)) => *kind,
            Some(Reserved::Type(_)) => TokenKind::TypeName,
            _ => TokenKind::Identifier,
        }
    }

    pub fn operator_kind(&self, lexeme: &str) -> Option<TokenKind> {
        match self.lookup(lexeme) {
            Some(Reserved::Operator(descriptor)) => Some(descriptor.kind),
            _ => None,
        }
    }

    pub fn operator(&self, kind: TokenKind) -> Option<&OperatorDescriptor> {
        self.operators.get(&kind)
    }

    fn has_fixity(&self, kind: TokenKind, fixity: Fixity) -> bool {
        self.operator(kind)
            .is_some_and(|descriptor| descriptor.has_fixity(fixity))
    }

    pub fn is_prefix(&self, kind: TokenKind) -> bool {
        self.has_fixity(kind, Fixity::Prefix)
    }

    pub fn is_infix(&self, kind: TokenKind) -> bool {
        self.has_fixity(kind, Fixity::Infix)
    }

    pub fn is_postfix(&self, kind: TokenKind) -> bool {
        self.has_fixity(kind, Fixity::Postfix)
    }

    /// Decides which of two adjacent operators binds the operand between them.
    ///
    /// `Greater` means `outer` (already seen) wins, `Less` means `incoming`
    /// wins. On equal precedence the outer operator wins only when it is
    /// left-associative. Unregistered kinds compare as precedence 0.
    pub fn cmp_precedence(&self, outer: TokenKind, incoming: TokenKind) -> Ordering {
        let precedence = |kind| self.operator(kind).map_or(0, |op| op.precedence);

        match precedence(outer).cmp(&precedence(incoming)) {
            Ordering::Equal => match self.operator(outer).map(|op| op.associativity) {
                Some(Associativity::LeftToRight) => Ordering::Greater,
                _ => Ordering::Less,
            },
            ordering => ordering,
        }
    }

    pub fn type_named(&self, name: &str) -> Option<&TypeDescriptor> {
        match self.lookup(name) {
            Some(Reserved::Type(data_type)) => Some(data_type),
            _ => None,
        }
    }

    pub fn literal_type(&self, kind: TokenKind) -> Option<&TypeDescriptor> {
        self.literal_types.get(&kind)
    }

    pub fn is_special_char(&self, c: char) -> bool {
        self.special_chars.contains(&c)
    }
}
