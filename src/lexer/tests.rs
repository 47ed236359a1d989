//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords, type names and identifiers
//! - Integer, float and scientific literals with defaulted parts
//! - Maximal munch for operators
//! - Line tracking
//! - Lexical error cases
//! - Character pushback

use std::io::Cursor;

use pretty_assertions::assert_eq;

use crate::{errors::errors::ErrorImpl, reserved::reserved::ReservedRegistry};

use super::{
    lexer::{tokenize, Tokenizer},
    source::CharacterSource,
    tokens::{Token, TokenKind},
};

fn lex(source: &str) -> Vec<Token> {
    let registry = ReservedRegistry::standard();
    tokenize(Cursor::new(source), &registry).unwrap()
}

fn lex_error(source: &str) -> ErrorImpl {
    let registry = ReservedRegistry::standard();
    let error = tokenize(Cursor::new(source), &registry).unwrap_err();
    error.as_source().unwrap().get_impl().clone()
}

fn token(kind: TokenKind, value: &str) -> Token {
    Token::new(kind, value, 0)
}

#[test]
fn test_tokenize_keywords_and_types() {
    let tokens = lex("var const true false Int Float Bool");

    assert_eq!(tokens[0].kind, TokenKind::VarDecl);
    assert_eq!(tokens[1].kind, TokenKind::ConstDecl);
    assert_eq!(tokens[2].kind, TokenKind::BoolLiteral);
    assert_eq!(tokens[3].kind, TokenKind::BoolLiteral);
    assert_eq!(tokens[4].kind, TokenKind::TypeName);
    assert_eq!(tokens[5].kind, TokenKind::TypeName);
    assert_eq!(tokens[6].kind, TokenKind::TypeName);
    assert_eq!(tokens[7].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = lex("foo bar baz_123 _underscore CamelCase variable");

    assert_eq!(tokens[0], token(TokenKind::Identifier, "foo"));
    assert_eq!(tokens[1], token(TokenKind::Identifier, "bar"));
    assert_eq!(tokens[2], token(TokenKind::Identifier, "baz_123"));
    assert_eq!(tokens[3], token(TokenKind::Identifier, "_underscore"));
    assert_eq!(tokens[4], token(TokenKind::Identifier, "CamelCase"));
    assert_eq!(tokens[5], token(TokenKind::Identifier, "variable"));
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators_and_literals() {
    let expected = vec![
        token(TokenKind::IntLiteral, "52"),
        token(TokenKind::Plus, "+"),
        token(TokenKind::Dash, "-"),
        token(TokenKind::OpenParen, "("),
        token(TokenKind::Dash, "-"),
        token(TokenKind::FloatLiteral, "25.0"),
        token(TokenKind::CloseParen, ")"),
        token(TokenKind::Dash, "-"),
        token(TokenKind::OpenParen, "("),
        token(TokenKind::FloatLiteral, "32.4"),
        token(TokenKind::Dash, "-"),
        token(TokenKind::Plus, "+"),
        token(TokenKind::FloatLiteral, "0.0e0.0"),
        token(TokenKind::CloseParen, ")"),
        token(TokenKind::Slash, "/"),
        token(TokenKind::FloatLiteral, "0.9"),
        token(TokenKind::Star, "*"),
        token(TokenKind::FloatLiteral, "0.0"),
        token(TokenKind::EOF, "EOF"),
    ];

    assert_eq!(lex("52+-(-25.)-(32.4-+.e.)/.9*."), expected);
}

#[test]
fn test_tokenize_declaration_with_whitespace() {
    let expected = vec![
        token(TokenKind::VarDecl, "var"),
        token(TokenKind::Identifier, "b"),
        token(TokenKind::Assignment, "="),
        token(TokenKind::Identifier, "b"),
        token(TokenKind::Plus, "+"),
        token(TokenKind::Dash, "-"),
        token(TokenKind::FloatLiteral, "0.0e+0.5"),
        token(TokenKind::Star, "*"),
        token(TokenKind::Identifier, "a"),
        token(TokenKind::Slash, "/"),
        token(TokenKind::Identifier, "a"),
        token(TokenKind::Star, "*"),
        token(TokenKind::OpenParen, "("),
        token(TokenKind::OpenParen, "("),
        token(TokenKind::FloatLiteral, "2.0e-1"),
        token(TokenKind::Dash, "-"),
        token(TokenKind::FloatLiteral, "67.0"),
        token(TokenKind::Plus, "+"),
        token(TokenKind::FloatLiteral, "71e3"),
        token(TokenKind::Star, "*"),
        token(TokenKind::IntLiteral, "21"),
        token(TokenKind::CloseParen, ")"),
        token(TokenKind::CloseParen, ")"),
        token(TokenKind::CloseParen, ")"),
        token(TokenKind::EOF, "EOF"),
    ];

    assert_eq!(
        lex("  var b=b +\t-.e+.5 *  a/a  *((2.e-1-67.+71e3*21)))\t"),
        expected
    );
}

#[test]
fn test_tokenize_numbers() {
    let tokens = lex("52 25. .e. 3.14 0 1e2e3");

    assert_eq!(tokens[0], token(TokenKind::IntLiteral, "52"));
    assert_eq!(tokens[1], token(TokenKind::FloatLiteral, "25.0"));
    assert_eq!(tokens[2], token(TokenKind::FloatLiteral, "0.0e0.0"));
    assert_eq!(tokens[3], token(TokenKind::FloatLiteral, "3.14"));
    assert_eq!(tokens[4], token(TokenKind::IntLiteral, "0"));
    assert_eq!(tokens[5], token(TokenKind::FloatLiteral, "1e2"));
    assert_eq!(tokens[6], token(TokenKind::Identifier, "e3"));
    assert_eq!(tokens[7].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_maximal_munch() {
    let tokens = lex("** * == = != ! <= < >= > && & || |");
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Pow,
            TokenKind::Star,
            TokenKind::Equals,
            TokenKind::Assignment,
            TokenKind::NotEquals,
            TokenKind::Not,
            TokenKind::LessEquals,
            TokenKind::Less,
            TokenKind::GreaterEquals,
            TokenKind::Greater,
            TokenKind::And,
            TokenKind::Ampersand,
            TokenKind::Or,
            TokenKind::Pipe,
            TokenKind::EOF,
        ]
    );

    let tokens = lex("***");
    assert_eq!(tokens[0].kind, TokenKind::Pow);
    assert_eq!(tokens[1].kind, TokenKind::Star);
}

#[test]
fn test_tokenize_punctuation() {
    let tokens = lex("{ a : Int ; } ~");
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::OpenCurly,
            TokenKind::Identifier,
            TokenKind::Colon,
            TokenKind::TypeName,
            TokenKind::Semicolon,
            TokenKind::CloseCurly,
            TokenKind::Tilde,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_token_kinds_ignore_whitespace() {
    let compact: Vec<TokenKind> = lex("var a:Int=1*(2+b);").iter().map(|t| t.kind).collect();
    let spaced: Vec<TokenKind> = lex("var\ta : Int\n=  1 *\n( 2 + b ) ;")
        .iter()
        .map(|t| t.kind)
        .collect();

    assert_eq!(compact, spaced);
}

#[test]
fn test_tokenize_newlines() {
    let tokens = lex("var x = 1;\n\nvar y\n= 2.5;");

    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[3].line, 1);
    assert_eq!(tokens[5].value, "var");
    assert_eq!(tokens[5].line, 3);
    assert_eq!(tokens[7].value, "=");
    assert_eq!(tokens[7].line, 4);
    assert_eq!(tokens[8].value, "2.5");
    assert_eq!(tokens[8].line, 4);
}

#[test]
fn test_tokenize_empty_source() {
    let tokens = lex("   \n\t ");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
    assert_eq!(tokens[0].line, 2);
}

#[test]
fn test_invalid_syntax() {
    assert_eq!(lex_error("a = @"), ErrorImpl::InvalidSyntax { character: '@' });
    assert_eq!(lex_error("#"), ErrorImpl::InvalidSyntax { character: '#' });
}

#[test]
fn test_invalid_character_in_identifier() {
    assert_eq!(
        lex_error("abc$d"),
        ErrorImpl::InvalidCharacter {
            character: '$',
            after: String::from("abc")
        }
    );
}

#[test]
fn test_invalid_numbers() {
    assert_eq!(
        lex_error("12a"),
        ErrorImpl::InvalidNumber {
            after: String::from("12")
        }
    );
    assert_eq!(
        lex_error("1.2.3"),
        ErrorImpl::InvalidNumber {
            after: String::from("1.2")
        }
    );
    assert_eq!(
        lex_error("3e+x"),
        ErrorImpl::InvalidNumber {
            after: String::from("3e+")
        }
    );
}

#[test]
fn test_error_line() {
    let registry = ReservedRegistry::standard();
    let error = tokenize(Cursor::new("a;\nb;\n  12x"), &registry).unwrap_err();

    assert_eq!(error.as_source().unwrap().get_line(), 3);
    assert_eq!(
        error.to_string(),
        "invalid numeric expression after '12' on line 3"
    );
}

#[test]
fn test_lookahead_is_idempotent() {
    let registry = ReservedRegistry::standard();
    let mut tokenizer = Tokenizer::new(Cursor::new("a + 1"), &registry);

    assert_eq!(tokenizer.lookahead().unwrap().value, "a");
    assert_eq!(tokenizer.lookahead().unwrap().value, "a");
    assert_eq!(tokenizer.consume().unwrap().value, "a");
    assert_eq!(tokenizer.consume().unwrap().kind, TokenKind::Plus);
    assert_eq!(tokenizer.lookahead().unwrap().kind, TokenKind::IntLiteral);
    assert_eq!(tokenizer.consume().unwrap().value, "1");
    assert_eq!(tokenizer.consume().unwrap().kind, TokenKind::EOF);
    assert_eq!(tokenizer.consume().unwrap().kind, TokenKind::EOF);
}

#[test]
fn test_character_source_put_back() {
    let mut source = CharacterSource::new(Cursor::new("ab\ncd"));

    assert_eq!(source.read().unwrap(), Some('a'));
    source.put_back("xy");
    assert_eq!(source.peek().unwrap(), Some('x'));
    assert_eq!(source.read().unwrap(), Some('x'));
    assert_eq!(source.read().unwrap(), Some('y'));
    assert_eq!(source.read().unwrap(), Some('b'));
    assert_eq!(source.read().unwrap(), Some('\n'));
    assert_eq!(source.read().unwrap(), Some('c'));
    assert_eq!(source.read().unwrap(), Some('d'));
    assert_eq!(source.read().unwrap(), None);
    assert_eq!(source.peek().unwrap(), None);

    source.put_back("z");
    assert_eq!(source.read().unwrap(), Some('z'));
    assert_eq!(source.read().unwrap(), None);
}

#[test]
#[should_panic]
fn test_character_source_rejects_empty_put_back() {
    let mut source = CharacterSource::new(Cursor::new("abc"));
    source.put_back("");
}
