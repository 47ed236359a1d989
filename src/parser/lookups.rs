use std::collections::HashMap;

use crate::{
    ast::ast::Node, errors::errors::FrontendResult, lexer::tokens::TokenKind,
    type_checker::scope::Scope,
};

use super::{expr::*, parser::Parser, stmt::*};

pub type StmtHandler<R> = fn(&mut Parser<'_, R>, &mut Scope<'_>) -> FrontendResult<Node>;
pub type NUDHandler<R> = fn(&mut Parser<'_, R>, &Scope<'_>) -> FrontendResult<Node>;

pub fn create_token_lookups<R: std::io::BufRead>(parser: &mut Parser<'_, R>) {
    // Literals and symbols
    parser.nud(TokenKind::IntLiteral, parse_literal_expr);
    parser.nud(TokenKind::FloatLiteral, parse_literal_expr);
    parser.nud(TokenKind::BoolLiteral, parse_literal_expr);
    parser.nud(TokenKind::Identifier, parse_symbol_expr);
    parser.nud(TokenKind::OpenParen, parse_grouping_expr);

    // Statements
    parser.stmt(TokenKind::VarDecl, parse_declaration);
    parser.stmt(TokenKind::ConstDecl, parse_declaration);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup<R> = HashMap<TokenKind, StmtHandler<R>>;
pub type NUDLookup<R> = HashMap<TokenKind, NUDHandler<R>>;
