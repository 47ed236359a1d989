use std::io::BufRead;

use log::debug;

use crate::{
    ast::{ast::Node, types::TypeDescriptor},
    errors::errors::{ErrorImpl, FrontendResult},
    lexer::tokens::TokenKind,
    type_checker::{
        scope::{Scope, Symbol},
        type_checker::unify_declaration,
    },
    MK_ERROR,
};

use super::{expr::parse_expr, parser::Parser};

/// A statement through the statement table, or an expression statement.
pub fn parse_stmt<R: BufRead>(
    parser: &mut Parser<'_, R>,
    scope: &mut Scope<'_>,
) -> FrontendResult<Option<Node>> {
    let kind = parser.current_token_kind()?;

    if let Some(handler) = parser.get_stmt_lookup().get(&kind).copied() {
        return handler(parser, scope).map(Some);
    }

    parse_expr(parser, scope)
}

/// `var|const name (: Type)? (= expr)? ;`
///
/// The symbol is registered before the initializer is parsed, so the
/// initializer sees the new name. With an initializer the result is an
/// `Assignment` whose target is the `Declaration`.
pub fn parse_declaration<R: BufRead>(
    parser: &mut Parser<'_, R>,
    scope: &mut Scope<'_>,
) -> FrontendResult<Node> {
    let keyword = parser.consume()?;
    let mutable = keyword.kind == TokenKind::VarDecl;

    let name = parser.expect_error(TokenKind::Identifier, Some(ErrorImpl::ExpectedVariableName))?;
    let declared = parse_type_annotation(parser)?;

    debug!(
        "declaring {} '{}' on line {}",
        keyword.value, name.value, name.line
    );

    scope.register(Symbol::new(name.value.clone(), mutable, declared.clone()), name.line)?;

    let Some(operator) = parser.accept(TokenKind::Assignment)? else {
        if declared.is_none() {
            return Err(MK_ERROR!(
                ErrorImpl::UndeterminedType { id: name.value },
                name.line
            ));
        }

        parser.expect_error(
            TokenKind::Semicolon,
            Some(ErrorImpl::MissingToken {
                expected: String::from(";"),
            }),
        )?;

        return Ok(Node::Declaration {
            name,
            data_type: declared,
            mutable,
        });
    };

    let value = match parse_expr(parser, scope)? {
        Some(value) if !value.is_empty() => value,
        _ => return Err(MK_ERROR!(ErrorImpl::EmptyInitializer, operator.line)),
    };

    let resolved = unify_declaration(declared.as_ref(), value.get_type(), operator.line)?;
    scope.resolve_type(&name.value, resolved.clone());

    Ok(Node::Assignment {
        operator,
        data_type: Some(resolved.clone()),
        target: Box::new(Node::Declaration {
            name,
            data_type: Some(resolved),
            mutable,
        }),
        value: Box::new(value),
    })
}

/// `(: TypeName)?`
pub fn parse_type_annotation<R: BufRead>(
    parser: &mut Parser<'_, R>,
) -> FrontendResult<Option<TypeDescriptor>> {
    if parser.accept(TokenKind::Colon)?.is_none() {
        return Ok(None);
    }

    let type_name = parser.expect_error(TokenKind::TypeName, Some(ErrorImpl::ExpectedTypeName))?;

    match parser.registry().type_named(&type_name.value) {
        Some(data_type) => Ok(Some(data_type.clone())),
        None => Err(MK_ERROR!(ErrorImpl::ExpectedTypeName, type_name.line)),
    }
}

/// `{ (statement | block)* }` in a new scope chained to `parent`.
///
/// Returns `None` without consuming anything when the next token is not
/// `{`. Bare `;` statements and empty nested blocks are dropped.
pub fn parse_block_scope<R: BufRead>(
    parser: &mut Parser<'_, R>,
    parent: &Scope<'_>,
) -> FrontendResult<Option<Node>> {
    let Some(open) = parser.accept(TokenKind::OpenCurly)? else {
        return Ok(None);
    };

    debug!("entering block on line {}", open.line);
    parser.enter()?;

    let mut scope = Scope::child(parent);
    let statements = parse_scope_body(parser, &mut scope)?;

    parser.expect_error(
        TokenKind::CloseCurly,
        Some(ErrorImpl::MissingToken {
            expected: String::from("}"),
        }),
    )?;
    parser.leave();

    debug!(
        "leaving block opened on line {} with {} symbols",
        open.line,
        scope.len()
    );
    Ok(Some(Node::Scope { statements }))
}

fn parse_scope_body<R: BufRead>(
    parser: &mut Parser<'_, R>,
    scope: &mut Scope<'_>,
) -> FrontendResult<Vec<Node>> {
    let mut statements = vec![];

    loop {
        let mut progressed = false;

        if let Some(stmt) = parse_stmt(parser, scope)? {
            progressed = true;
            if !stmt.is_empty() {
                statements.push(stmt);
            }
        }

        if let Some(block) = parse_block_scope(parser, scope)? {
            progressed = true;
            if !block.children().is_empty() {
                statements.push(block);
            }
        }

        if !progressed {
            return Ok(statements);
        }
    }
}

/// One top-level unit: a statement or a block.
///
/// Yields `None` for a bare `;` or an empty block. A token that starts
/// neither is an error.
pub fn parse_unit<R: BufRead>(
    parser: &mut Parser<'_, R>,
    scope: &mut Scope<'_>,
) -> FrontendResult<Option<Node>> {
    if let Some(stmt) = parse_stmt(parser, scope)? {
        return Ok((!stmt.is_empty()).then_some(stmt));
    }

    if let Some(block) = parse_block_scope(parser, scope)? {
        return Ok((!block.children().is_empty()).then_some(block));
    }

    let token = parser.lookahead()?;
    Err(MK_ERROR!(
        ErrorImpl::UnitExpected {
            token: token.value.clone()
        },
        token.line
    ))
}
