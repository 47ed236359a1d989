use std::{cmp::Ordering, io::BufRead};

use crate::{
    ast::ast::Node,
    errors::errors::{ErrorImpl, FrontendResult},
    lexer::tokens::{Token, TokenKind},
    type_checker::{scope::Scope, type_checker::analyze_expr},
    MK_ERROR,
};

use super::parser::Parser;

/// Parses an expression statement and consumes its `;`.
///
/// Returns `None` when no expression starts here and nothing was consumed,
/// and `Node::Empty` for a bare `;`. A parsed expression is typed once it
/// is syntactically complete.
pub fn parse_expr<R: BufRead>(
    parser: &mut Parser<'_, R>,
    scope: &Scope<'_>,
) -> FrontendResult<Option<Node>> {
    match parse_binding(parser, scope, None, false)? {
        None => Ok(parser.accept(TokenKind::Semicolon)?.map(|_| Node::Empty)),
        Some(mut expr) => {
            parser.expect_error(
                TokenKind::Semicolon,
                Some(ErrorImpl::MissingToken {
                    expected: String::from(";"),
                }),
            )?;

            analyze_expr(&mut expr, parser.compat())?;
            Ok(Some(expr))
        }
    }
}

/// Precedence climbing over infix operators.
///
/// `previous` is the operator whose right operand is being parsed; the loop
/// hands the operand back to it as soon as the incoming operator binds
/// weaker. `in_paren` selects whether `)` or `;` closes the expression.
///
/// Each operator node built here counts toward the nesting limit by the
/// height of the tree it roots, so flat chains are bounded as well.
pub fn parse_binding<R: BufRead>(
    parser: &mut Parser<'_, R>,
    scope: &Scope<'_>,
    previous: Option<&Token>,
    in_paren: bool,
) -> FrontendResult<Option<Node>> {
    parser.enter()?;

    let mut left = parse_prefix_expr(parser, scope)?;

    if left.is_none() {
        if let Some(previous) = previous {
            let line = parser.current_line()?;
            return Err(MK_ERROR!(
                ErrorImpl::ExpectedOperand {
                    operator: previous.value.clone()
                },
                line
            ));
        }
    }

    let mut height = left.as_ref().map_or(0, Node::height);

    loop {
        let token = parser.lookahead()?.clone();

        let Some(lhs) = left.take() else {
            match token.kind {
                TokenKind::CloseParen if !in_paren => {
                    return Err(MK_ERROR!(
                        ErrorImpl::UnexpectedToken { token: token.value },
                        token.line
                    ))
                }
                kind if parser.registry().is_infix(kind) => {
                    return Err(MK_ERROR!(
                        ErrorImpl::MissingOperand {
                            operator: token.value
                        },
                        token.line
                    ))
                }
                _ => break,
            }
        };

        match token.kind {
            TokenKind::EOF => {
                let expected = if in_paren { ")" } else { ";" };
                return Err(MK_ERROR!(
                    ErrorImpl::MissingToken {
                        expected: String::from(expected)
                    },
                    token.line
                ));
            }
            TokenKind::Semicolon if in_paren => {
                return Err(MK_ERROR!(
                    ErrorImpl::MissingToken {
                        expected: String::from(")")
                    },
                    token.line
                ));
            }
            TokenKind::Semicolon => {
                left = Some(lhs);
                break;
            }
            TokenKind::CloseParen if in_paren => {
                left = Some(lhs);
                break;
            }
            TokenKind::CloseParen => {
                return Err(MK_ERROR!(
                    ErrorImpl::UnexpectedToken { token: token.value },
                    token.line
                ));
            }
            TokenKind::CloseCurly if !in_paren => {
                return Err(MK_ERROR!(
                    ErrorImpl::MissingToken {
                        expected: String::from(";")
                    },
                    token.line
                ));
            }
            kind if !parser.registry().is_infix(kind) => {
                return Err(MK_ERROR!(
                    ErrorImpl::ExpectedInfixOperator {
                        after: parser.previous_lexeme().to_string()
                    },
                    token.line
                ));
            }
            _ => {}
        }

        if token.kind == TokenKind::Assignment {
            check_assignable(&lhs, scope, token.line)?;
        }

        if let Some(previous) = previous {
            if parser.registry().cmp_precedence(previous.kind, token.kind) == Ordering::Greater {
                left = Some(lhs);
                break;
            }
        }

        let operator = parser.consume()?;
        let Some(rhs) = parse_binding(parser, scope, Some(&operator), in_paren)? else {
            return Err(MK_ERROR!(
                ErrorImpl::ExpectedOperand {
                    operator: operator.value
                },
                operator.line
            ));
        };

        height = 1 + height.max(rhs.height());
        parser.limit_height(height, operator.line)?;

        left = Some(if operator.kind == TokenKind::Assignment {
            Node::Assignment {
                operator,
                data_type: None,
                target: Box::new(lhs),
                value: Box::new(rhs),
            }
        } else {
            Node::Binary {
                operator,
                data_type: None,
                left: Box::new(lhs),
                right: Box::new(rhs),
            }
        });
    }

    parser.leave();
    Ok(left)
}

/// The left side of `=` must be a bound, mutable variable.
fn check_assignable(target: &Node, scope: &Scope<'_>, line: u32) -> FrontendResult<()> {
    let Node::Variable { token, .. } = target else {
        return Err(MK_ERROR!(ErrorImpl::ExpectedAssignable, line));
    };

    match scope.lookup(&token.value) {
        None => Err(MK_ERROR!(
            ErrorImpl::InvalidVariable {
                id: token.value.clone()
            },
            line
        )),
        Some(symbol) if !symbol.mutable => Err(MK_ERROR!(
            ErrorImpl::ConstantAssignment {
                id: token.value.clone()
            },
            line
        )),
        Some(_) => Ok(()),
    }
}

/// Zero or more prefix operators followed by a postfix target. Prefix
/// operators bind tighter than any infix operator.
pub fn parse_prefix_expr<R: BufRead>(
    parser: &mut Parser<'_, R>,
    scope: &Scope<'_>,
) -> FrontendResult<Option<Node>> {
    let kind = parser.current_token_kind()?;
    if !parser.registry().is_prefix(kind) {
        return parse_postfix_expr(parser, scope);
    }

    let operator = parser.consume()?;
    parser.enter()?;
    let operand = parse_prefix_expr(parser, scope)?;
    parser.leave();

    match operand {
        Some(operand) => Ok(Some(Node::Unary {
            operator,
            data_type: None,
            operand: Box::new(operand),
        })),
        None => Err(MK_ERROR!(ErrorImpl::ExpectedPrefixOperand, operator.line)),
    }
}

pub fn parse_postfix_expr<R: BufRead>(
    parser: &mut Parser<'_, R>,
    scope: &Scope<'_>,
) -> FrontendResult<Option<Node>> {
    let Some(primary) = parse_primary_expr(parser, scope)? else {
        return Ok(None);
    };

    let kind = parser.current_token_kind()?;
    if parser.registry().is_postfix(kind) {
        let operator = parser.consume()?;
        return Ok(Some(Node::Unary {
            operator,
            data_type: None,
            operand: Box::new(primary),
        }));
    }

    Ok(Some(primary))
}

/// Dispatches on the next token through the primary expression table.
pub fn parse_primary_expr<R: BufRead>(
    parser: &mut Parser<'_, R>,
    scope: &Scope<'_>,
) -> FrontendResult<Option<Node>> {
    let kind = parser.current_token_kind()?;

    match parser.get_nud_lookup().get(&kind).copied() {
        Some(handler) => handler(parser, scope).map(Some),
        None => Ok(None),
    }
}

pub fn parse_literal_expr<R: BufRead>(
    parser: &mut Parser<'_, R>,
    _scope: &Scope<'_>,
) -> FrontendResult<Node> {
    let token = parser.consume()?;

    match parser.registry().literal_type(token.kind) {
        Some(data_type) => Ok(Node::Literal {
            data_type: data_type.clone(),
            token,
        }),
        None => Err(MK_ERROR!(
            ErrorImpl::UnexpectedToken { token: token.value },
            token.line
        )),
    }
}

pub fn parse_symbol_expr<R: BufRead>(
    parser: &mut Parser<'_, R>,
    scope: &Scope<'_>,
) -> FrontendResult<Node> {
    let token = parser.consume()?;

    let Some(symbol) = scope.lookup(&token.value) else {
        return Err(MK_ERROR!(ErrorImpl::InvalidId { id: token.value }, token.line));
    };

    Ok(Node::Variable {
        data_type: symbol.data_type.clone(),
        mutable: symbol.mutable,
        token,
    })
}

pub fn parse_grouping_expr<R: BufRead>(
    parser: &mut Parser<'_, R>,
    scope: &Scope<'_>,
) -> FrontendResult<Node> {
    let open = parser.consume()?;
    parser.enter()?;

    let Some(expr) = parse_binding(parser, scope, None, true)? else {
        return Err(MK_ERROR!(
            ErrorImpl::ExpectedOperand {
                operator: open.value
            },
            open.line
        ));
    };

    parser.expect_error(
        TokenKind::CloseParen,
        Some(ErrorImpl::MissingToken {
            expected: String::from(")"),
        }),
    )?;
    parser.leave();

    Ok(expr)
}
