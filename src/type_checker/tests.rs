use crate::{
    ast::{ast::Node, types::TypeDescriptor},
    errors::errors::ErrorImpl,
    lexer::tokens::{Token, TokenKind},
};

use super::{
    compat::TypeCompatibilityTable,
    scope::{Scope, Symbol, SymbolKind},
    type_checker::{analyze_expr, unify_declaration},
};

fn int_literal(value: &str) -> Node {
    Node::Literal {
        token: Token::new(TokenKind::IntLiteral, value, 1),
        data_type: TypeDescriptor::int(),
    }
}

fn float_literal(value: &str) -> Node {
    Node::Literal {
        token: Token::new(TokenKind::FloatLiteral, value, 1),
        data_type: TypeDescriptor::float(),
    }
}

fn bool_literal(value: &str) -> Node {
    Node::Literal {
        token: Token::new(TokenKind::BoolLiteral, value, 1),
        data_type: TypeDescriptor::bool(),
    }
}

fn binary(kind: TokenKind, lexeme: &str, left: Node, right: Node) -> Node {
    Node::Binary {
        operator: Token::new(kind, lexeme, 2),
        data_type: None,
        left: Box::new(left),
        right: Box::new(right),
    }
}

#[test]
fn test_scope_register_and_lookup() {
    let mut global = Scope::new();
    global
        .register(Symbol::new("a", true, Some(TypeDescriptor::int())), 1)
        .unwrap();

    let symbol = global.lookup("a").unwrap();
    assert_eq!(symbol.kind, SymbolKind::Variable);
    assert!(symbol.mutable);
    assert_eq!(global.len(), 1);
    assert!(global.lookup("b").is_none());
}

#[test]
fn test_scope_rejects_redeclaration() {
    let mut global = Scope::new();
    global.register(Symbol::new("a", true, None), 1).unwrap();

    let error = global
        .register(Symbol::new("a", false, Some(TypeDescriptor::int())), 4)
        .unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::VariableAlreadyDeclared {
            variable: String::from("a")
        }
    );
    assert_eq!(error.get_line(), 4);
}

#[test]
fn test_scope_chain_and_shadowing() {
    let mut global = Scope::new();
    global
        .register(Symbol::new("a", false, Some(TypeDescriptor::int())), 1)
        .unwrap();
    global
        .register(Symbol::new("b", true, Some(TypeDescriptor::bool())), 1)
        .unwrap();

    let mut inner = Scope::child(&global);
    inner
        .register(Symbol::new("a", true, Some(TypeDescriptor::float())), 2)
        .unwrap();

    assert_eq!(
        inner.lookup("a").unwrap().data_type,
        Some(TypeDescriptor::float())
    );
    assert_eq!(inner.lookup("b").unwrap().kind, SymbolKind::Variable);
    assert!(inner.lookup_local("b").is_none());
    assert!(inner.parent().is_some());
    assert_eq!(
        global.lookup("a").unwrap().kind,
        SymbolKind::Constant
    );
}

#[test]
fn test_scope_resolve_type() {
    let mut global = Scope::new();
    global.register(Symbol::new("x", true, None), 1).unwrap();
    global.resolve_type("x", TypeDescriptor::float());

    assert_eq!(
        global.lookup("x").unwrap().data_type,
        Some(TypeDescriptor::float())
    );
}

#[test]
fn test_compat_standard_entries() {
    let table = TypeCompatibilityTable::standard();
    let int = TypeDescriptor::int();
    let float = TypeDescriptor::float();
    let boolean = TypeDescriptor::bool();

    assert_eq!(table.binary(TokenKind::Plus, &int, &int), Some(&int));
    assert_eq!(table.binary(TokenKind::Star, &int, &float), Some(&float));
    assert_eq!(table.binary(TokenKind::Pow, &float, &int), Some(&float));
    assert_eq!(table.binary(TokenKind::Percent, &int, &int), Some(&int));
    assert_eq!(table.binary(TokenKind::Percent, &float, &int), None);
    assert_eq!(table.binary(TokenKind::Less, &int, &float), Some(&boolean));
    assert_eq!(table.binary(TokenKind::Equals, &boolean, &boolean), Some(&boolean));
    assert_eq!(table.binary(TokenKind::Equals, &int, &float), None);
    assert_eq!(table.binary(TokenKind::And, &boolean, &boolean), Some(&boolean));
    assert_eq!(table.binary(TokenKind::Plus, &boolean, &int), None);
    assert_eq!(table.binary(TokenKind::Assignment, &float, &float), Some(&float));
    assert_eq!(table.binary(TokenKind::Assignment, &int, &float), None);
    assert_eq!(table.unary(TokenKind::Dash, &int), Some(&int));
    assert_eq!(table.unary(TokenKind::Plus, &float), Some(&float));
    assert_eq!(table.unary(TokenKind::Dash, &boolean), None);
}

#[test]
fn test_analyze_binary_types() {
    let table = TypeCompatibilityTable::standard();
    let mut node = binary(
        TokenKind::Plus,
        "+",
        binary(TokenKind::Star, "*", int_literal("1"), int_literal("2")),
        float_literal("3.0"),
    );

    analyze_expr(&mut node, &table).unwrap();

    assert_eq!(node.get_type(), Some(&TypeDescriptor::float()));
    assert_eq!(node.children()[0].get_type(), Some(&TypeDescriptor::int()));
}

#[test]
fn test_analyze_unary_mismatch() {
    let table = TypeCompatibilityTable::standard();
    let mut node = Node::Unary {
        operator: Token::new(TokenKind::Dash, "-", 3),
        data_type: None,
        operand: Box::new(bool_literal("true")),
    };

    let error = analyze_expr(&mut node, &table).unwrap_err();

    assert_eq!(
        error.to_string(),
        "operator '-' is not compatible with type 'Bool' on line 3"
    );
}

#[test]
fn test_analyze_binary_mismatch_names_both_types() {
    let table = TypeCompatibilityTable::standard();
    let mut node = binary(TokenKind::And, "&&", int_literal("1"), bool_literal("false"));

    let error = analyze_expr(&mut node, &table).unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::BinaryOperandMismatch {
            operator: String::from("&&"),
            left: String::from("Int"),
            right: String::from("Bool"),
        }
    );
    assert_eq!(error.get_line(), 2);
}

#[test]
fn test_analyze_untyped_variable() {
    let table = TypeCompatibilityTable::standard();
    let mut node = binary(
        TokenKind::Plus,
        "+",
        Node::Variable {
            token: Token::new(TokenKind::Identifier, "x", 5),
            data_type: None,
            mutable: true,
        },
        int_literal("1"),
    );

    let error = analyze_expr(&mut node, &table).unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UndeterminedType {
            id: String::from("x")
        }
    );
    assert_eq!(error.get_line(), 5);
}

#[test]
fn test_unify_declaration() {
    let int = TypeDescriptor::int();
    let float = TypeDescriptor::float();

    assert_eq!(unify_declaration(None, Some(&float), 1).unwrap(), float);
    assert_eq!(unify_declaration(Some(&int), Some(&int), 1).unwrap(), int);

    assert_eq!(
        unify_declaration(None, None, 1).unwrap_err().get_impl(),
        &ErrorImpl::UndeterminedLhsType
    );
    assert_eq!(
        unify_declaration(Some(&int), None, 1).unwrap_err().get_impl(),
        &ErrorImpl::MissingRhsType
    );
    assert_eq!(
        unify_declaration(Some(&int), Some(&float), 7)
            .unwrap_err()
            .to_string(),
        "unable to assign a variable of type 'Int' to data of type 'Float' on line 7"
    );
}
