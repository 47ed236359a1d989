use std::collections::HashMap;

use crate::{
    ast::types::{TypeDescriptor, INT_TYPE_ID},
    lexer::tokens::TokenKind,
};

/// An operator applied to operand types, keyed by type id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CompatKey {
    Unary {
        operator: TokenKind,
        operand: String,
    },
    Binary {
        operator: TokenKind,
        left: String,
        right: String,
    },
}

/// Result types of every legal operator application.
///
/// Lookups are exact: there is no implicit widening beyond the entries
/// registered here.
#[derive(Debug, Clone, Default)]
pub struct TypeCompatibilityTable {
    entries: HashMap<CompatKey, TypeDescriptor>,
}

impl TypeCompatibilityTable {
    pub fn new() -> Self {
        TypeCompatibilityTable::default()
    }

    pub fn standard() -> Self {
        let mut table = TypeCompatibilityTable::new();

        let int = TypeDescriptor::int();
        let float = TypeDescriptor::float();
        let boolean = TypeDescriptor::bool();
        let numeric = [&int, &float];

        for operator in [TokenKind::Plus, TokenKind::Dash] {
            table.insert_unary(operator, &int, int.clone());
            table.insert_unary(operator, &float, float.clone());
        }

        for operator in [
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Pow,
        ] {
            for left in numeric {
                for right in numeric {
                    let result = if left.id == INT_TYPE_ID && right.id == INT_TYPE_ID {
                        int.clone()
                    } else {
                        float.clone()
                    };
                    table.insert_binary(operator, left, right, result);
                }
            }
        }

        for operator in [TokenKind::Percent, TokenKind::Ampersand, TokenKind::Pipe] {
            table.insert_binary(operator, &int, &int, int.clone());
        }

        for operator in [TokenKind::And, TokenKind::Or] {
            table.insert_binary(operator, &boolean, &boolean, boolean.clone());
        }

        for operator in [
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::LessEquals,
            TokenKind::GreaterEquals,
        ] {
            for left in numeric {
                for right in numeric {
                    table.insert_binary(operator, left, right, boolean.clone());
                }
            }
        }

        for data_type in [&int, &float, &boolean] {
            table.insert_binary(TokenKind::Equals, data_type, data_type, boolean.clone());
            table.insert_binary(TokenKind::NotEquals, data_type, data_type, boolean.clone());
            table.insert_binary(TokenKind::Assignment, data_type, data_type, data_type.clone());
        }

        table
    }

    pub fn insert_unary(
        &mut self,
        operator: TokenKind,
        operand: &TypeDescriptor,
        result: TypeDescriptor,
    ) {
        self.entries.insert(
            CompatKey::Unary {
                operator,
                operand: operand.id.clone(),
            },
            result,
        );
    }

    pub fn insert_binary(
        &mut self,
        operator: TokenKind,
        left: &TypeDescriptor,
        right: &TypeDescriptor,
        result: TypeDescriptor,
    ) {
        self.entries.insert(
            CompatKey::Binary {
                operator,
                left: left.id.clone(),
                right: right.id.clone(),
            },
            result,
        );
    }

    pub fn unary(&self, operator: TokenKind, operand: &TypeDescriptor) -> Option<&TypeDescriptor> {
        self.entries.get(&CompatKey::Unary {
            operator,
            operand: operand.id.clone(),
        })
    }

    pub fn binary(
        &self,
        operator: TokenKind,
        left: &TypeDescriptor,
        right: &TypeDescriptor,
    ) -> Option<&TypeDescriptor> {
        self.entries.get(&CompatKey::Binary {
            operator,
            left: left.id.clone(),
            right: right.id.clone(),
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
