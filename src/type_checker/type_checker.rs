use log::debug;

use crate::{
    ast::{ast::Node, types::TypeDescriptor},
    errors::errors::{Error, ErrorImpl},
};

use super::compat::TypeCompatibilityTable;

/// Types an expression tree bottom-up.
///
/// Every operator node receives the result type the compatibility table
/// gives for its operand types. An operand whose type is still being
/// inferred is rejected. A bare variable is left as is so the declaration
/// it initializes can report it.
pub fn analyze_expr(node: &mut Node, compat: &TypeCompatibilityTable) -> Result<(), Error> {
    match node {
        Node::Literal { .. } | Node::Variable { .. } | Node::Declaration { .. } | Node::Empty => {
            Ok(())
        }
        Node::Unary {
            operator,
            data_type,
            operand,
        } => {
            analyze_expr(operand, compat)?;
            let operand_type = require_type(operand)?;

            match compat.unary(operator.kind, operand_type) {
                Some(result) => {
                    *data_type = Some(result.clone());
                    Ok(())
                }
                None => {
                    debug!("no unary entry for '{}' on {}", operator.value, operand_type);
                    Err(Error::new(
                        ErrorImpl::UnaryOperandMismatch {
                            operator: operator.value.clone(),
                            operand: operand_type.id.clone(),
                        },
                        operator.line,
                    ))
                }
            }
        }
        Node::Binary {
            operator,
            data_type,
            left,
            right,
        }
        | Node::Assignment {
            operator,
            data_type,
            target: left,
            value: right,
        } => {
            analyze_expr(left, compat)?;
            analyze_expr(right, compat)?;
            let left_type = require_type(left)?;
            let right_type = require_type(right)?;

            match compat.binary(operator.kind, left_type, right_type) {
                Some(result) => {
                    *data_type = Some(result.clone());
                    Ok(())
                }
                None => {
                    debug!(
                        "no binary entry for '{}' on {} and {}",
                        operator.value, left_type, right_type
                    );
                    Err(Error::new(
                        ErrorImpl::BinaryOperandMismatch {
                            operator: operator.value.clone(),
                            left: left_type.id.clone(),
                            right: right_type.id.clone(),
                        },
                        operator.line,
                    ))
                }
            }
        }
        Node::Scope { statements } => {
            for statement in statements {
                analyze_expr(statement, compat)?;
            }
            Ok(())
        }
    }
}

fn require_type(node: &Node) -> Result<&TypeDescriptor, Error> {
    node.get_type().ok_or_else(|| {
        let token = node.get_token();
        Error::new(
            ErrorImpl::UndeterminedType {
                id: token.map_or_else(String::new, |token| token.value.clone()),
            },
            token.map_or(0, |token| token.line),
        )
    })
}

/// Reconciles a declared type with the type of its initializer and
/// returns the type the declaration ends up with.
pub fn unify_declaration(
    declared: Option<&TypeDescriptor>,
    initializer: Option<&TypeDescriptor>,
    line: u32,
) -> Result<TypeDescriptor, Error> {
    match (declared, initializer) {
        (None, None) => Err(Error::new(ErrorImpl::UndeterminedLhsType, line)),
        (None, Some(initializer)) => Ok(initializer.clone()),
        (Some(_), None) => Err(Error::new(ErrorImpl::MissingRhsType, line)),
        (Some(declared), Some(initializer)) if declared != initializer => Err(Error::new(
            ErrorImpl::TypeMatchError {
                expected: declared.id.clone(),
                received: initializer.id.clone(),
            },
            line,
        )),
        (Some(declared), Some(_)) => Ok(declared.clone()),
    }
}
