use serde::Serialize;

use crate::lexer::tokens::Token;

use super::types::TypeDescriptor;

/// Node Types
///
/// The tag of every `Node` variant, for callers that only need the shape.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum NodeType {
    Literal,
    Variable,
    Unary,
    Binary,
    Declaration,
    Assignment,
    Empty,
    Scope,
}

/// A node of the typed syntax tree.
///
/// Operator nodes are built with `data_type: None` and receive their type
/// once the enclosing expression is analysed. A `Declaration` without an
/// initializer is the only node that may legitimately stay untyped.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "node")]
pub enum Node {
    Literal {
        token: Token,
        data_type: TypeDescriptor,
    },
    Variable {
        token: Token,
        data_type: Option<TypeDescriptor>,
        mutable: bool,
    },
    Unary {
        operator: Token,
        data_type: Option<TypeDescriptor>,
        operand: Box<Node>,
    },
    Binary {
        operator: Token,
        data_type: Option<TypeDescriptor>,
        left: Box<Node>,
        right: Box<Node>,
    },
    Declaration {
        name: Token,
        data_type: Option<TypeDescriptor>,
        mutable: bool,
    },
    /// Root token is `=`. The target is a `Declaration` or a `Variable`.
    Assignment {
        operator: Token,
        data_type: Option<TypeDescriptor>,
        target: Box<Node>,
        value: Box<Node>,
    },
    /// A bare `;`.
    Empty,
    Scope {
        statements: Vec<Node>,
    },
}

impl Node {
    pub fn get_node_type(&self) -> NodeType {
        match self {
            Node::Literal { .. } => NodeType::Literal,
            Node::Variable { .. } => NodeType::Variable,
            Node::Unary { .. } => NodeType::Unary,
            Node::Binary { .. } => NodeType::Binary,
            Node::Declaration { .. } => NodeType::Declaration,
            Node::Assignment { .. } => NodeType::Assignment,
            Node::Empty => NodeType::Empty,
            Node::Scope { .. } => NodeType::Scope,
        }
    }

    /// The token a node is rooted at. `Empty` and `Scope` have none.
    pub fn get_token(&self) -> Option<&Token> {
        match self {
            Node::Literal { token, .. } | Node::Variable { token, .. } => Some(token),
            Node::Unary { operator, .. }
            | Node::Binary { operator, .. }
            | Node::Assignment { operator, .. } => Some(operator),
            Node::Declaration { name, .. } => Some(name),
            Node::Empty | Node::Scope { .. } => None,
        }
    }

    pub fn get_type(&self) -> Option<&TypeDescriptor> {
        match self {
            Node::Literal { data_type, .. } => Some(data_type),
            Node::Variable { data_type, .. }
            | Node::Unary { data_type, .. }
            | Node::Binary { data_type, .. }
            | Node::Declaration { data_type, .. }
            | Node::Assignment { data_type, .. } => data_type.as_ref(),
            Node::Empty | Node::Scope { .. } => None,
        }
    }

    /// Mutability of variables and declarations; `None` for every other node.
    pub fn is_mutable(&self) -> Option<bool> {
        match self {
            Node::Variable { mutable, .. } | Node::Declaration { mutable, .. } => Some(*mutable),
            _ => None,
        }
    }

    /// Ordered children, left to right.
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::Literal { .. }
            | Node::Variable { .. }
            | Node::Declaration { .. }
            | Node::Empty => vec![],
            Node::Unary { operand, .. } => vec![&**operand],
            Node::Binary { left, right, .. } => vec![&**left, &**right],
            Node::Assignment { target, value, .. } => vec![&**target, &**value],
            Node::Scope { statements } => statements.iter().collect(),
        }
    }

    /// Number of nodes on the longest path down from this one.
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 1)];

        while let Some((node, level)) = pending.pop() {
            deepest = deepest.max(level);
            pending.extend(node.children().into_iter().map(|child| (child, level + 1)));
        }

        deepest
    }

    pub fn is_empty(&self) -> bool {
        self.get_node_type() == NodeType::Empty
    }
}

/// Renders an expression tree fully parenthesised, e.g. `(((1)*(2))+(3))`.
///
/// Scopes render their statements separated by spaces inside braces.
pub fn render(node: &Node) -> String {
    match node {
        Node::Literal { token, .. } | Node::Variable { token, .. } => format!("({})", token.value),
        Node::Declaration { name, .. } => format!("({})", name.value),
        Node::Unary {
            operator, operand, ..
        } => format!("({}{})", operator.value, render(operand)),
        Node::Binary {
            operator,
            left,
            right,
            ..
        } => format!("({}{}{})", render(left), operator.value, render(right)),
        Node::Assignment {
            operator,
            target,
            value,
            ..
        } => format!("({}{}{})", render(target), operator.value, render(value)),
        Node::Empty => String::from("()"),
        Node::Scope { statements } => format!(
            "{{{}}}",
            statements.iter().map(render).collect::<Vec<_>>().join(" ")
        ),
    }
}
