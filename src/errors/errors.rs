use std::fmt::Display;

use thiserror::Error;

/// A failure attributable to a line of source text.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} on line {line}")]
pub struct Error {
    internal_error: ErrorImpl,
    line: u32,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, line: u32) -> Self {
        Error {
            internal_error: error_impl,
            line,
        }
    }

    pub fn get_line(&self) -> u32 {
        self.line
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// The description without the line suffix.
    pub fn get_message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidCharacter { .. } => "InvalidCharacter",
            ErrorImpl::InvalidNumber { .. } => "InvalidNumber",
            ErrorImpl::InvalidSyntax { .. } => "InvalidSyntax",
            ErrorImpl::MissingToken { .. } => "MissingToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedOperand { .. } => "ExpectedOperand",
            ErrorImpl::MissingOperand { .. } => "MissingOperand",
            ErrorImpl::ExpectedInfixOperator { .. } => "ExpectedInfixOperator",
            ErrorImpl::ExpectedPrefixOperand => "ExpectedPrefixOperand",
            ErrorImpl::ExpectedVariableName => "ExpectedVariableName",
            ErrorImpl::ExpectedTypeName => "ExpectedTypeName",
            ErrorImpl::ExpectedAssignable => "ExpectedAssignable",
            ErrorImpl::EmptyInitializer => "EmptyInitializer",
            ErrorImpl::UnitExpected { .. } => "UnitExpected",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
            ErrorImpl::InvalidId { .. } => "InvalidId",
            ErrorImpl::InvalidVariable { .. } => "InvalidVariable",
            ErrorImpl::ConstantAssignment { .. } => "ConstantAssignment",
            ErrorImpl::VariableAlreadyDeclared { .. } => "VariableAlreadyDeclared",
            ErrorImpl::UndeterminedType { .. } => "UndeterminedType",
            ErrorImpl::UndeterminedLhsType => "UndeterminedLhsType",
            ErrorImpl::MissingRhsType => "MissingRhsType",
            ErrorImpl::UnaryOperandMismatch { .. } => "UnaryOperandMismatch",
            ErrorImpl::BinaryOperandMismatch { .. } => "BinaryOperandMismatch",
            ErrorImpl::TypeMatchError { .. } => "TypeMatchError",
        }
    }

    pub fn get_category(&self) -> ErrorCategory {
        match &self.internal_error {
            ErrorImpl::InvalidCharacter { .. }
            | ErrorImpl::InvalidNumber { .. }
            | ErrorImpl::InvalidSyntax { .. } => ErrorCategory::Lexical,
            ErrorImpl::MissingToken { .. }
            | ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::ExpectedOperand { .. }
            | ErrorImpl::MissingOperand { .. }
            | ErrorImpl::ExpectedInfixOperator { .. }
            | ErrorImpl::ExpectedPrefixOperand
            | ErrorImpl::ExpectedVariableName
            | ErrorImpl::ExpectedTypeName
            | ErrorImpl::EmptyInitializer
            | ErrorImpl::UnitExpected { .. }
            | ErrorImpl::NestingTooDeep { .. } => ErrorCategory::Syntax,
            ErrorImpl::ExpectedAssignable
            | ErrorImpl::InvalidId { .. }
            | ErrorImpl::InvalidVariable { .. }
            | ErrorImpl::ConstantAssignment { .. }
            | ErrorImpl::VariableAlreadyDeclared { .. }
            | ErrorImpl::UndeterminedType { .. }
            | ErrorImpl::UndeterminedLhsType
            | ErrorImpl::MissingRhsType
            | ErrorImpl::UnaryOperandMismatch { .. }
            | ErrorImpl::BinaryOperandMismatch { .. }
            | ErrorImpl::TypeMatchError { .. } => ErrorCategory::Semantic,
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::MissingToken { expected } if expected == ";" => {
                ErrorTip::Suggestion(String::from("every statement must end with `;`"))
            }
            ErrorImpl::ConstantAssignment { id } => ErrorTip::Suggestion(format!(
                "declare `{}` with `var` to make it reassignable",
                id
            )),
            ErrorImpl::VariableAlreadyDeclared { variable } => ErrorTip::Suggestion(format!(
                "open a new block to shadow `{}`",
                variable
            )),
            ErrorImpl::UndeterminedType { id } => ErrorTip::Suggestion(format!(
                "annotate `{}` with a type or give it an initializer",
                id
            )),
            ErrorImpl::TypeMatchError { expected, .. } => ErrorTip::Suggestion(format!(
                "the initializer must have type `{}`",
                expected
            )),
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "raise the nesting limit above {}",
                limit
            )),
            _ => ErrorTip::None,
        }
    }
}

/// The taxonomy an error belongs to. Propagation is identical for all three.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Lexical,
    Syntax,
    Semantic,
}

impl Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Lexical => write!(f, "lexical error"),
            ErrorCategory::Syntax => write!(f, "syntax error"),
            ErrorCategory::Semantic => write!(f, "semantic error"),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("invalid character '{character}' after '{after}'")]
    InvalidCharacter { character: char, after: String },
    #[error("invalid numeric expression after '{after}'")]
    InvalidNumber { after: String },
    #[error("invalid syntax at '{character}'")]
    InvalidSyntax { character: char },
    #[error("missing '{expected}'")]
    MissingToken { expected: String },
    #[error("unexpected '{token}'")]
    UnexpectedToken { token: String },
    #[error("expected an operand after '{operator}'")]
    ExpectedOperand { operator: String },
    #[error("missing an operand before the operator '{operator}'")]
    MissingOperand { operator: String },
    #[error("expected an infix operator after '{after}'")]
    ExpectedInfixOperator { after: String },
    #[error("expected an expression following the prefix operator")]
    ExpectedPrefixOperand,
    #[error("expected a variable name")]
    ExpectedVariableName,
    #[error("expected a type after ':'")]
    ExpectedTypeName,
    #[error("expected a variable before '='")]
    ExpectedAssignable,
    #[error("expected a nonempty expression after '='")]
    EmptyInitializer,
    #[error("invalid syntax at '{token}'")]
    UnitExpected { token: String },
    #[error("maximum nesting depth of {limit} exceeded")]
    NestingTooDeep { limit: usize },
    #[error("invalid ID '{id}'")]
    InvalidId { id: String },
    #[error("invalid variable '{id}'")]
    InvalidVariable { id: String },
    #[error("'{id}' is a constant")]
    ConstantAssignment { id: String },
    #[error("cannot redeclare '{variable}'")]
    VariableAlreadyDeclared { variable: String },
    #[error("cannot determine the type of '{id}'")]
    UndeterminedType { id: String },
    #[error("cannot determine the type for the left-hand side")]
    UndeterminedLhsType,
    #[error("no type detected on the right-hand side")]
    MissingRhsType,
    #[error("operator '{operator}' is not compatible with type '{operand}'")]
    UnaryOperandMismatch { operator: String, operand: String },
    #[error("operator '{operator}' is not compatible with type '{left}' and type '{right}'")]
    BinaryOperandMismatch {
        operator: String,
        left: String,
        right: String,
    },
    #[error("unable to assign a variable of type '{expected}' to data of type '{received}'")]
    TypeMatchError { expected: String, received: String },
}

/// Error returned by every fallible front-end operation.
///
/// Read failures of the underlying stream are kept apart from source errors
/// because no line can be blamed for them.
#[derive(Error, Debug)]
pub enum FrontendError {
    #[error(transparent)]
    Source(#[from] Error),
    #[error("failed to read source: {0}")]
    Io(#[from] std::io::Error),
}

impl FrontendError {
    pub fn as_source(&self) -> Option<&Error> {
        match self {
            FrontendError::Source(error) => Some(error),
            FrontendError::Io(_) => None,
        }
    }
}

pub type FrontendResult<T> = Result<T, FrontendError>;
