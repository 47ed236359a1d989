//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_ERROR!` - Creates a line-attributed error wrapped for propagation
//!
//! These macros reduce boilerplate in the tokenizer and the parsers.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$line` - The line the lexeme starts on
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::IntLiteral, "42".to_string(), 1);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $line:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: $value,
            line: $line,
        }
    };
}

/// Creates a `FrontendError::Source` from an `ErrorImpl` variant and a line.
///
/// # Example
///
/// ```ignore
/// return Err(MK_ERROR!(ErrorImpl::ExpectedVariableName, token.line));
/// ```
#[macro_export]
macro_rules! MK_ERROR {
    ($error_impl:expr, $line:expr) => {
        $crate::errors::errors::FrontendError::Source($crate::errors::errors::Error::new(
            $error_impl,
            $line,
        ))
    };
}
