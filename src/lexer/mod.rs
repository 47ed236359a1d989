//! Lexical analysis module for the front end.
//!
//! This module contains the tokenizer that converts a character stream
//! into tokens on demand for the parser. It handles:
//!
//! - Buffered character reading with pushback
//! - Recognition of keywords, type names, identifiers and literals
//! - Maximal-munch operator matching and scientific number literals
//! - Line tracking for error reporting

pub mod lexer;
pub mod source;
pub mod tokens;

#[cfg(test)]
mod tests;
