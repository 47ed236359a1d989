//! Error types and error handling for the front end.
//!
//! This module defines the errors raised while turning source text into
//! a typed AST. It includes:
//!
//! - A single line-attributed error structure shared by the tokenizer,
//!   the parser and semantic analysis
//! - Specific error variants, grouped into lexical, syntax and semantic categories
//! - A separate channel for I/O failures of the underlying stream
//! - Helpful suggestions for common mistakes

pub mod errors;
