//! Parser module for building a typed syntax tree.
//!
//! This module contains the parser that pulls tokens from the tokenizer
//! and builds typed nodes. It uses precedence climbing for expressions,
//! driven by the operator table of the reserved registry, and handles:
//!
//! - Declarations with optional type annotations and initializers
//! - Expression statements, including right-associative assignment
//! - Brace-delimited blocks with their own chained scopes
//! - Inline semantic analysis, so scope and type errors are raised at
//!   the point that caused them

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
