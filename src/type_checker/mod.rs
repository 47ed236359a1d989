//! Type checking and semantic analysis module.
//!
//! Semantic analysis runs while the parser builds the tree rather than as
//! a separate pass. This module provides the pieces the parser drives:
//!
//! - Chained scopes holding the declared symbols
//! - The table of result types for every legal operator application
//! - Bottom-up typing of expressions and unification of declarations

pub mod compat;
pub mod scope;
pub mod type_checker;

#[cfg(test)]
mod tests;
