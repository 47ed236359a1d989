//! Reserved lexemes of the language.
//!
//! The registry maps keywords, built-in type names and operator lexemes to
//! what they mean, and holds the precedence, associativity and fixity of
//! every operator. The tokenizer uses it to classify lexemes; the parser
//! uses it to decide how operators bind.

pub mod reserved;
