//! Parser implementation for building the typed syntax tree.
//!
//! This module contains the main Parser struct and the program entry point.
//! The parser pulls tokens from the tokenizer on demand and runs semantic
//! analysis as it goes, so every node it hands out is already typed.
//!
//! It maintains lookup tables for:
//! - Statement handlers, keyed by the token that starts the statement
//! - Primary expression handlers, keyed by the token that starts the operand

use std::{collections::HashMap, io::BufRead};

use log::{debug, info};

use crate::{
    ast::ast::Node,
    errors::errors::{ErrorImpl, FrontendResult},
    lexer::{
        lexer::Tokenizer,
        tokens::{Token, TokenKind},
    },
    reserved::reserved::ReservedRegistry,
    type_checker::{compat::TypeCompatibilityTable, scope::Scope},
    MK_ERROR,
};

use super::{
    lookups::{create_token_lookups, NUDHandler, NUDLookup, StmtHandler, StmtLookup},
    stmt::parse_unit,
};

pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Limits applied while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Deepest allowed nesting of operators, parentheses and blocks.
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// The main parser structure that maintains parsing state.
///
/// The registry and the compatibility table are borrowed; both are built
/// once up front and never change while parsing.
pub struct Parser<'a, R> {
    /// Source of tokens, pulled one at a time
    tokenizer: Tokenizer<'a, R>,
    registry: &'a ReservedRegistry,
    compat: &'a TypeCompatibilityTable,
    config: ParserConfig,
    /// Current recursion depth
    depth: usize,
    /// Lexeme of the last consumed token, for error messages
    previous: String,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup<R>,
    /// Lookup table for primary expression handlers
    nud_lookup: NUDLookup<R>,
}

impl<'a, R: BufRead> Parser<'a, R> {
    pub fn new(
        tokenizer: Tokenizer<'a, R>,
        registry: &'a ReservedRegistry,
        compat: &'a TypeCompatibilityTable,
        config: ParserConfig,
    ) -> Self {
        info!("creating parser with max depth {}", config.max_depth);

        Parser {
            tokenizer,
            registry,
            compat,
            config,
            depth: 0,
            previous: String::new(),
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
        }
    }

    /// Returns the next token without consuming it.
    pub fn lookahead(&mut self) -> FrontendResult<&Token> {
        self.tokenizer.lookahead()
    }

    /// Returns the kind of the next token.
    pub fn current_token_kind(&mut self) -> FrontendResult<TokenKind> {
        Ok(self.tokenizer.lookahead()?.kind)
    }

    /// Line of the next token.
    pub fn current_line(&mut self) -> FrontendResult<u32> {
        Ok(self.tokenizer.lookahead()?.line)
    }

    pub fn consume(&mut self) -> FrontendResult<Token> {
        let token = self.tokenizer.consume()?;
        self.previous = token.value.clone();
        Ok(token)
    }

    /// Consumes the next token only if it has the given kind.
    pub fn accept(&mut self, kind: TokenKind) -> FrontendResult<Option<Token>> {
        if self.current_token_kind()? == kind {
            Ok(Some(self.consume()?))
        } else {
            Ok(None)
        }
    }

    /// Expects a token of the specified kind, with optional custom error.
    ///
    /// Without a custom error the failure reports the unexpected lexeme.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<ErrorImpl>,
    ) -> FrontendResult<Token> {
        let token = self.lookahead()?;

        if token.kind == expected_kind {
            return self.consume();
        }

        let line = token.line;
        let error = error.unwrap_or_else(|| ErrorImpl::UnexpectedToken {
            token: token.value.clone(),
        });

        debug!("expected {} on line {}: {}", expected_kind, line, error);
        Err(MK_ERROR!(error, line))
    }

    pub fn expect(&mut self, expected_kind: TokenKind) -> FrontendResult<Token> {
        self.expect_error(expected_kind, None)
    }

    /// Lexeme of the most recently consumed token.
    pub fn previous_lexeme(&self) -> &str {
        &self.previous
    }

    /// Enters one level of nesting, failing past the configured limit.
    pub fn enter(&mut self) -> FrontendResult<()> {
        self.depth += 1;

        if self.depth > self.config.max_depth {
            let line = self.current_line()?;
            debug!("nesting depth {} exceeded on line {}", self.config.max_depth, line);
            return Err(MK_ERROR!(
                ErrorImpl::NestingTooDeep {
                    limit: self.config.max_depth
                },
                line
            ));
        }

        Ok(())
    }

    /// Fails when an expression tree grows taller than the nesting limit.
    pub fn limit_height(&self, height: usize, line: u32) -> FrontendResult<()> {
        if height > self.config.max_depth {
            debug!("expression height {} exceeded on line {}", self.config.max_depth, line);
            return Err(MK_ERROR!(
                ErrorImpl::NestingTooDeep {
                    limit: self.config.max_depth
                },
                line
            ));
        }

        Ok(())
    }

    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn reset_depth(&mut self) {
        self.depth = 0;
    }

    pub fn registry(&self) -> &'a ReservedRegistry {
        self.registry
    }

    pub fn compat(&self) -> &'a TypeCompatibilityTable {
        self.compat
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup<R> {
        &self.stmt_lookup
    }

    /// Returns a reference to the primary expression lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup<R> {
        &self.nud_lookup
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler<R>) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Registers a primary expression handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler<R>) {
        self.nud_lookup.insert(kind, nud_fn);
    }
}

/// Parses a whole program into its typed top-level units.
///
/// Each unit is one statement or one block; bare `;` and empty blocks
/// produce nothing. Declarations in the global scope stay visible to later
/// units. The first error aborts parsing.
pub fn parse_program<R: BufRead>(
    reader: R,
    registry: &ReservedRegistry,
    compat: &TypeCompatibilityTable,
    config: ParserConfig,
) -> FrontendResult<Vec<Node>> {
    let mut parser = Parser::new(Tokenizer::new(reader, registry), registry, compat, config);
    create_token_lookups(&mut parser);

    let mut global = Scope::new();
    let mut units = vec![];

    while parser.current_token_kind()? != TokenKind::EOF {
        parser.reset_depth();

        match parse_unit(&mut parser, &mut global) {
            Ok(Some(unit)) => units.push(unit),
            Ok(None) => {}
            Err(error) => {
                debug!("parsing stopped: {}", error);
                return Err(error);
            }
        }
    }

    info!(
        "parsed {} top-level units, {} global symbols",
        units.len(),
        global.len()
    );
    Ok(units)
}
