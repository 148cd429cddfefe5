//! Parser for Lucene-style query strings.
//!
//! # Architecture
//!
//! - Zero-copy lexing: tokens carry spans, text is sliced only when building nodes
//! - Suffixes (`~`, `~0.8`, `^2`) are single tokens, so a malformed suffix fails at its sigil
//! - Productions are methods over a token index and backtrack by reusing it
//! - One furthest-failure accumulator per parse call drives error reporting
//!
//! # Limits
//!
//! Fuel bounds the work done on hostile input. Recursion fuel caps group nesting
//! and restores on exit; exec fuel caps total token lookaheads and never
//! replenishes. Running out of either aborts the parse with a dedicated [`Error`]
//! variant instead of a syntax error.

pub mod lexer;
pub mod syntax_kind;

mod core;
mod failure;
mod grammar;

#[cfg(test)]
mod tests;

pub use core::Parser;
pub use failure::SyntaxError;
pub use syntax_kind::{SyntaxKind, TokenSet};

use crate::Error;
use crate::ast::Query;
use crate::location::ErrorLocation;
use lexer::lex;

pub const DEFAULT_EXEC_FUEL: u32 = 1_000_000;
pub const DEFAULT_RECURSION_FUEL: u32 = 256;

/// Parser settings with fuel limits.
///
/// ```
/// use lqp_lib::ParserConfig;
///
/// let config = ParserConfig::default().with_recursion_fuel(Some(2));
/// assert!(config.parse("(a (b))").is_ok());
/// assert!(config.parse("(a (b (c)))").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    exec_fuel: Option<u32>,
    recursion_fuel: Option<u32>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            exec_fuel: Some(DEFAULT_EXEC_FUEL),
            recursion_fuel: Some(DEFAULT_RECURSION_FUEL),
        }
    }
}

impl ParserConfig {
    /// Set execution fuel limit. None = infinite.
    ///
    /// Every token lookahead costs one unit. It protects against large inputs.
    pub fn with_exec_fuel(mut self, limit: Option<u32>) -> Self {
        self.exec_fuel = limit;
        self
    }

    /// Set the maximum group nesting depth. None = infinite.
    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel = limit;
        self
    }

    pub fn exec_fuel(&self) -> Option<u32> {
        self.exec_fuel
    }

    pub fn recursion_fuel(&self) -> Option<u32> {
        self.recursion_fuel
    }

    pub fn parse(&self, source: &str) -> Result<Query, Error> {
        tracing::debug!(len = source.len(), "parsing query");
        check_len(source.len())?;

        let result = Parser::new(source, lex(source))
            .with_exec_fuel(self.exec_fuel)
            .with_recursion_fuel(self.recursion_fuel)
            .parse();

        match &result {
            Ok(query) => tracing::debug!(clauses = query.len(), "parsed query"),
            Err(err) => tracing::debug!(offset = err.offset(), %err, "query rejected"),
        }
        result
    }

    /// `None` when `source` parses; otherwise where and why it failed.
    pub fn error_location(&self, source: &str) -> Option<ErrorLocation> {
        self.parse(source).err().map(|err| err.location(source))
    }
}

/// Spans are `u32` offsets, so longer input cannot be parsed.
pub(crate) fn check_len(len: usize) -> Result<(), Error> {
    if u32::try_from(len).is_err() {
        tracing::debug!(len, "input too large");
        return Err(Error::InputTooLarge { len });
    }
    Ok(())
}
