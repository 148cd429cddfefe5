//! Parser state and low-level cursor operations.
//!
//! The cursor is a plain token index passed by value between productions.
//! A production that fails returns `None` and records what it expected; the
//! caller backtracks simply by reusing the position it already holds.

use rowan::{TextRange, TextSize};

use super::failure::Failure;
use super::lexer::{Token, lex_from, text_size, token_text};
use super::syntax_kind::{SyntaxKind, TokenSet};
use crate::Error;
use crate::ast::Query;

pub struct Parser<'src> {
    pub(super) source: &'src str,
    tokens: Vec<Token>,
    failure: Failure,
    depth: u32,
    exec_fuel_remaining: Option<u32>,
    recursion_fuel_limit: Option<u32>,
    fatal_error: Option<Error>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        Self {
            source,
            tokens,
            failure: Failure::default(),
            depth: 0,
            exec_fuel_remaining: None,
            recursion_fuel_limit: None,
            fatal_error: None,
        }
    }

    pub fn with_exec_fuel(mut self, limit: Option<u32>) -> Self {
        self.exec_fuel_remaining = limit;
        self
    }

    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel_limit = limit;
        self
    }

    /// Runs the grammar over the whole input. All-or-nothing: no partial tree on failure.
    pub fn parse(mut self) -> Result<Query, Error> {
        let parsed = self.parse_root();
        if let Some(err) = self.fatal_error {
            return Err(err);
        }
        match parsed {
            Some(query) => Ok(query),
            None => Err(Error::Syntax(
                self.failure.into_error(self.source, &self.tokens),
            )),
        }
    }

    fn has_fatal_error(&self) -> bool {
        self.fatal_error.is_some()
    }

    /// Kind at `pos`, or `Eof` past the end. Every lookahead burns one unit of exec fuel.
    pub(super) fn kind_at(&mut self, pos: usize) -> SyntaxKind {
        self.consume_exec_fuel(pos);
        if self.has_fatal_error() {
            return SyntaxKind::Eof;
        }
        self.tokens.get(pos).map_or(SyntaxKind::Eof, |t| t.kind)
    }

    pub(super) fn text_at(&self, pos: usize) -> &'src str {
        self.tokens
            .get(pos)
            .map_or("", |t| token_text(self.source, t))
    }

    /// Start offset of the token at `pos`, or the end of the source.
    pub(super) fn offset_at(&self, pos: usize) -> TextSize {
        self.tokens
            .get(pos)
            .map_or_else(|| self.eof_offset(), |t| t.span.start())
    }

    /// End offset of the token just before `pos`.
    pub(super) fn end_before(&self, pos: usize) -> TextSize {
        pos.checked_sub(1)
            .and_then(|prev| self.tokens.get(prev))
            .map_or(TextSize::from(0), |t| t.span.end())
    }

    fn eof_offset(&self) -> TextSize {
        text_size(self.source.len())
    }

    /// Index of the token starting at `offset`.
    ///
    /// A token straddling `offset` is cut there and the rest of the source is
    /// lexed again, so indices below the cut stay valid.
    pub(super) fn token_at_offset(&mut self, offset: TextSize) -> usize {
        let idx = self.tokens.partition_point(|t| t.span.end() <= offset);
        let Some(straddling) = self.tokens.get_mut(idx) else {
            return idx;
        };
        if straddling.span.start() >= offset {
            return idx;
        }

        straddling.span = TextRange::new(straddling.span.start(), offset);
        self.tokens.truncate(idx + 1);
        self.tokens.extend(lex_from(self.source, usize::from(offset)));
        tracing::debug!(offset = usize::from(offset), "relexed after range bound");
        idx + 1
    }

    fn consume_exec_fuel(&mut self, pos: usize) {
        if let Some(ref mut remaining) = self.exec_fuel_remaining {
            if *remaining == 0 {
                if self.fatal_error.is_none() {
                    let offset = usize::from(self.offset_at(pos));
                    tracing::debug!(offset, "exec fuel exhausted");
                    self.fatal_error = Some(Error::ExecFuelExhausted { offset });
                }
                return;
            }
            *remaining -= 1;
        }
    }

    /// Records a dead end at `pos`. Returns `None` so callers can `return self.fail(..)`.
    pub(super) fn fail<T>(&mut self, pos: usize, expected: TokenSet) -> Option<T> {
        let offset = self.offset_at(pos);
        self.failure.record(pos, offset, expected);
        None
    }

    /// Notes an optional alternative that was not taken, without failing.
    pub(super) fn missed(&mut self, pos: usize, expected: TokenSet) {
        let offset = self.offset_at(pos);
        self.failure.record(pos, offset, expected);
    }

    pub(super) fn expect(&mut self, pos: usize, kind: SyntaxKind) -> Option<usize> {
        if self.kind_at(pos) == kind {
            Some(pos + 1)
        } else {
            self.fail(pos, TokenSet::single(kind))
        }
    }

    pub(super) fn skip_whitespace(&mut self, pos: usize) -> usize {
        if self.kind_at(pos) == SyntaxKind::Whitespace {
            pos + 1
        } else {
            pos
        }
    }

    pub(super) fn enter_recursion(&mut self, pos: usize) -> bool {
        if let Some(limit) = self.recursion_fuel_limit
            && self.depth >= limit
        {
            if self.fatal_error.is_none() {
                let offset = usize::from(self.offset_at(pos));
                tracing::debug!(offset, limit, "recursion limit exceeded");
                self.fatal_error = Some(Error::RecursionLimitExceeded { offset, limit });
            }
            return false;
        }
        self.depth += 1;
        true
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
