//! Furthest-failure tracking and the syntax error built from it.
//!
//! Every production that gives up records the token position it stopped at
//! together with what it would have accepted there. Only the rightmost
//! position survives; expectations recorded at that same position are merged,
//! and the first recorded token is kept.

use std::fmt;

use rowan::{TextRange, TextSize};

use super::lexer::{Token, text_size, token_text};
use super::syntax_kind::{SyntaxKind, TokenSet};
use crate::location::line_column;

#[derive(Debug, Clone, Default)]
pub(super) struct Failure {
    furthest: Option<(usize, TextSize)>,
    expected: TokenSet,
}

impl Failure {
    pub(super) fn record(&mut self, pos: usize, offset: TextSize, expected: TokenSet) {
        match self.furthest {
            Some((_, furthest)) if offset < furthest => {}
            Some((_, furthest)) if offset == furthest => {
                self.expected = self.expected.union(expected);
            }
            _ => {
                self.furthest = Some((pos, offset));
                self.expected = expected;
            }
        }
    }

    pub(super) fn into_error(self, source: &str, tokens: &[Token]) -> SyntaxError {
        let (pos, offset) = self
            .furthest
            .unwrap_or_else(|| (tokens.len(), text_size(source.len())));

        let (span, found) = match tokens.get(pos) {
            Some(token) => (token.span, describe_found(source, token)),
            None => (TextRange::empty(offset), SyntaxKind::Eof.describe().to_string()),
        };

        let (line, column) = line_column(source, usize::from(span.start()));
        SyntaxError {
            span,
            line,
            column,
            found,
            expected: self.expected.iter().map(SyntaxKind::describe).collect(),
        }
    }
}

fn describe_found(source: &str, token: &Token) -> String {
    match token.kind {
        SyntaxKind::Whitespace => token.kind.describe().to_string(),
        _ => format!("`{}`", token_text(source, token)),
    }
}

/// Malformed input: the furthest point any alternative reached, and what it expected there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    span: TextRange,
    line: usize,
    column: usize,
    found: String,
    expected: Vec<&'static str>,
}

impl SyntaxError {
    /// Byte offset of the offending token.
    pub fn offset(&self) -> usize {
        self.span.start().into()
    }

    /// Span of the offending token; empty at end of input.
    pub fn span(&self) -> TextRange {
        self.span
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// The offending token as shown in the message, e.g. `` `^` `` or `end of input`.
    pub fn found(&self) -> &str {
        &self.found
    }

    pub fn expected(&self) -> &[&'static str] {
        &self.expected
    }

    /// The expected alternatives as prose: `a`, `a or b`, `a, b, or c`.
    pub fn expected_summary(&self) -> Option<String> {
        match self.expected.as_slice() {
            [] => None,
            [only] => Some((*only).to_string()),
            [first, second] => Some(format!("{} or {}", first, second)),
            [init @ .., last] => Some(format!("{}, or {}", init.join(", "), last)),
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Don't know what to do with {} at line {} column {}",
            self.found, self.line, self.column
        )?;
        if let Some(expected) = self.expected_summary() {
            write!(f, " (expected {})", expected)?;
        }
        Ok(())
    }
}

impl std::error::Error for SyntaxError {}
