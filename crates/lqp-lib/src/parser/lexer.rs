//! Lexer for query strings.
//!
//! Tokens are kind + byte span; text is sliced from the source on demand.
//! Runs of characters no token accepts become one `Garbage` token, so an
//! unrecognized stretch like `%&%` is reported once at its first byte.

use std::ops::Range;

use logos::Logos;
use rowan::{TextRange, TextSize};

use super::syntax_kind::SyntaxKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: SyntaxKind, span: TextRange) -> Self {
        Self { kind, span }
    }

    fn from_range(kind: SyntaxKind, range: Range<usize>) -> Self {
        Self::new(kind, TextRange::new(text_size(range.start), text_size(range.end)))
    }
}

/// Byte offset as a `TextSize`, saturating at `u32::MAX`.
///
/// Saturation keeps spans ordered; inputs that large are rejected before parsing.
pub fn text_size(offset: usize) -> TextSize {
    TextSize::try_from(offset).unwrap_or_else(|_| TextSize::from(u32::MAX))
}

/// Tokenizes the whole source. Never fails.
pub fn lex(source: &str) -> Vec<Token> {
    lex_from(source, 0)
}

/// Tokenizes `source[start..]` with spans relative to the whole source.
///
/// Empty when `start` is not a char boundary.
pub fn lex_from(source: &str, start: usize) -> Vec<Token> {
    let Some(rest) = source.get(start..) else {
        return Vec::new();
    };
    let shift = |span: Range<usize>| start + span.start..start + span.end;

    let mut tokens = Vec::new();
    let mut garbage: Option<Range<usize>> = None;

    for (result, span) in SyntaxKind::lexer(rest).spanned() {
        let span = shift(span);
        match result {
            Ok(kind) => {
                if let Some(run) = garbage.take() {
                    tokens.push(Token::from_range(SyntaxKind::Garbage, run));
                }
                tokens.push(Token::from_range(kind, span));
            }
            Err(()) => {
                garbage = Some(match garbage {
                    Some(run) => run.start..span.end,
                    None => span,
                });
            }
        }
    }

    if let Some(run) = garbage {
        tokens.push(Token::from_range(SyntaxKind::Garbage, run));
    }
    tokens
}

#[inline]
pub fn token_text<'q>(source: &'q str, token: &Token) -> &'q str {
    &source[Range::<usize>::from(token.span)]
}
