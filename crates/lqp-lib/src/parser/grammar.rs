//! Grammar productions for the query language.
//!
//! Each production takes the token index to start from and returns the parsed
//! value with the index just past it, or `None` after recording what it
//! expected. Alternatives are tried by calling productions again from the
//! same index.
//!
//! ```text
//! query     = WS? sequence WS? EOF
//! sequence  = clause (WS (keyword WS)? clause)*
//! clause    = marker? (field ":")? core suffix? boost?
//! core      = term | phrase | group | range      ; range only after a field
//! group     = "(" WS? sequence WS? ")"
//! range     = ("[" | "{") WS? bound WS "TO" WS bound WS? ("]" | "}")
//! bound     = [^ WS "]" "}"]+                   ; raw characters, not tokens
//! ```

use super::core::Parser;
use super::lexer::text_size;
use super::syntax_kind::SyntaxKind::{self, *};
use super::syntax_kind::TokenSet;
use super::syntax_kind::token_sets::{CLAUSE_FIRST, CORE_FIRST, FIELD_VALUE_FIRST, KEYWORDS};
use crate::ast::{Marker, Modifiers, Node, NodeKind, Operator, Query, Similarity};

type Parsed<T> = Option<(T, usize)>;

impl<'src> Parser<'src> {
    pub(super) fn parse_root(&mut self) -> Option<Query> {
        let pos = self.skip_whitespace(0);
        let (query, pos) = self.parse_sequence(pos)?;
        let pos = self.skip_whitespace(pos);
        if self.kind_at(pos) != Eof {
            return self.fail(pos, TokenSet::single(Eof));
        }
        Some(query)
    }

    /// Clauses separated by whitespace and optional keywords, collapsed into a [`Query`].
    fn parse_sequence(&mut self, pos: usize) -> Parsed<Query> {
        let (first, mut pos) = self.parse_clause(pos, None)?;
        let mut clauses = vec![first];

        while let Some((clause, next)) = self.parse_joined_clause(pos) {
            clauses.push(clause);
            pos = next;
        }

        let query = Query::from_clauses(clauses)?;
        Some((query, pos))
    }

    /// `WS (keyword WS)? clause`; the keyword becomes the clause's operator.
    fn parse_joined_clause(&mut self, pos: usize) -> Parsed<Node> {
        let pos = self.expect(pos, Whitespace)?;

        let operator = match self.kind_at(pos) {
            KwAnd => Some(Operator::And),
            KwOr => Some(Operator::Or),
            KwNot => Some(Operator::Not),
            _ => {
                self.missed(pos, KEYWORDS);
                None
            }
        };

        let pos = match operator {
            Some(_) => self.expect(pos + 1, Whitespace)?,
            None => pos,
        };

        self.parse_clause(pos, operator)
    }

    fn parse_clause(&mut self, pos: usize, operator: Option<Operator>) -> Parsed<Node> {
        let (marker, pos) = match self.kind_at(pos) {
            Plus => (Some(Marker::Required), pos + 1),
            Minus => (Some(Marker::Prohibited), pos + 1),
            _ => (None, pos),
        };

        let (field, pos) = match self.peek_field(pos) {
            Some(name) => (Some(name.to_string()), pos + 2),
            None => (None, pos),
        };

        let (kind, pos) = match self.kind_at(pos) {
            Word => self.parse_term(pos),
            Phrase => self.parse_phrase(pos),
            ParenOpen => self.parse_group(pos)?,
            BracketOpen | BraceOpen if field.is_some() => self.parse_range(pos)?,
            _ => {
                let first = match (&field, marker) {
                    (Some(_), _) => FIELD_VALUE_FIRST,
                    (None, Some(_)) => CORE_FIRST,
                    (None, None) => CLAUSE_FIRST,
                };
                return self.fail(pos, first);
            }
        };

        let (boost, pos) = self.parse_boost(pos);

        let node = Node {
            kind,
            modifiers: Modifiers {
                field,
                marker,
                boost,
                operator,
            },
        };
        Some((node, pos))
    }

    /// LL(2): a wildcard-free `Word` immediately followed by `:` names a field.
    fn peek_field(&mut self, pos: usize) -> Option<&'src str> {
        if self.kind_at(pos) != Word || self.kind_at(pos + 1) != Colon {
            return None;
        }
        let name = self.text_at(pos);
        (!name.contains('*')).then_some(name)
    }

    fn parse_term(&mut self, pos: usize) -> (NodeKind, usize) {
        let text = self.text_at(pos).to_string();
        let pos = pos + 1;

        if self.kind_at(pos) != Fuzzy {
            self.missed(pos, TokenSet::single(Fuzzy));
            let kind = NodeKind::Term {
                text,
                similarity: None,
            };
            return (kind, pos);
        }

        let similarity = match suffix_literal(self.text_at(pos)) {
            "" => Similarity::Default,
            value => Similarity::Value(value.to_string()),
        };
        let kind = NodeKind::Term {
            text,
            similarity: Some(similarity),
        };
        (kind, pos + 1)
    }

    /// A phrase's `~` must carry an integer; a bare or decimal `~` is left unconsumed.
    fn parse_phrase(&mut self, pos: usize) -> (NodeKind, usize) {
        let quoted = self.text_at(pos);
        let text = quoted
            .strip_prefix('"')
            .and_then(|s| s.strip_suffix('"'))
            .unwrap_or(quoted)
            .to_string();
        let pos = pos + 1;

        let distance = match self.kind_at(pos) {
            Fuzzy => {
                let literal = suffix_literal(self.text_at(pos));
                if !literal.is_empty() && literal.bytes().all(|b| b.is_ascii_digit()) {
                    Some(literal.to_string())
                } else {
                    self.missed(pos, TokenSet::single(Distance));
                    None
                }
            }
            _ => {
                self.missed(pos, TokenSet::single(Fuzzy));
                None
            }
        };

        let next = if distance.is_some() { pos + 1 } else { pos };
        (NodeKind::Phrase { text, distance }, next)
    }

    fn parse_group(&mut self, pos: usize) -> Parsed<NodeKind> {
        if !self.enter_recursion(pos) {
            return None;
        }
        let result = self.parse_group_body(pos);
        self.exit_recursion();
        result
    }

    fn parse_group_body(&mut self, pos: usize) -> Parsed<NodeKind> {
        let pos = self.expect(pos, ParenOpen)?;
        let pos = self.skip_whitespace(pos);
        let (body, pos) = self.parse_sequence(pos)?;
        let pos = self.skip_whitespace(pos);
        let pos = self.expect(pos, ParenClose)?;
        Some((NodeKind::Group { body }, pos))
    }

    /// `[from TO to]` or `{from TO to}`; the closing bracket must match the opening one.
    fn parse_range(&mut self, pos: usize) -> Parsed<NodeKind> {
        let (inclusive, close) = match self.kind_at(pos) {
            BracketOpen => (true, BracketClose),
            BraceOpen => (false, BraceClose),
            _ => return self.fail(pos, TokenSet::new(&[BracketOpen, BraceOpen])),
        };

        let pos = self.skip_whitespace(pos + 1);
        let (from, pos) = self.parse_bound(pos)?;
        let pos = self.expect(pos, Whitespace)?;
        let pos = self.expect_to(pos)?;
        let pos = self.expect(pos, Whitespace)?;
        let (to, pos) = self.parse_bound(pos)?;
        let pos = self.skip_whitespace(pos);
        let pos = self.expect(pos, close)?;

        let kind = NodeKind::Range {
            from: from.to_string(),
            to: to.to_string(),
            inclusive,
        };
        Some((kind, pos))
    }

    /// Characters up to whitespace or a closing bracket, as written in the source.
    ///
    /// Scanned on bytes rather than tokens: a quote inside a bound is plain text.
    fn parse_bound(&mut self, start: usize) -> Parsed<&'src str> {
        let source = self.source;
        let from = usize::from(self.offset_at(start));
        let len = source[from..]
            .bytes()
            .position(ends_bound)
            .unwrap_or(source.len() - from);
        if len == 0 {
            return self.fail(start, TokenSet::single(RangeBound));
        }

        let to = from + len;
        let pos = self.token_at_offset(text_size(to));
        Some((&source[from..to], pos))
    }

    fn expect_to(&mut self, pos: usize) -> Option<usize> {
        if self.kind_at(pos) == Word && self.text_at(pos) == "TO" {
            Some(pos + 1)
        } else {
            self.fail(pos, TokenSet::single(KwTo))
        }
    }

    fn parse_boost(&mut self, pos: usize) -> (Option<String>, usize) {
        if self.kind_at(pos) == SyntaxKind::Boost {
            let factor = suffix_literal(self.text_at(pos)).to_string();
            (Some(factor), pos + 1)
        } else {
            self.missed(pos, TokenSet::single(SyntaxKind::Boost));
            (None, pos)
        }
    }
}

fn ends_bound(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n' | b'\x0C' | b']' | b'}')
}

/// The number after a one-character `~` or `^` sigil.
fn suffix_literal(token: &str) -> &str {
    token.get(1..).unwrap_or_default()
}
