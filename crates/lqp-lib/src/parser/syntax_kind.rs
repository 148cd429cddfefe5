//! Token kinds for the query language.
//!
//! `SyntaxKind` serves two roles: token kinds produced by the lexer, and
//! pseudo-kinds that only appear in the parser's "expected" sets.
//! Logos derives token recognition; pseudo-kinds lack token/regex attributes.
//!
//! Suffix modifiers (`^2`, `~`, `~0.8`) are single tokens. A `^` that is not
//! followed by a number never becomes a `Boost`, so a malformed suffix is
//! reported at its first character.

use logos::Logos;

/// All token kinds, then pseudo-kinds, then the `__LAST` sentinel.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    #[token("(")]
    ParenOpen = 0,

    #[token(")")]
    ParenClose,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token(":")]
    Colon,

    /// Required marker.
    #[token("+")]
    Plus,

    /// Prohibited marker. Terms never start with `-`, so a leading hyphen always lexes here.
    #[token("-")]
    Minus,

    /// Fuzzy (terms) or proximity (phrases) suffix with an optional number.
    #[regex(r"~(?:[0-9]+(?:\.[0-9]+)?)?")]
    Fuzzy,

    /// Boost suffix. The number is mandatory.
    #[regex(r"\^[0-9]+(?:\.[0-9]+)?")]
    Boost,

    /// Quoted phrase, quotes included. No escapes.
    #[regex(r#""[^"]*""#)]
    Phrase,

    #[token("AND")]
    KwAnd,

    #[token("OR")]
    KwOr,

    #[token("NOT")]
    KwNot,

    /// Term text. Defined after keywords so they take precedence on equal length.
    #[regex(r"[\w*'][\w*'\-]*")]
    Word,

    #[regex(r"[ \t\r\n\x0C]+")]
    Whitespace,

    /// Coalesced unrecognized characters.
    Garbage,

    // --- Pseudo-kinds (expectations only) ---
    /// The `TO` separator inside a range. Lexed as `Word`.
    KwTo,
    /// Integer slop after a phrase's `~`.
    Distance,
    /// A range endpoint.
    RangeBound,
    Eof,

    // Must be last - used for bounds checking in `TokenSet`
    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

impl SyntaxKind {
    #[inline]
    pub fn is_keyword(self) -> bool {
        matches!(self, KwAnd | KwOr | KwNot)
    }

    /// Human-readable name used in "expected ..." messages.
    pub fn describe(self) -> &'static str {
        match self {
            ParenOpen => "`(`",
            ParenClose => "`)`",
            BracketOpen => "`[`",
            BracketClose => "`]`",
            BraceOpen => "`{`",
            BraceClose => "`}`",
            Colon => "`:`",
            Plus => "`+`",
            Minus => "`-`",
            Fuzzy => "`~`",
            Boost => "`^` followed by a number",
            Phrase => "phrase",
            KwAnd => "`AND`",
            KwOr => "`OR`",
            KwNot => "`NOT`",
            Word => "term",
            Whitespace => "whitespace",
            Garbage => "unrecognized input",
            KwTo => "`TO`",
            Distance => "integer distance after `~`",
            RangeBound => "range bound",
            Eof => "end of input",
            __LAST => unreachable!("sentinel is never a real kind"),
        }
    }

    fn from_index(index: u16) -> Option<SyntaxKind> {
        const ALL: [SyntaxKind; __LAST as usize] = [
            ParenOpen,
            ParenClose,
            BracketOpen,
            BracketClose,
            BraceOpen,
            BraceClose,
            Colon,
            Plus,
            Minus,
            Fuzzy,
            Boost,
            Phrase,
            KwAnd,
            KwOr,
            KwNot,
            Word,
            Whitespace,
            Garbage,
            KwTo,
            Distance,
            RangeBound,
            Eof,
        ];
        ALL.get(index as usize).copied()
    }
}

/// 64-bit bitset of `SyntaxKind`s for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenSet(u64);

impl TokenSet {
    pub const EMPTY: TokenSet = TokenSet(0);

    /// Panics at compile time if any kind's discriminant >= 64.
    #[inline]
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut bits = 0u64;
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(kind < 64, "SyntaxKind value exceeds TokenSet capacity");
            bits |= 1 << kind;
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn single(kind: SyntaxKind) -> Self {
        let kind = kind as u16;
        assert!(kind < 64, "SyntaxKind value exceeds TokenSet capacity");
        TokenSet(1 << kind)
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as u16;
        if kind >= 64 {
            return false;
        }
        self.0 & (1 << kind) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 | other.0)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Members in discriminant order.
    pub fn iter(self) -> impl Iterator<Item = SyntaxKind> {
        (0..__LAST as u16)
            .filter(move |&i| self.0 & (1 << i) != 0)
            .filter_map(SyntaxKind::from_index)
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Pre-defined token sets for the parser.
pub mod token_sets {
    use super::*;

    /// FIRST set of a clause with no marker and no field prefix.
    pub const CLAUSE_FIRST: TokenSet = TokenSet::new(&[ParenOpen, Plus, Minus, Phrase, Word]);

    /// FIRST set of a core value after a `+`/`-` marker.
    pub const CORE_FIRST: TokenSet = TokenSet::new(&[ParenOpen, Phrase, Word]);

    /// FIRST set of a core value after `field:`; only here may a range start.
    pub const FIELD_VALUE_FIRST: TokenSet =
        TokenSet::new(&[ParenOpen, BracketOpen, BraceOpen, Phrase, Word]);

    pub const KEYWORDS: TokenSet = TokenSet::new(&[KwAnd, KwOr, KwNot]);
}
