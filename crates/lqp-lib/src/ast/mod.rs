//! Typed AST for parsed query strings.
//!
//! A [`Query`] is the result of a clause sequence: either one bare [`Node`] or an
//! ordered list of two or more. The same type is the body of a [`NodeKind::Group`],
//! so the collapsing rule holds at every depth.
//!
//! Every node pairs a [`NodeKind`] (the core value) with [`Modifiers`] that are
//! orthogonal to it: field prefix, required/prohibited marker, boost, and the
//! boolean keyword joining it to its previous sibling.

mod dump;
mod json;
mod render;

#[cfg(test)]
mod mod_tests;

use std::fmt;

/// Output of a clause sequence after collapsing.
///
/// The parser only produces `List` with two or more nodes; a single clause is
/// `Single`. The variants are public for matching, so a hand-built `List` can
/// break this. Build through [`Query::from_clauses`] and check foreign values
/// with [`Query::is_collapsed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Single(Box<Node>),
    /// Two or more clauses.
    List(Vec<Node>),
}

impl Query {
    /// Collapses parsed clauses: one clause becomes `Single`, more become `List`.
    ///
    /// Returns `None` for an empty vector; a sequence always has a first clause.
    pub fn from_clauses(mut clauses: Vec<Node>) -> Option<Self> {
        match clauses.len() {
            0 => None,
            1 => clauses.pop().map(|node| Query::Single(Box::new(node))),
            _ => Some(Query::List(clauses)),
        }
    }

    /// Whether every sequence, including group bodies, is in collapsed form.
    pub fn is_collapsed(&self) -> bool {
        let own = match self {
            Query::Single(_) => true,
            Query::List(nodes) => nodes.len() >= 2,
        };
        own && self.clauses().iter().all(|node| match &node.kind {
            NodeKind::Group { body } => body.is_collapsed(),
            _ => true,
        })
    }

    /// Clauses in source order, regardless of representation.
    pub fn clauses(&self) -> &[Node] {
        match self {
            Query::Single(node) => std::slice::from_ref(node.as_ref()),
            Query::List(nodes) => nodes,
        }
    }

    pub fn len(&self) -> usize {
        self.clauses().len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses().is_empty()
    }

    pub fn as_single(&self) -> Option<&Node> {
        match self {
            Query::Single(node) => Some(node),
            Query::List(_) => None,
        }
    }
}

/// One clause: a core value plus its modifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub modifiers: Modifiers,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Free term. `text` may contain `-`, `'`, and `*` wildcards.
    Term {
        text: String,
        similarity: Option<Similarity>,
    },
    /// Quoted phrase; `text` excludes the quotes, spaces preserved.
    Phrase {
        text: String,
        distance: Option<String>,
    },
    Group {
        body: Query,
    },
    /// `[from TO to]` is inclusive, `{from TO to}` exclusive. Bounds are literal text.
    Range {
        from: String,
        to: String,
        inclusive: bool,
    },
}

/// Fuzziness of a term: `foo~` or `foo~0.8`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Similarity {
    Default,
    /// The literal as written, e.g. `"0.8"`.
    Value(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub field: Option<String>,
    pub marker: Option<Marker>,
    /// Literal boost factor, e.g. `"0.1"`.
    pub boost: Option<String>,
    /// Keyword that joined this node to its previous sibling. Never set on a first clause.
    pub operator: Option<Operator>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    Required,
    Prohibited,
}

/// Boolean keyword between clauses.
///
/// `Not` is a joining keyword like the others; the parser attaches it to the
/// following clause and leaves its meaning to the consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    And,
    Or,
    Not,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            modifiers: Modifiers::default(),
        }
    }

    pub fn term(text: impl Into<String>) -> Self {
        Self::new(NodeKind::Term {
            text: text.into(),
            similarity: None,
        })
    }

    pub fn phrase(text: impl Into<String>) -> Self {
        Self::new(NodeKind::Phrase {
            text: text.into(),
            distance: None,
        })
    }

    pub fn group(body: Query) -> Self {
        Self::new(NodeKind::Group { body })
    }

    pub fn range(from: impl Into<String>, to: impl Into<String>, inclusive: bool) -> Self {
        Self::new(NodeKind::Range {
            from: from.into(),
            to: to.into(),
            inclusive,
        })
    }

    pub fn with_similarity(mut self, similarity: Similarity) -> Self {
        if let NodeKind::Term {
            similarity: slot, ..
        } = &mut self.kind
        {
            *slot = Some(similarity);
        }
        self
    }

    pub fn with_distance(mut self, distance: impl Into<String>) -> Self {
        if let NodeKind::Phrase { distance: slot, .. } = &mut self.kind {
            *slot = Some(distance.into());
        }
        self
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.modifiers.field = Some(field.into());
        self
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.modifiers.marker = Some(marker);
        self
    }

    pub fn with_boost(mut self, boost: impl Into<String>) -> Self {
        self.modifiers.boost = Some(boost.into());
        self
    }

    pub fn with_operator(mut self, operator: Operator) -> Self {
        self.modifiers.operator = Some(operator);
        self
    }

    /// Term or phrase text; `None` for groups and ranges.
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Term { text, .. } | NodeKind::Phrase { text, .. } => Some(text),
            NodeKind::Group { .. } | NodeKind::Range { .. } => None,
        }
    }

    pub fn field(&self) -> Option<&str> {
        self.modifiers.field.as_deref()
    }

    pub fn operator(&self) -> Option<Operator> {
        self.modifiers.operator
    }

    pub fn is_required(&self) -> bool {
        self.modifiers.marker == Some(Marker::Required)
    }

    pub fn is_prohibited(&self) -> bool {
        self.modifiers.marker == Some(Marker::Prohibited)
    }
}

impl Marker {
    pub fn as_str(self) -> &'static str {
        match self {
            Marker::Required => "+",
            Marker::Prohibited => "-",
        }
    }
}

impl Operator {
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Not => "NOT",
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
