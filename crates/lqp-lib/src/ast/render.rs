//! Canonical query-string rendering.
//!
//! Output re-parses to an equal AST: clauses are separated by one space,
//! explicit keywords are kept, and modifiers appear in source order
//! (marker, field, core value, fuzzy/proximity suffix, boost).

use std::fmt::{self, Display, Write};

use super::{Node, NodeKind, Query, Similarity};

impl Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.clauses().iter().enumerate() {
            if i > 0 {
                f.write_char(' ')?;
                if let Some(op) = node.modifiers.operator {
                    write!(f, "{} ", op)?;
                }
            }
            write!(f, "{}", node)?;
        }
        Ok(())
    }
}

/// Renders the clause without its joining operator, which belongs to the enclosing sequence.
impl Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(marker) = self.modifiers.marker {
            write!(f, "{}", marker)?;
        }
        if let Some(field) = &self.modifiers.field {
            write!(f, "{}:", field)?;
        }

        match &self.kind {
            NodeKind::Term { text, similarity } => {
                f.write_str(text)?;
                match similarity {
                    Some(Similarity::Default) => f.write_char('~')?,
                    Some(Similarity::Value(value)) => write!(f, "~{}", value)?,
                    None => {}
                }
            }
            NodeKind::Phrase { text, distance } => {
                write!(f, "\"{}\"", text)?;
                if let Some(distance) = distance {
                    write!(f, "~{}", distance)?;
                }
            }
            NodeKind::Group { body } => write!(f, "({})", body)?,
            NodeKind::Range {
                from,
                to,
                inclusive,
            } => {
                let (open, close) = if *inclusive { ('[', ']') } else { ('{', '}') };
                write!(f, "{}{} TO {}{}", open, from, to, close)?;
            }
        }

        if let Some(boost) = &self.modifiers.boost {
            write!(f, "^{}", boost)?;
        }
        Ok(())
    }
}
