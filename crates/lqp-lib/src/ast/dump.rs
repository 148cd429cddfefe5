//! Indented tree dump for tests and the CLI `ast` command.
//!
//! One node per line, two spaces per level. A `List` line marks a sequence of
//! two or more clauses, so a collapsed group body is visible at a glance:
//!
//! ```text
//! Group
//!   List
//!     Term "bar"
//!     Group
//!       Term "baz"
//! ```

use std::fmt::Write;

use super::{Marker, Node, NodeKind, Query, Similarity};

impl Query {
    pub fn dump(&self) -> String {
        let mut out = String::new();
        format_query(self, 0, &mut out).expect("String write never fails");
        out
    }
}

impl Node {
    pub fn dump(&self) -> String {
        let mut out = String::new();
        format_node(self, 0, &mut out).expect("String write never fails");
        out
    }
}

fn format_query(query: &Query, depth: usize, w: &mut impl Write) -> std::fmt::Result {
    match query {
        Query::Single(node) => format_node(node, depth, w),
        Query::List(nodes) => {
            writeln!(w, "{}List", "  ".repeat(depth))?;
            for node in nodes {
                format_node(node, depth + 1, w)?;
            }
            Ok(())
        }
    }
}

fn format_node(node: &Node, depth: usize, w: &mut impl Write) -> std::fmt::Result {
    w.write_str(&"  ".repeat(depth))?;

    match &node.kind {
        NodeKind::Term { text, .. } => write!(w, "Term \"{}\"", text)?,
        NodeKind::Phrase { text, .. } => write!(w, "Phrase \"{}\"", text)?,
        NodeKind::Group { .. } => w.write_str("Group")?,
        NodeKind::Range {
            from,
            to,
            inclusive,
        } => {
            let (open, close) = if *inclusive { ('[', ']') } else { ('{', '}') };
            write!(w, "Range {}{} TO {}{}", open, from, to, close)?;
        }
    }

    let modifiers = &node.modifiers;
    if let Some(field) = &modifiers.field {
        write!(w, " field={}", field)?;
    }
    match modifiers.marker {
        Some(Marker::Required) => w.write_str(" required")?,
        Some(Marker::Prohibited) => w.write_str(" prohibited")?,
        None => {}
    }
    match &node.kind {
        NodeKind::Term {
            similarity: Some(Similarity::Default),
            ..
        } => w.write_str(" similarity")?,
        NodeKind::Term {
            similarity: Some(Similarity::Value(value)),
            ..
        } => write!(w, " similarity={}", value)?,
        NodeKind::Phrase {
            distance: Some(distance),
            ..
        } => write!(w, " distance={}", distance)?,
        _ => {}
    }
    if let Some(boost) = &modifiers.boost {
        write!(w, " boost={}", boost)?;
    }
    if let Some(op) = modifiers.operator {
        write!(w, " op={}", op)?;
    }
    w.write_char('\n')?;

    if let NodeKind::Group { body } = &node.kind {
        format_query(body, depth + 1, w)?;
    }
    Ok(())
}
