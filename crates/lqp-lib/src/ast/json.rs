//! Serde serialization of the AST.
//!
//! The core value is keyed by kind (`term`, `phrase`, `group`,
//! `inclusive_range`, `exclusive_range`) with modifiers flattened alongside it.
//! Markers serialize as their sigil: `"required": "+"`, `"prohibited": "-"`.
//! `Query::List` serializes as an array and `Query::Single` as the bare node,
//! so the collapsing rule is visible in JSON.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use super::{Marker, Node, NodeKind, Operator, Query, Similarity};

impl Serialize for Query {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Query::Single(node) => node.serialize(serializer),
            Query::List(nodes) => {
                let mut seq = serializer.serialize_seq(Some(nodes.len()))?;
                for node in nodes {
                    seq.serialize_element(node)?;
                }
                seq.end()
            }
        }
    }
}

#[derive(Serialize)]
struct RangeBounds<'a> {
    from: &'a str,
    to: &'a str,
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;

        match &self.kind {
            NodeKind::Term { text, similarity } => {
                map.serialize_entry("term", text)?;
                match similarity {
                    Some(Similarity::Default) => map.serialize_entry("similarity", &())?,
                    Some(Similarity::Value(value)) => map.serialize_entry("similarity", value)?,
                    None => {}
                }
            }
            NodeKind::Phrase { text, distance } => {
                map.serialize_entry("phrase", text)?;
                if let Some(distance) = distance {
                    map.serialize_entry("distance", distance)?;
                }
            }
            NodeKind::Group { body } => map.serialize_entry("group", body)?,
            NodeKind::Range {
                from,
                to,
                inclusive,
            } => {
                let key = if *inclusive {
                    "inclusive_range"
                } else {
                    "exclusive_range"
                };
                map.serialize_entry(key, &RangeBounds { from, to })?;
            }
        }

        let modifiers = &self.modifiers;
        if let Some(field) = &modifiers.field {
            map.serialize_entry("field", field)?;
        }
        if let Some(marker) = modifiers.marker {
            let key = match marker {
                Marker::Required => "required",
                Marker::Prohibited => "prohibited",
            };
            map.serialize_entry(key, marker.as_str())?;
        }
        if let Some(boost) = &modifiers.boost {
            map.serialize_entry("boost", boost)?;
        }
        if let Some(op) = modifiers.operator {
            map.serialize_entry("op", &op)?;
        }

        map.end()
    }
}

impl Serialize for Operator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
