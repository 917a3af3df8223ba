//! Import of the linked-list grove encoding
//!
//! The older encoding stores edges as 7-tuples of strings
//! `[edge_id, from_id, from_type, position, to_id, to_type, status]`.
//! Children hang off an element's `content` position either directly or
//! through chains of `linkedList` cells (`head` item, `tail` rest).
//! Attributes are separate `attribute` nodes with a `value` edge, named by
//! the position they hang from. Any other non-attribute edge leaving an
//! element is skipped with a warning.
//! Leaves use the `string` constructor and keep their literal in `to_id`.
//!
//! Import rewrites this into the canonical form: children become a
//! `firstChild` edge followed by a `nextElement` chain, and each attribute
//! becomes one `attr_<name>` edge to a leaf.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::errors::{GroveError, Result};
use crate::model::{NodeId, NodeType, Position};
use crate::ops::{mutator, GroveStore};
use crate::schema::SchemaRegistry;

const LIST: &str = "linkedList";
const ATTRIBUTE: &str = "attribute";
const STRING: &str = "string";
const CONTENT: &str = "content";

/// One edge of the legacy encoding
///
/// Deserializes from a 7-element JSON array as well as from an object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyEdge {
    pub edge_id: String,
    pub from_id: String,
    pub from_type: String,
    pub position: String,
    pub to_id: String,
    pub to_type: String,
    pub status: String,
}

/// Result of a legacy import
#[derive(Debug, Clone)]
pub struct Imported {
    pub store: GroveStore,
    pub root: NodeId,
    pub root_type: NodeType,
}

/// Parse a JSON array of legacy edges
///
/// # Errors
///
/// Returns `Serialization` for malformed JSON.
pub fn parse_legacy_json(text: &str) -> Result<Vec<LegacyEdge>> {
    Ok(serde_json::from_str(text)?)
}

/// Convert a legacy edge set into a canonical store
///
/// Only `active` legacy edges are imported. Edges sharing a source are
/// ordered by the numeric suffix of their legacy id (`edge2` before
/// `edge10`).
///
/// # Errors
///
/// * `InvalidConstructor` - an unknown constructor token
/// * `LegacyImport` - unknown status, a cycle, or an attribute or list
///   where neither can appear
/// * `IllegalPosition` - an element gets children the registry forbids
pub fn import_linked_list(
    edges: &[LegacyEdge],
    root_id: &str,
    root_constructor: &str,
    registry: Arc<SchemaRegistry>,
) -> Result<Imported> {
    let mut active = Vec::new();
    for edge in edges {
        match edge.status.as_str() {
            "active" => active.push(edge),
            "retired" => {}
            other => {
                return Err(import_error(format!(
                    "{} has unknown status '{}'",
                    edge.edge_id, other
                )))
            }
        }
    }
    active.sort_by_key(|edge| (numeric_suffix(&edge.edge_id), edge.edge_id.as_str()));

    let mut outgoing: HashMap<&str, Vec<&LegacyEdge>> = HashMap::new();
    for edge in active {
        outgoing.entry(edge.from_id.as_str()).or_default().push(edge);
    }

    let root_type = NodeType::parse_constructor(root_constructor, Some(root_id))?;
    let mut store = GroveStore::with_registry(registry);
    let root = store.declare_root(root_type.clone())?;

    let mut importer = Importer {
        outgoing,
        store,
        visited: HashSet::new(),
    };
    if root_type.is_element() {
        importer.element(root_id, root)?;
    }

    tracing::debug!(
        edge_count = importer.store.edge_count(),
        root_id = %root,
        "imported legacy grove"
    );

    Ok(Imported {
        store: importer.store,
        root,
        root_type,
    })
}

struct Importer<'a> {
    outgoing: HashMap<&'a str, Vec<&'a LegacyEdge>>,
    store: GroveStore,
    visited: HashSet<&'a str>,
}

impl<'a> Importer<'a> {
    fn edges(&self, from: &str) -> Vec<&'a LegacyEdge> {
        self.outgoing.get(from).cloned().unwrap_or_default()
    }

    fn enter(&mut self, legacy_id: &'a str) -> Result<()> {
        if self.visited.insert(legacy_id) {
            Ok(())
        } else {
            Err(import_error(format!("node {} reached twice", legacy_id)))
        }
    }

    fn element(&mut self, legacy_id: &'a str, node: NodeId) -> Result<()> {
        self.enter(legacy_id)?;

        let mut children: Vec<&'a LegacyEdge> = Vec::new();
        for edge in self.edges(legacy_id) {
            if edge.to_type == ATTRIBUTE {
                let value = self.attribute_value(edge)?;
                mutator::append_attribute(&mut self.store, node, &edge.position, value)?;
            } else if edge.position != CONTENT {
                tracing::warn!(
                    edge_id = %edge.edge_id,
                    position = %edge.position,
                    "skipping legacy edge outside content"
                );
            } else if edge.to_type == LIST {
                self.flatten_list(&edge.to_id, &mut children)?;
            } else {
                children.push(edge);
            }
        }

        let mut previous: Option<NodeId> = None;
        for child in children {
            let to_type = NodeType::parse_constructor(&child.to_type, Some(&child.to_id))?;
            let (from, position) = match previous {
                None => (node, Position::FirstChild),
                Some(prev) => (prev, Position::NextElement),
            };
            let from_type = self.store.require_node_type(from)?.clone();
            let inserted = self
                .store
                .insert_edge(from, &from_type, position, to_type.clone())?;

            if to_type.is_element() {
                self.element(&child.to_id, inserted.node_id)?;
            }
            previous = Some(inserted.node_id);
        }

        Ok(())
    }

    /// Collect list items in order: each cell's `head` items, then its `tail`
    fn flatten_list(&mut self, cell: &'a str, items: &mut Vec<&'a LegacyEdge>) -> Result<()> {
        self.enter(cell)?;
        let edges = self.edges(cell);

        for edge in edges.iter().copied().filter(|e| e.position == "head") {
            match edge.to_type.as_str() {
                LIST => self.flatten_list(&edge.to_id, items)?,
                ATTRIBUTE => {
                    return Err(import_error(format!(
                        "{} puts an attribute inside a list",
                        edge.edge_id
                    )))
                }
                _ => items.push(edge),
            }
        }

        for edge in edges.iter().copied().filter(|e| e.position == "tail") {
            match edge.to_type.as_str() {
                LIST => self.flatten_list(&edge.to_id, items)?,
                _ => items.push(edge),
            }
        }

        Ok(())
    }

    /// Concatenate the literal payloads hanging off an attribute node
    fn attribute_value(&mut self, attr_edge: &'a LegacyEdge) -> Result<String> {
        self.enter(&attr_edge.to_id)?;

        let mut value = String::new();
        for edge in self.edges(&attr_edge.to_id) {
            if edge.position != "value" || edge.to_type != STRING {
                return Err(import_error(format!(
                    "attribute {} has non-literal value edge {}",
                    attr_edge.to_id, edge.edge_id
                )));
            }
            value.push_str(&edge.to_id);
        }
        Ok(value)
    }
}

fn numeric_suffix(id: &str) -> u64 {
    let digits_start = id
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map_or(id.len(), |(i, _)| i);
    id[digits_start..].parse().unwrap_or(u64::MAX)
}

fn import_error(reason: String) -> GroveError {
    GroveError::LegacyImport { reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_suffix() {
        assert_eq!(numeric_suffix("edge7"), 7);
        assert_eq!(numeric_suffix("edge10"), 10);
        assert_eq!(numeric_suffix("e"), u64::MAX);
    }

    #[test]
    fn test_legacy_edge_from_array() {
        let edges = parse_legacy_json(
            r#"[["edge0","node0","<body>","content","Hi","string","active"]]"#,
        )
        .unwrap();
        assert_eq!(edges[0].to_id, "Hi");
        assert_eq!(edges[0].to_type, "string");
    }

    #[test]
    fn test_unknown_status_rejected() {
        let edges = parse_legacy_json(
            r#"[["edge0","node0","<body>","content","Hi","string","pending"]]"#,
        )
        .unwrap();
        let result =
            import_linked_list(&edges, "node0", "<body>", Arc::new(SchemaRegistry::html()));
        assert!(matches!(result, Err(GroveError::LegacyImport { .. })));
    }

    #[test]
    fn test_retired_legacy_edges_are_skipped() {
        let edges = parse_legacy_json(
            r#"[
                ["edge0","node0","<p>","content","old","string","retired"],
                ["edge1","node0","<p>","content","new","string","active"]
            ]"#,
        )
        .unwrap();
        let imported =
            import_linked_list(&edges, "node0", "<p>", Arc::new(SchemaRegistry::html())).unwrap();
        assert_eq!(imported.store.edge_count(), 1);
    }
}
