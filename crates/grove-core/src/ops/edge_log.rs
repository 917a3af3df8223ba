//! Serialized form of a grove
//!
//! An edge log is the full append-only history plus the declared roots.
//! Loading one rebuilds every derived index and resumes both id counters
//! past the highest id in the log.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

use super::store::GroveStore;
use crate::errors::{GroveError, Result};
use crate::model::{Edge, NodeId, NodeType};
use crate::schema::SchemaRegistry;

pub const EDGE_LOG_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RootDecl {
    pub id: NodeId,
    pub node_type: NodeType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeLog {
    pub schema_version: u32,
    pub roots: Vec<RootDecl>,
    pub edges: Vec<Edge>,
}

impl EdgeLog {
    /// Parse an edge log from JSON text
    ///
    /// # Errors
    ///
    /// Returns `Serialization` when the text is not a valid edge log.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// # Errors
    ///
    /// Returns `Serialization` if encoding fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl GroveStore {
    /// Export the complete history and root declarations
    pub fn to_edge_log(&self) -> EdgeLog {
        EdgeLog {
            schema_version: EDGE_LOG_SCHEMA_VERSION,
            roots: self
                .roots()
                .map(|(id, node_type)| RootDecl {
                    id,
                    node_type: node_type.clone(),
                })
                .collect(),
            edges: self.edges().to_vec(),
        }
    }

    /// Rebuild a store from an edge log
    ///
    /// Replays the log in order, so every edge must leave a node that is a
    /// root or was created by an earlier edge.
    ///
    /// # Errors
    ///
    /// * `InvalidEdgeLog` - unsupported version, non-increasing edge ids,
    ///   a destination created twice, an unknown source, a source type
    ///   that disagrees with the creating edge,
    ///   or an id of `u64::MAX`
    /// * `IllegalPosition` - an edge violates the registry
    /// * `InvalidName` - an attribute position carries a malformed name
    pub fn from_edge_log(log: EdgeLog, registry: Arc<SchemaRegistry>) -> Result<Self> {
        if log.schema_version != EDGE_LOG_SCHEMA_VERSION {
            return Err(invalid(format!(
                "unsupported schema_version {}, expected {}",
                log.schema_version, EDGE_LOG_SCHEMA_VERSION
            )));
        }

        let mut store = GroveStore::with_registry(registry);
        let mut seen: HashSet<NodeId> = HashSet::new();
        let mut max_node: Option<u64> = None;
        let mut max_edge: Option<u64> = None;

        for root in log.roots {
            if !seen.insert(root.id) {
                return Err(invalid(format!("root {} declared twice", root.id)));
            }
            max_node = max_node.max(Some(root.id.get()));
            store.insert_root(root.id, root.node_type);
        }

        for edge in log.edges {
            if max_edge.is_some_and(|max| edge.id.get() <= max) {
                return Err(invalid(format!("edge id {} is out of order", edge.id)));
            }

            edge.position.check_name()?;

            if !store.registry().is_legal(&edge.from_type, &edge.position) {
                return Err(GroveError::IllegalPosition {
                    from_type: edge.from_type.constructor_token(),
                    position: edge.position.to_string(),
                });
            }

            match store.node_type(edge.from) {
                None => {
                    return Err(invalid(format!(
                        "{} leaves {} before it exists",
                        edge.id, edge.from
                    )))
                }
                Some(recorded) if recorded != &edge.from_type => {
                    return Err(invalid(format!(
                        "{} claims {} is {}, recorded {}",
                        edge.id, edge.from, edge.from_type, recorded
                    )))
                }
                Some(_) => {}
            }

            if !seen.insert(edge.to) {
                return Err(invalid(format!("{} creates {} twice", edge.id, edge.to)));
            }

            max_edge = Some(edge.id.get());
            max_node = max_node.max(Some(edge.to.get()));
            store.append(edge);
        }

        store.set_counters(resume_after(max_node, "node")?, resume_after(max_edge, "edge")?);

        tracing::debug!(edge_count = store.edge_count(), "loaded edge log");
        Ok(store)
    }
}

/// Next free id after the highest one in the log
fn resume_after(max: Option<u64>, counter: &str) -> Result<u64> {
    match max {
        None => Ok(0),
        Some(max) => max
            .checked_add(1)
            .ok_or_else(|| invalid(format!("{} id {} leaves no id to allocate", counter, max))),
    }
}

fn invalid(reason: String) -> GroveError {
    GroveError::InvalidEdgeLog { reason }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EdgeId, Position};

    fn el(tag: &str) -> NodeType {
        NodeType::element(tag).unwrap()
    }

    fn sample() -> GroveStore {
        let mut store = GroveStore::new();
        let body = store.declare_root(el("body")).unwrap();
        let p = store
            .insert_edge(body, &el("body"), Position::FirstChild, el("p"))
            .unwrap();
        store
            .insert_edge(p.node_id, &el("p"), Position::FirstChild, NodeType::leaf("hi"))
            .unwrap();
        store.retire_edge(p.edge_id).unwrap();
        store
    }

    #[test]
    fn test_reload_resumes_counters() {
        let store = sample();
        let json = store.to_edge_log().to_json_pretty().unwrap();

        let log = EdgeLog::from_json(&json).unwrap();
        let mut reloaded =
            GroveStore::from_edge_log(log, Arc::new(SchemaRegistry::html())).unwrap();

        assert_eq!(reloaded.edges(), store.edges());
        assert_eq!(reloaded.allocate_node_id().unwrap(), NodeId::new(3));
        assert_eq!(reloaded.allocate_edge_id().unwrap(), EdgeId::new(2));
    }

    #[test]
    fn test_rejects_out_of_order_edges() {
        let mut log = sample().to_edge_log();
        log.edges.swap(0, 1);
        let result = GroveStore::from_edge_log(log, Arc::new(SchemaRegistry::html()));
        assert!(matches!(result, Err(GroveError::InvalidEdgeLog { .. })));
    }

    #[test]
    fn test_rejects_illegal_position() {
        let mut log = sample().to_edge_log();
        log.edges[0].position = Position::Named("bogus".to_string());
        let result = GroveStore::from_edge_log(log, Arc::new(SchemaRegistry::html()));
        assert!(matches!(result, Err(GroveError::IllegalPosition { .. })));
    }

    #[test]
    fn test_rejects_unknown_version() {
        let mut log = sample().to_edge_log();
        log.schema_version = 99;
        let result = GroveStore::from_edge_log(log, Arc::new(SchemaRegistry::html()));
        assert!(matches!(result, Err(GroveError::InvalidEdgeLog { .. })));
    }

    #[test]
    fn test_rejects_hand_built_attr_name() {
        let mut log = sample().to_edge_log();
        let body = log.roots[0].id;
        log.edges.push(Edge {
            id: EdgeId::new(2),
            from: body,
            from_type: el("body"),
            position: Position::Attr("x><b".to_string()),
            to: NodeId::new(3),
            to_type: NodeType::leaf("v"),
            status: crate::model::EdgeStatus::Active,
        });
        let result = GroveStore::from_edge_log(log, Arc::new(SchemaRegistry::html()));
        assert!(matches!(result, Err(GroveError::InvalidName { .. })));
    }
}
