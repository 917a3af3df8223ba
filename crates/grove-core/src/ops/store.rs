use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::errors::{GroveError, Result};
use crate::model::{Edge, EdgeId, EdgeStatus, NodeId, NodeType, Position};
use crate::schema::SchemaRegistry;

/// Ids produced by a successful [`GroveStore::insert_edge`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inserted {
    pub edge_id: EdgeId,
    pub node_id: NodeId,
}

/// The grove: an append-only edge log plus id allocation state
///
/// Nodes are implicit. A node exists once an edge creates it (or once it
/// is declared as a root) and its type is whatever that creating edge, or
/// the root declaration, says.
///
/// The adjacency and type maps are derived from the log and maintained
/// incrementally; `edges_from` never scans the whole log.
#[derive(Debug, Clone)]
pub struct GroveStore {
    registry: Arc<SchemaRegistry>,
    /// Edge log in ascending edge-id order
    edges: Vec<Edge>,
    /// Edge id to position in `edges`
    edge_index: HashMap<EdgeId, usize>,
    /// Outgoing edges per source node, insertion order
    outgoing: HashMap<NodeId, Vec<usize>>,
    node_types: HashMap<NodeId, NodeType>,
    roots: BTreeMap<NodeId, NodeType>,
    next_node: u64,
    next_edge: u64,
}

impl Default for GroveStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GroveStore {
    /// Create an empty store backed by the default HTML registry
    pub fn new() -> Self {
        Self::with_registry(Arc::new(SchemaRegistry::html()))
    }

    /// Create an empty store backed by a custom registry
    pub fn with_registry(registry: Arc<SchemaRegistry>) -> Self {
        Self {
            registry,
            edges: Vec::new(),
            edge_index: HashMap::new(),
            outgoing: HashMap::new(),
            node_types: HashMap::new(),
            roots: BTreeMap::new(),
            next_node: 0,
            next_edge: 0,
        }
    }

    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    pub(crate) fn registry_handle(&self) -> Arc<SchemaRegistry> {
        Arc::clone(&self.registry)
    }

    /// Issue a node id greater than every id issued before
    ///
    /// # Errors
    ///
    /// Returns `IdExhausted` once `u64::MAX` would be handed out; the
    /// largest issuable id is `u64::MAX - 1`.
    pub fn allocate_node_id(&mut self) -> Result<NodeId> {
        let id = NodeId::new(self.next_node);
        self.next_node = bump(self.next_node, "node")?;
        Ok(id)
    }

    /// Issue an edge id greater than every edge id issued before
    ///
    /// Independent of the node counter.
    ///
    /// # Errors
    ///
    /// Returns `IdExhausted` once the edge counter is spent.
    pub fn allocate_edge_id(&mut self) -> Result<EdgeId> {
        let id = EdgeId::new(self.next_edge);
        self.next_edge = bump(self.next_edge, "edge")?;
        Ok(id)
    }

    /// Declare an externally supplied root node
    ///
    /// The root is the only node that exists without a creating edge.
    ///
    /// # Errors
    ///
    /// Returns `IdExhausted` when no node id is left.
    pub fn declare_root(&mut self, node_type: NodeType) -> Result<NodeId> {
        let id = self.allocate_node_id()?;
        self.node_types.insert(id, node_type.clone());
        self.roots.insert(id, node_type);
        tracing::debug!(node_id = %id, "declared root");
        Ok(id)
    }

    /// Append one active edge and implicitly create its destination node
    ///
    /// Every check runs before any id is allocated, so a failed call leaves
    /// the store (counters included) untouched.
    ///
    /// # Errors
    ///
    /// * `InvalidName` - an `Attr` position carries a malformed name
    /// * `IllegalPosition` - `position` is not legal for `from_type`
    /// * `UnknownNode` - `from` was never created or declared
    /// * `NodeTypeMismatch` - `from_type` differs from the recorded type
    /// * `IdExhausted` - either id counter is spent
    pub fn insert_edge(
        &mut self,
        from: NodeId,
        from_type: &NodeType,
        position: Position,
        to_type: NodeType,
    ) -> Result<Inserted> {
        position.check_name()?;

        if !self.registry.is_legal(from_type, &position) {
            return Err(GroveError::IllegalPosition {
                from_type: from_type.constructor_token(),
                position: position.to_string(),
            });
        }

        let recorded = self.require_node_type(from)?;
        if recorded != from_type {
            return Err(GroveError::NodeTypeMismatch {
                node_id: from,
                recorded: recorded.to_string(),
                supplied: from_type.to_string(),
            });
        }

        // Both counters checked before either moves.
        if self.next_node == u64::MAX {
            return Err(exhausted("node"));
        }
        if self.next_edge == u64::MAX {
            return Err(exhausted("edge"));
        }
        let node_id = self.allocate_node_id()?;
        let edge_id = self.allocate_edge_id()?;

        tracing::debug!(
            edge_id = %edge_id,
            from = %from,
            position = %position,
            to = %node_id,
            "insert edge"
        );

        self.append(Edge {
            id: edge_id,
            from,
            from_type: from_type.clone(),
            position,
            to: node_id,
            to_type,
            status: EdgeStatus::Active,
        });

        Ok(Inserted { edge_id, node_id })
    }

    /// Push an edge onto the log and update the derived indexes
    pub(crate) fn append(&mut self, edge: Edge) {
        let slot = self.edges.len();
        self.edge_index.insert(edge.id, slot);
        self.outgoing.entry(edge.from).or_default().push(slot);
        self.node_types.insert(edge.to, edge.to_type.clone());
        self.edges.push(edge);
    }

    /// Transition an edge `active -> retired`
    ///
    /// # Errors
    ///
    /// * `UnknownEdge` - the id was never issued to an edge
    /// * `AlreadyRetired` - the edge is already a tombstone; nothing changes
    pub fn retire_edge(&mut self, edge_id: EdgeId) -> Result<()> {
        let slot = *self
            .edge_index
            .get(&edge_id)
            .ok_or(GroveError::UnknownEdge { edge_id })?;

        let edge = &mut self.edges[slot];
        if edge.is_retired() {
            tracing::warn!(edge_id = %edge_id, "retire of already retired edge");
            return Err(GroveError::AlreadyRetired { edge_id });
        }

        edge.status = EdgeStatus::Retired;
        tracing::debug!(edge_id = %edge_id, "retired edge");
        Ok(())
    }

    /// Active edges leaving `node`, ascending edge id
    pub fn edges_from(&self, node: NodeId) -> Vec<&Edge> {
        self.outgoing
            .get(&node)
            .map(|slots| {
                slots
                    .iter()
                    .map(|&slot| &self.edges[slot])
                    .filter(|edge| edge.is_active())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Active edges leaving `node` at one position, ascending edge id
    pub fn edges_at<'a>(
        &'a self,
        node: NodeId,
        position: &'a Position,
    ) -> impl Iterator<Item = &'a Edge> + 'a {
        self.outgoing
            .get(&node)
            .into_iter()
            .flatten()
            .map(move |&slot| &self.edges[slot])
            .filter(move |edge| edge.is_active() && &edge.position == position)
    }

    /// Look up an edge by id, whatever its status
    ///
    /// # Errors
    ///
    /// Returns `UnknownEdge` if the id was never issued to an edge.
    pub fn edge(&self, edge_id: EdgeId) -> Result<&Edge> {
        self.edge_index
            .get(&edge_id)
            .map(|&slot| &self.edges[slot])
            .ok_or(GroveError::UnknownEdge { edge_id })
    }

    /// Full edge log, retired edges included
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn active_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(|edge| edge.is_active())
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn active_edge_count(&self) -> usize {
        self.active_edges().count()
    }

    pub fn node_type(&self, node: NodeId) -> Option<&NodeType> {
        self.node_types.get(&node)
    }

    /// Recorded type of a node
    ///
    /// # Errors
    ///
    /// Returns `UnknownNode` if the node was never created or declared.
    pub fn require_node_type(&self, node: NodeId) -> Result<&NodeType> {
        self.node_type(node)
            .ok_or(GroveError::UnknownNode { node_id: node })
    }

    /// Declared roots, ascending id
    pub fn roots(&self) -> impl Iterator<Item = (NodeId, &NodeType)> {
        self.roots.iter().map(|(id, ty)| (*id, ty))
    }

    pub(crate) fn insert_root(&mut self, id: NodeId, node_type: NodeType) {
        self.node_types.insert(id, node_type.clone());
        self.roots.insert(id, node_type);
    }

    pub(crate) fn set_counters(&mut self, next_node: u64, next_edge: u64) {
        self.next_node = next_node;
        self.next_edge = next_edge;
    }
}

fn bump(next: u64, counter: &str) -> Result<u64> {
    next.checked_add(1).ok_or_else(|| exhausted(counter))
}

fn exhausted(counter: &str) -> GroveError {
    GroveError::IdExhausted {
        counter: counter.to_string(),
    }
}
