use std::collections::{HashMap, HashSet};

use crate::errors::{GroveError, Result};
use crate::model::NodeId;
use crate::ops::GroveStore;

/// Validate the structural invariants of a grove
///
/// 1. Edge ids strictly increase along the log
/// 2. Every edge position is legal for its source type and every
///    attribute position carries a valid name
/// 3. No node has more than one incoming active edge
/// 4. No active cycle is reachable from a declared root
///
/// Stores built only through the mutation API satisfy all four; this
/// exists for loaded or externally assembled data.
///
/// # Errors
///
/// Returns the first violation found: `InvalidEdgeLog` for ordering and
/// parentage, `IllegalPosition` for legality, `InvalidName` for attribute
/// names, `CycleDetected` for cycles.
pub fn validate_grove(store: &GroveStore) -> Result<()> {
    let mut previous = None;
    for edge in store.edges() {
        if previous.is_some_and(|prev| edge.id <= prev) {
            return Err(GroveError::InvalidEdgeLog {
                reason: format!("edge id {} is out of order", edge.id),
            });
        }
        previous = Some(edge.id);

        edge.position.check_name()?;

        if !store.registry().is_legal(&edge.from_type, &edge.position) {
            return Err(GroveError::IllegalPosition {
                from_type: edge.from_type.constructor_token(),
                position: edge.position.to_string(),
            });
        }
    }

    let mut parents: HashMap<NodeId, NodeId> = HashMap::new();
    for edge in store.active_edges() {
        if let Some(existing) = parents.insert(edge.to, edge.from) {
            return Err(GroveError::InvalidEdgeLog {
                reason: format!(
                    "{} has two active parents: {} and {}",
                    edge.to, existing, edge.from
                ),
            });
        }
    }

    for (root, _) in store.roots() {
        check_acyclic(store, root)?;
    }

    tracing::debug!(edge_count = store.edge_count(), "grove validated");
    Ok(())
}

/// Iterative walk over active edges; a revisit means a cycle since every
/// node already has a single parent at this point
fn check_acyclic(store: &GroveStore, root: NodeId) -> Result<()> {
    let mut seen = HashSet::new();
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        if !seen.insert(node) {
            return Err(GroveError::CycleDetected { node_id: node });
        }
        stack.extend(store.edges_from(node).into_iter().map(|edge| edge.to));
    }

    Ok(())
}
