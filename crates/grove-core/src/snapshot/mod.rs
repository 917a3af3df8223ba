//! Immutable grove snapshots
//!
//! A snapshot is a frozen `Arc<GroveStore>`. Readers render snapshots;
//! writers keep mutating their own copy without affecting any snapshot
//! already handed out.

pub mod digest;

use std::ops::Deref;
use std::sync::Arc;

use crate::errors::Result;
use crate::model::{NodeId, NodeType};
use crate::ops::GroveStore;
use crate::render::{render_with, RenderConfig};

#[derive(Debug, Clone)]
pub struct GroveSnapshot {
    store: Arc<GroveStore>,
}

impl GroveSnapshot {
    /// Freeze a store
    pub fn new(store: Arc<GroveStore>) -> Self {
        Self { store }
    }

    /// Render this snapshot
    ///
    /// # Errors
    ///
    /// Any render error; see [`crate::render::render_with`].
    pub fn render(&self, root: NodeId, root_type: &NodeType, config: &RenderConfig) -> Result<String> {
        render_with(&self.store, root, root_type, config)
    }

    /// Content digest of the frozen edge log
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if the log cannot be encoded.
    pub fn digest(&self) -> Result<String> {
        digest::compute_grove_digest(&self.store)
    }

    /// Whether two snapshots share the same frozen store
    pub fn same_version(&self, other: &GroveSnapshot) -> bool {
        Arc::ptr_eq(&self.store, &other.store)
    }
}

impl From<GroveStore> for GroveSnapshot {
    fn from(store: GroveStore) -> Self {
        Self::new(Arc::new(store))
    }
}

impl Deref for GroveSnapshot {
    type Target = GroveStore;

    fn deref(&self) -> &GroveStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::mutator;

    #[test]
    fn test_snapshot_is_frozen() {
        let mut store = GroveStore::new();
        let body = store.declare_root(NodeType::element("body").unwrap()).unwrap();
        let snapshot = GroveSnapshot::from(store.clone());

        mutator::append_first_child(&mut store, body, "p").unwrap();

        assert_eq!(snapshot.edge_count(), 0);
        assert_eq!(store.edge_count(), 1);
        let body_type = NodeType::element("body").unwrap();
        assert_eq!(
            snapshot
                .render(body, &body_type, &RenderConfig::default())
                .unwrap(),
            "<body></body>"
        );
    }
}
