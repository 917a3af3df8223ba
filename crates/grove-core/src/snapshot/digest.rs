//! Content digests of a grove
//!
//! SHA-256 over the canonical JSON edge log, hex encoded. Two stores with
//! the same history (statuses included) share a digest; any append or
//! retirement changes it.

use sha2::{Digest, Sha256};

use crate::errors::Result;
use crate::ops::GroveStore;

/// Compute the digest of a store's edge log and root declarations
///
/// # Errors
///
/// Returns `Serialization` if JSON serialization fails.
///
/// # Example
///
/// ```
/// use grove_core::{GroveStore, snapshot::digest::compute_grove_digest};
///
/// let digest = compute_grove_digest(&GroveStore::new()).unwrap();
/// assert_eq!(digest.len(), 64);
/// ```
pub fn compute_grove_digest(store: &GroveStore) -> Result<String> {
    let canonical = serde_json::to_string(&store.to_edge_log())?;
    Ok(hash_string(&canonical))
}

fn hash_string(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NodeType;
    use crate::ops::mutator;

    #[test]
    fn test_hash_string_deterministic() {
        assert_eq!(hash_string("grove"), hash_string("grove"));
        assert_eq!(hash_string("grove").len(), 64);
    }

    #[test]
    fn test_retirement_changes_digest() {
        let mut store = GroveStore::new();
        let body = store.declare_root(NodeType::element("body").unwrap()).unwrap();
        let p = mutator::append_first_child(&mut store, body, "p").unwrap();
        let before = compute_grove_digest(&store).unwrap();

        store.retire_edge(p.edge_id).unwrap();

        assert_ne!(compute_grove_digest(&store).unwrap(), before);
    }
}
