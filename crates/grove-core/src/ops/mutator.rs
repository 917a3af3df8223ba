//! Convenience edits over [`GroveStore::insert_edge`]
//!
//! Each function is exactly one `insert_edge` call with a fixed position
//! convention, so it either creates one edge plus one node or changes
//! nothing.

use super::store::{GroveStore, Inserted};
use crate::errors::Result;
use crate::model::{EdgeId, NodeId, NodeType, Position};

/// Append an element as the first child of `parent`
///
/// # Errors
///
/// * `InvalidName` - `tag` is not a valid element name
/// * `UnknownNode` - `parent` does not exist
/// * `IllegalPosition` - `parent` does not take children
pub fn append_first_child(store: &mut GroveStore, parent: NodeId, tag: &str) -> Result<Inserted> {
    let to_type = NodeType::element(tag)?;
    insert_from(store, parent, Position::FirstChild, to_type)
}

/// Chain an element after `node`
///
/// `node` may be an element or a leaf.
///
/// # Errors
///
/// * `InvalidName` - `tag` is not a valid element name
/// * `UnknownNode` - `node` does not exist
/// * `IllegalPosition` - `node` cannot be chained (attribute or list nodes)
pub fn append_next_sibling(store: &mut GroveStore, node: NodeId, tag: &str) -> Result<Inserted> {
    let to_type = NodeType::element(tag)?;
    insert_from(store, node, Position::NextElement, to_type)
}

/// Append a text leaf as the first child of `parent`
///
/// # Errors
///
/// * `UnknownNode` - `parent` does not exist
/// * `IllegalPosition` - `parent` does not take children
pub fn append_leaf_first_child(
    store: &mut GroveStore,
    parent: NodeId,
    text: impl Into<String>,
) -> Result<Inserted> {
    insert_from(store, parent, Position::FirstChild, NodeType::leaf(text))
}

/// Chain a text leaf after `node`
///
/// # Errors
///
/// * `UnknownNode` - `node` does not exist
/// * `IllegalPosition` - `node` cannot be chained
pub fn append_leaf_next_sibling(
    store: &mut GroveStore,
    node: NodeId,
    text: impl Into<String>,
) -> Result<Inserted> {
    insert_from(store, node, Position::NextElement, NodeType::leaf(text))
}

/// Attach `name="value"` to an element
///
/// Stored as an `attr_<name>` edge to a leaf holding `value`.
///
/// # Errors
///
/// * `InvalidName` - `name` is not a valid attribute name
/// * `UnknownNode` - `element` does not exist
/// * `IllegalPosition` - `element` is not an element
pub fn append_attribute(
    store: &mut GroveStore,
    element: NodeId,
    name: &str,
    value: impl Into<String>,
) -> Result<Inserted> {
    let position = Position::attr(name)?;
    insert_from(store, element, position, NodeType::leaf(value))
}

/// Retire an edge, hiding its target subtree from rendering
///
/// # Errors
///
/// * `UnknownEdge` - the id was never issued
/// * `AlreadyRetired` - the edge is already retired
pub fn retire(store: &mut GroveStore, edge_id: EdgeId) -> Result<()> {
    store.retire_edge(edge_id)
}

fn insert_from(
    store: &mut GroveStore,
    from: NodeId,
    position: Position,
    to_type: NodeType,
) -> Result<Inserted> {
    let from_type = store.require_node_type(from)?.clone();
    store.insert_edge(from, &from_type, position, to_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::GroveError;

    #[test]
    fn test_append_attribute_uses_prefixed_position() {
        let mut store = GroveStore::new();
        let body = store.declare_root(NodeType::element("body").unwrap()).unwrap();
        let a = append_first_child(&mut store, body, "a").unwrap();

        let href = append_attribute(&mut store, a.node_id, "href", "http://example.com").unwrap();

        let edge = store.edge(href.edge_id).unwrap();
        assert_eq!(edge.position.to_string(), "attr_href");
        assert_eq!(edge.to_type, NodeType::leaf("http://example.com"));
    }

    #[test]
    fn test_leaf_can_chain_element() {
        let mut store = GroveStore::new();
        let p = store.declare_root(NodeType::element("p").unwrap()).unwrap();
        let hello = append_leaf_first_child(&mut store, p, "Hello, ").unwrap();
        let strong = append_next_sibling(&mut store, hello.node_id, "strong").unwrap();
        assert_eq!(
            store.node_type(strong.node_id),
            Some(&NodeType::element("strong").unwrap())
        );
    }

    #[test]
    fn test_leaf_cannot_take_children() {
        let mut store = GroveStore::new();
        let p = store.declare_root(NodeType::element("p").unwrap()).unwrap();
        let text = append_leaf_first_child(&mut store, p, "x").unwrap();
        let result = append_first_child(&mut store, text.node_id, "em");
        assert!(matches!(result, Err(GroveError::IllegalPosition { .. })));
        assert_eq!(store.edge_count(), 1);
    }

    #[test]
    fn test_invalid_attribute_name_changes_nothing() {
        let mut store = GroveStore::new();
        let p = store.declare_root(NodeType::element("p").unwrap()).unwrap();
        let result = append_attribute(&mut store, p, "on click", "x");
        assert!(matches!(result, Err(GroveError::InvalidName { .. })));
        assert_eq!(store.edge_count(), 0);
    }
}
