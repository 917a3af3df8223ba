use grove_core::ops::mutator;
use grove_core::{GroveStore, NodeId, NodeType};

/// Element node type, panicking on an invalid tag
#[allow(dead_code)]
pub fn el(tag: &str) -> NodeType {
    NodeType::element(tag).unwrap()
}

/// Create a new empty store with the HTML registry
#[allow(dead_code)]
pub fn new_store() -> GroveStore {
    GroveStore::new()
}

/// Store with a single `<body>` root
#[allow(dead_code)]
pub fn store_with_body() -> (GroveStore, NodeId) {
    let mut store = GroveStore::new();
    let body = store.declare_root(el("body")).unwrap();
    (store, body)
}

/// Ids of the nodes and edges built by [`build_link_document`]
#[allow(dead_code)]
pub struct LinkDocument {
    pub body: NodeId,
    pub a: NodeId,
    pub p: NodeId,
    pub p_edge: grove_core::EdgeId,
}

/// Build `<body><a href="http://example.com">Click here</a><p>Hello, world!</p></body>`
#[allow(dead_code)]
pub fn build_link_document(store: &mut GroveStore, body: NodeId) -> LinkDocument {
    let a = mutator::append_first_child(store, body, "a").unwrap();
    mutator::append_attribute(store, a.node_id, "href", "http://example.com").unwrap();
    mutator::append_leaf_first_child(store, a.node_id, "Click here").unwrap();
    let p = mutator::append_next_sibling(store, a.node_id, "p").unwrap();
    mutator::append_leaf_first_child(store, p.node_id, "Hello, world!").unwrap();

    LinkDocument {
        body,
        a: a.node_id,
        p: p.node_id,
        p_edge: p.edge_id,
    }
}

#[allow(dead_code)]
pub const LINK_DOCUMENT_HTML: &str =
    r#"<body><a href="http://example.com">Click here</a><p>Hello, world!</p></body>"#;

/// The linked-list encoding of the same document, as JSON 7-tuples
#[allow(dead_code)]
pub const LEGACY_LINK_DOCUMENT: &str = r#"[
    ["edge0", "node0", "<body>", "content", "node1", "linkedList", "active"],
    ["edge1", "node1", "linkedList", "head", "node2", "<a>", "active"],
    ["edge2", "node2", "<a>", "href", "node3", "attribute", "active"],
    ["edge3", "node3", "attribute", "value", "http://example.com", "string", "active"],
    ["edge7", "node2", "<a>", "content", "Click here", "string", "active"],
    ["edge4", "node1", "linkedList", "tail", "node4", "linkedList", "active"],
    ["edge5", "node4", "linkedList", "head", "node5", "<p>", "active"],
    ["edge6", "node5", "<p>", "content", "Hello, world!", "string", "active"]
]"#;
