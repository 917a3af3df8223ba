//! Validation Tests

mod common;

use common::{build_link_document, store_with_body};
use grove_core::ops::{mutator, EdgeLog};
use grove_core::rules::validate_grove;
use grove_core::schema::SchemaRegistry;
use grove_core::{GroveError, GroveStore, Position};
use std::sync::Arc;

#[test]
fn test_api_built_store_is_valid() {
    let (mut store, body) = store_with_body();
    let doc = build_link_document(&mut store, body);
    mutator::retire(&mut store, doc.p_edge).unwrap();

    assert!(validate_grove(&store).is_ok());
}

#[test]
fn test_registry_change_is_detected() {
    // A log written under a permissive registry, validated under a stricter one
    let widget = grove_core::Tag::parse("x-box").unwrap();
    let permissive = SchemaRegistry::html().with_element(&widget, vec![Position::FirstChild]);
    let mut store = GroveStore::with_registry(Arc::new(permissive));
    let root = store.declare_root(grove_core::NodeType::element("x-box").unwrap()).unwrap();
    mutator::append_leaf_first_child(&mut store, root, "x").unwrap();

    let log: EdgeLog = store.to_edge_log();
    let strict = GroveStore::from_edge_log(log, Arc::new(SchemaRegistry::html()));

    assert!(matches!(strict, Err(GroveError::IllegalPosition { .. })));
}
