/// Scenario 5: Illegal Positions
///
/// Inserts at positions the registry does not allow are rejected with no
/// change to the store.
mod common;

use common::{el, new_store};
use grove_core::schema::SchemaRegistry;
use grove_core::{GroveError, GroveStore, NodeType, Position};
use std::sync::Arc;

#[test]
fn test_scenario_05_error_bogus_position_on_paragraph() {
    // GIVEN a <p> root
    let mut store = new_store();
    let p = store.declare_root(el("p")).unwrap();

    // WHEN inserting at a position <p> does not define
    let result = store.insert_edge(
        p,
        &el("p"),
        Position::Named("bogus_position".to_string()),
        NodeType::leaf("x"),
    );

    // THEN IllegalPosition and the edge count is unchanged
    assert!(matches!(result, Err(GroveError::IllegalPosition { .. })));
    assert_eq!(store.edge_count(), 0);
}

#[test]
fn test_scenario_05_error_void_element_has_no_children() {
    let mut store = new_store();
    let br = store.declare_root(el("br")).unwrap();

    let result = store.insert_edge(br, &el("br"), Position::FirstChild, NodeType::leaf("x"));

    assert!(matches!(result, Err(GroveError::IllegalPosition { .. })));
}

#[test]
fn test_scenario_05_happy_void_element_takes_attributes() {
    let mut store = new_store();
    let img = store.declare_root(el("img")).unwrap();

    let result = store.insert_edge(
        img,
        &el("img"),
        Position::attr("src").unwrap(),
        NodeType::leaf("a.png"),
    );

    assert!(result.is_ok());
}

#[test]
fn test_scenario_05_error_unknown_tag_takes_no_children() {
    let mut store = new_store();
    let custom = store.declare_root(el("x-widget")).unwrap();

    let result = store.insert_edge(
        custom,
        &el("x-widget"),
        Position::FirstChild,
        NodeType::leaf("x"),
    );

    assert!(matches!(result, Err(GroveError::IllegalPosition { .. })));
}

#[test]
fn test_scenario_05_happy_custom_registry_allows_new_tag() {
    let widget = grove_core::Tag::parse("x-widget").unwrap();
    let registry = SchemaRegistry::html().with_element(&widget, vec![Position::FirstChild]);
    let mut store = GroveStore::with_registry(Arc::new(registry));
    let root = store.declare_root(el("x-widget")).unwrap();

    let result = store.insert_edge(
        root,
        &el("x-widget"),
        Position::FirstChild,
        NodeType::leaf("x"),
    );

    assert!(result.is_ok());
}

#[test]
fn test_scenario_05_error_value_only_from_attribute() {
    let mut store = new_store();
    let p = store.declare_root(el("p")).unwrap();

    let result = store.insert_edge(p, &el("p"), Position::Value, NodeType::leaf("x"));

    assert!(matches!(result, Err(GroveError::IllegalPosition { .. })));
}

#[test]
fn test_scenario_05_error_markup_in_attribute_name() {
    // GIVEN a <body> root and an attribute position built without validation
    let mut store = new_store();
    let body = store.declare_root(el("body")).unwrap();
    let hostile = Position::Attr(r#"x"><script>alert(1)</script><b y"#.to_string());

    // WHEN inserting through it
    let result = store.insert_edge(body, &el("body"), hostile, NodeType::leaf("v"));

    // THEN InvalidName, no edge, and the render carries no injected markup
    assert!(matches!(result, Err(GroveError::InvalidName { .. })));
    assert_eq!(store.edge_count(), 0);
    let html = grove_core::render(&store, body, &el("body")).unwrap();
    assert_eq!(html, "<body></body>");
}
