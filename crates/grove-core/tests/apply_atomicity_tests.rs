//! Apply Atomicity Tests
//!
//! ## Scenarios Covered
//!
//! 1. Apply returns the new state and a receipt on success
//! 2. A failing command leaves the store unchanged
//! 3. Commands round-trip through their JSON form
//! 4. Every command variant is reachable through `execute`

mod common;

use common::{el, store_with_body};
use grove_core::{apply, execute, render, Command, GroveError, Position, Receipt};

#[test]
fn test_apply_returns_new_state_on_success() {
    let (state, body) = store_with_body();

    let cmd = Command::AppendFirstChild {
        parent: body,
        tag: "p".to_string(),
    };
    let (state, receipt) = apply(state, cmd).unwrap();

    let inserted = receipt.inserted().expect("Should insert");
    assert_eq!(state.node_type(inserted.node_id), Some(&el("p")));
    assert_eq!(state.edge_count(), 1);
}

#[test]
fn test_execute_failure_leaves_store_unchanged() {
    let (mut store, body) = store_with_body();
    execute(
        &mut store,
        Command::AppendFirstChild {
            parent: body,
            tag: "p".to_string(),
        },
    )
    .unwrap();
    let before = store.to_edge_log();

    let result = execute(
        &mut store,
        Command::AppendFirstChild {
            parent: body,
            tag: "not a tag".to_string(),
        },
    );

    assert!(matches!(result, Err(GroveError::InvalidName { .. })));
    assert_eq!(store.to_edge_log(), before);
}

#[test]
fn test_failed_command_does_not_consume_ids() {
    let (mut store, body) = store_with_body();

    let _ = execute(
        &mut store,
        Command::InsertEdge {
            from: body,
            from_type: el("body"),
            position: Position::Named("bogus".to_string()),
            to_type: el("p"),
        },
    );
    let receipt = execute(
        &mut store,
        Command::AppendFirstChild {
            parent: body,
            tag: "p".to_string(),
        },
    )
    .unwrap();

    let inserted = receipt.inserted().unwrap();
    assert_eq!(inserted.edge_id.get(), 0);
    assert_eq!(inserted.node_id.get(), 1);
}

#[test]
fn test_all_command_variants() {
    let (mut store, body) = store_with_body();

    let a = execute(
        &mut store,
        Command::AppendFirstChild {
            parent: body,
            tag: "a".to_string(),
        },
    )
    .unwrap()
    .inserted()
    .unwrap();
    execute(
        &mut store,
        Command::AppendAttribute {
            element: a.node_id,
            name: "href".to_string(),
            value: "/x".to_string(),
        },
    )
    .unwrap();
    let text = execute(
        &mut store,
        Command::AppendLeafFirstChild {
            parent: a.node_id,
            text: "go".to_string(),
        },
    )
    .unwrap()
    .inserted()
    .unwrap();
    execute(
        &mut store,
        Command::AppendNextSibling {
            node: text.node_id,
            tag: "em".to_string(),
        },
    )
    .unwrap();
    let tail = execute(
        &mut store,
        Command::AppendLeafNextSibling {
            node: a.node_id,
            text: "!".to_string(),
        },
    )
    .unwrap()
    .inserted()
    .unwrap();
    execute(
        &mut store,
        Command::InsertEdge {
            from: tail.node_id,
            from_type: grove_core::NodeType::leaf("!"),
            position: Position::NextElement,
            to_type: el("br"),
        },
    )
    .unwrap();

    assert_eq!(
        render(&store, body, &el("body")).unwrap(),
        r#"<body><a href="/x">go<em></em></a>!<br></br></body>"#
    );

    let receipt = execute(
        &mut store,
        Command::RetireEdge {
            edge_id: tail.edge_id,
        },
    )
    .unwrap();
    assert_eq!(receipt, Receipt::Retired(tail.edge_id));
    assert_eq!(
        render(&store, body, &el("body")).unwrap(),
        r#"<body><a href="/x">go<em></em></a></body>"#
    );
}

#[test]
fn test_command_from_json() {
    let (mut store, body) = store_with_body();
    let json = format!(r#"{{"op":"append_first_child","parent":{},"tag":"p"}}"#, body.get());

    let cmd: Command = serde_json::from_str(&json).unwrap();
    execute(&mut store, cmd).unwrap();

    assert_eq!(
        render(&store, body, &el("body")).unwrap(),
        "<body><p></p></body>"
    );
}
