//! Error Facility Tests
//!
//! Every grove error maps to a stable code and carries its context into
//! the boundary error type.

use grove_core::errors::{ExError, ExErrorKind, GroveError};
use grove_core::model::{EdgeId, NodeId};

#[test]
fn test_illegal_position_maps_to_stable_code() {
    let err = GroveError::IllegalPosition {
        from_type: "<p>".to_string(),
        position: "bogus".to_string(),
    };

    let ex: ExError = err.into();

    assert_eq!(ex.kind(), ExErrorKind::IllegalPosition);
    assert_eq!(ex.code(), "ERR_ILLEGAL_POSITION");
    assert_eq!(ex.op(), Some("insert_edge"));
    assert!(ex.message().contains("bogus"));
}

#[test]
fn test_edge_context_is_preserved() {
    let ex: ExError = GroveError::AlreadyRetired {
        edge_id: EdgeId::new(7),
    }
    .into();

    assert_eq!(ex.edge_id(), Some(EdgeId::new(7)));
    assert_eq!(ex.op(), Some("retire_edge"));
    assert!(ex.to_string().starts_with("[ERR_ALREADY_RETIRED]"));
}

#[test]
fn test_node_context_is_preserved() {
    let ex: ExError = GroveError::CycleDetected {
        node_id: NodeId::new(3),
    }
    .into();

    assert_eq!(ex.node_id(), Some(NodeId::new(3)));
    assert_eq!(ex.code(), "ERR_CYCLE_DETECTED");
}

#[test]
fn test_lock_poisoned_is_concurrency() {
    let ex: ExError = GroveError::LockPoisoned.into();
    assert_eq!(ex.kind(), ExErrorKind::Concurrency);
}

#[test]
fn test_codes_are_unique() {
    let kinds = [
        ExErrorKind::IllegalPosition,
        ExErrorKind::NodeTypeMismatch,
        ExErrorKind::AlreadyRetired,
        ExErrorKind::UnknownEdge,
        ExErrorKind::UnknownNode,
        ExErrorKind::CycleDetected,
        ExErrorKind::DepthExceeded,
        ExErrorKind::UnrenderableNode,
        ExErrorKind::InvalidName,
        ExErrorKind::InvalidConstructor,
        ExErrorKind::LegacyImport,
        ExErrorKind::InvalidEdgeLog,
        ExErrorKind::IdExhausted,
        ExErrorKind::Serialization,
        ExErrorKind::Concurrency,
        ExErrorKind::Internal,
    ];
    let codes: std::collections::HashSet<_> = kinds.iter().map(|k| k.code()).collect();
    assert_eq!(codes.len(), kinds.len());
}
