//! Document loading and whole-document operations
//!
//! A document is a store plus the root it renders from. It comes either
//! from a JSON edge log or from the legacy linked-list tuple format.
//!
//! Each public function here is a logging boundary.

use std::sync::Arc;
use std::time::Instant;

use grove_core::errors::{GroveError, Result};
use grove_core::legacy::{import_linked_list, parse_legacy_json};
use grove_core::ops::EdgeLog;
use grove_core::rules::validate_grove;
use grove_core::schema::SchemaRegistry;
use grove_core::snapshot::digest::compute_grove_digest;
use grove_core::{log_op_end, log_op_error, log_op_start};
use grove_core::{GroveSnapshot, GroveStore, NodeId, NodeType, RenderConfig};
use serde::Serialize;

use crate::session::render_logged;

/// Where a document's edges come from
#[derive(Debug, Clone)]
pub enum DocumentSource {
    /// JSON edge log; renders from `root`, or the first declared root
    EdgeLog { json: String, root: Option<NodeId> },
    /// Legacy 7-tuple JSON list rooted at a legacy node id
    Legacy {
        json: String,
        root_id: String,
        root_constructor: String,
    },
}

#[derive(Debug, Clone)]
pub struct Document {
    pub snapshot: GroveSnapshot,
    pub root: NodeId,
    pub root_type: NodeType,
}

/// Summary produced by [`check_document`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub edge_count: usize,
    pub active_edge_count: usize,
    pub root_count: usize,
}

/// Load a document from either encoding
///
/// # Errors
///
/// * `Serialization` - malformed JSON
/// * `InvalidEdgeLog` - inconsistent log, no root, or an unknown `root`
/// * `LegacyImport`, `InvalidConstructor`, `IllegalPosition` - legacy
///   conversion failures
pub fn load_document(source: DocumentSource, registry: Arc<SchemaRegistry>) -> Result<Document> {
    log_op_start!("load_document");
    let start = Instant::now();

    let document = load_impl(source, registry).map_err(|e| {
        log_op_error!(
            "load_document",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "load_document",
        duration_ms = start.elapsed().as_millis() as u64,
        edge_count = document.snapshot.edge_count() as u64
    );
    Ok(document)
}

fn load_impl(source: DocumentSource, registry: Arc<SchemaRegistry>) -> Result<Document> {
    match source {
        DocumentSource::EdgeLog { json, root } => {
            let store = GroveStore::from_edge_log(EdgeLog::from_json(&json)?, registry)?;
            let (root, root_type) = pick_root(&store, root)?;
            Ok(Document {
                snapshot: GroveSnapshot::from(store),
                root,
                root_type,
            })
        }
        DocumentSource::Legacy {
            json,
            root_id,
            root_constructor,
        } => {
            let edges = parse_legacy_json(&json)?;
            let imported = import_linked_list(&edges, &root_id, &root_constructor, registry)?;
            Ok(Document {
                snapshot: GroveSnapshot::from(imported.store),
                root: imported.root,
                root_type: imported.root_type,
            })
        }
    }
}

fn pick_root(store: &GroveStore, requested: Option<NodeId>) -> Result<(NodeId, NodeType)> {
    match requested {
        Some(id) => store
            .node_type(id)
            .map(|ty| (id, ty.clone()))
            .ok_or_else(|| GroveError::InvalidEdgeLog {
                reason: format!("root {} does not exist", id),
            }),
        None => store
            .roots()
            .next()
            .map(|(id, ty)| (id, ty.clone()))
            .ok_or_else(|| GroveError::InvalidEdgeLog {
                reason: "no root declared".to_string(),
            }),
    }
}

/// Render a loaded document
///
/// # Errors
///
/// Any render error; see [`grove_core::render_with`].
pub fn render_document(document: &Document, config: &RenderConfig) -> Result<String> {
    render_logged(
        &document.snapshot,
        document.root,
        &document.root_type,
        config,
    )
}

/// Validate a loaded document
///
/// # Errors
///
/// The first violation [`validate_grove`] finds.
pub fn check_document(document: &Document) -> Result<CheckReport> {
    log_op_start!("check_document");
    let start = Instant::now();

    validate_grove(&document.snapshot).map_err(|e| {
        log_op_error!(
            "check_document",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    let report = CheckReport {
        edge_count: document.snapshot.edge_count(),
        active_edge_count: document.snapshot.active_edge_count(),
        root_count: document.snapshot.roots().count(),
    };

    log_op_end!(
        "check_document",
        duration_ms = start.elapsed().as_millis() as u64
    );
    Ok(report)
}

/// Content digest of a loaded document
///
/// # Errors
///
/// Returns `Serialization` if the edge log cannot be encoded.
pub fn digest_document(document: &Document) -> Result<String> {
    log_op_start!("digest_document");
    let start = Instant::now();

    let digest = compute_grove_digest(&document.snapshot).map_err(|e| {
        log_op_error!(
            "digest_document",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "digest_document",
        duration_ms = start.elapsed().as_millis() as u64,
        edge_count = document.snapshot.edge_count() as u64
    );
    Ok(digest)
}
