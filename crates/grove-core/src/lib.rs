//! Grove Core - typed edge-set document model
//!
//! A grove is an append-only set of typed, positioned, status-carrying
//! edges. Nodes exist only as edge endpoints (or declared roots). This
//! crate provides:
//! - The typed model: node ids, node types, positions, edges
//! - The schema registry deciding which positions each node type may use
//! - The store, its mutators, and atomic command application
//! - A deterministic HTML renderer over active edges
//! - Whole-grove validation, legacy import, snapshots and digests

pub mod apply;
pub mod commands;
pub mod errors;
pub mod legacy;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod render;
pub mod rules;
pub mod schema;
pub mod snapshot;

pub use apply::{apply, execute, Receipt};
pub use commands::Command;
pub use errors::{ExError, ExErrorKind, GroveError, Result};
pub use model::{Edge, EdgeId, EdgeStatus, NodeId, NodeType, Position, Tag};
pub use ops::{GroveStore, Inserted};
pub use render::{render, render_with, EscapePolicy, RenderConfig};
pub use schema::SchemaRegistry;
pub use snapshot::GroveSnapshot;
