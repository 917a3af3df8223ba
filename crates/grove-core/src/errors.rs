use thiserror::Error;

use crate::model::{EdgeId, NodeId};

/// Result type alias using GroveError
pub type Result<T> = std::result::Result<T, GroveError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers (the CLI, tests,
/// anything embedding the grove) can match on without depending on the
/// message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Mutation
    IllegalPosition,
    NodeTypeMismatch,
    AlreadyRetired,

    // Lookup
    UnknownEdge,
    UnknownNode,

    // Rendering
    CycleDetected,
    DepthExceeded,
    UnrenderableNode,

    // Input
    InvalidName,
    InvalidConstructor,
    LegacyImport,
    InvalidEdgeLog,

    // Capacity
    IdExhausted,

    // Integration
    Serialization,
    Concurrency,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::IllegalPosition => "ERR_ILLEGAL_POSITION",
            ExErrorKind::NodeTypeMismatch => "ERR_NODE_TYPE_MISMATCH",
            ExErrorKind::AlreadyRetired => "ERR_ALREADY_RETIRED",
            ExErrorKind::UnknownEdge => "ERR_UNKNOWN_EDGE",
            ExErrorKind::UnknownNode => "ERR_UNKNOWN_NODE",
            ExErrorKind::CycleDetected => "ERR_CYCLE_DETECTED",
            ExErrorKind::DepthExceeded => "ERR_DEPTH_EXCEEDED",
            ExErrorKind::UnrenderableNode => "ERR_UNRENDERABLE_NODE",
            ExErrorKind::InvalidName => "ERR_INVALID_NAME",
            ExErrorKind::InvalidConstructor => "ERR_INVALID_CONSTRUCTOR",
            ExErrorKind::LegacyImport => "ERR_LEGACY_IMPORT",
            ExErrorKind::InvalidEdgeLog => "ERR_INVALID_EDGE_LOG",
            ExErrorKind::IdExhausted => "ERR_ID_EXHAUSTED",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Concurrency => "ERR_CONCURRENCY",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Classification plus optional grove context, used at logging and
/// process boundaries.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    node_id: Option<NodeId>,
    edge_id: Option<EdgeId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            node_id: None,
            edge_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add node context
    pub fn with_node_id(mut self, id: NodeId) -> Self {
        self.node_id = Some(id);
        self
    }

    /// Add edge context
    pub fn with_edge_id(mut self, id: EdgeId) -> Self {
        self.edge_id = Some(id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn node_id(&self) -> Option<NodeId> {
        self.node_id
    }

    pub fn edge_id(&self) -> Option<EdgeId> {
        self.edge_id
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(node_id) = self.node_id {
            write!(f, " (node_id: {})", node_id)?;
        }
        if let Some(edge_id) = self.edge_id {
            write!(f, " (edge_id: {})", edge_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for grove operations
///
/// Every variant is a local, recoverable condition: the store a failing
/// call was made against is left exactly as it was.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GroveError {
    // ===== Mutation Errors =====
    /// Position is not legal for the source node type
    #[error("Illegal position '{position}' for node type {from_type}")]
    IllegalPosition { from_type: String, position: String },

    /// Caller supplied a source type that disagrees with the recorded one
    #[error("Node {node_id} has type {recorded}, not {supplied}")]
    NodeTypeMismatch {
        node_id: NodeId,
        recorded: String,
        supplied: String,
    },

    /// Edge was already retired (retirement is one-way)
    #[error("Edge already retired: {edge_id}")]
    AlreadyRetired { edge_id: EdgeId },

    // ===== Lookup Errors =====
    /// Edge id was never issued by this store
    #[error("Edge not found: {edge_id}")]
    UnknownEdge { edge_id: EdgeId },

    /// Node id was never issued by this store
    #[error("Node not found: {node_id}")]
    UnknownNode { node_id: NodeId },

    // ===== Render Errors =====
    /// Node reached twice during one render (cycle or shared node)
    #[error("Cycle detected: node {node_id} reached more than once")]
    CycleDetected { node_id: NodeId },

    /// Nesting deeper than the configured limit
    #[error("Render depth exceeded at node {node_id}: limit is {limit}")]
    DepthExceeded { node_id: NodeId, limit: usize },

    /// Node type cannot be rendered in its context
    #[error("Node {node_id} of type {node_type} cannot be rendered {context}")]
    UnrenderableNode {
        node_id: NodeId,
        node_type: String,
        context: String,
    },

    // ===== Input Errors =====
    /// Tag or attribute name is not a valid markup name
    #[error("Invalid name: '{name}'")]
    InvalidName { name: String },

    /// Constructor token could not be parsed into a node type
    #[error("Invalid constructor: '{token}'")]
    InvalidConstructor { token: String },

    /// Legacy linked-list edge set could not be converted
    #[error("Legacy import failed: {reason}")]
    LegacyImport { reason: String },

    /// Serialized edge log is inconsistent
    #[error("Invalid edge log: {reason}")]
    InvalidEdgeLog { reason: String },

    // ===== Capacity Errors =====
    /// A node or edge id counter has no id left to issue
    #[error("No {counter} ids left to allocate")]
    IdExhausted { counter: String },

    // ===== Generic Errors =====
    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// A shared grove lock was poisoned by a panicking writer
    #[error("Grove lock poisoned")]
    LockPoisoned,

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<GroveError> for ExError {
    fn from(err: GroveError) -> Self {
        let message = err.to_string();
        match err {
            GroveError::IllegalPosition { .. } => {
                ExError::new(ExErrorKind::IllegalPosition).with_op("insert_edge")
            }
            GroveError::NodeTypeMismatch { node_id, .. } => {
                ExError::new(ExErrorKind::NodeTypeMismatch)
                    .with_op("insert_edge")
                    .with_node_id(node_id)
            }
            GroveError::AlreadyRetired { edge_id } => ExError::new(ExErrorKind::AlreadyRetired)
                .with_op("retire_edge")
                .with_edge_id(edge_id),
            GroveError::UnknownEdge { edge_id } => {
                ExError::new(ExErrorKind::UnknownEdge).with_edge_id(edge_id)
            }
            GroveError::UnknownNode { node_id } => {
                ExError::new(ExErrorKind::UnknownNode).with_node_id(node_id)
            }
            GroveError::CycleDetected { node_id } => ExError::new(ExErrorKind::CycleDetected)
                .with_op("render")
                .with_node_id(node_id),
            GroveError::DepthExceeded { node_id, .. } => ExError::new(ExErrorKind::DepthExceeded)
                .with_op("render")
                .with_node_id(node_id),
            GroveError::UnrenderableNode { node_id, .. } => {
                ExError::new(ExErrorKind::UnrenderableNode)
                    .with_op("render")
                    .with_node_id(node_id)
            }
            GroveError::InvalidName { .. } => ExError::new(ExErrorKind::InvalidName),
            GroveError::InvalidConstructor { .. } => ExError::new(ExErrorKind::InvalidConstructor),
            GroveError::LegacyImport { .. } => {
                ExError::new(ExErrorKind::LegacyImport).with_op("legacy_import")
            }
            GroveError::InvalidEdgeLog { .. } => {
                ExError::new(ExErrorKind::InvalidEdgeLog).with_op("from_edge_log")
            }
            GroveError::IdExhausted { .. } => ExError::new(ExErrorKind::IdExhausted),
            GroveError::Serialization { .. } => ExError::new(ExErrorKind::Serialization),
            GroveError::LockPoisoned => ExError::new(ExErrorKind::Concurrency),
            GroveError::Internal { .. } => ExError::new(ExErrorKind::Internal),
        }
        .with_message(message)
    }
}

impl From<serde_json::Error> for GroveError {
    fn from(err: serde_json::Error) -> Self {
        GroveError::Serialization {
            message: err.to_string(),
        }
    }
}
