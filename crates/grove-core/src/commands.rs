//! Command inventory for grove mutations
//!
//! Every mutation the grove supports has a variant here, so an embedding
//! layer can queue, log or ship edits as values and run them through
//! [`crate::apply::apply`].

use serde::{Deserialize, Serialize};

use crate::model::{EdgeId, NodeId, NodeType, Position};

/// One grove mutation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    /// Raw edge insertion with an explicit source type
    InsertEdge {
        from: NodeId,
        from_type: NodeType,
        position: Position,
        to_type: NodeType,
    },

    AppendFirstChild { parent: NodeId, tag: String },

    AppendNextSibling { node: NodeId, tag: String },

    AppendLeafFirstChild { parent: NodeId, text: String },

    AppendLeafNextSibling { node: NodeId, text: String },

    AppendAttribute {
        element: NodeId,
        name: String,
        value: String,
    },

    /// Tombstone an edge
    RetireEdge { edge_id: EdgeId },
}

impl Command {
    /// Stable operation name used in logs
    pub fn op_name(&self) -> &'static str {
        match self {
            Command::InsertEdge { .. } => "insert_edge",
            Command::AppendFirstChild { .. } => "append_first_child",
            Command::AppendNextSibling { .. } => "append_next_sibling",
            Command::AppendLeafFirstChild { .. } => "append_leaf_first_child",
            Command::AppendLeafNextSibling { .. } => "append_leaf_next_sibling",
            Command::AppendAttribute { .. } => "append_attribute",
            Command::RetireEdge { .. } => "retire_edge",
        }
    }
}
