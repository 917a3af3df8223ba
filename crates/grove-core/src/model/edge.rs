use serde::{Deserialize, Serialize};

use super::{EdgeId, NodeId, NodeType, Position};

/// Edge lifecycle status
///
/// `Active -> Retired` is the only transition; a retired edge stays in the
/// log for history but is invisible to rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeStatus {
    Active,
    Retired,
}

/// A labeled, directed, statused connection; the only stored entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub id: EdgeId,
    pub from: NodeId,
    pub from_type: NodeType,
    pub position: Position,
    pub to: NodeId,
    pub to_type: NodeType,
    pub status: EdgeStatus,
}

impl Edge {
    pub fn is_active(&self) -> bool {
        self.status == EdgeStatus::Active
    }

    pub fn is_retired(&self) -> bool {
        self.status == EdgeStatus::Retired
    }
}
