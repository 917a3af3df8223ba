pub mod edge;
pub mod ids;
pub mod node_type;
pub mod position;

pub use edge::{Edge, EdgeStatus};
pub use ids::{EdgeId, NodeId};
pub use node_type::{NodeType, Tag};
pub use position::Position;
