pub mod edge_log;
pub mod mutator;
pub mod store;

pub use edge_log::{EdgeLog, RootDecl};
pub use store::{GroveStore, Inserted};
