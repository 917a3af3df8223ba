//! Functional-boundary apply function
//!
//! ## Atomicity Contract
//!
//! - **All-or-nothing**: a command creates exactly one edge (or retires
//!   exactly one), or it fails and the store is unchanged
//! - **No panics**: invalid input returns typed errors
//!
//! ## Example
//!
//! ```
//! use grove_core::{apply, Command, GroveStore, NodeType};
//!
//! let mut state = GroveStore::new();
//! let body = state.declare_root(NodeType::element("body").unwrap()).unwrap();
//!
//! let cmd = Command::AppendFirstChild { parent: body, tag: "p".to_string() };
//! let (state, receipt) = apply(state, cmd).unwrap();
//! assert_eq!(state.edge_count(), 1);
//! assert!(receipt.inserted().is_some());
//! ```

use crate::commands::Command;
use crate::errors::Result;
use crate::model::EdgeId;
use crate::ops::{mutator, GroveStore, Inserted};

/// What a successful command did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Receipt {
    Inserted(Inserted),
    Retired(EdgeId),
}

impl Receipt {
    pub fn inserted(&self) -> Option<Inserted> {
        match self {
            Receipt::Inserted(ins) => Some(*ins),
            Receipt::Retired(_) => None,
        }
    }

    /// The edge the command created or retired
    pub fn edge_id(&self) -> EdgeId {
        match self {
            Receipt::Inserted(ins) => ins.edge_id,
            Receipt::Retired(edge_id) => *edge_id,
        }
    }
}

/// Apply a command to a store, returning the new store state
///
/// Takes ownership of the current state. On `Err` the state is dropped;
/// callers that need the old state keep a clone (or use [`execute`],
/// which leaves the borrowed store untouched on failure).
///
/// # Errors
///
/// Any error of the underlying mutation; see [`execute`].
pub fn apply(mut state: GroveStore, cmd: Command) -> Result<(GroveStore, Receipt)> {
    let receipt = execute(&mut state, cmd)?;
    Ok((state, receipt))
}

/// Run a command against a borrowed store
///
/// # Errors
///
/// * `IllegalPosition`, `UnknownNode`, `NodeTypeMismatch`, `InvalidName`
///   for insertions
/// * `UnknownEdge`, `AlreadyRetired` for retirement
pub fn execute(store: &mut GroveStore, cmd: Command) -> Result<Receipt> {
    match cmd {
        Command::InsertEdge {
            from,
            from_type,
            position,
            to_type,
        } => store
            .insert_edge(from, &from_type, position, to_type)
            .map(Receipt::Inserted),

        Command::AppendFirstChild { parent, tag } => {
            mutator::append_first_child(store, parent, &tag).map(Receipt::Inserted)
        }

        Command::AppendNextSibling { node, tag } => {
            mutator::append_next_sibling(store, node, &tag).map(Receipt::Inserted)
        }

        Command::AppendLeafFirstChild { parent, text } => {
            mutator::append_leaf_first_child(store, parent, text).map(Receipt::Inserted)
        }

        Command::AppendLeafNextSibling { node, text } => {
            mutator::append_leaf_next_sibling(store, node, text).map(Receipt::Inserted)
        }

        Command::AppendAttribute {
            element,
            name,
            value,
        } => mutator::append_attribute(store, element, &name, value).map(Receipt::Inserted),

        Command::RetireEdge { edge_id } => {
            mutator::retire(store, edge_id)?;
            Ok(Receipt::Retired(edge_id))
        }
    }
}
