use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::GroveError;

/// Opaque node identifier
///
/// Carries allocation order only. Displays as `node<N>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(u64);

/// Opaque edge identifier, from a counter independent of [`NodeId`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(u64);

impl NodeId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl EdgeId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node{}", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "edge{}", self.0)
    }
}

/// Accepts `node3` as well as the bare `3`
impl FromStr for NodeId {
    type Err = GroveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_prefixed(s, "node")
            .map(NodeId)
            .ok_or_else(|| GroveError::InvalidName {
                name: s.to_string(),
            })
    }
}

impl FromStr for EdgeId {
    type Err = GroveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_prefixed(s, "edge")
            .map(EdgeId)
            .ok_or_else(|| GroveError::InvalidName {
                name: s.to_string(),
            })
    }
}

fn parse_prefixed(s: &str, prefix: &str) -> Option<u64> {
    s.strip_prefix(prefix).unwrap_or(s).parse().ok()
}
