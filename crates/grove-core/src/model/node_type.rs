//! Node-type constructors
//!
//! A node is identified by its id plus one of these constructors. Leaf
//! literals live in the variant payload, so no type test ever parses a
//! string prefix.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{GroveError, Result};

/// Validated element name, stored lowercase
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    /// Parse a tag from either `body` or `<body>`
    ///
    /// # Errors
    ///
    /// Returns `InvalidName` unless the name is an ASCII letter followed by
    /// ASCII alphanumerics or `-`.
    pub fn parse(raw: &str) -> Result<Self> {
        let name = raw
            .strip_prefix('<')
            .and_then(|s| s.strip_suffix('>'))
            .unwrap_or(raw);

        let mut chars = name.chars();
        let valid = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '-');

        if !valid {
            return Err(GroveError::InvalidName {
                name: raw.to_string(),
            });
        }

        Ok(Self(name.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Tag {
    type Error = GroveError;

    fn try_from(value: String) -> Result<Self> {
        Tag::parse(&value)
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Node-type tag for a grove node
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum NodeType {
    /// Markup element
    Element(Tag),
    /// Literal text payload
    Leaf(String),
    /// Legacy attribute holder; its payload hangs off a `value` edge
    Attribute,
    /// Legacy list cell with `head` and `tail` positions
    LinkedList,
}

impl NodeType {
    /// Element constructor from a tag name
    ///
    /// # Errors
    ///
    /// Returns `InvalidName` for names [`Tag::parse`] rejects.
    pub fn element(tag: &str) -> Result<Self> {
        Ok(NodeType::Element(Tag::parse(tag)?))
    }

    pub fn leaf(text: impl Into<String>) -> Self {
        NodeType::Leaf(text.into())
    }

    /// Build a node type from a constructor token such as `<p>` or `string`
    ///
    /// `payload` carries the literal for the `string` constructor; it is
    /// ignored for every other constructor.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConstructor` for unknown tokens or a `string`
    /// constructor without payload.
    pub fn parse_constructor(token: &str, payload: Option<&str>) -> Result<Self> {
        match token {
            "string" => payload
                .map(NodeType::leaf)
                .ok_or_else(|| GroveError::InvalidConstructor {
                    token: token.to_string(),
                }),
            "attribute" => Ok(NodeType::Attribute),
            "linkedList" => Ok(NodeType::LinkedList),
            t if t.starts_with('<') && t.ends_with('>') => {
                Tag::parse(t)
                    .map(NodeType::Element)
                    .map_err(|_| GroveError::InvalidConstructor {
                        token: token.to_string(),
                    })
            }
            _ => Err(GroveError::InvalidConstructor {
                token: token.to_string(),
            }),
        }
    }

    /// The constructor token, without any leaf payload
    pub fn constructor_token(&self) -> String {
        match self {
            NodeType::Element(tag) => format!("<{}>", tag),
            NodeType::Leaf(_) => "string".to_string(),
            NodeType::Attribute => "attribute".to_string(),
            NodeType::LinkedList => "linkedList".to_string(),
        }
    }

    pub fn is_element(&self) -> bool {
        matches!(self, NodeType::Element(_))
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, NodeType::Leaf(_))
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeType::Leaf(text) => write!(f, "string({:?})", text),
            other => f.write_str(&other.constructor_token()),
        }
    }
}
