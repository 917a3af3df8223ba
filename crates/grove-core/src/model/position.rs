use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{GroveError, Result};

pub const FIRST_CHILD: &str = "firstChild";
pub const NEXT_ELEMENT: &str = "nextElement";
pub const ATTR_PREFIX: &str = "attr_";
pub const VALUE: &str = "value";
pub const HEAD: &str = "head";
pub const TAIL: &str = "tail";

/// Named slot on a source node that an edge occupies
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Position {
    FirstChild,
    NextElement,
    /// Attribute edge; holds the output attribute name without the prefix
    Attr(String),
    Value,
    Head,
    Tail,
    /// Any other registry-defined position
    Named(String),
}

impl Position {
    /// Attribute position for `name`
    ///
    /// # Errors
    ///
    /// Returns `InvalidName` when `name` is not a usable attribute name.
    pub fn attr(name: &str) -> Result<Self> {
        validate_attr_name(name)?;
        Ok(Position::Attr(name.to_string()))
    }

    pub fn is_attr(&self) -> bool {
        matches!(self, Position::Attr(_))
    }

    /// Re-check the attribute name of a position built without [`Position::attr`]
    ///
    /// Non-attribute positions always pass.
    ///
    /// # Errors
    ///
    /// Returns `InvalidName` for an `Attr` whose name is not a usable
    /// attribute name.
    pub fn check_name(&self) -> Result<()> {
        match self {
            Position::Attr(name) => validate_attr_name(name),
            _ => Ok(()),
        }
    }
}

fn validate_attr_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':'));

    if valid {
        Ok(())
    } else {
        Err(GroveError::InvalidName {
            name: name.to_string(),
        })
    }
}

impl FromStr for Position {
    type Err = GroveError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            FIRST_CHILD => Ok(Position::FirstChild),
            NEXT_ELEMENT => Ok(Position::NextElement),
            VALUE => Ok(Position::Value),
            HEAD => Ok(Position::Head),
            TAIL => Ok(Position::Tail),
            "" => Err(GroveError::InvalidName {
                name: String::new(),
            }),
            other => match other.strip_prefix(ATTR_PREFIX) {
                Some(name) => Position::attr(name),
                None => Ok(Position::Named(other.to_string())),
            },
        }
    }
}

impl TryFrom<String> for Position {
    type Error = GroveError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Position> for String {
    fn from(position: Position) -> Self {
        position.to_string()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::FirstChild => f.write_str(FIRST_CHILD),
            Position::NextElement => f.write_str(NEXT_ELEMENT),
            Position::Attr(name) => write!(f, "{}{}", ATTR_PREFIX, name),
            Position::Value => f.write_str(VALUE),
            Position::Head => f.write_str(HEAD),
            Position::Tail => f.write_str(TAIL),
            Position::Named(name) => f.write_str(name),
        }
    }
}
