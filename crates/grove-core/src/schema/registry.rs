//! Schema Registry
//!
//! Static mapping from element constructor to its ordered legal positions.
//! Reserved conventions (`attr_*`, `nextElement`, `value` on attributes,
//! `head`/`tail` on lists) are decided here too, so the store has one
//! place to ask about legality.

use std::collections::HashMap;

use crate::model::{NodeType, Position, Tag};

const CONTAINER_TAGS: &[&str] = &[
    "html", "head", "body", "title", "div", "span", "p", "a", "strong", "em", "b", "i", "u",
    "small", "code", "pre", "blockquote", "ul", "ol", "li", "h1", "h2", "h3", "h4", "h5", "h6",
    "section", "article", "header", "footer", "nav", "main", "table", "thead", "tbody", "tr",
    "td", "th", "form", "label", "button",
];

const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "meta", "link"];

/// Read-only lookup table of element constructors
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaRegistry {
    elements: HashMap<String, Vec<Position>>,
}

impl SchemaRegistry {
    /// Registry with no element constructors at all
    pub fn empty() -> Self {
        Self::default()
    }

    /// Default HTML registry: container elements take `firstChild`, void
    /// elements take no structural positions.
    pub fn html() -> Self {
        let registry = CONTAINER_TAGS.iter().fold(Self::empty(), |reg, tag| {
            reg.with_tag(tag, vec![Position::FirstChild])
        });
        VOID_TAGS
            .iter()
            .fold(registry, |reg, tag| reg.with_tag(tag, Vec::new()))
    }

    /// Add or replace an element constructor
    pub fn with_element(mut self, tag: &Tag, positions: Vec<Position>) -> Self {
        self.elements.insert(tag.as_str().to_string(), positions);
        self
    }

    fn with_tag(mut self, tag: &str, positions: Vec<Position>) -> Self {
        self.elements.insert(tag.to_string(), positions);
        self
    }

    /// Whether an element constructor is listed
    pub fn knows(&self, tag: &Tag) -> bool {
        self.elements.contains_key(tag.as_str())
    }

    /// Ordered legal structural positions for a node type
    ///
    /// Unlisted elements yield an empty sequence; leaves yield the
    /// chaining-only sequence.
    pub fn legal_positions(&self, node_type: &NodeType) -> Vec<Position> {
        match node_type {
            NodeType::Element(tag) => self
                .elements
                .get(tag.as_str())
                .cloned()
                .unwrap_or_default(),
            NodeType::Leaf(_) => vec![Position::NextElement],
            NodeType::Attribute => vec![Position::Value],
            NodeType::LinkedList => vec![Position::Head, Position::Tail],
        }
    }

    /// Positional legality of an edge leaving `from_type`
    pub fn is_legal(&self, from_type: &NodeType, position: &Position) -> bool {
        match (from_type, position) {
            (NodeType::Element(_), Position::Attr(_) | Position::NextElement) => true,
            (NodeType::Element(tag), position) => self
                .elements
                .get(tag.as_str())
                .is_some_and(|legal| legal.contains(position)),
            (NodeType::Leaf(_), Position::NextElement) => true,
            (NodeType::Attribute, Position::Value) => true,
            (NodeType::LinkedList, Position::Head | Position::Tail) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn el(tag: &str) -> NodeType {
        NodeType::element(tag).unwrap()
    }

    #[test]
    fn test_container_and_void_tags() {
        let reg = SchemaRegistry::html();
        assert_eq!(reg.legal_positions(&el("p")), vec![Position::FirstChild]);
        assert!(reg.legal_positions(&el("br")).is_empty());
        assert!(reg.is_legal(&el("p"), &Position::FirstChild));
        assert!(!reg.is_legal(&el("br"), &Position::FirstChild));
    }

    #[test]
    fn test_reserved_positions_ignore_registry() {
        let reg = SchemaRegistry::empty();
        assert!(reg.is_legal(&el("custom"), &Position::Attr("id".to_string())));
        assert!(reg.is_legal(&el("custom"), &Position::NextElement));
        assert!(!reg.is_legal(&el("custom"), &Position::FirstChild));
        assert!(reg.is_legal(&NodeType::leaf("x"), &Position::NextElement));
        assert!(reg.is_legal(&NodeType::Attribute, &Position::Value));
        assert!(reg.is_legal(&NodeType::LinkedList, &Position::Tail));
    }

    #[test]
    fn test_reserved_positions_bound_to_their_type() {
        let reg = SchemaRegistry::html();
        assert!(!reg.is_legal(&el("p"), &Position::Value));
        assert!(!reg.is_legal(&el("p"), &Position::Head));
        assert!(!reg.is_legal(&NodeType::leaf("x"), &Position::FirstChild));
        assert!(!reg.is_legal(&NodeType::Attribute, &Position::NextElement));
    }

    #[test]
    fn test_unlisted_element_has_no_positions() {
        let reg = SchemaRegistry::html();
        assert!(reg.legal_positions(&el("blink")).is_empty());
        assert!(!reg.is_legal(
            &el("p"),
            &Position::Named("bogus_position".to_string())
        ));
    }

    #[test]
    fn test_with_element_extends() {
        let tag = Tag::parse("card").unwrap();
        let reg = SchemaRegistry::html().with_element(
            &tag,
            vec![Position::FirstChild, Position::Named("footer".to_string())],
        );
        assert!(reg.knows(&tag));
        assert!(reg.is_legal(&el("card"), &Position::Named("footer".to_string())));
    }
}
