//! HTML rendering of a grove
//!
//! Walks active edges from a root and produces a deterministic string.
//! Element children hang off `firstChild`, siblings off `nextElement`
//! (leaves included), attributes off `attr_*`. Legacy `linkedList` cells
//! render `head` then `tail`; legacy `attribute` nodes render their
//! `value` payload.
//!
//! Nesting recurses with an explicit depth bound. Sibling chains are
//! walked in a loop, so a long run of siblings costs no stack.

use std::collections::HashSet;

use super::config::RenderConfig;
use super::escape::{push_escaped, EscapeContext};
use crate::errors::{GroveError, Result};
use crate::model::{NodeId, NodeType, Position};
use crate::ops::GroveStore;

/// Render with the default configuration
///
/// # Errors
///
/// See [`render_with`].
pub fn render(store: &GroveStore, root: NodeId, root_type: &NodeType) -> Result<String> {
    render_with(store, root, root_type, &RenderConfig::default())
}

/// Render the subtree reachable from `root`
///
/// Pure: reads the store, never mutates it, and returns identical text for
/// identical input.
///
/// # Errors
///
/// * `NodeTypeMismatch` - the store records a different type for `root`
/// * `CycleDetected` - a node is reached twice
/// * `DepthExceeded` - nesting exceeds `config.max_depth`
/// * `UnrenderableNode` - strict mode and a node cannot appear where it is
pub fn render_with(
    store: &GroveStore,
    root: NodeId,
    root_type: &NodeType,
    config: &RenderConfig,
) -> Result<String> {
    if let Some(recorded) = store.node_type(root) {
        if recorded != root_type {
            return Err(GroveError::NodeTypeMismatch {
                node_id: root,
                recorded: recorded.to_string(),
                supplied: root_type.to_string(),
            });
        }
    }

    let mut renderer = Renderer {
        store,
        config,
        out: String::new(),
        visited: HashSet::new(),
    };
    renderer.sequence(root, root_type, 0, EscapeContext::Text)?;

    tracing::debug!(
        root_id = %root,
        output_len = renderer.out.len(),
        "rendered grove"
    );
    Ok(renderer.out)
}

struct Renderer<'a> {
    store: &'a GroveStore,
    config: &'a RenderConfig,
    out: String,
    visited: HashSet<NodeId>,
}

impl Renderer<'_> {
    /// Render `node` followed by everything chained after it
    fn sequence(
        &mut self,
        node: NodeId,
        node_type: &NodeType,
        depth: usize,
        context: EscapeContext,
    ) -> Result<()> {
        let mut current = Some((node, node_type.clone()));

        while let Some((id, ty)) = current.take() {
            self.node(id, &ty, depth, context)?;

            let mut next: Vec<(NodeId, NodeType)> = self
                .store
                .edges_at(id, &Position::NextElement)
                .map(|edge| (edge.to, edge.to_type.clone()))
                .collect();

            // Several concurrent sibling appends: all but the newest branch
            // off, the newest continues the loop.
            current = next.pop();
            for (sibling, sibling_type) in next {
                self.sequence(sibling, &sibling_type, depth + 1, context)?;
            }
        }

        Ok(())
    }

    fn node(
        &mut self,
        id: NodeId,
        node_type: &NodeType,
        depth: usize,
        context: EscapeContext,
    ) -> Result<()> {
        if !self.visited.insert(id) {
            return Err(GroveError::CycleDetected { node_id: id });
        }
        if depth > self.config.max_depth {
            return Err(GroveError::DepthExceeded {
                node_id: id,
                limit: self.config.max_depth,
            });
        }

        match (node_type, context) {
            (NodeType::Leaf(text), _) => {
                push_escaped(&mut self.out, text, self.config.escape, context);
                Ok(())
            }
            (NodeType::Element(tag), EscapeContext::Text) => {
                self.out.push('<');
                self.out.push_str(tag.as_str());
                self.attributes(id, depth)?;
                self.out.push('>');
                self.children(id, &Position::FirstChild, depth)?;
                self.out.push_str("</");
                self.out.push_str(tag.as_str());
                self.out.push('>');
                Ok(())
            }
            (NodeType::LinkedList, EscapeContext::Text) => {
                self.children(id, &Position::Head, depth)?;
                self.children(id, &Position::Tail, depth)
            }
            (NodeType::Attribute, EscapeContext::AttributeValue) => {
                for (target, target_type) in self.targets(id, &Position::Value) {
                    self.sequence(target, &target_type, depth + 1, context)?;
                }
                Ok(())
            }
            (other, _) => self.unrenderable(id, other, context),
        }
    }

    fn attributes(&mut self, id: NodeId, depth: usize) -> Result<()> {
        let attrs: Vec<(Position, NodeId, NodeType)> = self
            .store
            .edges_from(id)
            .into_iter()
            .filter(|edge| edge.position.is_attr())
            .map(|edge| (edge.position.clone(), edge.to, edge.to_type.clone()))
            .collect();

        for (position, target, target_type) in attrs {
            // Checked on insert and load already; raw appends skip both.
            position.check_name()?;
            let Position::Attr(name) = position else {
                continue;
            };
            self.out.push(' ');
            self.out.push_str(&name);
            self.out.push_str("=\"");
            self.sequence(target, &target_type, depth + 1, EscapeContext::AttributeValue)?;
            self.out.push('"');
        }

        Ok(())
    }

    fn children(&mut self, id: NodeId, position: &Position, depth: usize) -> Result<()> {
        for (child, child_type) in self.targets(id, position) {
            self.sequence(child, &child_type, depth + 1, EscapeContext::Text)?;
        }
        Ok(())
    }

    fn targets(&self, id: NodeId, position: &Position) -> Vec<(NodeId, NodeType)> {
        self.store
            .edges_at(id, position)
            .map(|edge| (edge.to, edge.to_type.clone()))
            .collect()
    }

    fn unrenderable(
        &mut self,
        id: NodeId,
        node_type: &NodeType,
        context: EscapeContext,
    ) -> Result<()> {
        if self.config.strict {
            let context = match context {
                EscapeContext::Text => "as document content",
                EscapeContext::AttributeValue => "inside an attribute value",
            };
            return Err(GroveError::UnrenderableNode {
                node_id: id,
                node_type: node_type.constructor_token(),
                context: context.to_string(),
            });
        }

        tracing::warn!(node_id = %id, node_type = %node_type, "emitting raw constructor token");
        self.out.push_str(&node_type.constructor_token());
        Ok(())
    }
}
