//! In-memory scene: a [`Renderer`] that records nodes instead of drawing them.
//!
//! The scene keeps nodes in creation order with explicit parent/child links
//! and serializes to a nested JSON document, one entry per top-level node.
//! It enforces the same rules a canvas host would: text needs a loaded font,
//! only rectangles hold children, and a node cannot be moved inside itself.

use std::collections::HashSet;

use serde::Serialize;
use serde_json::Value;

use crate::render::{FontSpec, RectSpec, RenderError, Renderer, TextSpec};

/// Handle to a node in a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NodeId(usize);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a scene node draws.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeContent {
    Rect(RectSpec),
    Text(TextSpec),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub content: NodeContent,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

/// Recording renderer backed by a node arena.
#[derive(Debug, Default)]
pub struct Scene {
    nodes: Vec<SceneNode>,
    roots: Vec<NodeId>,
    fonts: HashSet<FontSpec>,
    unavailable: HashSet<String>,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat every style of `family` as missing on this host.
    #[must_use]
    pub fn without_family(mut self, family: impl Into<String>) -> Self {
        self.unavailable.insert(family.into());
        self
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id.0)
    }

    /// Top-level nodes in creation order.
    #[must_use]
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Total number of nodes, nested ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn is_font_loaded(&self, font: &FontSpec) -> bool {
        self.fonts.contains(font)
    }

    /// Top-level rectangles, in creation order.
    pub fn root_rects(&self) -> impl Iterator<Item = (NodeId, &RectSpec)> {
        self.roots.iter().filter_map(|id| match &self.nodes[id.0].content {
            NodeContent::Rect(rect) => Some((*id, rect)),
            NodeContent::Text(_) => None,
        })
    }

    /// Text of every direct text child of `id`.
    #[must_use]
    pub fn child_texts(&self, id: NodeId) -> Vec<&str> {
        let Some(node) = self.node(id) else {
            return Vec::new();
        };
        node.children
            .iter()
            .filter_map(|child| match &self.nodes[child.0].content {
                NodeContent::Text(text) => Some(text.characters.as_str()),
                NodeContent::Rect(_) => None,
            })
            .collect()
    }

    /// Serialize the scene as nested JSON, one element per top-level node.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if a node fails to serialize.
    pub fn to_json(&self) -> Result<Value, serde_json::Error> {
        let roots = self
            .roots
            .iter()
            .map(|id| self.node_json(*id))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Value::Array(roots))
    }

    fn node_json(&self, id: NodeId) -> Result<Value, serde_json::Error> {
        let node = &self.nodes[id.0];
        let mut value = serde_json::to_value(&node.content)?;
        if !node.children.is_empty() {
            let children = node
                .children
                .iter()
                .map(|child| self.node_json(*child))
                .collect::<Result<Vec<_>, _>>()?;
            if let Value::Object(map) = &mut value {
                map.insert("children".to_owned(), Value::Array(children));
            }
        }
        Ok(value)
    }

    fn insert(&mut self, content: NodeContent) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(SceneNode { content, parent: None, children: Vec::new() });
        self.roots.push(id);
        id
    }

    fn is_ancestor(&self, candidate: NodeId, of: NodeId) -> bool {
        let mut cursor = self.nodes[of.0].parent;
        while let Some(current) = cursor {
            if current == candidate {
                return true;
            }
            cursor = self.nodes[current.0].parent;
        }
        false
    }
}

impl Renderer for Scene {
    type Handle = NodeId;

    fn load_font(&mut self, font: &FontSpec) -> Result<(), RenderError> {
        if self.unavailable.contains(&font.family) {
            return Err(RenderError::FontUnavailable(font.clone()));
        }
        self.fonts.insert(font.clone());
        Ok(())
    }

    fn create_rect(&mut self, spec: &RectSpec) -> Result<NodeId, RenderError> {
        if spec.width == 0 || spec.height == 0 {
            return Err(RenderError::Host(format!("node \"{}\" must have a non-zero size", spec.name)));
        }
        Ok(self.insert(NodeContent::Rect(spec.clone())))
    }

    fn create_text(&mut self, spec: &TextSpec) -> Result<NodeId, RenderError> {
        if !self.fonts.contains(&spec.font) {
            return Err(RenderError::FontNotLoaded(spec.font.clone()));
        }
        Ok(self.insert(NodeContent::Text(spec.clone())))
    }

    fn set_parent(&mut self, child: NodeId, parent: NodeId) -> Result<(), RenderError> {
        for id in [child, parent] {
            if self.node(id).is_none() {
                return Err(RenderError::UnknownNode(id.to_string()));
            }
        }
        let holds_children = matches!(self.nodes[parent.0].content, NodeContent::Rect(_));
        if child == parent || !holds_children || self.is_ancestor(child, parent) {
            return Err(RenderError::InvalidParent { child: child.to_string(), parent: parent.to_string() });
        }

        match self.nodes[child.0].parent {
            Some(previous) => self.nodes[previous.0].children.retain(|id| *id != child),
            None => self.roots.retain(|id| *id != child),
        }
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        Ok(())
    }
}

#[cfg(test)]
#[path = "scene_test.rs"]
mod tests;
