//! The hero's scene group
//!
//! The group holds exactly one subject: the procedural fallback or the
//! loaded model. Swapping is a single move, so there is no state in which
//! both or neither are present.

use super::node::{Node, Transform};

/// What the scene group currently shows
#[derive(Debug)]
pub enum GroupContent {
    Fallback(Node),
    Model(Node),
}

impl GroupContent {
    pub fn node(&self) -> &Node {
        match self {
            GroupContent::Fallback(node) | GroupContent::Model(node) => node,
        }
    }

    pub fn node_mut(&mut self) -> &mut Node {
        match self {
            GroupContent::Fallback(node) | GroupContent::Model(node) => node,
        }
    }
}

/// Animated container for the hero subject
#[derive(Debug)]
pub struct SceneGroup {
    pub transform: Transform,
    content: GroupContent,
}

impl SceneGroup {
    pub fn with_fallback(fallback: Node) -> Self {
        Self {
            transform: Transform::default(),
            content: GroupContent::Fallback(fallback),
        }
    }

    pub fn content(&self) -> &GroupContent {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut GroupContent {
        &mut self.content
    }

    pub fn shows_fallback(&self) -> bool {
        matches!(self.content, GroupContent::Fallback(_))
    }

    pub fn shows_model(&self) -> bool {
        matches!(self.content, GroupContent::Model(_))
    }

    /// Replaces the current subject with `model`, returning the previous one
    pub fn swap_in_model(&mut self, model: Node) -> GroupContent {
        std::mem::replace(&mut self.content, GroupContent::Model(model))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_returns_the_fallback() {
        let mut group = SceneGroup::with_fallback(Node::new("fallback"));
        assert!(group.shows_fallback());

        let previous = group.swap_in_model(Node::new("model"));
        assert!(matches!(previous, GroupContent::Fallback(ref n) if n.name == "fallback"));
        assert!(group.shows_model());
        assert_eq!(group.content().node().name, "model");
    }
}
