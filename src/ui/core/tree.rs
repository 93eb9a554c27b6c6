//! The hit-test tree: a flat list of interactive regions, rebuilt every frame.

use super::geom::{Pos, Rect};
use super::id::Id;

/// What a node reacts to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sense {
    pub hover: bool,
    pub drag: bool,
    pub drop: bool,
}

impl Sense {
    /// Hoverable, draggable and a drop target.
    pub const CARD: Sense = Sense {
        hover: true,
        drag: true,
        drop: true,
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// A deck card registered at its committed slot.
    Card { slot: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node {
    pub id: Id,
    pub rect: Rect,
    pub sense: Sense,
    pub kind: NodeKind,
}

#[derive(Clone, Debug, Default)]
pub struct UiTree {
    nodes: Vec<Node>,
}

impl UiTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Later nodes sit on top of earlier ones.
    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// The topmost node under `pos` whose sense passes `want`.
    pub fn hit(&self, pos: Pos, want: impl Fn(Sense) -> bool) -> Option<&Node> {
        self.nodes
            .iter()
            .rev()
            .find(|n| want(n.sense) && n.rect.contains(pos))
    }

    /// Drop targets in registration order, wherever they are.
    pub fn drop_targets(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter().filter(|n| n.sense.drop)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/tree.rs"]
mod tests;
