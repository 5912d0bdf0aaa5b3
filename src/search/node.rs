//! Search tree nodes stored in an index-based arena
//!
//! One node per ply visited. Parent links are plain indices; the whole
//! arena is reset at the start of every depth iteration, so no node
//! outlives the search pass that created it.
//!
//! Children are pushed in visit order, so a child's subtree always occupies
//! the indices after the child itself. [`NodeArena::rewind`] uses that to
//! drop the subtree of a child that did not improve on its siblings.

use crate::moves::Move;

/// Handle to a node in a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Memoized value of a node.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NodeValue {
    /// Spread change for the maximizing player
    pub value: f32,
    /// The line behind this value reaches the end of the game
    pub known_end: bool,
}

/// One ply of the search tree.
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// Move leading to this node; `None` at the root
    pub mv: Option<Move>,
    pub parent: Option<NodeId>,
    pub depth_remaining: u8,
    pub value: NodeValue,
}

/// Arena owning every node of one search pass.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all nodes and create a fresh root.
    pub fn reset(&mut self, depth_remaining: u8) -> NodeId {
        self.nodes.clear();
        self.nodes.push(SearchNode {
            mv: None,
            parent: None,
            depth_remaining,
            value: NodeValue::default(),
        });
        NodeId(0)
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn push_child(&mut self, parent: NodeId, mv: Move, depth_remaining: u8) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(SearchNode {
            mv: Some(mv),
            parent: Some(parent),
            depth_remaining,
            value: NodeValue::default(),
        });
        id
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    #[inline]
    pub fn value(&self, id: NodeId) -> NodeValue {
        self.nodes[id.0].value
    }

    #[inline]
    pub fn set_value(&mut self, id: NodeId, value: NodeValue) {
        self.nodes[id.0].value = value;
    }

    /// Discard `id` and every node created after it.
    #[inline]
    pub fn rewind(&mut self, id: NodeId) {
        debug_assert!(id.0 > 0, "cannot rewind past the root");
        self.nodes.truncate(id.0);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Moves from the root down to `leaf`, in play order.
    #[must_use]
    pub fn sequence(&self, leaf: NodeId) -> Vec<Move> {
        let mut seq = Vec::new();
        let mut cursor = Some(leaf);
        while let Some(id) = cursor {
            let node = &self.nodes[id.0];
            match &node.mv {
                Some(mv) => seq.push(mv.clone()),
                None => break,
            }
            cursor = node.parent;
        }
        seq.reverse();
        seq
    }
}
