//! Index arena for AST nodes.
//!
//! Nodes are stored in a single `Vec` per compilation; a [`NodeId`] is the
//! slot index and doubles as the node's identity. Sharing a node means
//! storing the same id in two fields; a cycle means a slot whose fields
//! eventually lead back to its own id. Slots are rewired with
//! [`AstArena::replace`], which is also how cycles are tied off.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::{Node, Value};

/// Stable identity of a node in an [`AstArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(u32);

impl NodeId {
    /// Slot index of this id.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Arena holding the nodes of one compilation unit.
///
/// Besides the node slots, the arena keeps a side table of annotations:
/// extra named fields later phases attach to a node without changing its
/// declared shape. Annotations are kept in insertion order per node so that
/// everything downstream stays deterministic.
#[derive(Debug, Default)]
pub struct AstArena {
    nodes: Vec<Node>,
    annotations: HashMap<NodeId, Vec<(String, Value)>>,
}

impl AstArena {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a node and returns its id.
    pub fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Returns the node in the given slot, or `None` for an id minted by a
    /// different arena.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Replaces the node in an existing slot, returning the previous
    /// occupant. Returns `None` (and changes nothing) for a foreign id.
    pub fn replace(&mut self, id: NodeId, node: Node) -> Option<Node> {
        let slot = self.nodes.get_mut(id.index())?;
        Some(std::mem::replace(slot, node))
    }

    /// Attaches an extra named field to a node.
    pub fn annotate(&mut self, id: NodeId, name: impl Into<String>, value: Value) {
        self.annotations
            .entry(id)
            .or_default()
            .push((name.into(), value));
    }

    /// Annotations attached to a node, in insertion order.
    pub fn annotations(&self, id: NodeId) -> &[(String, Value)] {
        self.annotations
            .get(&id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of allocated nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if no nodes have been allocated.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
