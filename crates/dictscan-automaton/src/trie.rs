//! Build-time trie arena.
//!
//! Nodes are append-only: insertion creates nodes and never removes them,
//! so a `NodeId` handed out during construction stays valid for the life
//! of the automaton. Cross-links (fail, output link) are plain ids into the
//! same arena, including the root's link to itself.

use dictscan_core::PatternId;
use dictscan_core::invariants::ensure_u32_index;

use crate::builder::DuplicatePolicy;

/// Index of a node in the automaton's arena.
///
/// Nodes are numbered in creation order; the root is always `NodeId::ROOT`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct NodeId(u32);

impl NodeId {
    /// The empty-prefix node.
    pub const ROOT: Self = Self(0);

    /// Raw index for serialization/debugging.
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) fn from_index(index: usize) -> Self {
        Self(ensure_u32_index(index, "NodeId"))
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// A node under construction.
#[derive(Clone, Debug)]
pub(crate) struct TrieNode {
    /// Outgoing edges, sorted by byte.
    pub(crate) children: Vec<(u8, NodeId)>,
    /// Patterns spelled exactly by the path to this node.
    pub(crate) outputs: Vec<PatternId>,
    pub(crate) parent: NodeId,
    /// Byte on the edge from `parent`. Zero for the root.
    pub(crate) byte: u8,
    pub(crate) depth: u32,
}

impl TrieNode {
    fn root() -> Self {
        Self {
            children: Vec::new(),
            outputs: Vec::new(),
            parent: NodeId::ROOT,
            byte: 0,
            depth: 0,
        }
    }
}

/// Prefix tree over all inserted patterns.
#[derive(Clone, Debug)]
pub(crate) struct Trie {
    nodes: Vec<TrieNode>,
}

impl Trie {
    /// Create a trie holding only the root.
    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![TrieNode::root()],
        }
    }

    /// Insert one pattern, creating nodes for unseen (node, byte) pairs.
    ///
    /// The empty pattern marks the root.
    pub(crate) fn insert(&mut self, pattern: PatternId, bytes: &[u8], policy: DuplicatePolicy) {
        let mut node = NodeId::ROOT;
        for &byte in bytes {
            node = match self.child(node, byte) {
                Some(child) => child,
                None => self.push_child(node, byte),
            };
        }

        let outputs = &mut self.nodes[node.index()].outputs;
        match policy {
            DuplicatePolicy::LastWins => {
                outputs.clear();
                outputs.push(pattern);
            }
            DuplicatePolicy::KeepAll => outputs.push(pattern),
        }
    }

    fn push_child(&mut self, parent: NodeId, byte: u8) -> NodeId {
        let id = NodeId::from_index(self.nodes.len());
        let depth = self.nodes[parent.index()].depth + 1;
        self.nodes.push(TrieNode {
            children: Vec::new(),
            outputs: Vec::new(),
            parent,
            byte,
            depth,
        });

        let children = &mut self.nodes[parent.index()].children;
        // Callers check `child` first, so the search always misses.
        let slot = children
            .binary_search_by_key(&byte, |&(b, _)| b)
            .unwrap_or_else(|slot| slot);
        children.insert(slot, (byte, id));
        id
    }

    /// Child of `node` along `byte`, if any.
    #[inline]
    pub(crate) fn child(&self, node: NodeId, byte: u8) -> Option<NodeId> {
        let children = &self.nodes[node.index()].children;
        children
            .binary_search_by_key(&byte, |&(b, _)| b)
            .ok()
            .map(|i| children[i].1)
    }

    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.index()]
    }

    /// Number of nodes, root included.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Consume the trie, yielding nodes in id order.
    pub(crate) fn into_nodes(self) -> Vec<TrieNode> {
        self.nodes
    }
}
