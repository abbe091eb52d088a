//! The frozen automaton and its match loop.

use std::collections::BTreeSet;
use std::ops::ControlFlow;

use dictscan_core::PatternId;

use crate::builder::AutomatonBuilder;
use crate::links::Links;
use crate::trace::{NoopTracer, Tracer};
use crate::trie::{NodeId, Trie};

/// Contiguous run inside one of the automaton's flat tables.
#[derive(Clone, Copy, Debug)]
struct Span {
    start: u32,
    len: u32,
}

impl Span {
    #[inline]
    fn range(self) -> std::ops::Range<usize> {
        let start = self.start as usize;
        start..start + self.len as usize
    }
}

#[derive(Clone, Debug)]
struct Node {
    /// Into `Automaton::edges`, sorted by byte.
    edges: Span,
    /// Into `Automaton::outputs`.
    outputs: Span,
    fail: NodeId,
    output_link: Option<NodeId>,
    parent: NodeId,
    byte: u8,
    depth: u32,
}

/// Aho-Corasick automaton over raw bytes.
///
/// Immutable once built: every link is resolved during construction, so
/// `matches` only reads and any number of threads may share one instance.
///
/// ```
/// use dictscan_automaton::Automaton;
///
/// let patterns = ["he", "she", "his", "hers"];
/// let ac = Automaton::build(patterns);
/// let found: Vec<_> = ac
///     .matches("ushers")
///     .iter()
///     .map(|id| patterns[id.as_usize()])
///     .collect();
/// assert_eq!(found, vec!["he", "she", "hers"]);
/// ```
#[derive(Clone, Debug)]
pub struct Automaton {
    nodes: Vec<Node>,
    edges: Vec<(u8, NodeId)>,
    outputs: Vec<PatternId>,
    pattern_count: usize,
}

impl Automaton {
    /// Create a builder for non-default construction options.
    pub fn builder() -> AutomatonBuilder {
        AutomatonBuilder::new()
    }

    /// Build with default options (last duplicate wins).
    pub fn build<I, P>(patterns: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[u8]>,
    {
        AutomatonBuilder::new().build(patterns)
    }

    /// Flatten the trie and its links into the read-only layout.
    pub(crate) fn from_parts(trie: Trie, links: Links, pattern_count: usize) -> Self {
        let Links { fail, output_link } = links;
        let trie_nodes = trie.into_nodes();

        let mut nodes = Vec::with_capacity(trie_nodes.len());
        let mut edges = Vec::with_capacity(trie_nodes.len().saturating_sub(1));
        let mut outputs = Vec::new();

        for (i, node) in trie_nodes.into_iter().enumerate() {
            let edge_span = Span {
                start: edges.len() as u32,
                len: node.children.len() as u32,
            };
            edges.extend_from_slice(&node.children);

            let output_span = Span {
                start: outputs.len() as u32,
                len: node.outputs.len() as u32,
            };
            outputs.extend_from_slice(&node.outputs);

            nodes.push(Node {
                edges: edge_span,
                outputs: output_span,
                fail: fail[i],
                output_link: output_link[i],
                parent: node.parent,
                byte: node.byte,
                depth: node.depth,
            });
        }

        Self {
            nodes,
            edges,
            outputs,
            pattern_count,
        }
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of patterns the automaton was built from, duplicates included.
    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    /// Whether the automaton was built from zero patterns.
    pub fn is_empty(&self) -> bool {
        self.pattern_count == 0
    }

    /// Inspect a node.
    ///
    /// # Panics
    /// Panics if `id` does not belong to this automaton.
    pub fn node(&self, id: NodeId) -> NodeView<'_> {
        NodeView {
            automaton: self,
            id,
            node: &self.nodes[self.ensure_node_index(id)],
        }
    }

    /// Iterate over all nodes in id order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeView<'_>> {
        self.nodes.iter().enumerate().map(|(i, node)| NodeView {
            automaton: self,
            id: NodeId::from_index(i),
            node,
        })
    }

    /// The byte string spelled by the path from the root to `id`.
    pub fn prefix(&self, id: NodeId) -> Vec<u8> {
        let depth = self.nodes[self.ensure_node_index(id)].depth;
        let mut bytes = Vec::with_capacity(depth as usize);
        let mut current = id;
        while current != NodeId::ROOT {
            let node = &self.nodes[current.index()];
            bytes.push(node.byte);
            current = node.parent;
        }
        bytes.reverse();
        bytes
    }

    /// Ids of every pattern occurring in `text`, sorted ascending, without
    /// duplicates.
    pub fn matches(&self, text: impl AsRef<[u8]>) -> Vec<PatternId> {
        self.matches_with(text, &mut NoopTracer)
    }

    /// `matches`, reporting each scan step to `tracer`.
    ///
    /// The tracer is generic, so `NoopTracer` calls are optimized away.
    pub fn matches_with<T: Tracer>(
        &self,
        text: impl AsRef<[u8]>,
        tracer: &mut T,
    ) -> Vec<PatternId> {
        let mut found = BTreeSet::new();
        self.scan(text.as_ref(), tracer, |pattern| {
            found.insert(pattern);
            ControlFlow::Continue(())
        });
        found.into_iter().collect()
    }

    /// Whether any pattern occurs in `text`. Stops at the first hit.
    pub fn is_match(&self, text: impl AsRef<[u8]>) -> bool {
        let mut hit = false;
        self.scan(text.as_ref(), &mut NoopTracer, |_| {
            hit = true;
            ControlFlow::Break(())
        });
        hit
    }

    fn scan<T, F>(&self, text: &[u8], tracer: &mut T, mut emit: F)
    where
        T: Tracer,
        F: FnMut(PatternId) -> ControlFlow<()>,
    {
        let mut node = NodeId::ROOT;
        if self.report(node, tracer, &mut emit).is_break() {
            return;
        }

        for (pos, &byte) in text.iter().enumerate() {
            node = self.advance(node, pos, byte, tracer);
            if self.report(node, tracer, &mut emit).is_break() {
                return;
            }
        }
    }

    /// Consume one byte: follow the goto edge, falling back along fail links
    /// until one exists. At the root with no edge the byte is skipped.
    #[inline]
    fn advance<T: Tracer>(
        &self,
        mut node: NodeId,
        pos: usize,
        byte: u8,
        tracer: &mut T,
    ) -> NodeId {
        loop {
            if let Some(next) = self.child(node, byte) {
                tracer.trace_step(pos, byte, node, next);
                return next;
            }
            if node == NodeId::ROOT {
                tracer.trace_skip(pos, byte);
                return NodeId::ROOT;
            }
            let fail = self.nodes[node.index()].fail;
            tracer.trace_fail(pos, byte, node, fail);
            node = fail;
        }
    }

    /// Emit the node's own outputs, then every output along its output-link
    /// chain.
    fn report<T, F>(&self, node: NodeId, tracer: &mut T, emit: &mut F) -> ControlFlow<()>
    where
        T: Tracer,
        F: FnMut(PatternId) -> ControlFlow<()>,
    {
        for &pattern in self.outputs_of(node) {
            tracer.trace_output(node, pattern, false);
            emit(pattern)?;
        }

        let mut link = self.nodes[node.index()].output_link;
        while let Some(target) = link {
            for &pattern in self.outputs_of(target) {
                tracer.trace_output(target, pattern, true);
                emit(pattern)?;
            }
            link = self.nodes[target.index()].output_link;
        }
        ControlFlow::Continue(())
    }

    #[inline]
    fn child(&self, node: NodeId, byte: u8) -> Option<NodeId> {
        let edges = self.edges_of(node);
        edges
            .binary_search_by_key(&byte, |&(b, _)| b)
            .ok()
            .map(|i| edges[i].1)
    }

    #[inline]
    fn edges_of(&self, node: NodeId) -> &[(u8, NodeId)] {
        &self.edges[self.nodes[node.index()].edges.range()]
    }

    #[inline]
    fn outputs_of(&self, node: NodeId) -> &[PatternId] {
        &self.outputs[self.nodes[node.index()].outputs.range()]
    }
}

/// Read-only view of one automaton node.
#[derive(Clone, Copy)]
pub struct NodeView<'a> {
    automaton: &'a Automaton,
    id: NodeId,
    node: &'a Node,
}

impl<'a> NodeView<'a> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn is_root(&self) -> bool {
        self.id == NodeId::ROOT
    }

    /// Length of the prefix this node spells.
    pub fn depth(&self) -> u32 {
        self.node.depth
    }

    /// Parent node; `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        (!self.is_root()).then_some(self.node.parent)
    }

    /// Byte on the edge from the parent; `None` for the root.
    pub fn byte(&self) -> Option<u8> {
        (!self.is_root()).then_some(self.node.byte)
    }

    /// Longest proper suffix that is also a trie prefix. The root fails to
    /// itself.
    pub fn fail(&self) -> NodeId {
        self.node.fail
    }

    /// Nearest node on the fail chain that ends a pattern.
    pub fn output_link(&self) -> Option<NodeId> {
        self.node.output_link
    }

    /// Patterns ending exactly at this node.
    pub fn outputs(&self) -> &'a [PatternId] {
        &self.automaton.outputs[self.node.outputs.range()]
    }

    /// Outgoing edges, sorted by byte.
    pub fn children(&self) -> &'a [(u8, NodeId)] {
        &self.automaton.edges[self.node.edges.range()]
    }

    pub fn prefix(&self) -> Vec<u8> {
        self.automaton.prefix(self.id)
    }
}

impl std::fmt::Debug for NodeView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeView")
            .field("id", &self.id)
            .field("depth", &self.node.depth)
            .field("fail", &self.node.fail)
            .field("output_link", &self.node.output_link)
            .field("outputs", &self.outputs())
            .finish()
    }
}
