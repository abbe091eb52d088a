//! Fail-link and output-link computation.
//!
//! Both passes walk the completed trie breadth-first. Every link points to
//! a strictly shallower node, so by the time a node is visited the links
//! it depends on are already final.

use std::collections::VecDeque;

use crate::trie::{NodeId, Trie};

/// Cross-links for every node, indexed by `NodeId`.
#[derive(Clone, Debug)]
pub(crate) struct Links {
    pub(crate) fail: Vec<NodeId>,
    pub(crate) output_link: Vec<Option<NodeId>>,
}

/// Compute fail links, then output links, over a finished trie.
pub(crate) fn compute(trie: &Trie) -> Links {
    let order = breadth_first(trie);
    let fail = fail_links(trie, &order);
    let output_link = output_links(trie, &fail, &order);
    Links { fail, output_link }
}

/// Node ids in non-decreasing depth order, root first.
fn breadth_first(trie: &Trie) -> Vec<NodeId> {
    let mut order = Vec::with_capacity(trie.len());
    let mut queue = VecDeque::from([NodeId::ROOT]);

    while let Some(node) = queue.pop_front() {
        order.push(node);
        queue.extend(trie.node(node).children.iter().map(|&(_, child)| child));
    }
    order
}

/// `fail(n)`: the node spelling the longest proper suffix of `n`'s prefix
/// that is also a prefix in the trie. Root fails to itself.
fn fail_links(trie: &Trie, order: &[NodeId]) -> Vec<NodeId> {
    let mut fail = vec![NodeId::ROOT; trie.len()];

    for &node in order {
        let parent = trie.node(node).parent;
        // Depth-1 nodes (and the root) keep the root as their fail link.
        if node == NodeId::ROOT || parent == NodeId::ROOT {
            continue;
        }
        let byte = trie.node(node).byte;

        let mut candidate = fail[parent.index()];
        fail[node.index()] = loop {
            if let Some(child) = trie.child(candidate, byte) {
                break child;
            }
            if candidate == NodeId::ROOT {
                break NodeId::ROOT;
            }
            candidate = fail[candidate.index()];
        };
    }
    fail
}

/// `output_link(n)`: nearest node on the fail chain (excluding `n`) that
/// ends a pattern.
fn output_links(trie: &Trie, fail: &[NodeId], order: &[NodeId]) -> Vec<Option<NodeId>> {
    let mut links = vec![None; trie.len()];

    for &node in order {
        if node == NodeId::ROOT {
            continue;
        }
        let target = fail[node.index()];
        links[node.index()] = if trie.node(target).outputs.is_empty() {
            links[target.index()]
        } else {
            Some(target)
        };
    }
    links
}
