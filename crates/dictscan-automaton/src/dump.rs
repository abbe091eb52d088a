//! Human-readable automaton dump for debugging and documentation.
//!
//! One line per node, in id order:
//!
//! ```text
//! [nodes]
//! N0 ""
//! N4 "sh" fail N1
//! N5 "she" fail N2 link N2 out P1
//! ```
//!
//! The root line carries no `fail` (it fails to itself). `link` and `out`
//! appear only when the node has an output link or ends patterns.

use std::fmt::Write as _;

use dictscan_core::Colors;
use dictscan_core::utils::{escape_bytes, width_for_count};

use crate::automaton::{Automaton, NodeView};
use crate::trie::NodeId;

/// Generate a human-readable dump of the automaton.
pub fn dump(automaton: &Automaton, colors: Colors) -> String {
    let mut out = String::new();
    let w = width_for_count(automaton.node_count());
    let c = &colors;

    writeln!(out, "{}[nodes]{}", c.meta, c.reset).unwrap();
    for node in automaton.nodes() {
        dump_node(&mut out, &node, w, c);
    }
    out
}

fn dump_node(out: &mut String, node: &NodeView<'_>, w: usize, c: &Colors) {
    write!(
        out,
        "{} {}{}{}",
        node_ref(node.id(), w, c),
        c.pattern,
        escape_bytes(&node.prefix()),
        c.reset
    )
    .unwrap();

    if !node.is_root() {
        write!(out, " {}fail{} {}", c.meta, c.reset, node_ref(node.fail(), w, c)).unwrap();
    }
    if let Some(link) = node.output_link() {
        write!(out, " {}link{} {}", c.meta, c.reset, node_ref(link, w, c)).unwrap();
    }

    let outputs = node.outputs();
    if !outputs.is_empty() {
        let ids: Vec<_> = outputs.iter().map(|p| p.to_string()).collect();
        write!(out, " {}out{} {}{}{}", c.meta, c.reset, c.pattern, ids.join(" "), c.reset).unwrap();
    }
    out.push('\n');
}

fn node_ref(id: NodeId, w: usize, c: &Colors) -> String {
    format!("{}N{:0w$}{}", c.node, id.as_u32(), c.reset)
}
