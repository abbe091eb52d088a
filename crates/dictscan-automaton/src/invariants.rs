//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::automaton::Automaton;
use crate::trie::NodeId;

impl Automaton {
    pub(crate) fn ensure_node_index(&self, id: NodeId) -> usize {
        let index = id.index();
        if index >= self.node_count() {
            panic!(
                "Automaton: node {} not found (automaton has {} nodes)",
                id.as_u32(),
                self.node_count()
            );
        }
        index
    }

    /// Structural checks run after every debug-build construction.
    #[cfg(debug_assertions)]
    pub(crate) fn debug_verify(&self) {
        for view in self.nodes() {
            let id = view.id().as_u32();

            if !view.children().windows(2).all(|w| w[0].0 < w[1].0) {
                panic!("Automaton: children of N{id} are not strictly sorted by byte");
            }

            if view.is_root() {
                if view.fail() != NodeId::ROOT {
                    panic!("Automaton: root must fail to itself");
                }
                if view.output_link().is_some() {
                    panic!("Automaton: root must not have an output link");
                }
                continue;
            }

            let fail = self.node(view.fail());
            if fail.depth() >= view.depth() {
                panic!(
                    "Automaton: fail link of N{id} (depth {}) points to N{} at depth {}",
                    view.depth(),
                    fail.id().as_u32(),
                    fail.depth()
                );
            }

            if let Some(link) = view.output_link() {
                if self.node(link).outputs().is_empty() {
                    panic!(
                        "Automaton: output link of N{id} points to N{}, which ends no pattern",
                        link.as_u32()
                    );
                }
            }
        }
    }
}
