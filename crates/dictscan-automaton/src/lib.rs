#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Aho-Corasick automaton for multi-pattern substring search.
//!
//! Construction runs three ordered passes over a byte trie:
//! 1. insert every pattern (`trie`)
//! 2. compute fail links breadth-first (`links`)
//! 3. compute output links over trie + fail links (`links`)
//!
//! The result is an immutable `Automaton` whose `matches` reports, in one
//! linear scan, the ids of every pattern occurring in a text, including
//! overlapping and nested occurrences.

mod automaton;
mod builder;
mod dump;
mod invariants;
mod links;
mod trace;
mod trie;

#[cfg(test)]
mod links_tests;

pub use automaton::{Automaton, NodeView};
pub use builder::{AutomatonBuilder, DuplicatePolicy};
pub use dictscan_core::{Colors, PatternId};
pub use dump::dump;
pub use trace::{NoopTracer, PrintTracer, PrintTracerBuilder, Tracer, Verbosity};
pub use trie::NodeId;
