//! Tracing infrastructure for debugging the match loop.
//!
//! # Design: Zero-Cost Abstraction
//!
//! The tracer is threaded through `Automaton::matches_with` as a generic
//! parameter. With `NoopTracer` every method is an `#[inline(always)]`
//! empty function, so the compiler removes the calls and their arguments
//! and `matches` pays nothing for the instrumentation.
//!
//! `PrintTracer` collects one line per event for human consumption. It
//! owns all display state (verbosity, colors, prefix lookups); the match
//! loop only hands it raw ids and bytes.

use dictscan_core::utils::{escape_byte, escape_bytes};
use dictscan_core::{Colors, PatternId};

use crate::automaton::Automaton;
use crate::trie::NodeId;

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Default: goto steps, root skips, reported patterns.
    #[default]
    Default,
    /// Verbose (-v): also every fail-link hop.
    Verbose,
    /// Very verbose (-vv): node references also show the prefix they spell.
    VeryVerbose,
}

/// Tracer trait for match-loop instrumentation.
///
/// Each method is called at a specific point of the scan:
/// - `trace_step` - after following a goto edge for the byte at `pos`
/// - `trace_fail` - when no edge exists and the cursor falls back
/// - `trace_skip` - when the root has no edge either and the byte is dropped
/// - `trace_output` - for each pattern reported at the current node, either
///   directly or through an output link
pub trait Tracer {
    fn trace_step(&mut self, pos: usize, byte: u8, from: NodeId, to: NodeId);

    fn trace_fail(&mut self, pos: usize, byte: u8, from: NodeId, to: NodeId);

    fn trace_skip(&mut self, pos: usize, byte: u8);

    /// `via_link` is true when `node` was reached through the output-link
    /// chain rather than being the cursor itself.
    fn trace_output(&mut self, node: NodeId, pattern: PatternId, via_link: bool);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_step(&mut self, _pos: usize, _byte: u8, _from: NodeId, _to: NodeId) {}

    #[inline(always)]
    fn trace_fail(&mut self, _pos: usize, _byte: u8, _from: NodeId, _to: NodeId) {}

    #[inline(always)]
    fn trace_skip(&mut self, _pos: usize, _byte: u8) {}

    #[inline(always)]
    fn trace_output(&mut self, _node: NodeId, _pattern: PatternId, _via_link: bool) {}
}

/// Tracer that collects a readable scan log.
///
/// ```text
/// 0 'u' skip
/// 1 's' N0 -> N3
/// 3 'e' N4 -> N5
///   out P1
///   out P0 via N2
/// ```
pub struct PrintTracer<'a> {
    automaton: &'a Automaton,
    verbosity: Verbosity,
    colors: Colors,
    lines: Vec<String>,
}

/// Builder for `PrintTracer`.
pub struct PrintTracerBuilder<'a> {
    automaton: &'a Automaton,
    verbosity: Verbosity,
    colored: bool,
}

impl<'a> PrintTracerBuilder<'a> {
    pub fn verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    pub fn build(self) -> PrintTracer<'a> {
        PrintTracer {
            automaton: self.automaton,
            verbosity: self.verbosity,
            colors: Colors::new(self.colored),
            lines: Vec::new(),
        }
    }
}

impl<'a> PrintTracer<'a> {
    /// Start building a tracer for scans over `automaton`.
    pub fn builder(automaton: &'a Automaton) -> PrintTracerBuilder<'a> {
        PrintTracerBuilder {
            automaton,
            verbosity: Verbosity::Default,
            colored: false,
        }
    }

    /// Collected lines, oldest first.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// All lines joined, each terminated by a newline.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Print the collected trace to stdout.
    pub fn print(&self) {
        print!("{}", self.render());
    }

    fn node_ref(&self, id: NodeId) -> String {
        let c = &self.colors;
        let mut s = format!("{}N{}{}", c.node, id.as_u32(), c.reset);
        if self.verbosity == Verbosity::VeryVerbose {
            let prefix = escape_bytes(&self.automaton.prefix(id));
            s.push_str(&format!(" {}{}{}", c.pattern, prefix, c.reset));
        }
        s
    }

    fn position(&self, pos: usize, byte: u8) -> String {
        let c = &self.colors;
        format!(
            "{}{}{} {}{}{}",
            c.meta,
            pos,
            c.reset,
            c.pattern,
            escape_byte(byte),
            c.reset
        )
    }
}

impl Tracer for PrintTracer<'_> {
    fn trace_step(&mut self, pos: usize, byte: u8, from: NodeId, to: NodeId) {
        let line = format!(
            "{} {} -> {}",
            self.position(pos, byte),
            self.node_ref(from),
            self.node_ref(to)
        );
        self.lines.push(line);
    }

    fn trace_fail(&mut self, pos: usize, byte: u8, from: NodeId, to: NodeId) {
        if self.verbosity == Verbosity::Default {
            return;
        }
        let c = self.colors;
        let line = format!(
            "{} {}fail{} {} -> {}",
            self.position(pos, byte),
            c.meta,
            c.reset,
            self.node_ref(from),
            self.node_ref(to)
        );
        self.lines.push(line);
    }

    fn trace_skip(&mut self, pos: usize, byte: u8) {
        let c = self.colors;
        let line = format!("{} {}skip{}", self.position(pos, byte), c.meta, c.reset);
        self.lines.push(line);
    }

    fn trace_output(&mut self, node: NodeId, pattern: PatternId, via_link: bool) {
        let c = self.colors;
        let mut line = format!("  {}out{} {}{}{}", c.meta, c.reset, c.pattern, pattern, c.reset);
        if via_link {
            line.push_str(&format!(" {}via{} {}", c.meta, c.reset, self.node_ref(node)));
        }
        self.lines.push(line);
    }
}
