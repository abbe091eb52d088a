//! Trace the match loop for debugging.

use dictscan_automaton::{PrintTracer, Verbosity};
use dictscan_core::Colors;

use super::input::{self, PatternInput, TextInput};
use super::matches::{ExitStatus, format_lines};

pub struct TraceArgs {
    pub patterns: PatternInput,
    pub text: TextInput,
    pub verbosity: Verbosity,
    pub color: bool,
}

pub fn run(args: TraceArgs) {
    let (dictionary, text) = input::or_exit(input::load_scan(&args.patterns, &args.text));
    let automaton = &dictionary.automaton;

    let mut tracer = PrintTracer::builder(automaton)
        .verbosity(args.verbosity)
        .colored(args.color)
        .build();
    let found = automaton.matches_with(&text, &mut tracer);
    tracer.print();

    let colors = Colors::new(args.color);
    println!("{}---{}", colors.meta, colors.reset);
    print!("{}", format_lines(&dictionary.patterns, &found, colors));

    ExitStatus::for_matches(&found).exit_unless_matched();
}
