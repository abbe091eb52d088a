use dictscan_automaton::dump;
use dictscan_core::Colors;

use super::input::{self, Dictionary, PatternInput};

pub struct DumpArgs {
    pub patterns: PatternInput,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let dictionary = input::or_exit(Dictionary::load(&args.patterns));
    let colors = Colors::new(args.color);
    print!("{}", dump(&dictionary.automaton, colors));
}
