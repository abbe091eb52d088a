//! Report which patterns occur in a text.

use dictscan_core::utils::escape_bytes;
use dictscan_core::{Colors, PatternId};
use serde::Serialize;

use super::input::{self, PatternInput, TextInput};

pub struct MatchArgs {
    pub patterns: PatternInput,
    pub text: TextInput,
    pub json: bool,
    pub pretty: bool,
    pub color: bool,
}

/// Process exit status of the scanning commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Matched = 0,
    NoMatch = 1,
    Error = 2,
}

impl ExitStatus {
    pub fn for_matches(found: &[PatternId]) -> Self {
        if found.is_empty() {
            ExitStatus::NoMatch
        } else {
            ExitStatus::Matched
        }
    }

    pub fn code(self) -> i32 {
        self as i32
    }

    /// Exit the process unless the status is `Matched`.
    pub fn exit_unless_matched(self) {
        if self != ExitStatus::Matched {
            std::process::exit(self.code());
        }
    }
}

#[derive(Serialize)]
struct MatchEntry {
    index: PatternId,
    pattern: String,
}

pub fn run(args: MatchArgs) {
    let (dictionary, text) = input::or_exit(input::load_scan(&args.patterns, &args.text));
    let found = dictionary.automaton.matches(&text);

    if args.json {
        match format_json(&dictionary.patterns, &found, args.pretty) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: JSON serialization failed: {}", e);
                std::process::exit(ExitStatus::Error.code());
            }
        }
    } else {
        print!("{}", format_lines(&dictionary.patterns, &found, Colors::new(args.color)));
    }

    ExitStatus::for_matches(&found).exit_unless_matched();
}

/// One `<index>\t<escaped pattern>` line per match.
pub fn format_lines(patterns: &[Vec<u8>], found: &[PatternId], colors: Colors) -> String {
    let c = &colors;
    let mut out = String::new();
    for &id in found {
        out.push_str(&format!(
            "{}{}{}\t{}{}{}\n",
            c.node,
            id.as_u32(),
            c.reset,
            c.pattern,
            escape_bytes(&patterns[id.as_usize()]),
            c.reset
        ));
    }
    out
}

/// JSON array of `{"index", "pattern"}` objects; patterns are decoded
/// lossily as UTF-8.
pub fn format_json(
    patterns: &[Vec<u8>],
    found: &[PatternId],
    pretty: bool,
) -> serde_json::Result<String> {
    let entries: Vec<_> = found
        .iter()
        .map(|&id| MatchEntry {
            index: id,
            pattern: String::from_utf8_lossy(&patterns[id.as_usize()]).into_owned(),
        })
        .collect();

    if pretty {
        serde_json::to_string_pretty(&entries)
    } else {
        serde_json::to_string(&entries)
    }
}
