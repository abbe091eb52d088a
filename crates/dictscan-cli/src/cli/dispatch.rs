//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors that pull relevant fields (ignoring hidden ones)
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use dictscan_automaton::Verbosity;

use super::ColorChoice;
use crate::commands::dump::DumpArgs;
use crate::commands::input::{PatternInput, TextInput};
use crate::commands::matches::MatchArgs;
use crate::commands::trace::TraceArgs;

pub struct MatchParams {
    pub patterns_file: Option<PathBuf>,
    pub patterns: Vec<String>,
    pub keep_duplicates: bool,
    pub text_path: Option<PathBuf>,
    pub text: Option<String>,
    pub json: bool,
    pub compact: bool,
    pub color: ColorChoice,
    // Note: verbose is parsed but not extracted (unified flags)
}

impl MatchParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            patterns_file: m.get_one::<PathBuf>("patterns_file").cloned(),
            patterns: parse_patterns(m),
            keep_duplicates: m.get_flag("keep_duplicates"),
            text_path: m.get_one::<PathBuf>("text_path").cloned(),
            text: m.get_one::<String>("text").cloned(),
            json: m.get_flag("json"),
            compact: m.get_flag("compact"),
            color: parse_color(m),
        }
    }
}

impl From<MatchParams> for MatchArgs {
    fn from(p: MatchParams) -> Self {
        // Pretty JSON when stdout is a TTY, unless --compact
        let pretty = !p.compact && std::io::IsTerminal::is_terminal(&std::io::stdout());

        Self {
            patterns: PatternInput {
                file: p.patterns_file,
                inline: p.patterns,
                keep_duplicates: p.keep_duplicates,
            },
            text: TextInput {
                path: p.text_path,
                inline: p.text,
            },
            json: p.json,
            pretty,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TraceParams {
    pub patterns_file: Option<PathBuf>,
    pub patterns: Vec<String>,
    pub keep_duplicates: bool,
    pub text_path: Option<PathBuf>,
    pub text: Option<String>,
    pub verbose: u8,
    pub color: ColorChoice,
    // Note: json and compact are parsed but not extracted (unified flags)
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            patterns_file: m.get_one::<PathBuf>("patterns_file").cloned(),
            patterns: parse_patterns(m),
            keep_duplicates: m.get_flag("keep_duplicates"),
            text_path: m.get_one::<PathBuf>("text_path").cloned(),
            text: m.get_one::<String>("text").cloned(),
            verbose: m.get_count("verbose"),
            color: parse_color(m),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        let verbosity = match p.verbose {
            0 => Verbosity::Default,
            1 => Verbosity::Verbose,
            _ => Verbosity::VeryVerbose,
        };

        Self {
            patterns: PatternInput {
                file: p.patterns_file,
                inline: p.patterns,
                keep_duplicates: p.keep_duplicates,
            },
            text: TextInput {
                path: p.text_path,
                inline: p.text,
            },
            verbosity,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub patterns_file: Option<PathBuf>,
    pub patterns: Vec<String>,
    pub keep_duplicates: bool,
    pub color: ColorChoice,
    // Note: text_path, text, json, compact, verbose are parsed but not
    // extracted (unified flags)
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            patterns_file: m.get_one::<PathBuf>("patterns_file").cloned(),
            patterns: parse_patterns(m),
            keep_duplicates: m.get_flag("keep_duplicates"),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            patterns: PatternInput {
                file: p.patterns_file,
                inline: p.patterns,
                keep_duplicates: p.keep_duplicates,
            },
            color: p.color.should_colorize(),
        }
    }
}

fn parse_patterns(m: &ArgMatches) -> Vec<String> {
    m.get_many::<String>("pattern")
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
