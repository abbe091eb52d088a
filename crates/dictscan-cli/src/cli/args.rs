//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.
//! The same arg definition is reused across commands with different
//! visibility settings (via `.hide(true)`).

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Inline pattern (-p/--pattern), repeatable.
pub fn pattern_arg() -> Arg {
    Arg::new("pattern")
        .short('p')
        .long("pattern")
        .value_name("TEXT")
        .action(ArgAction::Append)
        .help("Pattern to search for (repeatable)")
}

/// Pattern file (-f/--patterns), one pattern per line.
pub fn patterns_file_arg() -> Arg {
    Arg::new("patterns_file")
        .short('f')
        .long("patterns")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Read patterns from FILE, one per line ('-' for stdin)")
}

/// Text file to scan (positional).
pub fn text_path_arg() -> Arg {
    Arg::new("text_path")
        .value_name("TEXT_FILE")
        .value_parser(value_parser!(PathBuf))
        .help("File to scan ('-' for stdin)")
}

/// Inline text (-t/--text).
pub fn text_arg() -> Arg {
    Arg::new("text")
        .short('t')
        .long("text")
        .value_name("TEXT")
        .conflicts_with("text_path")
        .help("Inline text to scan")
}

/// Report every duplicate pattern (--keep-duplicates).
pub fn keep_duplicates_arg() -> Arg {
    Arg::new("keep_duplicates")
        .long("keep-duplicates")
        .action(ArgAction::SetTrue)
        .help("Report every index of a repeated pattern, not only the last")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Output JSON (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output matches as a JSON array")
}

/// Output compact JSON (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Output compact JSON (default: pretty when stdout is a TTY)")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for verbose, -vv for very verbose)")
}
