//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.
//! match/trace/dump accept each other's flags, with irrelevant ones hidden
//! from `--help`, so switching the subcommand name never breaks a command
//! line.

use clap::Command;

use super::args::*;

/// Add the pattern inputs shared by every command.
fn with_pattern_args(cmd: Command) -> Command {
    cmd.arg(patterns_file_arg())
        .arg(pattern_arg())
        .arg(keep_duplicates_arg())
        .arg(color_arg())
}

/// Add hidden text input args (for commands that don't scan).
fn with_hidden_text_args(cmd: Command) -> Command {
    cmd.arg(text_path_arg().hide(true))
        .arg(text_arg().hide(true))
}

/// Add hidden JSON output args (for commands that don't produce JSON).
fn with_hidden_json_args(cmd: Command) -> Command {
    cmd.arg(json_arg().hide(true))
        .arg(compact_arg().hide(true))
}

/// Add hidden trace args (for commands that don't trace).
fn with_hidden_trace_args(cmd: Command) -> Command {
    cmd.arg(verbose_arg().hide(true))
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("dictscan")
        .about("Report which of a set of patterns occur in a text")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(match_command())
        .subcommand(trace_command())
        .subcommand(dump_command())
}

/// Report the patterns occurring in a text.
pub fn match_command() -> Command {
    let cmd = Command::new("match")
        .about("Report the patterns occurring in a text")
        .override_usage(
            "\
  dictscan match -p <TEXT>... <TEXT_FILE>
  dictscan match -f <FILE> <TEXT_FILE>
  dictscan match -f <FILE> -t <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  dictscan match -p he -p she -t ushers        # inline patterns and text
  dictscan match -f words.txt corpus.txt       # pattern file, text file
  cat corpus.txt | dictscan match -f words.txt -   # text from stdin
  dictscan match -f words.txt corpus.txt --json    # JSON output

EXIT STATUS:
  0 if any pattern matched, 1 if none did, 2 on error"#,
        );

    let cmd = with_pattern_args(cmd)
        .arg(text_path_arg())
        .arg(text_arg())
        .arg(json_arg())
        .arg(compact_arg());

    with_hidden_trace_args(cmd)
}

/// Trace the match loop for debugging.
pub fn trace_command() -> Command {
    let cmd = Command::new("trace")
        .about("Trace the match loop for debugging")
        .override_usage(
            "\
  dictscan trace -p <TEXT>... <TEXT_FILE>
  dictscan trace -f <FILE> -t <TEXT> [-v|-vv]",
        )
        .after_help(
            r#"EXAMPLES:
  dictscan trace -p he -p she -t ushers        # steps and outputs
  dictscan trace -p he -p she -t ushers -v     # also fail-link hops
  dictscan trace -f words.txt -t text -vv      # node prefixes too"#,
        );

    let cmd = with_pattern_args(cmd)
        .arg(text_path_arg())
        .arg(text_arg())
        .arg(verbose_arg());

    with_hidden_json_args(cmd)
}

/// Show the built automaton.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Show the built automaton")
        .override_usage(
            "\
  dictscan dump -p <TEXT>...
  dictscan dump -f <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  dictscan dump -p he -p she -p his -p hers    # inline patterns
  dictscan dump -f words.txt --color never     # pattern file"#,
        );

    with_hidden_trace_args(with_hidden_json_args(with_hidden_text_args(
        with_pattern_args(cmd),
    )))
}
