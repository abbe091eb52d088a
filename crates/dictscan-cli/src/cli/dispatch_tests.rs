//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Unified flags: match/trace/dump accept each other's flags without error
//! 2. Help visibility: hidden flags don't appear in --help
//! 3. Params extraction: correct fields are extracted from ArgMatches

use std::path::PathBuf;

use dictscan_automaton::Verbosity;

use super::*;
use crate::cli::commands::{dump_command, match_command, trace_command};
use crate::commands::matches::MatchArgs;
use crate::commands::trace::TraceArgs;

#[test]
fn match_extracts_inputs() {
    let cmd = match_command();
    let m = cmd
        .try_get_matches_from([
            "match",
            "-f",
            "words.txt",
            "-p",
            "he",
            "--pattern",
            "she",
            "corpus.txt",
            "--keep-duplicates",
        ])
        .unwrap();
    let params = MatchParams::from_matches(&m);

    assert_eq!(params.patterns_file, Some(PathBuf::from("words.txt")));
    assert_eq!(params.patterns, vec!["he".to_string(), "she".to_string()]);
    assert!(params.keep_duplicates);
    assert_eq!(params.text_path, Some(PathBuf::from("corpus.txt")));
    assert_eq!(params.text, None);
    assert!(!params.json);
}

#[test]
fn match_inline_text() {
    let cmd = match_command();
    let m = cmd
        .try_get_matches_from(["match", "-p", "he", "-t", "ushers", "--json", "--compact"])
        .unwrap();
    let params = MatchParams::from_matches(&m);

    assert_eq!(params.text, Some("ushers".to_string()));
    assert_eq!(params.text_path, None);
    assert!(params.json);
    assert!(params.compact);

    let args: MatchArgs = params.into();
    assert!(!args.pretty, "--compact disables pretty JSON");
    assert_eq!(args.text.inline.as_deref(), Some("ushers"));
}

#[test]
fn match_rejects_text_path_and_inline_text() {
    let cmd = match_command();
    let result = cmd.try_get_matches_from(["match", "-p", "he", "-t", "ushers", "corpus.txt"]);

    assert!(result.is_err());
}

#[test]
fn match_accepts_trace_flags() {
    let cmd = match_command();
    let result = cmd.try_get_matches_from(["match", "-p", "he", "-t", "ushers", "-vv"]);
    assert!(
        result.is_ok(),
        "match should accept trace flags: {:?}",
        result.err()
    );
}

#[test]
fn trace_accepts_json_flags() {
    let cmd = trace_command();
    let result =
        cmd.try_get_matches_from(["trace", "-p", "he", "-t", "ushers", "--json", "--compact"]);
    assert!(
        result.is_ok(),
        "trace should accept json flags: {:?}",
        result.err()
    );
}

#[test]
fn trace_verbosity_levels() {
    for (flags, expected) in [
        (&[][..], Verbosity::Default),
        (&["-v"][..], Verbosity::Verbose),
        (&["-vv"][..], Verbosity::VeryVerbose),
        (&["-vvv"][..], Verbosity::VeryVerbose),
    ] {
        let mut argv = vec!["trace", "-p", "he", "-t", "ushers"];
        argv.extend_from_slice(flags);
        let m = trace_command().try_get_matches_from(argv).unwrap();
        let args: TraceArgs = TraceParams::from_matches(&m).into();

        assert_eq!(args.verbosity, expected, "flags {flags:?}");
    }
}

#[test]
fn dump_accepts_scan_flags() {
    let cmd = dump_command();
    let result = cmd.try_get_matches_from([
        "dump",
        "-p",
        "he",
        "corpus.txt",
        "--json",
        "--compact",
        "-vv",
    ]);
    assert!(
        result.is_ok(),
        "dump should accept scan flags: {:?}",
        result.err()
    );

    let m = result.unwrap();
    let params = DumpParams::from_matches(&m);
    assert_eq!(params.patterns, vec!["he".to_string()]);
    // text_path, json, compact, verbose are parsed but not in DumpParams
}

#[test]
fn dump_without_patterns_parses() {
    // Missing patterns is reported by the command, not by clap.
    let m = dump_command().try_get_matches_from(["dump"]).unwrap();
    let params = DumpParams::from_matches(&m);

    assert!(params.patterns.is_empty());
    assert_eq!(params.patterns_file, None);
}

#[test]
fn dump_help_hides_scan_flags() {
    let mut cmd = dump_command();
    let help = cmd.render_help().to_string();

    assert!(!help.contains("--json"), "dump help should not show --json");
    assert!(
        !help.contains("--compact"),
        "dump help should not show --compact"
    );
    assert!(!help.contains("--text"), "dump help should not show --text");
    assert!(
        !help.contains("Verbosity level"),
        "dump help should not show -v description"
    );
}

#[test]
fn match_help_hides_trace_flags() {
    let mut cmd = match_command();
    let help = cmd.render_help().to_string();

    assert!(help.contains("--json"));
    assert!(help.contains("--keep-duplicates"));
    assert!(
        !help.contains("Verbosity level"),
        "match help should not show -v description"
    );
}

#[test]
fn trace_help_hides_json_flags() {
    let mut cmd = trace_command();
    let help = cmd.render_help().to_string();

    assert!(help.contains("Verbosity level"));
    assert!(!help.contains("--json"), "trace help should not show --json");
    assert!(
        !help.contains("--compact"),
        "trace help should not show --compact"
    );
}

#[test]
fn color_choice_parsing() {
    for (value, expected) in [
        ("auto", ColorChoice::Auto),
        ("always", ColorChoice::Always),
        ("never", ColorChoice::Never),
    ] {
        let m = dump_command()
            .try_get_matches_from(["dump", "-p", "a", "--color", value])
            .unwrap();
        assert_eq!(DumpParams::from_matches(&m).color, expected);
    }
    assert!(ColorChoice::Always.should_colorize());
    assert!(!ColorChoice::Never.should_colorize());
}

#[test]
fn build_cli_requires_subcommand() {
    let result = build_cli().try_get_matches_from(["dictscan"]);

    assert!(result.is_err());
}

#[test]
fn build_cli_dispatches_subcommands() {
    let m = build_cli()
        .try_get_matches_from(["dictscan", "match", "-p", "he", "-t", "she"])
        .unwrap();

    assert_eq!(m.subcommand_name(), Some("match"));
}
