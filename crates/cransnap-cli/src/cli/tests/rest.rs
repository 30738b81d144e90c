//! Tests for the list, show, and reset subcommands.

use super::parse;
use crate::cli::CliCommand;
use clap::Parser;

#[test]
fn cli_parse_list() {
    match parse(&["cransnap", "list"]) {
        CliCommand::List { base_url } => assert!(base_url.is_none()),
        _ => panic!("expected List"),
    }
}

#[test]
fn cli_parse_list_base_url() {
    match parse(&["cransnap", "list", "--base-url", "https://example.org"]) {
        CliCommand::List { base_url } => {
            assert_eq!(base_url.as_deref(), Some("https://example.org"));
        }
        _ => panic!("expected List with --base-url"),
    }
}

#[test]
fn cli_parse_show() {
    match parse(&["cransnap", "show"]) {
        CliCommand::Show => {}
        _ => panic!("expected Show"),
    }
}

#[test]
fn cli_parse_reset() {
    match parse(&["cransnap", "reset"]) {
        CliCommand::Reset => {}
        _ => panic!("expected Reset"),
    }
}

#[test]
fn cli_parse_unknown_subcommand_fails() {
    let cli = crate::cli::Cli::try_parse_from(["cransnap", "frobnicate"]);
    assert!(cli.is_err());
}
