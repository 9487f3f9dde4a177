//! End-to-end tests of the test harness itself.
//!
//! These make sure that seeding, command building, and isolation behave as
//! the CLI suite assumes.

mod common;

use common::harness::{NoteCommand, TestEnv, TestNote};
use predicates::prelude::*;

#[test]
fn test_command_args_are_accumulated_in_order() {
    let cmd = NoteCommand::new().args(["list"]).format_json();
    assert_eq!(cmd.get_args(), &["list", "--format", "json"]);
}

#[test]
fn test_seeded_notes_are_visible_to_the_binary() {
    let env = TestEnv::new();
    env.seed(&[TestNote::new("Seeded").tag("harness")]);

    env.cmd()
        .list()
        .assert()
        .success()
        .stdout(predicate::str::contains("[1] Seeded (harness)"));
}

#[test]
fn test_explicit_ids_are_kept() {
    let env = TestEnv::new();
    env.seed(&[TestNote::new("Late").id(40)]);

    env.cmd()
        .add("Next", "body")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Note ID 41 "));
}

#[test]
fn test_environments_are_isolated() {
    let first = TestEnv::new();
    let second = TestEnv::new();
    first.seed(&[TestNote::new("Only Here")]);

    second
        .cmd()
        .list()
        .assert()
        .success()
        .stdout("No notes found.\n");
}

#[test]
fn test_json_output_helper() {
    let env = TestEnv::new();
    env.seed(&[TestNote::new("A").tag("x"), TestNote::new("B").tag("x")]);

    let output: serde_json::Value = env.cmd().tags().format_json().output_json();
    assert_eq!(output["data"][0]["name"], "x");
    assert_eq!(output["data"][0]["count"], 2);
}
