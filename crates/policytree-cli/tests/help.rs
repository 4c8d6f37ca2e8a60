use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to get a Command for the policytree binary.
#[allow(deprecated)]
fn policytree_cmd() -> Command {
    Command::cargo_bin("policytree").unwrap()
}

#[test]
fn help_works() {
    policytree_cmd().arg("--help").assert().success();
}

#[test]
fn help_lists_subcommands() {
    policytree_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("select"))
        .stdout(predicate::str::contains("summary"))
        .stdout(predicate::str::contains("schema"));
}
