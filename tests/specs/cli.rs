use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_subcommands() {
    Command::cargo_bin("satchel")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("certinfo"))
        .stdout(predicate::str::contains("json-indent"))
        .stdout(predicate::str::contains("password"));
}

#[test]
fn version_flag() {
    Command::cargo_bin("satchel")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("satchel"));
}

#[test]
fn unknown_subcommand_fails() {
    Command::cargo_bin("satchel")
        .unwrap()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("frobnicate"));
}
