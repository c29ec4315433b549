use assert_cmd::Command;
use predicates::prelude::*;

fn output_lines(args: &[&str]) -> Vec<String> {
    let output = Command::cargo_bin("satchel")
        .unwrap()
        .arg("password")
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn generates_one_password_by_default() {
    let lines = output_lines(&[]);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].chars().count(), 10);
}

#[test]
fn generates_requested_count_and_length() {
    let lines = output_lines(&["-n", "3", "--length", "24"]);
    assert_eq!(lines.len(), 3);
    for line in lines {
        assert_eq!(line.chars().count(), 24);
    }
}

#[test]
fn inline_profile_definition() {
    let lines = output_lines(&["-p", "{num}"]);
    assert!(lines[0].chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn list_profiles() {
    Command::cargo_bin("satchel")
        .unwrap()
        .args(["password", "--list-profiles"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default:"))
        .stdout(predicate::str::contains("allchars:"))
        .stdout(predicate::str::contains("definition: {alnum}-_/"));
}

#[test]
fn list_definitions() {
    Command::cargo_bin("satchel")
        .unwrap()
        .args(["password", "--list-defs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("alnum:"))
        .stdout(predicate::str::contains("punct:"));
}
