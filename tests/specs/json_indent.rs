use assert_cmd::Command;
use predicates::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn indents_stdin_to_stdout() {
    let output = Command::cargo_bin("satchel")
        .unwrap()
        .arg("json-indent")
        .write_stdin("{\"b\": 1, \"a\": [1, 2]}")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(output).unwrap();
    assert_eq!(text, "{\n  \"a\": [\n    1,\n    2\n  ],\n  \"b\": 1\n}\n");
}

#[test]
fn honors_indent_width() {
    Command::cargo_bin("satchel")
        .unwrap()
        .args(["json-indent", "-n", "4"])
        .write_stdin("{\"a\": 1}")
        .assert()
        .success()
        .stdout(predicate::str::contains("    \"a\": 1"));
}

#[test]
fn ascii_flag_escapes_output() {
    Command::cargo_bin("satchel")
        .unwrap()
        .args(["json-indent", "--ascii"])
        .write_stdin("{\"key\": \"fo\u{00f2}\"}")
        .assert()
        .success()
        .stdout(predicate::str::contains("fo\\u00f2"));
}

#[test]
fn reads_and_writes_files() {
    let temp = tempfile::tempdir().unwrap();
    let input = temp.path().join("input.json");
    let output = temp.path().join("output.json");
    std::fs::write(&input, "{\"b\": 1, \"a\": 2}").unwrap();

    Command::cargo_bin("satchel")
        .unwrap()
        .arg("json-indent")
        .arg(&input)
        .arg(&output)
        .assert()
        .success();

    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(written, "{\n  \"a\": 2,\n  \"b\": 1\n}\n");
}

#[test]
fn invalid_json_fails_with_message() {
    Command::cargo_bin("satchel")
        .unwrap()
        .arg("json-indent")
        .write_stdin("{not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("formatting failed"));
}

#[test]
fn missing_input_file_fails() {
    Command::cargo_bin("satchel")
        .unwrap()
        .args(["json-indent", "/definitely/not/here.json"])
        .assert()
        .failure();
}
