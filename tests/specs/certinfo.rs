use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn get_cert_requires_hostname() {
    Command::cargo_bin("satchel")
        .unwrap()
        .args(["certinfo", "get-cert"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("HOSTNAME"));
}

#[test]
fn get_cert_rejects_invalid_uri() {
    Command::cargo_bin("satchel")
        .unwrap()
        .args(["certinfo", "get-cert", "example.com:not-a-port"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid host URI"));
}

#[test]
fn certinfo_requires_an_action() {
    Command::cargo_bin("satchel")
        .unwrap()
        .arg("certinfo")
        .assert()
        .failure();
}
