// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn touch(path: &Path) {
    std::fs::write(path, "").unwrap();
}

#[test]
fn matches_by_pattern() {
    let temp = tempfile::tempdir().unwrap();
    touch(&temp.path().join("one.txt"));
    touch(&temp.path().join("two.log"));

    let matched = match_files(&[temp.path()], &["*.txt"], false).unwrap();
    assert_eq!(matched, [temp.path().join("one.txt")]);
}

#[test]
fn matches_recursively() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::create_dir(temp.path().join("sub")).unwrap();
    touch(&temp.path().join("top.txt"));
    touch(&temp.path().join("sub/inner.txt"));

    let matched = match_files(&[temp.path()], &["*.txt"], false).unwrap();
    assert_eq!(
        matched,
        [temp.path().join("sub/inner.txt"), temp.path().join("top.txt")]
    );
}

#[test]
fn matches_any_of_multiple_patterns() {
    let temp = tempfile::tempdir().unwrap();
    touch(&temp.path().join("one.txt"));
    touch(&temp.path().join("two.log"));
    touch(&temp.path().join("three.bin"));

    let matched = match_files(&[temp.path()], &["*.txt", "*.log"], false).unwrap();
    assert_eq!(matched.len(), 2);
}

#[test]
fn case_sensitivity_is_optional() {
    let temp = tempfile::tempdir().unwrap();
    touch(&temp.path().join("README.TXT"));

    assert!(match_files(&[temp.path()], &["*.txt"], false)
        .unwrap()
        .is_empty());
    assert_eq!(
        match_files(&[temp.path()], &["*.txt"], true).unwrap(),
        [temp.path().join("README.TXT")]
    );
}

#[test]
fn searches_multiple_roots() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    touch(&first.path().join("a.txt"));
    touch(&second.path().join("b.txt"));

    let matched = match_files(&[first.path(), second.path()], &["*.txt"], false).unwrap();
    assert_eq!(matched.len(), 2);
}

#[test]
fn invalid_pattern_errors() {
    assert!(matches!(
        match_files(&[Path::new(".")], &["a{"], false),
        Err(MatchError::Pattern(_))
    ));
}

#[test]
fn missing_directory_is_skipped() {
    let matched = match_files(&[Path::new("/definitely/not/here")], &["*"], false).unwrap();
    assert!(matched.is_empty());
}
