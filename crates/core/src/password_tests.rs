// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn generate_password_has_requested_length() {
    let chars: Vec<char> = "abc".chars().collect();
    assert_eq!(generate_password(&chars, 20).chars().count(), 20);
}

#[test]
fn generate_password_draws_from_supplied_chars() {
    let chars: Vec<char> = "ab".chars().collect();
    let password = generate_password(&chars, 100);
    assert!(password.chars().all(|c| c == 'a' || c == 'b'));
}

#[test]
fn generate_password_empty_charset() {
    assert_eq!(generate_password(&[], 10), "");
}

#[test]
fn profile_expands_class_tags() {
    let profile = PasswordProfile::new("{num}-");
    let mut expected: Vec<char> = "-0123456789".chars().collect();
    expected.sort_unstable();
    assert_eq!(profile.chars(), expected.as_slice());
}

#[test]
fn profile_deduplicates_chars() {
    let profile = PasswordProfile::new("aab{num}9");
    let expected: Vec<char> = "0123456789ab".chars().collect();
    assert_eq!(profile.chars(), expected.as_slice());
}

#[test]
fn profile_keeps_definition() {
    let profile = PasswordProfile::new("{alpha}-_");
    assert_eq!(profile.definition(), "{alpha}-_");
}

#[test]
fn profile_generates_from_expanded_set() {
    let profile = PasswordProfile::new("{num}");
    let password = profile.generate(50);
    assert_eq!(password.chars().count(), 50);
    assert!(password.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn default_chars_cover_letters_digits_punctuation() {
    let chars = default_chars();
    assert!(chars.contains(&'a'));
    assert!(chars.contains(&'Z'));
    assert!(chars.contains(&'0'));
    assert!(chars.contains(&'!'));
}
