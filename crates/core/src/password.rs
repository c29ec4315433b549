// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Random password generation
//!
//! A [`PasswordProfile`] defines the set of characters to generate
//! passwords from. It is created from a string of characters and character
//! class tags enclosed in curly braces (`{alnum}`, `{num}`, `{alpha}`,
//! `{space}`, `{punct}`), which are expanded to the corresponding sets:
//!
//! ```
//! use satchel_core::password::PasswordProfile;
//!
//! let profile = PasswordProfile::new("{alpha}-_");
//! let password = profile.generate(5);
//! assert_eq!(password.chars().count(), 5);
//! ```

use std::collections::BTreeSet;

use rand::rngs::OsRng;
use rand::seq::SliceRandom;

/// Default password length
pub const DEFAULT_LENGTH: usize = 10;

const ASCII_LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";
const WHITESPACE: &str = " \t\n\r\x0b\x0c";

/// Character class tags and the sets they expand to
pub fn char_defs() -> Vec<(&'static str, String)> {
    vec![
        ("alnum", format!("{ASCII_LETTERS}{DIGITS}")),
        ("alpha", ASCII_LETTERS.to_string()),
        ("num", DIGITS.to_string()),
        ("space", WHITESPACE.to_string()),
        ("punct", PUNCTUATION.to_string()),
    ]
}

/// Default character set: letters, numbers and punctuation
pub fn default_chars() -> Vec<char> {
    format!("{ASCII_LETTERS}{DIGITS}{PUNCTUATION}").chars().collect()
}

/// Generate a random password using the supplied characters.
///
/// Characters are drawn from the OS random number generator. An empty
/// character set yields an empty password.
pub fn generate_password(chars: &[char], length: usize) -> String {
    (0..length)
        .filter_map(|_| chars.choose(&mut OsRng))
        .collect()
}

/// A password profile, specifying how to generate a random password.
pub struct PasswordProfile {
    definition: String,
    chars: Vec<char>,
}

impl PasswordProfile {
    pub fn new(definition: impl Into<String>) -> Self {
        let definition = definition.into();
        let chars = expand_definition(&definition);
        Self { definition, chars }
    }

    /// The definition string the profile was created from.
    pub fn definition(&self) -> &str {
        &self.definition
    }

    /// The set of characters used in generation.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Generate a random password.
    pub fn generate(&self, length: usize) -> String {
        generate_password(&self.chars, length)
    }
}

/// Expand class tags and deduplicate the resulting character set.
fn expand_definition(definition: &str) -> Vec<char> {
    let mut expanded = definition.to_string();
    for (tag, chars) in char_defs() {
        expanded = expanded.replace(&format!("{{{tag}}}"), &chars);
    }
    let unique: BTreeSet<char> = expanded.chars().collect();
    unique.into_iter().collect()
}

#[cfg(test)]
#[path = "password_tests.rs"]
mod tests;
