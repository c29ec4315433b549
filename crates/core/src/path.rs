// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Path handling functions

use std::fs;
use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use thiserror::Error;

/// Errors from filename matching
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("invalid pattern: {0}")]
    Pattern(#[from] globset::Error),
}

/// Search files by name based on shell glob patterns.
///
/// Walks each directory recursively and returns the files whose name
/// matches any of the patterns. Unreadable directories are skipped.
pub fn match_files(
    dirpaths: &[impl AsRef<Path>],
    patterns: &[&str],
    ignorecase: bool,
) -> Result<Vec<PathBuf>, MatchError> {
    let globs = build_globset(patterns, ignorecase)?;

    let mut matched = Vec::new();
    for dirpath in dirpaths {
        let mut pending = vec![dirpath.as_ref().to_path_buf()];
        while let Some(dir) = pending.pop() {
            let Ok(entries) = fs::read_dir(&dir) else {
                continue;
            };
            for entry in entries.flatten() {
                let path = entry.path();
                if path.is_dir() {
                    pending.push(path);
                } else if globs.is_match(entry.file_name()) {
                    matched.push(path);
                }
            }
        }
    }
    matched.sort_unstable();
    Ok(matched)
}

fn build_globset(patterns: &[&str], ignorecase: bool) -> Result<GlobSet, MatchError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(
            GlobBuilder::new(pattern)
                .case_insensitive(ignorecase)
                .build()?,
        );
    }
    Ok(builder.build()?)
}

#[cfg(test)]
#[path = "path_tests.rs"]
mod tests;
