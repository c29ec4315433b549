// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Map-like access to a filesystem subtree
//!
//! A [`Directory`] provides access to the filesystem below its path,
//! addressing files and sub-directories by relative name (including
//! OS-format paths such as `a-dir/a-file`):
//!
//! ```no_run
//! use satchel_core::fsmap::{Directory, Entry};
//!
//! let directory = Directory::new("/base/path");
//! directory.write_file("a-file", "some content")?;
//! if let Entry::File(content) = directory.get("a-file")? {
//!     assert_eq!(content, "some content");
//! }
//! # Ok::<(), satchel_core::fsmap::FsMapError>(())
//! ```

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from accessing directory entries
#[derive(Debug, Error)]
pub enum FsMapError {
    #[error("no such entry: {0}")]
    NotFound(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// An entry below a [`Directory`]
pub enum Entry {
    /// A file, with its text content
    File(String),
    /// A sub-directory
    Dir(Directory),
}

/// Access to the sub-tree of a directory.
#[derive(Debug, Clone)]
pub struct Directory {
    path: PathBuf,
}

impl Directory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path of the directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Access an entry by name.
    pub fn get(&self, name: &str) -> Result<Entry, FsMapError> {
        let path = self.existing_path(name)?;
        if path.is_dir() {
            return Ok(Entry::Dir(Directory::new(path)));
        }
        Ok(Entry::File(fs::read_to_string(path)?))
    }

    /// Create or overwrite a file with the given content.
    pub fn write_file(&self, name: &str, content: &str) -> Result<(), FsMapError> {
        fs::write(self.path.join(name), content)?;
        Ok(())
    }

    /// Create a sub-directory.
    pub fn create_dir(&self, name: &str) -> Result<Directory, FsMapError> {
        let path = self.path.join(name);
        fs::create_dir(&path)?;
        Ok(Directory::new(path))
    }

    /// Remove a file or a sub-directory with its whole subtree.
    pub fn remove(&self, name: &str) -> Result<(), FsMapError> {
        let path = self.existing_path(name)?;
        if path.is_dir() {
            fs::remove_dir_all(path)?;
        } else {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Names of the entries contained in the directory.
    pub fn names(&self) -> Result<Vec<String>, FsMapError> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.path)? {
            names.push(entry?.file_name().to_string_lossy().into_owned());
        }
        names.sort_unstable();
        Ok(names)
    }

    /// Return a Directory joining the paths of two Directories.
    pub fn join(&self, other: &Directory) -> Directory {
        Directory::new(self.path.join(&other.path))
    }

    fn existing_path(&self, name: &str) -> Result<PathBuf, FsMapError> {
        let path = self.path.join(name);
        if !path.exists() {
            return Err(FsMapError::NotFound(name.to_string()));
        }
        Ok(path)
    }
}

impl fmt::Display for Directory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

#[cfg(test)]
#[path = "fsmap_tests.rs"]
mod tests;
