// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Keyed collections of objects of the same kind
//!
//! A [`Collection`] holds objects identified by a key attribute, exposed
//! through the [`Keyed`] trait:
//!
//! ```
//! use satchel_core::collect::{Collection, Keyed};
//!
//! struct Worker {
//!     name: String,
//! }
//!
//! impl Keyed for Worker {
//!     fn key(&self) -> &str {
//!         &self.name
//!     }
//! }
//!
//! let mut workers = Collection::new("worker");
//! workers.add(Worker { name: "foo".into() }).unwrap();
//! assert!(workers.get("foo").is_ok());
//! ```

use std::collections::BTreeMap;

use thiserror::Error;

/// Identifies an object within a [`Collection`].
pub trait Keyed {
    fn key(&self) -> &str;
}

/// Errors from collection lookups and insertions
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CollectionError {
    /// No object with the specified key
    #[error("unknown {kind}: {key}")]
    Unknown { kind: String, key: String },
    /// An object with the specified key is already present
    #[error("duplicated {kind}: {key}")]
    Duplicated { kind: String, key: String },
}

/// A collection of objects keyed on an attribute.
///
/// No two objects with the same key are allowed. `kind` names the object
/// type in error messages.
pub struct Collection<T> {
    kind: String,
    objects: BTreeMap<String, T>,
}

impl<T: Keyed> Collection<T> {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            objects: BTreeMap::new(),
        }
    }

    /// Add an object and return a reference to it.
    pub fn add(&mut self, object: T) -> Result<&T, CollectionError> {
        let key = object.key().to_string();
        if self.objects.contains_key(&key) {
            return Err(CollectionError::Duplicated {
                kind: self.kind.clone(),
                key,
            });
        }
        Ok(self.objects.entry(key).or_insert(object))
    }

    /// Return the object with the specified key.
    pub fn get(&self, key: &str) -> Result<&T, CollectionError> {
        self.objects.get(key).ok_or_else(|| CollectionError::Unknown {
            kind: self.kind.clone(),
            key: key.to_string(),
        })
    }

    /// Remove and return the object with the specified key.
    pub fn remove(&mut self, key: &str) -> Result<T, CollectionError> {
        self.objects.remove(key).ok_or_else(|| CollectionError::Unknown {
            kind: self.kind.clone(),
            key: key.to_string(),
        })
    }

    /// Whether an object with the specified key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.objects.contains_key(key)
    }

    /// Collection keys, sorted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.objects.keys().map(String::as_str)
    }

    /// Contained objects, sorted by key.
    pub fn sorted(&self) -> Vec<&T> {
        self.objects.values().collect()
    }

    /// Iterate over all contained objects.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.objects.values()
    }

    /// Empty the collection.
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

#[cfg(test)]
#[path = "collect_tests.rs"]
mod tests;
