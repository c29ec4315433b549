// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[derive(Debug, PartialEq)]
struct Item {
    name: String,
    value: u32,
}

impl Item {
    fn new(name: &str, value: u32) -> Self {
        Self {
            name: name.to_string(),
            value,
        }
    }
}

impl Keyed for Item {
    fn key(&self) -> &str {
        &self.name
    }
}

#[test]
fn add_and_get() {
    let mut collection = Collection::new("item");
    collection.add(Item::new("foo", 1)).unwrap();
    assert_eq!(collection.get("foo").unwrap().value, 1);
}

#[test]
fn add_duplicated_key() {
    let mut collection = Collection::new("item");
    collection.add(Item::new("foo", 1)).unwrap();
    assert_eq!(
        collection.add(Item::new("foo", 2)),
        Err(CollectionError::Duplicated {
            kind: "item".to_string(),
            key: "foo".to_string(),
        })
    );
}

#[test]
fn get_unknown_key() {
    let collection: Collection<Item> = Collection::new("item");
    assert_eq!(
        collection.get("nope"),
        Err(CollectionError::Unknown {
            kind: "item".to_string(),
            key: "nope".to_string(),
        })
    );
}

#[test]
fn error_messages_name_the_kind() {
    let collection: Collection<Item> = Collection::new("worker");
    let error = collection.get("w1").unwrap_err();
    assert_eq!(error.to_string(), "unknown worker: w1");
}

#[test]
fn remove_returns_the_object() {
    let mut collection = Collection::new("item");
    collection.add(Item::new("foo", 1)).unwrap();
    let removed = collection.remove("foo").unwrap();
    assert_eq!(removed, Item::new("foo", 1));
    assert!(!collection.contains("foo"));
}

#[test]
fn remove_unknown_key() {
    let mut collection: Collection<Item> = Collection::new("item");
    assert!(matches!(
        collection.remove("nope"),
        Err(CollectionError::Unknown { .. })
    ));
}

#[test]
fn keys_and_sorted_are_ordered() {
    let mut collection = Collection::new("item");
    collection.add(Item::new("zulu", 1)).unwrap();
    collection.add(Item::new("alpha", 2)).unwrap();

    let keys: Vec<&str> = collection.keys().collect();
    assert_eq!(keys, ["alpha", "zulu"]);
    let values: Vec<u32> = collection.sorted().iter().map(|item| item.value).collect();
    assert_eq!(values, [2, 1]);
}

#[test]
fn clear_empties_the_collection() {
    let mut collection = Collection::new("item");
    collection.add(Item::new("foo", 1)).unwrap();
    assert_eq!(collection.len(), 1);
    collection.clear();
    assert!(collection.is_empty());
}
