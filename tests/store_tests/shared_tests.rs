//! Tests for SharedStore
//!
//! These tests verify:
//! - Clones share one store
//! - Concurrent writers leave the indexes consistent
//! - Grouped operations under `with`

use std::thread;

use tallykv::protocol::{Command, Response};
use tallykv::{SharedStore, Store};

#[test]
fn test_shared_clones_see_same_store() {
    let shared = SharedStore::new();
    let other = shared.clone();

    shared.set("a", "foo");

    assert_eq!(other.get("a"), Some("foo".to_string()));
    assert_eq!(other.count("foo"), 1);
}

#[test]
fn test_shared_transactions_span_handles() {
    let shared = SharedStore::new();
    let other = shared.clone();

    shared.begin();
    other.set("a", "foo");
    shared.rollback();

    assert_eq!(other.get("a"), None);

    other.begin();
    shared.set("b", "bar");
    other.commit();
    shared.rollback();
    assert_eq!(shared.get("b"), Some("bar".to_string()));
}

#[test]
fn test_shared_execute() {
    let shared = SharedStore::new();

    shared.execute(Command::Set {
        key: "a".into(),
        value: "foo".into(),
    });
    shared.delete("missing");

    assert_eq!(
        shared.execute(Command::Get { key: "a".into() }),
        Response::Value(Some("foo".into()))
    );
}

#[test]
fn test_shared_concurrent_writers() {
    let shared = SharedStore::new();
    let mut handles = vec![];

    for t in 0..8 {
        let shared = shared.clone();
        handles.push(thread::spawn(move || {
            for i in 0..200 {
                let key = format!("key_{}", i % 50);
                shared.set(key.clone(), format!("value_{}", (t + i) % 5));
                if i % 7 == 0 {
                    shared.delete(&key);
                }
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert!(shared.with(|store| store.is_consistent()));
}

#[test]
fn test_shared_with_groups_operations() {
    let shared = SharedStore::from_store(Store::new());

    let depth = shared.with(|store| {
        store.begin();
        store.set("a", "foo");
        store.set("b", "foo");
        store.transaction_depth()
    });
    assert_eq!(depth, 1);
    assert_eq!(shared.count("foo"), 2);

    shared.commit();
    let store = shared.try_unwrap().unwrap();
    assert_eq!(store.get("a"), Some("foo"));
    assert!(!store.in_transaction());
}

#[test]
fn test_shared_try_unwrap_fails_with_other_handles() {
    let shared = SharedStore::new();
    let _other = shared.clone();

    assert!(shared.try_unwrap().is_err());
}
