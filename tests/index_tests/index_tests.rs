//! Index Tests
//!
//! Tests verify:
//! - KeyIndex insert/replace/remove and returned previous values
//! - Removing from an empty index is a no-op
//! - CountIndex increments, decrements and drops entries at zero
//! - Sorted iteration

use tallykv::index::{CountIndex, KeyIndex};

// =============================================================================
// KeyIndex Tests
// =============================================================================

#[test]
fn test_new_key_index_is_empty() {
    let keys = KeyIndex::new();
    assert!(keys.is_empty());
    assert_eq!(keys.len(), 0);
    assert_eq!(keys.get("a"), None);
}

#[test]
fn test_put_returns_previous_value() {
    let mut keys = KeyIndex::new();

    assert_eq!(keys.put("a".into(), "foo".into()), None);
    assert_eq!(keys.put("a".into(), "bar".into()), Some("foo".to_string()));

    assert_eq!(keys.get("a"), Some("bar"));
    assert_eq!(keys.len(), 1);
}

#[test]
fn test_keys_are_case_sensitive() {
    let mut keys = KeyIndex::new();
    keys.put("b".into(), "bar".into());

    assert_eq!(keys.get("b"), Some("bar"));
    assert_eq!(keys.get("B"), None);
}

#[test]
fn test_remove_returns_value() {
    let mut keys = KeyIndex::new();
    keys.put("a".into(), "foo".into());

    assert_eq!(keys.remove("a"), Some("foo".to_string()));
    assert_eq!(keys.get("a"), None);
    assert!(keys.is_empty());
}

#[test]
fn test_remove_from_empty_index_is_noop() {
    let mut keys = KeyIndex::new();

    assert_eq!(keys.remove("missing"), None);
    assert!(keys.is_empty());
}

#[test]
fn test_remove_absent_key_leaves_others() {
    let mut keys = KeyIndex::new();
    keys.put("a".into(), "foo".into());

    assert_eq!(keys.remove("b"), None);
    assert_eq!(keys.get("a"), Some("foo"));
}

#[test]
fn test_key_iteration_is_sorted() {
    let mut keys = KeyIndex::new();
    keys.put("c".into(), "3".into());
    keys.put("a".into(), "1".into());
    keys.put("b".into(), "2".into());

    let collected: Vec<_> = keys.iter().collect();
    assert_eq!(collected, vec![("a", "1"), ("b", "2"), ("c", "3")]);
}

// =============================================================================
// CountIndex Tests
// =============================================================================

#[test]
fn test_count_of_unknown_value_is_zero() {
    let counts = CountIndex::new();
    assert_eq!(counts.count_of("foo"), 0);
    assert!(counts.is_empty());
}

#[test]
fn test_increment_creates_and_grows_entry() {
    let mut counts = CountIndex::new();

    counts.increment("foo");
    assert_eq!(counts.count_of("foo"), 1);

    counts.increment("foo");
    counts.increment("bar");
    assert_eq!(counts.count_of("foo"), 2);
    assert_eq!(counts.count_of("bar"), 1);
    assert_eq!(counts.len(), 2);
    assert_eq!(counts.total(), 3);
}

#[test]
fn test_decrement_removes_entry_at_zero() {
    let mut counts = CountIndex::new();
    counts.increment("foo");
    counts.increment("foo");

    counts.decrement("foo");
    assert_eq!(counts.count_of("foo"), 1);
    assert_eq!(counts.len(), 1);

    counts.decrement("foo");
    assert_eq!(counts.count_of("foo"), 0);
    assert!(counts.is_empty());
    assert!(counts.iter().all(|(_, count)| count > 0));
}

#[test]
fn test_decrement_unknown_value_is_noop() {
    let mut counts = CountIndex::new();
    counts.increment("foo");

    counts.decrement("bar");

    assert_eq!(counts.count_of("foo"), 1);
    assert_eq!(counts.count_of("bar"), 0);
    assert_eq!(counts.len(), 1);
}

#[test]
fn test_count_iteration_is_sorted() {
    let mut counts = CountIndex::new();
    counts.increment("zeta");
    counts.increment("alpha");
    counts.increment("alpha");

    let collected: Vec<_> = counts.iter().collect();
    assert_eq!(collected, vec![("alpha", 2), ("zeta", 1)]);
}
