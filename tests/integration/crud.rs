//! Store contract tests: create, read, update, delete.

use crate::common::*;

#[test]
fn fresh_store_is_empty() {
    let t = test_book();
    assert!(t.book.list_all().unwrap().is_empty());
}

#[test]
fn round_trip() {
    let t = test_book();
    let id = t.book.add(ada()).unwrap();
    assert_eq!(t.book.get(&id).unwrap(), ada());
}

#[test]
fn add_returns_pairwise_distinct_ids() {
    let t = test_book();
    let mut seen = std::collections::HashSet::new();
    for _ in 0..50 {
        assert!(seen.insert(t.book.add(ada()).unwrap()));
    }
}

#[test]
fn deletion_removes_from_get_and_list() {
    let t = test_book();
    let id = t.book.add(ada()).unwrap();
    let keep = t.book.add(grace()).unwrap();

    t.book.remove(&id).unwrap();

    assert!(matches!(t.book.get(&id), Err(Error::NotFound(gone)) if gone == id));
    let all = t.book.list_all().unwrap();
    assert!(!all.contains_key(&id));
    assert!(all.contains_key(&keep));
}

#[test]
fn update_replaces_wholesale() {
    let t = test_book();
    let id = t.book.add(ada()).unwrap();

    // Replacement shares no field with the prior value.
    let replacement = Contact::new("", "", "999", "");
    t.book.update(&id, replacement.clone()).unwrap();
    assert_eq!(t.book.get(&id).unwrap(), replacement);
}

#[test]
fn listing_is_idempotent() {
    let t = test_book();
    t.book.add(ada()).unwrap();
    t.book.add(grace()).unwrap();
    assert_eq!(t.book.list_all().unwrap(), t.book.list_all().unwrap());
}

#[test]
fn not_found_on_absent_ids() {
    let t = test_book();
    let absent = ContactId::new();
    assert!(matches!(t.book.get(&absent), Err(Error::NotFound(_))));
    assert!(matches!(
        t.book.update(&absent, ada()),
        Err(Error::NotFound(_))
    ));
    assert!(matches!(t.book.remove(&absent), Err(Error::NotFound(_))));
}

#[test]
fn empty_fields_are_valid_records() {
    let t = test_book();
    let id = t.book.add(Contact::default()).unwrap();
    assert_eq!(t.book.get(&id).unwrap(), Contact::default());
}

// The end-to-end scenario from the store contract: add, list, modify,
// remove, verify at every step.
#[test]
fn full_lifecycle_scenario() {
    let t = test_book();

    let id1 = t.book.add(ada()).unwrap();

    let all = t.book.list_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[&id1], ada());

    let mut modified = ada();
    modified.phone = "999".to_string();
    t.book.update(&id1, modified).unwrap();
    assert_eq!(t.book.get(&id1).unwrap().phone, "999");

    t.book.remove(&id1).unwrap();
    assert!(t.book.list_all().unwrap().is_empty());
    assert!(matches!(t.book.get(&id1), Err(Error::NotFound(_))));
}
