//! File lifecycle and crash-safety tests.

use crate::common::*;

#[test]
fn open_creates_empty_wrapper_document() {
    let t = test_book();
    let path = t.dir.path().join("test.json");
    assert!(path.exists());

    let value: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    assert!(value["entries"].as_object().unwrap().is_empty());
}

#[test]
fn reopen_sees_prior_writes() {
    let t = test_book();
    let id = t.book.add(ada()).unwrap();

    let reopened = t.reopen();
    assert_eq!(reopened.get(&id).unwrap(), ada());
    assert_eq!(reopened.list_all().unwrap().len(), 1);
}

#[test]
fn reopen_does_not_reinitialize() {
    let t = test_book();
    t.book.add(ada()).unwrap();

    // Opening the same name again must keep the data.
    let _second = t.reopen();
    let _third = t.reopen();
    assert_eq!(t.book.list_all().unwrap().len(), 1);
}

#[test]
fn one_file_per_store_name() {
    let t = test_book();
    t.book.add(ada()).unwrap();

    let other = ContactBook::open_in(t.dir.path(), "other").unwrap();
    assert!(other.list_all().unwrap().is_empty());
    assert!(t.dir.path().join("other.json").exists());
    assert_eq!(t.book.list_all().unwrap().len(), 1);
}

#[test]
fn on_disk_format_is_pretty_and_sorted() {
    let t = test_book();
    for i in 0..10 {
        t.book
            .add(Contact::new(format!("c{}", i), "", "", ""))
            .unwrap();
    }

    let text = std::fs::read_to_string(t.dir.path().join("test.json")).unwrap();

    // 2-space indentation
    assert!(text.lines().any(|l| l.starts_with("  \"entries\"")));

    // Keys appear in sorted order
    let ids: Vec<String> = t
        .book
        .list_all()
        .unwrap()
        .keys()
        .map(|id| id.to_string())
        .collect();
    let positions: Vec<usize> = ids.iter().map(|id| text.find(id).unwrap()).collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn no_temp_residue_after_mutations() {
    let t = test_book();
    let id = t.book.add(ada()).unwrap();
    t.book.update(&id, grace()).unwrap();
    t.book.remove(&id).unwrap();

    let residue: Vec<_> = std::fs::read_dir(t.dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .filter(|name| name.ends_with(".tmp"))
        .collect();
    assert!(residue.is_empty(), "temp files left behind: {:?}", residue);
}

#[test]
fn stale_temp_file_does_not_block_writes() {
    let t = test_book();
    std::fs::write(t.dir.path().join("test.json.tmp"), b"interrupted").unwrap();

    let id = t.book.add(ada()).unwrap();
    assert_eq!(t.book.get(&id).unwrap(), ada());
    assert!(!t.dir.path().join("test.json.tmp").exists());
}

#[test]
fn malformed_json_is_distinct_from_io_failure() {
    let t = test_book();
    std::fs::write(t.dir.path().join("test.json"), b"{{{{").unwrap();
    assert!(matches!(t.book.list_all(), Err(Error::Malformed(_))));
}

#[test]
fn missing_wrapper_field_is_malformed() {
    let t = test_book();
    std::fs::write(t.dir.path().join("test.json"), b"{\"contacts\": {}}").unwrap();
    assert!(matches!(t.book.list_all(), Err(Error::Malformed(_))));
}

#[test]
fn failed_mutation_leaves_prior_contents() {
    let t = test_book();
    let id = t.book.add(ada()).unwrap();
    let before = std::fs::read(t.dir.path().join("test.json")).unwrap();

    // Corrupt the file: the next mutation fails at the read step and must
    // not touch the file.
    std::fs::write(t.dir.path().join("test.json"), b"corrupt").unwrap();
    assert!(t.book.update(&id, grace()).is_err());
    assert_eq!(
        std::fs::read(t.dir.path().join("test.json")).unwrap(),
        b"corrupt"
    );

    // Restoring the prior bytes restores the record.
    std::fs::write(t.dir.path().join("test.json"), &before).unwrap();
    assert_eq!(t.book.get(&id).unwrap(), ada());
}

#[test]
fn missing_file_after_open_is_io_error() {
    let t = test_book();
    std::fs::remove_file(t.dir.path().join("test.json")).unwrap();
    assert!(matches!(t.book.list_all(), Err(Error::Io(_))));
}
