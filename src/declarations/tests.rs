//! Unit tests for the declaration table.

use super::declarations::{DeclarationTable, Recorded, UNKNOWN_TYPE};

#[test]
fn test_record_and_lookup() {
    let mut table = DeclarationTable::default();

    assert_eq!(table.record("x", "int", 3), Recorded::Inserted);
    assert_eq!(table.lookup("x"), Some("int"));
    assert!(table.is_declared("x"));
    assert_eq!(table.get("x").unwrap().line, 3);
}

#[test]
fn test_first_declaration_wins() {
    let mut table = DeclarationTable::default();

    assert_eq!(table.record("x", "var", 1), Recorded::Inserted);
    assert_eq!(table.record("x", "Int", 1), Recorded::Duplicate);
    assert_eq!(table.record("x", "String", 7), Recorded::Duplicate);

    assert_eq!(table.len(), 1);
    assert_eq!(table.lookup("x"), Some("var"));
    assert_eq!(table.get("x").unwrap().line, 1);
}

#[test]
fn test_lookup_missing() {
    let table = DeclarationTable::default();

    assert_eq!(table.lookup("nope"), None);
    assert!(!table.is_declared("nope"));
    assert!(table.is_empty());
}

#[test]
fn test_insertion_order() {
    let mut table = DeclarationTable::default();
    table.record("b", "int", 1);
    table.record("a", UNKNOWN_TYPE, 2);
    table.record("c", "char", 3);

    let names: Vec<&str> = table.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["b", "a", "c"]);
}

#[test]
fn test_capacity_stops_recording() {
    let mut table = DeclarationTable::with_capacity(2);

    assert_eq!(table.record("a", "int", 1), Recorded::Inserted);
    assert_eq!(table.record("b", "int", 1), Recorded::Inserted);
    assert!(table.is_full());
    assert_eq!(table.record("c", "int", 1), Recorded::Full);
    assert_eq!(table.record("a", "float", 2), Recorded::Duplicate);
    assert!(!table.is_declared("c"));
}

#[test]
fn test_clear() {
    let mut table = DeclarationTable::default();
    table.record("a", "int", 1);
    table.clear();

    assert!(table.is_empty());
    assert_eq!(table.record("a", "float", 2), Recorded::Inserted);
    assert_eq!(table.lookup("a"), Some("float"));
}
