//! IdList parsing, rendering, and dedup-on-append.

use causeway_core::entity::IdList;

#[test]
fn parse_trims_and_drops_empty_tokens() {
    let list = IdList::parse(" a, b ,,c,  ");
    assert_eq!(list.iter().collect::<Vec<_>>(), vec!["a", "b", "c"]);
}

#[test]
fn parse_empty_string_is_empty() {
    assert!(IdList::parse("").is_empty());
    assert!(IdList::parse("  , ,").is_empty());
}

#[test]
fn push_unique_is_idempotent() {
    let mut list = IdList::parse("a,b");
    assert!(list.push_unique("c"));
    assert!(!list.push_unique("c"));
    assert!(!list.push_unique("a"));
    assert_eq!(list.len(), 3);
}

#[test]
fn membership_is_exact_and_case_sensitive() {
    let list = IdList::parse("Node1,node2");
    assert!(list.contains("Node1"));
    assert!(!list.contains("node1"));
    assert!(!list.contains("Node"));
}

#[test]
fn display_round_trips_through_parse() {
    let list = IdList::parse("x, y , z");
    assert_eq!(list.to_string(), "x,y,z");
    assert_eq!(IdList::parse(&list.to_string()), list);
}
