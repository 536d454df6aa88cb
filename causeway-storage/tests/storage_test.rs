//! SqliteStore round-trips and the row contract's failure modes.

use causeway_core::entity::{Cause, IdList, Outcome};
use causeway_core::errors::{RiskError, StoreError};
use causeway_core::traits::{CauseField, IEntityStore, OutcomeField};
use causeway_storage::SqliteStore;

fn make_cause(id: &str) -> Cause {
    Cause {
        id: id.to_string(),
        title: format!("Cause {id}"),
        description: format!("Description of {id}"),
        caused_by: IdList::new(),
        causes: IdList::parse("o1,o2"),
        probability: Some(40),
        severity: Some(3),
    }
}

fn make_outcome(id: &str) -> Outcome {
    Outcome {
        id: id.to_string(),
        title: format!("Outcome {id}"),
        description: format!("Description of {id}"),
        caused_by: IdList::parse("c1"),
        probability: 12.5,
        severity: 4,
    }
}

#[test]
fn empty_tables_read_empty() {
    let store = SqliteStore::open_in_memory().unwrap();
    assert!(store.read_causes().unwrap().is_empty());
    assert!(store.read_outcomes().unwrap().is_empty());
}

#[test]
fn append_then_read_preserves_all_cells() {
    let store = SqliteStore::open_in_memory().unwrap();
    store.append_cause(&make_cause("c1")).unwrap();
    store.append_outcome(&make_outcome("o1")).unwrap();

    let causes = store.read_causes().unwrap();
    assert_eq!(causes.len(), 1);
    assert_eq!(causes[0], make_cause("c1"));

    let outcomes = store.read_outcomes().unwrap();
    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0], make_outcome("o1"));
}

#[test]
fn rows_come_back_in_insertion_order() {
    let store = SqliteStore::open_in_memory().unwrap();
    for id in ["b", "a", "c"] {
        store.append_cause(&make_cause(id)).unwrap();
    }
    let ids: Vec<String> = store.read_causes().unwrap().into_iter().map(|c| c.id).collect();
    assert_eq!(ids, vec!["b", "a", "c"]);
}

#[test]
fn update_field_touches_exactly_one_cell() {
    let store = SqliteStore::open_in_memory().unwrap();
    store.append_cause(&make_cause("c1")).unwrap();
    store
        .update_cause_field("c1", CauseField::Probability, "85")
        .unwrap();

    let cause = &store.read_causes().unwrap()[0];
    assert_eq!(cause.probability, Some(85));
    assert_eq!(cause.title, "Cause c1");
    assert_eq!(cause.severity, Some(3));
}

#[test]
fn unset_numeric_cells_read_as_none() {
    let store = SqliteStore::open_in_memory().unwrap();
    let mut cause = make_cause("c1");
    cause.probability = None;
    cause.severity = None;
    store.append_cause(&cause).unwrap();

    let read = &store.read_causes().unwrap()[0];
    assert_eq!(read.probability, None);
    assert_eq!(read.severity, None);
}

#[test]
fn malformed_numeric_cell_reads_as_unset() {
    let store = SqliteStore::open_in_memory().unwrap();
    store.append_cause(&make_cause("c1")).unwrap();
    store
        .update_cause_field("c1", CauseField::Probability, "not-a-number")
        .unwrap();
    assert_eq!(store.read_causes().unwrap()[0].probability, None);
}

#[test]
fn update_of_missing_row_is_an_error() {
    let store = SqliteStore::open_in_memory().unwrap();
    let err = store
        .update_outcome_field("ghost", OutcomeField::Title, "x")
        .unwrap_err();
    assert!(matches!(
        err,
        RiskError::Store(StoreError::RowNotFound { .. })
    ));
}

#[test]
fn delete_removes_the_row() {
    let store = SqliteStore::open_in_memory().unwrap();
    store.append_outcome(&make_outcome("o1")).unwrap();
    store.delete_outcome("o1").unwrap();
    assert!(store.read_outcomes().unwrap().is_empty());
}

#[test]
fn delete_of_missing_row_is_an_error() {
    let store = SqliteStore::open_in_memory().unwrap();
    let err = store.delete_cause("ghost").unwrap_err();
    assert!(matches!(
        err,
        RiskError::Store(StoreError::RowNotFound { .. })
    ));
}

#[test]
fn file_backed_store_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("risk.db");

    {
        let store = SqliteStore::open(&path).unwrap();
        store.append_cause(&make_cause("c1")).unwrap();
    }

    let store = SqliteStore::open(&path).unwrap();
    assert_eq!(store.read_causes().unwrap().len(), 1);
}

#[test]
fn outcome_probability_survives_text_round_trip_exactly() {
    let store = SqliteStore::open_in_memory().unwrap();
    let mut outcome = make_outcome("o1");
    outcome.probability = 100.0 / 3.0;
    store.append_outcome(&outcome).unwrap();
    assert_eq!(store.read_outcomes().unwrap()[0].probability, 100.0 / 3.0);
}
