#![cfg(feature = "tui")]

use chrono::{Duration, Local};
use feito::model::{Task, parse_smart_input};
use feito::storage::{BlobStore, MemoryStore};
use feito::store::{StoreError, TaskStore};
use feito::tui::action::{SubmitOutcome, handle_submit};

fn empty_store() -> TaskStore {
    TaskStore::open(Box::new(MemoryStore::new()))
}

#[test]
fn test_submit_with_empty_slot_adds() {
    let mut store = empty_store();

    let outcome = handle_submit(&mut store, None, "Pay rent @2026-03-01").unwrap();

    assert_eq!(outcome, SubmitOutcome::Created);
    assert_eq!(store.len(), 1);
    assert_eq!(store.tasks()[0].name, "Pay rent");
    assert_eq!(store.tasks()[0].deadline, "2026-03-01");
}

#[test]
fn test_submit_with_slot_edits_the_remembered_task() {
    let mut store = empty_store();
    store.add("Original", "2026-01-01").unwrap();
    store.add("Bystander", "2026-02-02").unwrap();
    let target = store.tasks()[0].id.clone();

    let outcome = handle_submit(&mut store, Some(&target), "Renamed @2026-06-01").unwrap();

    assert_eq!(outcome, SubmitOutcome::Updated);
    assert_eq!(store.len(), 2, "an edit must not add a task");
    assert_eq!(store.tasks()[0].name, "Renamed");
    assert_eq!(store.tasks()[0].deadline, "2026-06-01");
    assert_eq!(store.tasks()[1].name, "Bystander");
}

#[test]
fn test_submit_without_deadline_fails_and_mutates_nothing() {
    let mem = MemoryStore::new();
    let mut store = TaskStore::open(Box::new(mem.clone()));

    let err = handle_submit(&mut store, None, "Just a name").unwrap_err();

    assert!(matches!(err, StoreError::EmptyDeadline));
    assert!(store.is_empty());
    assert!(
        mem.read().unwrap().is_none(),
        "rejected submits must not reach the backend"
    );
}

#[test]
fn test_submit_with_only_a_deadline_fails_name_validation() {
    let mut store = empty_store();

    let err = handle_submit(&mut store, None, "@2026-01-01").unwrap_err();

    assert!(matches!(err, StoreError::EmptyName));
    assert!(store.is_empty());
}

#[test]
fn test_smart_input_resolves_relative_dates() {
    let today = Local::now().date_naive();

    let parsed = parse_smart_input("Water plants @today");
    assert_eq!(parsed.name, "Water plants");
    assert_eq!(parsed.deadline, today.format("%Y-%m-%d").to_string());

    let parsed = parse_smart_input("Water plants @tomorrow");
    let tomorrow = today + Duration::days(1);
    assert_eq!(parsed.deadline, tomorrow.format("%Y-%m-%d").to_string());
}

#[test]
fn test_smart_input_keeps_free_form_deadlines_verbatim() {
    let parsed = parse_smart_input("Ship the release @Q2");
    assert_eq!(parsed.name, "Ship the release");
    assert_eq!(parsed.deadline, "Q2");
}

#[test]
fn test_last_deadline_token_wins() {
    let parsed = parse_smart_input("Alpha @2026-01-01 Beta @2026-02-02");
    assert_eq!(parsed.name, "Alpha Beta");
    assert_eq!(parsed.deadline, "2026-02-02");
}

#[test]
fn test_prefill_roundtrips_through_the_parser() {
    let task = Task::new("Buy milk", "2026-05-05");

    let line = task.to_smart_string();
    assert_eq!(line, "Buy milk @2026-05-05");

    let parsed = parse_smart_input(&line);
    assert_eq!(parsed.name, task.name);
    assert_eq!(parsed.deadline, task.deadline);
}

#[test]
fn test_prefill_omits_an_absent_deadline() {
    // Only legacy records can lack a deadline; the prefill must not
    // produce a dangling "@".
    let task = Task::new("Bare", "");
    assert_eq!(task.to_smart_string(), "Bare");
}
