mod common;

use common::{memory_store, satisfy_all, setup, BrokenStore, RecordingListener};
use std::sync::Arc;
use tradecheck::domain::entities::checklist::{Checklist, DEFAULT_CONDITIONS};
use tradecheck::domain::error::DomainError;
use tradecheck::domain::ports::event_listener::SessionEvent;
use tradecheck::domain::ports::key_value_store::{KeyValueStore, CONDITIONS_KEY};
use tradecheck::domain::values::condition_status::ConditionStatus;
use tradecheck::TradeCheck;

#[test]
fn test_first_load_seeds_and_saves_defaults() {
    let (tc, store) = setup();

    assert_eq!(tc.condition_count(), DEFAULT_CONDITIONS.len());
    assert_eq!(tc.satisfied_count(), 0);
    assert!(!tc.all_satisfied());

    let saved = store.get(CONDITIONS_KEY).unwrap().expect("seed should be saved");
    assert_eq!(Checklist::from_json(&saved).unwrap().conditions(), tc.conditions());
}

#[test]
fn test_legacy_records_are_migrated() {
    let store = memory_store();
    store
        .set(
            CONDITIONS_KEY,
            r#"[{"id":2,"description":"trend","status":"O"},{"id":7,"description":"volume","status":"X","details":"1.5x avg"}]"#,
        )
        .unwrap();

    let tc = TradeCheck::with_store(store.clone());
    assert_eq!(tc.condition_count(), 2);
    assert_eq!(tc.conditions()[0].details, "");
    assert_eq!(tc.conditions()[1].details, "1.5x avg");
    assert_eq!(tc.satisfied_count(), 1);

    // Re-saved in the current shape
    let saved = store.get(CONDITIONS_KEY).unwrap().unwrap();
    assert!(saved.contains("\"details\":\"\""));
}

#[test]
fn test_corrupt_data_falls_back_to_defaults() {
    let store = memory_store();
    store.set(CONDITIONS_KEY, "[{\"id\":").unwrap();

    let tc = TradeCheck::with_store(store);
    assert_eq!(tc.condition_count(), DEFAULT_CONDITIONS.len());
    assert_eq!(tc.conditions()[0].id, 1);
}

#[test]
fn test_stored_empty_list_stays_empty() {
    let store = memory_store();
    store.set(CONDITIONS_KEY, "[]").unwrap();

    let tc = TradeCheck::with_store(store.clone());
    assert_eq!(tc.condition_count(), 0);
    assert!(!tc.all_satisfied());
    assert_eq!(store.get(CONDITIONS_KEY).unwrap().as_deref(), Some("[]"));
    drop(tc);

    // Loading again must not reseed
    let tc = TradeCheck::with_store(store.clone());
    assert_eq!(tc.condition_count(), 0);
    assert_eq!(store.get(CONDITIONS_KEY).unwrap().as_deref(), Some("[]"));
}

#[test]
fn test_removing_last_condition_clears_store() {
    let (mut tc, store) = setup();
    let ids: Vec<u64> = tc.conditions().iter().map(|c| c.id).collect();

    for id in &ids[..ids.len() - 1] {
        tc.remove_condition(*id).unwrap();
        assert!(store.get(CONDITIONS_KEY).unwrap().is_some());
    }
    tc.remove_condition(*ids.last().unwrap()).unwrap();

    assert_eq!(tc.condition_count(), 0);
    assert_eq!(store.get(CONDITIONS_KEY).unwrap(), None);

    // Cleared key means the next load seeds again
    let reloaded = TradeCheck::with_store(store);
    assert_eq!(reloaded.condition_count(), DEFAULT_CONDITIONS.len());
}

#[test]
fn test_mutations_are_persisted() {
    let (mut tc, store) = setup();
    let added = tc.add_condition();
    assert_eq!(added.id, DEFAULT_CONDITIONS.len() as u64 + 1);
    assert!(tc.update_condition(
        added.id,
        "Funding rate neutral".into(),
        "between -0.01% and 0.01%".into(),
        ConditionStatus::Satisfied,
    ));

    let reloaded = TradeCheck::with_store(store);
    let c = reloaded.conditions().last().unwrap();
    assert_eq!(c.id, added.id);
    assert_eq!(c.description, "Funding rate neutral");
    assert_eq!(c.details, "between -0.01% and 0.01%");
    assert_eq!(c.status, ConditionStatus::Satisfied);
}

#[test]
fn test_file_backed_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tradecheck.db");
    let path = path.to_str().unwrap();

    {
        let mut tc = TradeCheck::new(path).unwrap();
        satisfy_all(&mut tc);
        assert!(tc.all_satisfied());
    }

    let tc = TradeCheck::new(path).unwrap();
    assert!(tc.all_satisfied());
}

#[test]
fn test_unknown_id_changes_nothing() {
    let (mut tc, store) = setup();
    let before = store.get(CONDITIONS_KEY).unwrap();

    assert!(!tc.update_condition(999, "x".into(), "y".into(), ConditionStatus::Satisfied));
    assert!(tc.remove_condition(999).is_none());
    assert_eq!(store.get(CONDITIONS_KEY).unwrap(), before);
}

#[test]
fn test_condition_lookup() {
    let (tc, _store) = setup();
    assert_eq!(tc.condition(1).unwrap().description, DEFAULT_CONDITIONS[0]);
    assert!(matches!(tc.condition(999), Err(DomainError::NotFound(_))));
}

#[test]
fn test_add_remove_cycle_restores_order() {
    let (mut tc, _store) = setup();
    let before = tc.conditions().to_vec();

    let id = tc.add_condition().id;
    tc.remove_condition(id);
    assert_eq!(tc.conditions(), before.as_slice());
}

#[test]
fn test_checklist_events() {
    let (mut tc, _store) = setup();
    let listener = Arc::new(RecordingListener::default());
    tc.subscribe(listener.clone());

    let total = tc.condition_count();
    satisfy_all(&mut tc);
    let id = tc.add_condition().id;
    tc.remove_condition(id);

    let events = listener.events();
    assert_eq!(events.len(), total + 2);
    assert_eq!(
        events[total - 1],
        SessionEvent::ChecklistChanged {
            satisfied: total,
            total,
            all_satisfied: true,
        }
    );
    assert_eq!(
        events[total],
        SessionEvent::ChecklistChanged {
            satisfied: total,
            total: total + 1,
            all_satisfied: false,
        }
    );
}

#[test]
fn test_broken_store_does_not_abort() {
    let mut tc = TradeCheck::with_store(Arc::new(BrokenStore));
    assert_eq!(tc.condition_count(), DEFAULT_CONDITIONS.len());

    let id = tc.add_condition().id;
    assert!(tc.update_condition(id, "still works".into(), String::new(), ConditionStatus::Satisfied));
    assert_eq!(tc.satisfied_count(), 1);
}
