//! Shared test helpers.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use tradecheck::domain::error::DomainError;
use tradecheck::domain::ports::event_listener::{EventListener, SessionEvent};
use tradecheck::domain::ports::key_value_store::KeyValueStore;
use tradecheck::domain::values::condition_status::ConditionStatus;
use tradecheck::infrastructure::sqlite::kv_store::SqliteKeyValueStore;
use tradecheck::TradeCheck;

pub fn memory_store() -> Arc<SqliteKeyValueStore> {
    Arc::new(SqliteKeyValueStore::open(":memory:").unwrap())
}

pub fn setup() -> (TradeCheck, Arc<SqliteKeyValueStore>) {
    let store = memory_store();
    let tc = TradeCheck::with_store(store.clone());
    (tc, store)
}

pub fn satisfy_all(tc: &mut TradeCheck) {
    let conditions = tc.conditions().to_vec();
    for c in conditions {
        tc.update_condition(c.id, c.description, c.details, ConditionStatus::Satisfied);
    }
}

/// A store whose reads and writes always fail.
pub struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, DomainError> {
        Err(DomainError::Storage("disk unavailable".into()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), DomainError> {
        Err(DomainError::Storage("disk unavailable".into()))
    }

    fn remove(&self, _key: &str) -> Result<(), DomainError> {
        Err(DomainError::Storage("disk unavailable".into()))
    }
}

#[derive(Default)]
pub struct RecordingListener {
    events: Mutex<Vec<SessionEvent>>,
}

impl RecordingListener {
    pub fn events(&self) -> Vec<SessionEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl EventListener for RecordingListener {
    fn on_event(&self, event: &SessionEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}
