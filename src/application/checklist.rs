use crate::application::events::EventBus;
use crate::domain::entities::checklist::Checklist;
use crate::domain::entities::condition::Condition;
use crate::domain::ports::event_listener::{EventListener, SessionEvent};
use crate::domain::ports::key_value_store::{KeyValueStore, CONDITIONS_KEY};
use crate::domain::values::condition_status::ConditionStatus;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// The user's entry checklist, mirrored to the store after every change.
pub struct ChecklistSession {
    store: Arc<dyn KeyValueStore>,
    events: EventBus,
    checklist: Checklist,
}

impl ChecklistSession {
    /// Load the saved checklist, or seed the defaults when there is none or it cannot be read.
    pub fn load(store: Arc<dyn KeyValueStore>, events: EventBus) -> Self {
        let checklist = match store.get(CONDITIONS_KEY) {
            Ok(Some(json)) => Checklist::from_json(&json).unwrap_or_else(|e| {
                warn!(error = %e, "stored checklist is unreadable, seeding defaults");
                Checklist::with_defaults()
            }),
            Ok(None) => {
                debug!("no stored checklist, seeding defaults");
                Checklist::with_defaults()
            }
            Err(e) => {
                warn!(error = %e, "failed to load checklist, seeding defaults");
                Checklist::with_defaults()
            }
        };

        let session = Self {
            store,
            events,
            checklist,
        };
        // A stored empty list is left as is
        if !session.checklist.is_empty() {
            session.save();
        }
        session
    }

    pub fn subscribe(&mut self, listener: Arc<dyn EventListener>) {
        self.events.subscribe(listener);
    }

    pub fn checklist(&self) -> &Checklist {
        &self.checklist
    }

    pub fn conditions(&self) -> &[Condition] {
        self.checklist.conditions()
    }

    pub fn all_satisfied(&self) -> bool {
        self.checklist.all_satisfied()
    }

    pub fn satisfied_count(&self) -> usize {
        self.checklist.satisfied_count()
    }

    pub fn add(&mut self) -> Condition {
        let condition = self.checklist.add().clone();
        debug!(id = condition.id, "condition added");
        self.changed();
        condition
    }

    /// Returns `false` and leaves everything untouched when `id` is unknown.
    pub fn update(
        &mut self,
        id: u64,
        description: String,
        details: String,
        status: ConditionStatus,
    ) -> bool {
        if !self.checklist.update(id, description, details, status) {
            debug!(id, "update ignored, no such condition");
            return false;
        }
        self.changed();
        true
    }

    pub fn remove(&mut self, id: u64) -> Option<Condition> {
        let removed = self.checklist.remove(id);
        match &removed {
            Some(_) => {
                debug!(id, remaining = self.checklist.len(), "condition removed");
                self.changed();
            }
            None => debug!(id, "remove ignored, no such condition"),
        }
        removed
    }

    fn changed(&self) {
        self.persist();
        self.events.publish(SessionEvent::ChecklistChanged {
            satisfied: self.checklist.satisfied_count(),
            total: self.checklist.len(),
            all_satisfied: self.checklist.all_satisfied(),
        });
    }

    /// Save the whole list, or clear the key once the list is empty. Failures are logged only.
    fn persist(&self) {
        if !self.checklist.is_empty() {
            self.save();
        } else if let Err(e) = self.store.remove(CONDITIONS_KEY) {
            error!(error = %e, "failed to clear checklist");
        }
    }

    fn save(&self) {
        let result = self
            .checklist
            .to_json()
            .and_then(|json| self.store.set(CONDITIONS_KEY, &json));
        if let Err(e) = result {
            error!(error = %e, "failed to persist checklist");
        }
    }
}
