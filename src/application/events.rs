use crate::domain::ports::event_listener::{EventListener, SessionEvent};
use std::sync::Arc;

/// Fan-out of session events to every subscribed listener, in subscription order.
#[derive(Clone, Default)]
pub struct EventBus {
    listeners: Vec<Arc<dyn EventListener>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: Arc<dyn EventListener>) {
        self.listeners.push(listener);
    }

    pub fn publish(&self, event: SessionEvent) {
        tracing::trace!(?event, listeners = self.listeners.len(), "publishing session event");
        for listener in &self.listeners {
            listener.on_event(&event);
        }
    }
}
