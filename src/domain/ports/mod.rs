pub mod event_listener;
pub mod key_value_store;
