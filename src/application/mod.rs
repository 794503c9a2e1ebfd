pub mod calculator;
pub mod checklist;
pub mod events;
