pub mod checklist;
pub mod condition;
