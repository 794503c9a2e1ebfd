use crate::domain::values::condition_status::ConditionStatus;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub id: u64,
    pub description: String,
    /// Absent in checklists saved before details existed.
    #[serde(default)]
    pub details: String,
    pub status: ConditionStatus,
}

impl Condition {
    pub fn new(id: u64, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            details: String::new(),
            status: ConditionStatus::Unsatisfied,
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.status.is_satisfied()
    }
}
