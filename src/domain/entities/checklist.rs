use crate::domain::entities::condition::Condition;
use crate::domain::error::DomainError;
use crate::domain::values::condition_status::ConditionStatus;
use serde::{Deserialize, Serialize};

/// Seed used when no checklist has been saved yet, or the saved one is unreadable.
pub const DEFAULT_CONDITIONS: &[&str] = &[
    "Higher timeframe trend confirmed",
    "Entry at a key support/resistance level",
    "Volume confirms the move",
    "Stop-loss level decided before entry",
    "Risk/reward ratio is at least 1.5",
    "No major news event scheduled",
];

/// Ordered entry conditions. Order is insertion order and survives removals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Checklist {
    conditions: Vec<Condition>,
}

impl Checklist {
    /// One unsatisfied condition per description, ids 1..=N in order.
    pub fn seeded(descriptions: &[&str]) -> Self {
        Self {
            conditions: descriptions
                .iter()
                .enumerate()
                .map(|(i, desc)| Condition::new(i as u64 + 1, *desc))
                .collect(),
        }
    }

    pub fn with_defaults() -> Self {
        Self::seeded(DEFAULT_CONDITIONS)
    }

    /// Decode the stored JSON array. Records without `details` get an empty string.
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        serde_json::from_str(json)
            .map_err(|e| DomainError::Parse(format!("Invalid checklist JSON: {e}")))
    }

    pub fn to_json(&self) -> Result<String, DomainError> {
        serde_json::to_string(self)
            .map_err(|e| DomainError::Parse(format!("Failed to encode checklist: {e}")))
    }

    pub fn next_id(&self) -> u64 {
        self.conditions.iter().map(|c| c.id).max().map_or(1, |max| max + 1)
    }

    pub fn add(&mut self) -> &Condition {
        let condition = Condition::new(self.next_id(), "");
        self.conditions.push(condition);
        &self.conditions[self.conditions.len() - 1]
    }

    /// Returns `false` when no condition has this id.
    pub fn update(
        &mut self,
        id: u64,
        description: String,
        details: String,
        status: ConditionStatus,
    ) -> bool {
        match self.conditions.iter_mut().find(|c| c.id == id) {
            Some(c) => {
                c.description = description;
                c.details = details;
                c.status = status;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: u64) -> Option<Condition> {
        let idx = self.conditions.iter().position(|c| c.id == id)?;
        Some(self.conditions.remove(idx))
    }

    pub fn get(&self, id: u64) -> Option<&Condition> {
        self.conditions.iter().find(|c| c.id == id)
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn satisfied_count(&self) -> usize {
        self.conditions.iter().filter(|c| c.is_satisfied()).count()
    }

    /// False for an empty checklist.
    pub fn all_satisfied(&self) -> bool {
        !self.conditions.is_empty() && self.conditions.iter().all(|c| c.is_satisfied())
    }
}
