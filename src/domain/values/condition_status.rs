use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stored as the literal codes `O` and `X` so previously saved checklists keep loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConditionStatus {
    #[serde(rename = "O")]
    Satisfied,
    #[serde(rename = "X")]
    #[default]
    Unsatisfied,
}

impl ConditionStatus {
    pub fn is_satisfied(&self) -> bool {
        matches!(self, ConditionStatus::Satisfied)
    }

    pub fn toggled(self) -> Self {
        match self {
            ConditionStatus::Satisfied => ConditionStatus::Unsatisfied,
            ConditionStatus::Unsatisfied => ConditionStatus::Satisfied,
        }
    }
}

impl fmt::Display for ConditionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConditionStatus::Satisfied => write!(f, "O"),
            ConditionStatus::Unsatisfied => write!(f, "X"),
        }
    }
}

impl FromStr for ConditionStatus {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "o" | "satisfied" | "yes" => Ok(ConditionStatus::Satisfied),
            "x" | "unsatisfied" | "no" => Ok(ConditionStatus::Unsatisfied),
            _ => Err(format!("Unknown condition status: {s}")),
        }
    }
}
