use crate::domain::error::CalculationError;
use crate::domain::values::leverage::Calculation;
use serde::Serialize;

/// State changes published by the sessions so a view layer can re-render.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    ChecklistChanged {
        satisfied: usize,
        total: usize,
        all_satisfied: bool,
    },
    CalculationCompleted(Calculation),
    CalculationFailed { error: CalculationError },
    CalculatorReset,
}

pub trait EventListener: Send + Sync {
    fn on_event(&self, event: &SessionEvent);
}
