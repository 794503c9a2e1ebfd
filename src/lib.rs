pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::calculator::CalculatorSession;
use crate::application::checklist::ChecklistSession;
use crate::application::events::EventBus;
use crate::config::AppConfig;
use crate::domain::entities::condition::Condition;
use crate::domain::error::{CalculationError, DomainError};
use crate::domain::ports::event_listener::EventListener;
use crate::domain::ports::key_value_store::KeyValueStore;
use crate::domain::values::condition_status::ConditionStatus;
use crate::domain::values::leverage::Calculation;
use crate::domain::values::trade_inputs::{InputField, TradeInputs};
use crate::infrastructure::sqlite::kv_store::SqliteKeyValueStore;
use std::sync::Arc;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global tracing subscriber. Logs go to stderr so command output stays clean.
pub fn setup_logging(config: &AppConfig) {
    let env_filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER));

    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Checklist and leverage calculator for one user. The calculator stays locked until every
/// checklist condition is satisfied.
pub struct TradeCheck {
    checklist: ChecklistSession,
    calculator: CalculatorSession,
}

impl TradeCheck {
    pub fn new(db_path: &str) -> Result<Self, DomainError> {
        let store: Arc<dyn KeyValueStore> = Arc::new(SqliteKeyValueStore::open(db_path)?);
        Ok(Self::with_store(store))
    }

    pub fn with_store(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            checklist: ChecklistSession::load(store.clone(), EventBus::new()),
            calculator: CalculatorSession::load(store, EventBus::new()),
        }
    }

    pub fn subscribe(&mut self, listener: Arc<dyn EventListener>) {
        self.checklist.subscribe(listener.clone());
        self.calculator.subscribe(listener);
    }

    // Checklist

    pub fn conditions(&self) -> &[Condition] {
        self.checklist.conditions()
    }

    pub fn condition(&self, id: u64) -> Result<&Condition, DomainError> {
        self.checklist
            .checklist()
            .get(id)
            .ok_or_else(|| DomainError::NotFound(format!("Condition #{id}")))
    }

    pub fn add_condition(&mut self) -> Condition {
        self.checklist.add()
    }

    pub fn update_condition(
        &mut self,
        id: u64,
        description: String,
        details: String,
        status: ConditionStatus,
    ) -> bool {
        self.checklist.update(id, description, details, status)
    }

    pub fn remove_condition(&mut self, id: u64) -> Option<Condition> {
        self.checklist.remove(id)
    }

    pub fn all_satisfied(&self) -> bool {
        self.checklist.all_satisfied()
    }

    pub fn satisfied_count(&self) -> usize {
        self.checklist.satisfied_count()
    }

    pub fn condition_count(&self) -> usize {
        self.checklist.checklist().len()
    }

    // Calculator

    pub fn inputs(&self) -> &TradeInputs {
        self.calculator.inputs()
    }

    pub fn last_calculation(&self) -> Option<&Calculation> {
        self.calculator.calculation()
    }

    pub fn last_error(&self) -> Option<CalculationError> {
        self.calculator.error()
    }

    pub fn set_input(&mut self, field: InputField, value: &str) -> Result<(), DomainError> {
        self.ensure_unlocked()?;
        self.calculator.set(field, value)
    }

    pub fn calculate(&mut self) -> Result<Calculation, DomainError> {
        self.ensure_unlocked()?;
        Ok(self.calculator.calculate()?)
    }

    pub fn reset_calculator(&mut self) -> Result<(), DomainError> {
        self.ensure_unlocked()?;
        self.calculator.reset();
        Ok(())
    }

    fn ensure_unlocked(&self) -> Result<(), DomainError> {
        if self.all_satisfied() {
            return Ok(());
        }
        Err(DomainError::CalculatorLocked {
            satisfied: self.satisfied_count(),
            total: self.condition_count(),
        })
    }
}
