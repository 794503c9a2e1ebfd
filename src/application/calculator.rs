use crate::application::events::EventBus;
use crate::domain::error::{CalculationError, DomainError};
use crate::domain::ports::event_listener::{EventListener, SessionEvent};
use crate::domain::ports::key_value_store::{KeyValueStore, ENTRY_CAPITAL_KEY, TOTAL_CAPITAL_KEY};
use crate::domain::values::leverage::{self, Calculation, CalculationWarning};
use crate::domain::values::number_format::{format_number_string, parse_formatted_number};
use crate::domain::values::position::Position;
use crate::domain::values::trade_inputs::{InputField, TradeInputs};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Calculator form plus the outcome of the last calculation.
///
/// Total and entry capital are remembered across sessions; every other field starts from
/// its default.
pub struct CalculatorSession {
    store: Arc<dyn KeyValueStore>,
    events: EventBus,
    inputs: TradeInputs,
    calculation: Option<Calculation>,
    error: Option<CalculationError>,
}

impl CalculatorSession {
    pub fn load(store: Arc<dyn KeyValueStore>, events: EventBus) -> Self {
        let mut inputs = TradeInputs::default();
        if let Some(v) = Self::load_key(store.as_ref(), TOTAL_CAPITAL_KEY) {
            inputs.total_capital = v;
        }
        if let Some(v) = Self::load_key(store.as_ref(), ENTRY_CAPITAL_KEY) {
            inputs.entry_capital = v;
        }

        Self {
            store,
            events,
            inputs,
            calculation: None,
            error: None,
        }
    }

    fn load_key(store: &dyn KeyValueStore, key: &str) -> Option<String> {
        match store.get(key) {
            Ok(v) => v.filter(|s| !s.is_empty()),
            Err(e) => {
                warn!(key, error = %e, "failed to load calculator input, using default");
                None
            }
        }
    }

    pub fn subscribe(&mut self, listener: Arc<dyn EventListener>) {
        self.events.subscribe(listener);
    }

    pub fn inputs(&self) -> &TradeInputs {
        &self.inputs
    }

    pub fn calculation(&self) -> Option<&Calculation> {
        self.calculation.as_ref()
    }

    pub fn error(&self) -> Option<CalculationError> {
        self.error
    }

    pub fn warning(&self) -> Option<CalculationWarning> {
        self.calculation.as_ref().and_then(|c| c.warning)
    }

    pub fn set_total_capital(&mut self, value: &str) {
        self.inputs.total_capital = format_number_string(value);
        self.save(TOTAL_CAPITAL_KEY, &self.inputs.total_capital);
    }

    pub fn set_entry_capital(&mut self, value: &str) {
        self.inputs.entry_capital = format_number_string(value);
        self.save(ENTRY_CAPITAL_KEY, &self.inputs.entry_capital);
    }

    pub fn set_entry_price(&mut self, value: &str) {
        self.inputs.entry_price = format_number_string(value);
    }

    pub fn set_risk_percent(&mut self, value: &str) {
        self.inputs.risk_percent = value.trim().to_string();
    }

    pub fn set_leverage(&mut self, value: &str) {
        self.inputs.leverage = value.trim().to_string();
    }

    pub fn set_risk_reward_ratio(&mut self, value: &str) {
        self.inputs.risk_reward_ratio = value.trim().to_string();
    }

    pub fn set_fee_rate(&mut self, value: &str) {
        self.inputs.fee_rate = value.trim().to_string();
    }

    pub fn set_position(&mut self, position: Position) {
        self.inputs.position = position;
    }

    /// Commit one field by name. Only `position` can be rejected here; numeric fields are
    /// checked when calculating.
    pub fn set(&mut self, field: InputField, value: &str) -> Result<(), DomainError> {
        match field {
            InputField::TotalCapital => self.set_total_capital(value),
            InputField::EntryCapital => self.set_entry_capital(value),
            InputField::RiskPercent => self.set_risk_percent(value),
            InputField::EntryPrice => self.set_entry_price(value),
            InputField::Leverage => self.set_leverage(value),
            InputField::RiskRewardRatio => self.set_risk_reward_ratio(value),
            InputField::FeeRate => self.set_fee_rate(value),
            InputField::Position => {
                let position: Position = value.parse().map_err(DomainError::InvalidInput)?;
                self.set_position(position);
            }
        }
        Ok(())
    }

    /// Run the calculator on the current inputs, replacing any previous outcome.
    pub fn calculate(&mut self) -> Result<Calculation, CalculationError> {
        self.calculation = None;
        self.error = None;

        if let (Some(total), Some(entry)) = (
            parse_formatted_number(&self.inputs.total_capital),
            parse_formatted_number(&self.inputs.entry_capital),
        ) {
            if entry > total {
                debug!(total, entry, "entry capital exceeds total capital");
            }
        }

        match leverage::calculate(&self.inputs) {
            Ok(calc) => {
                debug!(
                    position = %self.inputs.position,
                    stop_loss = calc.result.stop_loss_price,
                    liquidation = calc.result.liquidation_price,
                    warning = calc.warning.is_some(),
                    "calculation completed"
                );
                self.calculation = Some(calc);
                self.events.publish(SessionEvent::CalculationCompleted(calc));
                Ok(calc)
            }
            Err(e) => {
                debug!(error = %e, "calculation rejected");
                self.error = Some(e);
                self.events.publish(SessionEvent::CalculationFailed { error: e });
                Err(e)
            }
        }
    }

    /// Restore every field to its default and drop the last outcome. The default capitals
    /// are persisted like any other capital change.
    pub fn reset(&mut self) {
        self.inputs = TradeInputs::default();
        self.calculation = None;
        self.error = None;
        self.save(TOTAL_CAPITAL_KEY, &self.inputs.total_capital);
        self.save(ENTRY_CAPITAL_KEY, &self.inputs.entry_capital);
        self.events.publish(SessionEvent::CalculatorReset);
    }

    fn save(&self, key: &str, value: &str) {
        if let Err(e) = self.store.set(key, value) {
            error!(key, error = %e, "failed to persist calculator input");
        }
    }
}
