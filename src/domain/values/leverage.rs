//! Fixed-leverage stop-loss calculator.
//!
//! Given the capital committed to one entry, the leverage, and the share of total capital the
//! trader accepts to lose, derives where the stop-loss has to sit so that hitting it loses
//! exactly that amount:
//!
//! - `max_loss = total_capital * risk% / 100`
//! - `quantity = entry_capital * leverage / entry_price`
//! - `loss_per_unit = max_loss / quantity`
//!
//! The target price sits `loss_per_unit * risk_reward_ratio` away from the entry in the
//! profitable direction. Fees are charged on notional value at entry and at exit.

use crate::domain::error::CalculationError;
use crate::domain::values::position::Position;
use crate::domain::values::trade_inputs::{TradeInputs, TradeParameters};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maintenance margin rate used for the liquidation estimate (0.5%).
pub const MAINTENANCE_MARGIN_RATE: f64 = 0.005;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub leverage: f64,
    pub quantity: f64,
    /// Largest position the entry capital supports at this leverage.
    pub max_quantity: f64,
    pub stop_loss_price: f64,
    pub risk_reward_target_price: f64,
    pub liquidation_price: f64,
    pub total_loss: f64,
    /// The configured risk percent, not re-derived from the stop distance.
    pub loss_rate: f64,
    /// Net of fees.
    pub profit_total: f64,
    pub profit_rate: f64,
    pub total_fee: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationWarning {
    /// Liquidation lies between the entry and the stop-loss.
    LiquidationBeforeStopLoss,
}

impl fmt::Display for CalculationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalculationWarning::LiquidationBeforeStopLoss => write!(
                f,
                "The position may be liquidated before the calculated stop-loss is reached. Adjust the leverage or the risk percent."
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    pub result: CalculationResult,
    pub warning: Option<CalculationWarning>,
}

/// Validate raw form inputs and run [`compute`].
pub fn calculate(inputs: &TradeInputs) -> Result<Calculation, CalculationError> {
    let params = inputs.validate()?;
    compute(&params)
}

/// Estimated forced-liquidation price for an isolated position.
pub fn liquidation_price(entry_price: f64, leverage: f64, position: Position) -> f64 {
    let maintenance = MAINTENANCE_MARGIN_RATE * leverage;
    match position {
        Position::Long => entry_price * leverage / (leverage + 1.0 - maintenance),
        Position::Short => entry_price * leverage / (leverage - 1.0 + maintenance),
    }
}

/// Derive stop-loss, liquidation, target and P&L figures from validated parameters.
///
/// Pure: identical parameters always give a bit-identical result.
pub fn compute(params: &TradeParameters) -> Result<Calculation, CalculationError> {
    let entry = params.entry_price;

    let max_loss = params.total_capital * (params.risk_percent / 100.0);
    let position_value = params.entry_capital * params.leverage;
    let quantity = position_value / entry;

    if !quantity.is_finite() || quantity <= 0.0 {
        return Err(CalculationError::UnresolvableQuantity);
    }

    let loss_per_unit = max_loss / quantity;
    let stop_loss_price = match params.position {
        Position::Long => entry - loss_per_unit,
        Position::Short => entry + loss_per_unit,
    };

    let liquidation = liquidation_price(entry, params.leverage, params.position);

    let gross_profit_per_unit = loss_per_unit * params.risk_reward_ratio;
    let risk_reward_target_price = match params.position {
        Position::Long => entry + gross_profit_per_unit,
        Position::Short => entry - gross_profit_per_unit,
    };

    let profit = (risk_reward_target_price - entry).abs() * quantity;
    let total_fee =
        (entry * quantity + risk_reward_target_price * quantity) * (params.fee_rate / 100.0);
    let profit_total = profit - total_fee;
    let profit_rate = (profit_total / params.total_capital) * 100.0;

    let liquidated_first = match params.position {
        Position::Long => liquidation > stop_loss_price,
        Position::Short => liquidation < stop_loss_price,
    };

    Ok(Calculation {
        result: CalculationResult {
            leverage: params.leverage,
            quantity,
            max_quantity: quantity,
            stop_loss_price,
            risk_reward_target_price,
            liquidation_price: liquidation,
            total_loss: max_loss,
            loss_rate: params.risk_percent,
            profit_total,
            profit_rate,
            total_fee,
        },
        warning: liquidated_first.then_some(CalculationWarning::LiquidationBeforeStopLoss),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    fn params(position: Position) -> TradeParameters {
        TradeParameters {
            total_capital: 10_000_000.0,
            entry_capital: 1_000_000.0,
            risk_percent: 1.0,
            entry_price: 100.0,
            leverage: 50.0,
            risk_reward_ratio: 1.5,
            fee_rate: 0.04,
            position,
        }
    }

    #[test]
    fn test_long_scenario() {
        let calc = compute(&params(Position::Long)).unwrap();
        let r = calc.result;

        assert!(approx(r.quantity, 500_000.0));
        assert!(approx(r.stop_loss_price, 99.8));
        assert!(approx(r.liquidation_price, 5000.0 / 50.75));
        assert!(approx(r.risk_reward_target_price, 100.3));
        assert!(approx(r.total_loss, 100_000.0));
        assert_eq!(r.loss_rate, 1.0);
        assert_eq!(r.max_quantity, r.quantity);
        assert_eq!(r.leverage, 50.0);

        // fee: (50,000,000 + 50,150,000) * 0.0004
        assert!(approx(r.total_fee, 40_060.0));
        assert!(approx(r.profit_total, 150_000.0 - 40_060.0));
        assert!(approx(r.profit_rate, 109_940.0 / 10_000_000.0 * 100.0));
        assert!(calc.warning.is_none());
    }

    #[test]
    fn test_short_scenario_mirrors_long() {
        let r = compute(&params(Position::Short)).unwrap().result;

        assert!(approx(r.stop_loss_price, 100.2));
        assert!(approx(r.risk_reward_target_price, 99.7));
        assert!(approx(r.liquidation_price, 5000.0 / 49.25));
        // fee: (50,000,000 + 49,850,000) * 0.0004
        assert!(approx(r.total_fee, 39_940.0));
        assert!(approx(r.profit_total, 150_000.0 - 39_940.0));
    }

    #[test]
    fn test_deterministic() {
        let p = params(Position::Long);
        let a = compute(&p).unwrap();
        let b = compute(&p).unwrap();
        assert_eq!(a.result.profit_total.to_bits(), b.result.profit_total.to_bits());
        assert_eq!(a.result.liquidation_price.to_bits(), b.result.liquidation_price.to_bits());
        assert_eq!(a, b);
    }

    #[test]
    fn test_long_warning_when_liquidation_above_stop() {
        // 10% risk at 100x: stop at 99, liquidation near 99.5
        let p = TradeParameters {
            risk_percent: 10.0,
            leverage: 100.0,
            ..params(Position::Long)
        };
        let calc = compute(&p).unwrap();
        assert!(calc.result.liquidation_price > calc.result.stop_loss_price);
        assert_eq!(calc.warning, Some(CalculationWarning::LiquidationBeforeStopLoss));
    }

    #[test]
    fn test_short_warning_when_liquidation_below_stop() {
        let p = TradeParameters {
            risk_percent: 10.0,
            leverage: 100.0,
            ..params(Position::Short)
        };
        let calc = compute(&p).unwrap();
        assert!(calc.result.liquidation_price < calc.result.stop_loss_price);
        assert_eq!(calc.warning, Some(CalculationWarning::LiquidationBeforeStopLoss));
    }

    #[test]
    fn test_zero_fee_means_gross_profit() {
        let p = TradeParameters {
            fee_rate: 0.0,
            ..params(Position::Long)
        };
        let r = compute(&p).unwrap().result;
        assert_eq!(r.total_fee, 0.0);
        assert!(approx(r.profit_total, 150_000.0));
    }

    #[test]
    fn test_underflowing_quantity_is_unresolvable() {
        let p = TradeParameters {
            entry_capital: 1e-300,
            leverage: 1e-10,
            entry_price: 1e300,
            ..params(Position::Long)
        };
        assert_eq!(compute(&p), Err(CalculationError::UnresolvableQuantity));
    }

    #[test]
    fn test_overflowing_quantity_is_unresolvable() {
        let p = TradeParameters {
            entry_capital: 1e300,
            leverage: 1e300,
            ..params(Position::Long)
        };
        assert_eq!(compute(&p), Err(CalculationError::UnresolvableQuantity));
    }

    #[test]
    fn test_calculate_rejects_zero_leverage() {
        let inputs = TradeInputs {
            entry_price: "100".into(),
            leverage: "0".into(),
            ..TradeInputs::default()
        };
        assert_eq!(calculate(&inputs), Err(CalculationError::InvalidPositiveInput));
    }
}
