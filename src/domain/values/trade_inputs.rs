use crate::domain::error::CalculationError;
use crate::domain::values::number_format::{parse_formatted_number, parse_plain_number};
use crate::domain::values::position::Position;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_TOTAL_CAPITAL: &str = "10,000,000";
pub const DEFAULT_ENTRY_CAPITAL: &str = "1,000,000";
pub const DEFAULT_RISK_PERCENT: &str = "1";
pub const DEFAULT_LEVERAGE: &str = "50";
pub const DEFAULT_RISK_REWARD_RATIO: &str = "1.5";
pub const DEFAULT_FEE_RATE: &str = "0.04";

/// Calculator form state, one string per field as the user entered it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeInputs {
    pub total_capital: String,
    pub entry_capital: String,
    pub risk_percent: String,
    pub entry_price: String,
    pub leverage: String,
    pub risk_reward_ratio: String,
    pub fee_rate: String,
    pub position: Position,
}

impl Default for TradeInputs {
    fn default() -> Self {
        Self {
            total_capital: DEFAULT_TOTAL_CAPITAL.to_string(),
            entry_capital: DEFAULT_ENTRY_CAPITAL.to_string(),
            risk_percent: DEFAULT_RISK_PERCENT.to_string(),
            entry_price: String::new(),
            leverage: DEFAULT_LEVERAGE.to_string(),
            risk_reward_ratio: DEFAULT_RISK_REWARD_RATIO.to_string(),
            fee_rate: DEFAULT_FEE_RATE.to_string(),
            position: Position::Long,
        }
    }
}

/// A single calculator form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    TotalCapital,
    EntryCapital,
    RiskPercent,
    EntryPrice,
    Leverage,
    RiskRewardRatio,
    FeeRate,
    Position,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputField::TotalCapital => "total-capital",
            InputField::EntryCapital => "entry-capital",
            InputField::RiskPercent => "risk-percent",
            InputField::EntryPrice => "entry-price",
            InputField::Leverage => "leverage",
            InputField::RiskRewardRatio => "risk-reward-ratio",
            InputField::FeeRate => "fee-rate",
            InputField::Position => "position",
        };
        write!(f, "{name}")
    }
}

impl FromStr for InputField {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "total-capital" => Ok(InputField::TotalCapital),
            "entry-capital" => Ok(InputField::EntryCapital),
            "risk-percent" | "risk" => Ok(InputField::RiskPercent),
            "entry-price" | "entry" => Ok(InputField::EntryPrice),
            "leverage" => Ok(InputField::Leverage),
            "risk-reward-ratio" | "rr" => Ok(InputField::RiskRewardRatio),
            "fee-rate" | "fee" => Ok(InputField::FeeRate),
            "position" => Ok(InputField::Position),
            _ => Err(format!("Unknown input field: {s}")),
        }
    }
}

/// Validated numeric trade parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeParameters {
    pub total_capital: f64,
    pub entry_capital: f64,
    pub risk_percent: f64,
    pub entry_price: f64,
    pub leverage: f64,
    pub risk_reward_ratio: f64,
    pub fee_rate: f64,
    pub position: Position,
}

impl TradeInputs {
    /// Parse and check every field. The first failing rule is returned.
    ///
    /// Capitals and entry price may carry `,` separators; the other fields are plain numbers.
    /// Unparsable values count as 0 for the positivity check, so they fail with
    /// [`CalculationError::InvalidPositiveInput`]. The fee rate may be zero or negative but
    /// has to parse.
    pub fn validate(&self) -> Result<TradeParameters, CalculationError> {
        let amount = |s: &str| parse_formatted_number(s).unwrap_or(0.0);
        let plain = |s: &str| parse_plain_number(s).unwrap_or(0.0);

        let total_capital = amount(&self.total_capital);
        let entry_capital = amount(&self.entry_capital);
        let risk_percent = plain(&self.risk_percent);
        let entry_price = amount(&self.entry_price);
        let leverage = plain(&self.leverage);

        if [total_capital, entry_capital, risk_percent, entry_price, leverage]
            .iter()
            .any(|v| *v <= 0.0)
        {
            return Err(CalculationError::InvalidPositiveInput);
        }

        let risk_reward_ratio = match parse_plain_number(&self.risk_reward_ratio) {
            Some(rr) if rr > 0.0 => rr,
            _ => return Err(CalculationError::InvalidRiskRewardRatio),
        };

        let fee_rate =
            parse_plain_number(&self.fee_rate).ok_or(CalculationError::InvalidFeeRate)?;

        Ok(TradeParameters {
            total_capital,
            entry_capital,
            risk_percent,
            entry_price,
            leverage,
            risk_reward_ratio,
            fee_rate,
            position: self.position,
        })
    }
}
