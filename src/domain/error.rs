use serde::Serialize;
use thiserror::Error;

/// Validation failures of the leverage calculator. Only the first failing rule is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Error)]
#[serde(rename_all = "snake_case")]
pub enum CalculationError {
    #[error("Total capital, entry capital, risk percent, entry price and leverage must be greater than 0.")]
    InvalidPositiveInput,

    #[error("Risk/reward ratio must be greater than 0.")]
    InvalidRiskRewardRatio,

    #[error("Enter a fee rate.")]
    InvalidFeeRate,

    #[error("Cannot resolve a position quantity. Check the inputs.")]
    UnresolvableQuantity,
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Calculator is locked: {satisfied} / {total} conditions satisfied")]
    CalculatorLocked { satisfied: usize, total: usize },

    #[error(transparent)]
    Calculation(#[from] CalculationError),
}
