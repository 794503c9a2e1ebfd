pub mod condition_status;
pub mod leverage;
pub mod number_format;
pub mod position;
pub mod trade_inputs;
