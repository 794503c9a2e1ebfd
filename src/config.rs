/// Runtime settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `TRADECHECK_DB`, default `./tradecheck.db`.
    pub db_path: String,
    /// `TRADECHECK_LOG`, falling back to `RUST_LOG`, then `warn`.
    pub log_filter: String,
}

pub const DEFAULT_DB_PATH: &str = "./tradecheck.db";
pub const DEFAULT_LOG_FILTER: &str = "warn";

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            db_path: non_empty("TRADECHECK_DB").unwrap_or_else(|| DEFAULT_DB_PATH.into()),
            log_filter: non_empty("TRADECHECK_LOG")
                .or_else(|| non_empty("RUST_LOG"))
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.into()),
        }
    }
}
