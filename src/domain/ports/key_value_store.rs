use crate::domain::error::DomainError;

pub const CONDITIONS_KEY: &str = "conditions";
pub const TOTAL_CAPITAL_KEY: &str = "totalCapital";
pub const ENTRY_CAPITAL_KEY: &str = "entryCapital";

/// String key-value persistence. Values are replaced whole, never patched.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError>;
    fn set(&self, key: &str, value: &str) -> Result<(), DomainError>;
    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), DomainError>;
}
