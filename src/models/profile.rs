use serde::{Deserialize, Serialize};

/// Account settings the engine reads. The balance seeds the equity curve; the
/// symbol is only used when printing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub initial_balance: f64,
    pub currency_symbol: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            initial_balance: 10_000.0,
            currency_symbol: "$".to_string(),
        }
    }
}
