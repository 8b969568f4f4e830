use serde::{Deserialize, Serialize};

use crate::core::currency_strength::DEFAULT_TOP_N;
use crate::models::Profile;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Account
    pub initial_balance: f64,
    pub currency_symbol: String,

    // Reporting
    pub strength_top_n: usize,
    pub trades_file: String,

    // Logging
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let env = |key: &str, default: &str| -> String {
            std::env::var(key).unwrap_or_else(|_| default.to_string())
        };

        Config {
            initial_balance: env("INITIAL_BALANCE", "10000")
                .parse()
                .unwrap_or(10_000.0),
            currency_symbol: env("CURRENCY_SYMBOL", "$"),
            strength_top_n: env("STRENGTH_TOP_N", "8")
                .parse()
                .unwrap_or(DEFAULT_TOP_N),
            trades_file: env("TRADES_FILE", "trades.json"),
            log_level: env("LOG_LEVEL", "info"),
        }
    }

    pub fn profile(&self) -> Profile {
        Profile {
            initial_balance: self.initial_balance,
            currency_symbol: self.currency_symbol.clone(),
        }
    }
}
