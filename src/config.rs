use crate::constants::{DEFAULT_CURRENCY_SYMBOL, DEFAULT_SNAPSHOT_TTL_SECS};
use crate::core::models::PayerPolicy;
use dotenv::dotenv;
use once_cell::sync::Lazy;
use std::env;

#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub log_level: String,
    pub payer_policy: PayerPolicy,
    pub currency_symbol: String,
    pub snapshot_ttl_secs: u64,
}

impl Config {
    fn from_env() -> Self {
        dotenv().ok();

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            payer_policy: env::var("PAYER_POLICY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            currency_symbol: env::var("CURRENCY_SYMBOL")
                .unwrap_or_else(|_| DEFAULT_CURRENCY_SYMBOL.to_string()),
            snapshot_ttl_secs: env::var("SNAPSHOT_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SNAPSHOT_TTL_SECS),
        }
    }
}

// Global static accessible everywhere
pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);
