//! Indexer configuration, read from the environment (and `.env`).

use std::str::FromStr;

use crate::errors::{IndexerError, Result};

#[derive(Debug, Clone)]
pub struct Config {
    /// Soroban RPC endpoint.
    pub rpc_url: String,
    /// Condominium implementation contract (strkey).
    pub contract_id: String,
    /// Adapter contract whose `upgraded` events are indexed as well.
    pub adapter_id: Option<String>,
    pub database_url: String,
    pub api_port: u16,
    pub poll_interval_secs: u64,
    /// Page size of each `getEvents` request.
    pub events_per_page: u32,
    /// Ledger to start from when no cursor is stored.
    pub start_ledger: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Config {
            rpc_url: env_var("RPC_URL")
                .unwrap_or_else(|_| "https://soroban-testnet.stellar.org".to_string()),
            contract_id: env_var("CONTRACT_ID").map_err(|_| {
                IndexerError::Config("CONTRACT_ID environment variable is required".to_string())
            })?,
            adapter_id: env_var("ADAPTER_ID").ok().filter(|id| !id.is_empty()),
            database_url: env_var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:./condominium_events.db".to_string()),
            api_port: parsed("API_PORT", 3001)?,
            poll_interval_secs: parsed("POLL_INTERVAL_SECS", 5)?,
            events_per_page: parsed("EVENTS_PER_PAGE", 100)?,
            start_ledger: parsed("START_LEDGER", 0)?,
        })
    }

    /// Contracts whose events are requested from the RPC.
    pub fn watched_contracts(&self) -> Vec<String> {
        let mut ids = vec![self.contract_id.clone()];
        ids.extend(self.adapter_id.iter().cloned());
        ids
    }
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| IndexerError::Config(format!("Missing env var: {key}")))
}

fn parsed<T: FromStr>(key: &str, default: T) -> Result<T> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| IndexerError::Config(format!("Invalid {key}: {raw}"))),
        Err(_) => Ok(default),
    }
}
