use crate::error::{Result, ServerError};
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub upstream_base_url: String,
    pub upstream_timeout: Duration,
    pub persist_timeout: Duration,
    pub database_path: String,
    pub max_connections: u32,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let upstream_base_url = env::var("UPSTREAM_BASE_URL")
            .unwrap_or_else(|_| "https://economia.awesomeapi.com.br/json/last".to_string());

        let upstream_timeout_ms = env::var("UPSTREAM_TIMEOUT_MS")
            .unwrap_or_else(|_| "200".to_string())
            .parse::<u64>()
            .map_err(|_| ServerError::Config("Invalid UPSTREAM_TIMEOUT_MS".to_string()))?;

        // Deliberately tight next to typical disk-write latency; hitting it
        // under load is an expected failure mode.
        let persist_timeout_ms = env::var("PERSIST_TIMEOUT_MS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u64>()
            .map_err(|_| ServerError::Config("Invalid PERSIST_TIMEOUT_MS".to_string()))?;

        let database_path =
            env::var("SQLITE_DB_PATH").unwrap_or_else(|_| "cotacao.db".to_string());

        let max_connections = env::var("MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u32>()
            .map_err(|_| ServerError::Config("Invalid MAX_CONNECTIONS".to_string()))?;

        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .map_err(|_| ServerError::Config("Invalid PORT".to_string()))?;

        Ok(Self {
            upstream_base_url,
            upstream_timeout: Duration::from_millis(upstream_timeout_ms),
            persist_timeout: Duration::from_millis(persist_timeout_ms),
            database_path,
            max_connections,
            port,
        })
    }
}
