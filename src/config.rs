use std::net::SocketAddr;

use anyhow::{Context, Result};

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
const DEFAULT_LOG_FILTER: &str = "petsy=info,tower_http=info";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log_filter: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let bind_addr = env_string("PETSY_BIND_ADDR", DEFAULT_BIND_ADDR)
            .parse::<SocketAddr>()
            .context("PETSY_BIND_ADDR must be a valid host:port")?;

        let log_filter = env_string("PETSY_LOG", DEFAULT_LOG_FILTER);

        Ok(Self {
            bind_addr,
            log_filter,
        })
    }
}

fn env_string(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
