use std::env;
use std::net::SocketAddr;

use anyhow::{Context, anyhow};

type Result<T> = anyhow::Result<T>;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub bind_address: SocketAddr,
}

impl ServerConfig {
    /// Reads `DATABASE_URL` (required) and `BIND_ADDRESS` from the process
    /// environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let database_url = lookup("DATABASE_URL")
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| anyhow!("DATABASE_URL is not set"))?;

        let raw_address =
            lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = raw_address
            .parse()
            .with_context(|| format!("invalid BIND_ADDRESS: {raw_address}"))?;

        Ok(Self {
            database_url,
            bind_address,
        })
    }
}
