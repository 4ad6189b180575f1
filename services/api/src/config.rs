use std::net::SocketAddr;

use anyhow::Result;

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let listen_addr = std::env::var("IDSTEM_LISTEN_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()?;

        let log_level = std::env::var("IDSTEM_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            listen_addr,
            log_level,
        })
    }
}
