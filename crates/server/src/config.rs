use linknest_core::CoreError;
use std::env;
use std::net::SocketAddr;

/// Server configuration, read from the environment.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, CoreError> {
        let raw = env::var("LINKNEST_ADDR").unwrap_or_else(|_| "127.0.0.1:3001".to_string());
        let bind_addr = raw.parse().map_err(|_| {
            CoreError::Config(format!("LINKNEST_ADDR is not a valid socket address: {raw}"))
        })?;
        Ok(Self { bind_addr })
    }
}
