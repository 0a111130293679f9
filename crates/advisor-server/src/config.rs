//! Server Configuration

use std::net::SocketAddr;

/// Runtime settings read from the environment
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Address to listen on
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
        }
    }
}

impl ServerConfig {
    /// Read `BIND_ADDR`, falling back to `0.0.0.0:3000`
    pub fn from_env() -> Self {
        let default = Self::default();
        let bind_addr = match std::env::var("BIND_ADDR") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("Ignoring unparseable BIND_ADDR {:?}", raw);
                default.bind_addr
            }),
            Err(_) => default.bind_addr,
        };

        Self { bind_addr }
    }
}
