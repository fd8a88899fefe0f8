//! Server configuration from the environment

use std::env;
use convertix_core::{DEFAULT_DECIMALS, MAX_DECIMALS};
use tracing::warn;

/// Display decimals for rendered results
pub const DECIMALS_VAR: &str = "CONVERTIX_DECIMALS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub decimals: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { decimals: DEFAULT_DECIMALS }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Bad values fall back to the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let decimals = match lookup(DECIMALS_VAR) {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) => n.min(MAX_DECIMALS),
                Err(_) => {
                    warn!(value = %raw, "ignoring invalid {}", DECIMALS_VAR);
                    DEFAULT_DECIMALS
                }
            },
            None => DEFAULT_DECIMALS,
        };

        Self { decimals }
    }
}
