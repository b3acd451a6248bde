use std::net::SocketAddr;
use std::path::PathBuf;

use taipower_cpi::config as store_config;

pub const DEFAULT_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_PUBLIC_DIR: &str = "public";

/// Server settings, read from `CPI_*` environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub database: PathBuf,
    pub fixture: PathBuf,
    pub public_dir: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys use defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr_raw = lookup("CPI_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_raw
            .parse()
            .map_err(|e| format!("invalid CPI_ADDR '{addr_raw}': {e}"))?;

        Ok(Self {
            addr,
            database: lookup("CPI_DATABASE")
                .map(PathBuf::from)
                .unwrap_or_else(store_config::default_database_path),
            fixture: lookup("CPI_FIXTURE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(store_config::FIXTURE_FILE)),
            public_dir: lookup("CPI_PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PUBLIC_DIR)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = ServerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(cfg.addr.port(), 3000);
        assert_eq!(cfg.public_dir, PathBuf::from("public"));
        assert_eq!(cfg.fixture, PathBuf::from(store_config::FIXTURE_FILE));
    }

    #[test]
    fn overrides_are_read() {
        let env = HashMap::from([
            ("CPI_ADDR", "127.0.0.1:8080"),
            ("CPI_DATABASE", "/tmp/cpi.duckdb"),
        ]);
        let cfg = ServerConfig::from_lookup(|k| env.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(cfg.addr.to_string(), "127.0.0.1:8080");
        assert_eq!(cfg.database, PathBuf::from("/tmp/cpi.duckdb"));
    }

    #[test]
    fn bad_address_is_rejected() {
        let err = ServerConfig::from_lookup(|k| (k == "CPI_ADDR").then(|| "nope".to_string()))
            .unwrap_err();
        assert!(err.contains("CPI_ADDR"));
    }
}
