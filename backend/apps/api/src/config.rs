//! Server configuration from the environment
//!
//! `.env` is loaded by `main` before this runs.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, bail};
use auth::{AdminSeed, AuthConfig};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:9090";
const DEFAULT_TOKEN_TTL_SECS: u64 = 86_400;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

#[derive(Debug)]
pub struct ApiConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    pub frontend_origins: Vec<String>,
    pub auth: AuthConfig,
    pub admin: Option<AdminSeed>,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok(), cfg!(debug_assertions))
    }

    /// `lookup` returns the raw value of a variable; empty counts as unset.
    /// Without `TOKEN_SECRET`, debug builds sign with a random secret and
    /// release builds refuse to start.
    pub fn from_lookup<F>(lookup: F, debug: bool) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let bind_addr = var("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .context("BIND_ADDR must be a socket address like 0.0.0.0:9090")?;

        let max_connections = match var("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?,
            None => DEFAULT_MAX_CONNECTIONS,
        };
        if max_connections == 0 {
            bail!("DATABASE_MAX_CONNECTIONS must be greater than zero");
        }

        let token_ttl = match var("TOKEN_TTL_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .context("TOKEN_TTL_SECS must be a number of seconds")?,
            None => DEFAULT_TOKEN_TTL_SECS,
        };
        if token_ttl == 0 {
            bail!("TOKEN_TTL_SECS must be greater than zero");
        }

        let auth = match var("TOKEN_SECRET") {
            Some(secret) => AuthConfig::with_secret(secret.into_bytes()),
            None if debug => AuthConfig::development(),
            None => bail!("TOKEN_SECRET must be set in release builds"),
        }
        .with_ttl(Duration::from_secs(token_ttl));

        let frontend_origins = var("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let admin = match (
            var("ADMIN_USERNAME"),
            var("ADMIN_EMAIL"),
            var("ADMIN_PASSWORD"),
        ) {
            (Some(username), Some(email), Some(password)) => Some(AdminSeed {
                username,
                email,
                password,
            }),
            (None, None, None) => None,
            _ => bail!("ADMIN_USERNAME, ADMIN_EMAIL and ADMIN_PASSWORD must be set together"),
        };

        Ok(Self {
            database_url,
            bind_addr,
            max_connections,
            frontend_origins,
            auth,
            admin,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)], debug: bool) -> anyhow::Result<ApiConfig> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::from_lookup(|key| map.get(key).cloned(), debug)
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("DATABASE_URL", "postgres://localhost/market")], true).unwrap();
        assert_eq!(config.bind_addr.to_string(), "0.0.0.0:9090");
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.auth.token_ttl, Duration::from_secs(86_400));
        assert!(!config.auth.uses_default_secret());
        assert_eq!(config.frontend_origins.len(), 2);
        assert!(config.admin.is_none());
    }

    #[test]
    fn test_explicit_values() {
        let config = load(
            &[
                ("DATABASE_URL", "postgres://db/market"),
                ("BIND_ADDR", "127.0.0.1:8080"),
                ("TOKEN_SECRET", "s3cret"),
                ("TOKEN_TTL_SECS", "60"),
                ("DATABASE_MAX_CONNECTIONS", "12"),
                ("FRONTEND_ORIGINS", "https://shop.example.com, ,https://admin.example.com"),
                ("ADMIN_USERNAME", "admin"),
                ("ADMIN_EMAIL", "admin@example.com"),
                ("ADMIN_PASSWORD", "changeme"),
            ],
            false,
        )
        .unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.auth.token_secret, b"s3cret".to_vec());
        assert_eq!(config.auth.token_ttl, Duration::from_secs(60));
        assert_eq!(config.max_connections, 12);
        assert_eq!(
            config.frontend_origins,
            ["https://shop.example.com", "https://admin.example.com"]
        );
        assert_eq!(config.admin.unwrap().email, "admin@example.com");
    }

    #[test]
    fn test_errors() {
        assert!(load(&[], true).is_err());
        assert!(load(&[("DATABASE_URL", "postgres://db")], false).is_err());
        assert!(load(&[("DATABASE_URL", "postgres://db"), ("BIND_ADDR", "nope")], true).is_err());
        assert!(load(&[("DATABASE_URL", "postgres://db"), ("TOKEN_TTL_SECS", "0")], true).is_err());
        assert!(
            load(&[("DATABASE_URL", "postgres://db"), ("DATABASE_MAX_CONNECTIONS", "0")], true)
                .is_err()
        );
        assert!(
            load(&[("DATABASE_URL", "postgres://db"), ("DATABASE_MAX_CONNECTIONS", "-1")], true)
                .is_err()
        );
        assert!(load(&[("DATABASE_URL", "postgres://db"), ("ADMIN_EMAIL", "a@b")], true).is_err());
    }
}
