// src/infrastructure/config.rs
use anyhow::{Context, Result};
use std::env;

pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
pub const PORT_VAR: &str = "PORT";
pub const DEFAULT_PORT: u16 = 5000;

/// Browser origins allowed to call the card API.
pub const ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:5173",
    "https://cardboard-panels.netlify.app",
];

/// Server configuration, read from the process environment at startup.
/// A missing store location is fatal; the port falls back to 5000.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        let database_url = env::var(DATABASE_URL_VAR).with_context(|| {
            format!("{DATABASE_URL_VAR} must point at the card store database")
        })?;
        let port = match env::var(PORT_VAR) {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("Invalid {PORT_VAR} value: {raw}"))?,
            Err(_) => DEFAULT_PORT,
        };
        Ok(Self { database_url, port })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test covers all cases; parallel tests must not race on the
    // process environment.
    #[test]
    fn given_environment_when_reading_config_then_follows_env_contract() {
        env::remove_var(DATABASE_URL_VAR);
        env::remove_var(PORT_VAR);
        assert!(ServerConfig::from_env().is_err(), "missing store URL is fatal");

        env::set_var(DATABASE_URL_VAR, "/tmp/cards.db");
        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.database_url, "/tmp/cards.db");
        assert_eq!(config.port, DEFAULT_PORT);

        env::set_var(PORT_VAR, "8080");
        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.port, 8080);

        env::set_var(PORT_VAR, "not-a-port");
        assert!(ServerConfig::from_env().is_err());

        env::remove_var(DATABASE_URL_VAR);
        env::remove_var(PORT_VAR);
    }
}
