use std::env;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a number, got {value:?}")]
    NotANumber { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Reads the process environment, after loading `.env` if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| "sqlite://events.db".to_string());
        let max_connections = parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 5)?;
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_or(&lookup, "PORT", 3000)?;
        Ok(Config {
            database_url,
            max_connections,
            host,
            port,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::NotANumber { name, value }),
    }
}
