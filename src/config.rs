use std::env;

use thiserror::Error;

/// Runtime configuration, read once at startup from the environment
/// (a `.env` file is honored when present).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_path: String,
    pub hash_secret: String,
    pub log_filter: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("APP_PORT must be a valid port number")]
    InvalidPort,
    #[error("HASH_SECRET must be set")]
    MissingHashSecret,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;
        let database_path =
            env::var("DATABASE_PATH").unwrap_or_else(|_| "jobboard.db".to_string());
        let hash_secret = env::var("HASH_SECRET").map_err(|_| ConfigError::MissingHashSecret)?;
        let log_filter = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            host,
            port,
            database_path,
            hash_secret,
            log_filter,
        })
    }
}
