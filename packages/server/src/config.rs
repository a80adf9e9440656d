use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::Path;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_issuer: String,
    pub database_max_connections: u32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();
        Self::read_env()
    }

    /// Load an instance file written by `clan-provision`, then the environment.
    ///
    /// Variables already set in the environment win over the file.
    pub fn from_file(path: &Path) -> Result<Self> {
        dotenvy::from_path(path)
            .with_context(|| format!("Failed to load config file {}", path.display()))?;
        Self::read_env()
    }

    fn read_env() -> Result<Self> {
        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            jwt_secret: env::var("JWT_SECRET").context("JWT_SECRET must be set")?,
            jwt_issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| "clan-server".to_string()),
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a valid number")?,
        })
    }

    /// Render an instance file for `Config::from_file`.
    pub fn instance_file(name: &str, database_url: &str, jwt_secret: &str) -> String {
        format!(
            "# clan-server instance '{name}'\n\
             DATABASE_URL={database_url}\n\
             JWT_SECRET={jwt_secret}\n\
             JWT_ISSUER=clan-{name}\n\
             PORT=8080\n"
        )
    }
}
