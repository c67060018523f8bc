use std::env;
use std::fs;

use crate::error::{BoardError, BoardResult};

/// Server configuration, read from the environment.
///
/// Recognized variables:
///   DATABASE_URL - sqlx connection URL for the board database
///   HOST         - bind address (default "0.0.0.0")
///   PORT         - listen port (default 3000)
#[derive(Debug, Clone)]
pub struct Config {
    database_url: Option<String>,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .unwrap_or(3000);

        Config {
            database_url: env::var("DATABASE_URL").ok(),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
        }
    }

    /// Resolves the database URL.
    ///
    /// Uses `DATABASE_URL` when set; otherwise points at a board database
    /// under the platform data directory, creating that directory if it is
    /// missing.
    pub fn database_url(&self) -> BoardResult<String> {
        if let Some(url) = &self.database_url {
            return Ok(url.clone());
        }

        let data_dir = dirs::data_dir()
            .ok_or_else(|| BoardError::Other("data directory not found".into()))?
            .join("corkboard");

        fs::create_dir_all(&data_dir)?;

        Ok(format!(
            "sqlite:{}?mode=rwc",
            data_dir.join("board.db").display()
        ))
    }
}
