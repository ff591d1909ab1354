//! Server configuration read from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use layoutquest_guild::application::ticker::DEFAULT_EXPIRY_INTERVAL;

use crate::error::AppError;

/// Settings the server starts with. Gemini settings are read separately by
/// `GeminiConfig::from_env`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// Directory holding the progress record.
    pub data_dir: PathBuf,
    /// Alternative quest board; the built-in one is used when unset.
    pub quest_catalog_path: Option<PathBuf>,
    pub expiry_interval: Duration,
}

impl ServerConfig {
    /// Reads `HOST`, `PORT`, `DATA_DIR`, `QUEST_CATALOG_PATH` and
    /// `EXPIRY_CHECK_SECS`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a value is present but invalid.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a value is present but invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port: u16 = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?;
        let addr: SocketAddr = format!("{host}:{port}")
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))?;

        let expiry_interval = match lookup("EXPIRY_CHECK_SECS") {
            Some(raw) => {
                let secs: u64 = raw.parse().map_err(|e| {
                    AppError::Config(format!("EXPIRY_CHECK_SECS must be a whole number: {e}"))
                })?;
                if secs == 0 {
                    return Err(AppError::Config(
                        "EXPIRY_CHECK_SECS must be greater than zero".to_string(),
                    ));
                }
                Duration::from_secs(secs)
            }
            None => DEFAULT_EXPIRY_INTERVAL,
        };

        Ok(Self {
            addr,
            data_dir: lookup("DATA_DIR").map_or_else(|| PathBuf::from("./data"), PathBuf::from),
            quest_catalog_path: lookup("QUEST_CATALOG_PATH").map(PathBuf::from),
            expiry_interval,
        })
    }
}
