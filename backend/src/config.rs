//! Configuration management for the Certificate Hub
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with CERT_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Spreadsheet feed configuration
    pub sheets: SheetsConfig,

    /// Feed cache configuration
    pub cache: CacheConfig,

    /// Public site root used to build certificate URLs
    pub public_base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

/// Location and credentials of the certificate spreadsheet
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct SheetsConfig {
    /// Spreadsheet id
    pub location: String,

    /// API key with read access to the spreadsheet
    pub access_key: String,

    /// Tab holding the certificate rows
    pub sheet_name: String,

    /// Sheets API root
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CacheConfig {
    /// Seconds a successful feed read is reused
    pub ttl_secs: u64,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("CERT_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("sheets.location", "")?
            .set_default("sheets.access_key", "")?
            .set_default("sheets.sheet_name", DEFAULT_SHEET_NAME)?
            .set_default("sheets.base_url", DEFAULT_SHEETS_BASE_URL)?
            .set_default("cache.ttl_secs", DEFAULT_CACHE_TTL_SECS)?
            .set_default("public_base_url", DEFAULT_PUBLIC_BASE_URL)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (CERT_ prefix)
            .add_source(
                Environment::with_prefix("CERT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Listen address as `host:port`
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

pub const DEFAULT_SHEET_NAME: &str = "Certificates";
pub const DEFAULT_SHEETS_BASE_URL: &str = "https://sheets.googleapis.com/v4";
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;
pub const DEFAULT_PUBLIC_BASE_URL: &str = "https://yoursite.com";

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            sheets: SheetsConfig::default(),
            cache: CacheConfig::default(),
            public_base_url: DEFAULT_PUBLIC_BASE_URL.to_string(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            location: String::new(),
            access_key: String::new(),
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            base_url: DEFAULT_SHEETS_BASE_URL.to_string(),
        }
    }
}

impl SheetsConfig {
    /// Whether both the spreadsheet id and the access key are set
    pub fn is_configured(&self) -> bool {
        !self.location.trim().is_empty() && !self.access_key.trim().is_empty()
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: DEFAULT_CACHE_TTL_SECS,
        }
    }
}
