//! Configuration module for the products client
//!
//! The client never reads global state at call time. Settings are loaded
//! once, then handed to [`crate::ProductsClient`] explicitly.

use serde::Deserialize;
use config::{Config, ConfigError, Environment, File};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main client settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,
}

/// Products API connection settings
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    /// Root address of the products service, e.g. `https://shop.example.com/api`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Total request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// TCP connect timeout in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Idle connections kept per host by the transport pool
    #[serde(default = "default_pool_max_idle_per_host")]
    pub pool_max_idle_per_host: usize,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String { "http://localhost:3000/api".to_string() }
fn default_timeout_secs() -> u64 { 30 }
fn default_connect_timeout_secs() -> u64 { 10 }
fn default_pool_max_idle_per_host() -> usize { 10 }
fn default_user_agent() -> String { format!("products-client/{}", env!("CARGO_PKG_VERSION")) }

impl ApiSettings {
    /// Settings pointing at `base_url`, everything else defaulted
    pub fn new(base_url: impl Into<String>) -> Self {
        ApiSettings {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        ApiSettings {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            pool_max_idle_per_host: default_pool_max_idle_per_host(),
            user_agent: default_user_agent(),
        }
    }
}

impl Settings {
    /// Load configuration from files and environment variables
    ///
    /// Configuration priority (highest to lowest):
    /// 1. Environment variables (prefixed with PRODUCTS_, also read from `.env`)
    /// 2. config/local.toml (gitignored)
    /// 3. config/default.toml
    ///
    /// `CONFIG_PATH` overrides the config directory.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config_dir = std::env::var("CONFIG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("config"));

        Self::load_from(&config_dir)
    }

    /// Load configuration from an explicit directory plus the environment
    pub fn load_from(config_dir: &Path) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            .add_source(File::from(config_dir.join("local.toml")).required(false))
            // PRODUCTS_API__BASE_URL, PRODUCTS_API__TIMEOUT_SECS, etc.
            .add_source(
                Environment::with_prefix("PRODUCTS")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
            );

        builder.build()?.try_deserialize()
    }
}
