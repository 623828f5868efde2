use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming the TOML config file the binary loads.
pub const CONFIG_ENV_VAR: &str = "WALLPATH_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub planner: PlannerConfig,
    pub store: StoreConfig,
    pub postgres: PostgresConfig,
    pub logging: LoggingConfig,
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Used when a request does not name a tool width.
    pub default_tool_width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Memory,
    File,
    Postgres,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    pub file_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PostgresConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub username: String,
    pub password: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// When set, domain messages are also written to this file.
    pub domain_log_path: Option<String>,
    /// Bounded queue in front of the domain log sinks.
    pub buffer_capacity: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Address the API listens on in `--serve` mode.
    pub bind: String,
}

impl Config {
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("parsing config TOML")?;
        Ok(config)
    }

    /// Load from `$WALLPATH_CONFIG`, then `config.toml`, falling back to defaults
    /// when neither file exists.
    pub async fn load() -> Result<Self> {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return Self::from_file(path).await;
        }
        if Path::new("config.toml").exists() {
            return Self::from_file("config.toml").await;
        }
        Ok(Self::default())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            planner: PlannerConfig::default(),
            store: StoreConfig::default(),
            postgres: PostgresConfig::default(),
            logging: LoggingConfig::default(),
            http: HttpConfig::default(),
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self { default_tool_width: 0.1 }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Memory,
            file_path: "data/trajectories.jsonl".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { domain_log_path: None, buffer_capacity: 256 }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { bind: "127.0.0.1:8000".to_string() }
    }
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            database: "wallpath".to_string(),
            username: "postgres".to_string(),
            password: "password".to_string(),
            max_connections: 10,
        }
    }
}
