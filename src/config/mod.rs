//! Configuration loading and management

use crate::core::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Env var naming the YAML config file
pub const CONFIG_PATH_ENV: &str = "ORDER_SERVICE_CONFIG";

/// Which persistence gateway backs the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StorageBackend {
    #[default]
    InMemory,
    Postgres,
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in-memory" | "memory" => Ok(StorageBackend::InMemory),
            "postgres" | "postgresql" => Ok(StorageBackend::Postgres),
            other => Err(ConfigError::InvalidValue {
                field: "storage".to_string(),
                message: format!("unknown backend '{}' (expected in-memory or postgres)", other),
            }),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::InMemory => write!(f, "in-memory"),
            StorageBackend::Postgres => write!(f, "postgres"),
        }
    }
}

/// Complete configuration for the order service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Address the HTTP server binds to
    pub bind: String,

    /// Prefix for the order routes, e.g. `/api` serves `/api/orders`
    pub base_path: String,

    pub storage: StorageBackend,

    /// Connection string, required for the postgres backend
    pub database_url: Option<String>,

    pub max_connections: u32,

    /// Insert the sample orders at startup
    pub seed: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
            base_path: String::new(),
            storage: StorageBackend::InMemory,
            database_url: None,
            max_connections: 5,
            seed: true,
        }
    }
}

impl ServiceConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            file: Some(path.to_string()),
            message: e.to_string(),
        })
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
            file: None,
            message: e.to_string(),
        })
    }

    /// Load from the file named by `ORDER_SERVICE_CONFIG` (defaults when unset),
    /// apply environment overrides, then validate
    pub fn load() -> Result<Self, ConfigError> {
        let base = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_yaml_file(&path)?,
            Err(_) => Self::default(),
        };
        let env: HashMap<String, String> = std::env::vars().collect();
        let config = base.with_overrides(&env)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from an environment-like map
    ///
    /// Recognized keys: `ORDER_SERVICE_BIND`, `ORDER_SERVICE_BASE_PATH`,
    /// `ORDER_SERVICE_STORAGE`, `DATABASE_URL`, `ORDER_SERVICE_MAX_CONNECTIONS`,
    /// `ORDER_SERVICE_SEED`.
    pub fn with_overrides(mut self, env: &HashMap<String, String>) -> Result<Self, ConfigError> {
        if let Some(bind) = env.get("ORDER_SERVICE_BIND") {
            self.bind = bind.clone();
        }
        if let Some(base_path) = env.get("ORDER_SERVICE_BASE_PATH") {
            self.base_path = base_path.clone();
        }
        if let Some(storage) = env.get("ORDER_SERVICE_STORAGE") {
            self.storage = storage.parse()?;
        }
        if let Some(url) = env.get("DATABASE_URL") {
            self.database_url = Some(url.clone());
        }
        if let Some(max) = env.get("ORDER_SERVICE_MAX_CONNECTIONS") {
            self.max_connections = max.parse().map_err(|_| ConfigError::InvalidValue {
                field: "max_connections".to_string(),
                message: format!("'{}' is not a positive integer", max),
            })?;
        }
        if let Some(seed) = env.get("ORDER_SERVICE_SEED") {
            self.seed = parse_bool(seed).ok_or_else(|| ConfigError::InvalidValue {
                field: "seed".to_string(),
                message: format!("'{}' is not a boolean", seed),
            })?;
        }
        Ok(self)
    }

    /// Check cross-field constraints
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_path.is_empty() && !self.base_path.starts_with('/') {
            return Err(ConfigError::InvalidValue {
                field: "base_path".to_string(),
                message: format!("'{}' must start with '/'", self.base_path),
            });
        }
        if self.base_path.ends_with('/') {
            return Err(ConfigError::InvalidValue {
                field: "base_path".to_string(),
                message: format!("'{}' must not end with '/'", self.base_path),
            });
        }
        if self.storage == StorageBackend::Postgres && self.database_url.is_none() {
            return Err(ConfigError::InvalidValue {
                field: "database_url".to_string(),
                message: "required when storage is postgres".to_string(),
            });
        }
        if self.max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_connections".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
