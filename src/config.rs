use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::backend::database::DatabaseBackendConfig;
use crate::backend::DatabaseType;
use crate::error::{AppError, AppResult};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    pub backend: BackendConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BackendConfig {
    /// `sqlite`, `postgresql` or `mongodb`
    #[serde(rename = "type")]
    pub backend_type: String,
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_timeout")]
    pub connection_timeout: u64,
    #[serde(default = "default_operation_timeout")]
    pub operation_timeout: u64,
    /// Table (SQL) or collection (MongoDB) name
    #[serde(default = "default_storage_name")]
    pub table: String,
    /// MongoDB database name
    #[serde(default = "default_storage_name")]
    pub database: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_max_connections() -> u32 {
    10
}

fn default_timeout() -> u64 {
    30
}

fn default_operation_timeout() -> u64 {
    60
}

fn default_storage_name() -> String {
    "users".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Load configuration from YAML file
    pub fn load_from_file<P: AsRef<Path>>(config_path: P) -> AppResult<Self> {
        let path = config_path.as_ref();

        if !path.exists() {
            return Err(AppError::Configuration(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Configuration(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        Self::from_yaml(&content)
            .map_err(|e| AppError::Configuration(format!("{} ({})", e, path.display())))
    }

    /// Parse configuration from YAML text, expanding environment references first
    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let expanded = Self::expand_env_vars(content).map_err(AppError::Configuration)?;

        serde_yaml::from_str(&expanded)
            .map_err(|e| AppError::Configuration(format!("Failed to parse config file: {}", e)))
    }

    /// Default configuration: in-memory SQLite over a single connection
    pub fn default_config() -> Self {
        AppConfig {
            backend: BackendConfig {
                backend_type: "sqlite".to_string(),
                url: ":memory:".to_string(),
                max_connections: 1,
                connection_timeout: default_timeout(),
                operation_timeout: default_operation_timeout(),
                table: default_storage_name(),
                database: default_storage_name(),
            },
            logging: LoggingConfig::default(),
        }
    }

    /// Build the adapter-level configuration for the selected backend
    pub fn to_backend_config(&self) -> AppResult<DatabaseBackendConfig> {
        let database_type: DatabaseType = self.backend.backend_type.parse()?;

        Ok(
            DatabaseBackendConfig::new(database_type, self.backend.url.clone())
                .with_max_connections(self.backend.max_connections)
                .with_connection_timeout(self.backend.connection_timeout)
                .with_operation_timeout(self.backend.operation_timeout)
                .with_table_name(self.backend.table.clone())
                .with_database_name(self.backend.database.clone()),
        )
    }

    /// Expand environment variables in format ${VAR_NAME} or ${VAR_NAME:-default}
    fn expand_env_vars(content: &str) -> Result<String, String> {
        let mut expanded = String::with_capacity(content.len());
        let mut rest = content;

        while let Some(start) = rest.find("${") {
            let Some(len) = rest[start + 2..].find('}') else {
                break;
            };
            expanded.push_str(&rest[..start]);

            let expr = &rest[start + 2..start + 2 + len];
            let (name, default) = match expr.split_once(":-") {
                Some((name, default)) => (name, Some(default)),
                None => (expr, None),
            };

            match (std::env::var(name), default) {
                (Ok(value), _) => expanded.push_str(&value),
                (Err(_), Some(default)) => expanded.push_str(default),
                (Err(_), None) => {
                    return Err(format!(
                        "Environment variable {} not found and no default provided",
                        name
                    ))
                }
            }

            rest = &rest[start + 2 + len + 1..];
        }

        expanded.push_str(rest);
        Ok(expanded)
    }
}
