use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

use crate::error::AppError;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Connection table name (`TABLE_NAME`)
    #[serde(default)]
    pub table_name: Option<String>,
    /// Management API endpoint of the deployed stage (`ENDPOINT_URL`)
    #[serde(default)]
    pub endpoint_url: Option<String>,
    /// Connection store backend: "dynamodb" or "memory"
    #[serde(default = "default_store_backend")]
    pub store_backend: String,
    /// Push backend: "apigateway" or "memory"
    #[serde(default = "default_push_backend")]
    pub push_backend: String,
    /// Delete the record of a connection the push API reports as gone
    #[serde(default)]
    pub prune_stale_connections: bool,
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub authorizer: Option<AuthorizerConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_format")]
    pub format: LogFormat,
    /// Fallback filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthorizerConfig {
    pub secret: String,
    pub issuer: Option<String>,
    pub audience: Option<String>,
}

fn default_store_backend() -> String {
    "dynamodb".to_string()
}

fn default_push_backend() -> String {
    "apigateway".to_string()
}

fn default_log_format() -> LogFormat {
    LogFormat::Json
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        // Load .env file if exists
        let _ = dotenvy::dotenv();

        Self::from_environment(Environment::default())
    }

    /// Build settings on top of the given environment source.
    ///
    /// Nested keys use a double underscore: `LOG__FORMAT`, `AUTHORIZER__SECRET`.
    pub fn from_environment(environment: Environment) -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let mode_file = format!("config/{}", run_mode);

        let builder = Config::builder()
            .set_default("store_backend", default_store_backend())?
            .set_default("push_backend", default_push_backend())?
            .set_default("prune_stale_connections", false)?
            .set_default("log.format", "json")?
            .set_default("log.level", default_log_level())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&mode_file).required(false))
            .add_source(environment.separator("__").try_parsing(true));

        builder.build()?.try_deserialize()
    }

    /// Connection table name. Required wherever a connection store is built.
    pub fn table_name(&self) -> Result<&str, AppError> {
        self.table_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .ok_or(AppError::MissingConfig("TABLE_NAME"))
    }

    /// Endpoint of the push API. Required by the message function.
    pub fn endpoint_url(&self) -> Result<&str, AppError> {
        self.endpoint_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .ok_or(AppError::MissingConfig("ENDPOINT_URL"))
    }

    /// Token validation settings. Required by the authorizer function.
    pub fn authorizer(&self) -> Result<&AuthorizerConfig, AppError> {
        self.authorizer
            .as_ref()
            .filter(|auth| !auth.secret.is_empty())
            .ok_or(AppError::MissingConfig("AUTHORIZER__SECRET"))
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            format: default_log_format(),
            level: default_log_level(),
        }
    }
}
