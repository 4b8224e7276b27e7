use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct DatabaseConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize)]
pub struct LlmConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub llm: LlmConfig,
    pub logging: LoggingConfig,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let settings = ConfigBuilder::builder()
            // Set defaults
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("database.host", "127.0.0.1")?
            .set_default("database.user", "root")?
            .set_default("database.password", "")?
            .set_default("database.database", "agentlake")?
            .set_default("database.timeout_secs", 30)?
            .set_default("llm.base_url", "https://api.modellake.io")?
            .set_default("llm.api_key", "")?
            .set_default("llm.timeout_secs", 300)?
            .set_default("logging.level", "info")?;

        // Try to load from text2sql.toml in current directory
        let settings = if let Ok(current_dir) = env::current_dir() {
            let config_path = current_dir.join("text2sql.toml");
            if config_path.exists() {
                settings.add_source(File::from(config_path))
            } else {
                settings
            }
        } else {
            settings
        };

        // Override with environment variables (with prefix TEXT2SQL_)
        let settings =
            settings.add_source(Environment::with_prefix("TEXT2SQL").separator("__"));

        let mut config: Config = settings.build()?.try_deserialize()?;

        // The MYSQL_* variables are part of the external interface and win
        // over everything else.
        if let Ok(host) = env::var("MYSQL_HOST") {
            config.database.host = host;
        }
        if let Ok(user) = env::var("MYSQL_USER") {
            config.database.user = user;
        }
        if let Ok(password) = env::var("MYSQL_PASSWORD") {
            config.database.password = password;
        }
        if let Ok(database) = env::var("MYSQL_DATABASE") {
            config.database.database = database;
        }

        Ok(config)
    }
}
