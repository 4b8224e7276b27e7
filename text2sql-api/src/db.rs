use crate::config::DatabaseConfig;
use crate::error::ApiError;
use async_trait::async_trait;
use sqlx::mysql::MySqlConnectOptions;
use sqlx::{Connection, Executor, MySqlConnection};
use std::time::Duration;
use tokio::time::timeout;
use tracing::debug;

/// Executes a single SQL statement against backing storage. The route
/// handler depends on this trait so tests can count and inspect calls
/// without a live database.
#[async_trait]
pub trait StatementExecutor: Send + Sync {
    async fn execute(&self, sql: &str) -> Result<(), ApiError>;
}

/// MySQL-backed executor. One connection per statement: connect, execute,
/// commit, and close on every exit path. No pooling, no reuse across
/// requests.
pub struct MySqlExecutor {
    options: MySqlConnectOptions,
    timeout: Duration,
}

impl MySqlExecutor {
    pub fn new(config: &DatabaseConfig) -> Self {
        let options = MySqlConnectOptions::new()
            .host(&config.host)
            .username(&config.user)
            .password(&config.password)
            .database(&config.database);
        Self {
            options,
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }
}

#[async_trait]
impl StatementExecutor for MySqlExecutor {
    async fn execute(&self, sql: &str) -> Result<(), ApiError> {
        let mut connection = match timeout(
            self.timeout,
            MySqlConnection::connect_with(&self.options),
        )
        .await
        {
            Err(_) => {
                return Err(ApiError::Storage(
                    "Timed out connecting to MySQL".to_string(),
                ))
            }
            Ok(Err(e)) => return Err(ApiError::Storage(e.to_string())),
            Ok(Ok(connection)) => connection,
        };
        debug!("Connection to MySQL was successful!");

        let result = match timeout(self.timeout, connection.execute(sql)).await {
            Err(_) => Err(ApiError::Storage(
                "Timed out executing statement".to_string(),
            )),
            Ok(Err(e)) => Err(ApiError::Storage(e.to_string())),
            Ok(Ok(_)) => Ok(()),
        };

        // Close the connection regardless of how execution went.
        if let Err(e) = connection.close().await {
            debug!("Error closing MySQL connection: {}", e);
        }
        debug!("MySQL connection closed.");

        result
    }
}
