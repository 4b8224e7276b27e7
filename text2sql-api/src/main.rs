use actix_web::{web, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use text2sql_api::config::Config;
use text2sql_api::db::{MySqlExecutor, StatementExecutor};
use text2sql_api::handlers;
use text2sql_llm::{CompletionClient, ModelLakeClient};
use tracing::info;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("Failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.logging.level.clone())),
        )
        .init();

    let executor: Arc<dyn StatementExecutor> = Arc::new(MySqlExecutor::new(&config.database));
    let completion: Arc<dyn CompletionClient> = Arc::new(
        ModelLakeClient::with_timeout(
            config.llm.base_url.clone(),
            config.llm.api_key.clone(),
            std::time::Duration::from_secs(config.llm.timeout_secs),
        )
        .context("Failed to create completion client")?,
    );

    let executor_data = web::Data::from(executor);
    let completion_data = web::Data::from(completion);

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Starting text2sql-api server at http://{}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(executor_data.clone())
            .app_data(completion_data.clone())
            .service(handlers::text2sql::query)
    })
    .bind(bind_addr)?
    .run()
    .await?;

    Ok(())
}
