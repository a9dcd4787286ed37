//! Resumo - text storage and summarization service

use std::sync::Arc;

use resumo::application::{Summarizer, TextService};
use resumo::config::{load_config, print_config};
use resumo::infrastructure::adapters::SrxSentenceDetector;
use resumo::infrastructure::http::{AppState, HttpServer, ServerConfig};
use resumo::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteTextRepository,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration (env vars > config file > defaults)
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // Initialize logging
    let log_filter = format!(
        "{},resumo={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Resumo - text storage and summarization service");
    print_config(&config);

    // Ensure the database directory exists
    if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    // Initialize the database
    let db_config = DatabaseConfig {
        database_url: config.database.database_url(),
        max_connections: config.database.max_connections,
    };
    let pool = create_pool(&db_config).await?;
    run_migrations(&pool).await?;

    let repository = Arc::new(SqliteTextRepository::new(pool));

    // Load the segmentation ruleset; the service cannot run without it
    let detector = Arc::new(SrxSentenceDetector::from_file(
        &config.model.path,
        &config.model.language,
    )?);
    let summarizer = Summarizer::new(detector);

    let service = TextService::new(repository, summarizer);
    let state = AppState::new(service, config.text.clone());

    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    server
        .run_with_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
