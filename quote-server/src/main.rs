use anyhow::Result;
use dotenv::dotenv;
use quote_server::api::AwesomeApiClient;
use quote_server::config::Config;
use quote_server::db::Database;
use quote_server::handlers::AppState;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv().ok();

    let config = Config::from_env()?;

    // Database connection
    let db = Database::new(&config.database_path, config.max_connections).await?;
    db.init_schema().await?;

    let rates = AwesomeApiClient::new(&config);

    let state = Arc::new(AppState {
        db,
        rates,
        config: config.clone(),
    });

    let app = quote_server::app(state);

    let addr = format!("0.0.0.0:{}", config.port);
    info!("Starting quote server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
