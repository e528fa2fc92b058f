use anyhow::Result;
use dotenv::dotenv;
use quote_client::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv().ok();

    let config = Config::from_env()?;
    let value = quote_client::run(&config).await?;

    println!("Dolar: {}", value);

    Ok(())
}
