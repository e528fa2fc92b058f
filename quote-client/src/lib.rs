pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod output;

use crate::api::QuoteServerClient;
use crate::config::Config;
use crate::error::Result;

/// One full client run: ask the server for the current value, append it to
/// the output file, and hand it back for display. Every failure aborts the
/// run before the file is touched.
pub async fn run(config: &Config) -> Result<String> {
    let client = QuoteServerClient::new(config)?;
    let value = client.fetch_quote().await?;

    output::append_quote(&config.output_path, &value)?;

    Ok(value)
}
