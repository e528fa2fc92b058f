use crate::config::Config;
use crate::error::{ClientError, Result};
use crate::models::QuoteResponse;
use reqwest::Client;
use tracing::debug;

pub struct QuoteServerClient {
    client: Client,
    base_url: String,
}

impl QuoteServerClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder().timeout(config.request_timeout).build()?;

        Ok(Self {
            client,
            base_url: config.server_url.clone(),
        })
    }

    /// Fetches the current quote value. One GET bounded by the configured
    /// deadline, no retry; any non-2xx status is a generic API failure.
    pub async fn fetch_quote(&self) -> Result<String> {
        let url = format!("{}/cotacao", self.base_url);

        debug!("Requesting quote from {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ClientError::Api);
        }

        let text = response.text().await?;
        let quote: QuoteResponse = serde_json::from_str(&text)?;

        Ok(quote.value)
    }
}
