use crate::config::Config;
use crate::error::{Result, ServerError};
use crate::models::{ExchangeRate, RatePayload};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, info};

/// Currency pair served by this process. Multi-currency lookup is out of scope.
pub const CURRENCY_PAIR: &str = "USD-BRL";

#[derive(Clone)]
pub struct AwesomeApiClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl AwesomeApiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            base_url: config.upstream_base_url.clone(),
            timeout: config.upstream_timeout,
        }
    }

    /// Fetches the latest rate record for `pair`. One GET bounded by the
    /// upstream deadline, no retry. The payload is keyed by the concatenated
    /// pair; an absent key is an error, not an empty record.
    pub async fn fetch_latest(&self, pair: &str) -> Result<ExchangeRate> {
        let url = format!("{}/{}", self.base_url, pair);

        debug!("Fetching {} rate from upstream: {}", pair, url);

        let response = self.client.get(&url).timeout(self.timeout).send().await?;

        if !response.status().is_success() {
            return Err(ServerError::Api {
                status: response.status().as_u16(),
                message: format!("upstream API returned status: {}", response.status()),
            });
        }

        let text = response.text().await?;
        let mut payload: RatePayload = match serde_json::from_str(&text) {
            Ok(payload) => payload,
            Err(e) => {
                error!("Upstream raw response: {}", text);
                return Err(ServerError::Json(e));
            }
        };

        let key = pair.replace('-', "");
        let rate = payload
            .remove(&key)
            .ok_or(ServerError::MissingCurrencyKey(key))?;

        info!("[AWESOME] {} bid: {}", pair, rate.bid);
        Ok(rate)
    }
}
