use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Rate record as returned by the upstream quote API. Every field is an
/// opaque string; values pass through storage and responses unparsed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeRate {
    pub code: String,
    pub codein: String,
    pub name: String,
    pub high: String,
    pub low: String,
    #[serde(rename = "varBid")]
    pub var_bid: String,
    #[serde(rename = "pctChange")]
    pub pct_change: String,
    pub bid: String,
    pub ask: String,
    pub timestamp: String,
    pub create_date: String,
}

/// Upstream payload: one entry keyed by the concatenated pair, e.g. "USDBRL".
pub type RatePayload = HashMap<String, ExchangeRate>;

// Response models
#[derive(Debug, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub value: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error_message: String,
}
