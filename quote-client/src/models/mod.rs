use serde::Deserialize;

/// Success body of the quote server: just the bid value, as a string.
#[derive(Debug, Deserialize)]
pub struct QuoteResponse {
    pub value: String,
}
