use crate::api::{AwesomeApiClient, CURRENCY_PAIR};
use crate::config::Config;
use crate::db::Database;
use crate::error::Result;
use crate::models::QuoteResponse;
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

pub struct AppState {
    pub db: Database,
    pub rates: AwesomeApiClient,
    pub config: Config,
}

pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// GET /cotacao: fetch the current rate, persist it, answer with the bid.
/// Any step failing short-circuits into a 500 via `ServerError`.
pub async fn get_quote(State(state): State<Arc<AppState>>) -> Result<Json<QuoteResponse>> {
    let rate = state.rates.fetch_latest(CURRENCY_PAIR).await?;

    state
        .db
        .insert_rate(&rate, state.config.persist_timeout)
        .await?;

    info!("Stored {} rate: bid={}", CURRENCY_PAIR, rate.bid);

    Ok(Json(QuoteResponse { value: rate.bid }))
}
