use crate::error::{Result, ServerError};
use crate::models::ExchangeRate;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::time::Duration;
use tracing::info;

#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens (or creates) the database file and sizes the pool. Connections
    /// are acquired per query and released on every exit path.
    pub async fn new(database_path: &str, max_connections: u32) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(database_path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS exchange_rate (
                id INTEGER PRIMARY KEY,
                code TEXT,
                codein TEXT,
                name TEXT,
                high TEXT,
                low TEXT,
                varbid TEXT,
                pctchange TEXT,
                bid TEXT,
                ask TEXT,
                timestamp TEXT,
                createdate TEXT
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        info!("Database initialized successfully");
        Ok(())
    }

    /// Inserts one rate row, bounded by `timeout`. The deadline is tight by
    /// contract; elapsing it fails the request without retry.
    pub async fn insert_rate(&self, rate: &ExchangeRate, timeout: Duration) -> Result<()> {
        let insert = sqlx::query(
            r#"
            INSERT INTO exchange_rate
                (code, codein, name, high, low, varbid, pctchange, bid, ask, timestamp, createdate)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&rate.code)
        .bind(&rate.codein)
        .bind(&rate.name)
        .bind(&rate.high)
        .bind(&rate.low)
        .bind(&rate.var_bid)
        .bind(&rate.pct_change)
        .bind(&rate.bid)
        .bind(&rate.ask)
        .bind(&rate.timestamp)
        .bind(&rate.create_date)
        .execute(&self.pool);

        match tokio::time::timeout(timeout, insert).await {
            Ok(result) => {
                result?;
                Ok(())
            }
            Err(_) => Err(ServerError::PersistDeadline(timeout.as_millis() as u64)),
        }
    }

    pub async fn count_rates(&self) -> Result<i64> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM exchange_rate")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rate() -> ExchangeRate {
        ExchangeRate {
            code: "USD".to_string(),
            codein: "BRL".to_string(),
            name: "Dólar Americano/Real Brasileiro".to_string(),
            high: "5.47".to_string(),
            low: "5.41".to_string(),
            var_bid: "0.0112".to_string(),
            pct_change: "0.21".to_string(),
            bid: "5.43".to_string(),
            ask: "5.44".to_string(),
            timestamp: "1717100000".to_string(),
            create_date: "2024-05-30 15:53:20".to_string(),
        }
    }

    async fn temp_db(dir: &tempfile::TempDir) -> Database {
        let path = dir.path().join("quotes.db");
        let db = Database::new(path.to_str().unwrap(), 5).await.unwrap();
        db.init_schema().await.unwrap();
        db
    }

    #[tokio::test]
    async fn schema_init_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let db = temp_db(&dir).await;
        db.init_schema().await.unwrap();
        assert_eq!(db.count_rates().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn insert_appends_one_row_per_call() {
        let dir = tempfile::tempdir().unwrap();
        let db = temp_db(&dir).await;
        let rate = sample_rate();

        db.insert_rate(&rate, Duration::from_secs(5)).await.unwrap();
        db.insert_rate(&rate, Duration::from_secs(5)).await.unwrap();

        assert_eq!(db.count_rates().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn insert_fails_when_deadline_elapses() {
        let dir = tempfile::tempdir().unwrap();
        let db = temp_db(&dir).await;

        let err = db
            .insert_rate(&sample_rate(), Duration::ZERO)
            .await
            .unwrap_err();
        assert!(matches!(err, ServerError::PersistDeadline(_)));
    }
}
