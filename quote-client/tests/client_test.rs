use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use quote_client::config::Config;
use quote_client::error::ClientError;
use serde_json::json;
use std::net::SocketAddr;
use std::time::Duration;

async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn test_config(server: SocketAddr, output_path: &str) -> Config {
    Config {
        server_url: format!("http://{}", server),
        request_timeout: Duration::from_millis(300),
        output_path: output_path.to_string(),
    }
}

#[tokio::test]
async fn run_appends_the_value_and_returns_it() {
    let server = serve(Router::new().route(
        "/cotacao",
        get(|| async { Json(json!({ "value": "5.43" })) }),
    ))
    .await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("cotacao.txt");
    let config = test_config(server, output.to_str().unwrap());

    let value = quote_client::run(&config).await.unwrap();
    assert_eq!(value, "5.43");
    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "Dolar: 5.43\n"
    );

    // A second run appends, never overwrites.
    quote_client::run(&config).await.unwrap();
    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "Dolar: 5.43\nDolar: 5.43\n"
    );
}

#[tokio::test]
async fn non_2xx_is_a_generic_api_failure_and_writes_nothing() {
    let server = serve(Router::new().route(
        "/cotacao",
        get(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error_message": "persistence deadline exceeded after 10ms" })),
            )
        }),
    ))
    .await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("cotacao.txt");
    let config = test_config(server, output.to_str().unwrap());

    let err = quote_client::run(&config).await.unwrap_err();
    assert!(matches!(err, ClientError::Api));
    assert!(!output.exists());
}

#[tokio::test]
async fn slow_server_times_out_and_writes_nothing() {
    let server = serve(Router::new().route(
        "/cotacao",
        get(|| async {
            tokio::time::sleep(Duration::from_millis(800)).await;
            Json(json!({ "value": "5.43" }))
        }),
    ))
    .await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("cotacao.txt");
    let mut config = test_config(server, output.to_str().unwrap());
    config.request_timeout = Duration::from_millis(100);

    let err = quote_client::run(&config).await.unwrap_err();
    match err {
        ClientError::Http(e) => assert!(e.is_timeout()),
        other => panic!("expected a timeout, got {:?}", other),
    }
    assert!(!output.exists());
}

#[tokio::test]
async fn malformed_body_is_a_decode_failure() {
    let server = serve(Router::new().route(
        "/cotacao",
        get(|| async { "not json at all" }),
    ))
    .await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("cotacao.txt");
    let config = test_config(server, output.to_str().unwrap());

    let err = quote_client::run(&config).await.unwrap_err();
    assert!(matches!(err, ClientError::Json(_)));
    assert!(!output.exists());
}
