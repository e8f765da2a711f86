//! End-to-end tests: HTTP router -> gRPC client -> in-process converter.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tower::ServiceExt;

use fxgate_common::CurrencyCode;
use fxgate_converter::metrics::Metrics;
use fxgate_converter::{serve, CurrencyConversionService};
use fxgate_fx::{convert, RateStore};
use fxgate_gateway::{create_router, AppState, ConverterClient, GatewayConfig};

struct TestConverter {
    url: String,
    store: Arc<RateStore>,
    metrics: Arc<Metrics>,
    _shutdown: oneshot::Sender<()>,
}

async fn spawn_converter(rates: &[(&str, &str, f64)]) -> TestConverter {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let store = Arc::new(RateStore::new());
    for (from, to, rate) in rates {
        store.set_rate(*from, *to, *rate).unwrap();
    }
    let metrics = Arc::new(Metrics::new());
    let service = CurrencyConversionService::with_metrics(store.clone(), metrics.clone());

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    tokio::spawn(serve(listener, service, async move {
        let _ = shutdown_rx.await;
    }));

    TestConverter {
        url: format!("http://{addr}"),
        store,
        metrics,
        _shutdown: shutdown_tx,
    }
}

async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// A converter address that accepts connections and never answers.
async fn stalled_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    format!("http://{addr}")
}

fn gateway_for(url: &str) -> Router {
    gateway_with_timeout(url, Duration::from_secs(5))
}

fn gateway_with_timeout(url: &str, rpc_timeout: Duration) -> Router {
    let config = GatewayConfig {
        converter_url: url.to_string(),
        connection_timeout: Duration::from_secs(2),
        rpc_timeout,
        ..Default::default()
    };
    let client = ConverterClient::connect_lazy(&config).unwrap();
    create_router(AppState::new(client))
}

async fn send(router: Router, method: &str, path: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(path)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, value)
}

#[tokio::test]
async fn test_convert_round_trip() {
    let converter = spawn_converter(&[("USD", "INR", 82.87)]).await;
    let router = gateway_for(&converter.url);

    let body = json!({
        "baseCurrency": "INR",
        "sourceCurrency": "USD",
        "transferAmount": 100
    });
    let (status, value) = send(router, "POST", "/convert", &body.to_string()).await;

    let expected = convert(
        100.0,
        &CurrencyCode::usd(),
        &CurrencyCode::inr(),
        &converter.store,
    )
    .unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value, json!({ "convertedAmount": 8287.0 }));
    assert_eq!(value["convertedAmount"].as_f64(), Some(expected));
}

#[tokio::test]
async fn test_unsupported_pair_is_unprocessable() {
    let converter = spawn_converter(&[]).await;
    let router = gateway_for(&converter.url);

    let body = r#"{"baseCurrency":"INR","sourceCurrency":"EUR","transferAmount":100}"#;
    let (status, value) = send(router, "POST", "/convert", body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(value["error"], "UNSUPPORTED_CURRENCY_PAIR");
    assert_eq!(value["message"], "currency not supported: EUR to INR");
    assert_eq!(converter.metrics.snapshot().conversions_rejected, 1);
}

#[tokio::test]
async fn test_malformed_json_never_reaches_converter() {
    let converter = spawn_converter(&[("USD", "INR", 82.87)]).await;
    let router = gateway_for(&converter.url);

    let (status, value) = send(router.clone(), "POST", "/convert", "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(value["error"], "MALFORMED_REQUEST");

    let (status, _) = send(router, "POST", "/convert", r#"{"baseCurrency":"INR"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(converter.metrics.snapshot().conversions_total, 0);
}

#[tokio::test]
async fn test_malformed_json_is_rejected_without_converter() {
    let router = gateway_for(&unreachable_url().await);

    let (status, _) = send(router, "POST", "/convert", "[]").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_converter_down_is_bad_gateway() {
    let router = gateway_for(&unreachable_url().await);

    let body = r#"{"baseCurrency":"INR","sourceCurrency":"USD","transferAmount":100}"#;
    let (status, value) = send(router, "POST", "/convert", body).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(value["error"], "TRANSPORT_FAILURE");
}

#[tokio::test]
async fn test_overflowing_amount_is_unprocessable() {
    let converter = spawn_converter(&[("USD", "INR", 82.87)]).await;
    let router = gateway_for(&converter.url);

    let body = r#"{"baseCurrency":"INR","sourceCurrency":"USD","transferAmount":1e307}"#;
    let (status, value) = send(router, "POST", "/convert", body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(value["error"], "AMOUNT_OUT_OF_RANGE");
    assert_eq!(converter.metrics.snapshot().conversions_success, 0);
}

#[tokio::test]
async fn test_stalled_converter_times_out() {
    let router = gateway_with_timeout(&stalled_url().await, Duration::from_millis(200));

    let body = r#"{"baseCurrency":"INR","sourceCurrency":"USD","transferAmount":100}"#;
    let (status, value) = tokio::time::timeout(
        Duration::from_secs(10),
        send(router, "POST", "/convert", body),
    )
    .await
    .expect("gateway did not enforce the rpc deadline");

    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(value["error"], "TIMEOUT");
}

#[tokio::test]
async fn test_unencodable_currency_code_is_rejected() {
    let converter = spawn_converter(&[]).await;
    let router = gateway_for(&converter.url);

    let body = r#"{"fromCurrency":"","toCurrency":"EUR","rate":2.0}"#;
    let (status, _) = send(router, "POST", "/rates", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(converter.store.is_empty());
}

#[tokio::test]
async fn test_set_rate_then_convert() {
    let converter = spawn_converter(&[]).await;
    let router = gateway_for(&converter.url);

    let body = r#"{"fromCurrency":"USD","toCurrency":"CAD","rate":1.35}"#;
    let (status, value) = send(router.clone(), "POST", "/rates", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["rate"].as_f64(), Some(1.35));
    assert_eq!(value["reciprocalRate"].as_f64(), Some(1.0 / 1.35));

    let body = r#"{"baseCurrency":"USD","sourceCurrency":"CAD","transferAmount":27}"#;
    let (status, value) = send(router, "POST", "/convert", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["convertedAmount"].as_f64(), Some(27.0 * (1.0 / 1.35)));
    assert_eq!(converter.store.len(), 2);
}

#[tokio::test]
async fn test_invalid_rate_is_bad_request() {
    let converter = spawn_converter(&[]).await;
    let router = gateway_for(&converter.url);

    let body = r#"{"fromCurrency":"USD","toCurrency":"CAD","rate":-2}"#;
    let (status, value) = send(router, "POST", "/rates", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(value["error"], "INVALID_RATE");
    assert!(converter.store.is_empty());
}

#[tokio::test]
async fn test_health() {
    let router = gateway_for(&unreachable_url().await);

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_convert_requires_post() {
    let router = gateway_for(&unreachable_url().await);

    let (status, _) = send(router, "GET", "/convert", "").await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_conversions() {
    let converter = spawn_converter(&[("USD", "INR", 82.87), ("EUR", "USD", 1.08)]).await;
    let router = gateway_for(&converter.url);

    let mut handles = Vec::new();
    for i in 0..32 {
        let router = router.clone();
        handles.push(tokio::spawn(async move {
            let amount = f64::from(i);
            let body = json!({
                "baseCurrency": "INR",
                "sourceCurrency": "USD",
                "transferAmount": amount
            });
            let (status, value) = send(router, "POST", "/convert", &body.to_string()).await;
            (amount, status, value)
        }));
    }

    for handle in handles {
        let (amount, status, value) = handle.await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(value["convertedAmount"].as_f64(), Some(amount * 82.87));
    }
    assert_eq!(converter.metrics.snapshot().conversions_success, 32);
}
