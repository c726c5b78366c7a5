use std::time::{Duration, Instant};

use httpmock::Method::GET;
use marketaux_rs::{Backoff, MxError, RetryConfig};

use crate::common;

fn fast_retry(max_retries: u32) -> RetryConfig {
    RetryConfig {
        enabled: true,
        max_retries,
        backoff: Backoff::Fixed(Duration::from_millis(50)),
    }
}

#[tokio::test]
async fn rate_limited_then_ok_retries_after_the_advertised_delay() {
    let server = common::setup_server();
    let mut limited = server.mock(|when, then| {
        when.method(GET).path("/news/all");
        then.status(429).header("Retry-After", "1");
    });

    let client = common::test_client(&server);
    let started = Instant::now();
    let task = tokio::spawn(async move { marketaux_rs::get_news(&client, ["AAPL"]).await });

    // Swap the mock while the client sleeps out its Retry-After window.
    tokio::time::sleep(Duration::from_millis(300)).await;
    limited.assert();
    limited.delete();
    let ok = common::mock_news(
        &server,
        &common::envelope(vec![common::article("uuid-1", "Back online", &["AAPL"])]),
    );

    let articles = task.await.unwrap().unwrap();
    assert_eq!(articles.len(), 1);
    ok.assert();
    assert!(
        started.elapsed() >= Duration::from_secs(1),
        "retry fired before the Retry-After window elapsed"
    );
}

#[tokio::test]
async fn still_rate_limited_after_budget_surfaces_rate_limited() {
    let server = common::setup_server();
    let limited = server.mock(|when, then| {
        when.method(GET).path("/news/all");
        then.status(429).header("Retry-After", "0");
    });

    let client = common::test_client_builder(&server)
        .retry_policy(fast_retry(1))
        .build()
        .unwrap();

    let err = marketaux_rs::get_news(&client, ["AAPL"]).await.unwrap_err();

    // One initial attempt plus exactly one retry.
    limited.assert_hits(2);
    assert!(matches!(err, MxError::RateLimited { .. }), "got {err:?}");
    assert!(err.is_retryable());
}

#[tokio::test]
async fn missing_retry_after_uses_the_backoff_fallback() {
    let server = common::setup_server();
    let limited = server.mock(|when, then| {
        when.method(GET).path("/news/all");
        then.status(429);
    });

    let client = common::test_client_builder(&server)
        .retry_policy(fast_retry(1))
        .build()
        .unwrap();

    let started = Instant::now();
    let err = marketaux_rs::get_news(&client, ["AAPL"]).await.unwrap_err();

    limited.assert_hits(2);
    assert!(matches!(err, MxError::RateLimited { .. }));
    assert!(started.elapsed() >= Duration::from_millis(50));
}

#[tokio::test]
async fn disabled_retry_surfaces_the_first_429() {
    let server = common::setup_server();
    let limited = server.mock(|when, then| {
        when.method(GET).path("/news/all");
        then.status(429).header("Retry-After", "0");
    });

    let client = common::test_client_builder(&server)
        .retry_policy(RetryConfig {
            enabled: false,
            ..fast_retry(3)
        })
        .build()
        .unwrap();

    let err = marketaux_rs::get_news(&client, ["AAPL"]).await.unwrap_err();

    limited.assert_hits(1);
    assert!(matches!(err, MxError::RateLimited { .. }));
}

#[tokio::test]
async fn rejection_statuses_are_not_retried() {
    let server = common::setup_server();
    let rejected = server.mock(|when, then| {
        when.method(GET).path("/news/all");
        then.status(500).body("internal error");
    });

    let client = common::test_client(&server);
    let err = marketaux_rs::get_news(&client, ["AAPL"]).await.unwrap_err();

    rejected.assert_hits(1);
    match err {
        MxError::Rejected { status, .. } => assert_eq!(status, 500),
        other => panic!("expected Rejected, got {other:?}"),
    }
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn unreachable_provider_classifies_as_unavailable() {
    // Nothing listens on port 9; connections are refused immediately.
    let client = marketaux_rs::MxClient::builder()
        .base_url(url::Url::parse("http://127.0.0.1:9/").unwrap())
        .api_token("test-token")
        .connect_timeout(Duration::from_millis(500))
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();

    let err = marketaux_rs::get_news(&client, ["AAPL"]).await.unwrap_err();

    assert!(matches!(err, MxError::Unavailable(_)), "got {err:?}");
    assert!(err.is_retryable());
}
