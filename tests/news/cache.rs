use std::time::Duration;

use marketaux_rs::{CacheMode, NewsBuilder};

use crate::common;

#[tokio::test]
async fn repeated_fetch_within_ttl_hits_upstream_once() {
    let server = common::setup_server();
    let body = common::envelope(vec![common::article("uuid-1", "Cached story", &["AAPL"])]);
    let mock = common::mock_news(&server, &body);
    let client = common::test_client(&server);

    let first = marketaux_rs::get_news(&client, ["AAPL", "msft"]).await.unwrap();
    // Same semantic query, different input order and casing.
    let second = marketaux_rs::get_news(&client, ["MSFT", "aapl"]).await.unwrap();

    mock.assert_hits(1);
    assert_eq!(first, second);
}

#[tokio::test]
async fn distinct_pagination_is_a_distinct_cache_entry() {
    let server = common::setup_server();
    let body = common::envelope(vec![common::article("uuid-1", "Story", &["AAPL"])]);
    let mock = common::mock_news(&server, &body);
    let client = common::test_client(&server);

    let builder = || NewsBuilder::new(&client).symbol("AAPL");
    builder().page(1).fetch().await.unwrap();
    builder().page(2).fetch().await.unwrap();
    builder().page(1).fetch().await.unwrap();

    mock.assert_hits(2);
}

#[tokio::test]
async fn refresh_bypasses_cache_and_repopulates_it() {
    let server = common::setup_server();
    let body = common::envelope(vec![common::article("uuid-1", "Story", &["AAPL"])]);
    let mock = common::mock_news(&server, &body);
    let client = common::test_client(&server);

    marketaux_rs::get_news(&client, ["AAPL"]).await.unwrap();
    mock.assert_hits(1);

    // Force refresh: must re-invoke upstream even though the entry is fresh.
    marketaux_rs::refresh_news(&client, ["AAPL"]).await.unwrap();
    mock.assert_hits(2);

    // The refresh re-populated the cache, so a plain fetch is served from it.
    marketaux_rs::get_news(&client, ["AAPL"]).await.unwrap();
    mock.assert_hits(2);
}

#[tokio::test]
async fn expired_entry_reports_a_miss() {
    let server = common::setup_server();
    let body = common::envelope(vec![common::article("uuid-1", "Story", &["AAPL"])]);
    let mock = common::mock_news(&server, &body);
    let client = common::test_client_builder(&server)
        .cache_ttl(Duration::from_millis(80))
        .build()
        .unwrap();

    marketaux_rs::get_news(&client, ["AAPL"]).await.unwrap();
    tokio::time::sleep(Duration::from_millis(150)).await;
    marketaux_rs::get_news(&client, ["AAPL"]).await.unwrap();

    mock.assert_hits(2);
}

#[tokio::test]
async fn bypass_mode_neither_reads_nor_writes() {
    let server = common::setup_server();
    let body = common::envelope(vec![common::article("uuid-1", "Story", &["AAPL"])]);
    let mock = common::mock_news(&server, &body);
    let client = common::test_client(&server);

    let bypass = || {
        NewsBuilder::new(&client)
            .symbol("AAPL")
            .cache_mode(CacheMode::Bypass)
    };
    bypass().fetch().await.unwrap();
    mock.assert_hits(1);

    // Nothing was written above, so a cache-first fetch still goes out.
    marketaux_rs::get_news(&client, ["AAPL"]).await.unwrap();
    mock.assert_hits(2);
}

#[tokio::test]
async fn disabled_cache_degrades_to_always_miss() {
    let server = common::setup_server();
    let body = common::envelope(vec![common::article("uuid-1", "Story", &["AAPL"])]);
    let mock = common::mock_news(&server, &body);
    let client = common::test_client_builder(&server).no_cache().build().unwrap();

    assert!(!client.cache_enabled());
    marketaux_rs::get_news(&client, ["AAPL"]).await.unwrap();
    marketaux_rs::get_news(&client, ["AAPL"]).await.unwrap();

    mock.assert_hits(2);
}
