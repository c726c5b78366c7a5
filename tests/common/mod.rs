#![allow(dead_code)]

use httpmock::{Method::GET, Mock, MockServer};
use marketaux_rs::MxClient;
use serde_json::{Value, json};
use url::Url;

pub fn setup_server() -> MockServer {
    MockServer::start()
}

/// A client pointed at the mock server, with caching left at defaults.
pub fn test_client(server: &MockServer) -> MxClient {
    test_client_builder(server).build().unwrap()
}

pub fn test_client_builder(server: &MockServer) -> marketaux_rs::MxClientBuilder {
    MxClient::builder()
        .base_url(Url::parse(&server.base_url()).unwrap())
        .api_token("test-token")
}

/// A raw Marketaux-shaped article record tagged with equity entities.
pub fn article(uuid: &str, title: &str, symbols: &[&str]) -> Value {
    let entities: Vec<Value> = symbols
        .iter()
        .map(|s| json!({ "type": "equity", "symbol": s }))
        .collect();
    json!({
        "uuid": uuid,
        "title": title,
        "description": format!("{title} in detail"),
        "snippet": format!("{title} snippet"),
        "source": "reuters.com",
        "url": format!("https://example.com/{uuid}"),
        "published_at": "2026-08-07T12:00:00.000000Z",
        "entities": entities,
    })
}

/// The provider envelope around a list of raw records.
pub fn envelope(data: Vec<Value>) -> String {
    json!({
        "meta": { "found": data.len(), "returned": data.len(), "limit": 10, "page": 1 },
        "data": data,
    })
    .to_string()
}

/// Mounts a 200 response for `/news/all`, matching any query.
pub fn mock_news<'a>(server: &'a MockServer, body: &str) -> Mock<'a> {
    let body = body.to_string();
    server.mock(|when, then| {
        when.method(GET).path("/news/all");
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    })
}
