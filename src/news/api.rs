use url::Url;

use crate::{
    core::{
        MxClient, MxError,
        cache::{QueryKey, canonical_symbols},
        client::{CacheMode, RetryConfig},
    },
    news::{model::Article, normalize, wire},
};

pub(super) async fn fetch_news(
    client: &MxClient,
    symbols: &[String],
    page: u32,
    limit: u32,
    cache_mode: CacheMode,
    retry_override: Option<&RetryConfig>,
) -> Result<Vec<Article>, MxError> {
    let symbols = canonical_symbols(symbols);
    let key = QueryKey::from_canonical(&symbols, page, limit);

    match cache_mode {
        CacheMode::Use => {
            if let Some(articles) = client.cache_get(&key).await {
                return Ok(articles);
            }
        }
        // A forced refresh must not leave a stale entry behind if the
        // fetch below fails.
        CacheMode::Refresh => client.cache_invalidate(&key).await,
        CacheMode::Bypass => {}
    }

    let url = build_url(client, &symbols, page, limit)?;

    let req = client
        .http()
        .get(url.clone())
        .header("accept", "application/json");
    let resp = client.send_with_retry(req, retry_override).await?;

    let status = resp.status();
    if !status.is_success() {
        let url_s = url.to_string();
        return Err(match status.as_u16() {
            429 => MxError::RateLimited { url: url_s },
            code => MxError::Rejected {
                status: code,
                url: url_s,
            },
        });
    }

    let body = resp.text().await.map_err(MxError::Unavailable)?;
    let envelope: wire::NewsEnvelope = serde_json::from_str(&body)?;
    let articles = normalize::normalize_articles(envelope.data.unwrap_or_default());

    if cache_mode != CacheMode::Bypass {
        client.cache_put(key, &articles).await;
    }

    Ok(articles)
}

fn build_url(client: &MxClient, symbols: &[String], page: u32, limit: u32) -> Result<Url, MxError> {
    let mut url = client.base_url().join("news/all")?;
    {
        let mut qp = url.query_pairs_mut();
        qp.append_pair("symbols", &symbols.join(","));
        qp.append_pair("page", &page.to_string());
        qp.append_pair("limit", &limit.to_string());
        qp.append_pair("language", "en");
        qp.append_pair("filter_entities", "true");
        qp.append_pair("api_token", client.api_token());
    }
    Ok(url)
}
