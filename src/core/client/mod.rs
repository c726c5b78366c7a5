//! Public client surface + builder.
//! Retry knobs live in `retry`, defaults in `constants`.

mod constants;
mod retry;

pub use retry::{Backoff, CacheMode, RetryConfig};

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::core::MxError;
use crate::core::cache::{CacheStore, QueryKey};
use crate::news::Article;
use constants::{
    DEFAULT_BASE_URL, DEFAULT_CACHE_MAX_ENTRIES, DEFAULT_CACHE_TTL, TOKEN_ENV, USER_AGENT,
};

pub(crate) use constants::{DEFAULT_LIMIT, DEFAULT_PAGE};

/// Client for the Marketaux news API.
///
/// Cheap to clone: the HTTP connection pool and the result cache are shared
/// between clones, so every handle sees the same cached entries.
#[derive(Debug, Clone)]
pub struct MxClient {
    http: Client,
    base_url: Url,
    api_token: Arc<str>,
    retry: RetryConfig,
    cache: Option<Arc<CacheStore>>,
}

impl MxClient {
    /// Create a new builder.
    pub fn builder() -> MxClientBuilder {
        MxClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn api_token(&self) -> &str {
        &self.api_token
    }

    /// Whether result caching is enabled for this client.
    #[must_use]
    pub fn cache_enabled(&self) -> bool {
        self.cache.is_some()
    }

    /* -------- cache passthroughs; a disabled cache is an always-miss -------- */

    pub(crate) async fn cache_get(&self, key: &QueryKey) -> Option<Vec<Article>> {
        self.cache.as_ref()?.get(key).await
    }

    pub(crate) async fn cache_put(&self, key: QueryKey, articles: &[Article]) {
        if let Some(store) = &self.cache {
            store.put(key, articles.to_vec()).await;
        }
    }

    pub(crate) async fn cache_invalidate(&self, key: &QueryKey) {
        if let Some(store) = &self.cache {
            store.invalidate(key).await;
        }
    }

    /// Sends a request, re-sending on 429 up to the configured retry budget.
    ///
    /// The sleep between attempts honors the provider's `Retry-After`
    /// seconds when present, falling back to the configured backoff. Only
    /// this caller's task suspends. The final response is returned as-is,
    /// including a still-429 one; status classification is the call site's
    /// job. Network failures are never retried and surface as
    /// [`MxError::Unavailable`].
    pub(crate) async fn send_with_retry(
        &self,
        req: reqwest::RequestBuilder,
        retry_override: Option<&RetryConfig>,
    ) -> Result<reqwest::Response, MxError> {
        let cfg = retry_override.unwrap_or(&self.retry);
        let budget = if cfg.enabled { cfg.max_retries } else { 0 };

        let mut attempt: u32 = 0;
        loop {
            let this_try = req
                .try_clone()
                .ok_or_else(|| MxError::Data("request is not cloneable for retry".into()))?;
            let resp = this_try.send().await.map_err(MxError::Unavailable)?;

            if resp.status().as_u16() != 429 || attempt >= budget {
                return Ok(resp);
            }

            let delay = retry_after(&resp).unwrap_or_else(|| cfg.backoff.delay(attempt));
            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }
}

/// Parses a `Retry-After` header given in whole seconds. The HTTP-date
/// form is rare on rate limiters and is treated as absent.
fn retry_after(resp: &reqwest::Response) -> Option<Duration> {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}

/* ----------------------- Builder ----------------------- */

/// Builder for [`MxClient`].
#[derive(Default)]
pub struct MxClientBuilder {
    user_agent: Option<String>,
    base_url: Option<Url>,
    api_token: Option<String>,
    retry: Option<RetryConfig>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    cache_ttl: Option<Duration>,
    cache_max_entries: Option<usize>,
    no_cache: bool,
}

impl MxClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the API base (e.g., a mock server in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the API token. Falls back to `MARKETAUX_API_TOKEN` when unset.
    #[must_use]
    pub fn api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Override the default retry policy for all calls made by this client.
    #[must_use]
    pub fn retry_policy(mut self, cfg: RetryConfig) -> Self {
        self.retry = Some(cfg);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Override how long cached result sets stay fresh. Default: 5 minutes.
    #[must_use]
    pub fn cache_ttl(mut self, dur: Duration) -> Self {
        self.cache_ttl = Some(dur);
        self
    }

    /// Override the cache size bound. Default: 256 entries.
    #[must_use]
    pub fn cache_max_entries(mut self, n: usize) -> Self {
        self.cache_max_entries = Some(n);
        self
    }

    /// Disable result caching entirely. Every fetch goes to the network.
    #[must_use]
    pub fn no_cache(mut self) -> Self {
        self.no_cache = true;
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`MxError::Auth`] if no API token is set here or in the
    /// `MARKETAUX_API_TOKEN` environment variable, [`MxError::Url`] if a
    /// base URL override cannot be parsed, or [`MxError::Unavailable`] if
    /// the underlying HTTP client cannot be constructed.
    pub fn build(self) -> Result<MxClient, MxError> {
        let base_url = match self.base_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let api_token = match self.api_token.or_else(|| std::env::var(TOKEN_ENV).ok()) {
            Some(t) if !t.is_empty() => t,
            _ => {
                return Err(MxError::Auth(format!(
                    "no API token provided and {TOKEN_ENV} is not set"
                )));
            }
        };

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .gzip(true);

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build().map_err(MxError::Unavailable)?;

        let cache = if self.no_cache {
            None
        } else {
            Some(Arc::new(CacheStore::new(
                self.cache_ttl.unwrap_or(DEFAULT_CACHE_TTL),
                self.cache_max_entries.unwrap_or(DEFAULT_CACHE_MAX_ENTRIES),
            )))
        };

        Ok(MxClient {
            http,
            base_url,
            api_token: api_token.into(),
            retry: self.retry.unwrap_or_default(),
            cache,
        })
    }
}
