mod api;
mod model;
mod normalize;
mod wire;

pub use model::{Article, Sentiment};

use crate::{
    MxClient, MxError,
    core::client::{CacheMode, DEFAULT_LIMIT, DEFAULT_PAGE, RetryConfig},
};

/// Fetches news for a symbol set, cache-first.
///
/// A fresh cached result for the same canonical query is returned without
/// touching the network. Equivalent to
/// [`NewsBuilder::fetch`] with defaults.
///
/// # Errors
///
/// Returns an [`MxError`] classifying the failure: rate limiting that
/// outlasted the retry budget, a network failure, an upstream rejection, or
/// an unparseable payload.
pub async fn get_news<I, S>(client: &MxClient, symbols: I) -> Result<Vec<Article>, MxError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    NewsBuilder::new(client).symbols(symbols).fetch().await
}

/// Fetches news for a symbol set, bypassing any cached result and
/// re-populating the cache with what the provider returns now.
///
/// # Errors
///
/// Same classification as [`get_news`].
pub async fn refresh_news<I, S>(client: &MxClient, symbols: I) -> Result<Vec<Article>, MxError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    NewsBuilder::new(client).symbols(symbols).refresh().await
}

/// A builder for fetching news articles for a set of ticker symbols.
pub struct NewsBuilder {
    client: MxClient,
    symbols: Vec<String>,
    page: u32,
    limit: u32,
    cache_mode: CacheMode,
    retry_override: Option<RetryConfig>,
}

impl NewsBuilder {
    /// Creates a new `NewsBuilder`. With no symbols added, the provider
    /// returns its unfiltered feed.
    pub fn new(client: &MxClient) -> Self {
        Self {
            client: client.clone(),
            symbols: Vec::new(),
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            cache_mode: CacheMode::Use,
            retry_override: None,
        }
    }

    /// Adds one symbol to the query.
    #[must_use]
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbols.push(symbol.into());
        self
    }

    /// Adds several symbols to the query. Order, case, and duplicates do
    /// not matter; the query is canonicalized before keying and sending.
    #[must_use]
    pub fn symbols<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symbols.extend(symbols.into_iter().map(Into::into));
        self
    }

    /// Sets the result page. `0` means the default (page 1).
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = if page == 0 { DEFAULT_PAGE } else { page };
        self
    }

    /// Sets the number of articles per page. `0` means the default (10).
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = if limit == 0 { DEFAULT_LIMIT } else { limit };
        self
    }

    /// Sets the cache mode for this specific API call.
    #[must_use]
    pub const fn cache_mode(mut self, mode: CacheMode) -> Self {
        self.cache_mode = mode;
        self
    }

    /// Overrides the default retry policy for this specific API call.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Executes the request, honoring the configured cache mode
    /// (cache-first by default).
    ///
    /// # Errors
    ///
    /// Returns an [`MxError`] if the provider rejects the request, stays
    /// rate-limited past the retry budget, cannot be reached, or answers
    /// with a payload that is not the expected envelope.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(symbols = ?self.symbols, page = self.page, limit = self.limit))
    )]
    pub async fn fetch(self) -> Result<Vec<Article>, MxError> {
        api::fetch_news(
            &self.client,
            &self.symbols,
            self.page,
            self.limit,
            self.cache_mode,
            self.retry_override.as_ref(),
        )
        .await
    }

    /// Executes the request with a forced refresh: the cached entry for
    /// this query is dropped, the provider is always called, and the cache
    /// is re-populated from the response.
    ///
    /// # Errors
    ///
    /// Same classification as [`NewsBuilder::fetch`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(symbols = ?self.symbols, page = self.page, limit = self.limit))
    )]
    pub async fn refresh(self) -> Result<Vec<Article>, MxError> {
        api::fetch_news(
            &self.client,
            &self.symbols,
            self.page,
            self.limit,
            CacheMode::Refresh,
            self.retry_override.as_ref(),
        )
        .await
    }
}
