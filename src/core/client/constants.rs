//! Centralized constants for default endpoints, UA, and request defaults.

use std::time::Duration;

/// Default desktop UA to avoid trivial bot blocking.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Marketaux API base (endpoint paths are appended).
pub(crate) const DEFAULT_BASE_URL: &str = "https://api.marketaux.com/v1/";

/// Environment variable consulted when no token is set on the builder.
pub(crate) const TOKEN_ENV: &str = "MARKETAUX_API_TOKEN";

/// Default page when a request does not specify one.
pub(crate) const DEFAULT_PAGE: u32 = 1;

/// Default number of articles per page.
pub(crate) const DEFAULT_LIMIT: u32 = 10;

/// How long a cached result set stays fresh.
pub(crate) const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

/// Upper bound on cached result sets before the oldest is evicted.
pub(crate) const DEFAULT_CACHE_MAX_ENTRIES: usize = 256;

/// Sleep before the 429 retry when the provider sends no `Retry-After`.
pub(crate) const DEFAULT_RETRY_AFTER_FALLBACK: Duration = Duration::from_secs(10);
