use std::time::Duration;

use super::constants::DEFAULT_RETRY_AFTER_FALLBACK;

/// Fallback backoff for a 429 retry when the provider sends no
/// `Retry-After` header.
#[derive(Clone, Debug)]
pub enum Backoff {
    /// Uses a fixed delay between retries.
    Fixed(Duration),
    /// Uses an exponential delay between retries.
    /// The delay is calculated as `base * (factor ^ attempt)`.
    Exponential {
        /// The initial backoff duration.
        base: Duration,
        /// The multiplicative factor for each subsequent retry.
        factor: f64,
        /// The maximum duration to wait between retries.
        max: Duration,
    },
}

impl Backoff {
    pub(crate) fn delay(&self, attempt: u32) -> Duration {
        match self {
            Self::Fixed(d) => *d,
            Self::Exponential { base, factor, max } => {
                let scaled = base.as_secs_f64() * factor.powi(attempt.try_into().unwrap_or(i32::MAX));
                // Clamp before converting: a runaway factor must not panic.
                Duration::from_secs_f64(scaled.min(max.as_secs_f64()).max(0.0))
            }
        }
    }
}

/// Configuration for the automatic retry mechanism.
///
/// Only HTTP 429 is retried: the provider's rate-limit contract names the
/// wait (`Retry-After`), so a bounded re-send is safe. Any other error
/// status classifies immediately, and network failures propagate on the
/// first occurrence.
#[derive(Clone, Debug)]
pub struct RetryConfig {
    /// Enables or disables the retry mechanism.
    pub enabled: bool,
    /// The maximum number of retries to attempt after the initial request.
    /// The total number of attempts will be `max_retries + 1`.
    pub max_retries: u32,
    /// Backoff used when the 429 response carries no usable `Retry-After`.
    pub backoff: Backoff,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_retries: 1,
            backoff: Backoff::Fixed(DEFAULT_RETRY_AFTER_FALLBACK),
        }
    }
}

/// Defines the behavior of the in-memory cache for an API call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheMode {
    /// Read from the cache if a non-expired entry is present; otherwise, fetch from the network
    /// and write the response to the cache. (Default)
    Use,
    /// Drop any cached entry for the key, fetch from the network, and write the new result
    /// to the cache.
    Refresh,
    /// Always fetch from the network and do not read from or write to the cache.
    Bypass,
}
