//! marketaux-rs: ergonomic Marketaux news client.
//!
//! Fetches financial news for a set of ticker symbols, normalizes the
//! provider's payload into typed [`Article`] values with a deterministic
//! sentiment label, and answers repeated queries from a TTL cache so a
//! polling dashboard stays inside the provider's rate limits. Rate-limit
//! responses are retried once, honoring `Retry-After`.
//!
//! ```no_run
//! use marketaux_rs::{MxClient, news};
//!
//! # async fn run() -> Result<(), marketaux_rs::MxError> {
//! let client = MxClient::builder().api_token("...").build()?;
//! let articles = news::get_news(&client, ["AAPL", "MSFT"]).await?;
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod feed;
pub mod news;

pub use crate::core::cache::QueryKey;
pub use crate::core::client::{Backoff, CacheMode, RetryConfig};
pub use crate::core::{MxClient, MxClientBuilder, MxError};
pub use feed::{FilterMode, SentimentBreakdown, Watchlist, aggregate_sentiment, filter_articles};
pub use news::{Article, NewsBuilder, Sentiment, get_news, refresh_news};
