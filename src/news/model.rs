use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Three-way sentiment classification of an article.
///
/// Serialized in the upper-case form the dashboard API uses
/// (`"POSITIVE"`, `"NEUTRAL"`, `"NEGATIVE"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => f.write_str("POSITIVE"),
            Self::Neutral => f.write_str("NEUTRAL"),
            Self::Negative => f.write_str("NEGATIVE"),
        }
    }
}

/// A single normalized news article.
///
/// Immutable value type: construct once, clone freely. Serializes with
/// camelCase field names, matching the JSON shape dashboard consumers
/// expect.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// The provider's stable unique identifier (UUID). Sole identity key.
    pub id: String,
    /// The headline of the article.
    pub title: String,
    /// Short body text; the provider's `description`, falling back to its
    /// `snippet`, absent when neither is supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The publisher of the article (e.g., "reuters.com").
    pub source: String,
    /// A direct link to the article.
    pub url: String,
    /// When the provider says the article was published.
    pub published_at: DateTime<Utc>,
    /// Ticker symbols of the equities the provider tagged on this article,
    /// in the provider's order.
    pub related_symbols: Vec<String>,
    /// Sentiment label, upstream-supplied or derived. Deterministic for a
    /// given raw article.
    pub sentiment: Sentiment,
    /// Confidence of the sentiment label in `[0, 1]`, when the provider
    /// supplied one. Derived labels carry no score.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment_score: Option<f64>,
}
