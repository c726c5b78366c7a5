//! Raw provider records to [`Article`] values. This is the only place that
//! sees provider field names; everything downstream works on the model.

use chrono::{DateTime, Utc};

use super::model::{Article, Sentiment};
use super::wire::RawArticle;

/// Maps a raw payload to articles, preserving upstream order.
///
/// A record missing its identifier, its title, or a parseable publication
/// time is dropped and the rest of the payload is kept. Nothing is ever
/// fabricated for a broken record.
pub(crate) fn normalize_articles(raw: Vec<RawArticle>) -> Vec<Article> {
    raw.into_iter().filter_map(normalize_record).collect()
}

fn normalize_record(raw: RawArticle) -> Option<Article> {
    let Some(id) = non_blank(raw.uuid) else {
        drop_warning("uuid");
        return None;
    };
    let Some(title) = non_blank(raw.title) else {
        drop_warning("title");
        return None;
    };
    let Some(published_at) = raw.published_at.as_deref().and_then(parse_timestamp) else {
        drop_warning("published_at");
        return None;
    };

    let description = non_blank(raw.description).or_else(|| non_blank(raw.snippet));

    let related_symbols = raw
        .entities
        .unwrap_or_default()
        .into_iter()
        .filter(|e| e.entity_type.as_deref() == Some("equity"))
        .filter_map(|e| e.symbol)
        .collect();

    let (sentiment, sentiment_score) = match raw.sentiment.as_deref() {
        Some(label) => (
            parse_sentiment(label),
            raw.sentiment_score.filter(|s| (0.0..=1.0).contains(s)),
        ),
        None => (derive_sentiment(&id), None),
    };

    Some(Article {
        id,
        title,
        description,
        source: raw.source.unwrap_or_default(),
        url: raw.url.unwrap_or_default(),
        published_at,
        related_symbols,
        sentiment,
        sentiment_score,
    })
}

fn non_blank(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.trim().is_empty())
}

fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Upstream sentiment labels, case-insensitive. Anything unrecognized
/// normalizes to neutral rather than failing the record.
fn parse_sentiment(label: &str) -> Sentiment {
    match label.trim().to_ascii_lowercase().as_str() {
        "positive" => Sentiment::Positive,
        "negative" => Sentiment::Negative,
        _ => Sentiment::Neutral,
    }
}

/// Fallback when the provider sends no sentiment: a three-way split on an
/// FNV-1a hash of the identifier. Stable across calls and across processes,
/// so re-normalizing the same article always yields the same label.
pub(crate) fn derive_sentiment(id: &str) -> Sentiment {
    let mut h: u64 = 0xcbf2_9ce4_8422_2325;
    for b in id.bytes() {
        h ^= u64::from(b);
        h = h.wrapping_mul(0x0000_0100_0000_01b3);
    }
    match h % 3 {
        0 => Sentiment::Positive,
        1 => Sentiment::Neutral,
        _ => Sentiment::Negative,
    }
}

#[cfg(feature = "tracing")]
fn drop_warning(field: &str) {
    tracing::warn!(missing = field, "dropping malformed article record");
}

#[cfg(not(feature = "tracing"))]
fn drop_warning(_field: &str) {}
