//! Watchlist-relative filtering and sentiment aggregation.
//!
//! Everything here is pure: plain functions over already-normalized
//! articles, no I/O, no state kept between calls. This is the dashboard
//! side of the pipeline, downstream of the cache.

use serde::Serialize;

use crate::news::{Article, Sentiment};

/// The user's set of tracked ticker symbols.
///
/// Symbols are stored upper-cased and unique, in insertion order (the order
/// a dashboard displays them). Filtering treats the list as a set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Watchlist {
    symbols: Vec<String>,
}

impl Watchlist {
    /// Creates an empty watchlist.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a symbol. Input is trimmed and upper-cased; blank input and
    /// duplicates are rejected. Returns whether the list changed.
    pub fn add(&mut self, symbol: impl AsRef<str>) -> bool {
        let formatted = symbol.as_ref().trim().to_ascii_uppercase();
        if formatted.is_empty() || self.symbols.contains(&formatted) {
            return false;
        }
        self.symbols.push(formatted);
        true
    }

    /// Removes a symbol (case-insensitive). Returns whether it was present.
    pub fn remove(&mut self, symbol: impl AsRef<str>) -> bool {
        let formatted = symbol.as_ref().trim().to_ascii_uppercase();
        let before = self.symbols.len();
        self.symbols.retain(|s| *s != formatted);
        self.symbols.len() != before
    }

    /// Whether the symbol is tracked (case-insensitive).
    #[must_use]
    pub fn contains(&self, symbol: impl AsRef<str>) -> bool {
        let formatted = symbol.as_ref().trim().to_ascii_uppercase();
        self.symbols.contains(&formatted)
    }

    /// The tracked symbols in insertion order.
    #[must_use]
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Watchlist {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut wl = Self::new();
        for s in iter {
            wl.add(s);
        }
        wl
    }
}

/// How to partition a feed against a watchlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// Everything passes through.
    All,
    /// Articles tagged with at least one watched symbol.
    Relevant,
    /// The complement of `Relevant`.
    Other,
}

/// Filters articles by watchlist relevance.
///
/// `Relevant` and `Other` partition the input: together they cover exactly
/// what `All` returns, with no overlap. With an empty watchlist, nothing is
/// relevant and `Other` returns everything.
#[must_use]
pub fn filter_articles(
    articles: &[Article],
    watchlist: &Watchlist,
    mode: FilterMode,
) -> Vec<Article> {
    articles
        .iter()
        .filter(|a| match mode {
            FilterMode::All => true,
            FilterMode::Relevant => is_relevant(a, watchlist),
            FilterMode::Other => !is_relevant(a, watchlist),
        })
        .cloned()
        .collect()
}

fn is_relevant(article: &Article, watchlist: &Watchlist) -> bool {
    article.related_symbols.iter().any(|s| watchlist.contains(s))
}

/// Share of each sentiment class over a feed, in percent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SentimentBreakdown {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

/// Percentage of each sentiment class over the article count, each rounded
/// to one decimal independently. The three shares may not sum to exactly
/// 100.0; that is accepted, not corrected. An empty slice yields all zeros.
#[must_use]
pub fn aggregate_sentiment(articles: &[Article]) -> SentimentBreakdown {
    if articles.is_empty() {
        return SentimentBreakdown::default();
    }

    let total = articles.len() as f64;
    let count = |wanted: Sentiment| {
        let n = articles.iter().filter(|a| a.sentiment == wanted).count();
        round1(n as f64 / total * 100.0)
    };

    SentimentBreakdown {
        positive: count(Sentiment::Positive),
        neutral: count(Sentiment::Neutral),
        negative: count(Sentiment::Negative),
    }
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
