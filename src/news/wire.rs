use serde::Deserialize;

/// Top-level Marketaux `/news/all` envelope. Only `data` is consumed; the
/// `meta` block (pagination counters) is ignored.
#[derive(Deserialize)]
pub(crate) struct NewsEnvelope {
    #[serde(default)]
    pub(crate) data: Option<Vec<RawArticle>>,
}

/// One raw article as the provider ships it. Every field is optional so
/// schema drift surfaces as a dropped record, not a parse failure for the
/// whole payload.
#[derive(Deserialize)]
pub(crate) struct RawArticle {
    #[serde(default)]
    pub(crate) uuid: Option<String>,
    #[serde(default)]
    pub(crate) title: Option<String>,
    #[serde(default)]
    pub(crate) description: Option<String>,
    #[serde(default)]
    pub(crate) snippet: Option<String>,
    #[serde(default)]
    pub(crate) source: Option<String>,
    #[serde(default)]
    pub(crate) url: Option<String>,
    #[serde(default)]
    pub(crate) published_at: Option<String>,
    #[serde(default)]
    pub(crate) entities: Option<Vec<RawEntity>>,
    #[serde(default)]
    pub(crate) sentiment: Option<String>,
    #[serde(default)]
    pub(crate) sentiment_score: Option<f64>,
}

#[derive(Deserialize)]
pub(crate) struct RawEntity {
    #[serde(rename = "type")]
    #[serde(default)]
    pub(crate) entity_type: Option<String>,
    #[serde(default)]
    pub(crate) symbol: Option<String>,
}
