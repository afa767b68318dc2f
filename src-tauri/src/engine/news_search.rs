use serde::{Deserialize, Serialize};

use crate::models::news::{NewsCategory, NewsItem, Sentiment};

/// News browser query. Absent filters match everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewsQuery {
    #[serde(default)]
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<NewsCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
    /// Search only the portfolio-relevant feed.
    #[serde(default)]
    pub portfolio_only: bool,
}

pub fn search_news(news: &[NewsItem], filtered_news: &[NewsItem], query: &NewsQuery) -> Vec<NewsItem> {
    let feed = if query.portfolio_only { filtered_news } else { news };
    let needle = query.query.trim().to_lowercase();

    feed.iter()
        .filter(|item| needle.is_empty() || item.mentions(&needle))
        .filter(|item| query.category.map_or(true, |c| item.category == c))
        .filter(|item| query.sentiment.map_or(true, |s| item.sentiment == s))
        .cloned()
        .collect()
}
