use serde::Serialize;

use crate::models::holding::{Holding, HoldingSnapshot};
use crate::models::news::{NewsItem, SentimentCounts};

use super::portfolio::pnl_percent_of;

/// Items shown in each dashboard list.
const PREVIEW_LEN: usize = 5;

/// Landing page numbers.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardOverview {
    pub total_value: f64,
    pub total_pnl: f64,
    pub total_pnl_percent: Option<f64>,
    pub news_count: usize,
    pub portfolio_news_count: usize,
    /// Over all news, not only portfolio-relevant items.
    pub news_sentiment: SentimentCounts,
    pub recent_news: Vec<NewsItem>,
    pub top_holdings: Vec<HoldingSnapshot>,
}

pub fn overview(news: &[NewsItem], holdings: &[Holding], filtered_news: &[NewsItem]) -> DashboardOverview {
    let total_value: f64 = holdings.iter().map(Holding::total_value).sum();
    let total_pnl: f64 = holdings.iter().map(Holding::pnl).sum();

    DashboardOverview {
        total_value,
        total_pnl,
        total_pnl_percent: pnl_percent_of(total_value, total_pnl),
        news_count: news.len(),
        portfolio_news_count: filtered_news.len(),
        news_sentiment: SentimentCounts::tally(news.iter().map(|n| n.sentiment)),
        recent_news: news.iter().take(PREVIEW_LEN).cloned().collect(),
        top_holdings: holdings.iter().take(PREVIEW_LEN).map(HoldingSnapshot::from).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::relevance::filter_relevant;
    use crate::engine::relevance::tests::{make_holding, make_news};
    use crate::models::news::Sentiment;

    #[test]
    fn test_overview_counts_and_previews() {
        let news: Vec<NewsItem> = (0..7)
            .map(|i| {
                let sentiment = if i % 2 == 0 { Sentiment::Positive } else { Sentiment::Negative };
                make_news(&i.to_string(), &format!("Story {}", i), "TCS update", sentiment)
            })
            .collect();
        let holdings = vec![make_holding("TCS", 3650.0, 3580.5)];
        let filtered = filter_relevant(&news, &holdings);
        let view = overview(&news, &holdings, &filtered);

        assert_eq!(view.news_count, 7);
        assert_eq!(view.portfolio_news_count, 7);
        assert_eq!(view.news_sentiment.positive, 4);
        assert_eq!(view.news_sentiment.negative, 3);
        assert_eq!(view.recent_news.len(), 5);
        assert_eq!(view.top_holdings.len(), 1);
        assert!((view.total_pnl - (-695.0)).abs() < 1e-6);
        assert!(view.total_pnl_percent.unwrap() < 0.0);
    }

    #[test]
    fn test_empty_dashboard() {
        let view = overview(&[], &[], &[]);
        assert_eq!(view.total_value, 0.0);
        assert_eq!(view.total_pnl_percent, None);
        assert!(view.recent_news.is_empty());
    }
}
