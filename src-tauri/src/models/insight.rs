use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::news::{Impact, Sentiment, SentimentCounts};

/// Heuristic read of the news flow around one holding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub sentiment: Sentiment,
    pub impact: Impact,
    /// 0..=100
    pub confidence: f64,
    pub reasoning: String,
    pub recommendation: String,
    /// Titles of at most three related news items, in feed order.
    pub related_news: Vec<String>,
}

/// Output of one insight generation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightReport {
    pub insights: Vec<Insight>,
    pub market_sentiment: Sentiment,
    pub market_recommendation: String,
    pub sentiment_counts: SentimentCounts,
}

/// A report committed by the scheduler, tagged for the frontend.
#[derive(Debug, Clone, Serialize)]
pub struct PublishedInsights {
    pub ticket: u64,
    pub run_id: String,
    pub generated_at: DateTime<Utc>,
    pub report: InsightReport,
}
