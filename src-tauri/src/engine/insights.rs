use crate::models::holding::Holding;
use crate::models::insight::{Insight, InsightReport};
use crate::models::news::{Impact, NewsItem, Sentiment, SentimentCounts};

use super::relevance::related_to;

/// Score above which news flow counts as positive (below the negation, negative).
const SENTIMENT_THRESHOLD: f64 = 0.3;
/// Related-item count above which a directional read is high impact.
const HIGH_IMPACT_COVERAGE: usize = 2;
const MAX_CONFIDENCE: f64 = 85.0;
const BASE_CONFIDENCE: f64 = 60.0;
const CONFIDENCE_PER_SCORE: f64 = 30.0;
const MIXED_CONFIDENCE: f64 = 50.0;
const NO_COVERAGE_CONFIDENCE: f64 = 30.0;
const MAX_RELATED_TITLES: usize = 3;

const NO_COVERAGE_REASONING: &str =
    "Limited news coverage makes sentiment analysis challenging. Consider other technical indicators.";
const NO_COVERAGE_RECOMMENDATION: &str = "Monitor for news developments and technical signals";
const HOLD_OR_ADD: &str = "Consider holding or adding to position";
const MONITOR_RECOVERY: &str = "Monitor for potential recovery";
const BOOK_PROFITS: &str = "Consider booking profits or reducing position";
const STOP_LOSS: &str = "Exercise caution, consider stop-loss";
const HOLD_AND_MONITOR: &str = "Hold current position and monitor developments";

const MARKET_FAVORABLE: &str = "Market sentiment appears favorable. Consider maintaining or increasing exposure to well-performing stocks.";
const MARKET_DEFENSIVE: &str =
    "Market sentiment shows concerns. Consider risk management and defensive positioning.";
const MARKET_MIXED: &str =
    "Mixed market signals suggest a cautious approach. Focus on stock-specific fundamentals.";

/// Build one insight per holding and the portfolio-wide verdict.
///
/// `filtered_news` is expected to be the output of
/// [`filter_relevant`](super::relevance::filter_relevant), but any slice works.
pub fn generate_insights(filtered_news: &[NewsItem], holdings: &[Holding]) -> InsightReport {
    let insights: Vec<Insight> = holdings
        .iter()
        .map(|h| analyze_holding(filtered_news, h))
        .collect();

    let sentiment_counts = SentimentCounts::tally(insights.iter().map(|i| i.sentiment));
    let market_sentiment = sentiment_counts.plurality();

    InsightReport {
        insights,
        market_sentiment,
        market_recommendation: market_recommendation(market_sentiment).to_string(),
        sentiment_counts,
    }
}

/// Score the news flow around a single holding.
pub fn analyze_holding(filtered_news: &[NewsItem], holding: &Holding) -> Insight {
    let related = related_to(filtered_news, &holding.symbol);
    let counts = SentimentCounts::tally(related.iter().map(|n| n.sentiment));
    let total = related.len();

    let (sentiment, impact, confidence, reasoning, recommendation) = if total == 0 {
        (
            Sentiment::Neutral,
            Impact::Low,
            NO_COVERAGE_CONFIDENCE,
            NO_COVERAGE_REASONING.to_string(),
            NO_COVERAGE_RECOMMENDATION,
        )
    } else {
        let score = (counts.positive as f64 - counts.negative as f64) / total as f64;
        let in_profit = holding.pnl() > 0.0;

        if score > SENTIMENT_THRESHOLD {
            (
                Sentiment::Positive,
                directional_impact(total),
                directional_confidence(score),
                format!(
                    "{} positive news items indicate strong market sentiment. Recent developments suggest potential upward momentum.",
                    counts.positive
                ),
                if in_profit { HOLD_OR_ADD } else { MONITOR_RECOVERY },
            )
        } else if score < -SENTIMENT_THRESHOLD {
            (
                Sentiment::Negative,
                directional_impact(total),
                directional_confidence(score),
                format!(
                    "{} negative news items suggest market concerns. Recent developments indicate potential downward pressure.",
                    counts.negative
                ),
                if in_profit { BOOK_PROFITS } else { STOP_LOSS },
            )
        } else {
            (
                Sentiment::Neutral,
                Impact::Low,
                MIXED_CONFIDENCE,
                format!(
                    "Mixed news sentiment with {} positive and {} negative items. Market appears to be in consolidation phase.",
                    counts.positive, counts.negative
                ),
                HOLD_AND_MONITOR,
            )
        }
    };

    Insight {
        id: format!("insight-{}", holding.symbol),
        symbol: holding.symbol.clone(),
        name: holding.name.clone(),
        sentiment,
        impact,
        confidence,
        reasoning,
        recommendation: recommendation.to_string(),
        related_news: related
            .iter()
            .take(MAX_RELATED_TITLES)
            .map(|n| n.title.clone())
            .collect(),
    }
}

/// Fixed advice for the portfolio-wide sentiment.
pub fn market_recommendation(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => MARKET_FAVORABLE,
        Sentiment::Negative => MARKET_DEFENSIVE,
        Sentiment::Neutral => MARKET_MIXED,
    }
}

fn directional_impact(total: usize) -> Impact {
    if total > HIGH_IMPACT_COVERAGE {
        Impact::High
    } else {
        Impact::Medium
    }
}

/// |score| is in [0, 1], so the result stays within [60, 85].
fn directional_confidence(score: f64) -> f64 {
    (BASE_CONFIDENCE + score.abs() * CONFIDENCE_PER_SCORE).min(MAX_CONFIDENCE)
}
