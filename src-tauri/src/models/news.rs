use serde::{Deserialize, Serialize};

/// Broad topic a news item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsCategory {
    Market,
    Sector,
    Stock,
    Economy,
}

/// Tone of a news item or of a derived insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

/// Severity tag attached to news items and insights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

/// A single market news item. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    /// Body text.
    pub content: String,
    pub source: String,
    /// Free-text display stamp ("2 hours ago"), not a machine timestamp.
    pub timestamp: String,
    pub category: NewsCategory,
    pub sentiment: Sentiment,
    pub impact: Impact,
}

impl NewsItem {
    /// True when the title or the body contains `needle`.
    /// `needle` must already be lowercase.
    pub fn mentions(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.content.to_lowercase().contains(needle)
    }
}

/// Per-sentiment tally, used for both news and insight aggregates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentCounts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentCounts {
    pub fn tally<I: IntoIterator<Item = Sentiment>>(sentiments: I) -> Self {
        let mut counts = Self::default();
        for sentiment in sentiments {
            counts.record(sentiment);
        }
        counts
    }

    pub fn record(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Neutral => self.neutral += 1,
        }
    }

    /// The sentiment with a strict plurality over both others, or neutral.
    pub fn plurality(&self) -> Sentiment {
        if self.positive > self.negative && self.positive > self.neutral {
            Sentiment::Positive
        } else if self.negative > self.positive && self.negative > self.neutral {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plurality_requires_strict_lead() {
        let counts = SentimentCounts { positive: 2, negative: 2, neutral: 1 };
        assert_eq!(counts.plurality(), Sentiment::Neutral);

        let counts = SentimentCounts { positive: 1, negative: 1, neutral: 1 };
        assert_eq!(counts.plurality(), Sentiment::Neutral);

        let counts = SentimentCounts { positive: 3, negative: 1, neutral: 2 };
        assert_eq!(counts.plurality(), Sentiment::Positive);

        let counts = SentimentCounts { positive: 0, negative: 2, neutral: 1 };
        assert_eq!(counts.plurality(), Sentiment::Negative);
    }

    #[test]
    fn test_empty_tally_is_neutral() {
        let counts = SentimentCounts::tally(std::iter::empty());
        assert_eq!(counts, SentimentCounts::default());
        assert_eq!(counts.plurality(), Sentiment::Neutral);
    }

    #[test]
    fn test_enums_serialize_lowercase() {
        let json = serde_json::to_string(&Sentiment::Positive).unwrap();
        assert_eq!(json, "\"positive\"");
        let category: NewsCategory = serde_json::from_str("\"economy\"").unwrap();
        assert_eq!(category, NewsCategory::Economy);
    }
}
