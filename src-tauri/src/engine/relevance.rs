use crate::models::holding::Holding;
use crate::models::news::NewsItem;

/// Keep the news items that mention at least one held symbol.
///
/// Matching is a case-insensitive substring test on title and body, so short
/// symbols can match inside unrelated words. Order of `news` is preserved.
pub fn filter_relevant(news: &[NewsItem], holdings: &[Holding]) -> Vec<NewsItem> {
    let symbols: Vec<String> = holdings.iter().map(|h| h.symbol.to_lowercase()).collect();
    if symbols.is_empty() {
        return Vec::new();
    }

    news.iter()
        .filter(|item| symbols.iter().any(|s| item.mentions(s)))
        .cloned()
        .collect()
}

/// News items mentioning a single symbol, same rule as [`filter_relevant`].
pub fn related_to<'a>(news: &'a [NewsItem], symbol: &str) -> Vec<&'a NewsItem> {
    let needle = symbol.to_lowercase();
    news.iter().filter(|item| item.mentions(&needle)).collect()
}
