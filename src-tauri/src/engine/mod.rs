pub mod dashboard;
pub mod insights;
pub mod news_search;
pub mod portfolio;
pub mod relevance;
pub mod scheduler;
