pub mod fixtures;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::holding::Holding;
use crate::models::news::NewsItem;
use crate::models::stock::Stock;

/// Everything the desk needs at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketDataset {
    #[serde(default)]
    pub news: Vec<NewsItem>,
    #[serde(default)]
    pub stocks: Vec<Stock>,
    /// Starting portfolio.
    #[serde(default)]
    pub holdings: Vec<Holding>,
}

/// Where news, the stock catalog and the starting portfolio come from.
pub trait MarketDataSource: Send + Sync {
    fn describe(&self) -> String;

    fn load(&self) -> Result<MarketDataset, AppError>;
}
