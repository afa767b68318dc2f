use crate::data::MarketDataset;
use crate::engine::dashboard::{self, DashboardOverview};
use crate::engine::news_search::{self, NewsQuery};
use crate::engine::portfolio::{self, STOCK_SEARCH_LIMIT};
use crate::engine::relevance::filter_relevant;
use crate::errors::AppError;
use crate::models::holding::{Holding, HoldingSnapshot, PortfolioSummary};
use crate::models::news::NewsItem;
use crate::models::stock::Stock;
use crate::models::view::{ViewMode, ViewState};

/// Mutable desk contents: the loaded feed, the catalog, the user's holdings
/// and the view state. Derived data is recomputed on every read.
#[derive(Debug, Clone, Default)]
pub struct DeskState {
    pub news: Vec<NewsItem>,
    pub stocks: Vec<Stock>,
    pub holdings: Vec<Holding>,
    pub view: ViewState,
}

impl DeskState {
    pub fn from_dataset(dataset: MarketDataset) -> Self {
        DeskState {
            news: dataset.news,
            stocks: dataset.stocks,
            holdings: dataset.holdings,
            view: ViewState::default(),
        }
    }

    /// News relevant to the current holdings.
    pub fn portfolio_news(&self) -> Vec<NewsItem> {
        filter_relevant(&self.news, &self.holdings)
    }

    pub fn snapshots(&self) -> Vec<HoldingSnapshot> {
        self.holdings.iter().map(HoldingSnapshot::from).collect()
    }

    pub fn summary(&self) -> PortfolioSummary {
        portfolio::summarize(&self.holdings)
    }

    pub fn dashboard(&self) -> DashboardOverview {
        dashboard::overview(&self.news, &self.holdings, &self.portfolio_news())
    }

    /// Without an explicit flag the query follows the view's "portfolio only" toggle.
    pub fn search_news(&self, query: &NewsQuery) -> Vec<NewsItem> {
        let filtered = if query.portfolio_only || self.view.portfolio_only {
            self.portfolio_news()
        } else {
            Vec::new()
        };
        let query = NewsQuery {
            portfolio_only: query.portfolio_only || self.view.portfolio_only,
            ..query.clone()
        };
        news_search::search_news(&self.news, &filtered, &query)
    }

    pub fn search_stocks(&self, query: &str) -> Vec<Stock> {
        portfolio::search_stocks(&self.stocks, query, STOCK_SEARCH_LIMIT)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Add a holding for a catalog symbol.
    pub fn add_holding(
        &mut self,
        symbol: &str,
        quantity: Option<u32>,
        avg_price: Option<f64>,
    ) -> Result<HoldingSnapshot, AppError> {
        let stock = portfolio::find_stock(&self.stocks, symbol)?.clone();
        let holding = portfolio::add_holding(&mut self.holdings, &stock, quantity, avg_price)?;
        Ok(HoldingSnapshot::from(&holding))
    }

    pub fn remove_holding(&mut self, symbol: &str) -> Result<(), AppError> {
        portfolio::remove_holding(&mut self.holdings, symbol).map(|_| ())
    }

    pub fn set_view(&mut self, view: ViewMode) -> ViewState {
        self.view.active_view = view;
        self.view
    }

    pub fn set_portfolio_only(&mut self, enabled: bool) -> ViewState {
        self.view.portfolio_only = enabled;
        self.view
    }
}
