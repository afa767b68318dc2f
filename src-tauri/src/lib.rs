#[cfg(feature = "desktop")]
pub mod commands;
pub mod data;
pub mod desk;
pub mod engine;
pub mod errors;
pub mod models;

use tokio::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::data::fixtures;
use crate::desk::DeskState;
use crate::engine::scheduler::InsightScheduler;
use crate::errors::AppError;
use crate::models::config::AppConfig;
use crate::models::holding::{Holding, HoldingSnapshot};
use crate::models::news::NewsItem;

/// Shared application state, accessible from all Tauri commands.
pub struct AppState {
    pub desk: Mutex<DeskState>,
    /// Delayed, cancelable insight generation.
    pub insights: InsightScheduler,
}

impl AppState {
    /// Load the configured dataset and build the initial state.
    pub fn initialize(config: AppConfig) -> Result<Self, AppError> {
        let source = fixtures::source_for(&config);
        let dataset = source.load()?;
        info!(
            "Dataset ready from {}: {} news, {} stocks, {} holdings",
            source.describe(),
            dataset.news.len(),
            dataset.stocks.len(),
            dataset.holdings.len()
        );

        Ok(AppState {
            desk: Mutex::new(DeskState::from_dataset(dataset)),
            insights: InsightScheduler::new(config.analysis_delay()),
        })
    }

    /// Add a holding; any pending insight request is dropped.
    pub async fn add_holding(
        &self,
        symbol: &str,
        quantity: Option<u32>,
        avg_price: Option<f64>,
    ) -> Result<HoldingSnapshot, AppError> {
        let mut desk = self.desk.lock().await;
        let holding = desk.add_holding(symbol, quantity, avg_price)?;
        self.insights.invalidate();
        Ok(holding)
    }

    /// Remove a holding; any pending insight request is dropped.
    pub async fn remove_holding(&self, symbol: &str) -> Result<(), AppError> {
        let mut desk = self.desk.lock().await;
        desk.remove_holding(symbol)?;
        self.insights.invalidate();
        Ok(())
    }

    /// Take a ticket and snapshot the inputs for an insight request.
    pub async fn prepare_insights(&self) -> (u64, Vec<NewsItem>, Vec<Holding>) {
        // The ticket comes first so a mutation racing the snapshot supersedes it.
        let ticket = self.insights.request();
        let desk = self.desk.lock().await;
        (ticket, desk.news.clone(), desk.holdings.clone())
    }
}

/// Initialize tracing. `RUST_LOG` wins over the configured level.
pub fn init_tracing(config: &AppConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .try_init();
}

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let config = AppConfig::from_env().unwrap_or_else(|e| {
        eprintln!("{}, falling back to defaults", e);
        AppConfig::default()
    });
    init_tracing(&config);

    info!("Starting NewsDesk application");

    let app_state = AppState::initialize(config).expect("Failed to load market dataset");

    tauri::Builder::default()
        .manage(app_state)
        .invoke_handler(tauri::generate_handler![
            commands::get_news,
            commands::get_portfolio_news,
            commands::search_news,
            commands::get_stocks,
            commands::search_stocks,
            commands::get_portfolio,
            commands::add_holding,
            commands::remove_holding,
            commands::get_portfolio_summary,
            commands::get_dashboard,
            commands::get_view,
            commands::set_view,
            commands::set_portfolio_only,
            commands::generate_insights,
            commands::get_latest_insights,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn test_initialize_with_bundled_sample() {
        let config = AppConfig { analysis_delay_ms: 0, ..AppConfig::default() };
        let state = AppState::initialize(config).unwrap();
        assert_eq!(state.desk.lock().await.holdings.len(), 5);
        assert!(state.insights.delay().is_zero());
    }

    #[tokio::test(start_paused = true)]
    async fn test_add_holding_drops_pending_insights() {
        let config = AppConfig { analysis_delay_ms: 1000, ..AppConfig::default() };
        let state = Arc::new(AppState::initialize(config).unwrap());

        let (ticket, news, holdings) = state.prepare_insights().await;
        let pending = {
            let state = state.clone();
            tokio::spawn(async move { state.insights.run(ticket, news, holdings).await })
        };
        tokio::time::sleep(Duration::from_millis(10)).await;

        state.add_holding("WIPRO", Some(100), Some(410.0)).await.unwrap();

        assert!(matches!(pending.await.unwrap(), Err(AppError::InsightsSuperseded)));
        assert!(state.insights.latest().await.is_none());
        assert_eq!(state.desk.lock().await.holdings.len(), 6);
    }

    #[tokio::test(start_paused = true)]
    async fn test_remove_holding_drops_pending_insights() {
        let config = AppConfig { analysis_delay_ms: 1000, ..AppConfig::default() };
        let state = Arc::new(AppState::initialize(config).unwrap());

        let (ticket, news, holdings) = state.prepare_insights().await;
        let pending = {
            let state = state.clone();
            tokio::spawn(async move { state.insights.run(ticket, news, holdings).await })
        };
        tokio::time::sleep(Duration::from_millis(10)).await;

        state.remove_holding("tcs").await.unwrap();

        assert!(matches!(pending.await.unwrap(), Err(AppError::InsightsSuperseded)));
        assert!(state.insights.latest().await.is_none());

        // A fresh request over the new holdings publishes.
        let (ticket, news, holdings) = state.prepare_insights().await;
        let published = state.insights.run(ticket, news, holdings).await.unwrap();
        assert_eq!(published.report.insights.len(), 4);
        assert!(published.report.insights.iter().all(|i| i.symbol != "TCS"));
    }

    #[tokio::test]
    async fn test_failed_mutation_keeps_pending_ticket() {
        let config = AppConfig { analysis_delay_ms: 0, ..AppConfig::default() };
        let state = AppState::initialize(config).unwrap();
        let (ticket, _, _) = state.prepare_insights().await;

        let err = state.remove_holding("ADANIENT").await.unwrap_err();
        assert!(matches!(err, AppError::HoldingNotFound(_)));
        assert!(state.insights.is_current(ticket));
    }

    #[test]
    fn test_initialize_with_missing_dataset() {
        let config = AppConfig {
            dataset_path: Some("/nonexistent/market.json".into()),
            ..AppConfig::default()
        };
        assert!(matches!(AppState::initialize(config), Err(AppError::FileRead(_))));
    }
}
