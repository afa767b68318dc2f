use tauri::{AppHandle, Emitter};
use tracing::info;

use crate::engine::dashboard::DashboardOverview;
use crate::engine::news_search::NewsQuery;
use crate::errors::AppError;
use crate::models::holding::{HoldingSnapshot, PortfolioSummary};
use crate::models::insight::PublishedInsights;
use crate::models::news::NewsItem;
use crate::models::stock::Stock;
use crate::models::view::{ViewMode, ViewState};
use crate::AppState;

// ── News Commands ──

/// Full news feed.
#[tauri::command]
pub async fn get_news(state: tauri::State<'_, AppState>) -> Result<Vec<NewsItem>, AppError> {
    let desk = state.desk.lock().await;
    Ok(desk.news.clone())
}

/// News relevant to the current holdings.
#[tauri::command]
pub async fn get_portfolio_news(
    state: tauri::State<'_, AppState>,
) -> Result<Vec<NewsItem>, AppError> {
    let desk = state.desk.lock().await;
    Ok(desk.portfolio_news())
}

/// News browser search.
#[tauri::command]
pub async fn search_news(
    state: tauri::State<'_, AppState>,
    query: NewsQuery,
) -> Result<Vec<NewsItem>, AppError> {
    let desk = state.desk.lock().await;
    Ok(desk.search_news(&query))
}

// ── Portfolio Commands ──

#[tauri::command]
pub async fn get_stocks(state: tauri::State<'_, AppState>) -> Result<Vec<Stock>, AppError> {
    let desk = state.desk.lock().await;
    Ok(desk.stocks.clone())
}

/// Catalog lookup for the add-holding form.
#[tauri::command]
pub async fn search_stocks(
    state: tauri::State<'_, AppState>,
    query: String,
) -> Result<Vec<Stock>, AppError> {
    let desk = state.desk.lock().await;
    Ok(desk.search_stocks(&query))
}

#[tauri::command]
pub async fn get_portfolio(
    state: tauri::State<'_, AppState>,
) -> Result<Vec<HoldingSnapshot>, AppError> {
    let desk = state.desk.lock().await;
    Ok(desk.snapshots())
}

/// Add a holding from the catalog. Empty form fields arrive as `null`.
#[tauri::command]
pub async fn add_holding(
    state: tauri::State<'_, AppState>,
    symbol: String,
    quantity: Option<u32>,
    avg_price: Option<f64>,
) -> Result<HoldingSnapshot, AppError> {
    state.add_holding(&symbol, quantity, avg_price).await
}

#[tauri::command]
pub async fn remove_holding(
    state: tauri::State<'_, AppState>,
    symbol: String,
) -> Result<(), AppError> {
    state.remove_holding(&symbol).await
}

#[tauri::command]
pub async fn get_portfolio_summary(
    state: tauri::State<'_, AppState>,
) -> Result<PortfolioSummary, AppError> {
    let desk = state.desk.lock().await;
    Ok(desk.summary())
}

#[tauri::command]
pub async fn get_dashboard(
    state: tauri::State<'_, AppState>,
) -> Result<DashboardOverview, AppError> {
    let desk = state.desk.lock().await;
    Ok(desk.dashboard())
}

// ── View Commands ──

#[tauri::command]
pub async fn get_view(state: tauri::State<'_, AppState>) -> Result<ViewState, AppError> {
    let desk = state.desk.lock().await;
    Ok(desk.view)
}

#[tauri::command]
pub async fn set_view(
    state: tauri::State<'_, AppState>,
    view: ViewMode,
) -> Result<ViewState, AppError> {
    let mut desk = state.desk.lock().await;
    Ok(desk.set_view(view))
}

#[tauri::command]
pub async fn set_portfolio_only(
    state: tauri::State<'_, AppState>,
    enabled: bool,
) -> Result<ViewState, AppError> {
    let mut desk = state.desk.lock().await;
    Ok(desk.set_portfolio_only(enabled))
}

// ── Insight Commands ──

/// Analyze the current holdings. Resolves with `INSIGHTS_SUPERSEDED` when a
/// newer request or a portfolio change overtakes this one.
#[tauri::command]
pub async fn generate_insights(
    app: AppHandle,
    state: tauri::State<'_, AppState>,
) -> Result<PublishedInsights, AppError> {
    // The desk lock is released before the delay starts.
    let (ticket, news, holdings) = state.prepare_insights().await;

    info!("Generating insights #{} for {} holdings", ticket, holdings.len());
    emit_status(&app, ticket, "analyzing");

    let result = state.insights.run(ticket, news, holdings).await;
    match &result {
        Ok(_) => emit_status(&app, ticket, "ready"),
        Err(AppError::InsightsSuperseded) => emit_status(&app, ticket, "superseded"),
        Err(_) => emit_status(&app, ticket, "failed"),
    }
    result
}

#[tauri::command]
pub async fn get_latest_insights(
    state: tauri::State<'_, AppState>,
) -> Result<Option<PublishedInsights>, AppError> {
    Ok(state.insights.latest().await)
}

// ── Helpers ──

/// Tell the frontend where an insight request stands (drives the spinner).
fn emit_status(app: &AppHandle, ticket: u64, status: &str) {
    let _ = app.emit(
        "insights-status",
        serde_json::json!({ "ticket": ticket, "status": status }),
    );
}
