use tracing::info;

use crate::errors::AppError;
use crate::models::holding::{Holding, PortfolioSummary};
use crate::models::stock::Stock;

/// Number of catalog matches the add-holding form shows.
pub const STOCK_SEARCH_LIMIT: usize = 5;

/// Append a holding for `stock`. `quantity` and `avg_price` come straight from
/// the form and are `None` while the field is empty.
pub fn add_holding(
    holdings: &mut Vec<Holding>,
    stock: &Stock,
    quantity: Option<u32>,
    avg_price: Option<f64>,
) -> Result<Holding, AppError> {
    let quantity = quantity.ok_or(AppError::IncompleteHolding("quantity"))?;
    let avg_price = avg_price.ok_or(AppError::IncompleteHolding("average price"))?;

    if !avg_price.is_finite() || avg_price <= 0.0 {
        return Err(AppError::InvalidHolding(format!(
            "average price must be positive, got {}",
            avg_price
        )));
    }
    if holdings.iter().any(|h| h.symbol.eq_ignore_ascii_case(&stock.symbol)) {
        return Err(AppError::DuplicateHolding(stock.symbol.clone()));
    }

    let holding = Holding {
        symbol: stock.symbol.clone(),
        name: stock.name.clone(),
        quantity,
        avg_price,
        current_price: stock.price,
    };
    holdings.push(holding.clone());
    info!("Added holding {} x{} @ {:.2}", holding.symbol, quantity, avg_price);
    Ok(holding)
}

/// Remove the holding for `symbol`, keeping the order of the rest.
pub fn remove_holding(holdings: &mut Vec<Holding>, symbol: &str) -> Result<Holding, AppError> {
    let idx = holdings
        .iter()
        .position(|h| h.symbol.eq_ignore_ascii_case(symbol))
        .ok_or_else(|| AppError::HoldingNotFound(symbol.to_string()))?;
    let removed = holdings.remove(idx);
    info!("Removed holding {}", removed.symbol);
    Ok(removed)
}

pub fn summarize(holdings: &[Holding]) -> PortfolioSummary {
    let total_value: f64 = holdings.iter().map(Holding::total_value).sum();
    let total_pnl: f64 = holdings.iter().map(Holding::pnl).sum();

    PortfolioSummary {
        holding_count: holdings.len(),
        total_value,
        total_pnl,
        total_pnl_percent: pnl_percent_of(total_value, total_pnl),
    }
}

/// P&L relative to cost basis (`value - pnl`).
pub fn pnl_percent_of(total_value: f64, total_pnl: f64) -> Option<f64> {
    let cost_basis = total_value - total_pnl;
    if !cost_basis.is_finite() || cost_basis <= 0.0 {
        return None;
    }
    let pct = total_pnl / cost_basis * 100.0;
    pct.is_finite().then_some(pct)
}

/// Catalog entries whose name or symbol contains `query`.
pub fn search_stocks<'a>(catalog: &'a [Stock], query: &str, limit: usize) -> Vec<&'a Stock> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    catalog
        .iter()
        .filter(|s| s.name.to_lowercase().contains(&needle) || s.symbol.to_lowercase().contains(&needle))
        .take(limit)
        .collect()
}

pub fn find_stock<'a>(catalog: &'a [Stock], symbol: &str) -> Result<&'a Stock, AppError> {
    catalog
        .iter()
        .find(|s| s.symbol.eq_ignore_ascii_case(symbol))
        .ok_or_else(|| AppError::StockNotFound(symbol.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_stock(symbol: &str, name: &str, price: f64) -> Stock {
        Stock {
            symbol: symbol.to_string(),
            name: name.to_string(),
            price,
            change: 0.0,
            change_percent: 0.0,
            volume: 1_000_000,
            market_cap: "1.0L Cr".to_string(),
            sector: "Banking".to_string(),
        }
    }

    fn catalog() -> Vec<Stock> {
        vec![
            make_stock("HDFCBANK", "HDFC Bank Ltd", 1680.25),
            make_stock("SBIN", "State Bank of India", 625.3),
            make_stock("WIPRO", "Wipro Ltd", 425.8),
        ]
    }

    #[test]
    fn test_add_uses_catalog_price() {
        let mut holdings = Vec::new();
        let stocks = catalog();
        let added = add_holding(&mut holdings, &stocks[1], Some(40), Some(600.0)).unwrap();
        assert_eq!(added.symbol, "SBIN");
        assert_eq!(added.current_price, 625.3);
        assert_eq!(holdings.len(), 1);
        assert!((holdings[0].pnl() - 1012.0).abs() < 1e-6);
    }

    #[test]
    fn test_incomplete_form_is_rejected() {
        let mut holdings = Vec::new();
        let stocks = catalog();
        let err = add_holding(&mut holdings, &stocks[0], None, Some(1600.0)).unwrap_err();
        assert!(matches!(err, AppError::IncompleteHolding("quantity")));
        let err = add_holding(&mut holdings, &stocks[0], Some(5), None).unwrap_err();
        assert!(matches!(err, AppError::IncompleteHolding(_)));
        assert!(holdings.is_empty());
    }

    #[test]
    fn test_non_positive_avg_price_is_rejected() {
        let mut holdings = Vec::new();
        let stocks = catalog();
        for price in [0.0, -1.0, f64::NAN] {
            let err = add_holding(&mut holdings, &stocks[0], Some(5), Some(price)).unwrap_err();
            assert!(matches!(err, AppError::InvalidHolding(_)));
        }
        assert!(holdings.is_empty());
    }

    #[test]
    fn test_duplicate_symbol_is_rejected() {
        let mut holdings = Vec::new();
        let stocks = catalog();
        add_holding(&mut holdings, &stocks[2], Some(10), Some(400.0)).unwrap();
        let err = add_holding(&mut holdings, &stocks[2], Some(99), Some(1.0)).unwrap_err();
        assert!(matches!(err, AppError::DuplicateHolding(_)));
        assert_eq!(holdings.len(), 1);
        assert_eq!(holdings[0].quantity, 10);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut holdings = Vec::new();
        let stocks = catalog();
        for stock in &stocks {
            add_holding(&mut holdings, stock, Some(1), Some(100.0)).unwrap();
        }
        remove_holding(&mut holdings, "SBIN").unwrap();
        let symbols: Vec<&str> = holdings.iter().map(|h| h.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["HDFCBANK", "WIPRO"]);

        let err = remove_holding(&mut holdings, "SBIN").unwrap_err();
        assert!(matches!(err, AppError::HoldingNotFound(_)));
    }

    #[test]
    fn test_remove_ignores_symbol_case() {
        let mut holdings = Vec::new();
        let stocks = catalog();
        add_holding(&mut holdings, &stocks[1], Some(5), Some(600.0)).unwrap();
        let removed = remove_holding(&mut holdings, "sbin").unwrap();
        assert_eq!(removed.symbol, "SBIN");
        assert!(holdings.is_empty());
    }

    #[test]
    fn test_summary() {
        let holdings = vec![
            Holding {
                symbol: "RELIANCE".to_string(),
                name: "Reliance Industries Ltd".to_string(),
                quantity: 50,
                avg_price: 2450.0,
                current_price: 2580.5,
            },
            Holding {
                symbol: "INFY".to_string(),
                name: "Infosys Ltd".to_string(),
                quantity: 75,
                avg_price: 1420.0,
                current_price: 1380.75,
            },
        ];
        let summary = summarize(&holdings);
        assert_eq!(summary.holding_count, 2);
        assert!((summary.total_value - 232_581.25).abs() < 1e-6);
        assert!((summary.total_pnl - 3581.25).abs() < 1e-6);
        // cost basis = 50*2450 + 75*1420 = 229_000
        let pct = summary.total_pnl_percent.unwrap();
        assert!((pct - 3581.25 / 229_000.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_summary_has_no_percent() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_value, 0.0);
        assert_eq!(summary.total_pnl_percent, None);
    }

    #[test]
    fn test_search_stocks() {
        let stocks = catalog();
        let hits: Vec<&str> = search_stocks(&stocks, "bank", STOCK_SEARCH_LIMIT)
            .iter()
            .map(|s| s.symbol.as_str())
            .collect();
        assert_eq!(hits, vec!["HDFCBANK", "SBIN"]);
        assert_eq!(search_stocks(&stocks, "bank", 1).len(), 1);
        assert!(search_stocks(&stocks, "  ", STOCK_SEARCH_LIMIT).is_empty());
        assert_eq!(find_stock(&stocks, "wipro").unwrap().name, "Wipro Ltd");
        assert!(find_stock(&stocks, "TCS").is_err());
    }
}
