use serde::{Deserialize, Serialize};

/// One portfolio position. Derived values are computed on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub symbol: String,
    pub name: String,
    pub quantity: u32,
    /// Average acquisition price. A missing value decodes as 0, which makes
    /// the P&L percent not computable.
    #[serde(default)]
    pub avg_price: f64,
    pub current_price: f64,
}

impl Holding {
    pub fn total_value(&self) -> f64 {
        self.current_price * self.quantity as f64
    }

    pub fn pnl(&self) -> f64 {
        (self.current_price - self.avg_price) * self.quantity as f64
    }

    /// `None` when the average price is zero, negative or not finite.
    pub fn pnl_percent(&self) -> Option<f64> {
        if !self.avg_price.is_finite() || self.avg_price <= 0.0 {
            return None;
        }
        let pct = (self.current_price - self.avg_price) / self.avg_price * 100.0;
        pct.is_finite().then_some(pct)
    }
}

/// Holding as rendered by the frontend, with derived fields materialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoldingSnapshot {
    pub symbol: String,
    pub name: String,
    pub quantity: u32,
    pub avg_price: f64,
    pub current_price: f64,
    pub total_value: f64,
    pub pnl: f64,
    /// `null` on the wire when not computable; the frontend shows a placeholder.
    pub pnl_percent: Option<f64>,
}

impl From<&Holding> for HoldingSnapshot {
    fn from(h: &Holding) -> Self {
        HoldingSnapshot {
            symbol: h.symbol.clone(),
            name: h.name.clone(),
            quantity: h.quantity,
            avg_price: h.avg_price,
            current_price: h.current_price,
            total_value: h.total_value(),
            pnl: h.pnl(),
            pnl_percent: h.pnl_percent(),
        }
    }
}

/// Totals over the whole portfolio.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioSummary {
    pub holding_count: usize,
    pub total_value: f64,
    pub total_pnl: f64,
    /// P&L relative to cost basis; `None` when the cost basis is not positive.
    pub total_pnl_percent: Option<f64>,
}
