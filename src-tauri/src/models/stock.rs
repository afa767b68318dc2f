use serde::{Deserialize, Serialize};

/// A listed stock in the catalog the add-holding form picks from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stock {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub volume: u64,
    /// Display string, e.g. "17.5L Cr".
    pub market_cap: String,
    pub sector: String,
}
