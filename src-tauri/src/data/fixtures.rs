use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::errors::AppError;
use crate::models::config::AppConfig;

use super::{MarketDataSource, MarketDataset};

const SAMPLE_MARKET: &str = include_str!("sample_market.json");

/// The sample dataset compiled into the binary.
pub struct BundledSample;

impl MarketDataSource for BundledSample {
    fn describe(&self) -> String {
        "bundled sample".to_string()
    }

    fn load(&self) -> Result<MarketDataset, AppError> {
        parse_dataset(SAMPLE_MARKET)
    }
}

/// A dataset stored as JSON on disk, same layout as the bundled sample.
pub struct JsonFileSource {
    pub path: PathBuf,
}

impl MarketDataSource for JsonFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<MarketDataset, AppError> {
        load_dataset_file(&self.path)
    }
}

/// Pick the data source the configuration asks for.
pub fn source_for(config: &AppConfig) -> Box<dyn MarketDataSource> {
    match &config.dataset_path {
        Some(path) => Box::new(JsonFileSource { path: path.clone() }),
        None => Box::new(BundledSample),
    }
}

pub fn load_dataset_file(path: &Path) -> Result<MarketDataset, AppError> {
    if !path.exists() {
        return Err(AppError::FileRead(format!("{} does not exist", path.display())));
    }
    let content = std::fs::read_to_string(path)?;
    let dataset = parse_dataset(&content)?;
    info!("Loaded dataset from {}", path.display());
    Ok(dataset)
}

/// Decode and sanity-check a dataset.
pub fn parse_dataset(json: &str) -> Result<MarketDataset, AppError> {
    let dataset: MarketDataset =
        serde_json::from_str(json).map_err(|e| AppError::InvalidDataset(e.to_string()))?;
    validate(&dataset)?;
    Ok(dataset)
}

fn validate(dataset: &MarketDataset) -> Result<(), AppError> {
    let mut ids = HashSet::new();
    for item in &dataset.news {
        if !ids.insert(item.id.as_str()) {
            return Err(AppError::InvalidDataset(format!("duplicate news id '{}'", item.id)));
        }
    }

    let mut symbols = HashSet::new();
    for holding in &dataset.holdings {
        if !symbols.insert(holding.symbol.as_str()) {
            return Err(AppError::InvalidDataset(format!(
                "duplicate holding '{}'",
                holding.symbol
            )));
        }
    }

    let mut listed = HashSet::new();
    for stock in &dataset.stocks {
        if !listed.insert(stock.symbol.as_str()) {
            return Err(AppError::InvalidDataset(format!("duplicate stock '{}'", stock.symbol)));
        }
    }
    Ok(())
}
