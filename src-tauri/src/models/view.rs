use serde::{Deserialize, Serialize};

/// Top-level page the frontend is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Dashboard,
    News,
    Portfolio,
    Insights,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Dashboard => "dashboard",
            ViewMode::News => "news",
            ViewMode::Portfolio => "portfolio",
            ViewMode::Insights => "insights",
        }
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dashboard" => Ok(ViewMode::Dashboard),
            "news" => Ok(ViewMode::News),
            "portfolio" => Ok(ViewMode::Portfolio),
            "insights" => Ok(ViewMode::Insights),
            _ => Err(format!("Unknown view: {}", s)),
        }
    }
}

/// UI state the backend keeps on behalf of the frontend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub active_view: ViewMode,
    /// News browser shows only portfolio-relevant items.
    pub portfolio_only: bool,
}
