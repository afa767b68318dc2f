use serde::Serialize;

/// All application errors, categorized by domain.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ── Data ──
    #[error("Failed to read file: {0}")]
    FileRead(String),

    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),

    // ── Portfolio ──
    #[error("Holding form is incomplete: {0} is required")]
    IncompleteHolding(&'static str),

    #[error("Invalid holding: {0}")]
    InvalidHolding(String),

    #[error("{0} is already in the portfolio")]
    DuplicateHolding(String),

    #[error("Holding not found: {0}")]
    HoldingNotFound(String),

    #[error("Stock not found: {0}")]
    StockNotFound(String),

    // ── Insights ──
    #[error("Insight request superseded by a newer one")]
    InsightsSuperseded,

    // ── Configuration ──
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Serializable error response for the frontend.
#[derive(Debug, Serialize, Clone)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        let code = match err {
            AppError::FileRead(_) => "FILE_READ",
            AppError::InvalidDataset(_) => "INVALID_DATASET",
            AppError::IncompleteHolding(_) => "INCOMPLETE_HOLDING",
            AppError::InvalidHolding(_) => "INVALID_HOLDING",
            AppError::DuplicateHolding(_) => "DUPLICATE_HOLDING",
            AppError::HoldingNotFound(_) => "HOLDING_NOT_FOUND",
            AppError::StockNotFound(_) => "STOCK_NOT_FOUND",
            AppError::InsightsSuperseded => "INSIGHTS_SUPERSEDED",
            AppError::InvalidConfig(_) => "INVALID_CONFIG",
        };
        ErrorResponse {
            code: code.to_string(),
            message: err.to_string(),
        }
    }
}

// Allow AppError to be returned from Tauri commands.
impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let response = ErrorResponse::from(self);
        response.serialize(serializer)
    }
}

// ── Conversions from external errors ──

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::FileRead(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serializes_as_code_and_message() {
        let err = AppError::DuplicateHolding("INFY".to_string());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "DUPLICATE_HOLDING");
        assert_eq!(json["message"], "INFY is already in the portfolio");
    }

    #[test]
    fn test_incomplete_holding_message() {
        let err = AppError::IncompleteHolding("quantity");
        assert_eq!(err.to_string(), "Holding form is incomplete: quantity is required");
    }
}
