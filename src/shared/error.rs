use thiserror::Error;
use serde::Serialize;

/// Errors for a single conversion request.
///
/// Every variant is local to one request: the caller reports it and keeps serving.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Could not detect a numerical value. Please enter a valid number.")]
    NoValue,

    #[error("Could not detect the 'From' unit. Please try again.")]
    NoFromUnit,

    #[error("Could not detect the 'To' unit. Please try again.")]
    NoToUnit,

    #[error("Invalid unit conversion: cannot convert {from} to {to}")]
    UnresolvableCategory { from: String, to: String },

    #[error("Validation Error: {0}")]
    Validation(String),

    #[error("API key is missing! Set EXCHANGE_RATE_API_KEY or api_keys.currency_api_key in settings.")]
    MissingApiKey,

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("API Error: {0}")]
    Api(String),

    #[error("Invalid currency code: {0}")]
    InvalidCurrency(String),

    #[error("Network Error: {0}")]
    Network(String),

    #[error("Parse Error: {0}")]
    Parse(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Parse(format!("Serialization error: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;
