use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Success payload of `GET {base}/{key}/latest/{FROM}`
#[derive(Debug, Deserialize)]
pub struct LatestRatesResponse {
    #[serde(default)]
    pub result: Option<String>,
    pub base_code: Option<String>,
    pub time_last_update_unix: Option<i64>,
    pub conversion_rates: HashMap<String, f64>,
}

/// Error payload returned with a non-2xx status
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    #[serde(rename = "error-type")]
    pub error_type: Option<String>,
}

/// One resolved exchange rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateQuote {
    pub from: String,
    pub to: String,
    pub rate: f64,
    /// RFC 3339 time the provider last refreshed the rate
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertCurrencyResponse {
    pub result: f64,
    pub rate: f64,
    pub timestamp: String,
}
