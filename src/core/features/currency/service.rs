use std::sync::OnceLock;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use reqwest::Client;
use serde_json::Value;
use tracing::{info, warn};

use crate::shared::error::{AppError, AppResult};
use crate::shared::settings::AppSettings;

use super::types::{ApiErrorResponse, LatestRatesResponse, RateQuote};

// Reused for every lookup in the process
static CLIENT: OnceLock<Client> = OnceLock::new();

fn get_client() -> &'static Client {
    CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent("universal-converter/currency")
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}

/// Source of live exchange rates
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Rate such that `amount_in_from * rate = amount_in_to`
    async fn lookup(&self, from: &str, to: &str) -> AppResult<RateQuote>;
}

/// ExchangeRate-API v6 client
#[derive(Debug, Clone)]
pub struct ExchangeRateClient {
    base_url: String,
    api_key: Option<String>,
}

impl ExchangeRateClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key,
        }
    }

    pub fn from_settings(settings: &AppSettings) -> Self {
        Self::new(settings.rates_base_url(), settings.currency_api_key())
    }

    fn latest_url(&self, api_key: &str, from: &str) -> String {
        format!("{}/{}/latest/{}", self.base_url.trim_end_matches('/'), api_key, from)
    }
}

#[async_trait]
impl RateProvider for ExchangeRateClient {
    async fn lookup(&self, from: &str, to: &str) -> AppResult<RateQuote> {
        let api_key = self.api_key.as_deref().ok_or(AppError::MissingApiKey)?;
        let from = currency_code(from)?;
        let to = currency_code(to)?;

        info!(%from, %to, "fetching exchange rate");

        // without_url keeps the API key out of error messages
        let response = get_client()
            .get(self.latest_url(api_key, &from))
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                warn!(error = %e, "rate provider request failed");
                AppError::Network(format!("Rate provider connection failed: {}", e))
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::Network(format!("Failed to read rate response: {}", e.without_url())))?;

        interpret_response(status.as_u16(), &body, &from, &to)
    }
}

/// Upper-case a currency code, rejecting anything but three ASCII letters.
///
/// The base code becomes a URL path segment, so nothing else may pass.
fn currency_code(code: &str) -> AppResult<String> {
    let code = code.trim();
    if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(code.to_ascii_uppercase())
    } else {
        Err(AppError::InvalidCurrency(code.to_string()))
    }
}

/// Turn a provider status and body into a rate for `to`.
///
/// `from` and `to` must already be upper-cased.
pub fn interpret_response(status: u16, body: &str, from: &str, to: &str) -> AppResult<RateQuote> {
    let success = (200..300).contains(&status);
    let parsed = serde_json::from_str::<Value>(body);

    let reported_error = parsed
        .as_ref()
        .ok()
        .filter(|json| json.get("result").and_then(Value::as_str) == Some("error"))
        .is_some();

    if !success || reported_error {
        let error_type = parsed
            .ok()
            .and_then(|json| serde_json::from_value::<ApiErrorResponse>(json).ok())
            .and_then(|e| e.error_type)
            .unwrap_or_else(|| format!("HTTP {}", status));
        warn!(status, %error_type, "rate provider returned an error");
        return Err(AppError::Api(error_type));
    }

    let json = parsed.map_err(|e| AppError::Parse(format!("Invalid rate response: {}", e)))?;
    let payload: LatestRatesResponse = serde_json::from_value(json)
        .map_err(|e| AppError::Parse(format!("Invalid rate response: {}", e)))?;

    let rate = payload
        .conversion_rates
        .get(to)
        .copied()
        .ok_or_else(|| AppError::InvalidCurrency(to.to_string()))?;

    let timestamp = payload
        .time_last_update_unix
        .and_then(|t| Utc.timestamp_opt(t, 0).single())
        .unwrap_or_else(Utc::now)
        .to_rfc3339();

    Ok(RateQuote {
        from: payload.base_code.unwrap_or_else(|| from.to_string()),
        to: to.to_string(),
        rate,
        timestamp,
    })
}
