//! Currency conversion feature
//!
//! Converts an amount with a live rate from a `RateProvider`. No rates are cached.

pub mod service;
pub mod types;

use tracing::info;

use crate::shared::error::AppResult;

pub use service::{ExchangeRateClient, RateProvider};
pub use types::{ConvertCurrencyResponse, RateQuote};

/// Convert `amount` from one currency code to another
pub async fn convert_currency<P>(
    provider: &P,
    amount: f64,
    from: &str,
    to: &str,
) -> AppResult<ConvertCurrencyResponse>
where
    P: RateProvider + ?Sized,
{
    let quote = provider.lookup(from, to).await?;
    let result = amount * quote.rate;

    info!(amount, from = %quote.from, to = %quote.to, rate = quote.rate, result, "currency converted");

    Ok(ConvertCurrencyResponse {
        result,
        rate: quote.rate,
        timestamp: quote.timestamp,
    })
}
