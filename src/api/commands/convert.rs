//! Conversion command module
//!
//! Form conversions (category and units given) and free-text conversions.

use tracing::info;

use crate::core::context::{extract_units_from_text, resolve_category};
use crate::core::features::currency::{convert_currency, RateProvider};
use crate::core::features::unit_converter::{canonical_unit, convert_value, format_result};
use crate::shared::error::{AppError, AppResult};
use crate::shared::types::{Category, ConvertUnitsRequest, ConvertUnitsResponse};

const ERR_NEGATIVE_AMOUNT: &str = "Amount cannot be negative. Please provide a positive value.";
const ERR_MISSING_CURRENCY: &str = "Both currency codes are required (e.g., USD, EUR, GBP)";

/// Convert a request whose category and units are all given
pub async fn convert_units_command<P>(provider: &P, request: ConvertUnitsRequest) -> AppResult<ConvertUnitsResponse>
where
    P: RateProvider + ?Sized,
{
    let ConvertUnitsRequest { category, value, from_unit, to_unit } = request;

    let response = match category {
        Category::Currency => {
            if value < 0.0 {
                return Err(AppError::Validation(ERR_NEGATIVE_AMOUNT.to_string()));
            }
            let from = from_unit.trim().to_ascii_uppercase();
            let to = to_unit.trim().to_ascii_uppercase();
            if from.is_empty() || to.is_empty() {
                return Err(AppError::Validation(ERR_MISSING_CURRENCY.to_string()));
            }

            let converted = convert_currency(provider, value, &from, &to).await?;
            ConvertUnitsResponse {
                category,
                value,
                from_unit: from,
                to_unit: to,
                result: converted.result,
                formatted_result: format_result(converted.result, category),
                rate: Some(converted.rate),
                rate_timestamp: Some(converted.timestamp),
            }
        }
        _ => {
            let from = lookup_unit(category, &from_unit)?;
            let to = lookup_unit(category, &to_unit)?;
            let result = convert_value(category, value, from, to)?;
            ConvertUnitsResponse {
                category,
                value,
                from_unit: from.to_string(),
                to_unit: to.to_string(),
                result,
                formatted_result: format_result(result, category),
                rate: None,
                rate_timestamp: None,
            }
        }
    };

    info!(category = %response.category, summary = %response.summary(), "conversion complete");
    Ok(response)
}

/// Convert a free-text query such as "convert 5 meters to feet"
pub async fn convert_text_command<P>(provider: &P, text: &str) -> AppResult<ConvertUnitsResponse>
where
    P: RateProvider + ?Sized,
{
    let query = extract_units_from_text(text);

    let value = query.value.ok_or(AppError::NoValue)?;
    let from_unit = query.from_unit.ok_or(AppError::NoFromUnit)?;
    let to_unit = query.to_unit.ok_or(AppError::NoToUnit)?;

    let category = resolve_category(&from_unit, &to_unit).ok_or_else(|| AppError::UnresolvableCategory {
        from: from_unit.clone(),
        to: to_unit.clone(),
    })?;

    convert_units_command(
        provider,
        ConvertUnitsRequest {
            category,
            value,
            from_unit,
            to_unit,
        },
    )
    .await
}

fn lookup_unit(category: Category, name: &str) -> AppResult<&'static str> {
    canonical_unit(category, name)
        .ok_or_else(|| AppError::Validation(format!("Unknown {} unit: {}", category, name)))
}
