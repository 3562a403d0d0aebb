use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::error::AppError;

/// Conversion category. Declaration order is the order category resolution tries them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Length,
    Weight,
    Temperature,
    Currency,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Length,
        Category::Weight,
        Category::Temperature,
        Category::Currency,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Weight => "Weight",
            Category::Temperature => "Temperature",
            Category::Currency => "Currency",
        }
    }

    /// Decimal places used when rendering a result in this category
    pub fn precision(&self) -> usize {
        match self {
            Category::Currency => 2,
            _ => 6,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::Validation(format!("Unknown category: {}", s)))
    }
}

/// Form-path request: the caller names every field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertUnitsRequest {
    pub category: Category,
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertUnitsResponse {
    pub category: Category,
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
    pub result: f64,
    pub formatted_result: String,
    /// Exchange rate used, currency conversions only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_timestamp: Option<String>,
}

impl ConvertUnitsResponse {
    /// One-line result, e.g. `5 Meters = 16.404200 Feet`
    pub fn summary(&self) -> String {
        format!("{} {} = {} {}", self.value, self.from_unit, self.formatted_result, self.to_unit)
    }
}

/// What the text extractor found in a free-text query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedQuery {
    pub value: Option<f64>,
    pub from_unit: Option<String>,
    pub to_unit: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetUnitsResponse {
    pub units: Vec<UnitDTO>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitDTO {
    pub id: String,       // Canonical unit name (e.g., "Meters")
    pub category: Category,
    pub aliases: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_str() {
        assert_eq!("length".parse::<Category>().unwrap(), Category::Length);
        assert_eq!(" Currency ".parse::<Category>().unwrap(), Category::Currency);
        assert!("volume".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_precision() {
        assert_eq!(Category::Currency.precision(), 2);
        assert_eq!(Category::Temperature.precision(), 6);
    }
}
