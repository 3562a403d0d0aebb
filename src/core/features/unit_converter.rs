use crate::shared::error::{AppError, AppResult};
use crate::shared::types::{Category, UnitDTO};
use super::ConvertSync;
use once_cell::sync::Lazy;
use std::collections::HashMap;

// ============================================================================
// Unit Tables
// ============================================================================

/// Length factors: how many of each unit make one meter
static LENGTH_UNITS: &[(&str, f64)] = &[
    ("Meters", 1.0),
    ("Kilometers", 0.001),
    ("Centimeters", 100.0),
    ("Millimeters", 1000.0),
    ("Miles", 0.000621371),
    ("Yards", 1.09361),
    ("Feet", 3.28084),
    ("Inches", 39.3701),
];

/// Weight factors: how many of each unit make one kilogram
static WEIGHT_UNITS: &[(&str, f64)] = &[
    ("Kilograms", 1.0),
    ("Grams", 1000.0),
    ("Milligrams", 1e6),
    ("Pounds", 2.20462),
    ("Ounces", 35.274),
];

static TEMPERATURE_UNITS: &[&str] = &["Celsius", "Fahrenheit", "Kelvin"];

/// Free-text token (lowercase) -> canonical unit name
static UNIT_ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        // Length
        ("meter", "Meters"), ("meters", "Meters"), ("metre", "Meters"), ("metres", "Meters"), ("m", "Meters"),
        ("kilometer", "Kilometers"), ("kilometers", "Kilometers"), ("kilometre", "Kilometers"),
        ("kilometres", "Kilometers"), ("km", "Kilometers"),
        ("cm", "Centimeters"), ("centimeter", "Centimeters"), ("centimeters", "Centimeters"),
        ("mm", "Millimeters"), ("millimeter", "Millimeters"), ("millimeters", "Millimeters"),
        ("mile", "Miles"), ("miles", "Miles"),
        ("yard", "Yards"), ("yards", "Yards"),
        ("feet", "Feet"), ("foot", "Feet"),
        ("inch", "Inches"), ("inches", "Inches"),
        // Weight
        ("kg", "Kilograms"), ("kilogram", "Kilograms"), ("kilograms", "Kilograms"),
        ("gram", "Grams"), ("grams", "Grams"),
        ("mg", "Milligrams"), ("milligram", "Milligrams"), ("milligrams", "Milligrams"),
        ("pound", "Pounds"), ("pounds", "Pounds"),
        ("ounce", "Ounces"), ("ounces", "Ounces"),
        // Temperature
        ("celsius", "Celsius"), ("fahrenheit", "Fahrenheit"), ("kelvin", "Kelvin"),
    ]
    .into_iter()
    .collect()
});

/// Look up a lowercase free-text token in the alias table
pub fn lookup_alias(token: &str) -> Option<&'static str> {
    UNIT_ALIASES.get(token).copied()
}

/// Canonical unit names of a category, in table order. Empty for currency.
pub fn units_for(category: Category) -> Vec<&'static str> {
    converter_for(category)
        .map(|c| c.units())
        .unwrap_or_default()
}

/// Case-insensitive match of a user-supplied name against a category's units
pub fn canonical_unit(category: Category, name: &str) -> Option<&'static str> {
    let name = name.trim();
    units_for(category)
        .into_iter()
        .find(|unit| unit.eq_ignore_ascii_case(name))
}

/// Listing of every static unit with its free-text aliases
pub fn unit_listing(category: Option<Category>) -> Vec<UnitDTO> {
    Category::ALL
        .into_iter()
        .filter(|c| category.map_or(true, |wanted| wanted == *c))
        .filter_map(converter_for)
        .flat_map(|converter| {
            let c = converter.category();
            converter.units().into_iter().map(move |unit| {
                let mut aliases: Vec<String> = UNIT_ALIASES
                    .iter()
                    .filter(|(_, canonical)| **canonical == unit)
                    .map(|(alias, _)| alias.to_string())
                    .collect();
                aliases.sort();
                UnitDTO {
                    id: unit.to_string(),
                    category: c,
                    aliases,
                }
            })
        })
        .collect()
}

// ============================================================================
// Converters
// ============================================================================

/// Factor-table conversion: `value * factor[to] / factor[from]`
#[derive(Debug, Clone, Copy)]
pub struct ScaleConverter {
    category: Category,
    table: &'static [(&'static str, f64)],
}

impl ScaleConverter {
    fn factor(&self, unit: &str) -> AppResult<f64> {
        self.table
            .iter()
            .find(|(name, _)| *name == unit)
            .map(|(_, factor)| *factor)
            .ok_or_else(|| AppError::Validation(format!("Unknown {} unit: {}", self.category, unit)))
    }
}

impl ConvertSync for ScaleConverter {
    fn category(&self) -> Category {
        self.category
    }

    fn units(&self) -> Vec<&'static str> {
        self.table.iter().map(|(name, _)| *name).collect()
    }

    fn convert(&self, value: f64, from_unit: &str, to_unit: &str) -> AppResult<f64> {
        let from = self.factor(from_unit)?;
        let to = self.factor(to_unit)?;
        Ok(value * (to / from))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    fn parse(unit: &str) -> AppResult<Self> {
        match unit {
            "Celsius" => Ok(Self::Celsius),
            "Fahrenheit" => Ok(Self::Fahrenheit),
            "Kelvin" => Ok(Self::Kelvin),
            _ => Err(AppError::Validation(format!("Unknown Temperature unit: {}", unit))),
        }
    }
}

/// Temperature conversion by explicit formula per unit pair
#[derive(Debug, Clone, Copy)]
pub struct TemperatureConverter;

impl ConvertSync for TemperatureConverter {
    fn category(&self) -> Category {
        Category::Temperature
    }

    fn units(&self) -> Vec<&'static str> {
        TEMPERATURE_UNITS.to_vec()
    }

    fn convert(&self, value: f64, from_unit: &str, to_unit: &str) -> AppResult<f64> {
        use TemperatureUnit::*;

        let from = TemperatureUnit::parse(from_unit)?;
        let to = TemperatureUnit::parse(to_unit)?;

        Ok(match (from, to) {
            (Celsius, Celsius) | (Fahrenheit, Fahrenheit) | (Kelvin, Kelvin) => value,
            (Celsius, Fahrenheit) => value * 9.0 / 5.0 + 32.0,
            (Celsius, Kelvin) => value + 273.15,
            (Fahrenheit, Celsius) => (value - 32.0) * 5.0 / 9.0,
            (Fahrenheit, Kelvin) => (value - 32.0) * 5.0 / 9.0 + 273.15,
            (Kelvin, Celsius) => value - 273.15,
            (Kelvin, Fahrenheit) => (value - 273.15) * 9.0 / 5.0 + 32.0,
        })
    }
}

/// Converter for a physical category; currency has none (it needs live rates)
pub fn converter_for(category: Category) -> Option<super::UnitConverter> {
    match category {
        Category::Length => Some(ScaleConverter { category, table: LENGTH_UNITS }.into()),
        Category::Weight => Some(ScaleConverter { category, table: WEIGHT_UNITS }.into()),
        Category::Temperature => Some(TemperatureConverter.into()),
        Category::Currency => None,
    }
}

/// Convert within a physical category
pub fn convert_value(category: Category, value: f64, from_unit: &str, to_unit: &str) -> AppResult<f64> {
    let converter = converter_for(category).ok_or_else(|| {
        AppError::Validation(format!("{} conversions require an exchange rate", category))
    })?;
    converter.convert(value, from_unit, to_unit)
}

/// Render a result with the category's fixed precision
pub fn format_result(value: f64, category: Category) -> String {
    format!("{:.*}", category.precision(), value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn test_identity_for_every_scale_unit() {
        for category in [Category::Length, Category::Weight] {
            for unit in units_for(category) {
                assert_eq!(convert_value(category, 42.5, unit, unit).unwrap(), 42.5);
            }
        }
    }

    #[test]
    fn test_round_trip_every_pair() {
        for category in [Category::Length, Category::Weight] {
            let units = units_for(category);
            for a in &units {
                for b in &units {
                    let there = convert_value(category, 7.25, a, b).unwrap();
                    let back = convert_value(category, there, b, a).unwrap();
                    assert!(approx(back, 7.25), "{} -> {} -> {} gave {}", a, b, a, back);
                }
            }
        }
    }

    #[test]
    fn test_known_scale_values() {
        let km = convert_value(Category::Length, 5.0, "Meters", "Kilometers").unwrap();
        assert!(approx(km, 0.005));
        let feet = convert_value(Category::Length, 5.0, "Meters", "Feet").unwrap();
        assert!(approx(feet, 16.4042));
        let grams = convert_value(Category::Weight, 2.0, "Kilograms", "Grams").unwrap();
        assert!(approx(grams, 2000.0));
    }

    #[test]
    fn test_unknown_scale_unit() {
        let err = convert_value(Category::Length, 1.0, "Meters", "Grams").unwrap_err();
        assert_eq!(err, AppError::Validation("Unknown Length unit: Grams".to_string()));
    }

    #[test]
    fn test_temperature_fixed_points() {
        let t = |v, a, b| convert_value(Category::Temperature, v, a, b).unwrap();
        assert_eq!(t(0.0, "Celsius", "Fahrenheit"), 32.0);
        assert_eq!(t(100.0, "Celsius", "Fahrenheit"), 212.0);
        assert_eq!(t(0.0, "Celsius", "Kelvin"), 273.15);
        assert!(approx(t(212.0, "Fahrenheit", "Celsius"), 100.0));
        assert!(approx(t(32.0, "Fahrenheit", "Kelvin"), 273.15));
        assert!(approx(t(273.15, "Kelvin", "Celsius"), 0.0));
        assert!(approx(t(273.15, "Kelvin", "Fahrenheit"), 32.0));
        assert_eq!(t(-40.0, "Fahrenheit", "Fahrenheit"), -40.0);
    }

    #[test]
    fn test_temperature_rejects_misspelled_unit() {
        // "Clesius" must not fall through to a Fahrenheit branch
        assert!(convert_value(Category::Temperature, 300.0, "Kelvin", "Clesius").is_err());
        assert!(convert_value(Category::Temperature, 1.0, "Rankine", "Celsius").is_err());
    }

    #[test]
    fn test_currency_has_no_static_converter() {
        assert!(converter_for(Category::Currency).is_none());
        assert!(units_for(Category::Currency).is_empty());
        assert!(convert_value(Category::Currency, 1.0, "USD", "EUR").is_err());
    }

    #[test]
    fn test_canonical_unit_case_insensitive() {
        assert_eq!(canonical_unit(Category::Length, "feet"), Some("Feet"));
        assert_eq!(canonical_unit(Category::Weight, " OUNCES "), Some("Ounces"));
        assert_eq!(canonical_unit(Category::Weight, "Feet"), None);
    }

    #[test]
    fn test_aliases_point_at_table_units() {
        let all: Vec<&str> = Category::ALL.into_iter().flat_map(units_for).collect();
        for canonical in UNIT_ALIASES.values() {
            assert!(all.contains(canonical), "alias target {} missing from tables", canonical);
        }
        assert_eq!(lookup_alias("metres"), Some("Meters"));
        assert_eq!(lookup_alias("usd"), None);
    }

    #[test]
    fn test_unit_listing() {
        let weights = unit_listing(Some(Category::Weight));
        assert_eq!(weights.len(), 5);
        assert_eq!(weights[0].id, "Kilograms");
        assert!(weights[0].aliases.contains(&"kg".to_string()));
        assert!(weights.iter().all(|unit| unit.category == Category::Weight));
        assert_eq!(unit_listing(None).len(), 8 + 5 + 3);
    }

    #[test]
    fn test_converter_reports_its_category() {
        for category in [Category::Length, Category::Weight, Category::Temperature] {
            assert_eq!(converter_for(category).map(|c| c.category()), Some(category));
        }
    }

    #[test]
    fn test_format_result() {
        assert_eq!(format_result(16.4042, Category::Length), "16.404200");
        assert_eq!(format_result(92.456, Category::Currency), "92.46");
    }
}
