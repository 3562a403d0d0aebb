use crate::core::features::unit_converter::units_for;
use crate::shared::types::Category;

/// Infer the category that owns both canonical units.
///
/// Categories are tried in declaration order and the first one holding both names
/// wins. Two three-character names that no static table knows are taken to be
/// currency codes.
pub fn resolve_category(from_unit: &str, to_unit: &str) -> Option<Category> {
    Category::ALL
        .into_iter()
        .find(|category| {
            let units = units_for(*category);
            units.contains(&from_unit) && units.contains(&to_unit)
        })
        .or_else(|| {
            let looks_like_codes = from_unit.chars().count() == 3 && to_unit.chars().count() == 3;
            looks_like_codes.then_some(Category::Currency)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_categories() {
        assert_eq!(resolve_category("Meters", "Feet"), Some(Category::Length));
        assert_eq!(resolve_category("Pounds", "Grams"), Some(Category::Weight));
        assert_eq!(resolve_category("Kelvin", "Celsius"), Some(Category::Temperature));
    }

    #[test]
    fn test_currency_fallback() {
        assert_eq!(resolve_category("USD", "EUR"), Some(Category::Currency));
    }

    #[test]
    fn test_mixed_categories_are_unresolved() {
        assert_eq!(resolve_category("Meters", "Grams"), None);
        assert_eq!(resolve_category("Meters", "USD"), None);
    }
}
