//! Unit listing command module
//!
//! Supplies the unit choices for each category's form.

use crate::core::features::unit_converter::unit_listing;
use crate::shared::types::{Category, GetUnitsResponse};

/// List canonical units, optionally restricted to one category.
///
/// Currency has no fixed list: codes are checked by the rate provider.
pub fn get_units_command(category: Option<Category>) -> GetUnitsResponse {
    GetUnitsResponse {
        units: unit_listing(category),
    }
}
