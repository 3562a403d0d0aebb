//! Universal unit converter
//!
//! Converts length, weight and temperature with static tables and currencies with
//! live exchange rates. Queries come either as structured requests or as plain
//! English ("convert 5 meters to feet").

pub mod api;
pub mod core;
pub mod shared;

pub use api::commands::{convert_text_command, convert_units_command, get_units_command};
pub use shared::error::{AppError, AppResult};
pub use shared::types::{Category, ConvertUnitsRequest, ConvertUnitsResponse, ExtractedQuery};
