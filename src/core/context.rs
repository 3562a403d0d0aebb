//! Free-text understanding
//!
//! Extracts a value and units from natural-language queries and infers which
//! category a unit pair belongs to.

pub mod category;
pub mod extraction;
pub mod numbers;

pub use category::resolve_category;
pub use extraction::{extract_units_from_text, tokenize};
pub use numbers::parse_number_words;
