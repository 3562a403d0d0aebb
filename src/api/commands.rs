//! Command modules
//!
//! Request/response operations behind the command line surface. Each call is
//! one user action and is fully computed before it returns.
//!
//! - `convert`: form and free-text conversions
//! - `units`: unit listings for the form path

pub mod convert;
pub mod units;

pub use convert::{convert_text_command, convert_units_command};
pub use units::get_units_command;
