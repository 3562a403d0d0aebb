//! Conversion engine with enum dispatch
//!
//! Physical categories convert synchronously through `UnitConverter`, a closed enum
//! dispatched statically via enum_dispatch. Currency needs a live rate and goes
//! through the async `RateProvider` seam in `currency`.

use crate::shared::error::AppResult;
use crate::shared::types::Category;
use enum_dispatch::enum_dispatch;

pub mod currency;
pub mod unit_converter;

pub use unit_converter::{ScaleConverter, TemperatureConverter};

/// Synchronous conversion within one category
#[enum_dispatch]
pub trait ConvertSync {
    /// Category this converter serves
    fn category(&self) -> Category;

    /// Canonical unit names, in display order
    fn units(&self) -> Vec<&'static str>;

    /// Convert `value` between two canonical unit names of this category.
    ///
    /// Unknown names are reported as validation errors, never coerced.
    fn convert(&self, value: f64, from_unit: &str, to_unit: &str) -> AppResult<f64>;
}

#[enum_dispatch(ConvertSync)]
#[derive(Debug, Clone, Copy)]
pub enum UnitConverter {
    ScaleConverter,
    TemperatureConverter,
}
