//! Unit representation with conversion scales

use std::fmt;
use serde::Serialize;
use thiserror::Error;
use convertix_core::{ConvertixError, NumberError};
use crate::{Category, TemperatureScale};

/// How a unit relates to its category's base unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    /// value_base = value * factor
    Factor(f64),
    /// Affine relation through Celsius
    Temperature(TemperatureScale),
}

/// A unit of measurement. All units are compile-time statics; see `units.rs`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Unit {
    /// Display symbol (e.g. "km", "°C"), unique across the catalog
    pub symbol: &'static str,
    /// Human-readable name (e.g. "kilometer")
    pub name: &'static str,
    pub category: Category,
    pub scale: Scale,
}

impl Unit {
    /// A unit proportional to its category base
    pub const fn linear(
        symbol: &'static str,
        name: &'static str,
        category: Category,
        factor: f64,
    ) -> Self {
        Unit { symbol, name, category, scale: Scale::Factor(factor) }
    }

    /// A temperature unit
    pub const fn temperature(
        symbol: &'static str,
        name: &'static str,
        scale: TemperatureScale,
    ) -> Self {
        Unit { symbol, name, category: Category::Temperature, scale: Scale::Temperature(scale) }
    }

    /// Factor to the base unit, if this unit is linear
    pub fn factor(&self) -> Option<f64> {
        match self.scale {
            Scale::Factor(f) => Some(f),
            Scale::Temperature(_) => None,
        }
    }

    /// Check if this is its category's base unit
    pub fn is_base(&self) -> bool {
        self == self.category.base()
    }

    /// Check if two units belong to the same category (can be converted)
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.category == other.category
    }

    /// Convert a value in this unit to the category base unit
    pub fn to_base(&self, value: f64) -> f64 {
        match self.scale {
            Scale::Factor(f) => value * f,
            Scale::Temperature(t) => t.to_celsius(value),
        }
    }

    /// Convert a value in the category base unit to this unit
    pub fn from_base(&self, value: f64) -> f64 {
        match self.scale {
            Scale::Factor(f) => value / f,
            Scale::Temperature(t) => t.from_celsius(value),
        }
    }

    /// Convert a value from this unit to another unit of the same category
    pub fn convert_to(&self, value: f64, target: &Unit) -> Result<f64, ConversionError> {
        convert(value, self, target)
    }
}

/// Convert `value` from one unit to another.
///
/// Identical units return the input untouched, so the identity case never
/// picks up rounding error. Otherwise the value goes through the base unit.
pub fn convert(value: f64, from: &Unit, to: &Unit) -> Result<f64, ConversionError> {
    if !from.is_compatible(to) {
        return Err(ConversionError::IncompatibleCategories {
            from: from.symbol.to_string(),
            to: to.symbol.to_string(),
            from_category: from.category,
            to_category: to.category,
        });
    }

    if from == to {
        return Ok(value);
    }

    Ok(to.from_base(from.to_base(value)))
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// Errors that can occur during unit conversion
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// Units belong to different categories
    #[error("cannot convert {from} ({from_category}) to {to} ({to_category}): different categories")]
    IncompatibleCategories {
        from: String,
        to: String,
        from_category: Category,
        to_category: Category,
    },

    /// Unknown unit symbol
    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    /// Unknown category name
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// Malformed "from->to" or "5 km" text
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// Numeric error while reading input
    #[error(transparent)]
    Number(#[from] NumberError),
}

impl From<ConversionError> for ConvertixError {
    fn from(err: ConversionError) -> Self {
        let message = err.to_string();
        match err {
            ConversionError::IncompatibleCategories { .. } => Self::incompatible_units(message),
            ConversionError::UnknownUnit(symbol) => Self::unknown_unit(&symbol),
            ConversionError::UnknownCategory(name) => Self::unknown_category(&name),
            ConversionError::InvalidFormat(details) => Self::parse_error(details)
                .with_suggestion("Use 'from->to' for conversions and '<number> <unit>' for quantities"),
            ConversionError::Number(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use convertix_core::codes;

    fn meter() -> Unit {
        Unit::linear("m", "meter", Category::Length, 1.0)
    }

    fn kilometer() -> Unit {
        Unit::linear("km", "kilometer", Category::Length, 1000.0)
    }

    fn second() -> Unit {
        Unit::linear("s", "second", Category::Time, 1.0)
    }

    #[test]
    fn test_base_unit() {
        assert!(meter().is_base());
        assert!(!kilometer().is_base());
    }

    #[test]
    fn test_compatible_units() {
        assert!(meter().is_compatible(&kilometer()));
        assert!(!meter().is_compatible(&second()));
    }

    #[test]
    fn test_to_base_conversion() {
        assert_eq!(kilometer().to_base(5.0), 5000.0);
    }

    #[test]
    fn test_from_base_conversion() {
        assert_eq!(kilometer().from_base(5000.0), 5.0);
    }

    #[test]
    fn test_unit_conversion() {
        let converted = meter().convert_to(5000.0, &kilometer()).unwrap();
        assert_eq!(converted, 5.0);
    }

    #[test]
    fn test_identity_is_exact() {
        let odd = 0.1 + 0.2;
        assert_eq!(convert(odd, &kilometer(), &kilometer()).unwrap(), odd);
    }

    #[test]
    fn test_incompatible_categories() {
        let err = convert(1.0, &meter(), &second()).unwrap_err();
        assert!(matches!(err, ConversionError::IncompatibleCategories { .. }));
        assert_eq!(err.to_string(), "cannot convert m (length) to s (time): different categories");
    }

    #[test]
    fn test_temperature_unit_has_no_factor() {
        let f = Unit::temperature("°F", "fahrenheit", TemperatureScale::Fahrenheit);
        assert_eq!(f.factor(), None);
        assert_eq!(f.category, Category::Temperature);
        assert_eq!(f.to_base(32.0), 0.0);
    }

    #[test]
    fn test_error_maps_to_structured_codes() {
        let e: ConvertixError = ConversionError::UnknownUnit("furlong".to_string()).into();
        assert_eq!(e.code, codes::UNKNOWN_UNIT);

        let e: ConvertixError = convert(1.0, &meter(), &second()).unwrap_err().into();
        assert_eq!(e.code, codes::INCOMPATIBLE_UNITS);
    }
}
