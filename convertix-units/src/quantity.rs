//! Quantity type - a value with an associated unit

use std::fmt;
use serde::Serialize;
use convertix_core::format_result;
use crate::Unit;
use crate::unit::{convert, ConversionError};

/// A measured value together with its catalog unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quantity {
    pub value: f64,
    pub unit: &'static Unit,
}

impl Quantity {
    pub fn new(value: f64, unit: &'static Unit) -> Self {
        Quantity { value, unit }
    }

    /// Express this quantity in another unit of the same category
    pub fn convert_to(&self, target: &'static Unit) -> Result<Quantity, ConversionError> {
        let value = convert(self.value, self.unit, target)?;
        Ok(Quantity::new(value, target))
    }

    /// Express this quantity in its category's base unit
    pub fn to_base(&self) -> Quantity {
        let base = self.unit.category.base();
        Quantity::new(self.unit.to_base(self.value), base)
    }

    /// Check if two quantities can be converted into each other
    pub fn is_compatible(&self, other: &Quantity) -> bool {
        self.unit.is_compatible(other.unit)
    }

    /// Render as "<value> <symbol>" with the given decimal places
    pub fn format(&self, decimals: usize) -> String {
        format!("{} {}", format_result(self.value, decimals), self.unit.symbol)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(convertix_core::DEFAULT_DECIMALS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UNITS;

    fn unit(symbol: &str) -> &'static Unit {
        UNITS.get(symbol).unwrap()
    }

    #[test]
    fn test_quantity_conversion() {
        let q = Quantity::new(1.5, unit("km"));
        let m = q.convert_to(unit("m")).unwrap();
        assert_eq!(m.value, 1500.0);
        assert_eq!(m.unit.symbol, "m");
    }

    #[test]
    fn test_quantity_incompatible() {
        let q = Quantity::new(1.0, unit("kg"));
        assert!(q.convert_to(unit("m")).is_err());
        assert!(!q.is_compatible(&Quantity::new(1.0, unit("s"))));
    }

    #[test]
    fn test_to_base() {
        let q = Quantity::new(2.0, unit("h")).to_base();
        assert_eq!(q.value, 7200.0);
        assert_eq!(q.unit.symbol, "s");

        let t = Quantity::new(212.0, unit("°F")).to_base();
        assert!((t.value - 100.0).abs() < 1e-9);
        assert_eq!(t.unit.symbol, "°C");
    }

    #[test]
    fn test_display() {
        let q = Quantity::new(1.5, unit("km"));
        assert_eq!(q.to_string(), "1.5 km");
        assert_eq!(Quantity::new(2.0 / 3.0, unit("L")).format(2), "0.67 L");
    }
}
