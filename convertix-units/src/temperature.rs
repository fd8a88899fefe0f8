//! Affine temperature scales
//!
//! Temperature cannot be expressed as a single factor, so each scale
//! carries explicit formulas to and from Celsius, the category base.

use serde::{Serialize, Deserialize};

/// Absolute zero offset between Celsius and Kelvin
pub const KELVIN_OFFSET: f64 = 273.15;

/// Freezing point of water in Fahrenheit
pub const FAHRENHEIT_OFFSET: f64 = 32.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureScale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureScale {
    pub fn to_celsius(self, value: f64) -> f64 {
        match self {
            TemperatureScale::Celsius => value,
            TemperatureScale::Fahrenheit => (value - FAHRENHEIT_OFFSET) * 5.0 / 9.0,
            TemperatureScale::Kelvin => value - KELVIN_OFFSET,
        }
    }

    pub fn from_celsius(self, celsius: f64) -> f64 {
        match self {
            TemperatureScale::Celsius => celsius,
            TemperatureScale::Fahrenheit => celsius * 9.0 / 5.0 + FAHRENHEIT_OFFSET,
            TemperatureScale::Kelvin => celsius + KELVIN_OFFSET,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_celsius_identity() {
        assert_eq!(TemperatureScale::Celsius.to_celsius(21.5), 21.5);
        assert_eq!(TemperatureScale::Celsius.from_celsius(21.5), 21.5);
    }

    #[test]
    fn test_fahrenheit_fixed_points() {
        assert_eq!(TemperatureScale::Fahrenheit.from_celsius(0.0), 32.0);
        assert_eq!(TemperatureScale::Fahrenheit.from_celsius(100.0), 212.0);
        assert_eq!(TemperatureScale::Fahrenheit.to_celsius(212.0), 100.0);
        assert_eq!(TemperatureScale::Fahrenheit.to_celsius(-40.0), -40.0);
    }

    #[test]
    fn test_kelvin_fixed_points() {
        assert_eq!(TemperatureScale::Kelvin.from_celsius(0.0), 273.15);
        assert_eq!(TemperatureScale::Kelvin.to_celsius(0.0), -273.15);
    }
}
