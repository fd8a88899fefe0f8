//! Measurement categories
//!
//! A category is a closed set of mutually convertible units. Conversions
//! never cross categories.

use std::fmt;
use serde::{Serialize, Deserialize};
use crate::Unit;
use crate::units;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Weight,
    Length,
    Volume,
    Temperature,
    Speed,
    Area,
    Pressure,
    Energy,
    Time,
    Angle,
    Density,
    Power,
    Torque,
    Voltage,
    Current,
    Resistance,
}

impl Category {
    /// Every category, in catalog display order
    pub const ALL: [Category; 16] = [
        Category::Weight,
        Category::Length,
        Category::Volume,
        Category::Temperature,
        Category::Speed,
        Category::Area,
        Category::Pressure,
        Category::Energy,
        Category::Time,
        Category::Angle,
        Category::Density,
        Category::Power,
        Category::Torque,
        Category::Voltage,
        Category::Current,
        Category::Resistance,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Weight => "weight",
            Category::Length => "length",
            Category::Volume => "volume",
            Category::Temperature => "temperature",
            Category::Speed => "speed",
            Category::Area => "area",
            Category::Pressure => "pressure",
            Category::Energy => "energy",
            Category::Time => "time",
            Category::Angle => "angle",
            Category::Density => "density",
            Category::Power => "power",
            Category::Torque => "torque",
            Category::Voltage => "voltage",
            Category::Current => "current",
            Category::Resistance => "resistance",
        }
    }

    /// Display grouping. Voltage, current and resistance share one screen.
    pub fn family(self) -> &'static str {
        match self {
            Category::Voltage | Category::Current | Category::Resistance => "electricity",
            other => other.name(),
        }
    }

    /// Look up a category by name (case-insensitive, a few synonyms)
    pub fn from_name(name: &str) -> Option<Category> {
        let name = name.trim().to_lowercase();
        let category = match name.as_str() {
            "weight" | "mass" => Category::Weight,
            "length" | "distance" => Category::Length,
            "volume" => Category::Volume,
            "temperature" | "temp" => Category::Temperature,
            "speed" | "velocity" => Category::Speed,
            "area" => Category::Area,
            "pressure" => Category::Pressure,
            "energy" => Category::Energy,
            "time" | "duration" => Category::Time,
            "angle" => Category::Angle,
            "density" => Category::Density,
            "power" => Category::Power,
            "torque" => Category::Torque,
            "voltage" => Category::Voltage,
            "current" => Category::Current,
            "resistance" => Category::Resistance,
            _ => return None,
        };
        Some(category)
    }

    /// Ordered unit table for this category
    pub fn units(self) -> &'static [Unit] {
        match self {
            Category::Weight => &units::WEIGHT,
            Category::Length => &units::LENGTH,
            Category::Volume => &units::VOLUME,
            Category::Temperature => &units::TEMPERATURE,
            Category::Speed => &units::SPEED,
            Category::Area => &units::AREA,
            Category::Pressure => &units::PRESSURE,
            Category::Energy => &units::ENERGY,
            Category::Time => &units::TIME,
            Category::Angle => &units::ANGLE,
            Category::Density => &units::DENSITY,
            Category::Power => &units::POWER,
            Category::Torque => &units::TORQUE,
            Category::Voltage => &units::VOLTAGE,
            Category::Current => &units::CURRENT,
            Category::Resistance => &units::RESISTANCE,
        }
    }

    /// The reference unit all factors in this category are relative to
    pub fn base(self) -> &'static Unit {
        self.unit_or_first(self.base_symbol())
    }

    fn base_symbol(self) -> &'static str {
        match self {
            Category::Weight => "kg",
            Category::Length => "m",
            Category::Volume => "L",
            Category::Temperature => "°C",
            Category::Speed => "m/s",
            Category::Area => "m²",
            Category::Pressure => "Pa",
            Category::Energy => "J",
            Category::Time => "s",
            Category::Angle => "°",
            Category::Density => "kg/m³",
            Category::Power => "W",
            Category::Torque => "N·m",
            Category::Voltage => "V",
            Category::Current => "A",
            Category::Resistance => "Ω",
        }
    }

    /// Units a fresh conversion screen starts with: (from, to)
    pub fn defaults(self) -> (&'static Unit, &'static Unit) {
        let (from, to) = self.default_symbols();
        (self.unit_or_first(from), self.unit_or_first(to))
    }

    fn default_symbols(self) -> (&'static str, &'static str) {
        match self {
            Category::Weight => ("kg", "lb"),
            Category::Length => ("m", "ft"),
            Category::Volume => ("L", "US gal"),
            Category::Temperature => ("°C", "°F"),
            Category::Speed => ("km/h", "mph"),
            Category::Area => ("m²", "ft²"),
            Category::Pressure => ("bar", "psi"),
            Category::Energy => ("kJ", "kcal"),
            Category::Time => ("h", "min"),
            Category::Angle => ("°", "rad"),
            Category::Density => ("kg/m³", "g/cm³"),
            Category::Power => ("kW", "hp"),
            Category::Torque => ("N·m", "lbf·ft"),
            Category::Voltage => ("V", "mV"),
            Category::Current => ("A", "mA"),
            Category::Resistance => ("Ω", "kΩ"),
        }
    }

    pub fn default_from(self) -> &'static Unit {
        self.defaults().0
    }

    pub fn default_to(self) -> &'static Unit {
        self.defaults().1
    }

    /// Find a unit of this category by exact symbol
    pub fn unit(self, symbol: &str) -> Option<&'static Unit> {
        self.units().iter().find(|u| u.symbol == symbol)
    }

    // Tables are static and non-empty; the catalog tests pin every
    // symbol used above to a real entry.
    fn unit_or_first(self, symbol: &str) -> &'static Unit {
        let units = self.units();
        self.unit(symbol).unwrap_or(&units[0])
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Category::from_name("Length"), Some(Category::Length));
        assert_eq!(Category::from_name(" mass "), Some(Category::Weight));
        assert_eq!(Category::from_name("velocity"), Some(Category::Speed));
        assert_eq!(Category::from_name("luminosity"), None);
    }

    #[test]
    fn test_name_round_trips() {
        for category in Category::ALL {
            assert_eq!(Category::from_name(category.name()), Some(category));
        }
    }

    #[test]
    fn test_base_symbols_resolve() {
        for category in Category::ALL {
            assert!(category.unit(category.base_symbol()).is_some(), "{} base", category);
            let base = category.base();
            assert_eq!(base.category, category);
        }
        assert_eq!(Category::Time.base().symbol, "s");
        assert_eq!(Category::Temperature.base().symbol, "°C");
    }

    #[test]
    fn test_defaults_resolve() {
        for category in Category::ALL {
            let (from, to) = category.default_symbols();
            assert!(category.unit(from).is_some(), "{} default from {}", category, from);
            assert!(category.unit(to).is_some(), "{} default to {}", category, to);
        }

        let expected = [
            (Category::Weight, "kg", "lb"),
            (Category::Volume, "L", "US gal"),
            (Category::Temperature, "°C", "°F"),
            (Category::Time, "h", "min"),
            (Category::Torque, "N·m", "lbf·ft"),
            (Category::Resistance, "Ω", "kΩ"),
        ];
        for (category, from, to) in expected {
            assert_eq!(category.default_from().symbol, from);
            assert_eq!(category.default_to().symbol, to);
        }
        for category in Category::ALL {
            let (from, to) = category.defaults();
            assert_eq!(from.category, category);
            assert_eq!(to.category, category);
            assert_ne!(from, to);
        }
    }

    #[test]
    fn test_family() {
        assert_eq!(Category::Voltage.family(), "electricity");
        assert_eq!(Category::Resistance.family(), "electricity");
        assert_eq!(Category::Torque.family(), "torque");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Category::Pressure), "pressure");
    }
}
