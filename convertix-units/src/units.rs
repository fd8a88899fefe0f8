//! Unit definitions - every category's table, in display order
//!
//! Factors are "to base unit" multipliers and are reproduced exactly as the
//! converter has always published them.

use std::collections::HashMap;
use std::f64::consts::PI;
use std::sync::LazyLock;
use crate::{Category, Unit, TemperatureScale};

use Category::*;

pub static WEIGHT: [Unit; 6] = [
    Unit::linear("kg", "kilogram", Weight, 1.0),
    Unit::linear("g", "gram", Weight, 0.001),
    Unit::linear("t", "tonne", Weight, 1000.0),
    Unit::linear("lb", "pound", Weight, 0.453592),
    Unit::linear("oz", "ounce", Weight, 0.0283495),
    Unit::linear("mg", "milligram", Weight, 0.000001),
];

pub static LENGTH: [Unit; 9] = [
    Unit::linear("m", "meter", Length, 1.0),
    Unit::linear("km", "kilometer", Length, 1000.0),
    Unit::linear("cm", "centimeter", Length, 0.01),
    Unit::linear("mm", "millimeter", Length, 0.001),
    Unit::linear("mi", "mile", Length, 1609.344),
    Unit::linear("yd", "yard", Length, 0.9144),
    Unit::linear("ft", "foot", Length, 0.3048),
    Unit::linear("in", "inch", Length, 0.0254),
    Unit::linear("nmi", "nautical mile", Length, 1852.0),
];

pub static VOLUME: [Unit; 10] = [
    Unit::linear("L", "liter", Volume, 1.0),
    Unit::linear("mL", "milliliter", Volume, 0.001),
    Unit::linear("m³", "cubic meter", Volume, 1000.0),
    Unit::linear("cm³", "cubic centimeter", Volume, 0.001),
    Unit::linear("US gal", "US gallon", Volume, 3.78541),
    Unit::linear("UK gal", "imperial gallon", Volume, 4.54609),
    Unit::linear("pt", "pint", Volume, 0.473176),
    Unit::linear("cup", "cup", Volume, 0.236588),
    Unit::linear("tbsp", "tablespoon", Volume, 0.0147868),
    Unit::linear("tsp", "teaspoon", Volume, 0.00492892),
];

pub static TEMPERATURE: [Unit; 3] = [
    Unit::temperature("°C", "celsius", TemperatureScale::Celsius),
    Unit::temperature("°F", "fahrenheit", TemperatureScale::Fahrenheit),
    Unit::temperature("K", "kelvin", TemperatureScale::Kelvin),
];

pub static SPEED: [Unit; 5] = [
    Unit::linear("m/s", "meter per second", Speed, 1.0),
    Unit::linear("km/h", "kilometer per hour", Speed, 0.277778),
    Unit::linear("mph", "mile per hour", Speed, 0.44704),
    Unit::linear("kn", "knot", Speed, 0.514444),
    Unit::linear("ft/s", "foot per second", Speed, 0.3048),
];

pub static AREA: [Unit; 9] = [
    Unit::linear("m²", "square meter", Area, 1.0),
    Unit::linear("km²", "square kilometer", Area, 1e6),
    Unit::linear("cm²", "square centimeter", Area, 0.0001),
    Unit::linear("mm²", "square millimeter", Area, 0.000001),
    Unit::linear("ha", "hectare", Area, 10000.0),
    Unit::linear("are", "are", Area, 100.0),
    Unit::linear("ft²", "square foot", Area, 0.092903),
    Unit::linear("yd²", "square yard", Area, 0.836127),
    Unit::linear("acre", "acre", Area, 4046.8564224),
];

pub static PRESSURE: [Unit; 10] = [
    Unit::linear("Pa", "pascal", Pressure, 1.0),
    Unit::linear("kPa", "kilopascal", Pressure, 1000.0),
    Unit::linear("MPa", "megapascal", Pressure, 1e6),
    Unit::linear("bar", "bar", Pressure, 1e5),
    Unit::linear("mbar", "millibar", Pressure, 100.0),
    Unit::linear("at", "technical atmosphere", Pressure, 98066.5),
    Unit::linear("atm", "standard atmosphere", Pressure, 101325.0),
    Unit::linear("mmHg", "millimeter of mercury", Pressure, 133.322),
    Unit::linear("inHg", "inch of mercury", Pressure, 3386.39),
    Unit::linear("psi", "pound per square inch", Pressure, 6894.76),
];

pub static ENERGY: [Unit; 10] = [
    Unit::linear("J", "joule", Energy, 1.0),
    Unit::linear("kJ", "kilojoule", Energy, 1000.0),
    Unit::linear("MJ", "megajoule", Energy, 1e6),
    Unit::linear("Wh", "watt hour", Energy, 3600.0),
    Unit::linear("kWh", "kilowatt hour", Energy, 3.6e6),
    Unit::linear("cal", "calorie", Energy, 4.184),
    Unit::linear("kcal", "kilocalorie", Energy, 4184.0),
    Unit::linear("BTU", "british thermal unit", Energy, 1055.06),
    Unit::linear("erg", "erg", Energy, 1e-7),
    Unit::linear("eV", "electronvolt", Energy, 1.602176634e-19),
];

pub static TIME: [Unit; 8] = [
    Unit::linear("ms", "millisecond", Time, 0.001),
    Unit::linear("s", "second", Time, 1.0),
    Unit::linear("min", "minute", Time, 60.0),
    Unit::linear("h", "hour", Time, 3600.0),
    Unit::linear("day", "day", Time, 86400.0),
    Unit::linear("week", "week", Time, 604800.0),
    // Gregorian averages: 365.2425 days / 12, 365.2425 days
    Unit::linear("month", "month", Time, 2629746.0),
    Unit::linear("year", "year", Time, 31556952.0),
];

pub static ANGLE: [Unit; 6] = [
    Unit::linear("°", "degree", Angle, 1.0),
    Unit::linear("rad", "radian", Angle, 180.0 / PI),
    Unit::linear("grad", "gradian", Angle, 0.9),
    Unit::linear("arcmin", "arcminute", Angle, 1.0 / 60.0),
    Unit::linear("arcsec", "arcsecond", Angle, 1.0 / 3600.0),
    Unit::linear("turn", "turn", Angle, 360.0),
];

pub static DENSITY: [Unit; 9] = [
    Unit::linear("kg/m³", "kilogram per cubic meter", Density, 1.0),
    Unit::linear("g/cm³", "gram per cubic centimeter", Density, 1000.0),
    Unit::linear("g/m³", "gram per cubic meter", Density, 0.001),
    Unit::linear("kg/L", "kilogram per liter", Density, 1000.0),
    Unit::linear("g/L", "gram per liter", Density, 1.0),
    Unit::linear("mg/L", "milligram per liter", Density, 0.001),
    Unit::linear("lb/ft³", "pound per cubic foot", Density, 16.0185),
    Unit::linear("lb/gal", "pound per US gallon", Density, 119.8264),
    // Relative to water at 1000 kg/m³
    Unit::linear("SG", "specific gravity", Density, 1000.0),
];

pub static POWER: [Unit; 9] = [
    Unit::linear("W", "watt", Power, 1.0),
    Unit::linear("kW", "kilowatt", Power, 1000.0),
    Unit::linear("MW", "megawatt", Power, 1e6),
    Unit::linear("PS", "metric horsepower", Power, 735.49875),
    Unit::linear("hp", "mechanical horsepower", Power, 745.699872),
    Unit::linear("BTU/h", "BTU per hour", Power, 0.29307107),
    Unit::linear("cal/s", "calorie per second", Power, 4.1868),
    Unit::linear("J/s", "joule per second", Power, 1.0),
    Unit::linear("ft·lb/min", "foot-pound per minute", Power, 0.0225969658),
];

pub static TORQUE: [Unit; 9] = [
    Unit::linear("N·m", "newton meter", Torque, 1.0),
    Unit::linear("mN·m", "millinewton meter", Torque, 0.001),
    Unit::linear("kN·m", "kilonewton meter", Torque, 1000.0),
    Unit::linear("daN·m", "decanewton meter", Torque, 10.0),
    Unit::linear("lbf·ft", "pound-force foot", Torque, 1.355818),
    Unit::linear("lbf·in", "pound-force inch", Torque, 0.1129848),
    Unit::linear("ozf·in", "ounce-force inch", Torque, 0.00706155),
    Unit::linear("kgf·m", "kilogram-force meter", Torque, 9.80665),
    Unit::linear("kgf·cm", "kilogram-force centimeter", Torque, 0.0980665),
];

pub static VOLTAGE: [Unit; 3] = [
    Unit::linear("V", "volt", Voltage, 1.0),
    Unit::linear("mV", "millivolt", Voltage, 0.001),
    Unit::linear("kV", "kilovolt", Voltage, 1000.0),
];

pub static CURRENT: [Unit; 3] = [
    Unit::linear("A", "ampere", Current, 1.0),
    Unit::linear("mA", "milliampere", Current, 0.001),
    Unit::linear("kA", "kiloampere", Current, 1000.0),
];

pub static RESISTANCE: [Unit; 3] = [
    Unit::linear("Ω", "ohm", Resistance, 1.0),
    Unit::linear("kΩ", "kiloohm", Resistance, 1000.0),
    Unit::linear("MΩ", "megaohm", Resistance, 1e6),
];

/// Global unit lookup
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// Symbol and alias index over every category's table
pub struct UnitRegistry {
    units: HashMap<&'static str, &'static Unit>,
    aliases: HashMap<String, &'static str>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        let mut registry = UnitRegistry {
            units: HashMap::new(),
            aliases: HashMap::new(),
        };
        for category in Category::ALL {
            for unit in category.units() {
                registry.units.insert(unit.symbol, unit);
                // Names double as aliases: "kilometer", "newton meter"
                registry.aliases.insert(unit.name.to_lowercase(), unit.symbol);
            }
        }
        registry.register_aliases();
        registry
    }

    /// Get a unit by symbol or alias.
    ///
    /// Symbols match exactly ("mV" is not "MV"); aliases match
    /// case-insensitively.
    pub fn get(&self, symbol: &str) -> Option<&'static Unit> {
        let symbol = symbol.trim();
        if let Some(unit) = self.units.get(symbol) {
            return Some(*unit);
        }
        self.aliases.get(&symbol.to_lowercase())
            .and_then(|canonical| self.units.get(canonical))
            .copied()
    }

    /// Number of distinct units
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    fn alias(&mut self, alias: &str, symbol: &'static str) {
        self.aliases.insert(alias.to_lowercase(), symbol);
    }

    fn register_aliases(&mut self) {
        self.register_weight_aliases();
        self.register_length_aliases();
        self.register_volume_aliases();
        self.register_temperature_aliases();
        self.register_speed_aliases();
        self.register_area_aliases();
        self.register_pressure_aliases();
        self.register_energy_aliases();
        self.register_time_aliases();
        self.register_angle_aliases();
        self.register_density_aliases();
        self.register_power_aliases();
        self.register_torque_aliases();
        self.register_electrical_aliases();
    }

    fn register_weight_aliases(&mut self) {
        self.alias("kilograms", "kg");
        self.alias("grams", "g");
        self.alias("tonnes", "t");
        self.alias("metric ton", "t");
        self.alias("pounds", "lb");
        self.alias("lbs", "lb");
        self.alias("ounces", "oz");
        self.alias("milligrams", "mg");
    }

    fn register_length_aliases(&mut self) {
        self.alias("meters", "m");
        self.alias("metre", "m");
        self.alias("metres", "m");
        self.alias("kilometers", "km");
        self.alias("kilometre", "km");
        self.alias("kilometres", "km");
        self.alias("centimeters", "cm");
        self.alias("millimeters", "mm");
        self.alias("miles", "mi");
        self.alias("yards", "yd");
        self.alias("feet", "ft");
        self.alias("inches", "in");
        self.alias("nautical miles", "nmi");
    }

    fn register_volume_aliases(&mut self) {
        self.alias("l", "L");
        self.alias("litre", "L");
        self.alias("liters", "L");
        self.alias("litres", "L");
        self.alias("ml", "mL");
        self.alias("milliliters", "mL");
        self.alias("m3", "m³");
        self.alias("m^3", "m³");
        self.alias("cm3", "cm³");
        self.alias("cm^3", "cm³");
        self.alias("cc", "cm³");
        self.alias("gal", "US gal");
        self.alias("us_gal", "US gal");
        self.alias("gallon", "US gal");
        self.alias("gallons", "US gal");
        self.alias("uk_gal", "UK gal");
        self.alias("imperial gal", "UK gal");
        self.alias("pint", "pt");
        self.alias("pints", "pt");
        self.alias("cups", "cup");
        self.alias("tablespoons", "tbsp");
        self.alias("teaspoons", "tsp");
    }

    fn register_temperature_aliases(&mut self) {
        self.alias("C", "°C");
        self.alias("degC", "°C");
        self.alias("centigrade", "°C");
        self.alias("F", "°F");
        self.alias("degF", "°F");
        self.alias("kelvins", "K");
    }

    fn register_speed_aliases(&mut self) {
        self.alias("mps", "m/s");
        self.alias("kph", "km/h");
        self.alias("kmh", "km/h");
        self.alias("miles per hour", "mph");
        self.alias("kt", "kn");
        self.alias("knots", "kn");
        self.alias("fps", "ft/s");
    }

    fn register_area_aliases(&mut self) {
        self.alias("m2", "m²");
        self.alias("m^2", "m²");
        self.alias("km2", "km²");
        self.alias("km^2", "km²");
        self.alias("cm2", "cm²");
        self.alias("cm^2", "cm²");
        self.alias("mm2", "mm²");
        self.alias("mm^2", "mm²");
        self.alias("hectares", "ha");
        self.alias("ares", "are");
        self.alias("ft2", "ft²");
        self.alias("ft^2", "ft²");
        self.alias("sq ft", "ft²");
        self.alias("yd2", "yd²");
        self.alias("yd^2", "yd²");
        self.alias("acres", "acre");
    }

    fn register_pressure_aliases(&mut self) {
        self.alias("pascals", "Pa");
        self.alias("bars", "bar");
        self.alias("atmosphere", "atm");
        self.alias("torr", "mmHg");
    }

    fn register_energy_aliases(&mut self) {
        self.alias("joules", "J");
        self.alias("calories", "cal");
        self.alias("kilocalories", "kcal");
        self.alias("btu", "BTU");
        self.alias("ev", "eV");
        self.alias("kwh", "kWh");
    }

    fn register_time_aliases(&mut self) {
        self.alias("milliseconds", "ms");
        self.alias("sec", "s");
        self.alias("seconds", "s");
        self.alias("minutes", "min");
        self.alias("hr", "h");
        self.alias("hours", "h");
        self.alias("d", "day");
        self.alias("days", "day");
        self.alias("weeks", "week");
        self.alias("months", "month");
        self.alias("yr", "year");
        self.alias("years", "year");
    }

    fn register_angle_aliases(&mut self) {
        self.alias("deg", "°");
        self.alias("degrees", "°");
        self.alias("radians", "rad");
        self.alias("gon", "grad");
        self.alias("gradians", "grad");
        self.alias("arcminutes", "arcmin");
        self.alias("arcseconds", "arcsec");
        self.alias("rev", "turn");
        self.alias("turns", "turn");
    }

    fn register_density_aliases(&mut self) {
        self.alias("kg/m3", "kg/m³");
        self.alias("kg/m^3", "kg/m³");
        self.alias("g/cm3", "g/cm³");
        self.alias("g/cm^3", "g/cm³");
        self.alias("g/ml", "g/cm³");
        self.alias("g/m3", "g/m³");
        self.alias("g/m^3", "g/m³");
        self.alias("lb/ft3", "lb/ft³");
        self.alias("lb/ft^3", "lb/ft³");
    }

    fn register_power_aliases(&mut self) {
        self.alias("watts", "W");
        self.alias("kilowatts", "kW");
        self.alias("horsepower", "hp");
        self.alias("btu/h", "BTU/h");
        self.alias("ft*lb/min", "ft·lb/min");
    }

    fn register_torque_aliases(&mut self) {
        self.alias("N*m", "N·m");
        self.alias("mN*m", "mN·m");
        self.alias("kN*m", "kN·m");
        self.alias("daN*m", "daN·m");
        self.alias("lbf*ft", "lbf·ft");
        self.alias("lb-ft", "lbf·ft");
        self.alias("ft-lb", "lbf·ft");
        self.alias("lbf*in", "lbf·in");
        self.alias("in-lb", "lbf·in");
        self.alias("ozf*in", "ozf·in");
        self.alias("kgf*m", "kgf·m");
        self.alias("kgf*cm", "kgf·cm");
    }

    fn register_electrical_aliases(&mut self) {
        self.alias("volts", "V");
        self.alias("millivolts", "mV");
        self.alias("kilovolts", "kV");
        self.alias("amp", "A");
        self.alias("amps", "A");
        self.alias("amperes", "A");
        self.alias("milliamps", "mA");
        self.alias("ohms", "Ω");
        self.alias("kohm", "kΩ");
        self.alias("megohm", "MΩ");
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}
