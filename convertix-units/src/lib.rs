//! Convertix Units - Measurement categories and unit conversion
//!
//! Sixteen closed categories, each with a base unit. Linear units carry a
//! factor to the base; temperature units carry affine formulas through
//! Celsius. Every conversion goes `from -> base -> to`.
//!
//! Categories:
//! - Weight (kg, g, t, lb, oz, mg)
//! - Length (m, km, cm, mm, mi, yd, ft, in, nmi)
//! - Volume (L, mL, m³, US gal, cup, ...)
//! - Temperature (°C, °F, K)
//! - Speed, Area, Pressure, Energy, Time, Angle
//! - Density, Power, Torque
//! - Voltage, Current, Resistance

mod temperature;
mod category;
mod unit;
mod units;
mod quantity;
mod convert;
mod parse;

pub use temperature::{TemperatureScale, KELVIN_OFFSET, FAHRENHEIT_OFFSET};
pub use category::Category;
pub use unit::{Unit, Scale, ConversionError, convert};
pub use units::{UnitRegistry, UNITS};
pub use quantity::Quantity;
pub use parse::{parse_unit, parse_category, parse_conversion, parse_quantity_string};

use convertix_plugin::PluginRegistry;

/// Load unit functions into registry
pub fn load_units_library(registry: PluginRegistry) -> PluginRegistry {
    registry
        // Conversion (4 functions)
        .with_function(convert::Convert)
        .with_function(convert::InUnits)
        .with_function(convert::ToBase)
        .with_function(convert::ConvertAll)

        // Quantities (2 functions)
        .with_function(convert::QuantityFn)
        .with_function(convert::ParseQuantity)

        // Catalog (2 functions)
        .with_function(convert::ListCategories)
        .with_function(convert::ListUnits)
}
