//! Convertix Electric - Ohm's law calculator
//!
//! Derived electrical quantities from the relations V = I·R and P = V·I.
//! This is a calculator, not a converter: unit conversion for voltage,
//! current and resistance lives in convertix-units.

mod helpers;
mod ohm;
mod functions;

pub use ohm::{
    voltage, current, resistance, power,
    power_from_current_resistance, power_from_voltage_resistance,
    solve_ohms_law, Circuit, OhmsLawError,
};

use convertix_plugin::PluginRegistry;

/// Load electrical functions into registry
pub fn load_electric_library(registry: PluginRegistry) -> PluginRegistry {
    registry
        // Ohm's law (3 functions)
        .with_function(functions::Voltage)
        .with_function(functions::Current)
        .with_function(functions::Resistance)

        // Power (3 functions)
        .with_function(functions::Power)
        .with_function(functions::PowerIR)
        .with_function(functions::PowerVR)

        // Solver
        .with_function(functions::OhmsLaw)
}
