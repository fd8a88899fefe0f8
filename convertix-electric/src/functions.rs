//! Electrical calculator functions

use std::collections::HashMap;
use convertix_plugin::prelude::*;
use crate::helpers::{extract_number, extract_optional_number, validate_nonzero};
use crate::ohm::{self, OhmsLawError};

/// Shared body of the two-argument formulas. `divisor` names the argument
/// that must be non-zero, if any.
fn call_binary(
    args: &[Value],
    func: &str,
    names: [&str; 2],
    divisor: Option<usize>,
    formula: fn(f64, f64) -> f64,
) -> Value {
    if args.len() < 2 {
        return Value::Error(ConvertixError::arg_count(func, 2, args.len()));
    }

    let a = match extract_number(&args[0], func, names[0]) {
        Ok(n) => n,
        Err(e) => return Value::Error(e),
    };
    let b = match extract_number(&args[1], func, names[1]) {
        Ok(n) => n,
        Err(e) => return Value::Error(e),
    };

    if let Some(idx) = divisor {
        let value = if idx == 0 { a } else { b };
        if let Err(e) = validate_nonzero(value, func, names[idx]) {
            return Value::Error(e);
        }
    }

    Value::Number(formula(a, b))
}

// ============ voltage ============

pub struct Voltage;

static VOLTAGE_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("current", "Number", "Current in amperes"),
    ArgMeta::required("resistance", "Number", "Resistance in ohms"),
];

static VOLTAGE_EXAMPLES: [&str; 1] = ["voltage(2, 5) → 10"];

static VOLTAGE_RELATED: [&str; 3] = ["current", "resistance", "ohms_law"];

impl FunctionPlugin for Voltage {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "voltage",
            description: "Voltage from current and resistance (V = I × R)",
            usage: "voltage(current, resistance)",
            args: &VOLTAGE_ARGS,
            returns: "Number",
            examples: &VOLTAGE_EXAMPLES,
            category: "electric",
            related: &VOLTAGE_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        call_binary(args, "voltage", ["current", "resistance"], None, ohm::voltage)
    }
}

// ============ current ============

pub struct Current;

static CURRENT_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("voltage", "Number", "Voltage in volts"),
    ArgMeta::required("resistance", "Number", "Resistance in ohms, non-zero"),
];

static CURRENT_EXAMPLES: [&str; 1] = ["current(10, 5) → 2"];

static CURRENT_RELATED: [&str; 3] = ["voltage", "resistance", "ohms_law"];

impl FunctionPlugin for Current {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "current",
            description: "Current from voltage and resistance (I = V / R)",
            usage: "current(voltage, resistance)",
            args: &CURRENT_ARGS,
            returns: "Number",
            examples: &CURRENT_EXAMPLES,
            category: "electric",
            related: &CURRENT_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        call_binary(args, "current", ["voltage", "resistance"], Some(1), ohm::current)
    }
}

// ============ resistance ============

pub struct Resistance;

static RESISTANCE_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("voltage", "Number", "Voltage in volts"),
    ArgMeta::required("current", "Number", "Current in amperes, non-zero"),
];

static RESISTANCE_EXAMPLES: [&str; 1] = ["resistance(10, 2) → 5"];

static RESISTANCE_RELATED: [&str; 3] = ["voltage", "current", "ohms_law"];

impl FunctionPlugin for Resistance {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "resistance",
            description: "Resistance from voltage and current (R = V / I)",
            usage: "resistance(voltage, current)",
            args: &RESISTANCE_ARGS,
            returns: "Number",
            examples: &RESISTANCE_EXAMPLES,
            category: "electric",
            related: &RESISTANCE_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        call_binary(args, "resistance", ["voltage", "current"], Some(1), ohm::resistance)
    }
}

// ============ power ============

pub struct Power;

static POWER_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("voltage", "Number", "Voltage in volts"),
    ArgMeta::required("current", "Number", "Current in amperes"),
];

static POWER_EXAMPLES: [&str; 1] = ["power(12, 0.5) → 6"];

static POWER_RELATED: [&str; 2] = ["power_ir", "power_vr"];

impl FunctionPlugin for Power {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "power",
            description: "Power from voltage and current (P = V × I)",
            usage: "power(voltage, current)",
            args: &POWER_ARGS,
            returns: "Number",
            examples: &POWER_EXAMPLES,
            category: "electric",
            related: &POWER_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        call_binary(args, "power", ["voltage", "current"], None, ohm::power)
    }
}

// ============ power_ir ============

pub struct PowerIR;

static POWER_IR_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("current", "Number", "Current in amperes"),
    ArgMeta::required("resistance", "Number", "Resistance in ohms"),
];

static POWER_IR_EXAMPLES: [&str; 1] = ["power_ir(0.5, 24) → 6"];

static POWER_IR_RELATED: [&str; 2] = ["power", "power_vr"];

impl FunctionPlugin for PowerIR {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "power_ir",
            description: "Power from current and resistance (P = I² × R)",
            usage: "power_ir(current, resistance)",
            args: &POWER_IR_ARGS,
            returns: "Number",
            examples: &POWER_IR_EXAMPLES,
            category: "electric",
            related: &POWER_IR_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        call_binary(
            args,
            "power_ir",
            ["current", "resistance"],
            None,
            ohm::power_from_current_resistance,
        )
    }
}

// ============ power_vr ============

pub struct PowerVR;

static POWER_VR_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("voltage", "Number", "Voltage in volts"),
    ArgMeta::required("resistance", "Number", "Resistance in ohms, non-zero"),
];

static POWER_VR_EXAMPLES: [&str; 1] = ["power_vr(12, 24) → 6"];

static POWER_VR_RELATED: [&str; 2] = ["power", "power_ir"];

impl FunctionPlugin for PowerVR {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "power_vr",
            description: "Power from voltage and resistance (P = V² / R)",
            usage: "power_vr(voltage, resistance)",
            args: &POWER_VR_ARGS,
            returns: "Number",
            examples: &POWER_VR_EXAMPLES,
            category: "electric",
            related: &POWER_VR_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        call_binary(
            args,
            "power_vr",
            ["voltage", "resistance"],
            Some(1),
            ohm::power_from_voltage_resistance,
        )
    }
}

// ============ ohms_law ============

pub struct OhmsLaw;

static OHMS_LAW_ARGS: [ArgMeta; 3] = [
    ArgMeta::optional("voltage", "Number", "Voltage in volts", "null"),
    ArgMeta::optional("current", "Number", "Current in amperes", "null"),
    ArgMeta::optional("resistance", "Number", "Resistance in ohms", "null"),
];

static OHMS_LAW_EXAMPLES: [&str; 2] = [
    "ohms_law(null, 2, 5) → {voltage: 10, current: 2, resistance: 5, power: 20}",
    "ohms_law(12, null, 24) → {voltage: 12, current: 0.5, resistance: 24, power: 6}",
];

static OHMS_LAW_RELATED: [&str; 3] = ["voltage", "current", "resistance"];

impl FunctionPlugin for OhmsLaw {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "ohms_law",
            description: "Solve a resistive circuit from any two of voltage, current and resistance",
            usage: "ohms_law(voltage?, current?, resistance?)",
            args: &OHMS_LAW_ARGS,
            returns: "Object",
            examples: &OHMS_LAW_EXAMPLES,
            category: "electric",
            related: &OHMS_LAW_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        let mut given = [None; 3];
        for (i, name) in ["voltage", "current", "resistance"].iter().enumerate() {
            given[i] = match extract_optional_number(args, i, "ohms_law", name) {
                Ok(v) => v,
                Err(e) => return Value::Error(e),
            };
        }

        match ohm::solve_ohms_law(given[0], given[1], given[2]) {
            Ok(circuit) => {
                let mut result = HashMap::new();
                result.insert("voltage".to_string(), Value::Number(circuit.voltage));
                result.insert("current".to_string(), Value::Number(circuit.current));
                result.insert("resistance".to_string(), Value::Number(circuit.resistance));
                result.insert("power".to_string(), Value::Number(circuit.power));
                Value::Object(result)
            }
            Err(OhmsLawError::WrongArity(supplied)) => Value::Error(
                ConvertixError::arg_count("ohms_law", 2, supplied)
                    .with_suggestion("Pass exactly two of voltage, current, resistance; use null for the unknown"),
            ),
            Err(e) => Value::Error(ConvertixError::domain_error(format!("ohms_law(): {}", e))),
        }
    }
}
