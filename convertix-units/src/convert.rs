//! Unit conversion functions for Convertix

use std::collections::HashMap;
use convertix_plugin::prelude::*;
use crate::{Category, Quantity, Unit};
use crate::unit::convert;
use crate::parse::{parse_unit, parse_category, parse_conversion, parse_quantity_string};

fn number_arg(args: &[Value], index: usize, func: &str, arg: &str) -> Result<f64, ConvertixError> {
    match args.get(index) {
        Some(Value::Number(n)) => Ok(*n),
        Some(v @ Value::Text(_)) => v.to_number(),
        Some(Value::Error(e)) => Err(e.clone()),
        Some(other) => Err(ConvertixError::arg_type(func, arg, "Number", other.type_name())),
        None => Err(ConvertixError::arg_type(func, arg, "Number", "Null")),
    }
}

fn text_arg<'a>(
    args: &'a [Value],
    index: usize,
    func: &str,
    arg: &str,
) -> Result<&'a str, ConvertixError> {
    match args.get(index) {
        Some(Value::Text(s)) => Ok(s.as_str()),
        Some(Value::Error(e)) => Err(e.clone()),
        Some(other) => Err(ConvertixError::arg_type(func, arg, "Text", other.type_name())),
        None => Err(ConvertixError::arg_type(func, arg, "Text", "Null")),
    }
}

fn unit_arg(
    args: &[Value],
    index: usize,
    func: &str,
    arg: &str,
) -> Result<&'static Unit, ConvertixError> {
    let symbol = text_arg(args, index, func, arg)?;
    parse_unit(symbol).map_err(ConvertixError::from)
}

fn unit_summary(unit: &Unit) -> Value {
    let mut obj = HashMap::new();
    obj.insert("symbol".to_string(), Value::from(unit.symbol));
    obj.insert("name".to_string(), Value::from(unit.name));
    obj.insert("factor".to_string(), unit.factor().map(Value::Number).unwrap_or(Value::Null));
    obj.insert("base".to_string(), Value::Bool(unit.is_base()));
    Value::Object(obj)
}

fn category_summary(category: Category) -> Value {
    let (from, to) = category.defaults();
    let units = category.units().iter().map(|u| Value::from(u.symbol)).collect();

    let mut obj = HashMap::new();
    obj.insert("name".to_string(), Value::from(category.name()));
    obj.insert("family".to_string(), Value::from(category.family()));
    obj.insert("base".to_string(), Value::from(category.base().symbol));
    obj.insert("default_from".to_string(), Value::from(from.symbol));
    obj.insert("default_to".to_string(), Value::from(to.symbol));
    obj.insert("units".to_string(), Value::List(units));
    Value::Object(obj)
}

// ============ convert ============

pub struct Convert;

static CONVERT_ARGS: [ArgMeta; 3] = [
    ArgMeta::required("value", "Number", "Value to convert"),
    ArgMeta::required("from_unit", "Text", "Source unit (e.g., \"km\")"),
    ArgMeta::required("to_unit", "Text", "Target unit (e.g., \"mi\")"),
];

static CONVERT_EXAMPLES: [&str; 3] = [
    "convert(100, \"km/h\", \"mph\") → 62.137119",
    "convert(32, \"°F\", \"°C\") → 0",
    "convert(1, \"kg\", \"lb\") → 2.204623",
];

static CONVERT_RELATED: [&str; 3] = ["in_units", "convert_all", "to_base"];

impl FunctionPlugin for Convert {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "convert",
            description: "Convert a value from one unit to another of the same category",
            usage: "convert(value, from_unit, to_unit)",
            args: &CONVERT_ARGS,
            returns: "Number",
            examples: &CONVERT_EXAMPLES,
            category: "units",
            related: &CONVERT_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if args.len() < 3 {
            return Value::Error(ConvertixError::arg_count("convert", 3, args.len()));
        }

        let value = match number_arg(args, 0, "convert", "value") {
            Ok(v) => v,
            Err(e) => return Value::Error(e),
        };
        let from_unit = match unit_arg(args, 1, "convert", "from_unit") {
            Ok(u) => u,
            Err(e) => return Value::Error(e),
        };
        let to_unit = match unit_arg(args, 2, "convert", "to_unit") {
            Ok(u) => u,
            Err(e) => return Value::Error(e),
        };

        match convert(value, from_unit, to_unit) {
            Ok(result) => Value::Number(result),
            Err(e) => Value::Error(e.into()),
        }
    }
}

// ============ in_units ============

pub struct InUnits;

static IN_UNITS_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("value", "Number", "Value to convert"),
    ArgMeta::required("conversion", "Text", "Conversion spec like \"km->mi\""),
];

static IN_UNITS_EXAMPLES: [&str; 3] = [
    "in_units(1, \"mi->ft\") → 5280",
    "in_units(0, \"C→F\") → 32",
    "in_units(1, \"atm to Pa\") → 101325",
];

static IN_UNITS_RELATED: [&str; 2] = ["convert", "to_base"];

impl FunctionPlugin for InUnits {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "in_units",
            description: "Convert a value using a conversion spec",
            usage: "in_units(value, \"from->to\")",
            args: &IN_UNITS_ARGS,
            returns: "Number",
            examples: &IN_UNITS_EXAMPLES,
            category: "units",
            related: &IN_UNITS_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if args.len() < 2 {
            return Value::Error(ConvertixError::arg_count("in_units", 2, args.len()));
        }

        let value = match number_arg(args, 0, "in_units", "value") {
            Ok(v) => v,
            Err(e) => return Value::Error(e),
        };
        let spec = match text_arg(args, 1, "in_units", "conversion") {
            Ok(s) => s,
            Err(e) => return Value::Error(e),
        };

        let (from_unit, to_unit) = match parse_conversion(spec) {
            Ok(pair) => pair,
            Err(e) => return Value::Error(e.into()),
        };

        match convert(value, from_unit, to_unit) {
            Ok(result) => Value::Number(result),
            Err(e) => Value::Error(e.into()),
        }
    }
}

// ============ to_base ============

pub struct ToBase;

static TO_BASE_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("value", "Number", "Value to convert"),
    ArgMeta::required("unit", "Text", "Source unit"),
];

static TO_BASE_EXAMPLES: [&str; 2] = [
    "to_base(5, \"km\") → 5000",
    "to_base(212, \"°F\") → 100",
];

static TO_BASE_RELATED: [&str; 2] = ["convert", "list_units"];

impl FunctionPlugin for ToBase {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "to_base",
            description: "Convert a value to its category's base unit",
            usage: "to_base(value, unit)",
            args: &TO_BASE_ARGS,
            returns: "Number",
            examples: &TO_BASE_EXAMPLES,
            category: "units",
            related: &TO_BASE_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if args.len() < 2 {
            return Value::Error(ConvertixError::arg_count("to_base", 2, args.len()));
        }

        let value = match number_arg(args, 0, "to_base", "value") {
            Ok(v) => v,
            Err(e) => return Value::Error(e),
        };
        let unit = match unit_arg(args, 1, "to_base", "unit") {
            Ok(u) => u,
            Err(e) => return Value::Error(e),
        };

        Value::Number(unit.to_base(value))
    }
}

// ============ convert_all ============

pub struct ConvertAll;

static CONVERT_ALL_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("value", "Number", "Value to convert"),
    ArgMeta::required("unit", "Text", "Source unit"),
];

static CONVERT_ALL_EXAMPLES: [&str; 1] = [
    "convert_all(1, \"h\") → {s: 3600, min: 60, h: 1, ...}",
];

static CONVERT_ALL_RELATED: [&str; 2] = ["convert", "list_units"];

impl FunctionPlugin for ConvertAll {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "convert_all",
            description: "Convert a value into every unit of its category",
            usage: "convert_all(value, unit)",
            args: &CONVERT_ALL_ARGS,
            returns: "Object",
            examples: &CONVERT_ALL_EXAMPLES,
            category: "units",
            related: &CONVERT_ALL_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if args.len() < 2 {
            return Value::Error(ConvertixError::arg_count("convert_all", 2, args.len()));
        }

        let value = match number_arg(args, 0, "convert_all", "value") {
            Ok(v) => v,
            Err(e) => return Value::Error(e),
        };
        let unit = match unit_arg(args, 1, "convert_all", "unit") {
            Ok(u) => u,
            Err(e) => return Value::Error(e),
        };

        let mut result = HashMap::new();
        for target in unit.category.units() {
            match convert(value, unit, target) {
                Ok(v) => {
                    result.insert(target.symbol.to_string(), Value::Number(v));
                }
                Err(e) => return Value::Error(e.into()),
            }
        }
        Value::Object(result)
    }
}

// ============ quantity ============

pub struct QuantityFn;

static QUANTITY_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("value", "Number", "Numeric value"),
    ArgMeta::required("unit", "Text", "Unit symbol or alias"),
];

static QUANTITY_EXAMPLES: [&str; 2] = [
    "quantity(1.5, \"km\") → \"1.5 km\"",
    "quantity(20, \"celsius\") → \"20 °C\"",
];

static QUANTITY_RELATED: [&str; 2] = ["parse_quantity", "convert"];

impl FunctionPlugin for QuantityFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "quantity",
            description: "Format a value with its unit symbol",
            usage: "quantity(value, unit)",
            args: &QUANTITY_ARGS,
            returns: "Text",
            examples: &QUANTITY_EXAMPLES,
            category: "units",
            related: &QUANTITY_RELATED,
        }
    }

    fn call(&self, args: &[Value], ctx: &EvalContext) -> Value {
        if args.len() < 2 {
            return Value::Error(ConvertixError::arg_count("quantity", 2, args.len()));
        }

        let value = match number_arg(args, 0, "quantity", "value") {
            Ok(v) => v,
            Err(e) => return Value::Error(e),
        };
        let unit = match unit_arg(args, 1, "quantity", "unit") {
            Ok(u) => u,
            Err(e) => return Value::Error(e),
        };

        Value::Text(Quantity::new(value, unit).format(ctx.decimals))
    }
}

// ============ list_categories ============

pub struct ListCategories;

static LIST_CATEGORIES_ARGS: [ArgMeta; 0] = [];

static LIST_CATEGORIES_EXAMPLES: [&str; 1] = [
    "list_categories() → [{name: \"weight\", base: \"kg\", ...}, ...]",
];

static LIST_CATEGORIES_RELATED: [&str; 1] = ["list_units"];

impl FunctionPlugin for ListCategories {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "list_categories",
            description: "List every category with its base unit, defaults and units",
            usage: "list_categories()",
            args: &LIST_CATEGORIES_ARGS,
            returns: "List",
            examples: &LIST_CATEGORIES_EXAMPLES,
            category: "units",
            related: &LIST_CATEGORIES_RELATED,
        }
    }

    fn call(&self, _args: &[Value], _ctx: &EvalContext) -> Value {
        Value::List(Category::ALL.iter().copied().map(category_summary).collect())
    }
}

// ============ list_units ============

pub struct ListUnits;

static LIST_UNITS_ARGS: [ArgMeta; 1] = [
    ArgMeta::required("category", "Text", "Category name (e.g., \"pressure\")"),
];

static LIST_UNITS_EXAMPLES: [&str; 1] = [
    "list_units(\"angle\") → [{symbol: \"°\", name: \"degree\", factor: 1, base: true}, ...]",
];

static LIST_UNITS_RELATED: [&str; 2] = ["list_categories", "convert_all"];

impl FunctionPlugin for ListUnits {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "list_units",
            description: "List the units of a category in display order",
            usage: "list_units(category)",
            args: &LIST_UNITS_ARGS,
            returns: "List",
            examples: &LIST_UNITS_EXAMPLES,
            category: "units",
            related: &LIST_UNITS_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if args.is_empty() {
            return Value::Error(ConvertixError::arg_count("list_units", 1, 0));
        }

        let name = match text_arg(args, 0, "list_units", "category") {
            Ok(s) => s,
            Err(e) => return Value::Error(e),
        };
        let category = match parse_category(name) {
            Ok(c) => c,
            Err(e) => return Value::Error(e.into()),
        };

        Value::List(category.units().iter().map(unit_summary).collect())
    }
}

// ============ parse_quantity ============

pub struct ParseQuantity;

static PARSE_QUANTITY_ARGS: [ArgMeta; 1] = [
    ArgMeta::required("text", "Text", "Quantity string like \"5 km\""),
];

static PARSE_QUANTITY_EXAMPLES: [&str; 2] = [
    "parse_quantity(\"5 km\") → {value: 5, unit: \"km\"}",
    "parse_quantity(\"98.6F\") → {value: 98.6, unit: \"°F\"}",
];

static PARSE_QUANTITY_RELATED: [&str; 1] = ["quantity"];

impl FunctionPlugin for ParseQuantity {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "parse_quantity",
            description: "Split a quantity string into its value and catalog unit",
            usage: "parse_quantity(text)",
            args: &PARSE_QUANTITY_ARGS,
            returns: "Object",
            examples: &PARSE_QUANTITY_EXAMPLES,
            category: "units",
            related: &PARSE_QUANTITY_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if args.is_empty() {
            return Value::Error(ConvertixError::arg_count("parse_quantity", 1, 0));
        }

        let text = match text_arg(args, 0, "parse_quantity", "text") {
            Ok(s) => s,
            Err(e) => return Value::Error(e),
        };

        match parse_quantity_string(text) {
            Ok((value, unit)) => {
                let mut obj = HashMap::new();
                obj.insert("value".to_string(), Value::Number(value));
                obj.insert("unit".to_string(), Value::from(unit.symbol));
                obj.insert("category".to_string(), Value::from(unit.category.name()));
                Value::Object(obj)
            }
            Err(e) => Value::Error(e.into()),
        }
    }
}
