//! Unit string parsing - "km", "km->mi", "5 km"

use convertix_core::parse_number;
use crate::{Unit, Category};
use crate::unit::ConversionError;
use crate::units::UNITS;

/// Parse a unit symbol or alias into a catalog unit
pub fn parse_unit(s: &str) -> Result<&'static Unit, ConversionError> {
    let s = s.trim();
    UNITS.get(s).ok_or_else(|| ConversionError::UnknownUnit(s.to_string()))
}

/// Parse a category name
pub fn parse_category(s: &str) -> Result<Category, ConversionError> {
    Category::from_name(s).ok_or_else(|| ConversionError::UnknownCategory(s.trim().to_string()))
}

/// Parse a conversion specification like "kg->lb" or "C→F"
pub fn parse_conversion(s: &str) -> Result<(&'static Unit, &'static Unit), ConversionError> {
    let separators = ["->", "→", " to ", " in "];

    let (from, to) = separators.iter()
        .find_map(|sep| s.split_once(sep))
        .ok_or_else(|| ConversionError::InvalidFormat(
            format!("{}, expected 'unit1->unit2'", s)
        ))?;

    let from_unit = parse_unit(from)?;
    let to_unit = parse_unit(to)?;

    Ok((from_unit, to_unit))
}

/// Parse a quantity string like "5 m", "100kg" or "-1.5e3 J"
pub fn parse_quantity_string(s: &str) -> Result<(f64, &'static Unit), ConversionError> {
    let s = s.trim();
    let split_pos = number_prefix_len(s);

    if split_pos == 0 {
        return Err(ConversionError::InvalidFormat(format!("no number found in: {}", s)));
    }

    let num_str = &s[..split_pos];
    let unit_str = s[split_pos..].trim();

    let value = parse_number(num_str)?;

    if unit_str.is_empty() {
        return Err(ConversionError::InvalidFormat(format!("no unit found in: {}", s)));
    }

    let unit = parse_unit(unit_str)?;
    Ok((value, unit))
}

/// Length in bytes of the leading decimal literal.
///
/// An exponent is only taken when digits follow it, so "5erg" splits as
/// "5" + "erg" rather than "5e" + "rg".
fn number_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;

    if i < bytes.len() && (bytes[i] == b'-' || bytes[i] == b'+') {
        i += 1;
    }

    let digits_start = i;
    while i < bytes.len() && (bytes[i].is_ascii_digit() || bytes[i] == b'.') {
        i += 1;
    }
    if !bytes[digits_start..i].iter().any(u8::is_ascii_digit) {
        return 0;
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'-' || bytes[j] == b'+') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    i
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_unit() {
        let unit = parse_unit("m").unwrap();
        assert_eq!(unit.symbol, "m");
        assert_eq!(unit.category, Category::Length);
    }

    #[test]
    fn test_parse_unit_trims() {
        assert_eq!(parse_unit("  kg ").unwrap().symbol, "kg");
    }

    #[test]
    fn test_parse_conversion() {
        let (from, to) = parse_conversion("km->mi").unwrap();
        assert_eq!(from.symbol, "km");
        assert_eq!(to.symbol, "mi");
    }

    #[test]
    fn test_parse_conversion_arrow() {
        let (from, to) = parse_conversion("C→F").unwrap();
        assert_eq!(from.symbol, "°C");
        assert_eq!(to.symbol, "°F");
    }

    #[test]
    fn test_parse_conversion_words() {
        let (from, to) = parse_conversion("US gal to L").unwrap();
        assert_eq!(from.symbol, "US gal");
        assert_eq!(to.symbol, "L");

        let (from, to) = parse_conversion("psi in bar").unwrap();
        assert_eq!(from.symbol, "psi");
        assert_eq!(to.symbol, "bar");
    }

    #[test]
    fn test_parse_conversion_invalid() {
        let result = parse_conversion("km mi");
        assert!(matches!(result, Err(ConversionError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_quantity_string() {
        let (value, unit) = parse_quantity_string("5 m").unwrap();
        assert_eq!(value, 5.0);
        assert_eq!(unit.symbol, "m");

        let (value, unit) = parse_quantity_string("100kg").unwrap();
        assert_eq!(value, 100.0);
        assert_eq!(unit.symbol, "kg");

        let (value, unit) = parse_quantity_string("-3.14 rad").unwrap();
        assert_eq!(value, -3.14);
        assert_eq!(unit.symbol, "rad");
    }

    #[test]
    fn test_parse_quantity_exponent() {
        let (value, unit) = parse_quantity_string("1.5e3 J").unwrap();
        assert_eq!(value, 1500.0);
        assert_eq!(unit.symbol, "J");

        // "e" starting a unit is not an exponent
        let (value, unit) = parse_quantity_string("5erg").unwrap();
        assert_eq!(value, 5.0);
        assert_eq!(unit.symbol, "erg");

        let (value, unit) = parse_quantity_string("2eV").unwrap();
        assert_eq!(value, 2.0);
        assert_eq!(unit.symbol, "eV");
    }

    #[test]
    fn test_parse_quantity_multiword_unit() {
        let (value, unit) = parse_quantity_string("2 US gal").unwrap();
        assert_eq!(value, 2.0);
        assert_eq!(unit.symbol, "US gal");
    }

    #[test]
    fn test_parse_quantity_errors() {
        assert!(matches!(parse_quantity_string("km"), Err(ConversionError::InvalidFormat(_))));
        assert!(matches!(parse_quantity_string("5"), Err(ConversionError::InvalidFormat(_))));
        assert!(matches!(parse_quantity_string("5 furlongs"), Err(ConversionError::UnknownUnit(_))));
    }

    #[test]
    fn test_alias_lookup() {
        assert_eq!(parse_unit("meter").unwrap().symbol, "m");
        assert_eq!(parse_unit("kilogram").unwrap().symbol, "kg");
    }

    #[test]
    fn test_unknown_unit() {
        assert!(parse_unit("unknown_xyz").is_err());
    }

    #[test]
    fn test_parse_category() {
        assert_eq!(parse_category("Pressure").unwrap(), Category::Pressure);
        assert!(matches!(parse_category("colour"), Err(ConversionError::UnknownCategory(_))));
    }
}
