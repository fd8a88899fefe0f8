//! Argument helpers for the electrical functions

use convertix_core::{ConvertixError, Value};

/// Extract a number from a Value. Numeric text is accepted.
pub fn extract_number(value: &Value, func: &str, arg: &str) -> Result<f64, ConvertixError> {
    match value {
        Value::Number(n) => Ok(*n),
        Value::Text(_) => value.to_number(),
        Value::Null => Err(ConvertixError::arg_type(func, arg, "Number", "Null")),
        Value::Error(e) => Err(e.clone()),
        other => Err(ConvertixError::arg_type(func, arg, "Number", other.type_name())),
    }
}

/// Extract an optional number. Missing, null and empty text count as absent.
pub fn extract_optional_number(
    args: &[Value],
    index: usize,
    func: &str,
    arg: &str,
) -> Result<Option<f64>, ConvertixError> {
    match args.get(index) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(v) => extract_number(v, func, arg).map(Some),
    }
}

/// Reject a zero divisor
pub fn validate_nonzero(value: f64, func: &str, arg: &str) -> Result<(), ConvertixError> {
    if value == 0.0 {
        return Err(ConvertixError::domain_error(format!(
            "{}(): {} must be non-zero",
            func, arg
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use convertix_core::codes;

    #[test]
    fn test_extract_number() {
        let val = Value::Number(42.0);
        assert_eq!(extract_number(&val, "test", "arg"), Ok(42.0));
    }

    #[test]
    fn test_extract_number_from_text() {
        let val = Value::Text("2.5".to_string());
        assert_eq!(extract_number(&val, "test", "arg"), Ok(2.5));
    }

    #[test]
    fn test_extract_number_wrong_type() {
        let err = extract_number(&Value::Bool(true), "test", "arg").unwrap_err();
        assert_eq!(err.code, codes::ARG_TYPE);
    }

    #[test]
    fn test_extract_optional_number() {
        let args = [Value::Number(1.0), Value::Null, Value::Text("".to_string())];
        assert_eq!(extract_optional_number(&args, 0, "t", "a"), Ok(Some(1.0)));
        assert_eq!(extract_optional_number(&args, 1, "t", "a"), Ok(None));
        assert_eq!(extract_optional_number(&args, 2, "t", "a"), Ok(None));
        assert_eq!(extract_optional_number(&args, 3, "t", "a"), Ok(None));
    }

    #[test]
    fn test_validate_nonzero() {
        assert!(validate_nonzero(1.0, "current", "resistance").is_ok());
        let err = validate_nonzero(0.0, "current", "resistance").unwrap_err();
        assert_eq!(err.code, codes::DOMAIN_ERROR);
    }
}
