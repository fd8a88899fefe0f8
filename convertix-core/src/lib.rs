//! Convertix Core - Fundamental types
//!
//! This crate provides the core types used throughout Convertix:
//! - `parse_input` / `format_result`: the text edges of a conversion
//! - `Value`: Runtime values passed to and from plugin functions
//! - `ConvertixError`: Structured errors carried inside values

mod number;
mod value;
mod error;

pub use number::{NumberError, parse_input, parse_number, format_result, DEFAULT_DECIMALS, MAX_DECIMALS};
pub use value::Value;
pub use error::{ConvertixError, codes};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Value, ConvertixError, NumberError};
    pub use crate::{parse_input, format_result};
    pub use crate::error::codes;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    mod value_tests {
        use super::*;

        #[test]
        fn test_number_value() {
            let v = Value::Number(42.0);
            assert_eq!(v.as_number(), Some(42.0));
            assert_eq!(v.type_name(), "Number");
        }

        #[test]
        fn test_text_to_number_is_lenient() {
            assert_eq!(Value::Text("12.5".to_string()).to_number(), Ok(12.5));
            assert_eq!(Value::Text("".to_string()).to_number(), Ok(0.0));
            assert_eq!(Value::Text("-".to_string()).to_number(), Ok(0.0));
        }

        #[test]
        fn test_text_to_number_rejects_garbage() {
            let err = Value::Text("twelve".to_string()).to_number().unwrap_err();
            assert_eq!(err.code, codes::PARSE_ERROR);
        }

        #[test]
        fn test_bool_to_number_is_type_error() {
            let err = Value::Bool(true).to_number().unwrap_err();
            assert_eq!(err.code, codes::TYPE_ERROR);
        }

        #[test]
        fn test_error_propagates_through_get() {
            let err = Value::Error(ConvertixError::unknown_unit("furlong"));
            let result = err.get("anything");
            assert!(result.is_error());
        }

        #[test]
        fn test_object_get() {
            let mut map = HashMap::new();
            map.insert("voltage".to_string(), Value::Number(10.0));
            let obj = Value::Object(map);

            assert_eq!(obj.get("voltage").as_number(), Some(10.0));
            assert!(obj.get("missing").is_error());
        }

        #[test]
        fn test_display_number_uses_trimmed_format() {
            assert_eq!(Value::Number(5280.0).to_string(), "5280");
            assert_eq!(Value::Number(273.15).to_string(), "273.15");
        }

        #[test]
        fn test_display_object_sorted() {
            let mut map = HashMap::new();
            map.insert("b".to_string(), Value::Number(2.0));
            map.insert("a".to_string(), Value::Number(1.0));
            assert_eq!(Value::Object(map).to_string(), "{a: 1, b: 2}");
        }
    }

    mod json_tests {
        use super::*;
        use serde_json::json;

        #[test]
        fn test_to_json_number() {
            assert_eq!(Value::Number(1.5).to_json(), json!(1.5));
        }

        #[test]
        fn test_to_json_non_finite_becomes_text() {
            assert_eq!(Value::Number(f64::INFINITY).to_json(), json!("inf"));
        }

        #[test]
        fn test_to_json_error() {
            let v = Value::Error(ConvertixError::unknown_unit("furlong"));
            let j = v.to_json();
            assert_eq!(j["_error"]["code"], json!("UNKNOWN_UNIT"));
        }

        #[test]
        fn test_from_json() {
            let v = Value::from_json(&json!({"value": 3, "unit": "km", "tags": [true, null]}));
            assert_eq!(v.get("value").as_number(), Some(3.0));
            assert_eq!(v.get("unit").as_text(), Some("km"));
            assert_eq!(v.get("tags").as_list().map(|l| l.len()), Some(2));
        }

        #[test]
        fn test_serde_tagged() {
            let s = serde_json::to_string(&Value::Number(2.0)).unwrap();
            assert_eq!(s, r#"{"type":"Number","value":2.0}"#);
        }
    }

    mod error_tests {
        use super::*;

        #[test]
        fn test_display_includes_suggestion() {
            let e = ConvertixError::unknown_category("colour");
            assert_eq!(
                e.to_string(),
                "[UNKNOWN_CATEGORY] Unknown category: colour (suggestion: Use list_categories() to see valid categories)"
            );
        }

        #[test]
        fn test_from_number_error() {
            let e: ConvertixError = NumberError::ParseError("x".to_string()).into();
            assert_eq!(e.code, codes::PARSE_ERROR);

            let e: ConvertixError = NumberError::NotFinite("1e400".to_string()).into();
            assert_eq!(e.code, codes::DOMAIN_ERROR);
        }

        #[test]
        fn test_serialized_shape() {
            let j = serde_json::to_value(ConvertixError::not_found("nothing here")).unwrap();
            assert_eq!(j, serde_json::json!({"code": "NOT_FOUND", "message": "nothing here"}));
        }
    }
}
