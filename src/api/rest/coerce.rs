//! Lenient readers for request fields. Mistyped values are coerced or turned
//! into a failed lookup instead of rejecting the whole body.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::AppError;

/// `deserialize_with` target for free-text fields: null becomes `""`, other
/// scalars their display form, arrays and objects their JSON text.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(text) => text,
        other => other.to_string(),
    })
}

/// Accepts a JSON number or a numeric string. Absent or null means 0.
pub fn coerce_price(raw: Option<&Value>) -> Result<f64, AppError> {
    match raw {
        None | Some(Value::Null) => Ok(0.0),
        Some(Value::Number(number)) => number
            .as_f64()
            .ok_or_else(|| AppError::BadRequest("total_price is out of range".to_string())),
        Some(Value::String(text)) => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|price| price.is_finite())
            .ok_or_else(|| AppError::BadRequest(format!("total_price {text:?} is not a number"))),
        Some(other) => Err(AppError::BadRequest(format!(
            "total_price must be a number, got {other}"
        ))),
    }
}

/// Driver ids are non-negative integers; `2.0` counts as `2`. Anything else
/// can never match a driver and yields `None`.
pub fn driver_id(raw: Option<&Value>) -> Option<u64> {
    let number = match raw? {
        Value::Number(number) => number,
        _ => return None,
    };

    if let Some(id) = number.as_u64() {
        return Some(id);
    }

    number
        .as_f64()
        .filter(|id| id.fract() == 0.0 && *id >= 0.0 && *id <= u64::MAX as f64)
        .map(|id| id as u64)
}
