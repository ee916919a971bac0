//! Lenient field readers for backend rows.
//!
//! Rows are exported from a loosely typed table, so counters may arrive as
//! `null`, strings, floats or negative numbers. Anything that is not a usable
//! non-negative count reads as `0`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize a count, coercing unusable values to `0`.
pub(crate) fn count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map_or(0, count_from_value))
}

/// Deserialize a boolean flag, treating `null` and non-booleans as `false`.
pub(crate) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(matches!(value, Some(Value::Bool(true))))
}

fn count_from_value(value: &Value) -> u64 {
    match value {
        Value::Number(number) => number
            .as_u64()
            .or_else(|| number.as_f64().map(truncate_float))
            .unwrap_or(0),
        Value::String(text) => count_from_str(text.trim()),
        _ => 0,
    }
}

fn count_from_str(text: &str) -> u64 {
    text.parse::<u64>()
        .ok()
        .or_else(|| text.parse::<f64>().ok().map(truncate_float))
        .unwrap_or(0)
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "fractional counts truncate toward zero and negatives are rejected first"
)]
fn truncate_float(value: f64) -> u64 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    value.trunc() as u64
}
