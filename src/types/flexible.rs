//! Lenient deserialisers for payment API fields
//!
//! The upstream API is not consistent about JSON types: monetary values show
//! up as numbers or numeric strings, identifiers as strings or numbers, and
//! absent values as `null`. These helpers accept all of those shapes.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialise any scalar into a string; `null` becomes an empty string
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    })
}

/// Deserialise a number or numeric string into `f64`; `null` and blanks become 0
pub fn amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(0.0),
        Value::Number(n) => Ok(n.as_f64().unwrap_or(0.0)),
        Value::String(s) => parse_amount(&s).map_err(serde::de::Error::custom),
        other => Err(serde::de::Error::custom(format!(
            "expected a number, got {}",
            other
        ))),
    }
}

/// Deserialise a non-negative count from a number or numeric string
pub fn count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = amount(deserializer)?;
    if value < 0.0 {
        return Err(serde::de::Error::custom(format!(
            "expected a non-negative count, got {}",
            value
        )));
    }
    Ok(value.round() as u64)
}

fn parse_amount(raw: &str) -> Result<f64, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    trimmed
        .parse::<f64>()
        .map_err(|e| format!("invalid numeric value '{}': {}", trimmed, e))
}
