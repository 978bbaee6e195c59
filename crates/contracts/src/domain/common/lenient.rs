//! Forgiving serde adapters for spreadsheet-backed payloads.
//!
//! Cells come back from the sheet as whatever type the sheet inferred: a
//! quantity typed as `12` arrives as a JSON number, an empty cell as `null` or
//! `""`. Records keep every field as text, so these adapters coerce scalars
//! into strings instead of rejecting the whole row.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Any JSON scalar as text; `null`, arrays and objects become `""`.
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_text(&value))
}

/// Backend row number. Numeric strings are accepted, anything else maps to 0.
pub fn row_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let id = match &value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Value::String(s) => s.trim().parse::<i64>().unwrap_or(0),
        _ => 0,
    };
    Ok(id)
}

/// Permission flag. Sheets often hold `TRUE`, `yes` or `1` instead of booleans.
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_flag(&value))
}

pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

pub fn value_to_flag(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(s) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "true" | "yes" | "y" | "1"
        ),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "row_id")]
        id: i64,
        #[serde(default, deserialize_with = "string")]
        text: String,
        #[serde(default, deserialize_with = "flag")]
        allowed: bool,
    }

    fn probe(json: &str) -> Probe {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_scalars_become_text() {
        assert_eq!(probe(r#"{"text": 12}"#).text, "12");
        assert_eq!(probe(r#"{"text": true}"#).text, "true");
        assert_eq!(probe(r#"{"text": null}"#).text, "");
        assert_eq!(probe(r#"{"text": [1, 2]}"#).text, "");
        assert_eq!(probe(r#"{}"#).text, "");
    }

    #[test]
    fn test_row_id_accepts_numeric_strings() {
        assert_eq!(probe(r#"{"id": 42}"#).id, 42);
        assert_eq!(probe(r#"{"id": " 17 "}"#).id, 17);
        assert_eq!(probe(r#"{"id": 9.0}"#).id, 9);
        assert_eq!(probe(r#"{"id": "row"}"#).id, 0);
        assert_eq!(probe(r#"{}"#).id, 0);
    }

    #[test]
    fn test_flags_accept_sheet_spellings() {
        assert!(probe(r#"{"allowed": true}"#).allowed);
        assert!(probe(r#"{"allowed": "TRUE"}"#).allowed);
        assert!(probe(r#"{"allowed": "Yes"}"#).allowed);
        assert!(probe(r#"{"allowed": 1}"#).allowed);
        assert!(!probe(r#"{"allowed": "false"}"#).allowed);
        assert!(!probe(r#"{"allowed": 0}"#).allowed);
        assert!(!probe(r#"{}"#).allowed);
    }
}
