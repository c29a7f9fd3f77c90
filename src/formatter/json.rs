//! JSON rendering
//!
//! [`Value`] implements `Serialize`, so any serde backend can encode it; the
//! [`JsonConverter`] strategy uses compact single-line `serde_json` output.
//! Deserialization goes through `serde_json::Value`, so JSON input maps onto
//! values the same way [`Value::from`] does.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use super::converter::ValueConverter;
use super::value::Value;
use crate::error::{FormatError, Result};

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_none(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Integer(n) => serializer.serialize_i64(*n),
            Value::Float(f) if f.is_finite() => serializer.serialize_f64(*f),
            Value::Float(_) => serializer.serialize_none(),
            Value::Char(c) => serializer.serialize_char(*c),
            Value::String(s) => serializer.serialize_str(s),
            // Byte arrays travel as base64 text
            Value::Bytes(bytes) => serializer.serialize_str(&STANDARD.encode(bytes)),
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Map(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map {
                    out.serialize_entry(k, v)?;
                }
                out.end()
            }
            Value::Unsupported { repr, .. } => serializer.serialize_str(repr),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

/// Compact JSON converter
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonConverter;

impl JsonConverter {
    /// Create a new JSON converter
    pub fn new() -> Self {
        Self
    }
}

impl ValueConverter for JsonConverter {
    type Output = Result<String>;

    fn convert(&self, value: &Value) -> Result<String> {
        serde_json::to_string(value).map_err(|e| FormatError::Json(e.to_string()).into())
    }
}
