//! Python-literal rendering
//!
//! Produces text that a Python interpreter would read back as the same
//! object: `None`, `True`/`False`, single-quoted strings, `[...]` lists and
//! `{'key': value}` dicts.

use indexmap::IndexMap;
use tracing::warn;

use super::converter::{ValueConverter, ValueStringConverter};
use super::helpers::{format_single_precision, single_quoted};
use super::value::Value;
use crate::error::{FormatError, Result};

/// Python-literal converter
///
/// Floats are narrowed to single precision before printing. Byte payloads
/// are decoded as UTF-8 and printed as strings; undecodable bytes are an
/// error since no faithful text exists for them.
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonLiteralConverter;

impl PythonLiteralConverter {
    /// Create a new Python-literal converter
    pub fn new() -> Self {
        Self
    }
}

fn join(items: impl Iterator<Item = Result<String>>) -> Result<String> {
    Ok(items.collect::<Result<Vec<_>>>()?.join(", "))
}

impl ValueConverter for PythonLiteralConverter {
    type Output = Result<String>;

    fn convert(&self, value: &Value) -> Result<String> {
        self.convert_to_string(value)
    }
}

impl ValueStringConverter for PythonLiteralConverter {
    fn format_null(&self) -> String {
        "None".to_string()
    }

    fn format_bool(&self, b: bool) -> String {
        if b { "True" } else { "False" }.to_string()
    }

    fn format_integer(&self, n: i64) -> String {
        n.to_string()
    }

    fn format_float(&self, f: f64) -> String {
        format_single_precision(f)
    }

    fn format_char(&self, c: char) -> String {
        let mut buf = [0u8; 4];
        single_quoted(c.encode_utf8(&mut buf))
    }

    fn format_string(&self, s: &str) -> String {
        single_quoted(s)
    }

    fn format_bytes(&self, bytes: &[u8]) -> Result<String> {
        let text = std::str::from_utf8(bytes).map_err(|e| FormatError::InvalidUtf8 {
            valid_up_to: e.valid_up_to(),
        })?;
        Ok(self.format_string(text))
    }

    fn format_list(&self, items: &[Value]) -> Result<String> {
        let body = join(items.iter().map(|v| self.convert_to_string(v)))?;
        Ok(format!("[{body}]"))
    }

    fn format_map(&self, map: &IndexMap<String, Value>) -> Result<String> {
        let body = join(map.iter().map(|(k, v)| -> Result<String> {
            Ok(format!("{}: {}", single_quoted(k), self.convert_to_string(v)?))
        }))?;
        Ok(format!("{{{body}}}"))
    }

    fn format_unsupported(&self, type_name: &str, repr: &str) -> String {
        warn!("Unsupported object type {type_name} {repr}");
        repr.to_string()
    }
}
