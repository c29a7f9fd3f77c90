//! Core converter traits for value rendering
//!
//! This module defines the traits that all value converters implement.

use super::value::Value;
use crate::error::Result;

/// Core trait for value conversion
///
/// This trait allows different rendering strategies to be implemented
/// for the supported output modes (Python literal, JSON).
pub trait ValueConverter {
    /// Output type of the conversion
    type Output;

    /// Convert a value to the output type
    ///
    /// # Arguments
    /// * `value` - Value to convert
    ///
    /// # Returns
    /// Converted value in the target format
    fn convert(&self, value: &Value) -> Self::Output;

    /// Convert an optional value, treating absence as [`Value::Null`]
    fn convert_optional(&self, value: Option<&Value>) -> Self::Output {
        self.convert(value.unwrap_or(&Value::Null))
    }
}

/// Extended trait for string-based converters
///
/// Provides a default implementation using pattern matching and delegates
/// to specialized methods for each variant. Only the methods that can
/// recurse or decode bytes are fallible.
pub trait ValueStringConverter {
    fn format_null(&self) -> String;
    fn format_bool(&self, b: bool) -> String;
    fn format_integer(&self, n: i64) -> String;
    fn format_float(&self, f: f64) -> String;
    fn format_char(&self, c: char) -> String;
    fn format_string(&self, s: &str) -> String;
    fn format_bytes(&self, bytes: &[u8]) -> Result<String>;
    fn format_list(&self, items: &[Value]) -> Result<String>;
    fn format_map(&self, map: &indexmap::IndexMap<String, Value>) -> Result<String>;
    fn format_unsupported(&self, type_name: &str, repr: &str) -> String;

    /// Convert a value to string (provided implementation)
    fn convert_to_string(&self, value: &Value) -> Result<String> {
        Ok(match value {
            Value::Null => self.format_null(),
            Value::Bool(b) => self.format_bool(*b),
            Value::Integer(n) => self.format_integer(*n),
            Value::Float(f) => self.format_float(*f),
            Value::Char(c) => self.format_char(*c),
            Value::String(s) => self.format_string(s),
            Value::Bytes(bytes) => self.format_bytes(bytes)?,
            Value::List(items) => self.format_list(items)?,
            Value::Map(map) => self.format_map(map)?,
            Value::Unsupported { type_name, repr } => self.format_unsupported(type_name, repr),
        })
    }
}
