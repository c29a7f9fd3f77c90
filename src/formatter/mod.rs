//! Value formatting for message output
//!
//! This module renders canonical message values as text:
//! - Python-literal output (`{'key': 'value', 'n': 1}`)
//! - Compact JSON output
//! - SHA-1 content hashes used to redact payloads while keeping them comparable
//!
//! # Design
//!
//! Rendering strategies share the [`ValueConverter`] trait; [`Formatter`]
//! selects one according to the configured [`OutputMode`]. Nothing here keeps
//! state between calls.

mod converter;
mod helpers;
mod json;
mod python;
mod value;

pub use converter::{ValueConverter, ValueStringConverter};
pub use helpers::{format_single_precision, quote_escape};
pub use json::JsonConverter;
pub use python::PythonLiteralConverter;
pub use value::Value;

use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};

use crate::error::Result;

/// Text output mode
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Python-literal syntax
    #[default]
    Python,

    /// Compact single-line JSON
    Json,
}

/// Main formatter for message values
#[derive(Debug, Clone, Copy, Default)]
pub struct Formatter {
    mode: OutputMode,
    python: PythonLiteralConverter,
    json: JsonConverter,
}

impl Formatter {
    /// Create a new formatter
    ///
    /// # Arguments
    /// * `mode` - Output mode
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            python: PythonLiteralConverter::new(),
            json: JsonConverter::new(),
        }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Format a value in the configured mode
    ///
    /// # Arguments
    /// * `value` - Value to render
    ///
    /// # Returns
    /// * `Result<String>` - Rendered text, without trailing newline
    pub fn format(&self, value: &Value) -> Result<String> {
        match self.mode {
            OutputMode::Python => self.python.convert(value),
            OutputMode::Json => self.json.convert(value),
        }
    }
}

/// Render a value as a Python literal
pub fn format_as_python_literal(value: &Value) -> Result<String> {
    PythonLiteralConverter::new().convert(value)
}

/// Render a value as compact JSON
pub fn format_as_json(value: &Value) -> Result<String> {
    JsonConverter::new().convert(value)
}

/// SHA-1 digest of a value's Python-literal rendering
///
/// # Arguments
/// * `value` - Value to hash; `None` and [`Value::Null`] count as absent
///
/// # Returns
/// * `Result<Option<String>>` - 40 lowercase hex characters, or `None` when
///   there was nothing to hash
pub fn hash(value: Option<&Value>) -> Result<Option<String>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(v) => {
            let text = format_as_python_literal(v)?;
            Ok(Some(hex::encode(Sha1::digest(text.as_bytes()))))
        }
    }
}
