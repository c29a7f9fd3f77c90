//! Client option model
//!
//! This module provides:
//! - The static registry of recognized options ([`REGISTRY`])
//! - [`ClientOption`], a resolved value plus its "explicitly supplied" flag
//! - [`OptionSet`], every registered option in registration order
//!
//! An [`OptionSet`] is filled once while the command line is parsed and is
//! only read afterwards.

mod registry;

pub use registry::{
    HEARTBEAT, KEY_ALIAS, LOG_BYTES, OptionKind, OptionSpec, PASSWORD, RECONNECT, REGISTRY, USERNAME,
    connection_options, find,
};

use tracing::trace;

use crate::error::{OptionError, Result};

/// One option with its resolved value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOption {
    spec: &'static OptionSpec,
    value: String,
    supplied: bool,
}

impl ClientOption {
    fn new(spec: &'static OptionSpec) -> Self {
        Self {
            spec,
            value: spec.default.to_string(),
            supplied: false,
        }
    }

    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    pub fn spec(&self) -> &'static OptionSpec {
        self.spec
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn default_value(&self) -> &'static str {
        self.spec.default
    }

    /// Whether the user set this option explicitly
    pub fn is_supplied(&self) -> bool {
        self.supplied
    }

    /// Interpret the value as a boolean
    ///
    /// Only a case-insensitive `true` is true; anything else is false.
    pub fn as_bool(&self) -> bool {
        self.value.eq_ignore_ascii_case("true")
    }

    /// Interpret the value as a number of seconds
    pub fn as_seconds(&self) -> Result<f64> {
        self.value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|secs| secs.is_finite())
            .ok_or_else(|| {
                OptionError::InvalidValue {
                    name: self.name().to_string(),
                    value: self.value.clone(),
                }
                .into()
            })
    }
}

/// All registered options, in registration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSet {
    registry: &'static [OptionSpec],
    options: Vec<ClientOption>,
}

impl OptionSet {
    /// Create a set holding every registered option at its default
    pub fn new() -> Self {
        Self::with_registry(REGISTRY)
    }

    /// Create a set from a custom registry
    pub fn with_registry(registry: &'static [OptionSpec]) -> Self {
        Self {
            registry,
            options: registry.iter().map(ClientOption::new).collect(),
        }
    }

    pub fn registry(&self) -> &'static [OptionSpec] {
        self.registry
    }

    /// Record an explicitly supplied value
    ///
    /// # Arguments
    /// * `name` - Registered option name
    /// * `value` - Value given by the user
    ///
    /// # Returns
    /// * `Result<()>` - Error if the option is not registered
    pub fn supply(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let option = self
            .options
            .iter_mut()
            .find(|o| o.name() == name)
            .ok_or_else(|| OptionError::Unknown(name.to_string()))?;

        option.value = value.into();
        option.supplied = true;
        trace!(option = name, value = %option.value, "Option supplied");
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&ClientOption> {
        self.options.iter().find(|o| o.name() == name)
    }

    /// Resolved value of an option (the default when not supplied)
    pub fn value(&self, name: &str) -> Option<&str> {
        self.get(name).map(ClientOption::value)
    }

    pub fn is_supplied(&self, name: &str) -> bool {
        self.get(name).is_some_and(ClientOption::is_supplied)
    }

    /// Boolean value of an option; unknown options are false
    pub fn flag(&self, name: &str) -> bool {
        self.get(name).is_some_and(ClientOption::as_bool)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClientOption> {
        self.options.iter()
    }

    /// Explicitly supplied options, in registration order
    pub fn supplied(&self) -> impl Iterator<Item = &ClientOption> {
        self.options.iter().filter(|o| o.supplied)
    }
}

impl Default for OptionSet {
    fn default() -> Self {
        Self::new()
    }
}
