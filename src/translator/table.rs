//! Translation table types
//!
//! A [`TranslationTable`] is a compile-time constant: one
//! [`TranslationEntry`] per connection option plus an ordered list of
//! [`DerivationRule`]s evaluated after the direct mapping.

use crate::error::{Result, TranslateError};
use crate::options::{ClientOption, OptionSet, OptionSpec};

/// Where a connection option ends up for one client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Written to every listed URI parameter
    Params(&'static [&'static str]),

    /// Not applicable for this client; skipped silently
    NoOp,

    /// The client cannot honour this option; the user is warned
    Unsupported,
}

/// Value conversion applied before a parameter is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    Verbatim,

    /// Seconds (possibly fractional) to whole milliseconds
    SecondsToMillis,

    /// Seconds rounded to a whole number
    WholeSeconds,
}

impl Transform {
    /// Apply the conversion to an option's value
    pub fn apply(&self, option: &ClientOption) -> Result<String> {
        match self {
            Transform::Verbatim => Ok(option.value().to_string()),
            Transform::SecondsToMillis => option
                .as_seconds()
                .map(|secs| millis(secs).to_string())
                .map_err(|_| invalid(option)),
            Transform::WholeSeconds => option
                .as_seconds()
                .map(|secs| (secs.round() as i64).to_string())
                .map_err(|_| invalid(option)),
        }
    }
}

/// Round seconds to whole milliseconds
pub fn millis(secs: f64) -> i64 {
    (secs * 1000.0).round() as i64
}

pub(crate) fn invalid(option: &ClientOption) -> crate::error::MqcliError {
    TranslateError::InvalidValue {
        option: option.name().to_string(),
        value: option.value().to_string(),
    }
    .into()
}

/// Mapping of one connection option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslationEntry {
    pub option: &'static str,
    pub target: Target,
    pub transform: Transform,
}

impl TranslationEntry {
    pub const fn to(option: &'static str, params: &'static [&'static str]) -> Self {
        Self {
            option,
            target: Target::Params(params),
            transform: Transform::Verbatim,
        }
    }

    pub const fn noop(option: &'static str) -> Self {
        Self {
            option,
            target: Target::NoOp,
            transform: Transform::Verbatim,
        }
    }

    pub const fn unsupported(option: &'static str) -> Self {
        Self {
            option,
            target: Target::Unsupported,
            transform: Transform::Verbatim,
        }
    }

    /// Same entry, converting seconds to milliseconds
    pub const fn millis(self) -> Self {
        Self {
            transform: Transform::SecondsToMillis,
            ..self
        }
    }

    /// Same entry, rounding seconds to a whole number
    pub const fn whole_seconds(self) -> Self {
        Self {
            transform: Transform::WholeSeconds,
            ..self
        }
    }
}

/// Parameters computed from a combination of options
#[derive(Debug, Clone, Copy)]
pub struct DerivationRule {
    pub name: &'static str,

    /// Whether the rule fires for this option set
    pub applies: fn(&OptionSet) -> bool,

    /// Parameter writes, applied in order
    pub derive: fn(&OptionSet) -> Result<Vec<(&'static str, String)>>,
}

/// Per-client translation table
#[derive(Debug, Clone, Copy)]
pub struct TranslationTable {
    pub client: &'static str,
    pub entries: &'static [TranslationEntry],
    pub rules: &'static [DerivationRule],
}

impl TranslationTable {
    pub fn entry(&self, option: &str) -> Option<&TranslationEntry> {
        self.entries.iter().find(|e| e.option == option)
    }

    /// Check that every registered connection option has an entry
    ///
    /// # Arguments
    /// * `registry` - Option registry to check against
    ///
    /// # Returns
    /// * `Result<()>` - The first option without an entry, as an error
    pub fn validate(&self, registry: &[OptionSpec]) -> Result<()> {
        match registry
            .iter()
            .filter(|spec| spec.is_connection())
            .find(|spec| self.entry(spec.name).is_none())
        {
            Some(spec) => Err(TranslateError::MissingEntry {
                client: self.client,
                option: spec.name.to_string(),
            }
            .into()),
            None => Ok(()),
        }
    }
}
