use std::{fmt, io};

/// Crate-wide `Result` type using [`MqcliError`] as the error.
///
/// This alias is re-exported by the parent `error` module and is intended
/// to be used throughout the crate for fallible operations.
pub type Result<T> = std::result::Result<T, MqcliError>;

/// Exit code for runtime failures (undecodable payloads, I/O).
pub const EXIT_FAILURE: i32 = 1;

/// Exit code for usage and configuration defects.
pub const EXIT_USAGE: i32 = 2;

/// Top-level error type for mqcli operations.
///
/// This type wraps more specific error kinds and provides a single
/// error type that can be used throughout the crate.
#[derive(Debug)]
pub enum MqcliError {
    /// Value formatting errors.
    Format(FormatError),

    /// Connection-option translation errors.
    Translate(TranslateError),

    /// Option registry errors.
    Option(OptionError),

    /// Configuration errors.
    Config(ConfigError),

    /// I/O errors.
    Io(io::Error),

    /// JSON input errors.
    Json(serde_json::Error),
}

/// Formatter-specific errors.
#[derive(Debug)]
pub enum FormatError {
    /// Byte payload is not valid UTF-8 and has no textual fallback.
    InvalidUtf8 { valid_up_to: usize },

    /// JSON encoding failed.
    Json(String),
}

/// Translation-specific errors.
#[derive(Debug)]
pub enum TranslateError {
    /// A registered option has no entry in a client's translation table.
    MissingEntry { client: &'static str, option: String },

    /// An option value could not be transformed into its target form.
    InvalidValue { option: String, value: String },

    /// Unknown client name.
    UnknownClient(String),

    /// Broker address could not be parsed.
    InvalidBroker(String),
}

/// Option registry errors.
#[derive(Debug)]
pub enum OptionError {
    /// Option name is not in the registry.
    Unknown(String),

    /// Option value is malformed.
    InvalidValue { name: String, value: String },
}

/// Configuration-specific errors.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file not found.
    FileNotFound(String),

    /// Invalid config format.
    InvalidFormat(String),

    /// Invalid field value.
    InvalidValue { field: String, value: String },

    /// Anything else.
    Generic(String),
}

impl MqcliError {
    /// Process exit code for this error.
    ///
    /// Structural defects (unknown options, incomplete translation tables,
    /// bad configuration) map to [`EXIT_USAGE`]; everything else maps to
    /// [`EXIT_FAILURE`].
    pub fn exit_code(&self) -> i32 {
        match self {
            MqcliError::Option(_) | MqcliError::Config(_) => EXIT_USAGE,
            MqcliError::Translate(_) => EXIT_USAGE,
            _ => EXIT_FAILURE,
        }
    }
}

/* ========================= Display & Error impls ========================= */

impl fmt::Display for MqcliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MqcliError::Format(e) => write!(f, "Format error: {e}"),
            MqcliError::Translate(e) => write!(f, "Translation error: {e}"),
            MqcliError::Option(e) => write!(f, "Option error: {e}"),
            MqcliError::Config(e) => write!(f, "Configuration error: {e}"),
            MqcliError::Io(e) => write!(f, "I/O error: {e}"),
            MqcliError::Json(e) => write!(f, "Invalid JSON input: {e}"),
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::InvalidUtf8 { valid_up_to } => {
                write!(f, "Byte content is not valid UTF-8 (valid up to byte {valid_up_to})")
            }
            FormatError::Json(msg) => write!(f, "JSON encoding failed: {msg}"),
        }
    }
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslateError::MissingEntry { client, option } => {
                write!(f, "Option '{option}' has no translation entry for client '{client}'")
            }
            TranslateError::InvalidValue { option, value } => {
                write!(f, "Invalid value '{value}' for option '{option}'")
            }
            TranslateError::UnknownClient(name) => write!(f, "Unknown client: {name}"),
            TranslateError::InvalidBroker(addr) => write!(f, "Invalid broker address: {addr}"),
        }
    }
}

impl fmt::Display for OptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionError::Unknown(name) => write!(f, "Unknown option: {name}"),
            OptionError::InvalidValue { name, value } => {
                write!(f, "Invalid value '{value}' for option '{name}'")
            }
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Config file not found: {path}"),
            ConfigError::InvalidFormat(msg) => write!(f, "Invalid config format: {msg}"),
            ConfigError::InvalidValue { field, value } => {
                write!(f, "Invalid value '{value}' for field '{field}'")
            }
            ConfigError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for MqcliError {}
impl std::error::Error for FormatError {}
impl std::error::Error for TranslateError {}
impl std::error::Error for OptionError {}
impl std::error::Error for ConfigError {}

/* ========================= Conversions to MqcliError ========================= */

impl From<io::Error> for MqcliError {
    fn from(err: io::Error) -> Self {
        MqcliError::Io(err)
    }
}

impl From<serde_json::Error> for MqcliError {
    fn from(err: serde_json::Error) -> Self {
        MqcliError::Json(err)
    }
}

impl From<FormatError> for MqcliError {
    fn from(err: FormatError) -> Self {
        MqcliError::Format(err)
    }
}

impl From<TranslateError> for MqcliError {
    fn from(err: TranslateError) -> Self {
        MqcliError::Translate(err)
    }
}

impl From<OptionError> for MqcliError {
    fn from(err: OptionError) -> Self {
        MqcliError::Option(err)
    }
}

impl From<ConfigError> for MqcliError {
    fn from(err: ConfigError) -> Self {
        MqcliError::Config(err)
    }
}
