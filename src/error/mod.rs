//! Error handling for formatting and option translation.
//!
//! This module provides:
//! - A crate-wide error type wrapping per-area error kinds
//! - A `Result` alias used by every fallible operation
//! - Exit-code classification for the binary
//!
//! # Example
//!
//! ```rust
//! use mqcli::error::{MqcliError, OptionError, Result};
//!
//! fn lookup(name: &str) -> Result<()> {
//!     Err(OptionError::Unknown(name.to_string()).into())
//! }
//!
//! let err = lookup("conn-bogus").unwrap_err();
//! assert_eq!(err.exit_code(), 2);
//! ```

pub mod kinds;

// Re-export commonly used types
pub use kinds::{ConfigError, FormatError, MqcliError, OptionError, Result, TranslateError};
