//! mqcli library
//!
//! Core pieces shared by messaging test clients: value formatting in
//! Python-literal and JSON syntax, message printing, and translation of
//! protocol-agnostic `conn-*` options into client-specific connection URIs.
//!
//! # Modules
//!
//! - `cli`: Command-line interface and argument parsing
//! - `config`: Configuration management
//! - `error`: Error types and handling
//! - `formatter`: Python-literal and JSON value formatting, content hashing
//! - `message`: Message records and their printed layouts
//! - `options`: Option registry and resolved option sets
//! - `translator`: Per-client translation tables and URI building
//!
//! # Example
//!
//! ```
//! use mqcli::options::OptionSet;
//! use mqcli::translator::{ClientKind, connection_uri};
//!
//! let mut options = OptionSet::new();
//! options.supply("conn-heartbeat", "30").unwrap();
//!
//! let (uri, _) = connection_uri("broker:5672", ClientKind::QpidJms, &options).unwrap();
//! assert_eq!(uri, "amqp://broker:5672?amqp.idleTimeout=30000");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod formatter;
pub mod message;
pub mod options;
pub mod translator;

// Re-export commonly used types
pub use config::Config;
pub use error::{MqcliError, Result};
pub use formatter::{Formatter, OutputMode, Value};
pub use message::{LogMsgs, MessageLayout, MessagePrinter, MessageRecord, MqttRecord};
pub use options::OptionSet;
pub use translator::{ClientKind, connection_uri, translate};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library version string
///
/// # Returns
/// * `&str` - Version string
pub fn version() -> &'static str {
    VERSION
}
