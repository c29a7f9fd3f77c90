//! Line-oriented output of messages and statistics

use std::io::Write;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::layout::MessageLayout;
use crate::error::Result;
use crate::formatter::{self, Value};

/// How received or sent messages are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogMsgs {
    /// Print nothing
    #[default]
    None,

    /// Only the message body
    Body,

    /// Every known field, Python-literal syntax
    Dict,

    /// Fields comparable across clients, Python-literal syntax
    Interop,

    /// Fields comparable across clients, JSON syntax
    Json,
}

/// Writes one formatted line per call
pub struct MessagePrinter<W: Write> {
    out: W,
    log_msgs: LogMsgs,
    hash_content: bool,
}

impl<W: Write> MessagePrinter<W> {
    /// Create a new printer
    ///
    /// # Arguments
    /// * `out` - Destination, usually stdout
    /// * `log_msgs` - Message layout
    /// * `hash_content` - Replace message content with its SHA-1 digest
    pub fn new(out: W, log_msgs: LogMsgs, hash_content: bool) -> Self {
        Self {
            out,
            log_msgs,
            hash_content,
        }
    }

    /// Print one message in the configured layout
    pub fn print_message<R: MessageLayout>(&mut self, record: &R) -> Result<()> {
        if self.log_msgs == LogMsgs::None {
            debug!("Message printing disabled");
            return Ok(());
        }

        let content = record.content();
        let content: Value = if self.hash_content {
            formatter::hash(Some(&content))?.into()
        } else {
            content
        };

        let fields = record.fields(self.log_msgs, content);
        let line = if self.log_msgs == LogMsgs::Json {
            formatter::format_as_json(&Value::Map(fields))?
        } else {
            formatter::format_as_python_literal(&Value::Map(fields))?
        };
        writeln!(self.out, "{line}")?;
        Ok(())
    }

    /// Print a `STATS {...}` line
    pub fn print_statistics(&mut self, stats: &IndexMap<String, Value>) -> Result<()> {
        let line = formatter::format_as_python_literal(&Value::Map(stats.clone()))?;
        writeln!(self.out, "STATS {line}")?;
        Ok(())
    }

    /// Print connection counters as `opened failed total`
    pub fn print_connector_statistics(&mut self, opened: u64, failed: u64, total: u64) -> Result<()> {
        writeln!(self.out, "{opened} {failed} {total}")?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
