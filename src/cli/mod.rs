//! Command-line interface for mqcli
//!
//! This module handles:
//! - Command-line argument parsing using clap
//! - Configuration loading and command-line overrides
//! - Dispatching the subcommands (translate, format, message, options, ...)

mod completion;
mod connection_args;

pub use completion::generate_completion;
pub use connection_args::ConnectionArgs;

use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Read, Write};
use std::path::PathBuf;
use tracing::{debug, error, info};

use crate::config::{Config, LogLevel};
use crate::error::{MqcliError, Result};
use crate::formatter::{self, Formatter, OutputMode, Value};
use crate::message::{LogMsgs, MessagePrinter, MessageRecord, MqttRecord};
use crate::options::REGISTRY;
use crate::translator::{self, ClientKind, Target, TranslationEntry, Transform};

/// Messaging client option translator and message printer
#[derive(Parser, Debug)]
#[command(
    name = "mqcli",
    version,
    about = "Messaging client option translator and message printer",
    long_about = "Translates protocol-agnostic conn-* options into the connection URI of a
concrete messaging client, and prints values and messages in Python-literal or JSON form.",
    arg_required_else_help = true
)]
pub struct CliArgs {
    /// Configuration file path
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    pub config_file: Option<PathBuf>,

    /// Quiet mode (errors only)
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Verbose mode (detailed logging)
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Very verbose mode (trace logging)
    #[arg(long = "vv", global = true)]
    pub very_verbose: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands for mqcli
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate connection options into a client connection URI
    Translate {
        /// Target client (qpid-jms, artemis-core, openwire, paho-mqtt)
        #[arg(long, value_enum)]
        client: Option<ClientKind>,

        /// Comma-separated broker addresses
        #[arg(short = 'b', long, value_name = "BROKERS")]
        broker: Option<String>,

        /// Print the translated parameters instead of the URI
        #[arg(long)]
        params: bool,

        #[command(flatten)]
        connection: ConnectionArgs,
    },

    /// Format a JSON value as a Python literal or JSON, or hash it
    Format {
        /// Output mode
        #[arg(long, value_enum)]
        mode: Option<OutputMode>,

        /// Print the SHA-1 digest of the Python literal instead
        #[arg(long, conflicts_with = "mode")]
        hash: bool,

        /// JSON value; read from stdin when omitted
        #[arg(value_name = "JSON")]
        value: Option<String>,
    },

    /// Print message records given as JSON
    Message {
        /// Message layout
        #[arg(long, value_enum)]
        log_msgs: Option<LogMsgs>,

        /// Replace message content with its SHA-1 digest
        #[arg(long)]
        msg_content_hashed: bool,

        /// Records are MQTT messages (qos, payload, duplicate, retained, address)
        #[arg(long)]
        mqtt: bool,

        /// JSON record; one record per stdin line when omitted
        #[arg(value_name = "JSON")]
        record: Option<String>,
    },

    /// List recognized options, or how a client translates them
    Options {
        /// Show the translation for this client
        #[arg(long, value_enum)]
        client: Option<ClientKind>,
    },

    /// Show version information
    Version,

    /// Generate shell completion script
    Completion {
        /// Shell type (bash, zsh, fish, powershell, elvish)
        #[arg(value_name = "SHELL")]
        shell: String,
    },

    /// Show configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Validate configuration file
        #[arg(long)]
        validate: bool,
    },
}

/// CLI interface handler
pub struct CliInterface {
    /// Parsed command-line arguments
    args: CliArgs,

    /// Loaded configuration
    config: Config,
}

impl CliInterface {
    /// Create a new CLI interface
    ///
    /// # Returns
    /// * `Result<Self>` - New CLI interface or error
    pub fn new() -> Result<Self> {
        let args = CliArgs::parse();
        let config = Self::load_config(&args)?;

        Ok(Self { args, config })
    }

    /// Load configuration from file and merge with arguments
    ///
    /// # Arguments
    /// * `args` - Command-line arguments
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    fn load_config(args: &CliArgs) -> Result<Config> {
        let mut config = Config::load_from_file(args.config_file.as_deref())?;
        config.validate()?;

        Self::apply_args_to_config(&mut config, args);

        Ok(config)
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the CLI arguments
    pub fn args(&self) -> &CliArgs {
        &self.args
    }

    /// Apply CLI arguments to configuration
    ///
    /// Overrides configuration values with CLI arguments where provided
    fn apply_args_to_config(config: &mut Config, args: &CliArgs) {
        Self::apply_display_args(config, args);
        Self::apply_logging_args(config, args);
    }

    /// Apply display-related CLI arguments to configuration
    fn apply_display_args(config: &mut Config, args: &CliArgs) {
        match &args.command {
            Commands::Format { mode: Some(mode), .. } => {
                config.display.format = *mode;
            }
            Commands::Message {
                log_msgs,
                msg_content_hashed,
                ..
            } => {
                if let Some(log_msgs) = log_msgs {
                    config.display.log_msgs = *log_msgs;
                }
                if *msg_content_hashed {
                    config.display.msg_content_hashed = true;
                }
            }
            _ => {}
        }
    }

    /// Apply logging-related CLI arguments to configuration
    fn apply_logging_args(config: &mut Config, args: &CliArgs) {
        config.logging.level = if args.very_verbose {
            LogLevel::Trace
        } else if args.verbose {
            LogLevel::Debug
        } else if args.quiet {
            LogLevel::Error
        } else {
            config.logging.level
        };
    }

    /// Run the selected subcommand, writing to stdout
    pub fn handle_command(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.execute(&mut out)?;
        out.flush()?;
        Ok(())
    }

    /// Run the selected subcommand
    ///
    /// # Arguments
    /// * `out` - Destination of the command's output
    ///
    /// # Returns
    /// * `Result<()>` - Success or error
    pub fn execute<W: Write>(&self, out: &mut W) -> Result<()> {
        match &self.args.command {
            Commands::Translate {
                client,
                broker,
                params,
                connection,
            } => self.translate(out, *client, broker.as_deref(), *params, connection),
            Commands::Format { hash, value, .. } => self.format(out, *hash, value.as_deref()),
            Commands::Message { record, mqtt, .. } => {
                self.print_messages(out, record.as_deref(), *mqtt)
            }
            Commands::Options { client } => self.list_options(out, *client),
            Commands::Version => self.show_version(out),
            Commands::Completion { shell } => generate_completion(shell, out),
            Commands::Config { show, validate } => {
                self.handle_config_command(out, *show, *validate)
            }
        }
    }

    fn translate<W: Write>(
        &self,
        out: &mut W,
        client: Option<ClientKind>,
        broker: Option<&str>,
        params_only: bool,
        connection: &ConnectionArgs,
    ) -> Result<()> {
        let client = client.unwrap_or(self.config.connection.default_client);
        let broker = broker
            .map(str::to_string)
            .unwrap_or_else(|| self.config.broker_for(client));
        let options = connection.to_option_set()?;

        info!(client = %client, broker = %broker, "Translating connection options");
        let (uri, translation) = translator::connection_uri(&broker, client, &options)?;

        if params_only {
            for (name, value) in translation.params.iter() {
                writeln!(out, "{name}={value}")?;
            }
        } else {
            writeln!(out, "{uri}")?;
        }
        Ok(())
    }

    fn format<W: Write>(&self, out: &mut W, hash: bool, value: Option<&str>) -> Result<()> {
        let text = match value {
            Some(text) => text.to_string(),
            None => read_stdin()?,
        };
        let value: Value = serde_json::from_str(&text)?;

        let output = if hash {
            formatter::hash(Some(&value))?.unwrap_or_else(|| "None".to_string())
        } else {
            Formatter::new(self.config.display.format).format(&value)?
        };
        writeln!(out, "{output}")?;
        Ok(())
    }

    fn print_messages<W: Write>(&self, out: &mut W, record: Option<&str>, mqtt: bool) -> Result<()> {
        let display = &self.config.display;
        let mut printer = MessagePrinter::new(out, display.log_msgs, display.msg_content_hashed);

        if let Some(text) = record {
            return print_record(&mut printer, text, mqtt);
        }

        let stdin = io::stdin();
        for (number, line) in stdin.lock().lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            debug!(line = number + 1, "Printing message record");
            print_record(&mut printer, &line, mqtt)?;
        }
        Ok(())
    }

    fn list_options<W: Write>(&self, out: &mut W, client: Option<ClientKind>) -> Result<()> {
        let Some(client) = client else {
            for spec in REGISTRY {
                writeln!(out, "{:<36} {}", spec.name, spec.default)?;
            }
            return Ok(());
        };

        let table = client.table();
        table.validate(REGISTRY)?;
        for spec in REGISTRY.iter().filter(|s| s.is_connection()) {
            let target = table.entry(spec.name).map(describe_entry).unwrap_or_default();
            writeln!(out, "{:<36} {}", spec.name, target)?;
        }
        Ok(())
    }

    /// Show version information
    fn show_version<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "mqcli version {}", env!("CARGO_PKG_VERSION"))?;
        writeln!(out, "Rust version: {}", env!("CARGO_PKG_RUST_VERSION"))?;
        Ok(())
    }

    /// Handle config subcommand
    ///
    /// # Arguments
    /// * `show` - Whether to show configuration
    /// * `validate` - Whether to validate configuration
    fn handle_config_command<W: Write>(&self, out: &mut W, show: bool, validate: bool) -> Result<()> {
        if validate {
            let path = self.get_config_path();
            writeln!(out, "Validating configuration file: {}", path.display())?;
            // Loading already validated the file
            writeln!(out, "Configuration is valid")?;
        }

        if show {
            writeln!(out, "Configuration file: {}", self.get_config_path().display())?;
            writeln!(out)?;
            write!(out, "{}", self.config.to_toml_string()?)?;
        }

        Ok(())
    }

    /// Get configuration file path (from args or default)
    fn get_config_path(&self) -> PathBuf {
        self.args
            .config_file
            .clone()
            .unwrap_or_else(Config::default_config_path)
    }
}

/// Report a fatal error and return the process exit code
///
/// # Arguments
/// * `err` - Error that ended the command
/// * `err_out` - Destination of the user-facing message, usually stderr
pub fn report_failure<W: Write>(err: &MqcliError, err_out: &mut W) -> i32 {
    let code = err.exit_code();
    error!(exit_code = code, "{err}");
    // Nothing left to report to if stderr is closed
    let _ = writeln!(err_out, "Error: {err}");
    code
}

fn print_record<W: Write>(printer: &mut MessagePrinter<W>, text: &str, mqtt: bool) -> Result<()> {
    if mqtt {
        let record: MqttRecord = serde_json::from_str(text)?;
        printer.print_message(&record)
    } else {
        let record: MessageRecord = serde_json::from_str(text)?;
        printer.print_message(&record)
    }
}

fn describe_entry(entry: &TranslationEntry) -> String {
    let target = match entry.target {
        Target::Params(names) => names.join(","),
        Target::NoOp => "(ignored)".to_string(),
        Target::Unsupported => "(unsupported)".to_string(),
    };
    match entry.transform {
        Transform::SecondsToMillis => format!("{target} [ms]"),
        Transform::WholeSeconds => format!("{target} [s]"),
        Transform::Verbatim => target,
    }
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    Ok(text)
}
