//! mqcli
//!
//! Translates protocol-agnostic connection options into client connection
//! URIs and prints values and messages in Python-literal or JSON form.
//!
//! # Usage
//!
//! ```bash
//! mqcli translate --client artemis-core -b localhost:61616 --conn-heartbeat 30
//! mqcli format '{"a": [1, 2.5, null]}'
//! ```

use mqcli::cli::{CliInterface, report_failure};
use mqcli::error::Result;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Application entry point
fn main() {
    let cli = match CliInterface::new() {
        Ok(cli) => cli,
        Err(e) => std::process::exit(report_failure(&e, &mut std::io::stderr())),
    };

    initialize_logging(&cli);

    if let Err(e) = run(&cli) {
        std::process::exit(report_failure(&e, &mut std::io::stderr()));
    }
}

/// Main application logic
///
/// # Returns
/// * `Result<()>` - Success or error
fn run(cli: &CliInterface) -> Result<()> {
    cli.handle_command()
}

/// Initialize logging system based on the effective log level
///
/// Logs go to stderr so stdout carries only command output. `RUST_LOG`
/// directives refine the level taken from the configuration.
///
/// # Arguments
/// * `cli` - CLI interface with verbosity already applied to the config
fn initialize_logging(cli: &CliInterface) {
    let level = cli.config().logging.level.to_tracing_level();
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if cli.config().logging.timestamps {
        subscriber.init();
    } else {
        subscriber.without_time().init();
    }
}
