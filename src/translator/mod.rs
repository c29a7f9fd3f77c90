//! Connection-option translation
//!
//! This module maps the protocol-agnostic `conn-*` options onto the URI
//! parameters of a concrete messaging client:
//! - One constant [`TranslationTable`] per client ([`ClientKind`])
//! - Derivation rules for parameters computed from several options
//! - Broker URI rendering with the translated parameters
//!
//! Translation is a pure function of the option set and the table.

mod artemis;
mod openwire;
mod paho;
mod params;
mod qpid_jms;
mod table;

pub use params::{BrokerList, ConnectionParams};
pub use table::{DerivationRule, Target, Transform, TranslationEntry, TranslationTable, millis};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

use crate::error::{MqcliError, Result, TranslateError};
use crate::options::{OptionSet, RECONNECT};

/// Supported messaging clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum ClientKind {
    /// AMQP 1.0 through Qpid JMS
    #[serde(rename = "qpid-jms")]
    #[value(name = "qpid-jms", alias = "aac")]
    QpidJms,

    /// Artemis Core protocol
    #[serde(rename = "artemis-core")]
    #[value(name = "artemis-core", alias = "acc")]
    ArtemisCore,

    /// ActiveMQ OpenWire
    #[serde(rename = "openwire")]
    #[value(name = "openwire", alias = "aoc")]
    OpenWire,

    /// MQTT through Eclipse Paho
    #[serde(rename = "paho-mqtt")]
    #[value(name = "paho-mqtt", alias = "amc")]
    PahoMqtt,
}

impl ClientKind {
    pub const ALL: [ClientKind; 4] = [
        ClientKind::QpidJms,
        ClientKind::ArtemisCore,
        ClientKind::OpenWire,
        ClientKind::PahoMqtt,
    ];

    pub fn name(&self) -> &'static str {
        self.table().client
    }

    pub fn table(&self) -> &'static TranslationTable {
        match self {
            ClientKind::QpidJms => &qpid_jms::TABLE,
            ClientKind::ArtemisCore => &artemis::TABLE,
            ClientKind::OpenWire => &openwire::TABLE,
            ClientKind::PahoMqtt => &paho::TABLE,
        }
    }

    /// Scheme prepended to broker addresses that have none
    pub fn default_scheme(&self) -> &'static str {
        match self {
            ClientKind::QpidJms => "amqp",
            ClientKind::ArtemisCore | ClientKind::OpenWire | ClientKind::PahoMqtt => "tcp",
        }
    }

    /// Local broker address used when none is configured
    pub fn default_broker(&self) -> &'static str {
        match self {
            ClientKind::QpidJms => "amqp://127.0.0.1:5672",
            ClientKind::ArtemisCore | ClientKind::OpenWire => "tcp://127.0.0.1:61616",
            ClientKind::PahoMqtt => "tcp://127.0.0.1:1883",
        }
    }

    /// Whether reconnect is expressed as a `failover:(...)` URI
    pub fn uses_failover_uri(&self) -> bool {
        matches!(self, ClientKind::QpidJms | ClientKind::OpenWire)
    }
}

impl fmt::Display for ClientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ClientKind {
    type Err = MqcliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "qpid-jms" | "aac" => Ok(ClientKind::QpidJms),
            "artemis-core" | "acc" => Ok(ClientKind::ArtemisCore),
            "openwire" | "aoc" => Ok(ClientKind::OpenWire),
            "paho-mqtt" | "amc" => Ok(ClientKind::PahoMqtt),
            _ => Err(TranslateError::UnknownClient(s.to_string()).into()),
        }
    }
}

/// Result of translating an option set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translation {
    pub params: ConnectionParams,

    /// Supplied options the client cannot honour
    pub unsupported: Vec<&'static str>,
}

/// Translate supplied connection options for one client
///
/// The table is checked for completeness first, so a missing entry fails
/// before any parameter is produced. Supplied options are then mapped in
/// registration order, and the table's derivation rules run last.
///
/// # Arguments
/// * `options` - Resolved option set
/// * `table` - Target client's translation table
///
/// # Returns
/// * `Result<Translation>` - Parameters plus the unsupported options
pub fn translate(options: &OptionSet, table: &TranslationTable) -> Result<Translation> {
    table.validate(options.registry())?;

    let mut translation = Translation::default();

    for option in options.supplied().filter(|o| o.spec().is_connection()) {
        let entry = table
            .entry(option.name())
            .ok_or_else(|| TranslateError::MissingEntry {
                client: table.client,
                option: option.name().to_string(),
            })?;

        match entry.target {
            Target::Unsupported => {
                warn!(
                    client = table.client,
                    option = option.name(),
                    "Option is not supported by this client and has no effect"
                );
                translation.unsupported.push(option.name());
            }
            Target::NoOp => {
                debug!(client = table.client, option = option.name(), "Option ignored");
            }
            Target::Params(names) => {
                let value = entry.transform.apply(option)?;
                for name in names {
                    translation.params.insert(*name, value.clone());
                }
            }
        }
    }

    for rule in table.rules {
        if (rule.applies)(options) {
            debug!(client = table.client, rule = rule.name, "Derivation rule applied");
            for (name, value) in (rule.derive)(options)? {
                translation.params.insert(name, value);
            }
        }
    }

    Ok(translation)
}

/// Build the final connection URI for a client
///
/// # Arguments
/// * `broker` - Comma-separated broker addresses
/// * `client` - Target client
/// * `options` - Resolved option set
///
/// # Returns
/// * `Result<(String, Translation)>` - URI and the translation it carries
pub fn connection_uri(
    broker: &str,
    client: ClientKind,
    options: &OptionSet,
) -> Result<(String, Translation)> {
    let translation = translate(options, client.table())?;
    let brokers = BrokerList::parse(broker, client.default_scheme())?;
    let failover = client.uses_failover_uri() && options.flag(RECONNECT);
    let uri = brokers.to_uri(&translation.params, failover);
    Ok((uri, translation))
}

#[cfg(test)]
mod tests;
