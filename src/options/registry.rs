//! Registry of recognized client options
//!
//! Every option the command line accepts is declared here once, with its
//! default and help text. Connection options (`conn-*`) are the vocabulary
//! the translator maps onto client-specific URI parameters.

/// Which part of the client an option configures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// Connection option, subject to translation
    Connection,

    /// Client behaviour option, read directly by derivation rules
    Client,
}

/// Static description of one option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSpec {
    pub name: &'static str,
    pub value_name: &'static str,
    pub default: &'static str,
    pub help: &'static str,
    pub kind: OptionKind,

    /// Value assumed when the option is given without one
    pub bare_value: Option<&'static str>,
}

impl OptionSpec {
    pub fn is_connection(&self) -> bool {
        self.kind == OptionKind::Connection
    }

    /// Whether supplying the option asks for a TLS transport
    ///
    /// The key alias only picks a key from a store configured elsewhere.
    pub fn is_tls(&self) -> bool {
        self.name.starts_with("conn-ssl-") && self.name != KEY_ALIAS
    }
}

const fn value(
    name: &'static str,
    value_name: &'static str,
    default: &'static str,
    help: &'static str,
) -> OptionSpec {
    OptionSpec {
        name,
        value_name,
        default,
        help,
        kind: OptionKind::Connection,
        bare_value: None,
    }
}

const fn switch(name: &'static str, default: &'static str, help: &'static str) -> OptionSpec {
    OptionSpec {
        name,
        value_name: "BOOL",
        default,
        help,
        kind: OptionKind::Connection,
        bare_value: Some("true"),
    }
}

const fn credential(name: &'static str, help: &'static str) -> OptionSpec {
    OptionSpec {
        name,
        value_name: "VALUE",
        default: "",
        help,
        kind: OptionKind::Connection,
        bare_value: Some(""),
    }
}

pub const USERNAME: &str = "conn-username";
pub const PASSWORD: &str = "conn-password";
pub const HEARTBEAT: &str = "conn-heartbeat";
pub const RECONNECT: &str = "conn-reconnect";
pub const LOG_BYTES: &str = "log-bytes";
pub const KEY_ALIAS: &str = "conn-ssl-key-alias";

/// All recognized options, in registration order
pub static REGISTRY: &[OptionSpec] = &[
    // credentials and session
    credential(USERNAME, "Username used to authenticate"),
    credential(PASSWORD, "Password used to authenticate"),
    value(HEARTBEAT, "SECONDS", "", "Heartbeat interval in seconds"),
    value("conn-vhost", "NAME", "", "Virtual host name"),
    switch("conn-auth-sasl", "true", "Enable SASL layer"),
    value("conn-auth-mechanisms", "LIST", "all", "Allowed SASL mechanisms"),
    value("conn-clientid", "ID", "", "Client identifier"),
    switch("conn-async-send", "false", "Send messages asynchronously"),
    switch("conn-sync-send", "false", "Always send messages synchronously"),
    switch("conn-async-acks", "false", "Send acknowledgements asynchronously"),
    switch("conn-local-msg-priority", "false", "Reorder prefetched messages by priority"),
    switch("conn-valid-prop-names", "true", "Validate message property names"),
    value("conn-queue-prefix", "PREFIX", "", "Prefix applied to queue names"),
    value("conn-topic-prefix", "PREFIX", "", "Prefix applied to topic names"),
    value("conn-close-timeout", "MILLIS", "15", "Connection close timeout"),
    value("conn-conn-timeout", "MILLIS", "15", "Connection establishment timeout"),
    value("conn-clientid-prefix", "PREFIX", "ID:", "Prefix for generated client ids"),
    value("conn-connid-prefix", "PREFIX", "ID:", "Prefix for generated connection ids"),
    // prefetch and redelivery
    value("conn-prefetch-queue", "COUNT", "1000", "Queue consumer prefetch"),
    value("conn-prefetch-topic", "COUNT", "1000", "Topic consumer prefetch"),
    value("conn-prefetch-browser", "COUNT", "1000", "Queue browser prefetch"),
    value("conn-prefetch-topic-dur", "COUNT", "1000", "Durable topic subscriber prefetch"),
    value("conn-prefetch", "COUNT", "1000", "Prefetch for every consumer type"),
    value("conn-redeliveries-max", "COUNT", "-1", "Maximum redeliveries before discarding"),
    // reconnect and failover
    switch(RECONNECT, "false", "Reconnect automatically after connection loss"),
    value("conn-reconnect-limit", "COUNT", "-1", "Maximum reconnect attempts"),
    value("conn-reconnect-timeout", "MILLIS", "10", "Delay between reconnect attempts"),
    value("conn-reconnect-interval", "MILLIS", "30", "Maximum delay between reconnect attempts"),
    switch("conn-reconnect-backoff", "true", "Grow the reconnect delay after each attempt"),
    value("conn-reconnect-backoff-multiplier", "FACTOR", "2.0", "Reconnect delay growth factor"),
    value("conn-reconnect-start-limit", "COUNT", "-1", "Reconnect attempts for the first connection"),
    value("conn-reconnect-initial-delay", "MILLIS", "0", "Delay before the first reconnect"),
    value("conn-reconnect-warn-attempts", "COUNT", "10", "Warn after this many reconnect attempts"),
    // TLS
    value("conn-ssl-keystore-location", "PATH", "", "Key store location"),
    value("conn-ssl-keystore-password", "PASSWORD", "", "Key store password"),
    value("conn-ssl-truststore-location", "PATH", "", "Trust store location"),
    value("conn-ssl-truststore-password", "PASSWORD", "", "Trust store password"),
    value("conn-ssl-store-type", "TYPE", "JKS", "Key and trust store type"),
    value("conn-ssl-context-proto", "PROTO", "TLS", "TLS context protocol"),
    value("conn-ssl-ena-ciphered-suites", "LIST", "", "Enabled cipher suites"),
    value("conn-ssl-dis-ciphered-suites", "LIST", "", "Disabled cipher suites"),
    value("conn-ssl-ena-protos", "LIST", "", "Enabled TLS protocols"),
    value("conn-ssl-dis-protos", "LIST", "SSLv2Hello,SSLv3", "Disabled TLS protocols"),
    switch("conn-ssl-trust-all", "false", "Trust every server certificate"),
    switch("conn-ssl-verify-host", "true", "Verify the server host name"),
    value(KEY_ALIAS, "ALIAS", "", "Alias of the client key"),
    // TCP transport
    value("conn-tcp-buf-size-send", "BYTES", "64", "Socket send buffer size"),
    value("conn-tcp-buf-size-recv", "BYTES", "64", "Socket receive buffer size"),
    value("conn-tcp-traffic-class", "CLASS", "0", "IP traffic class"),
    value("conn-tcp-conn-timeout", "MILLIS", "60", "Socket connect timeout"),
    value("conn-tcp-sock-timeout", "MILLIS", "-1", "Socket read timeout"),
    value("conn-tcp-sock-linger", "SECONDS", "-1", "Socket linger"),
    switch("conn-tcp-keep-alive", "false", "Enable TCP keep-alive"),
    switch("conn-tcp-no-delay", "true", "Disable Nagle's algorithm"),
    // OpenWire wire format
    switch("conn-cache-ena", "true", "Enable wire-format caching"),
    value("conn-cache-size", "COUNT", "1024", "Wire-format cache size"),
    value("conn-max-inactivity-dur", "MILLIS", "30000", "Maximum inactivity before closing"),
    value("conn-max-inactivity-dur-init-delay", "MILLIS", "10000", "Initial inactivity check delay"),
    value("conn-max-frame-size", "BYTES", "1048576", "Maximum frame size"),
    switch("conn-prefix-packet-size-ena", "true", "Prefix packets with their size"),
    switch("conn-server-stack-trace-ena", "true", "Include server stack traces in errors"),
    switch("conn-tight-encoding-ena", "true", "Use tight wire encoding"),
    // AMQP only
    value("conn-drain-timeout", "MILLIS", "60000", "Consumer drain timeout"),
    switch("conn-recv-local-only", "false", "Receive only from the local prefetch buffer"),
    switch("conn-recv-nowait-local", "false", "Non-blocking receive reads only the local buffer"),
    switch("conn-populate-user-id", "false", "Populate JMSXUserID on sent messages"),
    // client behaviour
    OptionSpec {
        name: LOG_BYTES,
        value_name: "BOOL",
        default: "false",
        help: "Trace raw bytes on the transport",
        kind: OptionKind::Client,
        bare_value: Some("true"),
    },
];

/// Look up an option by name
pub fn find(name: &str) -> Option<&'static OptionSpec> {
    REGISTRY.iter().find(|spec| spec.name == name)
}

/// Names of all connection options
pub fn connection_options() -> impl Iterator<Item = &'static OptionSpec> {
    REGISTRY.iter().filter(|spec| spec.is_connection())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<&str> = REGISTRY.iter().map(|s| s.name).collect();
        assert_eq!(names.len(), REGISTRY.len());
    }

    #[test]
    fn test_connection_options_use_prefix() {
        for spec in REGISTRY {
            assert_eq!(spec.is_connection(), spec.name.starts_with("conn-"), "{}", spec.name);
        }
    }

    #[test]
    fn test_find() {
        let spec = find("conn-ssl-store-type").unwrap();
        assert_eq!(spec.default, "JKS");
        assert!(spec.is_tls());
        assert!(!find(KEY_ALIAS).unwrap().is_tls());
        assert!(find("conn-bogus").is_none());
        assert_eq!(find(PASSWORD).unwrap().bare_value, Some(""));
    }
}
