//! MQTT client (Eclipse Paho) vocabulary
//!
//! Paho takes its settings from a connect-options object rather than URI
//! parameters; the names below are its property names. Everything the MQTT
//! client has no notion of is marked unsupported so the user hears about it.

use super::table::{DerivationRule, TranslationEntry as E, TranslationTable};
use crate::error::Result;
use crate::options::{HEARTBEAT, OptionSet, PASSWORD, RECONNECT, USERNAME};

pub static TABLE: TranslationTable = TranslationTable {
    client: "paho-mqtt",
    entries: ENTRIES,
    rules: RULES,
};

static ENTRIES: &[E] = &[
    E::to(USERNAME, &["userName"]),
    E::to(PASSWORD, &["password"]),
    // keep-alive is configured in whole seconds
    E::to(HEARTBEAT, &["keepAliveInterval"]).whole_seconds(),
    E::noop("conn-vhost"),
    E::noop("conn-auth-sasl"),
    E::noop("conn-auth-mechanisms"),
    E::to("conn-clientid", &["clientId"]),
    E::noop("conn-async-send"),
    E::noop("conn-sync-send"),
    E::noop("conn-async-acks"),
    E::noop("conn-local-msg-priority"),
    E::noop("conn-valid-prop-names"),
    E::noop("conn-queue-prefix"),
    E::noop("conn-topic-prefix"),
    E::noop("conn-close-timeout"),
    E::noop("conn-conn-timeout"),
    E::noop("conn-clientid-prefix"),
    E::noop("conn-connid-prefix"),
    E::noop("conn-prefetch-queue"),
    E::noop("conn-prefetch-topic"),
    E::noop("conn-prefetch-browser"),
    E::noop("conn-prefetch-topic-dur"),
    E::noop("conn-prefetch"),
    E::unsupported("conn-redeliveries-max"),
    E::to(RECONNECT, &["automaticReconnect"]),
    E::unsupported("conn-reconnect-limit"),
    E::unsupported("conn-reconnect-timeout"),
    E::to("conn-reconnect-interval", &["maxReconnectDelay"]),
    E::unsupported("conn-reconnect-backoff"),
    E::unsupported("conn-reconnect-backoff-multiplier"),
    E::unsupported("conn-reconnect-start-limit"),
    E::unsupported("conn-reconnect-initial-delay"),
    E::unsupported("conn-reconnect-warn-attempts"),
    E::unsupported("conn-ssl-keystore-location"),
    E::unsupported("conn-ssl-keystore-password"),
    E::unsupported("conn-ssl-truststore-location"),
    E::unsupported("conn-ssl-truststore-password"),
    E::unsupported("conn-ssl-store-type"),
    E::unsupported("conn-ssl-context-proto"),
    E::unsupported("conn-ssl-ena-ciphered-suites"),
    E::unsupported("conn-ssl-dis-ciphered-suites"),
    E::unsupported("conn-ssl-ena-protos"),
    E::unsupported("conn-ssl-dis-protos"),
    E::unsupported("conn-ssl-trust-all"),
    E::unsupported("conn-ssl-verify-host"),
    E::unsupported("conn-ssl-key-alias"),
    E::unsupported("conn-tcp-buf-size-send"),
    E::unsupported("conn-tcp-buf-size-recv"),
    E::unsupported("conn-tcp-traffic-class"),
    E::unsupported("conn-tcp-conn-timeout"),
    E::unsupported("conn-tcp-sock-timeout"),
    E::unsupported("conn-tcp-sock-linger"),
    E::unsupported("conn-tcp-keep-alive"),
    E::unsupported("conn-tcp-no-delay"),
    E::noop("conn-cache-ena"),
    E::noop("conn-cache-size"),
    E::noop("conn-max-inactivity-dur"),
    E::noop("conn-max-inactivity-dur-init-delay"),
    E::noop("conn-max-frame-size"),
    E::noop("conn-prefix-packet-size-ena"),
    E::noop("conn-server-stack-trace-ena"),
    E::noop("conn-tight-encoding-ena"),
    E::noop("conn-drain-timeout"),
    E::noop("conn-recv-local-only"),
    E::noop("conn-recv-nowait-local"),
    E::noop("conn-populate-user-id"),
];

static RULES: &[DerivationRule] = &[DerivationRule {
    name: "clean-session",
    applies: |_| true,
    derive: clean_session,
}];

fn clean_session(_: &OptionSet) -> Result<Vec<(&'static str, String)>> {
    Ok(vec![("cleanSession", "true".to_string())])
}
