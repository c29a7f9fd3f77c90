//! Artemis Core client vocabulary

use super::table::{DerivationRule, TranslationEntry as E, TranslationTable, invalid, millis};
use crate::error::Result;
use crate::options::{HEARTBEAT, OptionSet, PASSWORD, RECONNECT, USERNAME};

pub static TABLE: TranslationTable = TranslationTable {
    client: "artemis-core",
    entries: ENTRIES,
    rules: RULES,
};

static ENTRIES: &[E] = &[
    E::to(USERNAME, &["jms.userName"]),
    E::to(PASSWORD, &["jms.password"]),
    E::to(HEARTBEAT, &["connectionTTL"]).millis(),
    E::noop("conn-vhost"),
    E::noop("conn-auth-sasl"),
    E::noop("conn-auth-mechanisms"),
    E::to("conn-clientid", &["clientID"]),
    E::noop("conn-async-send"),
    E::to("conn-sync-send", &["blockOnNonDurableSend", "blockOnDurableSend"]),
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
    E::to("conn-prefetch", &["consumerWindowSize"]),
    E::to("conn-redeliveries-max", &["jms.redeliveryPolicy.maxRedeliveries"]),
    E::noop(RECONNECT),
    E::to("conn-reconnect-limit", &["reconnectAttempts"]),
    E::to("conn-reconnect-timeout", &["maxRetryInterval"]),
    E::noop("conn-reconnect-interval"),
    E::to("conn-reconnect-backoff", &["retryIntervalMultiplier"]),
    E::to("conn-reconnect-backoff-multiplier", &["retryIntervalMultiplier"]),
    E::noop("conn-reconnect-start-limit"),
    E::noop("conn-reconnect-initial-delay"),
    E::noop("conn-reconnect-warn-attempts"),
    E::to("conn-ssl-keystore-location", &["keyStorePath"]),
    E::to("conn-ssl-keystore-password", &["keyStorePassword"]),
    E::to("conn-ssl-truststore-location", &["trustStorePath"]),
    E::to("conn-ssl-truststore-password", &["trustStorePassword"]),
    E::to("conn-ssl-store-type", &["keyStoreProvider"]),
    E::to("conn-ssl-context-proto", &["protocols"]),
    E::to("conn-ssl-ena-ciphered-suites", &["enabledCipherSuites"]),
    E::noop("conn-ssl-dis-ciphered-suites"),
    E::to("conn-ssl-ena-protos", &["enabledProtocols"]),
    E::noop("conn-ssl-dis-protos"),
    E::noop("conn-ssl-trust-all"),
    E::to("conn-ssl-verify-host", &["verifyHost"]),
    E::noop("conn-ssl-key-alias"),
    E::to("conn-tcp-buf-size-send", &["tcpSendBufferSize"]),
    E::to("conn-tcp-buf-size-recv", &["tcpReceiveBufferSize"]),
    E::noop("conn-tcp-traffic-class"),
    E::to("conn-tcp-conn-timeout", &["connect-timeout-millis"]),
    E::to("conn-tcp-sock-timeout", &["callTimeout"]),
    E::noop("conn-tcp-sock-linger"),
    E::noop("conn-tcp-keep-alive"),
    E::noop("conn-tcp-no-delay"),
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

static RULES: &[DerivationRule] = &[
    DerivationRule {
        name: "unlimited-reconnect",
        applies: |options| options.flag(RECONNECT),
        derive: unlimited_reconnect,
    },
    DerivationRule {
        name: "heartbeat-split",
        applies: |options| options.is_supplied(HEARTBEAT),
        derive: heartbeat_split,
    },
    DerivationRule {
        name: "tls-enable",
        applies: |options| options.supplied().any(|o| o.spec().is_tls()),
        derive: tls_enable,
    },
];

fn unlimited_reconnect(_: &OptionSet) -> Result<Vec<(&'static str, String)>> {
    Ok(vec![
        ("reconnectAttempts", "-1".to_string()),
        ("initialConnectAttempts", "-1".to_string()),
    ])
}

/// Failure check at half the heartbeat, call timeout at twice it
fn heartbeat_split(options: &OptionSet) -> Result<Vec<(&'static str, String)>> {
    let Some(heartbeat) = options.get(HEARTBEAT) else {
        return Ok(Vec::new());
    };
    let secs = heartbeat.as_seconds().map_err(|_| invalid(heartbeat))?;
    Ok(vec![
        ("clientFailureCheckPeriod", millis(secs / 2.0).to_string()),
        ("callTimeout", millis(secs * 2.0).to_string()),
    ])
}

fn tls_enable(_: &OptionSet) -> Result<Vec<(&'static str, String)>> {
    Ok(vec![("sslEnabled", "true".to_string())])
}
