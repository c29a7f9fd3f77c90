//! AMQP 1.0 client (Qpid JMS) vocabulary

use super::table::{DerivationRule, TranslationEntry as E, TranslationTable};
use crate::error::Result;
use crate::options::{HEARTBEAT, LOG_BYTES, OptionSet, PASSWORD, RECONNECT, USERNAME};

pub static TABLE: TranslationTable = TranslationTable {
    client: "qpid-jms",
    entries: ENTRIES,
    rules: RULES,
};

static ENTRIES: &[E] = &[
    E::to(USERNAME, &["jms.username"]),
    E::to(PASSWORD, &["jms.password"]),
    E::to(HEARTBEAT, &["amqp.idleTimeout"]).millis(),
    E::to("conn-vhost", &["amqp.vhost"]),
    E::to("conn-auth-sasl", &["amqp.saslLayer"]),
    E::to("conn-auth-mechanisms", &["amqp.saslMechanisms"]),
    E::to("conn-clientid", &["jms.clientID"]),
    E::to("conn-async-send", &["jms.forceAsyncSend"]),
    E::to("conn-sync-send", &["jms.alwaysSyncSend"]),
    E::to("conn-async-acks", &["jms.sendAcksAsync"]),
    E::to("conn-local-msg-priority", &["jms.localMessagePriority"]),
    E::to("conn-valid-prop-names", &["jms.validatePropertyNames"]),
    E::to("conn-queue-prefix", &["jms.queuePrefix"]),
    E::to("conn-topic-prefix", &["jms.topicPrefix"]),
    E::to("conn-close-timeout", &["jms.closeTimeout"]),
    E::to("conn-conn-timeout", &["jms.connectTimeout"]),
    E::to("conn-clientid-prefix", &["jms.clientIDPrefix"]),
    E::to("conn-connid-prefix", &["jms.connectionIDPrefix"]),
    E::to("conn-prefetch-queue", &["jms.prefetchPolicy.queuePrefetch"]),
    E::to("conn-prefetch-topic", &["jms.prefetchPolicy.topicPrefetch"]),
    E::to("conn-prefetch-browser", &["jms.prefetchPolicy.queueBrowserPrefetch"]),
    E::to("conn-prefetch-topic-dur", &["jms.prefetchPolicy.durableTopicPrefetch"]),
    E::to("conn-prefetch", &["jms.prefetchPolicy.all"]),
    E::to("conn-redeliveries-max", &["jms.redeliveryPolicy.maxRedeliveries"]),
    // reconnect switches the URI to failover:(...)
    E::noop(RECONNECT),
    E::to("conn-reconnect-limit", &["failover.maxReconnectAttempts"]),
    E::to("conn-reconnect-timeout", &["failover.reconnectDelay"]),
    E::to("conn-reconnect-interval", &["failover.maxReconnectDelay"]),
    E::to("conn-reconnect-backoff", &["failover.useReconnectBackOff"]),
    E::to("conn-reconnect-backoff-multiplier", &["failover.reconnectBackOffMultiplier"]),
    E::to("conn-reconnect-start-limit", &["failover.startupMaxReconnectAttempts"]),
    E::to("conn-reconnect-initial-delay", &["failover.initialReconnectDelay"]),
    E::to("conn-reconnect-warn-attempts", &["failover.warnAfterReconnectAttempts"]),
    E::to("conn-ssl-keystore-location", &["transport.keyStoreLocation"]),
    E::to("conn-ssl-keystore-password", &["transport.keyStorePassword"]),
    E::to("conn-ssl-truststore-location", &["transport.trustStoreLocation"]),
    E::to("conn-ssl-truststore-password", &["transport.trustStorePassword"]),
    E::to("conn-ssl-store-type", &["transport.storeType"]),
    E::to("conn-ssl-context-proto", &["transport.contextProtocol"]),
    E::to("conn-ssl-ena-ciphered-suites", &["transport.enabledCipherSuites"]),
    E::to("conn-ssl-dis-ciphered-suites", &["transport.disabledCipherSuites"]),
    E::to("conn-ssl-ena-protos", &["transport.enabledProtocols"]),
    E::to("conn-ssl-dis-protos", &["transport.disabledProtocols"]),
    E::to("conn-ssl-trust-all", &["transport.trustAll"]),
    E::to("conn-ssl-verify-host", &["transport.verifyHost"]),
    E::to("conn-ssl-key-alias", &["transport.keyAlias"]),
    E::to("conn-tcp-buf-size-send", &["transport.sendBufferSize"]),
    E::to("conn-tcp-buf-size-recv", &["transport.receiveBufferSize"]),
    E::to("conn-tcp-traffic-class", &["transport.trafficClass"]),
    E::to("conn-tcp-conn-timeout", &["transport.connectTimeout"]),
    E::to("conn-tcp-sock-timeout", &["transport.soTimeout"]),
    E::to("conn-tcp-sock-linger", &["transport.soLinger"]),
    E::to("conn-tcp-keep-alive", &["transport.tcpKeepAlive"]),
    E::to("conn-tcp-no-delay", &["transport.tcpNoDelay"]),
    // OpenWire wire format
    E::noop("conn-cache-ena"),
    E::noop("conn-cache-size"),
    E::noop("conn-max-inactivity-dur"),
    E::noop("conn-max-inactivity-dur-init-delay"),
    E::to("conn-max-frame-size", &["amqp.maxFrameSize"]),
    E::noop("conn-prefix-packet-size-ena"),
    E::noop("conn-server-stack-trace-ena"),
    E::noop("conn-tight-encoding-ena"),
    E::to("conn-drain-timeout", &["amqp.drainTimeout"]),
    E::to("conn-recv-local-only", &["jms.receiveLocalOnly"]),
    E::to("conn-recv-nowait-local", &["jms.receiveNoWaitLocalOnly"]),
    E::to("conn-populate-user-id", &["jms.populateJMSXUserID"]),
];

static RULES: &[DerivationRule] = &[DerivationRule {
    name: "trace-bytes",
    applies: |options| options.flag(LOG_BYTES),
    derive: trace_bytes,
}];

fn trace_bytes(_: &OptionSet) -> Result<Vec<(&'static str, String)>> {
    Ok(vec![("transport.traceBytes", "true".to_string())])
}
