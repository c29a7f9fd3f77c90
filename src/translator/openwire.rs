//! ActiveMQ OpenWire client vocabulary

use super::table::{TranslationEntry as E, TranslationTable};
use crate::options::{HEARTBEAT, PASSWORD, RECONNECT, USERNAME};

pub static TABLE: TranslationTable = TranslationTable {
    client: "openwire",
    entries: ENTRIES,
    rules: &[],
};

static ENTRIES: &[E] = &[
    E::to(USERNAME, &["jms.userName"]),
    E::to(PASSWORD, &["jms.password"]),
    E::to(HEARTBEAT, &["wireFormat.maxInactivityDuration"]).millis(),
    E::noop("conn-vhost"),
    E::noop("conn-auth-sasl"),
    E::noop("conn-auth-mechanisms"),
    E::to("conn-clientid", &["jms.clientID"]),
    E::to("conn-async-send", &["jms.useAsyncSend"]),
    E::to("conn-sync-send", &["jms.alwaysSyncSend"]),
    E::noop("conn-async-acks"),
    E::noop("conn-local-msg-priority"),
    E::noop("conn-valid-prop-names"),
    E::noop("conn-queue-prefix"),
    E::noop("conn-topic-prefix"),
    E::to("conn-close-timeout", &["jms.closeTimeout"]),
    E::noop("conn-conn-timeout"),
    E::noop("conn-clientid-prefix"),
    E::noop("conn-connid-prefix"),
    E::to("conn-prefetch-queue", &["jms.prefetchPolicy.queuePrefetch"]),
    E::to("conn-prefetch-topic", &["jms.prefetchPolicy.topicPrefetch"]),
    E::to("conn-prefetch-browser", &["jms.prefetchPolicy.queueBrowserPrefetch"]),
    E::to("conn-prefetch-topic-dur", &["jms.prefetchPolicy.durableTopicPrefetch"]),
    E::to("conn-prefetch", &["jms.prefetchPolicy.all"]),
    E::to("conn-redeliveries-max", &["jms.redeliveryPolicy.maximumRedeliveries"]),
    // reconnect switches the URI to failover:(...)
    E::noop(RECONNECT),
    E::to("conn-reconnect-limit", &["maxReconnectAttempts"]),
    E::to("conn-reconnect-timeout", &["timeout"]),
    E::to("conn-reconnect-interval", &["maxReconnectDelay"]),
    E::to("conn-reconnect-backoff", &["useExponentialBackOff"]),
    E::to("conn-reconnect-backoff-multiplier", &["reconnectDelayExponent"]),
    E::to("conn-reconnect-start-limit", &["startupMaxReconnectAttempts"]),
    E::to("conn-reconnect-initial-delay", &["initialReconnectDelay"]),
    E::to("conn-reconnect-warn-attempts", &["warnAfterReconnectAttempts"]),
    // key and trust stores are configured on the SSL connection factory, not the URI
    E::unsupported("conn-ssl-keystore-location"),
    E::unsupported("conn-ssl-keystore-password"),
    E::unsupported("conn-ssl-truststore-location"),
    E::unsupported("conn-ssl-truststore-password"),
    E::unsupported("conn-ssl-store-type"),
    E::noop("conn-ssl-context-proto"),
    E::noop("conn-ssl-ena-ciphered-suites"),
    E::noop("conn-ssl-dis-ciphered-suites"),
    E::noop("conn-ssl-ena-protos"),
    E::noop("conn-ssl-dis-protos"),
    E::noop("conn-ssl-trust-all"),
    E::noop("conn-ssl-verify-host"),
    E::noop("conn-ssl-key-alias"),
    E::to("conn-tcp-buf-size-send", &["socketBufferSize"]),
    E::to("conn-tcp-buf-size-recv", &["socketBufferSize"]),
    E::to("conn-tcp-traffic-class", &["trafficClass"]),
    E::to("conn-tcp-conn-timeout", &["connectionTimeout"]),
    E::to("conn-tcp-sock-timeout", &["soTimeout"]),
    E::to("conn-tcp-sock-linger", &["soLinger"]),
    E::to("conn-tcp-keep-alive", &["keepAlive"]),
    E::to("conn-tcp-no-delay", &["wireFormat.tcpNoDelayEnabled"]),
    E::to("conn-cache-ena", &["wireFormat.cacheEnabled"]),
    E::to("conn-cache-size", &["wireFormat.cacheSize"]),
    E::to("conn-max-inactivity-dur", &["wireFormat.maxInactivityDuration"]),
    E::to(
        "conn-max-inactivity-dur-init-delay",
        &["wireFormat.maxInactivityDurationInitalDelay"],
    ),
    E::to("conn-max-frame-size", &["wireFormat.maxFrameSize"]),
    E::to("conn-prefix-packet-size-ena", &["wireFormat.prefixPacketSize"]),
    E::to("conn-server-stack-trace-ena", &["wireFormat.stackTraceEnabled"]),
    E::to("conn-tight-encoding-ena", &["wireFormat.tightEncodingEnabled"]),
    E::noop("conn-drain-timeout"),
    E::noop("conn-recv-local-only"),
    E::noop("conn-recv-nowait-local"),
    E::noop("conn-populate-user-id"),
];
