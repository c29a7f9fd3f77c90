//! Tests for connection-option translation

use super::*;
use crate::error::MqcliError;
use crate::options::{HEARTBEAT, KEY_ALIAS, LOG_BYTES, OptionSet, REGISTRY, USERNAME};

fn options(pairs: &[(&str, &str)]) -> OptionSet {
    let mut options = OptionSet::new();
    for (name, value) in pairs {
        options.supply(name, *value).unwrap();
    }
    options
}

fn translate_for(client: ClientKind, pairs: &[(&str, &str)]) -> Translation {
    translate(&options(pairs), client.table()).unwrap()
}

// ===== Tables =====

#[test]
fn test_every_table_covers_the_registry() {
    for client in ClientKind::ALL {
        client.table().validate(REGISTRY).unwrap();
    }
}

#[test]
fn test_tables_have_no_duplicate_entries() {
    for client in ClientKind::ALL {
        let entries = client.table().entries;
        for (i, entry) in entries.iter().enumerate() {
            assert!(
                entries[i + 1..].iter().all(|e| e.option != entry.option),
                "{client}: duplicate entry {}",
                entry.option
            );
        }
    }
}

#[test]
fn test_missing_entry_is_fatal() {
    static SHORT: TranslationTable = TranslationTable {
        client: "short",
        entries: &[TranslationEntry::to(USERNAME, &["user"])],
        rules: &[],
    };

    let err = translate(&options(&[(USERNAME, "u")]), &SHORT).unwrap_err();
    assert!(matches!(
        err,
        MqcliError::Translate(TranslateError::MissingEntry { client: "short", .. })
    ));
    assert_eq!(err.exit_code(), 2);
}

// ===== Direct mapping =====

#[test]
fn test_only_supplied_options_are_translated() {
    let translation = translate_for(ClientKind::QpidJms, &[]);
    assert!(translation.params.is_empty());
    assert!(translation.unsupported.is_empty());
}

#[test]
fn test_verbatim_mapping() {
    let translation = translate_for(
        ClientKind::QpidJms,
        &[(USERNAME, "admin"), ("conn-prefetch", "10")],
    );
    assert_eq!(translation.params.get("jms.username"), Some("admin"));
    assert_eq!(translation.params.get("jms.prefetchPolicy.all"), Some("10"));
    assert_eq!(translation.params.len(), 2);
}

#[test]
fn test_heartbeat_seconds_to_millis() {
    let translation = translate_for(ClientKind::QpidJms, &[(HEARTBEAT, "1.5")]);
    assert_eq!(translation.params.get("amqp.idleTimeout"), Some("1500"));

    let translation = translate_for(ClientKind::OpenWire, &[(HEARTBEAT, "30")]);
    assert_eq!(
        translation.params.get("wireFormat.maxInactivityDuration"),
        Some("30000")
    );

    let translation = translate_for(ClientKind::PahoMqtt, &[(HEARTBEAT, "30")]);
    assert_eq!(translation.params.get("keepAliveInterval"), Some("30"));
}

#[test]
fn test_paho_keep_alive_is_whole_seconds() {
    let translation = translate_for(ClientKind::PahoMqtt, &[(HEARTBEAT, "2.5")]);
    assert_eq!(translation.params.get("keepAliveInterval"), Some("3"));

    let translation = translate_for(ClientKind::PahoMqtt, &[(HEARTBEAT, "2.4")]);
    assert_eq!(translation.params.get("keepAliveInterval"), Some("2"));

    let err = translate(&options(&[(HEARTBEAT, "often")]), ClientKind::PahoMqtt.table())
        .unwrap_err();
    assert!(matches!(
        err,
        MqcliError::Translate(TranslateError::InvalidValue { .. })
    ));
}

#[test]
fn test_invalid_heartbeat_value() {
    let err = translate(&options(&[(HEARTBEAT, "often")]), ClientKind::QpidJms.table())
        .unwrap_err();
    assert!(matches!(
        err,
        MqcliError::Translate(TranslateError::InvalidValue { .. })
    ));
}

#[test]
fn test_noop_produces_no_parameter() {
    let translation = translate_for(
        ClientKind::ArtemisCore,
        &[("conn-vhost", "v"), ("conn-async-send", "true")],
    );
    assert!(translation.params.is_empty());
    assert!(translation.unsupported.is_empty());
}

#[test]
fn test_unsupported_is_reported_without_parameter() {
    let translation = translate_for(
        ClientKind::OpenWire,
        &[("conn-ssl-keystore-location", "/tmp/ks"), (USERNAME, "u")],
    );
    assert_eq!(translation.unsupported, vec!["conn-ssl-keystore-location"]);
    assert_eq!(translation.params.len(), 1);
    assert!(translation.params.iter().all(|(_, v)| v != "/tmp/ks"));
}

#[test]
fn test_one_option_to_several_parameters() {
    let translation = translate_for(ClientKind::ArtemisCore, &[("conn-sync-send", "true")]);
    assert_eq!(translation.params.get("blockOnNonDurableSend"), Some("true"));
    assert_eq!(translation.params.get("blockOnDurableSend"), Some("true"));
}

#[test]
fn test_shared_target_last_registered_wins() {
    let translation = translate_for(
        ClientKind::OpenWire,
        &[("conn-tcp-buf-size-recv", "20"), ("conn-tcp-buf-size-send", "10")],
    );
    assert_eq!(translation.params.get("socketBufferSize"), Some("20"));
    assert_eq!(translation.params.len(), 1);
}

// ===== Derivation rules =====

#[test]
fn test_heartbeat_derives_half_and_double_period() {
    let translation = translate_for(ClientKind::ArtemisCore, &[(HEARTBEAT, "4")]);
    assert_eq!(translation.params.get("connectionTTL"), Some("4000"));
    assert_eq!(translation.params.get("clientFailureCheckPeriod"), Some("2000"));
    assert_eq!(translation.params.get("callTimeout"), Some("8000"));
}

#[test]
fn test_derivation_runs_after_direct_mapping() {
    let translation = translate_for(
        ClientKind::ArtemisCore,
        &[(HEARTBEAT, "4"), ("conn-tcp-sock-timeout", "5")],
    );
    assert_eq!(translation.params.get("callTimeout"), Some("8000"));
}

#[test]
fn test_tls_option_enables_tls() {
    let translation = translate_for(
        ClientKind::ArtemisCore,
        &[("conn-ssl-keystore-location", "/etc/ks.jks")],
    );
    assert_eq!(translation.params.get("keyStorePath"), Some("/etc/ks.jks"));
    assert_eq!(translation.params.get("sslEnabled"), Some("true"));

    // a no-op TLS option still counts
    let translation = translate_for(ClientKind::ArtemisCore, &[("conn-ssl-trust-all", "true")]);
    assert_eq!(translation.params.get("sslEnabled"), Some("true"));

    let translation = translate_for(ClientKind::ArtemisCore, &[(USERNAME, "u")]);
    assert!(!translation.params.contains("sslEnabled"));
}

#[test]
fn test_key_alias_alone_does_not_enable_tls() {
    let translation = translate_for(ClientKind::ArtemisCore, &[(KEY_ALIAS, "client")]);
    assert!(translation.params.is_empty());
}

#[test]
fn test_reconnect_rules() {
    let translation = translate_for(ClientKind::ArtemisCore, &[(RECONNECT, "true")]);
    assert_eq!(translation.params.get("reconnectAttempts"), Some("-1"));
    assert_eq!(translation.params.get("initialConnectAttempts"), Some("-1"));

    let translation = translate_for(ClientKind::ArtemisCore, &[(RECONNECT, "false")]);
    assert!(translation.params.is_empty());

    let translation = translate_for(ClientKind::PahoMqtt, &[(RECONNECT, "true")]);
    assert_eq!(translation.params.get("automaticReconnect"), Some("true"));
}

#[test]
fn test_log_bytes_enables_trace() {
    let translation = translate_for(ClientKind::QpidJms, &[(LOG_BYTES, "true")]);
    assert_eq!(translation.params.get("transport.traceBytes"), Some("true"));

    let translation = translate_for(ClientKind::OpenWire, &[(LOG_BYTES, "true")]);
    assert!(translation.params.is_empty());
}

#[test]
fn test_paho_always_cleans_session() {
    let translation = translate_for(ClientKind::PahoMqtt, &[]);
    assert_eq!(translation.params.get("cleanSession"), Some("true"));
}

// ===== URIs and client kinds =====

#[test]
fn test_connection_uri_plain() {
    let (uri, _) = connection_uri(
        "localhost:5672",
        ClientKind::QpidJms,
        &options(&[(USERNAME, "admin"), (HEARTBEAT, "2")]),
    )
    .unwrap();
    assert_eq!(
        uri,
        "amqp://localhost:5672?jms.username=admin&amqp.idleTimeout=2000"
    );
}

#[test]
fn test_connection_uri_failover() {
    let (uri, _) = connection_uri(
        "a:61616,b:61616",
        ClientKind::OpenWire,
        &options(&[(RECONNECT, "true"), ("conn-reconnect-limit", "3")]),
    )
    .unwrap();
    assert_eq!(
        uri,
        "failover:(tcp://a:61616,tcp://b:61616)?maxReconnectAttempts=3"
    );
}

#[test]
fn test_connection_uri_artemis_has_no_failover_wrapper() {
    let (uri, translation) = connection_uri(
        "tcp://h:61616",
        ClientKind::ArtemisCore,
        &options(&[(RECONNECT, "true")]),
    )
    .unwrap();
    assert!(uri.starts_with("tcp://h:61616?"));
    assert_eq!(translation.params.len(), 2);
}

#[test]
fn test_client_kind_parsing() {
    assert_eq!("qpid-jms".parse::<ClientKind>().unwrap(), ClientKind::QpidJms);
    assert_eq!("ACC".parse::<ClientKind>().unwrap(), ClientKind::ArtemisCore);
    assert_eq!("aoc".parse::<ClientKind>().unwrap(), ClientKind::OpenWire);
    assert_eq!("amc".parse::<ClientKind>().unwrap(), ClientKind::PahoMqtt);
    assert!("stomp".parse::<ClientKind>().is_err());
    assert_eq!(ClientKind::OpenWire.to_string(), "openwire");
}
