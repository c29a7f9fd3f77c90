//! Property tests for connection-option translation

use mqcli::options::{OptionSet, RECONNECT, connection_options};
use mqcli::translator::{ClientKind, Target, translate};
use proptest::prelude::*;

fn client() -> impl Strategy<Value = ClientKind> {
    prop::sample::select(ClientKind::ALL.to_vec())
}

/// Options whose value the client passes through without conversion
fn verbatim_options(client: ClientKind) -> Vec<&'static str> {
    let table = client.table();
    connection_options()
        .filter(|spec| spec.name != "conn-heartbeat" && spec.name != RECONNECT && !spec.is_tls())
        .map(|spec| spec.name)
        .filter(|name| table.entry(name).is_some())
        .collect()
}

fn supplied(names: &[&'static str], value: &str) -> OptionSet {
    let mut options = OptionSet::new();
    for name in names {
        options.supply(name, value).unwrap();
    }
    options
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn ignored_options_add_no_parameters(
        client in client(),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 0..8),
        value in "[a-zA-Z0-9]{1,8}",
    ) {
        let table = client.table();
        let noops: Vec<_> = verbatim_options(client)
            .into_iter()
            .filter(|name| matches!(table.entry(name).map(|e| e.target), Some(Target::NoOp)))
            .collect();
        prop_assume!(!noops.is_empty());

        let names: Vec<_> = picks.iter().map(|i| *i.get(&noops)).collect();
        let baseline = translate(&OptionSet::new(), table).unwrap();
        let translation = translate(&supplied(&names, &value), table).unwrap();

        prop_assert_eq!(translation.params, baseline.params);
        prop_assert!(translation.unsupported.is_empty());
    }

    #[test]
    fn unsupported_options_are_reported_not_translated(
        client in client(),
        pick in any::<prop::sample::Index>(),
        value in "[a-zA-Z0-9]{1,8}",
    ) {
        let table = client.table();
        let unsupported: Vec<_> = verbatim_options(client)
            .into_iter()
            .filter(|name| matches!(table.entry(name).map(|e| e.target), Some(Target::Unsupported)))
            .collect();
        prop_assume!(!unsupported.is_empty());

        let name = *pick.get(&unsupported);
        let baseline = translate(&OptionSet::new(), table).unwrap();
        let translation = translate(&supplied(&[name], &value), table).unwrap();

        prop_assert_eq!(translation.unsupported, vec![name]);
        prop_assert_eq!(translation.params, baseline.params);
    }

    #[test]
    fn mapped_values_pass_through_verbatim(
        client in client(),
        pick in any::<prop::sample::Index>(),
        value in "[a-zA-Z0-9]{1,8}",
    ) {
        let table = client.table();
        let mapped: Vec<_> = verbatim_options(client)
            .into_iter()
            .filter(|name| matches!(table.entry(name).map(|e| e.target), Some(Target::Params(_))))
            .collect();
        prop_assume!(!mapped.is_empty());

        let name = *pick.get(&mapped);
        let translation = translate(&supplied(&[name], &value), table).unwrap();
        if let Some(Target::Params(params)) = table.entry(name).map(|e| e.target) {
            for param in params {
                prop_assert_eq!(translation.params.get(param), Some(value.as_str()));
            }
        }
    }

    #[test]
    fn heartbeat_seconds_become_millis(secs in 0u32..1_000_000) {
        let options = supplied(&["conn-heartbeat"], &secs.to_string());
        let translation = translate(&options, ClientKind::QpidJms.table()).unwrap();
        let expected = (u64::from(secs) * 1000).to_string();
        prop_assert_eq!(translation.params.get("amqp.idleTimeout"), Some(expected.as_str()));
    }

    #[test]
    fn translation_is_deterministic(client in client(), value in "[0-9]{1,4}") {
        let options = supplied(&["conn-prefetch", "conn-heartbeat"], &value);
        prop_assert_eq!(
            translate(&options, client.table()).unwrap(),
            translate(&options.clone(), client.table()).unwrap()
        );
    }
}
