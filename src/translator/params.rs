//! Translated connection parameters and broker URI rendering

use indexmap::IndexMap;
use tracing::{trace, warn};
use url::Url;
use url::form_urlencoded;

use crate::error::{Result, TranslateError};

/// Ordered client-specific connection parameters
///
/// Writing a name that is already present replaces its value but keeps its
/// original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionParams {
    params: IndexMap<String, String>,
}

impl ConnectionParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        trace!(param = %name, value = %value, "Parameter set");
        self.params.insert(name, value);
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render as a form-encoded query string
    ///
    /// # Returns
    /// * `String` - `?name=value&...`, or an empty string without parameters
    pub fn to_query(&self) -> String {
        if self.params.is_empty() {
            return String::new();
        }
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish();
        format!("?{encoded}")
    }
}

impl From<ConnectionParams> for IndexMap<String, String> {
    fn from(params: ConnectionParams) -> Self {
        params.params
    }
}

/// Broker address list as given on the command line
///
/// Several brokers may be listed, separated by commas. An address without a
/// scheme gets the client's default scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokerList {
    urls: Vec<String>,
}

impl BrokerList {
    /// Parse a comma-separated broker list
    ///
    /// # Arguments
    /// * `broker` - Broker addresses, e.g. `host:5672,tcp://other:61616`
    /// * `default_scheme` - Scheme prepended where one is missing
    ///
    /// # Returns
    /// * `Result<Self>` - Error if an address is empty or not a valid URL
    pub fn parse(broker: &str, default_scheme: &str) -> Result<Self> {
        let urls = broker
            .split(',')
            .map(str::trim)
            .map(|addr| with_scheme(addr, default_scheme))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { urls })
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    /// Render a connection URI carrying the translated parameters
    ///
    /// With `failover` every broker is wrapped in `failover:(...)`; otherwise
    /// only the first broker is used.
    pub fn to_uri(&self, params: &ConnectionParams, failover: bool) -> String {
        let base = if failover {
            format!("failover:({})", self.urls.join(","))
        } else {
            if self.urls.len() > 1 {
                warn!(
                    ignored = self.urls.len() - 1,
                    "Several brokers given without reconnect, using the first one"
                );
            }
            self.urls.first().cloned().unwrap_or_default()
        };

        let query = params.to_query();
        if query.is_empty() {
            base
        } else if !failover && base.contains('?') {
            format!("{base}&{}", &query[1..])
        } else {
            base + &query
        }
    }
}

fn with_scheme(addr: &str, default_scheme: &str) -> Result<String> {
    if addr.is_empty() {
        return Err(TranslateError::InvalidBroker(addr.to_string()).into());
    }
    let full = if addr.contains("://") {
        addr.to_string()
    } else {
        format!("{default_scheme}://{addr}")
    };
    Url::parse(&full).map_err(|e| TranslateError::InvalidBroker(format!("{addr}: {e}")))?;
    Ok(full)
}
