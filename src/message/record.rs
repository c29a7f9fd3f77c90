//! Protocol-neutral message snapshot and its output layouts

use indexmap::IndexMap;
use serde::Deserialize;

use super::layout::MessageLayout;
use super::printer::LogMsgs;
use crate::formatter::Value;

const ID_PREFIX: &str = "ID:";
const DESTINATION_PREFIXES: [&str; 2] = ["topic://", "queue://"];

/// Everything the printers need from one message
///
/// Filled by the protocol adapter; deserializable so records can also be
/// fed in as JSON. Missing fields take their zero value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct MessageRecord {
    pub durable: bool,
    pub priority: i32,
    pub ttl: i64,
    pub first_acquirer: bool,

    /// Delivery attempt number as counted by JMS (first delivery is 1)
    pub delivery_count: i32,
    pub redelivered: bool,
    pub delivery_time: i64,
    pub id: Option<String>,
    pub user_id: Option<String>,
    pub address: Option<String>,
    pub subject: Option<String>,
    pub reply_to: Option<String>,
    pub correlation_id: Option<String>,
    pub content_type: Option<String>,
    pub content_encoding: Option<String>,
    pub absolute_expiry_time: i64,
    pub creation_time: i64,
    pub group_id: Option<String>,
    pub group_sequence: i64,
    pub reply_to_group_id: Option<String>,
    pub properties: IndexMap<String, Value>,
    pub content: Value,
    #[serde(rename = "type")]
    pub jms_type: Option<String>,
}

impl MessageRecord {
    /// Effective time-to-live
    ///
    /// Expiry minus creation time when both are set, otherwise the explicit
    /// ttl.
    pub fn effective_ttl(&self) -> i64 {
        if self.absolute_expiry_time != 0 && self.creation_time != 0 {
            self.absolute_expiry_time - self.creation_time
        } else {
            self.ttl
        }
    }

    /// `{'content': ...}`
    pub fn to_body(&self, content: Value) -> IndexMap<String, Value> {
        let mut out = IndexMap::new();
        out.insert("content".to_string(), content);
        out
    }

    /// Every known header, property and annotation
    pub fn to_dict(&self, content: Value) -> IndexMap<String, Value> {
        let mut out = self.headers(content);
        out.insert("redelivered".to_string(), self.redelivered.into());
        out.insert("delivery-time".to_string(), self.delivery_time.into());
        out
    }

    /// Fields comparable across protocol clients
    ///
    /// Message, user and correlation ids lose their `ID:` prefix and the
    /// delivery count becomes the number of failed deliveries.
    pub fn to_interop(&self, content: Value) -> IndexMap<String, Value> {
        let mut out = self.headers(content);
        out.insert(
            "user-id".to_string(),
            self.user_id.as_deref().map(remove_id_prefix).into(),
        );
        out.insert(
            "delivery-count".to_string(),
            subtract_delivery_count(self.delivery_count).into(),
        );
        out.insert("first-acquirer".to_string(), self.first_acquirer.into());
        out
    }

    fn headers(&self, content: Value) -> IndexMap<String, Value> {
        let text = |s: &Option<String>| Value::from(s.clone());
        let address = |s: &Option<String>| Value::from(s.as_deref().map(drop_destination_prefix));
        let id = |s: &Option<String>| Value::from(s.as_deref().map(remove_id_prefix));

        let fields: [(&str, Value); 19] = [
            ("durable", self.durable.into()),
            ("priority", self.priority.into()),
            ("ttl", self.effective_ttl().into()),
            ("id", id(&self.id)),
            ("user-id", text(&self.user_id)),
            ("address", address(&self.address)),
            ("subject", text(&self.subject)),
            ("reply-to", address(&self.reply_to)),
            ("correlation-id", id(&self.correlation_id)),
            ("content-type", text(&self.content_type)),
            ("content-encoding", text(&self.content_encoding)),
            ("absolute-expiry-time", self.absolute_expiry_time.into()),
            ("creation-time", self.creation_time.into()),
            ("group-id", text(&self.group_id)),
            ("group-sequence", self.group_sequence.into()),
            ("reply-to-group-id", text(&self.reply_to_group_id)),
            ("properties", Value::Map(self.properties.clone())),
            ("content", content),
            ("type", text(&self.jms_type)),
        ];
        fields
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }
}

impl MessageLayout for MessageRecord {
    fn content(&self) -> Value {
        self.content.clone()
    }

    /// `json` prints the interop field set in JSON syntax
    fn fields(&self, log_msgs: LogMsgs, content: Value) -> IndexMap<String, Value> {
        match log_msgs {
            LogMsgs::Body => self.to_body(content),
            LogMsgs::Interop | LogMsgs::Json => self.to_interop(content),
            LogMsgs::Dict | LogMsgs::None => self.to_dict(content),
        }
    }
}

/// Strip a leading `ID:` from a JMS identifier
pub fn remove_id_prefix(id: &str) -> &str {
    id.strip_prefix(ID_PREFIX).unwrap_or(id)
}

/// Convert a JMS delivery count (attempt number) to failed attempts
pub fn subtract_delivery_count(count: i32) -> i32 {
    if count > 0 { count - 1 } else { count }
}

/// Strip a leading `topic://` or `queue://` from a destination
pub fn drop_destination_prefix(destination: &str) -> &str {
    DESTINATION_PREFIXES
        .iter()
        .find_map(|prefix| destination.strip_prefix(prefix))
        .unwrap_or(destination)
}
