//! MQTT message snapshot
//!
//! MQTT messages carry no JMS headers, so they print a small field set of
//! their own. The payload is raw bytes and prints as UTF-8 text.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

use super::layout::MessageLayout;
use super::printer::LogMsgs;
use crate::formatter::Value;

/// One received or sent MQTT message
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MqttRecord {
    pub qos: i32,

    /// Raw payload; JSON input may give it as a string or a byte array
    #[serde(deserialize_with = "payload_bytes")]
    pub payload: Vec<u8>,
    pub duplicate: bool,
    pub retained: bool,

    /// Topic the message was published to
    pub address: Option<String>,
}

impl MqttRecord {
    /// `{'content': payload}`
    pub fn to_body(&self, content: Value) -> IndexMap<String, Value> {
        let mut out = IndexMap::new();
        out.insert("content".to_string(), content);
        out
    }

    /// `{'qos': .., 'payload': .., 'duplicate': .., 'retained': .., 'address': ..}`
    pub fn to_dict(&self, content: Value) -> IndexMap<String, Value> {
        let mut out = IndexMap::new();
        out.insert("qos".to_string(), self.qos.into());
        out.insert("payload".to_string(), content);
        out.insert("duplicate".to_string(), self.duplicate.into());
        out.insert("retained".to_string(), self.retained.into());
        out.insert("address".to_string(), self.address.clone().into());
        out
    }
}

impl MessageLayout for MqttRecord {
    fn content(&self) -> Value {
        Value::Bytes(self.payload.clone())
    }

    fn fields(&self, log_msgs: LogMsgs, content: Value) -> IndexMap<String, Value> {
        match log_msgs {
            LogMsgs::Body => self.to_body(content),
            LogMsgs::Dict | LogMsgs::Interop | LogMsgs::Json | LogMsgs::None => {
                self.to_dict(content)
            }
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Payload {
    Text(String),
    Bytes(Vec<u8>),
}

fn payload_bytes<'de, D>(deserializer: D) -> std::result::Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Payload::deserialize(deserializer)? {
        Payload::Text(text) => text.into_bytes(),
        Payload::Bytes(bytes) => bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dict_layout() {
        let rec = MqttRecord {
            qos: 1,
            payload: b"hi".to_vec(),
            retained: true,
            address: Some("sensors/t1".to_string()),
            ..Default::default()
        };
        let dict = rec.fields(LogMsgs::Dict, rec.content());
        let keys: Vec<&str> = dict.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["qos", "payload", "duplicate", "retained", "address"]);
        assert_eq!(dict["payload"], Value::Bytes(b"hi".to_vec()));

        // interop has no MQTT-specific meaning
        assert_eq!(rec.fields(LogMsgs::Interop, rec.content()), dict);
    }

    #[test]
    fn test_body_layout() {
        let rec = MqttRecord {
            payload: b"x".to_vec(),
            ..Default::default()
        };
        let body = rec.fields(LogMsgs::Body, rec.content());
        assert_eq!(body.len(), 1);
        assert_eq!(body["content"], Value::Bytes(b"x".to_vec()));
    }

    #[test]
    fn test_deserialize_payload_forms() {
        let rec: MqttRecord =
            serde_json::from_str(r#"{"qos": 2, "payload": "temp=21", "address": "t"}"#).unwrap();
        assert_eq!(rec.payload, b"temp=21".to_vec());
        assert_eq!(rec.qos, 2);

        let rec: MqttRecord = serde_json::from_str(r#"{"payload": [104, 105]}"#).unwrap();
        assert_eq!(rec.payload, b"hi".to_vec());
        assert!(!rec.duplicate);
        assert_eq!(rec.address, None);
    }
}
