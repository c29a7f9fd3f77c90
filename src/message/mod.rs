//! Message output
//!
//! This module turns adapter-filled [`MessageRecord`]s into printed lines:
//! - `body`, `dict` and `interop` layouts in Python-literal syntax
//! - the `interop` layout in JSON
//! - the MQTT field set for [`MqttRecord`]s
//! - `STATS` and connector statistics lines
//!
//! Content can be replaced by its SHA-1 digest to keep large payloads out of
//! the output.

mod layout;
mod mqtt;
mod printer;
mod record;

pub use layout::MessageLayout;
pub use mqtt::MqttRecord;
pub use printer::{LogMsgs, MessagePrinter};
pub use record::{MessageRecord, drop_destination_prefix, remove_id_prefix, subtract_delivery_count};
