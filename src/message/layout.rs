//! Field sets printed for each `--log-msgs` mode

use indexmap::IndexMap;

use super::printer::LogMsgs;
use crate::formatter::Value;

/// A message that knows which fields each print mode shows
pub trait MessageLayout {
    /// Message content as the receiver got it
    fn content(&self) -> Value;

    /// Fields for `log_msgs`, carrying `content` as the message content
    ///
    /// # Arguments
    /// * `log_msgs` - Print mode; [`LogMsgs::None`] is filtered out by the printer
    /// * `content` - Content to print, possibly already replaced by its hash
    fn fields(&self, log_msgs: LogMsgs, content: Value) -> IndexMap<String, Value>;
}
