//! Message types for parsed chat lines.
//!
//! [`RawEvent`] is the direct output of the line parser: the four text fields
//! captured from a matching line, untouched except for the lower-cased am/pm
//! marker. [`Timeline::from_events`](crate::timeline::Timeline::from_events)
//! turns raw events into [`Message`]s with a parsed timestamp.
//!
//! # Example
//!
//! ```
//! use chatlens::Message;
//!
//! let msg = Message::new("Alice", "Hello, world!");
//! assert_eq!(msg.sender(), "Alice");
//! assert_eq!(msg.word_count(), 2);
//! assert!(msg.timestamp().is_none());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A structured event captured from one matching chat-log line.
///
/// Fields are kept as the raw captured text so that timestamp parsing (and
/// its failure mode) stays the responsibility of the timeline builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEvent {
    /// The date field, e.g. `1/1/23`.
    pub date_text: String,

    /// The time field with a lower-cased am/pm marker, e.g. `10:00 am`.
    pub time_text: String,

    /// Display name of the author, exactly as captured (not normalized).
    pub sender: String,

    /// The remainder of the line after the `": "` delimiter. May be empty.
    pub body: String,
}

/// A chat message with an attached (possibly invalid) timestamp.
///
/// `timestamp` is `None` when the date/time fields did not parse. The
/// message is retained regardless, so count-based statistics still see it
/// while every timestamp-based computation naturally skips it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Display name of the message author.
    ///
    /// Case- and whitespace-sensitive: two spellings of the same person are
    /// two senders.
    pub sender: String,

    /// Raw message text. May be empty, may contain embedded colons.
    pub body: String,

    /// When the message was sent, or `None` if the timestamp fields failed
    /// to parse.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Message {
    /// Creates a message with no timestamp.
    pub fn new(sender: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            body: body.into(),
            timestamp: None,
        }
    }

    /// Builder method to attach a timestamp.
    #[must_use]
    pub fn with_timestamp(mut self, ts: DateTime<Utc>) -> Self {
        self.timestamp = Some(ts);
        self
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the timestamp, if it parsed.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }

    /// Number of whitespace-separated tokens in the body. Empty body → 0.
    pub fn word_count(&self) -> usize {
        self.body.split_whitespace().count()
    }

    /// Returns `true` if the trimmed body ends with a question mark.
    pub fn is_question(&self) -> bool {
        self.body.trim().ends_with('?')
    }
}
