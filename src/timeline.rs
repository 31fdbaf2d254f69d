//! Chat timeline assembly.
//!
//! [`Timeline`] holds parsed messages in file order, the order the export
//! listed them. Timestamps are parsed here with the fixed format
//! `%d/%m/%y %I:%M %p`; a failure (a 4-digit year, a nonsense date) yields
//! `timestamp = None` and the message is kept, never dropped.
//!
//! File order and timestamp order can disagree in real exports. Aggregations
//! that walk adjacent pairs in file order (reply time) and the conversation
//! segmenter (which re-sorts by timestamp first) deliberately consume
//! different orderings; see [`Timeline::sorted_by_time`].

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::message::{Message, RawEvent};
use crate::parsing::parse_lines;

/// Datetime format for the combined `date_text` + `time_text` fields.
const TIMESTAMP_FORMAT: &str = "%d/%m/%y %I:%M %p";

/// Parse a timestamp from the raw date and time fields.
///
/// Returns `None` on failure, the invalid-timestamp sentinel.
pub fn parse_timestamp(date_text: &str, time_text: &str) -> Option<DateTime<Utc>> {
    let datetime_str = format!("{date_text} {time_text}");
    NaiveDateTime::parse_from_str(&datetime_str, TIMESTAMP_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

/// An ordered sequence of chat messages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    messages: Vec<Message>,
}

impl Timeline {
    /// Builds a timeline from parsed raw events, in the given order.
    ///
    /// No deduplication: identical timestamp+sender+body triples are kept as
    /// separate entries; a sender can legitimately send the same text twice.
    pub fn from_events<I>(events: I) -> Self
    where
        I: IntoIterator<Item = RawEvent>,
    {
        let messages = events
            .into_iter()
            .map(|event| Message {
                timestamp: parse_timestamp(&event.date_text, &event.time_text),
                sender: event.sender,
                body: event.body,
            })
            .collect();
        Self { messages }
    }

    /// Convenience composition of the line parser and the builder.
    pub fn from_lines<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self::from_events(parse_lines(lines))
    }

    /// Messages in file order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` if no lines matched the grammar.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Messages stably sorted by timestamp ascending.
    ///
    /// Invalid timestamps order last; ties keep file order. Used by the
    /// conversation segmenter.
    pub fn sorted_by_time(&self) -> Vec<&Message> {
        let mut sorted: Vec<&Message> = self.messages.iter().collect();
        sorted.sort_by(|a, b| match (a.timestamp, b.timestamp) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
        sorted
    }

    /// Distinct senders in first-appearance order.
    pub fn senders(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for msg in &self.messages {
            if !seen.contains(&msg.sender.as_str()) {
                seen.push(&msg.sender);
            }
        }
        seen
    }
}
