//! Line parser for WhatsApp TXT exports.
//!
//! A line matches iff it has the shape
//!
//! ```text
//! D/D/Y, H:MM AM|PM - SENDER: BODY
//! ```
//!
//! where the day and month are 1–2 digits, the year 2 or 4 digits, the hour
//! 1–2 digits, and the am/pm marker case-insensitive with an optional leading
//! space. SENDER is the shortest text up to the first `": "` after the dash;
//! BODY is the remainder of the line.
//!
//! Lines that do not match, such as system notices ("Messages and calls are
//! end-to-end encrypted…"), continuation lines of multi-line messages, and
//! empty lines, produce no event and are dropped silently. Continuations are NOT
//! reassembled onto the previous message; per-sender word and message totals
//! undercount multi-line messages accordingly.

use std::sync::LazyLock;

use regex::Regex;

use crate::message::RawEvent;

/// Anchored pattern for a message line. Groups: date, time, am/pm, sender, body.
const LINE_PATTERN: &str =
    r"^(\d{1,2}/\d{1,2}/\d{2,4}), (\d{1,2}:\d{2})\s?([AaPp][Mm]) - (.*?): (.*)";

static LINE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(LINE_PATTERN).unwrap());

/// Parses one raw log line into a structured event.
///
/// Returns `None` for any line that does not match the grammar. Pure
/// function, no side effects.
///
/// # Example
///
/// ```
/// use chatlens::parsing::parse_line;
///
/// let event = parse_line("1/1/23, 10:00 am - Alice: Hi").unwrap();
/// assert_eq!(event.sender, "Alice");
/// assert_eq!(event.body, "Hi");
/// assert_eq!(event.time_text, "10:00 am");
///
/// assert!(parse_line("not a chat line").is_none());
/// ```
pub fn parse_line(raw: &str) -> Option<RawEvent> {
    let caps = LINE_RE.captures(raw)?;

    let date_text = caps.get(1).map_or("", |m| m.as_str()).to_string();
    let time = caps.get(2).map_or("", |m| m.as_str());
    let marker = caps.get(3).map_or("", |m| m.as_str()).to_lowercase();
    let sender = caps.get(4).map_or("", |m| m.as_str()).to_string();
    let body = caps.get(5).map_or("", |m| m.as_str()).to_string();

    Some(RawEvent {
        date_text,
        time_text: format!("{time} {marker}"),
        sender,
        body,
    })
}

/// Parses a sequence of lines, dropping everything that does not match.
pub fn parse_lines<'a, I>(lines: I) -> Vec<RawEvent>
where
    I: IntoIterator<Item = &'a str>,
{
    lines.into_iter().filter_map(parse_line).collect()
}
