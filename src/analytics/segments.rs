//! Conversation segmenter.
//!
//! Classifies message boundaries into conversation starts and ends using a
//! fixed inactivity threshold. Unlike the pairwise aggregations, the
//! segmenter re-sorts by timestamp before computing gaps.
//!
//! For messages in timestamp order:
//!
//! - `is_start[i]` is true when `i == 0`, or the gap to message `i - 1` exceeds the
//!   threshold. Gaps involving an invalid timestamp are undefined and
//!   compare false.
//! - `is_end[i]` copies `is_start[i + 1]`; the last message is defined false.

use crate::message::Message;
use crate::timeline::Timeline;

use super::table::{Accumulator, CountTable};

/// Inactivity gap, in seconds, that opens a new conversation.
pub const CONVERSATION_GAP_SECS: i64 = 30 * 60;

/// Start/end flags aligned with a timestamp-sorted message slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationFlags {
    /// `starts[i]` is true when message `i` opens a conversation.
    pub starts: Vec<bool>,
    /// `ends[i]` is true when message `i` is the last of its conversation.
    pub ends: Vec<bool>,
}

/// Computes start/end flags for messages already in timestamp order.
pub fn conversation_flags(sorted: &[&Message]) -> ConversationFlags {
    let n = sorted.len();
    let mut starts = vec![false; n];

    for i in 0..n {
        if i == 0 {
            starts[i] = true;
            continue;
        }
        // Undefined gaps (either timestamp invalid) never open a conversation.
        if let (Some(prev), Some(ts)) = (sorted[i - 1].timestamp, sorted[i].timestamp) {
            starts[i] = (ts - prev).num_seconds() > CONVERSATION_GAP_SECS;
        }
    }

    let mut ends = vec![false; n];
    for i in 0..n.saturating_sub(1) {
        ends[i] = starts[i + 1];
    }
    // ends[n - 1] stays false: the last message never closes a conversation
    // under this definition.

    ConversationFlags { starts, ends }
}

/// Conversation-opening message counts per sender, descending.
pub fn conversation_starters(timeline: &Timeline) -> CountTable {
    let sorted = timeline.sorted_by_time();
    let flags = conversation_flags(&sorted);
    count_flagged(&sorted, &flags.starts)
}

/// Conversation-closing message counts per sender, descending.
pub fn conversation_enders(timeline: &Timeline) -> CountTable {
    let sorted = timeline.sorted_by_time();
    let flags = conversation_flags(&sorted);
    count_flagged(&sorted, &flags.ends)
}

fn count_flagged(sorted: &[&Message], flags: &[bool]) -> CountTable {
    let mut acc: Accumulator<u64> = Accumulator::new();
    for (msg, &flagged) in sorted.iter().zip(flags) {
        if flagged {
            *acc.entry(&msg.sender) += 1;
        }
    }
    acc.into_table().sorted_desc()
}
