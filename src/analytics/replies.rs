//! Reply-time aggregation.
//!
//! Walks adjacent message pairs in file order. A pair is a reply event when
//! the sender changes; the delta is attributed to the replier. Deltas over
//! two hours are session gaps, not replies, and are discarded. Pairs with an
//! invalid timestamp on either side have no delta and contribute nothing.

use crate::timeline::Timeline;

use super::table::{Accumulator, MetricTable, RankedTable, round2};

/// Deltas above this threshold are session gaps, not genuine replies.
pub const MAX_REPLY_GAP_SECS: i64 = 2 * 60 * 60;

/// Mean reply time per sender, in minutes rounded to 2 decimals.
///
/// Sorted ascending, fastest replier first. Senders with no qualifying
/// reply event are absent from the table, not listed as zero.
pub fn average_reply_times(timeline: &Timeline) -> MetricTable {
    let mut acc: Accumulator<(f64, u64)> = Accumulator::new();

    for pair in timeline.messages().windows(2) {
        let (prev, msg) = (&pair[0], &pair[1]);
        if msg.sender == prev.sender {
            continue;
        }
        let (Some(prev_ts), Some(ts)) = (prev.timestamp, msg.timestamp) else {
            continue;
        };
        let delta_secs = (ts - prev_ts).num_seconds();
        if delta_secs > MAX_REPLY_GAP_SECS {
            continue;
        }
        let (sum, count) = acc.entry(&msg.sender);
        *sum += delta_secs as f64;
        *count += 1;
    }

    let rows = acc
        .into_table()
        .iter()
        .map(|(sender, (sum, count))| {
            (sender.clone(), round2(*sum / *count as f64 / 60.0))
        })
        .collect();
    RankedTable::new(rows).sorted_asc()
}
