//! Engagement scores: question extenders and positivity.
//!
//! Both are percentages of a sender's own messages, so they land in
//! [0, 100] for every sender with at least one message.

use crate::sentiment::SentimentScorer;
use crate::timeline::Timeline;

use super::table::{Accumulator, MetricTable, RankedTable, round2};

/// Share of a sender's messages that end with `?`, as a percentage rounded
/// to 2 decimals, descending.
pub fn extender_scores(timeline: &Timeline) -> MetricTable {
    ratio_scores(timeline, |timeline| {
        timeline
            .messages()
            .iter()
            .map(|msg| msg.is_question())
            .collect()
    })
}

/// Share of a sender's messages with positive sentiment polarity, as a
/// percentage rounded to 2 decimals, descending.
///
/// Polarity comes from the pluggable [`SentimentScorer`]; only strictly
/// positive scores count.
pub fn positivity_scores(timeline: &Timeline, scorer: &dyn SentimentScorer) -> MetricTable {
    ratio_scores(timeline, |timeline| {
        timeline
            .messages()
            .iter()
            .map(|msg| scorer.score(&msg.body) > 0.0)
            .collect()
    })
}

/// Shared numerator/denominator accounting for percentage scores.
fn ratio_scores<F>(timeline: &Timeline, qualifies: F) -> MetricTable
where
    F: Fn(&Timeline) -> Vec<bool>,
{
    let flags = qualifies(timeline);
    let mut acc: Accumulator<(u64, u64)> = Accumulator::new();
    for (msg, flag) in timeline.messages().iter().zip(flags) {
        let (hits, total) = acc.entry(&msg.sender);
        if flag {
            *hits += 1;
        }
        *total += 1;
    }

    let rows = acc
        .into_table()
        .iter()
        // A zero total cannot happen for a sender derived from the messages
        // themselves; guard anyway rather than divide by zero.
        .filter(|(_, (_, total))| *total > 0)
        .map(|(sender, (hits, total))| {
            (sender.clone(), round2(*hits as f64 / *total as f64 * 100.0))
        })
        .collect();
    RankedTable::new(rows).sorted_desc()
}
