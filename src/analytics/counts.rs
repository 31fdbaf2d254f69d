//! Message and word counting aggregations.

use crate::timeline::Timeline;

use super::table::{Accumulator, CountTable, MetricTable, RankedTable};

/// Messages per sender, descending.
pub fn message_counts(timeline: &Timeline) -> CountTable {
    let mut acc: Accumulator<u64> = Accumulator::new();
    for msg in timeline.messages() {
        *acc.entry(&msg.sender) += 1;
    }
    acc.into_table().sorted_desc()
}

/// Whitespace-token counts summed per sender, descending.
pub fn word_counts(timeline: &Timeline) -> CountTable {
    let mut acc: Accumulator<u64> = Accumulator::new();
    for msg in timeline.messages() {
        *acc.entry(&msg.sender) += msg.word_count() as u64;
    }
    acc.into_table().sorted_desc()
}

/// Mean words per message for each sender, descending.
///
/// Full floating precision; rendering is responsible for any rounding.
pub fn average_message_length(timeline: &Timeline) -> MetricTable {
    let mut acc: Accumulator<(u64, u64)> = Accumulator::new();
    for msg in timeline.messages() {
        let (words, messages) = acc.entry(&msg.sender);
        *words += msg.word_count() as u64;
        *messages += 1;
    }
    let rows = acc
        .into_table()
        .iter()
        .map(|(sender, (words, messages))| {
            (sender.clone(), *words as f64 / *messages as f64)
        })
        .collect();
    RankedTable::new(rows).sorted_desc()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timeline() -> Timeline {
        Timeline::from_lines([
            "1/1/23, 10:00 am - Alice: one two three",
            "1/1/23, 10:01 am - Bob: one",
            "1/1/23, 10:02 am - Alice: one two",
        ])
    }

    #[test]
    fn test_message_counts() {
        let table = message_counts(&timeline());
        assert_eq!(table.rows(), &[("Alice".into(), 2), ("Bob".into(), 1)]);
    }

    #[test]
    fn test_word_counts() {
        let table = word_counts(&timeline());
        assert_eq!(table.get("Alice"), Some(5));
        assert_eq!(table.get("Bob"), Some(1));
    }

    #[test]
    fn test_counts_include_invalid_timestamps() {
        // A bad year drops the timestamp but not the message.
        let timeline = Timeline::from_lines([
            "1/1/2023, 10:00 am - Alice: still counted",
            "1/1/23, 10:01 am - Alice: fine",
        ]);
        assert_eq!(message_counts(&timeline).get("Alice"), Some(2));
        assert_eq!(word_counts(&timeline).get("Alice"), Some(3));
    }

    #[test]
    fn test_average_message_length() {
        let table = average_message_length(&timeline());
        assert!((table.get("Alice").unwrap() - 2.5).abs() < f64::EPSILON);
        assert!((table.get("Bob").unwrap() - 1.0).abs() < f64::EPSILON);
        // Descending: Alice first.
        assert_eq!(table.rows()[0].0, "Alice");
    }

    #[test]
    fn test_empty_timeline_yields_empty_tables() {
        let timeline = Timeline::from_lines([]);
        assert!(message_counts(&timeline).is_empty());
        assert!(word_counts(&timeline).is_empty());
        assert!(average_message_length(&timeline).is_empty());
    }
}
