//! End-to-end pipeline tests: raw lines through features to result tables.

use chatlens::analytics::TOP_PHRASES;
use chatlens::prelude::*;

const SAMPLE: &str = "\
1/1/23, 10:00 am - Alice: Hi
1/1/23, 10:05 am - Bob: Hello
not a chat line
1/1/23, 10:06 am - Alice: Are you coming?
1/1/23, 10:07 am - Bob: Yes.
1/1/23, 11:00 am - Alice: New topic after a break";

fn timeline() -> Timeline {
    Timeline::from_lines(SAMPLE.lines())
}

fn scorer() -> LexiconScorer {
    LexiconScorer::new()
}

#[test]
fn message_counts_equal_parsed_lines() {
    let timeline = timeline();
    // The noise line parsed to nothing; five lines matched.
    assert_eq!(timeline.len(), 5);

    let FeatureReport::Counts(table) = Feature::TotalMessages.compute(&timeline, &scorer())
    else {
        panic!("expected counts");
    };
    let total: u64 = table.iter().map(|(_, c)| c).sum();
    assert_eq!(total, 5);
    assert_eq!(table.get("Alice"), Some(3));
    assert_eq!(table.get("Bob"), Some(2));
}

#[test]
fn unmatched_lines_reach_no_aggregation() {
    let FeatureReport::Counts(table) = Feature::TotalMessages.compute(&timeline(), &scorer())
    else {
        panic!("expected counts");
    };
    // The dropped line's text never becomes a sender.
    assert!(table.get("not a chat line").is_none());
}

#[test]
fn reply_time_five_minutes() {
    let timeline = Timeline::from_lines([
        "1/1/23, 10:00 am - Alice: Hi",
        "1/1/23, 10:05 am - Bob: Hello",
    ]);
    let FeatureReport::Metrics(table) =
        Feature::AverageReplyTime.compute(&timeline, &scorer())
    else {
        panic!("expected metrics");
    };
    assert_eq!(table.get("Bob"), Some(5.0));
    // Alice has no qualifying reply event: excluded, not zero.
    assert!(table.get("Alice").is_none());
}

#[test]
fn forty_minute_gap_marks_starter_and_ender() {
    let timeline = Timeline::from_lines([
        "1/1/23, 10:00 am - Alice: Hi",
        "1/1/23, 10:40 am - Bob: Anyone here?",
    ]);

    let FeatureReport::Counts(starters) =
        Feature::ConversationStarters.compute(&timeline, &scorer())
    else {
        panic!("expected counts");
    };
    // Bob via the gap rule, Alice via the first-message rule.
    assert_eq!(starters.get("Bob"), Some(1));
    assert_eq!(starters.get("Alice"), Some(1));

    let FeatureReport::Counts(enders) =
        Feature::ConversationEnders.compute(&timeline, &scorer())
    else {
        panic!("expected counts");
    };
    assert_eq!(enders.get("Alice"), Some(1));
    // The last message in timestamp order is never an ender.
    assert!(enders.get("Bob").is_none());
}

#[test]
fn extender_counts_question_bodies_only() {
    let FeatureReport::Metrics(table) = Feature::ExtenderScore.compute(&timeline(), &scorer())
    else {
        panic!("expected metrics");
    };
    // Alice: 1 question of 3 messages; Bob: 0 of 2.
    assert!((table.get("Alice").unwrap() - 33.33).abs() < 1e-9);
    assert!((table.get("Bob").unwrap() - 0.0).abs() < f64::EPSILON);
}

#[test]
fn word_counts_match_whitespace_tokens() {
    let FeatureReport::Counts(table) = Feature::TotalWords.compute(&timeline(), &scorer())
    else {
        panic!("expected counts");
    };
    // Alice: "Hi" (1) + "Are you coming?" (3) + "New topic after a break" (5).
    assert_eq!(table.get("Alice"), Some(9));
    // Bob: "Hello" (1) + "Yes." (1).
    assert_eq!(table.get("Bob"), Some(2));
}

#[test]
fn pipeline_is_idempotent() {
    let timeline = timeline();
    let scorer = scorer();
    for feature in Feature::all() {
        let first = feature.compute(&timeline, &scorer);
        let second = feature.compute(&timeline, &scorer);
        assert_eq!(first, second, "{feature} is not idempotent");
    }
}

#[test]
fn word_cloud_returns_joined_corpora() {
    let FeatureReport::Corpora(corpora) = Feature::WordCloud.compute(&timeline(), &scorer())
    else {
        panic!("expected corpora");
    };
    let alice = corpora.iter().find(|(s, _)| s == "Alice").unwrap();
    assert_eq!(alice.1, "Hi Are you coming? New topic after a break");
}

#[test]
fn common_phrases_sorted_and_capped() {
    let timeline = Timeline::from_lines([
        "1/1/23, 10:00 am - Alice: lunch plans today",
        "1/1/23, 10:01 am - Bob: lunch plans sound good",
        "1/1/23, 10:02 am - Alice: lunch plans confirmed",
    ]);
    let FeatureReport::Phrases(table) = Feature::CommonPhrases.compute(&timeline, &scorer())
    else {
        panic!("expected phrases");
    };
    assert_eq!(table.rows()[0].0, "lunch plans");
    assert_eq!(table.get("lunch plans"), Some(3));
    assert!(table.len() <= TOP_PHRASES);
}

#[test]
fn positivity_lies_within_percent_range() {
    let FeatureReport::Metrics(table) = Feature::Positivity.compute(&timeline(), &scorer())
    else {
        panic!("expected metrics");
    };
    for (_, score) in table.iter() {
        assert!((0.0..=100.0).contains(score));
    }
}

#[test]
fn empty_input_degrades_to_empty_tables() {
    let timeline = Timeline::from_lines([]);
    let scorer = scorer();
    for feature in Feature::all() {
        match feature.compute(&timeline, &scorer) {
            FeatureReport::Counts(t) => assert!(t.is_empty()),
            FeatureReport::Metrics(t) => assert!(t.is_empty()),
            FeatureReport::Phrases(t) => assert!(t.is_empty()),
            FeatureReport::Corpora(c) => assert!(c.is_empty()),
            FeatureReport::MessagesAndWords { messages, words } => {
                assert!(messages.is_empty());
                assert!(words.is_empty());
            }
        }
    }
}
