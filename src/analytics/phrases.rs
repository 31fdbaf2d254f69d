//! Word-cloud corpora and common-phrase extraction.

use std::collections::HashMap;

use crate::timeline::Timeline;

use super::table::RankedTable;

/// Phrase → occurrence count.
pub type PhraseTable = RankedTable<u64>;

/// How many phrases [`common_phrases`] keeps.
pub const TOP_PHRASES: usize = 20;

/// Tokens ignored when extracting phrases.
const STOP_WORDS: &[&str] = &[
    "a", "about", "after", "all", "am", "an", "and", "any", "are", "as", "at", "be", "been",
    "but", "by", "can", "could", "did", "do", "does", "for", "from", "had", "has", "have",
    "he", "her", "him", "his", "how", "i", "if", "in", "is", "it", "its", "just", "me", "my",
    "no", "not", "of", "on", "or", "our", "she", "so", "some", "than", "that", "the", "their",
    "them", "then", "there", "they", "this", "to", "up", "was", "we", "were", "what", "when",
    "which", "who", "will", "with", "would", "you", "your",
];

/// Per-sender corpora for external word-cloud rendering.
///
/// Each entry is the sender's message bodies joined with single spaces, in
/// first-appearance order. Not a numeric result; consumed by an image
/// renderer outside the core.
pub fn word_cloud_corpora(timeline: &Timeline) -> Vec<(String, String)> {
    timeline
        .senders()
        .iter()
        .map(|&sender| {
            let corpus = timeline
                .messages()
                .iter()
                .filter(|msg| msg.sender == sender)
                .map(|msg| msg.body.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            (sender.to_string(), corpus)
        })
        .collect()
}

/// The most frequent bigrams and trigrams across the whole chat.
///
/// The corpus is every non-empty body joined together; stop words are
/// removed before n-grams are formed. Frequencies are summed over both
/// n-gram lengths, sorted descending (count ties break alphabetically for a
/// stable table) and truncated to [`TOP_PHRASES`].
pub fn common_phrases(timeline: &Timeline) -> PhraseTable {
    let corpus = timeline
        .messages()
        .iter()
        .filter(|msg| !msg.body.is_empty())
        .map(|msg| msg.body.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    let tokens = tokenize(&corpus);
    let mut counts: HashMap<String, u64> = HashMap::new();
    for n in [2, 3] {
        for window in tokens.windows(n) {
            *counts.entry(window.join(" ")).or_insert(0) += 1;
        }
    }

    let mut rows: Vec<(String, u64)> = counts.into_iter().collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    RankedTable::new(rows).truncated(TOP_PHRASES)
}

/// Lower-cased tokens with surrounding punctuation stripped and stop words
/// removed.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|raw| {
            raw.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|token| !token.is_empty() && !STOP_WORDS.contains(&token.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_strips_punctuation_and_stop_words() {
        let tokens = tokenize("The quick, brown fox is here!");
        assert_eq!(tokens, vec!["quick", "brown", "fox", "here"]);
    }

    #[test]
    fn test_word_cloud_corpora() {
        let timeline = Timeline::from_lines([
            "1/1/23, 10:00 am - Alice: good morning",
            "1/1/23, 10:01 am - Bob: hey",
            "1/1/23, 10:02 am - Alice: coffee time",
        ]);
        let corpora = word_cloud_corpora(&timeline);
        assert_eq!(
            corpora,
            vec![
                ("Alice".to_string(), "good morning coffee time".to_string()),
                ("Bob".to_string(), "hey".to_string()),
            ]
        );
    }

    #[test]
    fn test_common_phrases_counts_repeats() {
        let timeline = Timeline::from_lines([
            "1/1/23, 10:00 am - Alice: good morning everyone",
            "1/1/23, 10:01 am - Bob: good morning",
            "1/1/23, 10:02 am - Alice: good morning again",
        ]);
        let table = common_phrases(&timeline);
        assert_eq!(table.get("good morning"), Some(3));
        // Top row is the most frequent phrase.
        assert_eq!(table.rows()[0].0, "good morning");
    }

    #[test]
    fn test_common_phrases_truncates() {
        let lines: Vec<String> = (0..60)
            .map(|i| format!("1/1/23, 10:00 am - Alice: alpha{i} beta{i} gamma{i}"))
            .collect();
        let timeline = Timeline::from_lines(lines.iter().map(String::as_str));
        let table = common_phrases(&timeline);
        assert!(table.len() <= TOP_PHRASES);
    }

    #[test]
    fn test_empty_bodies_ignored() {
        let timeline = Timeline::from_lines([
            "1/1/23, 10:00 am - Alice: ",
            "1/1/23, 10:01 am - Bob: ",
        ]);
        assert!(common_phrases(&timeline).is_empty());
    }

    #[test]
    fn test_empty_timeline() {
        let timeline = Timeline::from_lines([]);
        assert!(common_phrases(&timeline).is_empty());
        assert!(word_cloud_corpora(&timeline).is_empty());
    }
}
