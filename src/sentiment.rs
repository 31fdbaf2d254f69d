//! Pluggable sentiment scoring.
//!
//! The positivity aggregation only needs a polarity for each message body;
//! the algorithm behind that number is deliberately swappable. Implement
//! [`SentimentScorer`] to plug in any other library or model without
//! touching the aggregation engine.

/// Capability interface for message-level sentiment.
pub trait SentimentScorer: Send + Sync {
    /// Polarity of `text` in `[-1.0, 1.0]`; positive means favorable tone.
    ///
    /// Text with no scorable signal returns `0.0`.
    fn score(&self, text: &str) -> f64;
}

/// Valence word list for the built-in scorer.
const POSITIVE_WORDS: &[&str] = &[
    "amazing", "awesome", "beautiful", "best", "better", "brilliant", "celebrate", "cool",
    "delicious", "enjoy", "enjoyed", "excellent", "excited", "exciting", "fantastic", "fun",
    "glad", "good", "grateful", "great", "happy", "hilarious", "interesting", "kind", "laugh",
    "like", "liked", "love", "loved", "lovely", "nice", "perfect", "pleased", "proud", "sweet",
    "thanks", "thank", "wonderful", "wow", "yay", "yes",
];

const NEGATIVE_WORDS: &[&str] = &[
    "angry", "annoyed", "annoying", "awful", "bad", "boring", "broke", "broken", "cry",
    "disappointed", "disappointing", "dreadful", "fail", "failed", "hate", "hated", "horrible",
    "hurt", "lame", "lost", "mad", "mess", "miserable", "pain", "poor", "sad", "scared",
    "sick", "sorry", "terrible", "tired", "ugly", "unhappy", "upset", "worse", "worst",
    "worried", "wrong",
];

/// Tokens that flip the valence of the following word.
const NEGATORS: &[&str] = &["not", "no", "never", "isnt", "dont", "didnt", "cant", "wont"];

/// Built-in lexicon-based scorer.
///
/// Averages the valence (+1/-1) of known words, flipping the sign after a
/// negator. Crude by design: any message with more positive than negative
/// signal scores above zero, which is all the positivity aggregation
/// consumes.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconScorer;

impl LexiconScorer {
    /// Creates the default scorer.
    pub fn new() -> Self {
        Self
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> f64 {
        let tokens: Vec<String> = text
            .split_whitespace()
            .map(|raw| {
                raw.trim_matches(|c: char| !c.is_alphanumeric())
                    .chars()
                    .filter(|c| *c != '\'')
                    .collect::<String>()
                    .to_lowercase()
            })
            .collect();

        let mut total = 0.0_f64;
        let mut scored = 0u32;

        for (i, token) in tokens.iter().enumerate() {
            let valence = if POSITIVE_WORDS.contains(&token.as_str()) {
                1.0
            } else if NEGATIVE_WORDS.contains(&token.as_str()) {
                -1.0
            } else {
                continue;
            };

            let negated = i > 0 && NEGATORS.contains(&tokens[i - 1].as_str());
            total += if negated { -valence } else { valence };
            scored += 1;
        }

        if scored == 0 {
            0.0
        } else {
            total / f64::from(scored)
        }
    }
}
