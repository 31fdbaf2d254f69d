//! Aggregation engine and feature registry.
//!
//! Every aggregation is a pure function over a built [`Timeline`]; the
//! [`Feature`] enum is the closed registry mapping a stable feature name to
//! one computation. Selection state belongs to whatever presentation layer
//! sits on top; the core only computes.
//!
//! # Example
//!
//! ```
//! use chatlens::analytics::{Feature, FeatureReport};
//! use chatlens::sentiment::LexiconScorer;
//! use chatlens::timeline::Timeline;
//!
//! let timeline = Timeline::from_lines([
//!     "1/1/23, 10:00 am - Alice: Hi",
//!     "1/1/23, 10:05 am - Bob: Hello",
//! ]);
//! let report = Feature::TotalMessages.compute(&timeline, &LexiconScorer::new());
//! match report {
//!     FeatureReport::Counts(table) => assert_eq!(table.get("Alice"), Some(1)),
//!     _ => unreachable!(),
//! }
//! ```

pub mod counts;
pub mod engagement;
pub mod phrases;
pub mod replies;
pub mod segments;
pub mod table;

pub use counts::{average_message_length, message_counts, word_counts};
pub use engagement::{extender_scores, positivity_scores};
pub use phrases::{PhraseTable, TOP_PHRASES, common_phrases, word_cloud_corpora};
pub use replies::{MAX_REPLY_GAP_SECS, average_reply_times};
pub use segments::{
    CONVERSATION_GAP_SECS, ConversationFlags, conversation_enders, conversation_flags,
    conversation_starters,
};
pub use table::{CountTable, MetricTable, RankedTable};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::sentiment::SentimentScorer;
use crate::timeline::Timeline;

/// The closed set of computable features.
///
/// The variant names are a stable contract for any UI reimplementation;
/// [`ReplySpeed`](Feature::ReplySpeed) is a deliberate duplicate of
/// [`AverageReplyTime`](Feature::AverageReplyTime).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
pub enum Feature {
    /// Message counts and word counts per sender, both tables.
    TotalMessagesAndWords,
    /// Messages per sender.
    TotalMessages,
    /// Words per sender.
    TotalWords,
    /// Mean reply latency per sender, in minutes.
    AverageReplyTime,
    /// Who opens conversations after an inactivity gap.
    ConversationStarters,
    /// Who sends the last message before an inactivity gap.
    ConversationEnders,
    /// Mean words per message per sender.
    AverageMessageLength,
    /// Per-sender corpora for word-cloud rendering.
    WordCloud,
    /// Share of question messages per sender.
    ExtenderScore,
    /// Duplicate of `AverageReplyTime`.
    ReplySpeed,
    /// Share of positive-sentiment messages per sender.
    Positivity,
    /// Most frequent bigrams and trigrams.
    CommonPhrases,
}

impl Feature {
    /// All features, in menu order.
    pub fn all() -> &'static [Feature] {
        &[
            Feature::TotalMessagesAndWords,
            Feature::TotalMessages,
            Feature::TotalWords,
            Feature::AverageReplyTime,
            Feature::ConversationStarters,
            Feature::ConversationEnders,
            Feature::AverageMessageLength,
            Feature::WordCloud,
            Feature::ExtenderScore,
            Feature::ReplySpeed,
            Feature::Positivity,
            Feature::CommonPhrases,
        ]
    }

    /// Runs this feature's aggregation over an already-built timeline.
    pub fn compute(self, timeline: &Timeline, scorer: &dyn SentimentScorer) -> FeatureReport {
        match self {
            Feature::TotalMessagesAndWords => FeatureReport::MessagesAndWords {
                messages: message_counts(timeline),
                words: word_counts(timeline),
            },
            Feature::TotalMessages => FeatureReport::Counts(message_counts(timeline)),
            Feature::TotalWords => FeatureReport::Counts(word_counts(timeline)),
            Feature::AverageReplyTime | Feature::ReplySpeed => {
                FeatureReport::Metrics(average_reply_times(timeline))
            }
            Feature::ConversationStarters => {
                FeatureReport::Counts(conversation_starters(timeline))
            }
            Feature::ConversationEnders => FeatureReport::Counts(conversation_enders(timeline)),
            Feature::AverageMessageLength => {
                FeatureReport::Metrics(average_message_length(timeline))
            }
            Feature::WordCloud => FeatureReport::Corpora(word_cloud_corpora(timeline)),
            Feature::ExtenderScore => FeatureReport::Metrics(extender_scores(timeline)),
            Feature::Positivity => {
                FeatureReport::Metrics(positivity_scores(timeline, scorer))
            }
            Feature::CommonPhrases => FeatureReport::Phrases(common_phrases(timeline)),
        }
    }

    /// The human-readable heading used when rendering this feature.
    pub fn heading(self) -> &'static str {
        match self {
            Feature::TotalMessagesAndWords => "Total messages & words per sender",
            Feature::TotalMessages => "Total messages per sender",
            Feature::TotalWords => "Total words per sender",
            Feature::AverageReplyTime | Feature::ReplySpeed => {
                "Average reply time per sender (minutes)"
            }
            Feature::ConversationStarters => "Conversation starters",
            Feature::ConversationEnders => "Conversation enders",
            Feature::AverageMessageLength => "Average message length per sender (words)",
            Feature::WordCloud => "Word cloud corpus per sender",
            Feature::ExtenderScore => "Conversation extender score (% questions)",
            Feature::Positivity => "Positivity score (% positive messages)",
            Feature::CommonPhrases => "Most common phrases",
        }
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Feature::TotalMessagesAndWords => "TotalMessagesAndWords",
            Feature::TotalMessages => "TotalMessages",
            Feature::TotalWords => "TotalWords",
            Feature::AverageReplyTime => "AverageReplyTime",
            Feature::ConversationStarters => "ConversationStarters",
            Feature::ConversationEnders => "ConversationEnders",
            Feature::AverageMessageLength => "AverageMessageLength",
            Feature::WordCloud => "WordCloud",
            Feature::ExtenderScore => "ExtenderScore",
            Feature::ReplySpeed => "ReplySpeed",
            Feature::Positivity => "Positivity",
            Feature::CommonPhrases => "CommonPhrases",
        };
        write!(f, "{name}")
    }
}

impl std::str::FromStr for Feature {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Feature::all()
            .iter()
            .find(|feature| {
                feature.to_string().eq_ignore_ascii_case(s)
                    || feature
                        .to_possible_value()
                        .is_some_and(|v| v.matches(s, true))
            })
            .copied()
            .ok_or_else(|| format!("Unknown feature: '{s}'"))
    }
}

/// Output of one feature computation, ready for tabular rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FeatureReport {
    /// Per-sender integer counts.
    Counts(CountTable),
    /// Per-sender floating metrics.
    Metrics(MetricTable),
    /// Message and word counts together.
    MessagesAndWords {
        messages: CountTable,
        words: CountTable,
    },
    /// Per-sender raw corpora (word cloud source).
    Corpora(Vec<(String, String)>),
    /// Phrase frequency table.
    Phrases(PhraseTable),
}
