//! # Chatlens
//!
//! A Rust library for parsing exported WhatsApp chat logs and computing
//! conversational statistics.
//!
//! ## Overview
//!
//! Chatlens turns the semi-structured text of a WhatsApp export into a typed
//! message timeline and derives per-participant and conversational metrics
//! from it:
//!
//! - message, word, and average-length counts
//! - reply latency (sender-change deltas under a two-hour cap)
//! - conversation starters and enders (30-minute inactivity threshold)
//! - question-extender and sentiment-positivity scores
//! - word-cloud corpora and common bigrams/trigrams
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! let timeline = Timeline::from_lines([
//!     "1/1/23, 10:00 am - Alice: Hi",
//!     "1/1/23, 10:05 am - Bob: Hello, how are you?",
//! ]);
//!
//! let report = Feature::AverageReplyTime.compute(&timeline, &LexiconScorer::new());
//! match report {
//!     FeatureReport::Metrics(table) => {
//!         assert_eq!(table.get("Bob"), Some(5.0));
//!     }
//!     _ => unreachable!(),
//! }
//! ```
//!
//! ## Pipeline
//!
//! Data flows strictly left to right:
//!
//! ```text
//! raw lines → parsing → timeline → analytics → result table → presentation
//! ```
//!
//! Lines that do not match the export grammar are dropped silently; messages
//! whose timestamp fails to parse are kept with an invalid-timestamp
//! sentinel and excluded only from time-based computations.
//!
//! ## Module Structure
//!
//! - [`parsing`]: the line grammar and [`parse_line`](parsing::parse_line)
//! - [`timeline`]: [`Timeline`](timeline::Timeline) assembly and ordering
//! - [`analytics`]: aggregations, the [`Feature`](analytics::Feature)
//!   registry, and result tables
//! - [`sentiment`]: pluggable [`SentimentScorer`](sentiment::SentimentScorer)
//! - [`backup`]: best-effort raw-export copy, isolated from analysis
//! - [`render`]: text/CSV/JSON table rendering
//! - [`cli`]: CLI types
//! - [`error`]: unified error types ([`ChatlensError`], [`Result`])

pub mod analytics;
pub mod backup;
pub mod cli;
pub mod error;
pub mod message;
pub mod parsing;
pub mod render;
pub mod sentiment;
pub mod timeline;

// Re-export the main types at the crate root for convenience
pub use error::{ChatlensError, Result};
pub use message::{Message, RawEvent};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{ChatlensError, Result};
    pub use crate::message::{Message, RawEvent};

    pub use crate::parsing::{parse_line, parse_lines};
    pub use crate::timeline::Timeline;

    pub use crate::analytics::{
        CountTable, Feature, FeatureReport, MetricTable, PhraseTable, RankedTable,
    };

    pub use crate::sentiment::{LexiconScorer, SentimentScorer};

    pub use crate::backup::{BackupSink, DirectorySink, backup_best_effort};

    pub use crate::cli::OutputFormat;
    pub use crate::render::render_report;
}
