//! Rendering of feature reports into text, CSV, and JSON.
//!
//! The core hands over ordered tables; this module is the thin presentation
//! edge that turns them into something printable or writable.

use std::io;

use crate::analytics::{CountTable, Feature, FeatureReport, MetricTable};
use crate::cli::OutputFormat;
use crate::error::Result;

/// Renders a feature report in the requested format.
pub fn render_report(
    feature: Feature,
    report: &FeatureReport,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(feature, report)),
        OutputFormat::Csv => render_csv(report),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

fn render_text(feature: Feature, report: &FeatureReport) -> String {
    let mut out = String::new();
    out.push_str(feature.heading());
    out.push('\n');

    match report {
        FeatureReport::Counts(table) => push_counts(&mut out, table),
        FeatureReport::Metrics(table) => push_metrics(&mut out, table),
        FeatureReport::MessagesAndWords { messages, words } => {
            out.push_str("\nMessages:\n");
            push_counts(&mut out, messages);
            out.push_str("\nWords:\n");
            push_counts(&mut out, words);
        }
        FeatureReport::Corpora(corpora) => {
            for (sender, corpus) in corpora {
                out.push_str(&format!("\n{sender}:\n{corpus}\n"));
            }
        }
        FeatureReport::Phrases(table) => push_counts(&mut out, table),
    }
    out
}

fn push_counts(out: &mut String, table: &CountTable) {
    for (key, value) in table.iter() {
        out.push_str(&format!("  {key}: {value}\n"));
    }
}

fn push_metrics(out: &mut String, table: &MetricTable) {
    for (key, value) in table.iter() {
        out.push_str(&format!("  {key}: {value:.2}\n"));
    }
}

fn render_csv(report: &FeatureReport) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    match report {
        FeatureReport::Counts(table) => {
            writer.write_record(["sender", "value"])?;
            for (key, value) in table.iter() {
                writer.write_record([key.as_str(), &value.to_string()])?;
            }
        }
        FeatureReport::Metrics(table) => {
            writer.write_record(["sender", "value"])?;
            for (key, value) in table.iter() {
                writer.write_record([key.as_str(), &format!("{value:.2}")])?;
            }
        }
        FeatureReport::MessagesAndWords { messages, words } => {
            writer.write_record(["sender", "messages", "words"])?;
            for (sender, count) in messages.iter() {
                let word_count = words.get(sender).unwrap_or(0);
                writer.write_record([
                    sender.as_str(),
                    &count.to_string(),
                    &word_count.to_string(),
                ])?;
            }
        }
        FeatureReport::Corpora(corpora) => {
            writer.write_record(["sender", "corpus"])?;
            for (sender, corpus) in corpora {
                writer.write_record([sender.as_str(), corpus.as_str()])?;
            }
        }
        FeatureReport::Phrases(table) => {
            writer.write_record(["phrase", "count"])?;
            for (phrase, count) in table.iter() {
                writer.write_record([phrase.as_str(), &count.to_string()])?;
            }
        }
    }

    writer.flush()?;
    let bytes = writer
        .into_inner()
        .map_err(|e| io::Error::other(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| io::Error::other(e.to_string()).into())
}
