//! Command-line interface definition using clap.
//!
//! The binary analyzes one exported chat file at a time: pick a feature,
//! point at the export, choose how to render the table.
//!
//! [`OutputFormat`] is usable outside of CLI context:
//!
//! ```rust
//! use chatlens::cli::OutputFormat;
//!
//! let format = OutputFormat::Json;
//! assert_eq!(format.extension(), "json");
//! ```

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::analytics::Feature;

/// Analyze an exported WhatsApp chat and print one statistic table.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens total-messages chat.txt
    chatlens average-reply-time chat.txt --format json
    chatlens conversation-starters chat.txt -o starters.csv -f csv
    chatlens common-phrases chat.txt --backup-dir ~/chat-backups")]
pub struct Args {
    /// Feature to compute
    #[arg(value_enum)]
    pub feature: Feature,

    /// Path to the exported chat (.txt)
    pub input: String,

    /// Write the table to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Store a best-effort copy of the raw export in this directory
    #[arg(long, value_name = "DIR")]
    pub backup_dir: Option<String>,
}

/// Output format options for rendered tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table (default)
    #[default]
    Text,

    /// CSV rows, `key,value`
    Csv,

    /// JSON array of `[key, value]` pairs
    Json,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["text", "csv", "json"]
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}
