//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::fs;
use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatlens::backup::{BackupSink, DirectorySink, backup_best_effort};
use chatlens::cli::Args;
use chatlens::render::render_report;
use chatlens::sentiment::LexiconScorer;
use chatlens::timeline::Timeline;
use chatlens::{ChatlensError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let total_start = Instant::now();
    let args = Args::parse();

    println!("🔎 chatlens v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:    {}", args.input);
    println!("📊 Feature:  {}", args.feature);
    println!("📄 Format:   {}", args.format);
    println!();

    // Malformed byte sequences are handled here at the ingestion edge; the
    // core only ever sees string lines.
    let raw_bytes = fs::read(&args.input)?;
    let content = String::from_utf8_lossy(&raw_bytes);

    // Best-effort audit copy. A failure is reported, never fatal.
    if let Some(dir) = &args.backup_dir {
        let name = file_name(&args.input);
        let sink = DirectorySink::new();
        report_backup(&sink, &raw_bytes, name, dir);
    }

    println!("⏳ Parsing chat export...");
    let parse_start = Instant::now();
    let timeline = Timeline::from_lines(content.lines());
    println!(
        "   Found {} messages ({:.2}s)",
        timeline.len(),
        parse_start.elapsed().as_secs_f64()
    );

    println!("🧮 Computing {}...", args.feature);
    let scorer = LexiconScorer::new();
    let report = args.feature.compute(&timeline, &scorer);
    let rendered = render_report(args.feature, &report, args.format)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &rendered)?;
            println!("💾 Written to {}", path);
        }
        None => {
            println!();
            println!("{rendered}");
        }
    }

    println!("✅ Done in {:.2}s", total_start.elapsed().as_secs_f64());
    Ok(())
}

fn report_backup(sink: &dyn BackupSink, bytes: &[u8], name: &str, destination: &str) {
    println!("☁️  Backing up raw export to {destination}...");
    match backup_best_effort(sink, bytes, name, destination) {
        None => println!("   Backup stored."),
        Some(ChatlensError::Backup { source, .. }) => {
            eprintln!("⚠️  Backup skipped: {source} (analysis continues)");
        }
        Some(other) => {
            eprintln!("⚠️  Backup skipped: {other} (analysis continues)");
        }
    }
}

fn file_name(input: &str) -> &str {
    Path::new(input)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("chat.txt")
}
