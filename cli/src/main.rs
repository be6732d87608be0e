//! unaozora CLI - Aozora Bunko record cleaning tool.
//!
//! Reads newline-delimited JSON records, cleans each one, and writes the
//! cleaned records in input order. Progress and warnings go to stderr; the
//! output stream carries nothing but records.

use clap::Parser;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use unaozora::{CleanOptions, Error, Reporter, Stats};

/// Clean Aozora Bunko transcription records into plain-text corpus records
#[derive(Parser)]
#[command(
    name = "unaozora",
    version,
    about = "Clean Aozora Bunko transcription records",
    long_about = "unaozora - Aozora Bunko record cleaning tool.\n\n\
                  Reads JSONL records of {text, meta}, strips the legacy\n\
                  transcription markup, splits the colophon into `footnote`,\n\
                  and writes JSONL records of {text, footnote, meta}.\n\n\
                  Usage:\n  \
                  unaozora --in books.jsonl --out cleaned.jsonl\n  \
                  unaozora < books.jsonl > cleaned.jsonl"
)]
struct Cli {
    /// Input JSONL file (default: stdin)
    #[arg(long = "in", value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output JSONL file (default: stdout)
    #[arg(long = "out", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Skip records that fail to clean instead of aborting the run
    #[arg(long)]
    lenient: bool,

    /// Disable parallel record processing
    #[arg(long)]
    sequential: bool,

    /// Print a JSON stats summary to stderr when done
    #[arg(long)]
    stats: bool,
}

/// Progress and warnings around the batch, rendered on stderr.
struct ConsoleReporter {
    bar: ProgressBar,
}

impl Reporter for ConsoleReporter {
    fn progress(&self, records_done: usize) {
        self.bar.set_position(records_done as u64);
    }

    fn skipped(&self, error: &Error) {
        self.bar
            .suspend(|| eprintln!("{} {}", "skipped:".yellow().bold(), error));
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut options = CleanOptions::default();
    if cli.lenient {
        options = options.lenient();
    }
    if cli.sequential {
        options = options.sequential();
    }

    let reporter = ConsoleReporter {
        bar: create_progress(),
    };

    let input: Box<dyn BufRead> = match &cli.input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin().lock())),
    };
    let output: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let result = unaozora::process(input, output, &options, &reporter);
    reporter.bar.finish_and_clear();
    let stats = result?;

    print_summary(&stats, cli.stats);
    Ok(())
}

fn print_summary(stats: &Stats, as_json: bool) {
    if as_json {
        let summary = serde_json::json!({
            "cleaned": stats.cleaned,
            "skipped": stats.skipped,
        });
        eprintln!("{summary}");
        return;
    }

    if stats.skipped > 0 {
        eprintln!(
            "{} cleaned {} records ({} skipped)",
            "✓".green().bold(),
            stats.cleaned,
            stats.skipped
        );
    } else {
        eprintln!("{} cleaned {} records", "✓".green().bold(), stats.cleaned);
    }
}

fn create_progress() -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.blue} {pos} records")
            .unwrap(),
    );
    bar.enable_steady_tick(std::time::Duration::from_millis(100));
    bar
}
