//! # unaozora
//!
//! A Rust library for cleaning Aozora Bunko transcription records into
//! plain-text corpus records.
//!
//! Each record arrives as one line of newline-delimited JSON carrying the
//! raw transcription (`text`) and its index metadata (`meta`). The cleaning
//! pipeline strips the title preamble, the symbol headnote, and any table of
//! contents, splits the trailing colophon into `footnote`, and resolves the
//! transcription markup: ruby glosses, split annotations, accent-separated
//! words, and gaiji character notes citing Unicode or JIS plane-row-cell
//! codes.
//!
//! ## Quick Start
//!
//! ```
//! use unaozora::{clean_record, CleanOptions, Record};
//!
//! fn main() -> unaozora::Result<()> {
//!     let line = r#"{"text":"題名\n\n本文。\n底本：底本名","meta":{"作品ID":"000001"}}"#;
//!     let record: Record = serde_json::from_str(line)?;
//!
//!     let cleaned = clean_record(record, &CleanOptions::default())?;
//!     assert_eq!(cleaned.text, "本文。");
//!     assert_eq!(cleaned.footnote.as_deref(), Some("底本：底本名"));
//!     Ok(())
//! }
//! ```
//!
//! Whole files clean through [`clean_file`] or, for arbitrary streams,
//! [`jsonl::process`]. Unrecoverable records — a missing content break, a
//! missing colophon, an undecodable character code — abort the run by
//! default; [`CleanOptions::lenient`] turns them into skip-and-report.

pub mod clean;
pub mod error;
pub mod jis;
pub mod jsonl;
pub mod options;
pub mod record;
pub mod tables;

// Re-exports
pub use clean::{clean_record, clean_text, Cleaned};
pub use error::{Error, Result};
pub use jis::char_from_jis_code;
pub use jsonl::{process, Reporter, SilentReporter, Stats};
pub use options::{CleanOptions, ErrorMode};
pub use record::{Record, RecordId};

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Cleans a newline-delimited JSON file into another.
///
/// This is a convenience wrapper over [`jsonl::process`] with no progress
/// reporting.
///
/// # Example
///
/// ```no_run
/// use unaozora::{clean_file, CleanOptions};
///
/// let stats = clean_file("books.jsonl", "cleaned.jsonl", &CleanOptions::default())?;
/// println!("cleaned {} records", stats.cleaned);
/// # Ok::<(), unaozora::Error>(())
/// ```
pub fn clean_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &CleanOptions,
) -> Result<Stats> {
    let reader = BufReader::new(File::open(input)?);
    let writer = BufWriter::new(File::create(output)?);
    jsonl::process(reader, writer, options, &SilentReporter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_clean_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let input_path = dir.path().join("books.jsonl");
        let output_path = dir.path().join("cleaned.jsonl");

        let mut input = std::fs::File::create(&input_path).unwrap();
        writeln!(
            input,
            r#"{{"text":"題名\n\n本文。\n底本：底本名","meta":{{"作品ID":"000001"}}}}"#
        )
        .unwrap();
        drop(input);

        let stats = clean_file(&input_path, &output_path, &CleanOptions::default()).unwrap();
        assert_eq!(stats.cleaned, 1);

        let output = std::fs::read_to_string(&output_path).unwrap();
        let record: Record = serde_json::from_str(output.trim()).unwrap();
        assert_eq!(record.text, "本文。");
        assert_eq!(record.footnote.as_deref(), Some("底本：底本名"));
    }
}
