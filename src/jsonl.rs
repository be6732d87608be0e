//! Newline-delimited JSON stream processing.
//!
//! Records are independent pure functions of their own text plus the static
//! tables, so batches clean in parallel; ordered collection restores input
//! order before anything is written. Diagnostics never mix into the output
//! stream — they flow through the [`Reporter`] seam.

use crate::clean::clean_record;
use crate::error::{Error, Result};
use crate::options::CleanOptions;
use crate::record::Record;
use rayon::prelude::*;
use std::io::{BufRead, Write};

/// Lines cleaned per parallel batch.
const BATCH_LINES: usize = 512;

/// Side-channel sink for progress and per-record warnings.
pub trait Reporter: Sync {
    /// Called after each record is finished (cleaned or skipped).
    fn progress(&self, _records_done: usize) {}

    /// Called when a record is skipped in lenient mode.
    fn skipped(&self, _error: &Error) {}
}

/// Reporter that swallows all events.
pub struct SilentReporter;

impl Reporter for SilentReporter {}

/// Counters for one processing run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Records cleaned and written.
    pub cleaned: usize,
    /// Records skipped in lenient mode.
    pub skipped: usize,
}

/// Cleans a JSONL stream record by record, preserving input order.
///
/// In strict mode the first failing record aborts the run and nothing is
/// written for it. In lenient mode record-scoped failures are reported and
/// skipped; I/O failures abort either way.
pub fn process<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    options: &CleanOptions,
    reporter: &dyn Reporter,
) -> Result<Stats> {
    let mut stats = Stats::default();
    let mut done = 0usize;
    let mut lines = input.lines();
    let mut batch: Vec<String> = Vec::with_capacity(BATCH_LINES);

    loop {
        batch.clear();
        for line in lines.by_ref().take(BATCH_LINES) {
            let line = line?;
            if !line.trim().is_empty() {
                batch.push(line);
            }
        }
        if batch.is_empty() {
            break;
        }

        let results: Vec<Result<Record>> = if options.parallel {
            batch.par_iter().map(|line| clean_line(line, options)).collect()
        } else {
            batch.iter().map(|line| clean_line(line, options)).collect()
        };

        for result in results {
            match result {
                Ok(record) => {
                    serde_json::to_writer(&mut output, &record)?;
                    output.write_all(b"\n")?;
                    stats.cleaned += 1;
                }
                Err(error) if options.is_lenient() && error.is_record_scoped() => {
                    reporter.skipped(&error);
                    stats.skipped += 1;
                }
                Err(error) => return Err(error),
            }
            done += 1;
            reporter.progress(done);
        }
    }

    output.flush()?;
    Ok(stats)
}

fn clean_line(line: &str, options: &CleanOptions) -> Result<Record> {
    let record: Record = serde_json::from_str(line)?;
    clean_record(record, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::sync::Mutex;

    fn line(work: &str, text: &str) -> String {
        serde_json::to_string(&serde_json::json!({
            "text": text,
            "meta": {"作品ID": work, "人物ID": "000001"}
        }))
        .unwrap()
    }

    fn run(input: &str, options: &CleanOptions) -> Result<(Stats, String)> {
        let mut output = Vec::new();
        let stats = process(Cursor::new(input), &mut output, options, &SilentReporter)?;
        Ok((stats, String::from_utf8(output).unwrap()))
    }

    #[test]
    fn test_round_trip() {
        let input = format!(
            "{}\n{}\n",
            line("000010", "題一\n\n一の本文。\n底本：甲"),
            line("000011", "題二\n\n二の本文。\n底本：乙")
        );
        let (stats, output) = run(&input, &CleanOptions::default()).unwrap();
        assert_eq!(stats, Stats { cleaned: 2, skipped: 0 });

        let records: Vec<Record> = output
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].text, "一の本文。");
        assert_eq!(records[0].footnote.as_deref(), Some("底本：甲"));
        assert_eq!(records[1].meta["作品ID"], "000011");
    }

    #[test]
    fn test_parallel_preserves_input_order() {
        let mut input = String::new();
        for index in 0..100 {
            let work = format!("{index:06}");
            input.push_str(&line(&work, &format!("題\n\n本文{index}。\n底本：X")));
            input.push('\n');
        }
        let options = CleanOptions::default();
        assert!(options.parallel);
        let (stats, output) = run(&input, &options).unwrap();
        assert_eq!(stats.cleaned, 100);
        for (index, json_line) in output.lines().enumerate() {
            let record: Record = serde_json::from_str(json_line).unwrap();
            assert_eq!(record.meta["作品ID"], format!("{index:06}"));
        }
    }

    #[test]
    fn test_strict_mode_aborts_without_partial_output() {
        let input = format!(
            "{}\n{}\n{}\n",
            line("000010", "題\n\n良い。\n底本：甲"),
            line("000011", "題\n\nマーカーなし。"),
            line("000012", "題\n\n良い。\n底本：乙")
        );
        let mut output = Vec::new();
        let err = process(
            Cursor::new(input.as_str()),
            &mut output,
            &CleanOptions::default().sequential(),
            &SilentReporter,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Structure { .. }));
        // The good record before the failure was written; nothing after.
        let written = String::from_utf8(output).unwrap();
        assert_eq!(written.lines().count(), 1);
        assert!(written.contains("000010"));
        assert!(!written.contains("マーカー"));
    }

    #[test]
    fn test_lenient_mode_skips_and_reports() {
        struct Collecting(Mutex<Vec<String>>);
        impl Reporter for Collecting {
            fn skipped(&self, error: &Error) {
                self.0.lock().unwrap().push(error.to_string());
            }
        }

        let input = format!(
            "{}\nnot json at all\n{}\n",
            line("000010", "題\n\nマーカーなし。"),
            line("000011", "題\n\n本文。\n底本：乙")
        );
        let reporter = Collecting(Mutex::new(Vec::new()));
        let mut output = Vec::new();
        let stats = process(
            Cursor::new(input.as_str()),
            &mut output,
            &CleanOptions::default().lenient(),
            &reporter,
        )
        .unwrap();
        assert_eq!(stats, Stats { cleaned: 1, skipped: 2 });
        let warnings = reporter.0.into_inner().unwrap();
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("no footnote found"));
        assert!(warnings[0].contains("000010"));
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let input = format!("\n{}\n\n", line("000010", "題\n\n本文。\n底本：甲"));
        let (stats, output) = run(&input, &CleanOptions::default()).unwrap();
        assert_eq!(stats.cleaned, 1);
        assert_eq!(output.lines().count(), 1);
    }
}
