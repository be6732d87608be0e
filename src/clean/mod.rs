//! # Record cleaning pipeline
//!
//! An ordered sequence of text transformations turning a raw transcription
//! into a plain-text body plus a separated colophon:
//!
//! 1. newline normalization (CRLF/CR → LF)
//! 2. title/preamble strip
//! 3. headnote strip
//! 4. table-of-contents strip
//! 5. colophon split
//! 6. split-annotation reformatting
//! 7. ruby gloss removal
//! 8. iteration-mark substitution
//! 9. accent-separation resolution
//! 10. gaiji resolution
//! 11. directive strip (to fixpoint)
//! 12. edge trim
//!
//! Ordering matters: the colophon must leave before directive stripping so a
//! `［＃本文終わり］` marker can still be seen, and gaiji notes must resolve
//! before the generic directive pass would tear their brackets apart. Every
//! stage is a pure `&str -> String` function; the buffer is threaded by
//! value between stages, never mutated in place.

pub mod accent;
pub mod footnote;
pub mod gaiji;
pub mod header;
pub mod markup;
pub mod notes;

use crate::error::Result;
use crate::options::CleanOptions;
use crate::record::{Record, RecordId};

/// Output of the cleaning pipeline for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cleaned {
    /// Cleaned body text.
    pub text: String,
    /// Extracted colophon block.
    pub footnote: Option<String>,
}

/// Normalizes CRLF and bare CR line endings to LF.
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Runs the full pipeline over one record's text.
///
/// Only the headnote and colophon stages consult `id`, and only to select
/// override behavior for registered irregular records.
pub fn clean_text(text: &str, id: &RecordId, options: &CleanOptions) -> Result<Cleaned> {
    let text = normalize_newlines(text);
    let text = header::strip_title(&text, id)?;
    let text = header::strip_headnote(&text, id);
    let text = header::strip_toc(&text);
    let (text, footnote) = footnote::split_footnote(&text, id)?;
    let text = notes::reformat_split_notes(&text);
    let text = markup::strip_ruby(&text);
    let text = markup::replace_repeat_marks(&text);
    let text = accent::resolve_accents(&text);
    let text = gaiji::resolve_gaiji(&text)?;
    let text = markup::strip_directives(&text, id, options.max_strip_passes)?;
    let text = markup::trim_edges(&text);
    Ok(Cleaned {
        text,
        footnote: Some(footnote),
    })
}

/// Cleans one record, reassembling it with its metadata untouched.
pub fn clean_record(record: Record, options: &CleanOptions) -> Result<Record> {
    let id = record.id();
    let cleaned = clean_text(&record.text, &id, options)?;
    Ok(Record {
        text: cleaned.text,
        footnote: cleaned.footnote,
        meta: record.meta,
    })
}
