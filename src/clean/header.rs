//! Title, headnote, and table-of-contents removal.
//!
//! A transcription opens with a title/author preamble, then optionally a
//! rule-delimited headnote explaining the transcription symbols, then
//! optionally a table of contents. Three headnote layouts occur in the
//! corpus; anything else is either a registered irregular record or gets the
//! best-effort leading-rule strip.

use crate::error::{Error, Result};
use crate::record::RecordId;
use crate::tables::{compile_overrides, PatternOverride, HEADNOTE_OVERRIDES};
use regex::Regex;
use std::sync::LazyLock;

// 【テキス禊中に現れる記号について】 is an existing typo in the corpus.
static RE_HEADNOTE_SYMBOLS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)-{8,}\n\n?[【《]テキス[ト禊]中に現れる記号について[】》].+?\n-{8,}\n")
        .unwrap()
});

static RE_RULE_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-{8,}\n").unwrap());

static RE_HEADNOTE_NOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)-{8,}\n［表記について］\n.+?\n-{8,}\n").unwrap());

static RE_LEADING_RULE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\A-{8,}\n").unwrap());

static RE_TOC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\A\n*●目次\n.+?\n\n\n").unwrap());

static HEADNOTE_OVERRIDE_PATTERNS: LazyLock<Vec<(&'static PatternOverride, Regex)>> =
    LazyLock::new(|| compile_overrides(HEADNOTE_OVERRIDES));

/// Drops everything up to and including the first paragraph break.
pub fn strip_title(text: &str, id: &RecordId) -> Result<String> {
    match text.split_once("\n\n") {
        Some((_, body)) => Ok(body.to_string()),
        None => Err(Error::structure(id, "no content found")),
    }
}

/// Removes the boilerplate headnote block, if one is present.
///
/// Exactly one of the strategies applies per record; a record with no
/// headnote at all passes through unchanged.
pub fn strip_headnote(text: &str, id: &RecordId) -> String {
    if RE_HEADNOTE_SYMBOLS.is_match(text) {
        return RE_HEADNOTE_SYMBOLS.replace(text, "").into_owned();
    }
    if RE_RULE_LINE.is_match(text) {
        if RE_HEADNOTE_NOTATION.is_match(text) {
            return RE_HEADNOTE_NOTATION.replace(text, "").into_owned();
        }
        for (entry, pattern) in HEADNOTE_OVERRIDE_PATTERNS.iter() {
            if id.work_in(entry.works) {
                return pattern.replace(text, "").into_owned();
            }
        }
        // Unclassified layout: settle for dropping a leading rule line.
        return RE_LEADING_RULE.replace(text, "").into_owned();
    }
    text.to_string()
}

/// Removes a leading table-of-contents block terminated by a double blank
/// line. Few records carry one; absence is not an error.
pub fn strip_toc(text: &str) -> String {
    RE_TOC.replace(text, "").into_owned()
}
