//! Colophon extraction.
//!
//! Every record closes with a colophon naming the source edition and the
//! transcribers. A record where no known marker matches is a new format
//! variant: it fails loudly so the registry can be extended, instead of
//! passing through uncleaned.

use crate::error::{Error, Result};
use crate::record::RecordId;
use crate::tables::{compile_overrides, PatternOverride, FOOTNOTE_OVERRIDES};
use regex::Regex;
use std::sync::LazyLock;

static RE_COLOPHON: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?ms)^底本：.+\z").unwrap());

static RE_BODY_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)［＃本文終わり］(.+)\z").unwrap());

static FOOTNOTE_OVERRIDE_PATTERNS: LazyLock<Vec<(&'static PatternOverride, Regex)>> =
    LazyLock::new(|| compile_overrides(FOOTNOTE_OVERRIDES));

/// Splits the trailing colophon block off the body.
///
/// Generic markers are tried first; the override registry only covers
/// records where they are known to fail.
pub fn split_footnote(text: &str, id: &RecordId) -> Result<(String, String)> {
    if let Some(found) = RE_COLOPHON.find(text) {
        return Ok((
            text[..found.start()].to_string(),
            found.as_str().to_string(),
        ));
    }

    if let Some(caps) = RE_BODY_END.captures(text) {
        let start = caps.get(0).map_or(0, |m| m.start());
        let footnote = caps.get(1).map_or("", |m| m.as_str());
        return Ok((text[..start].to_string(), footnote.to_string()));
    }

    for (entry, pattern) in FOOTNOTE_OVERRIDE_PATTERNS.iter() {
        if id.work_in(entry.works) {
            if let Some(found) = pattern.find(text) {
                return Ok((
                    text[..found.start()].to_string(),
                    found.as_str().to_string(),
                ));
            }
        }
    }

    Err(Error::structure(id, "no footnote found"))
}
