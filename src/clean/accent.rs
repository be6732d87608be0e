//! Accent-separation resolution.
//!
//! European words are transcribed with their diacritics "separated": the
//! bracketed run 〔a'e`i^〕 spells áèî as base letters followed by ASCII
//! diacritic markers. Brackets that contain no separation digraph at all are
//! assumed to mean something else (a stage direction, an aside) and are kept
//! verbatim, brackets included.

use crate::tables::ACCENT_SEPARATIONS;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static RE_BRACKET_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"〔([^〔〕]+?)〕").unwrap());

// Alternation over the exact table keys, longest first so e.g. "AE&" wins
// over "A&" + trailing text.
static RE_ANY_SEPARATION: LazyLock<Regex> = LazyLock::new(|| {
    let mut keys: Vec<&str> = ACCENT_SEPARATIONS.iter().map(|(key, _)| *key).collect();
    keys.sort_by_key(|key| std::cmp::Reverse(key.len()));
    let alternation = keys
        .iter()
        .map(|key| regex::escape(key))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&alternation).unwrap()
});

fn separation_char(key: &str) -> Option<char> {
    ACCENT_SEPARATIONS
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, replacement)| *replacement)
}

/// Resolves every accent-separated run in `text`.
pub fn resolve_accents(text: &str) -> String {
    RE_BRACKET_RUN
        .replace_all(text, |caps: &Captures| {
            let inner = &caps[1];
            let mut substitutions = 0usize;
            let resolved = RE_ANY_SEPARATION.replace_all(inner, |key: &Captures| {
                substitutions += 1;
                match separation_char(&key[0]) {
                    Some(replacement) => replacement.to_string(),
                    None => key[0].to_string(),
                }
            });
            if substitutions > 0 {
                resolved.into_owned()
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}
