//! Ruby glosses, iteration marks, editorial directives, and edge trimming.

use crate::error::{Error, Result};
use crate::record::RecordId;
use regex::Regex;
use std::sync::LazyLock;

static RE_RUBY_WITH_BASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"｜(.+?)《.+?》").unwrap());

static RE_BARE_RUBY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"《.+?》").unwrap());

static RE_DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"［＃[^［］]+?］").unwrap());

static RE_EDGE_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A\n+|\n+\z").unwrap());

// Not a strict rule pattern; tuned against the corpus and left loose.
static RE_EDGE_RULES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A[-=\n]{8,}|[-=\n]{8,}\z").unwrap());

/// Removes ruby glosses: an explicit `｜base《reading》` keeps its base, a
/// bare `《reading》` attaches to the preceding run and is dropped outright.
pub fn strip_ruby(text: &str) -> String {
    let kept_bases = RE_RUBY_WITH_BASE.replace_all(text, "$1");
    RE_BARE_RUBY.replace_all(&kept_bases, "").into_owned()
}

/// Folds transcription-style くの字点 pairs back into the iteration marks.
pub fn replace_repeat_marks(text: &str) -> String {
    text.replace("／＼", "〳〵").replace("／″＼", "〴〵")
}

/// Removes remaining editorial directives, repeating until none are left.
///
/// Earlier stages never produce nested directives, so each pass strictly
/// shrinks the text; the cap turns a pathological input into an error
/// instead of a spin.
pub fn strip_directives(text: &str, id: &RecordId, max_passes: usize) -> Result<String> {
    let mut current = text.to_string();
    for _ in 0..max_passes {
        if !RE_DIRECTIVE.is_match(&current) {
            return Ok(current);
        }
        current = RE_DIRECTIVE.replace_all(&current, "").into_owned();
    }
    if RE_DIRECTIVE.is_match(&current) {
        return Err(Error::structure(id, "markup removal did not converge"));
    }
    Ok(current)
}

/// Trims surrounding blank lines, then a leading or trailing decorative rule.
pub fn trim_edges(text: &str) -> String {
    let unpadded = RE_EDGE_NEWLINES.replace_all(text, "");
    RE_EDGE_RULES.replace_all(&unpadded, "").into_owned()
}
