//! Split-annotation (割り注) reformatting.
//!
//! A 割り注 is a two-column inline note. The markup brackets the note text
//! and may itself sit inside full-width parentheses the transcriber typed.
//! The span collapses to a single parenthetical; a stray paren on only one
//! side stays in the output as literal text rather than being absorbed.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static RE_SPLIT_NOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"（?［＃割り注］(.+?)［＃割り注終わり］）?").unwrap());

/// Collapses every split-annotation span into balanced parenthetical text.
pub fn reformat_split_notes(text: &str) -> String {
    RE_SPLIT_NOTE
        .replace_all(text, |caps: &Captures| {
            let span = &caps[0];
            let content = caps[1].replace("［＃改行］", " ");
            match (span.starts_with('（'), span.ends_with('）')) {
                (true, true) | (false, false) => format!("（{content}）"),
                (true, false) => format!("（（{content}）"),
                (false, true) => format!("（{content}））"),
            }
        })
        .into_owned()
}
