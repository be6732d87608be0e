//! Gaiji (out-of-set character) resolution.
//!
//! A gaiji note cites either a Unicode code point, a JIS plane-row-cell
//! code, or — for characters with neither — a prose description of the
//! glyph. The first two resolve to the actual character; descriptions
//! degrade to a readable parenthetical instead of surviving as raw markup.

use crate::error::{Error, Result};
use crate::jis::char_from_jis_code;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static RE_UNICODE_NOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"※［.+?U\+([0-9A-F]+).+?］").unwrap());

static RE_JIS_NOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"※［.+?[準、]([12]-\d{1,3}-\d{1,3})、?.*?］").unwrap());

static RE_ANY_NOTE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"※［.+?］").unwrap());

// ※［＃「desc」、…］ where desc may itself contain one level of 「」 quoting.
static RE_QUOTED_NOTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"※［＃「((?:「[^「」]+」|[^「」])+)」(?:、[^、]*?］|］)").unwrap()
});

static RE_PLAIN_NOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"※［＃(.+?)(?:、[^、]*?］|］)").unwrap());

/// Resolves every gaiji note in `text`.
///
/// Unicode and JIS citations are resolved to their characters; an
/// unresolvable citation is fatal. Notes citing neither fall back to a
/// parenthesized description with redundant 「」 quoting stripped.
pub fn resolve_gaiji(text: &str) -> Result<String> {
    let mut failure: Option<Error> = None;
    let resolved = RE_UNICODE_NOTE.replace_all(text, |caps: &Captures| {
        match u32::from_str_radix(&caps[1], 16).ok().and_then(char::from_u32) {
            Some(ch) => ch.to_string(),
            None => {
                failure.get_or_insert(Error::Decode {
                    code: format!("U+{}", &caps[1]),
                });
                String::new()
            }
        }
    });
    if let Some(error) = failure {
        return Err(error);
    }

    let mut failure: Option<Error> = None;
    let resolved = RE_JIS_NOTE.replace_all(&resolved, |caps: &Captures| {
        match char_from_jis_code(&caps[1]) {
            Ok(ch) => ch,
            Err(error) => {
                failure.get_or_insert(error);
                String::new()
            }
        }
    });
    if let Some(error) = failure {
        return Err(error);
    }

    if !RE_ANY_NOTE.is_match(&resolved) {
        return Ok(resolved.into_owned());
    }

    // Leftover notes carry only a description, like ※［＃「牛＋子」］.
    // Keep the description, drop the 「」 when redundant with the （） wrap.
    let resolved = RE_QUOTED_NOTE.replace_all(&resolved, "※（$1）");
    let resolved = RE_PLAIN_NOTE.replace_all(&resolved, "※（$1）");
    Ok(resolved.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_citation() {
        assert_eq!(
            resolve_gaiji("飼い※［＃「猫」、U+732B、10-5］のこと").unwrap(),
            "飼い猫のこと"
        );
    }

    #[test]
    fn test_invalid_code_point_is_fatal() {
        let err = resolve_gaiji("※［＃「？」、U+D800、1-1］").unwrap_err();
        match err {
            Error::Decode { code } => assert_eq!(code, "U+D800"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_jis_citation() {
        assert_eq!(
            resolve_gaiji("※［＃「唖」、第2水準1-16-1］と書く").unwrap(),
            "亜と書く"
        );
    }

    #[test]
    fn test_jis_citation_exception_table() {
        assert_eq!(
            resolve_gaiji("※［＃小書き片仮名ト゜、1-5-94］").unwrap(),
            "ト\u{309A}"
        );
    }

    #[test]
    fn test_undecodable_jis_citation_is_fatal() {
        let err = resolve_gaiji("※［＃「？」、第1水準1-9-1］").unwrap_err();
        match err {
            Error::Decode { code } => assert_eq!(code, "1-9-1"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_description_fallback_strips_redundant_quotes() {
        assert_eq!(
            resolve_gaiji("※［＃「牛＋子」、ページ数-行数］").unwrap(),
            "※（牛＋子）"
        );
        assert_eq!(resolve_gaiji("※［＃「牛＋子」］").unwrap(), "※（牛＋子）");
    }

    #[test]
    fn test_description_fallback_keeps_inner_quotes() {
        assert_eq!(
            resolve_gaiji("※［＃「「areka」の合字」、145-12］").unwrap(),
            "※（「areka」の合字）"
        );
    }

    #[test]
    fn test_description_fallback_plain_form() {
        assert_eq!(resolve_gaiji("※［＃ロシア文字］").unwrap(), "※（ロシア文字）");
    }

    #[test]
    fn test_text_without_notes_is_untouched() {
        assert_eq!(resolve_gaiji("ただの本文。").unwrap(), "ただの本文。");
    }
}
