//! Compiled-in character tables and per-record override registries.
//!
//! Everything here is corpus data, not configuration: the entries encode
//! known quirks of specific transcriptions and are only meaningful for the
//! format variants they were tuned against. New failure modes get triaged
//! into a table entry, not handled with inline conditionals.

/// JIS plane-row-cell codes whose formulaic EUC conversion is undefined.
///
/// The semivoiced kana ligatures map to a base kana plus U+309A; the last
/// entry is a historically irregular character.
pub const JIS_EXCEPTIONS: &[(&str, &str)] = &[
    ("1-5-87", "カ\u{309A}"),
    ("1-5-88", "キ\u{309A}"),
    ("1-5-89", "ク\u{309A}"),
    ("1-5-90", "ケ\u{309A}"),
    ("1-5-91", "コ\u{309A}"),
    ("1-5-92", "セ\u{309A}"),
    ("1-5-93", "ツ\u{309A}"),
    ("1-5-94", "ト\u{309A}"),
    ("1-6-88", "ㇷ\u{309A}"),
    // from here, irregular chars
    ("1-11-45", "ə\u{301}"),
];

/// Accent-separation digraphs and the precomposed characters they denote.
///
/// A digraph is a base letter followed by a diacritic marker; `&` marks
/// ligatures and ring forms.
pub const ACCENT_SEPARATIONS: &[(&str, char)] = &[
    ("!@", '¡'),
    ("?@", '¿'),
    ("A`", 'À'),
    ("A'", 'Á'),
    ("A^", 'Â'),
    ("A~", 'Ã'),
    ("A:", 'Ä'),
    ("A&", 'Å'),
    ("AE&", 'Æ'),
    ("C,", 'Ç'),
    ("E`", 'È'),
    ("E'", 'É'),
    ("E^", 'Ê'),
    ("E:", 'Ë'),
    ("I`", 'Ì'),
    ("I'", 'Í'),
    ("I^", 'Î'),
    ("I:", 'Ï'),
    ("N~", 'Ñ'),
    ("O`", 'Ò'),
    ("O'", 'Ó'),
    ("O^", 'Ô'),
    ("O~", 'Õ'),
    ("O:", 'Ö'),
    ("O/", 'Ø'),
    ("U`", 'Ù'),
    ("U'", 'Ú'),
    ("U^", 'Û'),
    ("U:", 'Ü'),
    ("Y'", 'Ý'),
    ("s&", 'ß'),
    ("a`", 'à'),
    ("a'", 'á'),
    ("a^", 'â'),
    ("a~", 'ã'),
    ("a:", 'ä'),
    ("a&", 'å'),
    ("ae&", 'æ'),
    ("c,", 'ç'),
    ("e`", 'è'),
    ("e'", 'é'),
    ("e^", 'ê'),
    ("e:", 'ë'),
    ("i`", 'ì'),
    ("i'", 'í'),
    ("i^", 'î'),
    ("i:", 'ï'),
    ("n~", 'ñ'),
    ("o`", 'ò'),
    ("o'", 'ó'),
    ("o^", 'ô'),
    ("o~", 'õ'),
    ("o:", 'ö'),
    ("o/", 'ø'),
    ("u`", 'ù'),
    ("u'", 'ú'),
    ("u^", 'û'),
    ("u:", 'ü'),
    ("y'", 'ý'),
    ("y:", 'ÿ'),
    ("A_", 'Ā'),
    ("a_", 'ā'),
    ("E_", 'Ē'),
    ("e_", 'ē'),
    ("I_", 'Ī'),
    ("i_", 'ī'),
    ("O_", 'Ō'),
    ("o_", 'ō'),
    ("OE&", 'Œ'),
    ("oe&", 'œ'),
    ("U_", 'Ū'),
    ("u_", 'ū'),
];

/// A record-specific extraction pattern, applied only when the generic
/// patterns fail for one of the listed works.
#[derive(Debug)]
pub struct PatternOverride {
    /// Work identifiers the override applies to.
    pub works: &'static [&'static str],
    /// Replacement extraction pattern.
    pub pattern: &'static str,
}

/// Compiles a registry into `(entry, regex)` pairs, preserving order.
pub(crate) fn compile_overrides(
    overrides: &'static [PatternOverride],
) -> Vec<(&'static PatternOverride, regex::Regex)> {
    overrides
        .iter()
        .map(|entry| (entry, regex::Regex::new(entry.pattern).unwrap()))
        .collect()
}

/// Headnote blocks that match none of the generic layouts.
pub const HEADNOTE_OVERRIDES: &[PatternOverride] = &[
    // rule-delimited block with a free-form title
    PatternOverride {
        works: &["044457", "024357"],
        pattern: r"(?s)-{8,}\n.+?\n-{8,}\n",
    },
    // collected-works list closed by a = rule
    PatternOverride {
        works: &["000395"],
        pattern: r"(?s)［収録作品］\n.+?\n={8,}\n",
    },
    // notation block with no opening rule
    PatternOverride {
        works: &["000455"],
        pattern: r"(?s)［表記について］\n.+?\n-{8,}\n",
    },
];

/// Colophon markers for records that deviate from `底本：`.
pub const FOOTNOTE_OVERRIDES: &[PatternOverride] = &[
    // missing ：
    PatternOverride {
        works: &["001871", "002526", "024456"],
        pattern: r"(?ms)^底本.+\z",
    },
    // half-width colon
    PatternOverride {
        works: &["056033"],
        pattern: r"(?ms)^底本:.+\z",
    },
    // 定本 is a transcription typo
    PatternOverride {
        works: &["043035"],
        pattern: r"(?ms)^定本：.+\z",
    },
    // closing rule glued to the marker
    PatternOverride {
        works: &["000395"],
        pattern: r"(?ms)^={8,}底本：.+\z",
    },
    // no 底本 line at all
    PatternOverride {
        works: &["000906", "000909"],
        pattern: r"(?ms)^入力者注.+\z",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_accent_keys_are_unique() {
        for (i, (key, _)) in ACCENT_SEPARATIONS.iter().enumerate() {
            assert!(
                !ACCENT_SEPARATIONS[i + 1..].iter().any(|(k, _)| k == key),
                "duplicate accent key {key}"
            );
        }
    }

    #[test]
    fn test_jis_exception_keys_are_well_formed() {
        for (key, replacement) in JIS_EXCEPTIONS {
            assert_eq!(key.split('-').count(), 3, "bad key {key}");
            assert!(!replacement.is_empty());
        }
    }

    #[test]
    fn test_override_patterns_compile() {
        for entry in HEADNOTE_OVERRIDES.iter().chain(FOOTNOTE_OVERRIDES) {
            assert!(!entry.works.is_empty());
            Regex::new(entry.pattern).unwrap();
        }
    }
}
