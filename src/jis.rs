//! JIS plane-row-cell code resolution.
//!
//! Gaiji notes address characters as 面-区-点 codes such as `1-16-1`. A code
//! is resolved through the exception table first, otherwise it is converted
//! to its EUC byte sequence and decoded as EUC-JP. Plane 2 codes travel
//! through the `0x8F`-prefixed three-byte plane.

use crate::error::{Error, Result};
use crate::tables::JIS_EXCEPTIONS;
use encoding_rs::EUC_JP;

/// Converts a plane-row-cell code into the character (or character sequence)
/// it names.
///
/// # Example
///
/// ```
/// assert_eq!(unaozora::char_from_jis_code("1-16-1").unwrap(), "亜");
/// ```
pub fn char_from_jis_code(code: &str) -> Result<String> {
    if let Some((_, replacement)) = JIS_EXCEPTIONS.iter().find(|(key, _)| *key == code) {
        return Ok((*replacement).to_string());
    }

    let (men, ku, ten) = parse_code(code).ok_or_else(|| Error::Decode {
        code: code.to_string(),
    })?;

    let euc = ((men - 1) * 0x8f) << 16 | (ku + 0xa0) << 8 | (ten + 0xa0);
    let bytes: Vec<u8> = euc
        .to_be_bytes()
        .into_iter()
        .skip_while(|&byte| byte == 0)
        .collect();

    let (decoded, _, had_errors) = EUC_JP.decode(&bytes);
    if had_errors || decoded.is_empty() {
        return Err(Error::Decode {
            code: code.to_string(),
        });
    }
    Ok(decoded.into_owned())
}

fn parse_code(code: &str) -> Option<(u32, u32, u32)> {
    let mut parts = code.splitn(3, '-').map(|part| part.parse::<u32>().ok());
    let men = parts.next()??;
    let ku = parts.next()??;
    let ten = parts.next()??;
    // Two planes of 94x94 cells.
    if !(1..=2).contains(&men) || !(1..=94).contains(&ku) || !(1..=94).contains(&ten) {
        return None;
    }
    Some((men, ku, ten))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exception_table_bypasses_formula() {
        // 1-5-87..94 sit past the end of the EUC kana row; the table carries them.
        assert_eq!(char_from_jis_code("1-5-87").unwrap(), "カ\u{309A}");
        assert_eq!(char_from_jis_code("1-6-88").unwrap(), "ㇷ\u{309A}");
        assert_eq!(char_from_jis_code("1-11-45").unwrap(), "ə\u{301}");
    }

    #[test]
    fn test_formula_reference_pairs() {
        // 1-1-1 is the ideographic space, the first code of the plane.
        assert_eq!(char_from_jis_code("1-1-1").unwrap(), "\u{3000}");
        assert_eq!(char_from_jis_code("1-4-2").unwrap(), "あ");
        assert_eq!(char_from_jis_code("1-16-1").unwrap(), "亜");
    }

    #[test]
    fn test_undecodable_code_names_the_key() {
        // Row 9 of plane 1 is unassigned.
        let err = char_from_jis_code("1-9-1").unwrap_err();
        match err {
            Error::Decode { code } => assert_eq!(code, "1-9-1"),
            other => panic!("expected Decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_code_is_rejected() {
        assert!(char_from_jis_code("1-16").is_err());
        assert!(char_from_jis_code("a-b-c").is_err());
        assert!(char_from_jis_code("0-1-1").is_err());
        assert!(char_from_jis_code("").is_err());
    }
}
