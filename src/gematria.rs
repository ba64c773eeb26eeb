//! Hebrew numerals (gematria).
//!
//! Numbers are spelled greedily from the largest letter value down, with
//! 15 and 16 written ט״ו and ט״ז rather than spelling a divine name. A lone
//! letter takes a geresh after it; longer numerals take a gershayim before
//! their last letter.
//!
//! ```
//! use yahrzeit::gematria;
//!
//! assert_eq!("כ״ב", gematria::encode(22).unwrap());
//! assert_eq!("ט״ו", gematria::encode(15).unwrap());
//! assert_eq!(22, gematria::decode("כ\"ב").unwrap());
//! ```

use serde::{Deserialize, Serialize};

use crate::CalendarError;
use crate::consts::{
    ASCII_GERESH, ASCII_GERSHAYIM, FINAL_LETTERS, GEMATRIA_LETTERS, GERESH, GERSHAYIM, MAX_GEMATRIA,
    MILLENNIUM,
};

/// Which marks to use for geresh and gershayim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Punctuation {
    /// `׳` and `״`
    Hebrew,
    /// `'` and `"`, as typed on a keyboard and stored in legacy records
    #[default]
    Ascii,
}

impl Punctuation {
    pub const fn geresh(self) -> char {
        match self {
            Self::Hebrew => GERESH,
            Self::Ascii => ASCII_GERESH,
        }
    }

    pub const fn gershayim(self) -> char {
        match self {
            Self::Hebrew => GERSHAYIM,
            Self::Ascii => ASCII_GERSHAYIM,
        }
    }
}

/// Spells `n` in bare letters, without punctuation.
///
/// # Errors
/// Returns `CalendarError::InvalidInput` for 0 or anything above 999.
pub fn letters(n: u32) -> Result<String, CalendarError> {
    if n == 0 || n > MAX_GEMATRIA {
        return Err(CalendarError::InvalidInput(n));
    }

    let mut out = String::new();
    let mut rest = n;
    for &(value, letter) in &GEMATRIA_LETTERS {
        match rest {
            15 => {
                out.push_str("טו");
                break;
            },
            16 => {
                out.push_str("טז");
                break;
            },
            _ => {},
        }
        while rest >= value {
            out.push(letter);
            rest -= value;
        }
        if rest == 0 {
            break;
        }
    }
    Ok(out)
}

/// Adds geresh or gershayim to a run of bare letters.
pub fn punctuate(bare: &str, marks: Punctuation) -> String {
    let mut chars: Vec<char> = bare.chars().collect();
    match chars.len() {
        0 => String::new(),
        1 => {
            chars.push(marks.geresh());
            chars.into_iter().collect()
        },
        n => {
            chars.insert(n - 1, marks.gershayim());
            chars.into_iter().collect()
        },
    }
}

/// Removes geresh, gershayim and their ASCII stand-ins.
pub fn strip_punctuation(text: &str) -> String {
    text.chars().filter(|c| !is_numeral_mark(*c)).collect()
}

pub(crate) const fn is_numeral_mark(c: char) -> bool {
    matches!(c, GERESH | GERSHAYIM | ASCII_GERESH | ASCII_GERSHAYIM)
}

/// Encodes `n` with Hebrew marks, e.g. `23` → `כ״ג`.
///
/// # Errors
/// Returns `CalendarError::InvalidInput` for 0 or anything above 999.
pub fn encode(n: u32) -> Result<String, CalendarError> {
    encode_with(n, Punctuation::Hebrew)
}

/// Encodes `n` with the given marks.
///
/// # Errors
/// Returns `CalendarError::InvalidInput` for 0 or anything above 999.
pub fn encode_with(n: u32, marks: Punctuation) -> Result<String, CalendarError> {
    letters(n).map(|bare| punctuate(&bare, marks))
}

/// Short form of a year (modulo 1000) in bare letters; empty for exact
/// millennia such as 5000.
pub fn year_letters(year: u16) -> String {
    letters(u32::from(year % MILLENNIUM)).unwrap_or_default()
}

fn letter_value(c: char) -> Option<u32> {
    GEMATRIA_LETTERS
        .iter()
        .find(|&&(_, letter)| letter == c)
        .map(|&(value, _)| value)
        .or_else(|| FINAL_LETTERS.iter().find(|&&(f, _)| f == c).map(|&(_, v)| v))
}

/// Sums the letter values of a numeral, ignoring punctuation marks.
///
/// # Errors
/// Returns `CalendarError::InvalidFormat` on an empty numeral, any
/// character that is not a Hebrew letter or numeral mark, or a sum too
/// large for a `u32`.
pub fn decode(text: &str) -> Result<u32, CalendarError> {
    let bare = strip_punctuation(text.trim());
    if bare.is_empty() {
        return Err(CalendarError::InvalidFormat(text.to_owned()));
    }
    bare.chars().try_fold(0_u32, |sum, c| {
        letter_value(c)
            .and_then(|v| sum.checked_add(v))
            .ok_or_else(|| CalendarError::InvalidFormat(text.to_owned()))
    })
}

/// Decodes a year numeral.
///
/// A leading letter worth less than the one after it is a thousands digit,
/// so `התשפ״ד` is 5784. Without one, `default_millennium` thousands are
/// added, so `תשפ״ד` is also 5784 with the usual default of 5.
///
/// # Errors
/// Returns `CalendarError::InvalidFormat` as for [`decode`] or if the year
/// does not fit a `u16`.
pub fn decode_year(text: &str, default_millennium: u16) -> Result<u16, CalendarError> {
    let bare = strip_punctuation(text.trim());
    let mut chars = bare.chars();
    let (first, second) = (chars.next(), chars.next());

    let (thousands, rest) = match (first.and_then(letter_value), second.and_then(letter_value)) {
        (Some(lead), Some(next)) if lead < next => {
            let skip = first.map_or(0, char::len_utf8);
            (lead, &bare[skip..])
        },
        _ => (u32::from(default_millennium), bare.as_str()),
    };

    let units = decode(rest)?;
    thousands
        .checked_mul(u32::from(MILLENNIUM))
        .and_then(|t| t.checked_add(units))
        .and_then(|year| u16::try_from(year).ok())
        .ok_or_else(|| CalendarError::InvalidFormat(text.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_special_cases() {
        assert_eq!(encode(15).unwrap(), "ט״ו");
        assert_eq!(encode(16).unwrap(), "ט״ז");
        assert_ne!(encode(15).unwrap(), "י״ה");
        assert_ne!(encode(16).unwrap(), "י״ו");
    }

    #[test]
    fn test_encode_punctuation_rule() {
        struct TestCase {
            n:        u32,
            expected: &'static str,
        }

        let cases = [
            TestCase { n: 1, expected: "א׳" },
            TestCase { n: 9, expected: "ט׳" },
            TestCase { n: 10, expected: "י׳" },
            TestCase { n: 11, expected: "י״א" },
            TestCase { n: 20, expected: "כ׳" },
            TestCase { n: 23, expected: "כ״ג" },
            TestCase { n: 30, expected: "ל׳" },
            TestCase { n: 115, expected: "קט״ו" },
            TestCase { n: 216, expected: "רט״ז" },
            TestCase { n: 400, expected: "ת׳" },
            TestCase { n: 784, expected: "תשפ״ד" },
            TestCase { n: 800, expected: "ת״ת" },
            TestCase { n: 999, expected: "תתקצ״ט" },
        ];

        for case in &cases {
            assert_eq!(encode(case.n).unwrap(), case.expected, "encode({})", case.n);
        }
    }

    #[test]
    fn test_encode_ascii_marks() {
        assert_eq!(encode_with(2, Punctuation::Ascii).unwrap(), "ב'");
        assert_eq!(encode_with(22, Punctuation::Ascii).unwrap(), "כ\"ב");
    }

    #[test]
    fn test_encode_out_of_range() {
        assert!(matches!(encode(0), Err(CalendarError::InvalidInput(0))));
        assert!(matches!(encode(1000), Err(CalendarError::InvalidInput(1000))));
    }

    #[test]
    fn test_greedy_decomposition_uses_each_letter_value() {
        assert_eq!(letters(345).unwrap(), "שמה");
        assert_eq!(letters(14).unwrap(), "יד");
        assert_eq!(letters(17).unwrap(), "יז");
        assert_eq!(letters(500).unwrap(), "תק");
    }

    #[test]
    fn test_punctuate_empty() {
        assert_eq!(punctuate("", Punctuation::Hebrew), "");
    }

    #[test]
    fn test_strip_punctuation() {
        assert_eq!(strip_punctuation("כ״ב"), "כב");
        assert_eq!(strip_punctuation("התשפ\"ד"), "התשפד");
        assert_eq!(strip_punctuation("ב'"), "ב");
        assert_eq!(strip_punctuation("א׳"), "א");
    }

    #[test]
    fn test_year_letters() {
        assert_eq!(year_letters(5784), "תשפד");
        assert_eq!(year_letters(5760), "תשס");
        assert_eq!(year_letters(5000), "");
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode("כ״ב").unwrap(), 22);
        assert_eq!(decode("ט\"ו").unwrap(), 15);
        assert_eq!(decode("תשפ״ד").unwrap(), 784);
        assert_eq!(decode("ך").unwrap(), 20);
        assert!(matches!(decode(""), Err(CalendarError::InvalidFormat(_))));
        assert!(matches!(decode("12"), Err(CalendarError::InvalidFormat(_))));
    }

    #[test]
    fn test_decode_inverts_encode() {
        for n in 1..=MAX_GEMATRIA {
            assert_eq!(decode(&encode(n).unwrap()).unwrap(), n, "n = {n}");
        }
    }

    #[test]
    fn test_decode_year() {
        assert_eq!(decode_year("התשפ\"ד", 5).unwrap(), 5784);
        assert_eq!(decode_year("תשפ״ד", 5).unwrap(), 5784);
        assert_eq!(decode_year("תש\"ס", 5).unwrap(), 5760);
        assert_eq!(decode_year("התש\"ס", 5).unwrap(), 5760);
        assert_eq!(decode_year("ה'תשע\"ז", 5).unwrap(), 5777);
        assert!(decode_year("", 5).is_err());
    }

    #[test]
    fn test_decode_rejects_overflowing_sums() {
        // 11,000,000 × 400 does not fit a u32
        let huge = "ת".repeat(11_000_000);
        assert!(matches!(decode(&huge), Err(CalendarError::InvalidFormat(_))));
    }

    #[test]
    fn test_decode_year_rejects_years_past_u16() {
        let long = format!("ה{}", "ת".repeat(200));
        assert!(matches!(decode_year(&long, 5), Err(CalendarError::InvalidFormat(_))));
        assert!(matches!(decode_year("א", 70), Err(CalendarError::InvalidFormat(_))));
        assert!(matches!(decode_year("ת", u16::MAX), Err(CalendarError::InvalidFormat(_))));
    }
}
