//! Hebrew month names.
//!
//! Names are the bare form used in rendering (`כסלו`); the formatter adds
//! the `ב` preposition itself.

use crate::CalendarError;
use crate::consts::{ADAR, ADAR_II, MONTH_PREPOSITION};
use crate::types::{BiblicalMonth, HebrewYear, is_leap_year};

/// Names of months 1..=11 in biblical order (index 0 unused).
const MONTH_NAMES: [&str; 12] = [
    "", "ניסן", "אייר", "סיון", "תמוז", "אב", "אלול", "תשרי", "חשון", "כסלו", "טבת", "שבט",
];

pub const ADAR_NAME: &str = "אדר";
pub const ADAR_I_NAME: &str = "אדר א";
pub const ADAR_II_NAME: &str = "אדר ב";

/// Alternate spellings found in legacy text, mapped to the canonical month.
const ALIASES: [(&str, u8); 5] = [("חשוון", 8), ("מרחשון", 8), ("מרחשוון", 8), ("כסליו", 9), ("סיוון", 3)];

/// Resolves the display name of `month` in `year`.
///
/// Month 12 is `אדר` in a common year and `אדר א` in a leap year; month 13
/// is `אדר ב` and only exists in leap years.
///
/// # Errors
/// Returns `CalendarError::InvalidMonth` for month 13 in a common year or
/// any value outside `1..=13`.
///
/// ```
/// use yahrzeit::month::month_name;
///
/// assert_eq!("אדר א", month_name(12, 5784).unwrap());
/// assert_eq!("אדר", month_name(12, 5783).unwrap());
/// assert!(month_name(13, 5783).is_err());
/// ```
pub fn month_name(month: u8, year: u16) -> Result<&'static str, CalendarError> {
    let invalid = CalendarError::InvalidMonth { month, year };
    let year = HebrewYear::new(year).map_err(|_| invalid.clone())?;
    let month = BiblicalMonth::in_year(month, year)?;
    Ok(name_of(month, year))
}

/// Name of a month already known to exist in `year`.
pub(crate) fn name_of(month: BiblicalMonth, year: HebrewYear) -> &'static str {
    match month.get() {
        ADAR if year.is_leap() => ADAR_I_NAME,
        ADAR => ADAR_NAME,
        ADAR_II => ADAR_II_NAME,
        m => MONTH_NAMES.get(usize::from(m)).copied().unwrap_or_default(),
    }
}

/// Every month of `year` in biblical order, 12 or 13 names.
pub fn month_names(year: u16) -> Vec<&'static str> {
    let mut names: Vec<&'static str> = MONTH_NAMES[1..].to_vec();
    if is_leap_year(year) {
        names.extend([ADAR_I_NAME, ADAR_II_NAME]);
    } else {
        names.push(ADAR_NAME);
    }
    names
}

/// Looks up a single month word, with or without the `ב` preposition.
///
/// Adar is returned as month 12; telling Adar I from Adar II needs the
/// following word, which [`crate::parse`] handles.
pub fn parse_month_name(word: &str) -> Option<BiblicalMonth> {
    lookup(word).or_else(|| word.strip_prefix(MONTH_PREPOSITION).and_then(lookup))
}

fn lookup(word: &str) -> Option<BiblicalMonth> {
    let number = if word == ADAR_NAME {
        Some(ADAR)
    } else {
        MONTH_NAMES
            .iter()
            .skip(1)
            .position(|&name| name == word)
            .and_then(|i| u8::try_from(i + 1).ok())
            .or_else(|| ALIASES.iter().find(|&&(alias, _)| alias == word).map(|&(_, m)| m))
    };
    number.and_then(|m| BiblicalMonth::new(m).ok())
}
