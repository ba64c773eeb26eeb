//! Strict display form of Hebrew dates.
//!
//! Every listing renders dates as `<day> ב<month>, ה<year>`, e.g.
//! `כ"ב בכסלו, התשפ"ד`, whatever the source of the date was.

use crate::consts::{MILLENNIUM_PREFIX, MONTH_PREPOSITION};
use crate::gematria::{self, Punctuation, is_numeral_mark};
use crate::month::parse_month_name;
use crate::{CalendarConfig, HebrewDate};

/// Day of month as a punctuated numeral, e.g. `כ"ב`.
pub fn format_day(day: u8, marks: Punctuation) -> String {
    gematria::encode_with(u32::from(day), marks).unwrap_or_default()
}

/// Year with the millennium letter, punctuated as one numeral.
///
/// The short year is spelled bare, `ה` is put in front, and only then is
/// the gershayim placed, so 5784 reads `התשפ"ד`.
pub fn format_year(year: u16, marks: Punctuation) -> String {
    let mut bare = String::from(MILLENNIUM_PREFIX);
    bare.push_str(&gematria::year_letters(year));
    gematria::punctuate(&bare, marks)
}

/// Renders the strict form with the given marks.
pub fn strict(date: &HebrewDate, marks: Punctuation) -> String {
    format!(
        "{} {}{}, {}",
        format_day(date.day().get(), marks),
        MONTH_PREPOSITION,
        date.month_name(),
        format_year(date.year(), marks)
    )
}

/// Renders the strict form using the configured marks.
pub fn format(date: &HebrewDate, config: &CalendarConfig) -> String {
    strict(date, config.punctuation)
}

/// Reduces free text to a comparable skeleton: numeral marks removed,
/// dashes and commas turned into spaces, the `ב` preposition dropped from
/// month words, whitespace collapsed.
///
/// ```
/// use yahrzeit::format::normalize_text;
///
/// assert_eq!("כב כסלו התשפד", normalize_text("כ\"ב בכסלו, התשפ\"ד"));
/// ```
pub fn normalize_text(text: &str) -> String {
    let cleaned: String = text
        .chars()
        .filter(|c| !is_numeral_mark(*c))
        .map(|c| if matches!(c, '-' | ',') { ' ' } else { c })
        .collect();

    cleaned
        .split_whitespace()
        .map(|word| match word.strip_prefix(MONTH_PREPOSITION) {
            Some(rest) if parse_month_name(rest).is_some() => rest,
            _ => word,
        })
        .collect::<Vec<_>>()
        .join(" ")
}
