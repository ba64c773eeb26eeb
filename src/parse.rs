//! Parsing of free-text Hebrew dates from legacy records.
//!
//! Accepts the strict form and the looser spellings people typed by hand:
//! `כ"ב בכסלו, התשפ"ד`, `כב כסלו תשפד`, `י-אב-תשעג`, `14 אדר ב 5784`.
//! The month word is located first; the numeral before it is the day and
//! everything after it is the year.

use crate::consts::{ADAR, ADAR_II, MAX_DAY};
use crate::format::normalize_text;
use crate::gematria;
use crate::month::parse_month_name;
use crate::{CalendarConfig, CalendarError, HebrewDate};

const ADAR_FIRST_MARKERS: [&str; 3] = ["א", "ראשון", "I"];
const ADAR_SECOND_MARKERS: [&str; 3] = ["ב", "שני", "II"];

/// Parses a free-text Hebrew date into a validated [`HebrewDate`].
///
/// # Errors
/// - `CalendarError::EmptyInput` for blank text
/// - `CalendarError::InvalidFormat` if no month word is found, the day or
///   year is missing, or a numeral cannot be decoded
/// - any validation error from [`HebrewDate::new`]
pub fn parse_hebrew_date(text: &str, config: &CalendarConfig) -> Result<HebrewDate, CalendarError> {
    if text.trim().is_empty() {
        return Err(CalendarError::EmptyInput);
    }

    let normalized = normalize_text(text);
    let tokens: Vec<&str> = normalized.split_whitespace().collect();

    let (index, month) = tokens
        .iter()
        .enumerate()
        .find_map(|(i, token)| parse_month_name(token).map(|m| (i, m.get())))
        .ok_or_else(|| CalendarError::InvalidFormat(text.to_owned()))?;

    let mut year_start = index + 1;
    let mut month = month;
    if month == ADAR {
        match tokens.get(year_start) {
            Some(marker) if ADAR_FIRST_MARKERS.contains(marker) => year_start += 1,
            Some(marker) if ADAR_SECOND_MARKERS.contains(marker) => {
                month = ADAR_II;
                year_start += 1;
            },
            _ => {},
        }
    }

    let day_text = tokens[..index].concat();
    let year_text = tokens.get(year_start..).map(|rest| rest.concat()).unwrap_or_default();
    if day_text.is_empty() || year_text.is_empty() {
        return Err(CalendarError::InvalidFormat(text.to_owned()));
    }

    let day = parse_day(&day_text, text)?;
    let year = parse_year(&year_text, text, config.default_millennium)?;
    HebrewDate::new(year, month, day)
}

fn parse_day(day_text: &str, original: &str) -> Result<u8, CalendarError> {
    let value = if day_text.bytes().all(|b| b.is_ascii_digit()) {
        day_text.parse::<u32>().ok()
    } else {
        gematria::decode(day_text).ok()
    };
    // Words before the month are joined, so stray text yields a huge "day".
    value
        .and_then(|v| u8::try_from(v).ok())
        .filter(|&day| day <= MAX_DAY)
        .ok_or_else(|| CalendarError::InvalidFormat(original.to_owned()))
}

fn parse_year(year_text: &str, original: &str, default_millennium: u16) -> Result<u16, CalendarError> {
    if year_text.bytes().all(|b| b.is_ascii_digit()) {
        return year_text
            .parse::<u16>()
            .map_err(|_| CalendarError::InvalidFormat(original.to_owned()));
    }
    gematria::decode_year(year_text, default_millennium)
        .map_err(|_| CalendarError::InvalidFormat(original.to_owned()))
}
