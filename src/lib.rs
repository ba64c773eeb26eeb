//! Hebrew calendar engine for memorial (yahrzeit) listings.
//!
//! Converts between Gregorian and Hebrew dates, spells days and years in
//! Hebrew numerals, renders the strict display form used across listings,
//! and picks the memorials whose anniversary falls on a given Hebrew day.
//!
//! ```
//! use yahrzeit::{GregorianDate, HebrewDate};
//!
//! let g: GregorianDate = "2023-12-15".parse().unwrap();
//! let h = HebrewDate::from_gregorian(&g);
//!
//! assert_eq!((h.year(), h.month().get(), h.day().get()), (5784, 10, 3));
//! assert_eq!(h.to_string(), "ג' בטבת, התשפ\"ד");
//! assert_eq!(h.to_gregorian().unwrap(), g);
//! ```
//!
//! Every function is pure; the only ambient input is the [`Clock`] handed
//! to the matcher.

pub mod calendar;
pub mod config;
mod consts;
pub mod format;
pub mod gematria;
mod gregorian;
pub mod matcher;
pub mod month;
pub mod parse;
mod prelude;
pub mod record;
mod types;

pub use config::CalendarConfig;
pub use consts::*;
pub use gematria::Punctuation;
pub use gregorian::{GregorianDate, days_in_gregorian_month, is_gregorian_leap_year};
pub use matcher::{Clock, Confidence, Dated, FixedClock, Match, SystemClock, match_on, match_today, match_today_with};
pub use record::{DateFields, DateSource, FieldChange, HebrewDateParts, Normalized, RecordError, resolve, resolve_with};
pub use types::{
    BiblicalMonth, CivilMonth, HebrewDay, HebrewYear, YahrzeitKey, YearKind, days_in_month, days_in_year,
    is_leap_year, months_in_year,
};

use crate::prelude::*;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A validated Hebrew calendar date.
///
/// The month is kept in biblical numbering (1 = Nisan, 13 = Adar II), as
/// persisted in `hebrew_date_struct`. Construction guarantees that the
/// month exists in the year and the day exists in the month, so
/// conversion and formatting never see an impossible date.
///
/// `Display` renders the strict form, e.g. `כ"ב בכסלו, התשפ"ד`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "HebrewDateParts", into = "HebrewDateParts")]
pub struct HebrewDate {
    year:  HebrewYear,
    month: BiblicalMonth,
    day:   HebrewDay,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum CalendarError {
    #[display(fmt = "No Hebrew numeral for {} (must be 1-{})", "_0", MAX_GEMATRIA)]
    InvalidInput(u32),
    #[display(fmt = "Invalid month {} for year {}", month, year)]
    InvalidMonth { month: u8, year: u16 },
    #[display(fmt = "Invalid Hebrew date: day {} of month {} in {}", day, month, year)]
    InvalidHebrewDate { day: u8, month: u8, year: u16 },
    #[display(fmt = "Invalid Hebrew year: {} (must be 1-{})", "_0", MAX_HEBREW_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid Gregorian date {:04}-{:02}-{:02}", year, month, day)]
    InvalidGregorianDate { year: u16, month: u8, day: u8 },
    #[display(fmt = "Day number {} is outside the supported range", "_0")]
    OutOfRange(i64),
    #[display(fmt = "Invalid date format: {}", "_0")]
    InvalidFormat(String),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for CalendarError {}

impl HebrewDate {
    /// Creates a date from raw biblical-numbered components.
    ///
    /// # Errors
    /// - `CalendarError::InvalidYear` if the year is 0 or too large
    /// - `CalendarError::InvalidMonth` for month 13 in a common year or
    ///   anything outside `1..=13`
    /// - `CalendarError::InvalidHebrewDate` if the day is 0 or past the end
    ///   of the month in that year
    /// - `CalendarError::OutOfRange` before 18 Tevet 3761 or after
    ///   28 Cheshvan 13760, the days with no Gregorian counterpart in
    ///   years 1..=9999
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, CalendarError> {
        let year_nz = HebrewYear::new(year)?;
        let month_nz = BiblicalMonth::in_year(month, year_nz)?;
        if day == 0 || day > days_in_month(month_nz, year) {
            return Err(CalendarError::InvalidHebrewDate { day, month, year });
        }
        let date = Self {
            year:  year_nz,
            month: month_nz,
            day:   HebrewDay::clamped(day),
        };
        let fixed = date.to_fixed();
        if !(MIN_FIXED..=MAX_FIXED).contains(&fixed) {
            return Err(CalendarError::OutOfRange(fixed));
        }
        Ok(date)
    }

    /// Creates a date from a civil-numbered month (1 = Tishrei).
    ///
    /// # Errors
    /// Same as [`Self::new`].
    pub fn from_civil(year: u16, month: CivilMonth, day: u8) -> Result<Self, CalendarError> {
        Self::new(year, month.to_biblical().get(), day)
    }

    /// Assembles a date from components the caller has already checked.
    pub(crate) const fn from_trusted(year: HebrewYear, month: BiblicalMonth, day: HebrewDay) -> Self {
        Self { year, month, day }
    }

    pub const fn day(&self) -> HebrewDay {
        self.day
    }

    /// Month in biblical numbering
    pub const fn month(&self) -> BiblicalMonth {
        self.month
    }

    /// Month in civil numbering
    pub const fn civil_month(&self) -> CivilMonth {
        self.month.to_civil()
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn year_typed(&self) -> HebrewYear {
        self.year
    }

    pub const fn is_leap_year(&self) -> bool {
        self.year.is_leap()
    }

    /// Bare month name, Adar I/II resolved for the year.
    pub fn month_name(&self) -> &'static str {
        month::name_of(self.month, self.year)
    }

    /// The day and civil month this date recurs on each year.
    pub const fn yahrzeit_key(&self) -> YahrzeitKey {
        YahrzeitKey::new(self.day, self.civil_month())
    }

    /// Strict display form with the chosen punctuation marks.
    pub fn format_with(&self, marks: Punctuation) -> String {
        format::strict(self, marks)
    }

    pub fn from_gregorian(date: &GregorianDate) -> Self {
        calendar::to_hebrew(date)
    }

    /// Every validated date has a Gregorian counterpart; the `Result` only
    /// carries the range check of [`GregorianDate::from_fixed`].
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` if the equivalent Gregorian date
    /// falls outside years 1..=9999.
    pub fn to_gregorian(&self) -> Result<GregorianDate, CalendarError> {
        calendar::to_gregorian(self)
    }

    /// Fixed day number (0001-01-01 Gregorian is day 1).
    pub fn to_fixed(&self) -> i64 {
        calendar::fixed_from_hebrew(self)
    }

    /// # Errors
    /// Returns `CalendarError::OutOfRange` outside `MIN_FIXED..=MAX_FIXED`.
    pub fn from_fixed(fixed: i64) -> Result<Self, CalendarError> {
        calendar::hebrew_from_fixed(fixed)
    }

    /// Moves `days` forward (or backward when negative).
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` if the result leaves the supported
    /// range.
    pub fn checked_add_days(&self, days: i64) -> Result<Self, CalendarError> {
        let fixed = self
            .to_fixed()
            .checked_add(days)
            .ok_or(CalendarError::OutOfRange(i64::MAX))?;
        Self::from_fixed(fixed)
    }

    /// Persisted `{day, month, year}` form.
    pub const fn to_parts(&self) -> HebrewDateParts {
        HebrewDateParts {
            day:   self.day.get(),
            month: self.month.get(),
            year:  self.year.get(),
        }
    }
}

impl TryFrom<HebrewDateParts> for HebrewDate {
    type Error = CalendarError;

    fn try_from(parts: HebrewDateParts) -> Result<Self, Self::Error> {
        Self::new(parts.year, parts.month, parts.day)
    }
}

impl From<HebrewDate> for HebrewDateParts {
    fn from(date: HebrewDate) -> Self {
        date.to_parts()
    }
}

impl fmt::Display for HebrewDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format::strict(self, Punctuation::Ascii))
    }
}

impl FromStr for HebrewDate {
    type Err = CalendarError;

    /// Parses free text such as `כ"ב בכסלו, התשפ"ד` or `כב כסלו תשפד`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::parse_hebrew_date(s, &CalendarConfig::default())
    }
}

impl PartialOrd for HebrewDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HebrewDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_fixed().cmp(&other.to_fixed())
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use super::*;

    pub fn heb(year: u16, month: u8, day: u8) -> HebrewDate {
        HebrewDate::new(year, month, day).expect("valid hebrew date in test")
    }

    pub fn greg(year: u16, month: u8, day: u8) -> GregorianDate {
        GregorianDate::new(year, month, day).expect("valid gregorian date in test")
    }
}
