use crate::CalendarError;
use crate::calendar::new_year;
use crate::consts::{
    ADAR, ADAR_II, CHESHVAN, CIVIL_OFFSET, KISLEV, LEAP_YEARS_PER_CYCLE, MAX_DAY, MAX_HEBREW_YEAR,
    METONIC_CYCLE, MONTHS_IN_COMMON_YEAR, MONTHS_IN_LEAP_YEAR, SHORT_MONTHS, TISHREI,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::{NonZeroU8, NonZeroU16};

/// A Hebrew year in the range `1..=MAX_HEBREW_YEAR`, stored as an absolute
/// year (5786, not 786).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct HebrewYear(NonZeroU16);

impl HebrewYear {
    /// Creates a new year, rejecting 0 and anything past `MAX_HEBREW_YEAR`.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` if the value is out of range.
    pub fn new(value: u16) -> Result<Self, CalendarError> {
        let non_zero = NonZeroU16::new(value).ok_or(CalendarError::InvalidYear(value))?;
        if value > MAX_HEBREW_YEAR {
            return Err(CalendarError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    /// Builds a year from arithmetic that is already known to be in range.
    pub(crate) fn clamped(value: i64) -> Self {
        let offset = u16::try_from(value.saturating_sub(1).max(0)).unwrap_or(u16::MAX);
        Self(NonZeroU16::MIN.saturating_add(offset.min(MAX_HEBREW_YEAR - 1)))
    }

    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Whether this year carries the extra month Adar II
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }
}

impl TryFrom<u16> for HebrewYear {
    type Error = CalendarError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HebrewYear> for u16 {
    fn from(year: HebrewYear) -> Self {
        year.get()
    }
}

impl fmt::Display for HebrewYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month in biblical numbering: 1 = Nisan, 7 = Tishrei, 12 = Adar (Adar I
/// in a leap year), 13 = Adar II.
///
/// This is the numbering persisted in `hebrew_date_struct`. It cannot be
/// compared with a [`CivilMonth`] without an explicit conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct BiblicalMonth(NonZeroU8);

impl BiblicalMonth {
    pub const NISAN: Self = Self(NonZeroU8::MIN);
    pub const TISHREI: Self = Self(NonZeroU8::MIN.saturating_add(TISHREI - 1));
    pub const ADAR: Self = Self(NonZeroU8::MIN.saturating_add(ADAR - 1));
    pub const ADAR_II: Self = Self(NonZeroU8::MIN.saturating_add(ADAR_II - 1));

    /// Creates a month in `1..=13` without reference to a year.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` (with year 0) if out of range.
    pub fn new(value: u8) -> Result<Self, CalendarError> {
        let non_zero =
            NonZeroU8::new(value).ok_or(CalendarError::InvalidMonth { month: value, year: 0 })?;
        if value > MONTHS_IN_LEAP_YEAR {
            return Err(CalendarError::InvalidMonth { month: value, year: 0 });
        }
        Ok(Self(non_zero))
    }

    /// Creates a month and checks that it exists in `year`.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` for month 13 in a common year or
    /// any value outside `1..=13`.
    pub fn in_year(value: u8, year: HebrewYear) -> Result<Self, CalendarError> {
        let month = Self::new(value).map_err(|_| CalendarError::InvalidMonth {
            month: value,
            year: year.get(),
        })?;
        if value > months_in_year(year.get()) {
            return Err(CalendarError::InvalidMonth {
                month: value,
                year: year.get(),
            });
        }
        Ok(month)
    }

    pub(crate) fn clamped(value: u8) -> Self {
        Self(NonZeroU8::MIN.saturating_add(value.saturating_sub(1).min(MONTHS_IN_LEAP_YEAR - 1)))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Converts to civil numbering (Tishrei = 1). Adar II keeps 13.
    pub const fn to_civil(self) -> CivilMonth {
        let m = self.get();
        let civil = if m == ADAR_II {
            ADAR_II
        } else if m >= TISHREI {
            m - CIVIL_OFFSET
        } else {
            m + CIVIL_OFFSET
        };
        CivilMonth(NonZeroU8::MIN.saturating_add(civil - 1))
    }
}

impl TryFrom<u8> for BiblicalMonth {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BiblicalMonth> for u8 {
    fn from(month: BiblicalMonth) -> Self {
        month.get()
    }
}

impl From<CivilMonth> for BiblicalMonth {
    fn from(month: CivilMonth) -> Self {
        month.to_biblical()
    }
}

impl fmt::Display for BiblicalMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month in civil numbering: 1 = Tishrei, 6 = Adar (Adar I), 7 = Nisan,
/// 12 = Elul, and 13 = Adar II.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CivilMonth(NonZeroU8);

impl CivilMonth {
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` (with year 0) if outside `1..=13`.
    pub fn new(value: u8) -> Result<Self, CalendarError> {
        BiblicalMonth::new(value).map(|m| Self(m.0))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Converts back to biblical numbering (Nisan = 1).
    pub const fn to_biblical(self) -> BiblicalMonth {
        let m = self.get();
        let biblical = if m == ADAR_II {
            ADAR_II
        } else if m > CIVIL_OFFSET {
            m - CIVIL_OFFSET
        } else {
            m + CIVIL_OFFSET
        };
        BiblicalMonth(NonZeroU8::MIN.saturating_add(biblical - 1))
    }
}

impl TryFrom<u8> for CivilMonth {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CivilMonth> for u8 {
    fn from(month: CivilMonth) -> Self {
        month.get()
    }
}

impl From<BiblicalMonth> for CivilMonth {
    fn from(month: BiblicalMonth) -> Self {
        month.to_civil()
    }
}

impl fmt::Display for CivilMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day of a Hebrew month, `1..=30`. Whether it fits a particular month is
/// checked by [`crate::HebrewDate::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct HebrewDay(NonZeroU8);

impl HebrewDay {
    /// # Errors
    /// Returns `CalendarError::InvalidHebrewDate` if the value is 0 or above 30.
    pub fn new(value: u8) -> Result<Self, CalendarError> {
        let invalid = CalendarError::InvalidHebrewDate {
            day: value,
            month: 0,
            year: 0,
        };
        let non_zero = NonZeroU8::new(value).ok_or_else(|| invalid.clone())?;
        if value > MAX_DAY {
            return Err(invalid);
        }
        Ok(Self(non_zero))
    }

    pub(crate) fn clamped(value: u8) -> Self {
        Self(NonZeroU8::MIN.saturating_add(value.saturating_sub(1).min(MAX_DAY - 1)))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for HebrewDay {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HebrewDay> for u8 {
    fn from(day: HebrewDay) -> Self {
        day.get()
    }
}

impl fmt::Display for HebrewDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The year-independent part of a date that a yahrzeit recurs on.
///
/// Always keyed by civil month so that both sides of a comparison are in
/// the same numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YahrzeitKey {
    pub day:   HebrewDay,
    pub month: CivilMonth,
}

impl YahrzeitKey {
    pub const fn new(day: HebrewDay, month: CivilMonth) -> Self {
        Self { day, month }
    }
}

/// Length class of a Hebrew year, decided by how Cheshvan and Kislev fall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YearKind {
    /// 353 or 383 days: Kislev has 29 days
    Deficient,
    /// 354 or 384 days
    Regular,
    /// 355 or 385 days: Cheshvan has 30 days
    Complete,
}

impl YearKind {
    pub fn of(year: u16) -> Self {
        match days_in_year(year) % 10 {
            3 => Self::Deficient,
            5 => Self::Complete,
            _ => Self::Regular,
        }
    }
}

// Helper functions

/// Metonic rule: leap iff `(7 * year + 1) mod 19 < 7`.
pub const fn is_leap_year(year: u16) -> bool {
    ((7 * year as i64 + 1) % METONIC_CYCLE) < LEAP_YEARS_PER_CYCLE
}

pub const fn months_in_year(year: u16) -> u8 {
    if is_leap_year(year) {
        MONTHS_IN_LEAP_YEAR
    } else {
        MONTHS_IN_COMMON_YEAR
    }
}

/// Number of days from 1 Tishrei of `year` to 1 Tishrei of the next year.
pub fn days_in_year(year: u16) -> u16 {
    let y = i64::from(year);
    u16::try_from(new_year(y + 1) - new_year(y)).unwrap_or(0)
}

/// Number of days in `month` of `year`, 29 or 30.
pub fn days_in_month(month: BiblicalMonth, year: u16) -> u8 {
    let m = month.get();
    let short = SHORT_MONTHS.contains(&m)
        || (m == ADAR && !is_leap_year(year))
        || (m == CHESHVAN && YearKind::of(year) != YearKind::Complete)
        || (m == KISLEV && YearKind::of(year) == YearKind::Deficient);
    if short { MAX_DAY - 1 } else { MAX_DAY }
}
