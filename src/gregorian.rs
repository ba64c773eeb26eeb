use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DATE_SEPARATOR, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_DAYS_IN_MONTH, JDN_TO_FIXED,
    MAX_FIXED, MAX_GREGORIAN_YEAR, MIN_FIXED,
};
use crate::{CalendarError, prelude::*};

/// A proleptic Gregorian date in `0001-01-01..=9999-12-31`.
///
/// Only used at the boundary: records persist it as an ISO 8601
/// `YYYY-MM-DD` string, and it is converted to a Hebrew date for anything
/// else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct GregorianDate {
    year:  u16,
    month: u8,
    day:   u8,
}

impl GregorianDate {
    /// Creates a validated date.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidGregorianDate` if any component is out
    /// of range for the others.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, CalendarError> {
        let invalid = CalendarError::InvalidGregorianDate { year, month, day };
        if year == 0 || year > MAX_GREGORIAN_YEAR || month == 0 || month > 12 {
            return Err(invalid);
        }
        if day == 0 || day > days_in_gregorian_month(year, month) {
            return Err(invalid);
        }
        Ok(Self { year, month, day })
    }

    pub const fn year(&self) -> u16 {
        self.year
    }

    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Fixed day number, 0001-01-01 being day 1.
    pub fn to_fixed(&self) -> i64 {
        let (y, m, d) = (i64::from(self.year), i64::from(self.month), i64::from(self.day));
        let jdn = (1461 * (y + 4800 + (m - 14) / 12)) / 4 + (367 * (m - 2 - 12 * ((m - 14) / 12))) / 12
            - (3 * ((y + 4900 + (m - 14) / 12) / 100)) / 4
            + d
            - 32075;
        jdn - JDN_TO_FIXED
    }

    /// Inverse of [`Self::to_fixed`].
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` outside years 1..=9999.
    pub fn from_fixed(fixed: i64) -> Result<Self, CalendarError> {
        if !(MIN_FIXED..=MAX_FIXED).contains(&fixed) {
            return Err(CalendarError::OutOfRange(fixed));
        }
        let jdn = fixed + JDN_TO_FIXED;
        let f = jdn + 1401 + (((4 * jdn + 274_277) / 146_097) * 3) / 4 - 38;
        let e = 4 * f + 3;
        let g = (e % 1461) / 4;
        let h = 5 * g + 2;
        let day = (h % 153) / 5 + 1;
        let month = (h / 153 + 2) % 12 + 1;
        let year = e / 1461 - 4716 + (12 + 2 - month) / 12;

        let out_of_range = |_| CalendarError::OutOfRange(fixed);
        let year = u16::try_from(year).map_err(out_of_range)?;
        let month = u8::try_from(month).map_err(out_of_range)?;
        let day = u8::try_from(day).map_err(out_of_range)?;
        Self::new(year, month, day).map_err(|_| CalendarError::OutOfRange(fixed))
    }

    /// Parses the strict ISO form `YYYY-MM-DD`.
    fn parse_iso(s: &str) -> Result<Self, CalendarError> {
        let parts: Vec<&str> = s.split(DATE_SEPARATOR).collect();
        if parts.len() != 3 || parts[0].len() != 4 || parts[1].len() != 2 || parts[2].len() != 2 {
            return Err(CalendarError::InvalidFormat(s.to_owned()));
        }
        let year = Self::parse_component::<u16>(parts[0], s)?;
        let month = Self::parse_component::<u8>(parts[1], s)?;
        let day = Self::parse_component::<u8>(parts[2], s)?;
        Self::new(year, month, day)
    }

    fn parse_component<T: FromStr>(part: &str, whole: &str) -> Result<T, CalendarError> {
        if !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CalendarError::InvalidFormat(whole.to_owned()));
        }
        part.parse::<T>()
            .map_err(|_| CalendarError::InvalidFormat(whole.to_owned()))
    }
}

impl FromStr for GregorianDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CalendarError::EmptyInput);
        }
        Self::parse_iso(trimmed)
    }
}

impl Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// Helper functions

pub const fn is_gregorian_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub const fn days_in_gregorian_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= 12);

    if month == FEBRUARY && is_gregorian_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        GREGORIAN_DAYS_IN_MONTH[month as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::greg;

    #[test]
    fn test_parse_iso() {
        let date = "2023-12-15".parse::<GregorianDate>().unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2023, 12, 15));
        assert_eq!(date.to_string(), "2023-12-15");
    }

    #[test]
    fn test_parse_with_whitespace() {
        assert_eq!(" 2000-01-01 ".parse::<GregorianDate>().unwrap(), greg(2000, 1, 1));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        struct TestCase {
            input:       &'static str,
            description: &'static str,
        }

        let cases = [
            TestCase { input: "2023-12", description: "missing day" },
            TestCase { input: "2023-12-15-01", description: "too many parts" },
            TestCase { input: "15/12/2023", description: "month-first format" },
            TestCase { input: "2023-1-5", description: "unpadded components" },
            TestCase { input: "2023-+1-05", description: "sign in component" },
            TestCase { input: "abcd-ef-gh", description: "not numeric" },
            TestCase { input: "2023-12-15T00:00:00Z", description: "timestamp" },
        ];

        for case in &cases {
            assert!(
                matches!(case.input.parse::<GregorianDate>(), Err(CalendarError::InvalidFormat(_))),
                "Expected InvalidFormat for: {}",
                case.description
            );
        }
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!("  ".parse::<GregorianDate>(), Err(CalendarError::EmptyInput)));
    }

    #[test]
    fn test_invalid_components() {
        assert!(matches!(
            "2023-02-29".parse::<GregorianDate>(),
            Err(CalendarError::InvalidGregorianDate { year: 2023, month: 2, day: 29 })
        ));
        assert!("2024-02-29".parse::<GregorianDate>().is_ok());
        assert!("2023-13-01".parse::<GregorianDate>().is_err());
        assert!("0000-01-01".parse::<GregorianDate>().is_err());
    }

    #[test]
    fn test_fixed_anchors() {
        assert_eq!(greg(1, 1, 1).to_fixed(), 1);
        assert_eq!(greg(1970, 1, 1).to_fixed(), 719_163);
        assert_eq!(greg(2000, 1, 1).to_fixed(), 730_120);
        assert_eq!(greg(9999, 12, 31).to_fixed(), 3_652_059);
    }

    #[test]
    fn test_from_fixed_bounds() {
        assert_eq!(GregorianDate::from_fixed(1).unwrap(), greg(1, 1, 1));
        assert_eq!(GregorianDate::from_fixed(3_652_059).unwrap(), greg(9999, 12, 31));
        assert!(matches!(GregorianDate::from_fixed(0), Err(CalendarError::OutOfRange(0))));
        assert!(GregorianDate::from_fixed(3_652_060).is_err());
    }

    #[test]
    fn test_fixed_round_trip_across_leap_day() {
        let start = greg(2023, 12, 25).to_fixed();
        for fixed in start..start + 120 {
            assert_eq!(GregorianDate::from_fixed(fixed).unwrap().to_fixed(), fixed);
        }
        assert_eq!(greg(2024, 3, 1).to_fixed() - greg(2024, 2, 28).to_fixed(), 2);
    }

    #[test]
    fn test_serde_string_format() {
        let date = greg(1991, 8, 15);
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"1991-08-15\"");

        let parsed: GregorianDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, date);
        assert!(serde_json::from_str::<GregorianDate>("\"1991-02-30\"").is_err());
    }

    #[test]
    fn test_days_in_gregorian_month() {
        assert_eq!(days_in_gregorian_month(2023, 2), 28);
        assert_eq!(days_in_gregorian_month(2024, 2), 29);
        assert_eq!(days_in_gregorian_month(1900, 2), 28);
        assert_eq!(days_in_gregorian_month(2000, 2), 29);
        assert_eq!(days_in_gregorian_month(2024, 4), 30);
    }
}
