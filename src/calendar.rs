//! Hebrew ⇄ Gregorian conversion through fixed day numbers.
//!
//! A fixed day number counts days from 0001-01-01 (proleptic Gregorian),
//! which is day 1. Both calendars convert to and from it, so any pair of
//! conversions composes through a single integer.
//!
//! The Hebrew side follows the arithmetic calendar: months elapsed since the
//! epoch, the molad of Tishrei in parts, and the four postponement rules
//! (folded into [`elapsed_days`] and [`year_length_correction`]).

use tracing::debug;

use crate::consts::{
    HEBREW_EPOCH, MAX_FIXED, MEAN_YEAR_DENOMINATOR, MEAN_YEAR_NUMERATOR, MIN_FIXED, MOLAD_BAHARAD_PARTS,
    MONTH_EXCESS_PARTS, MONTHS_PER_CYCLE, METONIC_CYCLE, NISAN, PARTS_PER_DAY, TISHREI,
};
use crate::types::{BiblicalMonth, HebrewDay, HebrewYear, days_in_month, months_in_year};
use crate::{CalendarError, GregorianDate, HebrewDate};

/// Days from the epoch to the molad-derived start of `year`, with the
/// "lo ADU rosh" postponement applied.
fn elapsed_days(year: i64) -> i64 {
    let months_elapsed = (MONTHS_PER_CYCLE * year - (MONTHS_PER_CYCLE - 1)).div_euclid(METONIC_CYCLE);
    let parts_elapsed = MOLAD_BAHARAD_PARTS + MONTH_EXCESS_PARTS * months_elapsed;
    let days = 29 * months_elapsed + parts_elapsed.div_euclid(PARTS_PER_DAY);
    if (3 * (days + 1)).rem_euclid(7) < 3 { days + 1 } else { days }
}

/// Extra delay keeping year lengths within 353..=355 and 383..=385.
fn year_length_correction(year: i64) -> i64 {
    let ny0 = elapsed_days(year - 1);
    let ny1 = elapsed_days(year);
    let ny2 = elapsed_days(year + 1);
    if ny2 - ny1 == 356 {
        2
    } else if ny1 - ny0 == 382 {
        1
    } else {
        0
    }
}

/// Fixed day number of 1 Tishrei of `year`.
pub(crate) fn new_year(year: i64) -> i64 {
    HEBREW_EPOCH + elapsed_days(year) + year_length_correction(year)
}

fn month_length(month: u8, year: u16) -> i64 {
    i64::from(days_in_month(BiblicalMonth::clamped(month), year))
}

/// Fixed day number of a Hebrew (year, month, day) triple. The triple is
/// trusted; validation belongs to [`HebrewDate::new`].
pub(crate) fn fixed_from_parts(year: u16, month: u8, day: u8) -> i64 {
    let last_month = months_in_year(year);
    let months_before: i64 = if month < TISHREI {
        (TISHREI..=last_month)
            .chain(NISAN..month)
            .map(|m| month_length(m, year))
            .sum()
    } else {
        (TISHREI..month).map(|m| month_length(m, year)).sum()
    };
    new_year(i64::from(year)) + months_before + i64::from(day) - 1
}

/// Fixed day number of a Hebrew date.
pub fn fixed_from_hebrew(date: &HebrewDate) -> i64 {
    fixed_from_parts(date.year(), date.month().get(), date.day().get())
}

/// Hebrew date for a fixed day number.
///
/// # Errors
/// Returns `CalendarError::OutOfRange` outside `MIN_FIXED..=MAX_FIXED`
/// (18 Tevet 3761 to 28 Cheshvan 13760).
pub fn hebrew_from_fixed(fixed: i64) -> Result<HebrewDate, CalendarError> {
    if !(MIN_FIXED..=MAX_FIXED).contains(&fixed) {
        return Err(CalendarError::OutOfRange(fixed));
    }

    let approx = (fixed - HEBREW_EPOCH) * MEAN_YEAR_DENOMINATOR / MEAN_YEAR_NUMERATOR + 1;
    let mut year = (approx - 1).max(1);
    while new_year(year + 1) <= fixed {
        year += 1;
    }
    let year = HebrewYear::clamped(year);
    let y = year.get();

    let mut month = if fixed < fixed_from_parts(y, NISAN, 1) {
        TISHREI
    } else {
        NISAN
    };
    while fixed > fixed_from_parts(y, month, days_in_month(BiblicalMonth::clamped(month), y)) {
        month += 1;
    }

    let first = fixed_from_parts(y, month, 1);
    let day = u8::try_from(fixed - first + 1).map_err(|_| CalendarError::OutOfRange(fixed))?;

    Ok(HebrewDate::from_trusted(
        year,
        BiblicalMonth::clamped(month),
        HebrewDay::clamped(day),
    ))
}

/// Converts a Gregorian date to the Hebrew date that contains it.
///
/// A `GregorianDate` always lies in `MIN_FIXED..=MAX_FIXED`, the same span
/// `hebrew_from_fixed` accepts, so the error arm is unreachable.
pub fn to_hebrew(date: &GregorianDate) -> HebrewDate {
    let fixed = date.to_fixed();
    match hebrew_from_fixed(fixed) {
        Ok(hebrew) => hebrew,
        Err(error) => {
            debug!(%date, fixed, %error, "Gregorian date outside the Hebrew span, using 18 Tevet 3761");
            HebrewDate::from_trusted(HebrewYear::clamped(3761), BiblicalMonth::clamped(10), HebrewDay::clamped(18))
        },
    }
}

/// Converts a Hebrew date to its Gregorian equivalent.
///
/// # Errors
/// Returns `CalendarError::OutOfRange` if the date falls outside
/// 0001-01-01..=9999-12-31.
pub fn to_gregorian(date: &HebrewDate) -> Result<GregorianDate, CalendarError> {
    GregorianDate::from_fixed(fixed_from_hebrew(date))
}

/// Validates a raw (day, month, year) triple and converts it.
///
/// # Errors
/// Returns `CalendarError::InvalidHebrewDate` if the day does not exist in
/// that month, `CalendarError::InvalidMonth` for Adar II in a common year,
/// and `CalendarError::OutOfRange` as for [`to_gregorian`].
pub fn parts_to_gregorian(day: u8, month: u8, year: u16) -> Result<GregorianDate, CalendarError> {
    to_gregorian(&HebrewDate::new(year, month, day)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{greg, heb};
    use crate::consts::MAX_HEBREW_YEAR;
    use proptest::prelude::*;

    #[test]
    fn test_epoch_is_first_of_tishrei() {
        assert_eq!(new_year(1), HEBREW_EPOCH);
        assert_eq!(fixed_from_parts(1, TISHREI, 1), HEBREW_EPOCH);
    }

    #[test]
    fn test_span_bounds() {
        let first = hebrew_from_fixed(MIN_FIXED).unwrap();
        assert_eq!((first.year(), first.month().get(), first.day().get()), (3761, 10, 18));
        let last = hebrew_from_fixed(MAX_FIXED).unwrap();
        assert_eq!((last.year(), last.month().get(), last.day().get()), (13760, 8, 28));

        for fixed in [HEBREW_EPOCH, MIN_FIXED - 1, MAX_FIXED + 1] {
            assert!(matches!(hebrew_from_fixed(fixed), Err(CalendarError::OutOfRange(f)) if f == fixed));
        }
    }

    #[test]
    fn test_known_conversions() {
        struct TestCase {
            gregorian:   (u16, u8, u8),
            hebrew:      (u16, u8, u8),
            description: &'static str,
        }

        let cases = [
            TestCase {
                gregorian:   (2023, 12, 15),
                hebrew:      (5784, 10, 3),
                description: "3 Tevet, after a 29-day Kislev",
            },
            TestCase {
                gregorian:   (2000, 1, 1),
                hebrew:      (5760, 10, 23),
                description: "23 Tevet 5760",
            },
            TestCase {
                gregorian:   (2024, 3, 21),
                hebrew:      (5784, 13, 11),
                description: "Adar II in a leap year",
            },
            TestCase {
                gregorian:   (2024, 4, 23),
                hebrew:      (5784, 1, 15),
                description: "first day of Pesach",
            },
            TestCase {
                gregorian:   (2023, 9, 16),
                hebrew:      (5784, 7, 1),
                description: "Rosh Hashanah 5784",
            },
            TestCase {
                gregorian:   (2024, 10, 3),
                hebrew:      (5785, 7, 1),
                description: "Rosh Hashanah 5785",
            },
            TestCase {
                gregorian:   (2025, 9, 23),
                hebrew:      (5786, 7, 1),
                description: "Rosh Hashanah 5786",
            },
            TestCase {
                gregorian:   (1970, 1, 1),
                hebrew:      (5730, 10, 23),
                description: "Unix epoch",
            },
            TestCase {
                gregorian:   (1, 1, 1),
                hebrew:      (3761, 10, 18),
                description: "first supported Gregorian day",
            },
            TestCase {
                gregorian:   (9999, 12, 31),
                hebrew:      (13760, 8, 28),
                description: "last supported Gregorian day",
            },
        ];

        for case in &cases {
            let (gy, gm, gd) = case.gregorian;
            let (hy, hm, hd) = case.hebrew;
            let g = greg(gy, gm, gd);
            let h = heb(hy, hm, hd);

            assert_eq!(to_hebrew(&g), h, "{}: to_hebrew", case.description);
            assert_eq!(to_gregorian(&h).unwrap(), g, "{}: to_gregorian", case.description);
        }
    }

    #[test]
    fn test_parts_to_gregorian_validates() {
        // Kislev 5784 has only 29 days
        assert!(matches!(
            parts_to_gregorian(30, 9, 5784),
            Err(CalendarError::InvalidHebrewDate {
                day: 30,
                month: 9,
                year: 5784
            })
        ));
        assert!(matches!(
            parts_to_gregorian(1, 13, 5783),
            Err(CalendarError::InvalidMonth { month: 13, year: 5783 })
        ));
        assert_eq!(parts_to_gregorian(29, 9, 5784).unwrap(), greg(2023, 12, 12));
    }

    #[test]
    fn test_parts_outside_span_are_rejected() {
        assert!(matches!(parts_to_gregorian(1, 7, 3000), Err(CalendarError::OutOfRange(_))));
        assert!(matches!(parts_to_gregorian(29, 6, 13760), Err(CalendarError::OutOfRange(_))));
        assert_eq!(parts_to_gregorian(18, 10, 3761).unwrap(), greg(1, 1, 1));
    }

    #[test]
    fn test_consecutive_days_advance_by_one() {
        let start = greg(2023, 9, 1).to_fixed();
        let mut previous = hebrew_from_fixed(start).unwrap();
        for fixed in start + 1..start + 800 {
            let current = hebrew_from_fixed(fixed).unwrap();
            assert_eq!(fixed_from_hebrew(&current), fixed);
            assert_eq!(fixed_from_hebrew(&previous) + 1, fixed);
            previous = current;
        }
    }

    fn arb_gregorian() -> impl Strategy<Value = GregorianDate> {
        let lo = greg(1900, 1, 1).to_fixed();
        let hi = greg(2100, 1, 1).to_fixed();
        (lo..=hi).prop_filter_map("supported range", |f| GregorianDate::from_fixed(f).ok())
    }

    fn arb_hebrew() -> impl Strategy<Value = HebrewDate> {
        (3761_u16..=MAX_HEBREW_YEAR, 1_u8..=13, 1_u8..=30).prop_filter_map("valid hebrew date", |(y, m, d)| {
            let m = m.min(months_in_year(y));
            let d = d.min(days_in_month(BiblicalMonth::clamped(m), y));
            HebrewDate::new(y, m, d).ok()
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10_000))]

        #[test]
        fn prop_gregorian_round_trip(g in arb_gregorian()) {
            prop_assert_eq!(to_gregorian(&to_hebrew(&g)).unwrap(), g);
        }

        #[test]
        fn prop_hebrew_round_trip(h in arb_hebrew()) {
            let g = to_gregorian(&h).unwrap();
            prop_assert_eq!(to_hebrew(&g), h);
        }
    }
}
