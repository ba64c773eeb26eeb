/// Fixed day number (R.D.) of 1 Tishrei AM 1, proleptic Julian 7 October 3761 BCE
pub const HEBREW_EPOCH: i64 = -1_373_427;

/// Difference between a Julian day number and a fixed (R.D.) day number
pub(crate) const JDN_TO_FIXED: i64 = 1_721_425;

/// Fixed day number of 1970-01-01, used by the wall clock
pub(crate) const UNIX_EPOCH_FIXED: i64 = 719_163;

/// Seconds in a civil day
pub(crate) const SECONDS_PER_DAY: u64 = 86_400;

/// Years in the Metonic leap cycle
pub const METONIC_CYCLE: i64 = 19;

/// Leap years per Metonic cycle
pub(crate) const LEAP_YEARS_PER_CYCLE: i64 = 7;

/// Months elapsed in a full Metonic cycle
pub(crate) const MONTHS_PER_CYCLE: i64 = 235;

/// Halakim (parts) in one day
pub(crate) const PARTS_PER_DAY: i64 = 25_920;

/// Parts in a mean lunar month beyond 29 whole days
pub(crate) const MONTH_EXCESS_PARTS: i64 = 13_753;

/// Parts of the molad of Tishrei AM 1 (molad BaHaRaD), counted from the epoch
pub(crate) const MOLAD_BAHARAD_PARTS: i64 = 12_084;

/// Mean Hebrew year length as the ratio `35975351 / 98496` days
pub(crate) const MEAN_YEAR_NUMERATOR: i64 = 35_975_351;
pub(crate) const MEAN_YEAR_DENOMINATOR: i64 = 98_496;

/// Largest Hebrew year that still overlaps Gregorian 9999-12-31
pub const MAX_HEBREW_YEAR: u16 = 13_760;

/// Fixed day number of 0001-01-01, the first supported day in either calendar
pub const MIN_FIXED: i64 = 1;

/// Fixed day number of 9999-12-31, the last supported day in either calendar
pub const MAX_FIXED: i64 = 3_652_059;

/// Largest supported Gregorian year (inclusive)
pub const MAX_GREGORIAN_YEAR: u16 = 9999;

/// Months in a common year; Adar is month 12
pub const MONTHS_IN_COMMON_YEAR: u8 = 12;

/// Months in a leap year; Adar II is month 13
pub const MONTHS_IN_LEAP_YEAR: u8 = 13;

/// Biblical month numbers (Nisan = 1)
pub const NISAN: u8 = 1;
pub const TISHREI: u8 = 7;
pub const CHESHVAN: u8 = 8;
pub const KISLEV: u8 = 9;
pub const ADAR: u8 = 12;
pub const ADAR_II: u8 = 13;

/// Offset between biblical (Nisan = 1) and civil (Tishrei = 1) numbering
pub(crate) const CIVIL_OFFSET: u8 = 6;

/// Upper bound on any Hebrew month length
pub const MAX_DAY: u8 = 30;

/// Months that always have 29 days (Iyar, Tamuz, Elul, Tevet, Adar II)
pub(crate) const SHORT_MONTHS: [u8; 5] = [2, 4, 6, 10, 13];

/// Day counts of the twelve Gregorian months in a common year (index 0 unused)
pub const GREGORIAN_DAYS_IN_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Gregorian February in a leap year
pub(crate) const FEBRUARY: u8 = 2;
pub(crate) const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Largest value the gematria encoder accepts; years are reduced modulo 1000 first
pub const MAX_GEMATRIA: u32 = 999;

/// Millennium divisor for the short form of a year
pub const MILLENNIUM: u16 = 1000;

/// Letter prefixed to the short year to stand for the fifth millennium
pub const MILLENNIUM_PREFIX: char = 'ה';

/// Preposition prefixed to the month name ("in")
pub const MONTH_PREPOSITION: char = 'ב';

/// Gematria letters in descending value order
pub const GEMATRIA_LETTERS: [(u32, char); 22] = [
    (400, 'ת'),
    (300, 'ש'),
    (200, 'ר'),
    (100, 'ק'),
    (90, 'צ'),
    (80, 'פ'),
    (70, 'ע'),
    (60, 'ס'),
    (50, 'נ'),
    (40, 'מ'),
    (30, 'ל'),
    (20, 'כ'),
    (10, 'י'),
    (9, 'ט'),
    (8, 'ח'),
    (7, 'ז'),
    (6, 'ו'),
    (5, 'ה'),
    (4, 'ד'),
    (3, 'ג'),
    (2, 'ב'),
    (1, 'א'),
];

/// Final letter forms and their values
pub(crate) const FINAL_LETTERS: [(char, u32); 5] = [('ך', 20), ('ם', 40), ('ן', 50), ('ף', 80), ('ץ', 90)];

/// Hebrew geresh and gershayim
pub const GERESH: char = '\u{05F3}';
pub const GERSHAYIM: char = '\u{05F4}';

/// ASCII stand-ins for geresh and gershayim, as stored in legacy records
pub const ASCII_GERESH: char = '\'';
pub const ASCII_GERSHAYIM: char = '"';

/// Gregorian date component separator (ISO 8601)
pub const DATE_SEPARATOR: char = '-';
