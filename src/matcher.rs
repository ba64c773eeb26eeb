//! Selecting the memorials whose anniversary falls today.
//!
//! Records resolved to a date (Gregorian or structured) match by
//! [`YahrzeitKey`]: same day, same civil month, any year. Records that only
//! carry free text can still match by substring, flagged as
//! [`Confidence::Ambiguous`] since nothing about the year or Adar variant
//! was checked.

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, trace};

use crate::consts::{SECONDS_PER_DAY, UNIX_EPOCH_FIXED};
use crate::gematria::{self, strip_punctuation};
use crate::record::{DateFields, DateSource};
use crate::{CalendarConfig, CalendarError, HebrewDate, YahrzeitKey};

/// Source of the current Hebrew date.
pub trait Clock {
    /// # Errors
    /// Returns an error if the current date cannot be represented.
    fn today(&self) -> Result<HebrewDate, CalendarError>;
}

/// Wall-clock date from the system time, taken at UTC midnight. No sunset
/// adjustment is made.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Result<HebrewDate, CalendarError> {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| CalendarError::OutOfRange(UNIX_EPOCH_FIXED))?;
        let days = i64::try_from(elapsed.as_secs() / SECONDS_PER_DAY)
            .map_err(|_| CalendarError::OutOfRange(i64::MAX))?;
        HebrewDate::from_fixed(UNIX_EPOCH_FIXED + days)
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub HebrewDate);

impl Clock for FixedClock {
    fn today(&self) -> Result<HebrewDate, CalendarError> {
        Ok(self.0)
    }
}

/// Anything carrying persisted date fields.
pub trait Dated {
    fn date_source(&self) -> DateSource;
}

impl Dated for DateFields {
    fn date_source(&self) -> DateSource {
        self.source()
    }
}

impl<T: Dated + ?Sized> Dated for &T {
    fn date_source(&self) -> DateSource {
        (**self).date_source()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    /// Day and civil month compared on a resolved date.
    Exact,
    /// Day numeral and month name found in free text.
    Ambiguous,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Match<'a, R> {
    pub record:     &'a R,
    pub confidence: Confidence,
}

impl<R> Clone for Match<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Match<'_, R> {}

/// Records whose anniversary is `today`, in input order.
pub fn match_today<'a, R: Dated>(records: &'a [R], today: &HebrewDate) -> Vec<Match<'a, R>> {
    match_on(records, today, &CalendarConfig::default())
}

/// Like [`match_today`], reading the date from `clock`.
///
/// # Errors
/// Propagates the clock's error.
pub fn match_today_with<'a, R: Dated>(
    records: &'a [R],
    clock: &dyn Clock,
    config: &CalendarConfig,
) -> Result<Vec<Match<'a, R>>, CalendarError> {
    let today = clock.today()?;
    Ok(match_on(records, &today, config))
}

pub fn match_on<'a, R: Dated>(records: &'a [R], today: &HebrewDate, config: &CalendarConfig) -> Vec<Match<'a, R>> {
    let key = today.yahrzeit_key();
    let matches: Vec<_> = records
        .iter()
        .filter_map(|record| {
            confidence_of(&record.date_source(), &key, today, config).map(|confidence| Match { record, confidence })
        })
        .collect();

    debug!(
        %today,
        scanned = records.len(),
        matched = matches.len(),
        ambiguous = matches.iter().filter(|m| m.confidence == Confidence::Ambiguous).count(),
        "matched memorials"
    );
    matches
}

fn confidence_of(
    source: &DateSource,
    key: &YahrzeitKey,
    today: &HebrewDate,
    config: &CalendarConfig,
) -> Option<Confidence> {
    let exact = |date: HebrewDate| (date.yahrzeit_key() == *key).then_some(Confidence::Exact);
    match source {
        DateSource::Gregorian(date) => exact(HebrewDate::from_gregorian(date)),
        DateSource::Structured(date) => exact(*date),
        DateSource::FreeText(text) if config.text_fallback => text_matches(text, today).then(|| {
            trace!(text = %text, %today, "free-text match");
            Confidence::Ambiguous
        }),
        DateSource::FreeText(_) | DateSource::Missing => None,
    }
}

/// Whether `text` mentions today's day numeral and month name.
fn text_matches(text: &str, today: &HebrewDate) -> bool {
    let Ok(day) = gematria::letters(u32::from(today.day().get())) else {
        return false;
    };
    let stripped = strip_punctuation(text);
    stripped.contains(&strip_punctuation(&day)) && stripped.contains(today.month_name())
}
