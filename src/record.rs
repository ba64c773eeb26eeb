//! Date fields of persisted memorial records.
//!
//! Stored records carry up to three redundant renditions of the same date:
//! the strict Hebrew text, a `{day, month, year}` struct in biblical month
//! numbering, and a Gregorian ISO string. Any of them may be missing or
//! malformed in legacy data, so they are kept raw here and validated only
//! when a [`DateSource`] is picked from them.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::parse::parse_hebrew_date;
use crate::prelude::*;
use crate::{CalendarConfig, CalendarError, GregorianDate, HebrewDate, format};

pub const FIELD_TEXT: &str = "hebrew_date_text";
pub const FIELD_STRUCT: &str = "hebrew_date_struct";
pub const FIELD_GREGORIAN: &str = "gregorian_date";

/// Persisted `{day, month, year}` struct, month in biblical numbering.
/// Not validated; see [`HebrewDate::try_from`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{{day: {}, month: {}, year: {}}}", day, month, year)]
pub struct HebrewDateParts {
    pub day:   u8,
    pub month: u8,
    pub year:  u16,
}

/// The three date fields as they appear in a stored record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateFields {
    #[serde(default)]
    pub hebrew_date_text:   Option<String>,
    #[serde(default)]
    pub hebrew_date_struct: Option<HebrewDateParts>,
    #[serde(default)]
    pub gregorian_date:     Option<String>,
}

/// Where a record's date comes from, after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateSource {
    Gregorian(GregorianDate),
    Structured(HebrewDate),
    FreeText(String),
    Missing,
}

/// Error type for record validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// A present field failed to parse or validate.
    #[error("Invalid {field}: {source}")]
    InvalidField {
        field:  &'static str,
        #[source]
        source: CalendarError,
    },

    /// A field names a different day than the record's authoritative date.
    #[error("{field} is {found} but the record's date is {expected}")]
    Inconsistent {
        field:    &'static str,
        found:    HebrewDate,
        expected: HebrewDate,
    },

    /// Error converting between calendars.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

/// One field rewritten by [`DateFields::normalize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldChange {
    pub field: &'static str,
    pub old:   Option<String>,
    pub new:   String,
}

/// Result of [`DateFields::normalize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub fields:   DateFields,
    pub resolved: Option<HebrewDate>,
    pub changes:  Vec<FieldChange>,
}

impl Normalized {
    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty()
    }
}

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty())
}

impl DateFields {
    pub fn from_gregorian(date: GregorianDate) -> Self {
        Self {
            gregorian_date: Some(date.to_string()),
            ..Self::default()
        }
    }

    pub fn from_hebrew(date: HebrewDate) -> Self {
        Self {
            hebrew_date_struct: Some(date.to_parts()),
            ..Self::default()
        }
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            hebrew_date_text: Some(text.into()),
            ..Self::default()
        }
    }

    fn gregorian(&self) -> Option<Result<GregorianDate, CalendarError>> {
        non_blank(self.gregorian_date.as_ref()).map(str::parse)
    }

    fn structured(&self) -> Option<Result<HebrewDate, CalendarError>> {
        self.hebrew_date_struct.map(HebrewDate::try_from)
    }

    /// Picks the most trustworthy valid field: Gregorian, then structured,
    /// then free text. Fields that fail validation are dropped, never
    /// repaired.
    pub fn source(&self) -> DateSource {
        match self.gregorian() {
            Some(Ok(date)) => return DateSource::Gregorian(date),
            Some(Err(error)) => debug!(field = FIELD_GREGORIAN, %error, "dropping invalid date field"),
            None => {},
        }
        match self.structured() {
            Some(Ok(date)) => return DateSource::Structured(date),
            Some(Err(error)) => debug!(field = FIELD_STRUCT, %error, "dropping invalid date field"),
            None => {},
        }
        non_blank(self.hebrew_date_text.as_ref())
            .map_or(DateSource::Missing, |text| DateSource::FreeText(text.to_owned()))
    }

    /// Checks that every present field is valid and that they all name the
    /// same day as the highest-priority one.
    ///
    /// # Errors
    /// Returns `RecordError::InvalidField` for the first field that fails,
    /// or `RecordError::Inconsistent` for the first field that disagrees.
    pub fn audit(&self, config: &CalendarConfig) -> Result<(), RecordError> {
        let field_error = |field| move |source| RecordError::InvalidField { field, source };

        let gregorian = self.gregorian().transpose().map_err(field_error(FIELD_GREGORIAN))?;
        let structured = self.structured().transpose().map_err(field_error(FIELD_STRUCT))?;
        let text = non_blank(self.hebrew_date_text.as_ref())
            .map(|text| parse_hebrew_date(text, config))
            .transpose()
            .map_err(field_error(FIELD_TEXT))?;

        let present = [
            (FIELD_GREGORIAN, gregorian.map(|g| HebrewDate::from_gregorian(&g))),
            (FIELD_STRUCT, structured),
            (FIELD_TEXT, text),
        ];
        let mut dated = present.into_iter().filter_map(|(field, date)| date.map(|d| (field, d)));
        let Some((_, expected)) = dated.next() else {
            return Ok(());
        };
        match dated.find(|&(_, found)| found != expected) {
            Some((field, found)) => Err(RecordError::Inconsistent { field, found, expected }),
            None => Ok(()),
        }
    }

    /// Regenerates all three fields from the authoritative date.
    ///
    /// The strict text and the struct are rewritten from the resolved date;
    /// a Gregorian date is only filled in when missing or malformed, since
    /// a valid one is itself the authority. Records with no usable date are
    /// returned unchanged.
    pub fn normalize(&self, config: &CalendarConfig) -> Normalized {
        let mut fields = self.clone();
        let mut changes = Vec::new();
        let resolved = resolve_with(&self.source(), config);

        if let Some(date) = resolved {
            let strict = format::format(&date, config);
            let keep_text = non_blank(self.hebrew_date_text.as_ref()).is_some_and(|text| {
                text == strict
                    || (!config.regenerate_text && parse_hebrew_date(text, config).ok() == Some(date))
            });
            if !keep_text {
                changes.push(FieldChange {
                    field: FIELD_TEXT,
                    old:   self.hebrew_date_text.clone(),
                    new:   strict.clone(),
                });
                fields.hebrew_date_text = Some(strict);
            }

            let parts = date.to_parts();
            if self.hebrew_date_struct != Some(parts) {
                changes.push(FieldChange {
                    field: FIELD_STRUCT,
                    old:   self.hebrew_date_struct.map(|p| p.to_string()),
                    new:   parts.to_string(),
                });
                fields.hebrew_date_struct = Some(parts);
            }

            if !matches!(self.gregorian(), Some(Ok(_))) {
                match date.to_gregorian() {
                    Ok(gregorian) => {
                        let iso = gregorian.to_string();
                        changes.push(FieldChange {
                            field: FIELD_GREGORIAN,
                            old:   self.gregorian_date.clone(),
                            new:   iso.clone(),
                        });
                        fields.gregorian_date = Some(iso);
                    },
                    Err(error) => debug!(%date, %error, "no Gregorian equivalent to backfill"),
                }
            }
        }

        for change in &changes {
            debug!(field = change.field, old = ?change.old, new = %change.new, "backfilled date field");
        }

        Normalized {
            fields,
            resolved,
            changes,
        }
    }
}

/// Turns a source into a Hebrew date, parsing free text with the default
/// configuration.
pub fn resolve(source: &DateSource) -> Option<HebrewDate> {
    resolve_with(source, &CalendarConfig::default())
}

pub fn resolve_with(source: &DateSource, config: &CalendarConfig) -> Option<HebrewDate> {
    match source {
        DateSource::Gregorian(date) => Some(HebrewDate::from_gregorian(date)),
        DateSource::Structured(date) => Some(*date),
        DateSource::FreeText(text) => match parse_hebrew_date(text, config) {
            Ok(date) => Some(date),
            Err(error) => {
                debug!(field = FIELD_TEXT, %error, "free text does not parse as a date");
                None
            },
        },
        DateSource::Missing => None,
    }
}
