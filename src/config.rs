//! Engine options.
//!
//! Every key is optional when deserializing, so a host application can
//! embed a partial `{"punctuation": "hebrew"}` block in its own settings.

use serde::{Deserialize, Serialize};

use crate::gematria::Punctuation;

fn default_text_fallback() -> bool {
    true
}

fn default_millennium() -> u16 {
    5
}

fn default_regenerate_text() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CalendarConfig {
    /// Marks used by the strict formatter. Default: ASCII, as in stored records.
    #[serde(default)]
    pub punctuation: Punctuation,

    /// Whether records that only carry free text may match by substring.
    #[serde(default = "default_text_fallback")]
    pub text_fallback: bool,

    /// Thousands added to parsed years written without a millennium letter.
    #[serde(default = "default_millennium")]
    pub default_millennium: u16,

    /// Whether backfill rewrites existing text that is not in strict form.
    #[serde(default = "default_regenerate_text")]
    pub regenerate_text: bool,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            punctuation:        Punctuation::default(),
            text_fallback:      default_text_fallback(),
            default_millennium: default_millennium(),
            regenerate_text:    default_regenerate_text(),
        }
    }
}

impl CalendarConfig {
    #[must_use]
    pub const fn with_punctuation(mut self, punctuation: Punctuation) -> Self {
        self.punctuation = punctuation;
        self
    }

    #[must_use]
    pub const fn with_text_fallback(mut self, enabled: bool) -> Self {
        self.text_fallback = enabled;
        self
    }

    #[must_use]
    pub const fn with_default_millennium(mut self, millennium: u16) -> Self {
        self.default_millennium = millennium;
        self
    }

    #[must_use]
    pub const fn with_regenerate_text(mut self, enabled: bool) -> Self {
        self.regenerate_text = enabled;
        self
    }
}
