//! Medium date + medium time formatting.
//!
//! One formatter is built per adapter and reused for every row. It holds no
//! interior state, so repeated calls with the same instant always produce the
//! same text.

use crate::error::{NotelistError, Result};
use chrono::{DateTime, FixedOffset, Local, Locale, Offset, TimeZone, Utc};

pub const DEFAULT_LOCALE: &str = "en_US";

/// Where rendered timestamps are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayZone {
    Local,
    Fixed(FixedOffset),
}

#[derive(Debug, Clone, Copy)]
pub struct DateTimeFormatter {
    locale: Locale,
    pattern: &'static str,
    zone: DisplayZone,
}

impl DateTimeFormatter {
    /// Medium/medium formatter for `locale` (e.g. `en_US`, `de-DE`).
    pub fn medium(locale: &str, zone: DisplayZone) -> Result<Self> {
        let (locale, pattern) = medium_pattern(locale)?;
        Ok(Self {
            locale,
            pattern,
            zone,
        })
    }

    /// Shows timestamps at a fixed offset from UTC, given in minutes.
    pub fn fixed_zone(offset_minutes: i32) -> Result<DisplayZone> {
        offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .map(DisplayZone::Fixed)
            .ok_or(NotelistError::InvalidOffset(offset_minutes))
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn zone(&self) -> DisplayZone {
        self.zone
    }

    pub fn format(&self, instant: DateTime<Utc>) -> String {
        let offset = match self.zone {
            DisplayZone::Fixed(offset) => offset,
            DisplayZone::Local => Local.offset_from_utc_datetime(&instant.naive_utc()).fix(),
        };
        instant
            .with_timezone(&offset)
            .format_localized(self.pattern, self.locale)
            .to_string()
    }

    /// Medium/medium formatter for the locale the environment names, or
    /// [`DEFAULT_LOCALE`] when it names none we support.
    pub fn system(zone: DisplayZone) -> Self {
        let (locale, pattern) = system_locale()
            .and_then(|name| medium_pattern(&name).ok())
            .unwrap_or((Locale::en_US, EN_US_MEDIUM));
        Self {
            locale,
            pattern,
            zone,
        }
    }
}

impl Default for DateTimeFormatter {
    fn default() -> Self {
        Self::system(DisplayZone::Local)
    }
}

/// The supported locale named by `LC_ALL`, `LC_TIME` or `LANG`, in that order.
pub fn system_locale() -> Option<String> {
    locale_from_env(|var| std::env::var(var).ok())
}

fn locale_from_env(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    ["LC_ALL", "LC_TIME", "LANG"]
        .into_iter()
        .find_map(|var| lookup(var).filter(|value| !value.is_empty()))
        .and_then(|value| value.split(['.', '@']).next().map(str::to_string))
        .filter(|name| medium_pattern(name).is_ok())
}

const EN_US_MEDIUM: &str = "%b %-d, %Y %-I:%M:%S %p";

fn medium_pattern(locale: &str) -> Result<(Locale, &'static str)> {
    let normalized = locale.trim().replace('-', "_");
    let found = match normalized.as_str() {
        "en_US" | "en" => (Locale::en_US, EN_US_MEDIUM),
        "en_GB" => (Locale::en_GB, "%-d %b %Y %H:%M:%S"),
        "de_DE" | "de" => (Locale::de_DE, "%d.%m.%Y %H:%M:%S"),
        "fr_FR" | "fr" => (Locale::fr_FR, "%-d %b %Y %H:%M:%S"),
        "es_ES" | "es" => (Locale::es_ES, "%-d %b %Y %-H:%M:%S"),
        "pt_BR" | "pt" => (Locale::pt_BR, "%-d de %b de %Y %H:%M:%S"),
        "ja_JP" | "ja" => (Locale::ja_JP, "%Y/%m/%d %-H:%M:%S"),
        _ => return Err(NotelistError::UnsupportedLocale(locale.to_string())),
    };
    Ok(found)
}
