use crate::adapter::{notes_row_template, NOTES_ROW};
use crate::date_format::{DateTimeFormatter, DisplayZone};
use crate::error::Result;
use crate::row_cache::slots;
use rowkit::{RowTemplate, ThemeMode, DEFAULT_MAX_SCRAP};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_ROW_WIDTH: usize = 100;

/// List rendering settings, stored as `config.json` in a config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotelistConfig {
    /// Template rows are inflated from.
    #[serde(default = "default_row_template")]
    pub row_template: String,

    /// Locale for the medium date/time format (e.g. "en_US", "de_DE").
    /// Taken from `LC_ALL`/`LC_TIME`/`LANG` when absent.
    #[serde(default)]
    pub locale: Option<String>,

    /// Fixed display offset from UTC in minutes; local time when absent.
    #[serde(default)]
    pub utc_offset_minutes: Option<i32>,

    #[serde(default)]
    pub theme: ThemeMode,

    /// Columns each row is padded or truncated to.
    #[serde(default = "default_row_width")]
    pub row_width: usize,

    /// Detached rows kept for reuse.
    #[serde(default = "default_max_scrap")]
    pub max_scrap: usize,

    /// Extra row templates by name. Each must use the `note_id`,
    /// `note_content` and `note_date` slots.
    #[serde(default)]
    pub templates: BTreeMap<String, String>,
}

fn default_row_template() -> String {
    NOTES_ROW.to_string()
}

fn default_row_width() -> usize {
    DEFAULT_ROW_WIDTH
}

fn default_max_scrap() -> usize {
    DEFAULT_MAX_SCRAP
}

impl Default for NotelistConfig {
    fn default() -> Self {
        Self {
            row_template: default_row_template(),
            locale: None,
            utc_offset_minutes: None,
            theme: ThemeMode::default(),
            row_width: DEFAULT_ROW_WIDTH,
            max_scrap: DEFAULT_MAX_SCRAP,
            templates: BTreeMap::new(),
        }
    }
}

impl NotelistConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: NotelistConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// The stock template plus any configured ones.
    pub fn row_templates(&self) -> Vec<RowTemplate> {
        let note_slots = [slots::NOTE_ID, slots::NOTE_CONTENT, slots::NOTE_DATE];
        std::iter::once(notes_row_template())
            .chain(
                self.templates
                    .iter()
                    .map(|(name, source)| RowTemplate::new(name, source, &note_slots)),
            )
            .collect()
    }

    /// Builds the date formatter these settings describe.
    pub fn formatter(&self) -> Result<DateTimeFormatter> {
        let zone = match self.utc_offset_minutes {
            Some(minutes) => DateTimeFormatter::fixed_zone(minutes)?,
            None => DisplayZone::Local,
        };
        match &self.locale {
            Some(locale) => DateTimeFormatter::medium(locale, zone),
            None => Ok(DateTimeFormatter::system(zone)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NotelistError;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = NotelistConfig::default();
        assert_eq!(config.row_template, NOTES_ROW);
        assert_eq!(config.locale, None);
        assert_eq!(config.utc_offset_minutes, None);
        assert_eq!(config.theme, ThemeMode::Auto);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = NotelistConfig::load(dir.path()).unwrap();
        assert_eq!(config, NotelistConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("nested");

        let config = NotelistConfig {
            locale: Some("de_DE".to_string()),
            utc_offset_minutes: Some(60),
            theme: ThemeMode::Dark,
            ..NotelistConfig::default()
        };
        config.save(&nested).unwrap();

        let loaded = NotelistConfig::load(&nested).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"row_width": 60}"#).unwrap();
        let config = NotelistConfig::load(dir.path()).unwrap();
        assert_eq!(config.row_width, 60);
        assert_eq!(config.locale, None);
        assert_eq!(config.max_scrap, DEFAULT_MAX_SCRAP);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{ nope").unwrap();
        assert!(matches!(
            NotelistConfig::load(dir.path()),
            Err(NotelistError::Serialization(_))
        ));
    }

    #[test]
    fn test_formatter_honors_locale_and_offset() {
        use chrono::{TimeZone, Utc};
        let config = NotelistConfig {
            locale: Some("de_DE".to_string()),
            utc_offset_minutes: Some(0),
            ..NotelistConfig::default()
        };
        let ts = Utc.with_ymd_and_hms(2024, 1, 5, 15, 4, 5).unwrap();
        assert_eq!(config.formatter().unwrap().format(ts), "05.01.2024 15:04:05");
    }

    #[test]
    fn test_custom_templates_follow_stock_one() {
        let mut config = NotelistConfig::default();
        config
            .templates
            .insert("compact".to_string(), "{{ note_content }}".to_string());
        let templates = config.row_templates();
        assert_eq!(templates.len(), 2);
        assert_eq!(templates[0].name, NOTES_ROW);
        assert_eq!(templates[1].name, "compact");
        assert_eq!(templates[1].slots.len(), 3);
    }

    #[test]
    fn test_formatter_rejects_unknown_locale() {
        let config = NotelistConfig {
            locale: Some("tlh".to_string()),
            ..NotelistConfig::default()
        };
        assert!(config.formatter().is_err());
    }
}
