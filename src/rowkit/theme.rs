//! Named color resources.
//!
//! Rows never hard-code colors. They ask the active [`Theme`] for a color by
//! symbolic name at render time, so the host can swap palettes (or follow the
//! desktop light/dark preference via [`AdaptiveTheme`]) without touching any
//! rendering code.

use crate::color::Color;
use crate::error::ThemeError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Mutex;

/// Symbolic color names shared by the toolkit and its hosts.
pub mod names {
    pub const TRANSPARENT: &str = "transparent";
    pub const SELECTED_NOTE: &str = "selected_note";
    pub const HASHTAG: &str = "hashtag";
    pub const NOTE_ID: &str = "note_id";
    pub const NOTE_DATE: &str = "note_date";
}

/// A collection of named colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    colors: HashMap<String, Color>,
}

impl Theme {
    /// Creates a theme that only knows `transparent`.
    pub fn new() -> Self {
        let mut colors = HashMap::new();
        colors.insert(names::TRANSPARENT.to_string(), Color::Transparent);
        Self { colors }
    }

    /// Adds (or replaces) a named color, returning the theme for chaining.
    pub fn add(mut self, name: &str, color: Color) -> Self {
        self.colors.insert(name.to_string(), color);
        self
    }

    /// Looks a color up by name. Unknown names are a setup error.
    pub fn color(&self, name: &str) -> Result<Color, ThemeError> {
        self.colors
            .get(name)
            .copied()
            .ok_or_else(|| ThemeError::UnknownColor(name.to_string()))
    }

    pub fn has(&self, name: &str) -> bool {
        self.colors.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Palette tuned for light terminals.
    pub fn light() -> Self {
        Self::new()
            .add(names::SELECTED_NOTE, Color::Rgb(187, 222, 251))
            .add(names::HASHTAG, Color::Rgb(0, 0, 255))
            .add(names::NOTE_ID, Color::Rgb(96, 96, 96))
            .add(names::NOTE_DATE, Color::Rgb(154, 154, 154))
    }

    /// Palette tuned for dark terminals.
    pub fn dark() -> Self {
        Self::new()
            .add(names::SELECTED_NOTE, Color::Rgb(38, 79, 120))
            .add(names::HASHTAG, Color::Rgb(95, 175, 255))
            .add(names::NOTE_ID, Color::Rgb(160, 160, 160))
            .add(names::NOTE_DATE, Color::Rgb(128, 128, 128))
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Which palette the user wants.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Auto,
    Light,
    Dark,
}

impl std::str::FromStr for ThemeMode {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ThemeMode::Auto),
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(ThemeError::UnknownMode(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Light,
    Dark,
}

type ModeDetector = fn() -> ColorMode;

fn system_color_mode() -> ColorMode {
    match dark_light::detect() {
        dark_light::Mode::Dark => ColorMode::Dark,
        _ => ColorMode::Light,
    }
}

static MODE_DETECTOR: Lazy<Mutex<ModeDetector>> = Lazy::new(|| Mutex::new(system_color_mode));

/// Overrides the detector used to decide between the light and dark palette.
/// Useful for testing.
pub fn set_mode_detector(detector: ModeDetector) {
    let mut guard = MODE_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = detector;
}

fn detect_color_mode() -> ColorMode {
    let detector = MODE_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    (*detector)()
}

/// A theme that adapts to the user's display mode.
#[derive(Debug, Clone)]
pub struct AdaptiveTheme {
    light: Theme,
    dark: Theme,
}

impl AdaptiveTheme {
    pub fn new(light: Theme, dark: Theme) -> Self {
        Self { light, dark }
    }

    /// Picks the concrete theme for `mode`, consulting the detector for `Auto`.
    pub fn resolve(&self, mode: ThemeMode) -> Theme {
        let color_mode = match mode {
            ThemeMode::Light => ColorMode::Light,
            ThemeMode::Dark => ColorMode::Dark,
            ThemeMode::Auto => detect_color_mode(),
        };
        match color_mode {
            ColorMode::Light => self.light.clone(),
            ColorMode::Dark => self.dark.clone(),
        }
    }
}

impl Default for AdaptiveTheme {
    fn default() -> Self {
        Self::new(Theme::light(), Theme::dark())
    }
}
