use console::Style;
use serde::{Deserialize, Serialize};

/// A color a row or a span of text can be painted with.
///
/// `Transparent` means "leave the terminal default alone": no background
/// escape is emitted for it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    #[default]
    Transparent,
    Rgb(u8, u8, u8),
}

impl Color {
    pub fn is_transparent(&self) -> bool {
        matches!(self, Color::Transparent)
    }

    /// Nearest ANSI 256-color index, or `None` for transparent.
    pub fn ansi256(&self) -> Option<u8> {
        match *self {
            Color::Transparent => None,
            Color::Rgb(r, g, b) => Some(rgb_to_ansi256((r, g, b))),
        }
    }

    /// Applies this color as foreground on top of `style`.
    pub fn paint_fg(&self, style: Style) -> Style {
        match self.ansi256() {
            Some(idx) => style.color256(idx),
            None => style,
        }
    }

    /// Applies this color as background on top of `style`.
    pub fn paint_bg(&self, style: Style) -> Style {
        match self.ansi256() {
            Some(idx) => style.on_color256(idx),
            None => style,
        }
    }
}

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}
