//! Plain text plus colored ranges.

use crate::color::Color;
use crate::error::{Result, RowError};
use console::Style;
use std::ops::Range;
use unicode_width::UnicodeWidthStr;

/// A foreground color applied to a byte range of a [`StyledText`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorSpan {
    pub range: Range<usize>,
    pub color: Color,
}

/// A string with a sorted set of non-overlapping foreground color spans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledText {
    text: String,
    spans: Vec<ColorSpan>,
}

impl StyledText {
    /// Text with no annotations.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            spans: Vec::new(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn spans(&self) -> &[ColorSpan] {
        &self.spans
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Substrings covered by spans, in order.
    pub fn spanned_text(&self) -> Vec<&str> {
        self.spans
            .iter()
            .map(|span| &self.text[span.range.clone()])
            .collect()
    }

    /// Terminal columns needed to show the text.
    pub fn display_width(&self) -> usize {
        self.text.width()
    }

    /// Colors `range` with `color`.
    ///
    /// The range must lie on char boundaries inside the text and must not
    /// overlap a span that is already present.
    pub fn push_span(&mut self, range: Range<usize>, color: Color) -> Result<()> {
        let Range { start, end } = range;
        if start >= end
            || end > self.text.len()
            || !self.text.is_char_boundary(start)
            || !self.text.is_char_boundary(end)
        {
            return Err(RowError::InvalidSpan {
                start,
                end,
                len: self.text.len(),
            });
        }

        let at = self.spans.partition_point(|s| s.range.start < start);
        let clashes_prev = at > 0 && self.spans[at - 1].range.end > start;
        let clashes_next = self.spans.get(at).is_some_and(|s| s.range.start < end);
        if clashes_prev || clashes_next {
            return Err(RowError::OverlappingSpan { start, end });
        }

        self.spans.insert(at, ColorSpan { range, color });
        Ok(())
    }

    /// Renders the text, emitting ANSI escapes for spans when `use_color` is set.
    pub fn render(&self, use_color: bool) -> String {
        if !use_color || self.spans.is_empty() {
            return self.text.clone();
        }

        let mut out = String::with_capacity(self.text.len() + self.spans.len() * 16);
        let mut cursor = 0;
        for span in &self.spans {
            out.push_str(&self.text[cursor..span.range.start]);
            let style = span.color.paint_fg(Style::new().force_styling(true));
            out.push_str(&style.apply_to(&self.text[span.range.clone()]).to_string());
            cursor = span.range.end;
        }
        out.push_str(&self.text[cursor..]);
        out
    }
}

impl From<&str> for StyledText {
    fn from(text: &str) -> Self {
        StyledText::plain(text)
    }
}

impl From<String> for StyledText {
    fn from(text: String) -> Self {
        StyledText::plain(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLUE: Color = Color::Rgb(0, 0, 255);

    #[test]
    fn plain_text_has_no_spans() {
        let text = StyledText::plain("hello");
        assert!(text.spans().is_empty());
        assert_eq!(text.render(true), "hello");
    }

    #[test]
    fn spans_are_kept_sorted() {
        let mut text = StyledText::plain("ab cd ef");
        text.push_span(6..8, BLUE).unwrap();
        text.push_span(0..2, BLUE).unwrap();
        text.push_span(3..5, BLUE).unwrap();
        assert_eq!(text.spanned_text(), vec!["ab", "cd", "ef"]);
    }

    #[test]
    fn overlapping_span_is_rejected() {
        let mut text = StyledText::plain("abcdef");
        text.push_span(1..4, BLUE).unwrap();
        assert!(matches!(
            text.push_span(3..5, BLUE),
            Err(RowError::OverlappingSpan { start: 3, end: 5 })
        ));
        assert!(matches!(
            text.push_span(0..2, BLUE),
            Err(RowError::OverlappingSpan { .. })
        ));
        // Touching ranges are fine.
        text.push_span(4..6, BLUE).unwrap();
    }

    #[test]
    fn out_of_bounds_and_empty_spans_are_rejected() {
        let mut text = StyledText::plain("abc");
        assert!(matches!(
            text.push_span(1..9, BLUE),
            Err(RowError::InvalidSpan { len: 3, .. })
        ));
        assert!(text.push_span(2..2, BLUE).is_err());
    }

    #[test]
    fn span_must_respect_char_boundaries() {
        let mut text = StyledText::plain("é#x");
        assert!(text.push_span(1..3, BLUE).is_err());
        text.push_span(2..4, BLUE).unwrap();
    }

    #[test]
    fn render_without_color_is_plain() {
        let mut text = StyledText::plain("see #tag here");
        text.push_span(4..8, BLUE).unwrap();
        assert_eq!(text.render(false), "see #tag here");
    }

    #[test]
    fn render_with_color_wraps_only_spans() {
        let mut text = StyledText::plain("see #tag here");
        text.push_span(4..8, BLUE).unwrap();
        let out = text.render(true);
        assert!(out.starts_with("see \x1b["));
        assert!(out.contains("#tag"));
        assert!(out.ends_with("\x1b[0m here"));
        assert_eq!(console::strip_ansi_codes(&out), "see #tag here");
    }

    #[test]
    fn display_width_counts_wide_chars() {
        assert_eq!(StyledText::plain("日本").display_width(), 4);
    }
}
