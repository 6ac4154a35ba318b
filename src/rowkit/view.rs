//! Row views: the recyclable containers a list host draws on screen.

use crate::color::Color;
use crate::error::Result;
use crate::styled::StyledText;
use crate::template::Inflater;
use console::Style;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

const RESET: &str = "\x1b[0m";

static NEXT_ROW_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a physical row view. Never reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowId(u64);

/// Position of a label inside the row that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LabelHandle(usize);

/// A text element bound to a template slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    slot: String,
    text: StyledText,
}

impl Label {
    pub fn new(slot: &str) -> Self {
        Self {
            slot: slot.to_string(),
            text: StyledText::default(),
        }
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }

    pub fn text(&self) -> &StyledText {
        &self.text
    }
}

/// A row container built from a [`RowTemplate`](crate::RowTemplate).
///
/// `T` is the tag type: metadata the list host attaches to the row so it can
/// be reused without looking its labels up again.
#[derive(Debug)]
pub struct RowView<T> {
    id: RowId,
    template: String,
    labels: Vec<Label>,
    background: Color,
    tag: Option<T>,
}

impl<T> RowView<T> {
    pub(crate) fn new(template: &str, labels: Vec<Label>) -> Self {
        Self {
            id: RowId(NEXT_ROW_ID.fetch_add(1, Ordering::Relaxed)),
            template: template.to_string(),
            labels,
            background: Color::Transparent,
            tag: None,
        }
    }

    pub fn id(&self) -> RowId {
        self.id
    }

    /// Name of the template this row was inflated from.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Finds the label bound to `slot`. Pure lookup.
    pub fn find_label(&self, slot: &str) -> Option<LabelHandle> {
        self.labels
            .iter()
            .position(|label| label.slot == slot)
            .map(LabelHandle)
    }

    /// # Panics
    ///
    /// Panics if `handle` was not obtained from a row of the same template.
    pub fn label(&self, handle: LabelHandle) -> &Label {
        &self.labels[handle.0]
    }

    /// Replaces the label's text entirely.
    ///
    /// # Panics
    ///
    /// Panics if `handle` was not obtained from a row of the same template.
    pub fn set_text(&mut self, handle: LabelHandle, text: impl Into<StyledText>) {
        self.labels[handle.0].text = text.into();
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    pub fn tag(&self) -> Option<&T> {
        self.tag.as_ref()
    }

    pub fn set_tag(&mut self, tag: T) {
        self.tag = Some(tag);
    }

    /// Draws the row as a single terminal line.
    ///
    /// Slots are filled from the labels, newlines are flattened, the line is
    /// truncated or padded to `width` columns when given, and the background
    /// is painted across the full line.
    pub fn render_line(&self, inflater: &Inflater, width: Option<usize>) -> Result<String> {
        let use_color = inflater.use_color();
        let data: HashMap<&str, String> = self
            .labels
            .iter()
            .map(|label| (label.slot.as_str(), label.text.render(use_color)))
            .collect();

        let line = inflater
            .render(&self.template, &data)?
            .replace(['\r', '\n'], " ");
        let line = match width {
            Some(width) => {
                console::pad_str(&line, width, console::Alignment::Left, Some("…")).into_owned()
            }
            None => line,
        };

        Ok(if use_color {
            paint_background(&line, self.background)
        } else {
            line
        })
    }
}

fn paint_background(line: &str, color: Color) -> String {
    if color.is_transparent() {
        return line.to_string();
    }
    // Inner resets would clear the background, so each reset-delimited
    // segment is painted on its own.
    let style = color.paint_bg(Style::new().force_styling(true));
    line.split(RESET)
        .filter(|segment| !segment.is_empty())
        .map(|segment| style.apply_to(segment).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::RowTemplate;
    use crate::theme::Theme;

    fn inflater(use_color: bool) -> Inflater {
        let mut inflater = Inflater::with_color(Theme::light(), use_color);
        inflater
            .register(RowTemplate::new(
                "row",
                "{{ title }} - {{ body }}",
                &["title", "body"],
            ))
            .unwrap();
        inflater
    }

    #[test]
    fn rows_get_distinct_ids() {
        let inflater = inflater(false);
        let a: RowView<()> = inflater.inflate("row").unwrap();
        let b: RowView<()> = inflater.inflate("row").unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn fresh_row_is_blank_and_untagged() {
        let inflater = inflater(false);
        let row: RowView<u8> = inflater.inflate("row").unwrap();
        assert!(row.tag().is_none());
        assert!(row.background().is_transparent());
        assert!(row.labels().iter().all(|l| l.text().is_empty()));
    }

    #[test]
    fn set_text_and_tag() {
        let inflater = inflater(false);
        let mut row: RowView<u8> = inflater.inflate("row").unwrap();
        let title = row.find_label("title").unwrap();
        row.set_text(title, "Hello");
        row.set_tag(7);
        assert_eq!(row.label(title).text().as_str(), "Hello");
        assert_eq!(row.label(title).slot(), "title");
        assert_eq!(row.tag(), Some(&7));
    }

    #[test]
    fn render_line_fills_slots_and_flattens_newlines() {
        let inflater = inflater(false);
        let mut row: RowView<()> = inflater.inflate("row").unwrap();
        let title = row.find_label("title").unwrap();
        let body = row.find_label("body").unwrap();
        row.set_text(title, "T");
        row.set_text(body, "one\ntwo");
        assert_eq!(row.render_line(&inflater, None).unwrap(), "T - one two");
    }

    #[test]
    fn render_line_pads_and_truncates_to_width() {
        let inflater = inflater(false);
        let mut row: RowView<()> = inflater.inflate("row").unwrap();
        let title = row.find_label("title").unwrap();
        row.set_text(title, "T");
        assert_eq!(row.render_line(&inflater, Some(8)).unwrap(), "T -     ");

        let body = row.find_label("body").unwrap();
        row.set_text(body, "a much longer body");
        let line = row.render_line(&inflater, Some(8)).unwrap();
        assert_eq!(console::measure_text_width(&line), 8);
        assert!(line.ends_with('…'));
    }

    #[test]
    fn background_is_painted_across_resets() {
        let inflater = inflater(true);
        let mut row: RowView<()> = inflater.inflate("row").unwrap();
        let body = row.find_label("body").unwrap();
        let mut text = StyledText::plain("#a b");
        text.push_span(0..2, Color::Rgb(0, 0, 255)).unwrap();
        row.set_text(body, text);
        row.set_background(Color::Rgb(0, 0, 0));

        let line = row.render_line(&inflater, None).unwrap();
        assert!(line.starts_with("\x1b[48;5;16m"));
        assert!(line.contains("\x1b[0m\x1b[48;5;16m b"));
        assert!(line.ends_with(RESET));
    }

    #[test]
    fn background_matches_console_styling() {
        let inflater = inflater(true);
        let mut row: RowView<()> = inflater.inflate("row").unwrap();
        let title = row.find_label("title").unwrap();
        row.set_text(title, "T");
        let color = Color::Rgb(38, 79, 120);
        row.set_background(color);

        let expected = color
            .paint_bg(Style::new().force_styling(true))
            .apply_to("T - ")
            .to_string();
        assert_eq!(row.render_line(&inflater, None).unwrap(), expected);
    }

    #[test]
    fn transparent_background_adds_no_escapes() {
        let inflater = inflater(true);
        let row: RowView<()> = inflater.inflate("row").unwrap();
        assert_eq!(row.render_line(&inflater, None).unwrap(), " - ");
    }
}
