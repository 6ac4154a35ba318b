//! Hashtag highlighting for note content.
//!
//! A hashtag is `#` followed by one or more of `A-Z a-z 0-9 _ -`. Matches are
//! found left to right, greedily and without overlap. There is no cap on how
//! many hashtags a note may carry.

use once_cell::sync::Lazy;
use regex::Regex;
use rowkit::{Color, StyledText};

static HASHTAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#[A-Za-z0-9_-]+").expect("valid hashtag regex"));

/// Colors every hashtag in `content` with `color`, leaving the rest plain.
pub fn highlight_hashtags(content: &str, color: Color) -> StyledText {
    let mut styled = StyledText::plain(content);
    for m in HASHTAG_RE.find_iter(content) {
        // Regex matches never overlap and always land on char boundaries.
        styled
            .push_span(m.range(), color)
            .expect("hashtag matches are disjoint and in bounds");
    }
    styled
}

/// The hashtags in `content`, in order of appearance, duplicates included.
pub fn hashtags(content: &str) -> Vec<&str> {
    HASHTAG_RE.find_iter(content).map(|m| m.as_str()).collect()
}
