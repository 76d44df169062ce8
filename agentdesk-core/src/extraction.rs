//! List Extraction
//!
//! Pulls ordered list items out of a block of free text.
//!
//! # Overview
//!
//! Assistant replies wrap their lists in prose:
//!
//! ```text
//! Okay, I've analyzed the chat log. Here are the feature ideas:
//! 1. Message tagging or categorization system.
//! 2. Enhanced notification preferences for different chat types.
//! ```
//!
//! Extraction is line-oriented. Each line is tested on its own against the
//! marker of a [`ListStyle`]; matching lines contribute their remainder,
//! everything else (intro prose, blank lines, headers) is skipped. When an
//! [`AnnotationStrip`] is given it runs on the raw remainder before trimming.
//!
//! # Result
//!
//! Items come back trimmed, in the order they appear in the text. A marker
//! line with nothing after it contributes no item. There is no error case:
//! text without a single matching line produces an empty `Vec`, and callers
//! are expected to fall back to a default of their own.

mod annotation;
mod style;

pub use annotation::AnnotationStrip;
pub use style::{ListStyle, ParseListStyleError};

use tracing::debug;

/// Extract the items of `text` recognized by `style`.
pub fn extract(text: &str, style: ListStyle, strip: Option<&AnnotationStrip>) -> Vec<String> {
    let items: Vec<String> = text
        .lines()
        .filter_map(|line| style.capture(line))
        .filter_map(|raw| {
            let raw = match strip {
                Some(rule) => rule.apply(raw),
                None => raw,
            };
            let item = raw.trim();
            (!item.is_empty()).then(|| item.to_string())
        })
        .collect();
    debug!(style = %style, items = items.len(), "extracted list items");
    items
}

/// A list style paired with an optional annotation strip rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extractor {
    pub style: ListStyle,
    pub strip: Option<AnnotationStrip>,
}

impl Extractor {
    pub const fn new(style: ListStyle) -> Self {
        Self { style, strip: None }
    }

    pub const fn with_strip(style: ListStyle, strip: AnnotationStrip) -> Self {
        Self {
            style,
            strip: Some(strip),
        }
    }

    pub fn extract(&self, text: &str) -> Vec<String> {
        extract(text, self.style, self.strip.as_ref())
    }
}

impl From<ListStyle> for Extractor {
    fn from(style: ListStyle) -> Self {
        Self::new(style)
    }
}
