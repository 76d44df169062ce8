//! List Style
//!
//! Describes how an item line begins in a block of assistant text.
//!
//! # Markers
//!
//! ```text
//! 1. First        → Numbered
//!   12.  Twelfth  → Numbered (leading whitespace and wide gaps allowed)
//! - Dash          → Bulleted
//! * Star          → Bulleted
//! • Glyph         → Bulleted
//! 1.NoSpace       → not an item
//! ```
//!
//! The marker is anchored at the start of the line, after optional leading
//! whitespace, and must be followed by at least one whitespace character.
//! The numeric value of a numbered marker is discarded: physical line order is
//! the only ordering.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Numbered marker: digits, a period, then whitespace.
static NUMBERED_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*[0-9]+\.\s+(.*)$").unwrap());

/// Bulleted marker: one of `-`, `*`, `•`, then whitespace.
static BULLETED_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[-*\x{2022}]\s+(.*)$").unwrap());

/// How item lines are recognized in a text block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListStyle {
    /// `1. item`, `2. item`, ...
    Numbered,
    /// `- item`, `* item`, `• item`
    Bulleted,
}

impl ListStyle {
    /// Every style, in display order.
    pub const ALL: [ListStyle; 2] = [ListStyle::Numbered, ListStyle::Bulleted];

    /// The lowercase name used on the command line and in config files.
    pub fn as_str(self) -> &'static str {
        match self {
            ListStyle::Numbered => "numbered",
            ListStyle::Bulleted => "bulleted",
        }
    }

    fn marker(self) -> &'static Regex {
        match self {
            ListStyle::Numbered => &*NUMBERED_MARKER,
            ListStyle::Bulleted => &*BULLETED_MARKER,
        }
    }

    /// Return the remainder of `line` after this style's marker.
    ///
    /// `None` when the line does not start with the marker. The remainder is
    /// returned untrimmed so annotation stripping sees the raw tail.
    pub fn capture(self, line: &str) -> Option<&str> {
        self.marker()
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Check whether `line` is an item line in this style.
    pub fn matches(self, line: &str) -> bool {
        self.marker().is_match(line)
    }

    /// Extract the items of `text` in this style, without annotation stripping.
    pub fn extract(self, text: &str) -> Vec<String> {
        super::extract(text, self, None)
    }
}

impl fmt::Display for ListStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized list style name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown list style '{0}' (expected 'numbered' or 'bulleted')")]
pub struct ParseListStyleError(pub String);

impl FromStr for ListStyle {
    type Err = ParseListStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "numbered" => Ok(ListStyle::Numbered),
            "bulleted" => Ok(ListStyle::Bulleted),
            _ => Err(ParseListStyleError(s.to_string())),
        }
    }
}
