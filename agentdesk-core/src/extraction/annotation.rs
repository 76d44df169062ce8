//! Annotation stripping
//!
//! Assistant output sometimes decorates an item with a trailing note, e.g.
//! `From Concept to Kitchen (Tasks: Profiling, UI Design)`. An
//! [`AnnotationStrip`] removes such a note when its content begins with a
//! keyword. Only the final parenthetical of the item is considered;
//! parentheticals elsewhere are left untouched.

use std::borrow::Cow;

/// Removes a trailing `(<keyword>...)` parenthetical from an item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnnotationStrip {
    keyword: Cow<'static, str>,
}

impl AnnotationStrip {
    /// Strip rule keyed on a static keyword, usable in `const` items.
    pub const fn keyword(keyword: &'static str) -> Self {
        Self {
            keyword: Cow::Borrowed(keyword),
        }
    }

    /// Strip rule keyed on a runtime keyword (e.g. from the command line).
    pub fn owned(keyword: impl Into<String>) -> Self {
        Self {
            keyword: Cow::Owned(keyword.into()),
        }
    }

    pub fn as_keyword(&self) -> &str {
        &self.keyword
    }

    /// Apply the rule to a captured item.
    ///
    /// Returns the item without the trailing annotation and the whitespace
    /// before it, or the item unchanged when its last parenthetical does not
    /// begin with the keyword. Nested parentheses inside the annotation are
    /// balanced.
    pub fn apply<'a>(&self, item: &'a str) -> &'a str {
        let body = item.trim_end();
        let Some(open) = trailing_paren_start(body) else {
            return item;
        };
        let inner = &body[open + 1..body.len() - 1];
        if !inner.starts_with(self.as_keyword()) {
            return item;
        }
        body[..open].trim_end()
    }
}

/// Byte index of the `(` matching a trailing `)`, if `text` ends with one.
fn trailing_paren_start(text: &str) -> Option<usize> {
    let head = text.strip_suffix(')')?;
    let mut depth = 0usize;
    for (idx, ch) in head.char_indices().rev() {
        match ch {
            ')' => depth += 1,
            '(' if depth == 0 => return Some(idx),
            '(' => depth -= 1,
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const TASKS: AnnotationStrip = AnnotationStrip::keyword("Tasks:");

    #[test]
    fn test_strips_trailing_keyword_annotation() {
        assert_eq!(TASKS.apply("Title (Tasks: a, b, c)"), "Title");
        assert_eq!(TASKS.apply("Title   (Tasks: a)   "), "Title");
    }

    #[test]
    fn test_other_annotations_are_kept() {
        assert_eq!(TASKS.apply("Title (Other note)"), "Title (Other note)");
        assert_eq!(
            TASKS.apply("What's for Dinner? (And Why It's Hard)"),
            "What's for Dinner? (And Why It's Hard)"
        );
        // keyword must open the parenthetical
        assert_eq!(TASKS.apply("Title ( Tasks: a)"), "Title ( Tasks: a)");
    }

    #[test]
    fn test_only_trailing_parenthetical_is_considered() {
        assert_eq!(
            TASKS.apply("Plan (Tasks: a) and more"),
            "Plan (Tasks: a) and more"
        );
        assert_eq!(TASKS.apply("Plan (draft) (Tasks: a)"), "Plan (draft)");
    }

    #[test]
    fn test_nested_parentheses_are_balanced() {
        assert_eq!(TASKS.apply("Journey (Tasks: UI (web), API)"), "Journey");
        assert_eq!(TASKS.apply("Unbalanced Tasks: a)"), "Unbalanced Tasks: a)");
    }

    #[test]
    fn test_owned_keyword() {
        let rule = AnnotationStrip::owned("Owner:");
        assert_eq!(rule.apply("Ship it (Owner: Bob)"), "Ship it");
        assert_eq!(rule.as_keyword(), "Owner:");
    }
}
