//! String utilities shared by the collector and the code generators.

use std::{borrow::Cow, fmt::Write};

/// Escape a string for use inside a single-quoted JavaScript string literal.
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
pub fn escape_single_quoted(s: &str) -> Cow<'_, str> {
    if !s.chars().any(needs_escape) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            // U+2028/U+2029 terminate lines in pre-ES2019 string literals
            '\u{2028}' | '\u{2029}' => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Whether a string would be altered by [`escape_single_quoted`].
pub fn needs_escaping(s: &str) -> bool {
    s.chars().any(needs_escape)
}

fn needs_escape(c: char) -> bool {
    matches!(c, '\\' | '\'' | '\u{2028}' | '\u{2029}') || c.is_control()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_names_are_borrowed() {
        assert!(matches!(
            escape_single_quoted("/stickers/a.png"),
            Cow::Borrowed("/stickers/a.png")
        ));
        assert!(!needs_escaping("learnw1Hypebob.png"));
        assert!(!needs_escaping("émoji 😀.png"));
    }

    #[test]
    fn test_escape_quote_and_backslash() {
        assert_eq!(escape_single_quoted("it's.png"), "it\\'s.png");
        assert_eq!(escape_single_quoted("a\\b.png"), "a\\\\b.png");
        assert!(needs_escaping("it's.png"));
    }

    #[test]
    fn test_escape_control_characters() {
        assert_eq!(escape_single_quoted("a\nb"), "a\\nb");
        assert_eq!(escape_single_quoted("a\tb"), "a\\tb");
        assert_eq!(escape_single_quoted("a\u{7}b"), "a\\u0007b");
        assert_eq!(escape_single_quoted("a\u{2028}b"), "a\\u2028b");
    }
}
