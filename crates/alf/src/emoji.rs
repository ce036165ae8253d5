//! Emoji detection for text rendering
//!
//! Emoji glyphs sit taller than the surrounding text and message bubbles
//! render emoji-only content oversized, so text components need two cheap
//! checks: does any child contain an emoji, and is a short string nothing but
//! emoji. Both match code points with the `Emoji_Presentation` or
//! `Extended_Pictographic` Unicode properties. The emoji-only check is a
//! heuristic, not grapheme segmentation.

use regex::Regex;
use std::sync::OnceLock;

/// Longest string, in UTF-16 code units, that [`is_only_emoji`] will accept
pub const SINGLE_EMOJI_MAX_LEN: usize = 15;

const EMOJI_CLASS: &str = r"[\p{Emoji_Presentation}\p{Extended_Pictographic}]";

fn emoji_regex() -> &'static Regex {
    static EMOJI_REGEX: OnceLock<Regex> = OnceLock::new();
    EMOJI_REGEX.get_or_init(|| Regex::new(EMOJI_CLASS).expect("emoji class is a valid pattern"))
}

fn only_emoji_regex() -> &'static Regex {
    static ONLY_EMOJI_REGEX: OnceLock<Regex> = OnceLock::new();
    ONLY_EMOJI_REGEX.get_or_init(|| {
        Regex::new(&format!("^{}+$", EMOJI_CLASS)).expect("emoji class is a valid pattern")
    })
}

/// A child of a text element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextChild<'a> {
    /// A string run
    Text(&'a str),
    /// A nested element; never inspected
    Element,
}

impl<'a> From<&'a str> for TextChild<'a> {
    fn from(text: &'a str) -> Self {
        TextChild::Text(text)
    }
}

/// Check whether `text` contains at least one emoji code point
pub fn contains_emoji(text: &str) -> bool {
    emoji_regex().is_match(text)
}

/// Check whether any string child contains an emoji
pub fn child_has_emoji(children: &[TextChild<'_>]) -> bool {
    children.iter().any(|child| match child {
        TextChild::Text(text) => contains_emoji(text),
        TextChild::Element => false,
    })
}

/// Check whether `text` is short and made only of emoji code points
///
/// ```rust
/// use alf::emoji::is_only_emoji;
///
/// assert!(is_only_emoji("🔥"));
/// assert!(!is_only_emoji("🔥 lit"));
/// ```
pub fn is_only_emoji(text: &str) -> bool {
    is_only_emoji_within(text, SINGLE_EMOJI_MAX_LEN)
}

/// [`is_only_emoji`] with a caller-chosen length cutoff
pub fn is_only_emoji_within(text: &str, max_len: usize) -> bool {
    // Stop counting once past the cutoff so long strings are never scanned
    let len = text.encode_utf16().take(max_len.saturating_add(1)).count();
    len <= max_len && only_emoji_regex().is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_has_emoji() {
        assert!(child_has_emoji(&["hello".into(), "🔥".into()]));
        assert!(!child_has_emoji(&["hello".into(), "world".into()]));
        assert!(!child_has_emoji(&[]));
    }

    #[test]
    fn test_elements_are_ignored() {
        assert!(!child_has_emoji(&[TextChild::Element, "plain".into()]));
        assert!(child_has_emoji(&[TextChild::Element, "ok 👍".into()]));
    }

    #[test]
    fn test_contains_emoji_ignores_digits_and_symbols() {
        assert!(!contains_emoji("123 #tag *"));
        assert!(contains_emoji("see you at 9 ⌚"));
    }

    #[test]
    fn test_pictographs_without_emoji_presentation() {
        // Text-presentation pictographs still count
        assert!(contains_emoji("©"));
        assert!(contains_emoji("smile ☺"));
        assert!(is_only_emoji("☺"));
        assert!(!contains_emoji("#1"));
    }

    #[test]
    fn test_is_only_emoji() {
        assert!(is_only_emoji("🔥"));
        assert!(is_only_emoji("🔥🔥🔥"));
        assert!(!is_only_emoji("🔥 lit"));
        assert!(!is_only_emoji("lit"));
        assert!(!is_only_emoji(""));
    }

    #[test]
    fn test_is_only_emoji_length_cutoff() {
        assert!(!is_only_emoji(&"a".repeat(20)));

        // Each of these is two UTF-16 code units
        assert!(is_only_emoji(&"🔥".repeat(7)));
        assert!(!is_only_emoji(&"🔥".repeat(8)));
    }

    #[test]
    fn test_is_only_emoji_within() {
        assert!(is_only_emoji_within(&"🔥".repeat(8), 16));
        assert!(!is_only_emoji_within("🔥", 1));
        assert!(!is_only_emoji_within("🔥", 0));
    }
}
