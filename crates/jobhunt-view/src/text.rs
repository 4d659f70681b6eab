use std::borrow::Cow;

/// Website text longer than this many characters is collapsed by default.
pub const TRUNCATE_AT: usize = 200;

/// True when `text` is long enough to get a "Show More" control.
#[must_use]
pub fn is_truncatable(text: &str) -> bool {
    text.chars().nth(TRUNCATE_AT).is_some()
}

/// The first `max_chars` characters of `text` followed by `...`, or `text`
/// unchanged when it already fits. Counts characters, not bytes.
#[must_use]
pub fn truncate_text(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => Cow::Owned(format!("{}...", &text[..cut])),
        None => Cow::Borrowed(text),
    }
}
