//! Verse splitting for lyric text.
//!
//! A verse is a segment of the text delimited by a blank line. Splitting is
//! literal: `""` is one empty verse, and `"a\n\n\nb"` is `"a"` then `"\nb"`.
//! Verse indices are 1-based.

/// Separator between two verses.
pub const VERSE_DELIMITER: &str = "\n\n";

/// Number of verses in `text` (always at least one).
pub fn verse_count(text: &str) -> usize {
    text.split(VERSE_DELIMITER).count()
}

/// The `verse`-th verse of `text`, or `None` when `verse` is outside
/// `1..=verse_count(text)`.
pub fn verse_at(text: &str, verse: i64) -> Option<&str> {
    let index = usize::try_from(verse).ok()?.checked_sub(1)?;
    text.split(VERSE_DELIMITER).nth(index)
}
