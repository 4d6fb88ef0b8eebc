//! Local screening of dashboard queries.

use crate::error::{BoardError, BoardResult};

/// Minimum query length in characters.
pub const MIN_QUERY_CHARS: usize = 15;
/// Minimum number of words longer than two characters.
pub const MIN_QUERY_WORDS: usize = 3;

/// Whether `text` reads like a real question rather than noise.
pub fn is_meaningful_query(text: &str) -> bool {
    let words = text
        .split_whitespace()
        .filter(|word| word.chars().count() > 2)
        .count();
    let has_letters = text.chars().any(|c| c.is_ascii_alphabetic());

    text.chars().count() >= MIN_QUERY_CHARS && words >= MIN_QUERY_WORDS && has_letters
}

/// Trimmed query if it passes screening.
pub fn screen_query(text: &str) -> BoardResult<&str> {
    if is_meaningful_query(text) {
        Ok(text.trim())
    } else {
        Err(BoardError::QueryRejected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_real_question() {
        assert!(is_meaningful_query("show monthly sales by region"));
        assert!(is_meaningful_query("top ten customers in 2023?"));
    }

    #[test]
    fn test_rejects_short_text() {
        assert!(!is_meaningful_query("sales now"));
        assert!(!is_meaningful_query(""));
    }

    #[test]
    fn test_rejects_too_few_words() {
        // long enough, but only two words over two characters
        assert!(!is_meaningful_query("supercalifragilistic sales"));
        assert!(!is_meaningful_query("a b c d e f g h i j k l"));
    }

    #[test]
    fn test_rejects_without_letters() {
        assert!(!is_meaningful_query("123 456 789 101112"));
    }

    #[test]
    fn test_screen_query_trims() {
        assert_eq!(
            screen_query("  revenue per quarter please  ").unwrap(),
            "revenue per quarter please"
        );
        assert!(matches!(screen_query("hi"), Err(BoardError::QueryRejected)));
    }
}
