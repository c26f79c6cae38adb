//! Natural-boundary detection for chunk split points.

use regex::Regex;

use crate::BOUNDARY_SEARCH_WINDOW;

/// Which side of the target offset to search for a boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Search the window before the target offset.
    Backward,
    /// Search the window after the target offset.
    Forward,
}

/// Locates natural split points near a target offset.
///
/// Boundaries are ranked from most to least preferred: markdown header
/// starts, paragraph breaks, line breaks, sentence ends, word gaps. The
/// first tier with any match in the search window wins; lower tiers are
/// only consulted when every higher tier comes up empty.
pub struct BoundaryFinder {
    /// Separator patterns in preference order
    patterns: Vec<Regex>,
}

impl BoundaryFinder {
    /// Create a boundary finder with the default preference ladder.
    pub fn new() -> Self {
        Self {
            patterns: vec![
                // Markdown header start: newline, 1-6 '#', then a space
                Regex::new("\n#{1,6} ").unwrap(),
                // Paragraph break
                Regex::new("\n\n").unwrap(),
                // Line break
                Regex::new("\n").unwrap(),
                // Sentence end
                Regex::new(r"\. ").unwrap(),
                // Word gap
                Regex::new(" ").unwrap(),
            ],
        }
    }

    /// Find the best boundary near `target`, searching up to
    /// [`BOUNDARY_SEARCH_WINDOW`] characters in `direction`.
    ///
    /// Returns the offset immediately after the matched separator:
    /// `Forward` takes the match closest to `target`, `Backward` the one
    /// farthest into the window. When no tier matches at all, `target` is
    /// returned unchanged and the caller must tolerate a mid-word cut.
    pub fn find(&self, text: &str, target: usize, direction: Direction) -> usize {
        let target = floor_char_boundary(text, target);
        let (lo, hi) = match direction {
            Direction::Backward => (target.saturating_sub(BOUNDARY_SEARCH_WINDOW), target),
            Direction::Forward => (target, (target + BOUNDARY_SEARCH_WINDOW).min(text.len())),
        };
        let lo = floor_char_boundary(text, lo);
        let hi = floor_char_boundary(text, hi);
        let window = &text[lo..hi];

        for pattern in &self.patterns {
            let found = match direction {
                Direction::Forward => pattern.find(window),
                Direction::Backward => pattern.find_iter(window).last(),
            };
            if let Some(m) = found {
                return lo + m.end();
            }
        }

        target
    }
}

impl Default for BoundaryFinder {
    fn default() -> Self {
        Self::new()
    }
}

/// Round `index` down to the nearest UTF-8 character boundary of `text`.
pub(crate) fn floor_char_boundary(text: &str, index: usize) -> usize {
    if index >= text.len() {
        return text.len();
    }
    let mut index = index;
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_backward_picks_rightmost_word_gap() {
        let text = "alpha beta gamma";
        // Gaps end at 6 and 11; backward from the end takes the later one.
        assert_eq!(text.len(), 16);
        assert_eq!(BoundaryFinder::new().find(text, 16, Direction::Backward), 11);
    }

    #[test]
    fn test_forward_picks_leftmost_word_gap() {
        let text = "alpha beta gamma";
        assert_eq!(BoundaryFinder::new().find(text, 0, Direction::Forward), 6);
    }

    #[test]
    fn test_sentence_beats_word_gap() {
        let text = "First sentence. And then more words follow";
        // ". " ends at 16 even though word gaps sit closer to the target.
        let finder = BoundaryFinder::new();
        assert_eq!(finder.find(text, text.len(), Direction::Backward), 16);
    }

    #[test]
    fn test_paragraph_beats_sentence() {
        let text = "One sentence. Then a break.\n\nNext paragraph";
        let finder = BoundaryFinder::new();
        assert_eq!(finder.find(text, text.len(), Direction::Backward), 29);
    }

    #[test]
    fn test_header_beats_paragraph() {
        let text = "Intro text.\n\n## Section\nBody";
        let finder = BoundaryFinder::new();
        // "\n## " spans 12..16; the paragraph break at 11..13 loses.
        assert_eq!(finder.find(text, text.len(), Direction::Backward), 16);
    }

    #[test]
    fn test_no_boundary_returns_target() {
        let text = "abcdefghijklmnop";
        let finder = BoundaryFinder::new();
        assert_eq!(finder.find(text, 8, Direction::Backward), 8);
        assert_eq!(finder.find(text, 8, Direction::Forward), 8);
    }

    #[test]
    fn test_window_is_bounded() {
        // The only gap sits 150 characters past the target, outside the
        // forward window.
        let text = format!("{} tail", "x".repeat(150));
        let finder = BoundaryFinder::new();
        assert_eq!(finder.find(&text, 0, Direction::Forward), 0);
    }

    #[test]
    fn test_target_clamped_to_text_length() {
        let text = "tiny text";
        let finder = BoundaryFinder::new();
        assert_eq!(finder.find(text, 5000, Direction::Backward), 5);
    }

    #[test]
    fn test_multibyte_target_is_safe() {
        let text = "héllo wörld ünd mörë";
        let finder = BoundaryFinder::new();
        // Offsets inside a multi-byte char must not panic.
        for i in 0..=text.len() + 2 {
            let _ = finder.find(text, i, Direction::Backward);
            let _ = finder.find(text, i, Direction::Forward);
        }
    }

    #[test]
    fn test_floor_char_boundary() {
        let text = "aé"; // 'é' occupies bytes 1..3
        assert_eq!(floor_char_boundary(text, 2), 1);
        assert_eq!(floor_char_boundary(text, 3), 3);
        assert_eq!(floor_char_boundary(text, 99), 3);
    }
}
