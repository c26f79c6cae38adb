//! Overlapping chunk segmentation driven by boundary detection.

use crate::boundary::{floor_char_boundary, BoundaryFinder, Direction};
use crate::error::ChunkError;
use crate::normalize::normalize;
use crate::types::{Chunk, ChunkOptions};

/// Splits normalized text into overlapping, boundary-aligned chunks.
///
/// The segmenter walks a cursor across the text in `chunk_size` steps,
/// snapping each cut backward to the nearest natural boundary, then
/// widens every emitted chunk by `overlap_size` on each interior side so
/// neighbors share context. The widened edges snap to boundaries too,
/// which makes the realized overlap approximate: semantic integrity
/// wins over exact overlap length.
pub struct TextSegmenter {
    finder: BoundaryFinder,
}

impl TextSegmenter {
    /// Create a segmenter with the default boundary finder.
    pub fn new() -> Self {
        Self {
            finder: BoundaryFinder::new(),
        }
    }

    /// Segment `text` into chunks according to `options`.
    ///
    /// The input is normalized first; chunk offsets refer to the
    /// normalized text. Empty or whitespace-only input yields no chunks.
    /// Fails with [`ChunkError::InvalidConfiguration`] when the options
    /// are invalid or cannot advance the cursor.
    pub fn segment(&self, text: &str, options: &ChunkOptions) -> Result<Vec<Chunk>, ChunkError> {
        options.validate()?;

        let text = normalize(text);
        let len = text.len();
        if len == 0 {
            return Ok(Vec::new());
        }
        if len <= options.chunk_size {
            return Ok(vec![Chunk::new(text, 0, len)]);
        }

        let mut chunks = Vec::new();
        let mut start_index = 0;

        while start_index < len {
            let mut end_index = floor_char_boundary(&text, (start_index + options.chunk_size).min(len));
            if end_index < len {
                end_index = self.finder.find(&text, end_index, Direction::Backward);
            }
            if end_index <= start_index {
                // A boundary behind the cursor won the backward search;
                // only possible when chunk_size is smaller than the
                // search window.
                return Err(ChunkError::InvalidConfiguration(format!(
                    "chunk_size {} cannot advance past offset {}",
                    options.chunk_size, start_index
                )));
            }

            let context_start = if start_index == 0 {
                0
            } else {
                self.finder.find(
                    &text,
                    start_index.saturating_sub(options.overlap_size),
                    Direction::Forward,
                )
            };
            let context_end = if end_index == len {
                len
            } else {
                self.finder.find(
                    &text,
                    (end_index + options.overlap_size).min(len),
                    Direction::Backward,
                )
            };

            if context_start < context_end {
                let content = &text[context_start..context_end];
                if !content.trim().is_empty() {
                    chunks.push(Chunk::new(content, context_start, context_end));
                }
            }

            start_index = end_index;
        }

        Ok(chunks)
    }
}

impl Default for TextSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Chunk `text` with the given options using a shared segmenter.
pub fn chunk_text(text: &str, options: &ChunkOptions) -> Result<Vec<Chunk>, ChunkError> {
    lazy_static::lazy_static! {
        static ref SEGMENTER: TextSegmenter = TextSegmenter::new();
    }
    SEGMENTER.segment(text, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn prose(sentences: usize) -> String {
        "The quick brown fox jumps over the lazy dog. ".repeat(sentences)
    }

    #[test]
    fn test_short_text_single_chunk() {
        let chunks = chunk_text("short text", &ChunkOptions::default()).unwrap();
        assert_eq!(chunks, vec![Chunk::new("short text", 0, 10)]);
    }

    #[test]
    fn test_empty_input_yields_no_chunks() {
        assert_eq!(chunk_text("", &ChunkOptions::default()).unwrap(), vec![]);
    }

    #[test]
    fn test_whitespace_only_input_yields_no_chunks() {
        assert_eq!(chunk_text(" \r\n \n  ", &ChunkOptions::default()).unwrap(), vec![]);
    }

    #[test]
    fn test_crlf_normalized_before_offsets() {
        let chunks = chunk_text("line one\r\nline two", &ChunkOptions::default()).unwrap();
        assert_eq!(chunks, vec![Chunk::new("line one\nline two", 0, 17)]);
    }

    #[test]
    fn test_text_at_exact_chunk_size_is_one_chunk() {
        let text = "x".repeat(1000);
        let chunks = chunk_text(&text, &ChunkOptions::default()).unwrap();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].end_char, 1000);
    }

    #[test]
    fn test_long_prose_yields_three_overlapping_chunks() {
        // 56 sentences of 45 characters, 2519 after the trailing trim.
        let text = prose(56);
        let chunks = chunk_text(&text, &ChunkOptions::default()).unwrap();

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].start_char, 0);
        assert_eq!(chunks.last().unwrap().end_char, 2519);
        // Neighbors share context; the exact amount depends on where the
        // sentence boundaries fell.
        assert!(chunks[1].start_char < chunks[0].end_char);
        assert!(chunks[2].start_char < chunks[1].end_char);
    }

    #[test]
    fn test_default_options_leave_no_gaps() {
        let text = prose(120);
        let normalized = normalize(&text);
        let chunks = chunk_text(&text, &ChunkOptions::default()).unwrap();

        assert!(chunks.len() > 1);
        assert_eq!(chunks[0].start_char, 0);
        assert_eq!(chunks.last().unwrap().end_char, normalized.len());
        for pair in chunks.windows(2) {
            assert!(pair[1].start_char <= pair[0].end_char, "gap between chunks");
            assert!(pair[1].start_char > pair[0].start_char, "chunks out of order");
        }
    }

    #[test]
    fn test_content_matches_source_range() {
        let text = prose(56);
        let normalized = normalize(&text);
        for chunk in chunk_text(&text, &ChunkOptions::default()).unwrap() {
            assert_eq!(chunk.content, &normalized[chunk.start_char..chunk.end_char]);
            assert!(!chunk.content.trim().is_empty());
        }
    }

    #[test]
    fn test_deterministic() {
        let text = prose(80);
        let options = ChunkOptions::default();
        assert_eq!(
            chunk_text(&text, &options).unwrap(),
            chunk_text(&text, &options).unwrap()
        );
    }

    #[test]
    fn test_cut_snaps_to_markdown_header() {
        let text = format!(
            "{}\n\n# Next Section\nMore words follow here and keep going for quite some time to fill space.",
            "alpha beta gamma delta ".repeat(7),
        );
        let options = ChunkOptions::with_size(200).with_overlap(20);
        let chunks = chunk_text(&text, &options).unwrap();
        let normalized = normalize(&text);

        // The raw cut at 200 would land mid-word; the header boundary
        // inside the search window must win instead.
        assert_eq!(chunks.len(), 2);
        assert!(normalized[chunks[0].end_char..].starts_with("Next Section"));
        assert!(chunks[1].content.starts_with("Next Section"));
    }

    #[test]
    fn test_zero_chunk_size_is_rejected() {
        let result = chunk_text("some text", &ChunkOptions::with_size(0));
        assert!(matches!(result, Err(ChunkError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_overlap_not_smaller_than_chunk_size_is_rejected() {
        let result = chunk_text(&prose(10), &ChunkOptions::with_size(50).with_overlap(50));
        assert!(matches!(result, Err(ChunkError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_stalled_cursor_errors_instead_of_hanging() {
        // With chunk_size below the search window, the gap after "a b"
        // keeps winning the backward search and the cursor cannot move.
        let text = format!("a b {}", "c".repeat(300));
        let result = chunk_text(&text, &ChunkOptions::with_size(10).with_overlap(2));
        assert!(matches!(result, Err(ChunkError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_boundaryless_text_cuts_at_chunk_size() {
        let text = "x".repeat(2500);
        let chunks = chunk_text(&text, &ChunkOptions::default()).unwrap();
        // No boundary anywhere: raw cuts every chunk_size characters,
        // context windows cannot snap and stay put.
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].end_char, 1100);
        assert_eq!(chunks[1].start_char, 900);
    }

    #[test]
    fn test_multibyte_text_segments_safely() {
        let text = "Ünïcödé wörds äre fün. ".repeat(30);
        let normalized = normalize(&text);
        let chunks = chunk_text(&text, &ChunkOptions::with_size(120).with_overlap(30)).unwrap();

        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert_eq!(chunk.content, &normalized[chunk.start_char..chunk.end_char]);
            assert!(!chunk.content.trim().is_empty());
        }
    }
}
