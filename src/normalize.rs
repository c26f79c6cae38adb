//! Text normalization applied before segmentation.

/// Normalize line endings and trim outer whitespace.
///
/// Every `\r\n` becomes `\n`, then leading and trailing whitespace is
/// removed. Chunk offsets always refer to the text this function returns.
pub fn normalize(text: &str) -> String {
    text.replace("\r\n", "\n").trim().to_string()
}
