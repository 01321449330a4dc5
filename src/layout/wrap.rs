use crate::foundation::error::{BubblecastError, BubblecastResult};
use crate::layout::metrics::FontMetrics;

/// Wrapped text plus the exact pixel box it occupies.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WrappedText {
    /// Wrapped lines, in reading order. Never empty.
    pub lines: Vec<String>,
    /// Widest measured line width in pixels.
    pub width: f64,
    /// `lines.len() * line_height` in pixels.
    pub height: f64,
}

/// Greedy word wrap measured through `metrics`.
///
/// A word joins the current line only while the measured projection stays
/// within `max_width`. A single word wider than `max_width` is kept whole on
/// its own line and allowed to overflow; there is no hyphenation and no
/// truncation. Output is fully determined by the input.
pub fn wrap(
    text: &str,
    metrics: &dyn FontMetrics,
    font_size: u32,
    max_width: f64,
) -> BubblecastResult<WrappedText> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let projected_len = current.len() + 1 + word.len();
        let mut projected = String::with_capacity(projected_len);
        projected.push_str(&current);
        projected.push(' ');
        projected.push_str(word);

        if metrics.line_width(&projected, font_size) <= max_width {
            current = projected;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    if lines.is_empty() {
        return Err(BubblecastError::EmptyText);
    }

    let width = lines
        .iter()
        .map(|line| metrics.line_width(line, font_size))
        .fold(0.0, f64::max);
    let height = lines.len() as f64 * metrics.line_height(font_size);

    Ok(WrappedText {
        lines,
        width,
        height,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/layout/wrap.rs"]
mod tests;
