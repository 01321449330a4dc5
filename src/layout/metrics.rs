/// Pixel measurement of text at a given font size.
///
/// The wrap contract is metric-agnostic: anything that measures a single line
/// of text works, from a real shaping library on the renderer side to the
/// built-in approximation. Implementations must be pure (identical input,
/// identical output) or wrap determinism breaks.
pub trait FontMetrics: Sync {
    /// Width in pixels of `text` rendered on one line.
    fn line_width(&self, text: &str, font_size: u32) -> f64;

    /// Height in pixels of one line, including inter-line gap.
    fn line_height(&self, font_size: u32) -> f64;
}

/// Fixed-ratio approximation: every character is `0.6 * font_size` wide and a
/// line is `font_size + line_gap` tall.
///
/// Matches what the renderer produces closely enough for boxy dialogue fonts;
/// swap in renderer-side metrics when exact fit matters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ApproxMetrics {
    /// Character width as a fraction of the font size.
    pub char_width_ratio: f64,
    /// Extra vertical space between lines, in pixels.
    pub line_gap: f64,
}

impl Default for ApproxMetrics {
    fn default() -> Self {
        Self {
            char_width_ratio: 0.6,
            line_gap: 8.0,
        }
    }
}

impl FontMetrics for ApproxMetrics {
    fn line_width(&self, text: &str, font_size: u32) -> f64 {
        let chars = text.chars().count() as f64;
        chars * self.char_width_ratio * f64::from(font_size)
    }

    fn line_height(&self, font_size: u32) -> f64 {
        f64::from(font_size) + self.line_gap
    }
}
