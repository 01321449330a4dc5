use crate::foundation::core::{Canvas, Margins};
use crate::scene::model::{Side, Vertical};

/// Compute the top-left screen coordinate for a bubble image of
/// `bubble_w × bubble_h` pixels on `canvas`.
///
/// The returned rectangle lies within the canvas whenever the bubble fits
/// inside the margins (`bubble_w <= canvas_w - 2 * margins.x` and the
/// vertical analogue); the resolver does not clip or reflow beyond that.
/// Keeping `max_width` inside those bounds is the caller's configuration
/// responsibility. Two bubbles visible at once on the same side may overlap;
/// collision avoidance is out of scope.
pub fn place(
    bubble_w: f64,
    bubble_h: f64,
    canvas: Canvas,
    side: Side,
    vertical: Vertical,
    margins: Margins,
) -> (f64, f64) {
    let canvas_w = f64::from(canvas.width);
    let canvas_h = f64::from(canvas.height);

    let x = match side {
        Side::Left => margins.x,
        Side::Right => canvas_w - margins.x - bubble_w,
        Side::Center => (canvas_w - bubble_w) / 2.0,
    };
    let y = match vertical {
        Vertical::Top => margins.y,
        Vertical::Bottom => canvas_h - margins.y - bubble_h,
    };
    (x, y)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/place.rs"]
mod tests;
