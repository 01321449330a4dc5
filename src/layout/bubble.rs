use kurbo::{BezPath, Point, RoundedRect, Shape as _};

use crate::layout::metrics::FontMetrics;
use crate::layout::wrap::WrappedText;
use crate::scene::model::TailSide;

/// Bubble styling constants.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BubbleStyle {
    /// Font size in pixels used for wrapping and measurement.
    pub font_size: u32,
    /// Space between text and bubble edge, in pixels.
    pub padding: f64,
    /// Requested corner radius in pixels; clamped per bubble.
    pub corner_radius: f64,
    /// Tail triangle base width in pixels.
    pub tail_width: f64,
    /// Tail triangle height in pixels.
    pub tail_height: f64,
}

impl Default for BubbleStyle {
    fn default() -> Self {
        Self {
            font_size: 20,
            padding: 20.0,
            corner_radius: 12.0,
            tail_width: 15.0,
            tail_height: 20.0,
        }
    }
}

/// Declarative description of one speech bubble: shape outline, per-line text
/// origins and the image canvas that contains them.
///
/// Computed fresh per dialogue and never cached across plans; text and width
/// inputs vary. The external renderer turns `shape` and `line_origins` into
/// committed pixels.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct BubbleGeometry {
    /// Wrapped text lines, in reading order.
    pub lines: Vec<String>,
    /// Measured text width in pixels.
    pub content_width: f64,
    /// Measured text height in pixels.
    pub content_height: f64,
    /// Bubble rectangle width (`content_width + 2 * padding`).
    pub bubble_width: f64,
    /// Bubble rectangle height (`content_height + 2 * padding`).
    pub bubble_height: f64,
    /// Overall image canvas width, tail space included.
    pub image_width: f64,
    /// Overall image canvas height, tail space included.
    pub image_height: f64,
    /// Bubble rectangle top-left within the image canvas.
    pub bubble_origin: Point,
    /// Corner radius after clamping.
    pub corner_radius: f64,
    /// Which side the tail protrudes from.
    pub tail_side: TailSide,
    /// Bubble outline: rounded rectangle plus tail triangle, as one path.
    pub shape: BezPath,
    /// Top-left draw origin for each line, centered within the content area.
    pub line_origins: Vec<Point>,
}

/// Build the full bubble geometry for already-wrapped text.
///
/// Pathological inputs clamp instead of erroring: a corner radius that would
/// not fit shrinks to `min(bubble_w, bubble_h) / 2`, and a tail wider than the
/// straight run of the bottom edge narrows to fit.
pub fn build(
    text: &WrappedText,
    metrics: &dyn FontMetrics,
    style: &BubbleStyle,
    tail_side: TailSide,
) -> BubbleGeometry {
    let content_width = text.width;
    let content_height = text.height;
    let bubble_width = content_width + 2.0 * style.padding;
    let bubble_height = content_height + 2.0 * style.padding;

    let radius = style
        .corner_radius
        .clamp(0.0, bubble_width.min(bubble_height) / 2.0);

    let tail_width = style.tail_width.max(0.0);
    let tail_height = style.tail_height.max(0.0);

    // Tail space is reserved on the tail's own side so the bubble rectangle
    // keeps flush against its inner edge.
    let origin_x = match tail_side {
        TailSide::Left => tail_width,
        TailSide::Right => 0.0,
    };
    let origin = Point::new(origin_x, 0.0);

    let image_width = bubble_width + tail_width;
    let image_height = bubble_height + tail_height;

    let mut shape = RoundedRect::new(
        origin.x,
        origin.y,
        origin.x + bubble_width,
        origin.y + bubble_height,
        radius,
    )
    .to_path(0.1);
    append_tail(
        &mut shape,
        origin,
        bubble_width,
        bubble_height,
        radius,
        tail_width,
        tail_height,
        tail_side,
    );

    let line_count = text.lines.len().max(1) as f64;
    let line_height = content_height / line_count;
    let line_origins = text
        .lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let line_width = metrics.line_width(line, style.font_size);
            Point::new(
                origin.x + style.padding + (content_width - line_width) / 2.0,
                origin.y + style.padding + i as f64 * line_height,
            )
        })
        .collect();

    BubbleGeometry {
        lines: text.lines.clone(),
        content_width,
        content_height,
        bubble_width,
        bubble_height,
        image_width,
        image_height,
        bubble_origin: origin,
        corner_radius: radius,
        tail_side,
        shape,
        line_origins,
    }
}

/// Append the tail triangle: base on the bottom edge past the corner arc,
/// apex pointing down and outward into the reserved tail space.
#[allow(clippy::too_many_arguments)]
fn append_tail(
    shape: &mut BezPath,
    origin: Point,
    bubble_width: f64,
    bubble_height: f64,
    radius: f64,
    tail_width: f64,
    tail_height: f64,
    tail_side: TailSide,
) {
    if tail_width <= 0.0 || tail_height <= 0.0 {
        return;
    }
    let bottom = origin.y + bubble_height;
    // Straight run of the bottom edge between the two corner arcs.
    let straight = (bubble_width - 2.0 * radius).max(0.0);
    let base = tail_width.min(straight);
    if base <= 0.0 {
        return;
    }

    let (base_inner, base_outer, apex_x) = match tail_side {
        TailSide::Left => {
            let x0 = origin.x + radius;
            (x0 + base, x0, origin.x - tail_width)
        }
        TailSide::Right => {
            let x1 = origin.x + bubble_width - radius;
            (x1 - base, x1, origin.x + bubble_width + tail_width)
        }
    };

    shape.move_to((base_inner, bottom));
    shape.line_to((base_outer, bottom));
    shape.line_to((apex_x.max(0.0), bottom + tail_height));
    shape.close_path();
}

#[cfg(test)]
#[path = "../../tests/unit/layout/bubble.rs"]
mod tests;
