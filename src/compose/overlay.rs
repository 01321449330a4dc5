use kurbo::Point;

use crate::foundation::core::{Canvas, Interval};
use crate::layout::bubble::BubbleGeometry;
use crate::timeline::fade::Fade;

/// One renderable speech-bubble overlay.
///
/// The complete unit handed to the external renderer: what to draw
/// (`geometry`), where (`position`, top-left on the output canvas), when
/// (`interval`) and how it appears and disappears (`fade`).
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct OverlayDescriptor {
    /// Position of this dialogue in the input list; descriptor order follows
    /// it, which fixes the stacking order of simultaneous overlays.
    pub index: usize,
    /// Speaking character's name.
    pub character: String,
    /// Bubble shape, wrapped lines and draw origins.
    pub geometry: BubbleGeometry,
    /// Top-left corner of the bubble image on the output canvas.
    pub position: Point,
    /// On-screen interval in seconds.
    pub interval: Interval,
    /// Fade-in/out envelope.
    pub fade: Fade,
}

/// The implicit background layer covering the whole plan.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BackgroundLayer {
    /// Duration in seconds; always the plan's `total_duration`.
    pub duration: f64,
}

/// Complete output contract for one video-generation request.
///
/// Plain data, no side effects: the renderer rasterizes each bubble shape,
/// composites overlays in descriptor order over the background, applies
/// fades, muxes audio and writes the file. None of that happens here.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct RenderPlan {
    /// Output canvas size in pixels.
    pub canvas: Canvas,
    /// Required canvas duration in seconds.
    pub total_duration: f64,
    /// The single full-duration background layer.
    pub background: BackgroundLayer,
    /// Overlays in input dialogue order.
    pub overlays: Vec<OverlayDescriptor>,
}
