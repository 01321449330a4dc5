//! Bubblecast plans short animated-dialogue videos.
//!
//! Given a scene description (an ordered list of dialogue lines with
//! timestamps) and per-character layout preferences, Bubblecast computes a
//! deterministic [`RenderPlan`]: a non-overlapping timeline of intervals, the
//! speech-bubble geometry for every line (wrap points, rounded-rect shape,
//! tail, screen position), and a fade envelope per overlay. The plan is plain
//! data; rasterizing bubbles, compositing frames and muxing audio belong to an
//! external renderer consuming a [`RendererSink`].
//!
//! The public API is plan-oriented:
//!
//! - Deserialize a [`Scene`] and a [`CharacterPrefs`] map
//! - Build a [`Compositor`] and call [`Compositor::compose`]
//! - Hand the resulting [`RenderPlan`] to a [`RendererSink`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Speech-bubble layout: font metrics, word wrap, geometry, placement.
pub mod layout;

/// Scene compositor and overlay plan model.
pub mod compose;
/// Boundary scene model and character layout preferences.
pub mod scene;
/// Renderer sink boundary.
pub mod sink;
/// Timestamp parsing, timeline resolution and fade envelopes.
pub mod timeline;

pub use crate::foundation::core::{Canvas, Interval, Margins};
pub use crate::foundation::error::{BubblecastError, BubblecastResult};

pub use crate::compose::compositor::{Compositor, CompositorOpts, TimingMode};
pub use crate::compose::overlay::{BackgroundLayer, OverlayDescriptor, RenderPlan};
pub use crate::layout::bubble::{BubbleGeometry, BubbleStyle};
pub use crate::layout::metrics::{ApproxMetrics, FontMetrics};
pub use crate::layout::wrap::WrappedText;
pub use crate::scene::model::{CharacterLayout, CharacterPrefs, Dialogue, Scene, Side, TailSide, Vertical};
pub use crate::sink::{InMemorySink, RendererSink, SinkConfig};
pub use crate::timeline::builder::{AudioDurationLookup, TimedDialogue, TimelineOpts};
pub use crate::timeline::fade::Fade;
pub use crate::timeline::timestamp::parse_timestamp;
