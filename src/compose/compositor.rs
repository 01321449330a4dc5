use rayon::prelude::*;

use crate::compose::overlay::{BackgroundLayer, OverlayDescriptor, RenderPlan};
use crate::foundation::core::{Canvas, Margins};
use crate::layout::bubble::{self, BubbleStyle};
use crate::layout::metrics::{ApproxMetrics, FontMetrics};
use crate::layout::place::place;
use crate::layout::wrap::wrap;
use crate::scene::model::{CharacterPrefs, Dialogue, Scene};
use crate::timeline::builder::{
    dynamic_timeline, fixed_timeline, total_duration, AudioDurationLookup, TimedDialogue,
    TimelineOpts,
};
use crate::timeline::fade;
use crate::timeline::timestamp::parse_timestamp;

/// How dialogue intervals are resolved.
#[derive(Clone, Copy)]
pub enum TimingMode<'a> {
    /// Intervals taken verbatim from each record's timestamps.
    Fixed,
    /// Intervals accumulated sequentially from measured audio durations,
    /// falling back to a record's own timestamp span when no clip exists.
    Dynamic(&'a dyn AudioDurationLookup),
}

impl std::fmt::Debug for TimingMode<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixed => f.write_str("Fixed"),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// Compositor configuration; every knob has the documented default.
#[derive(Clone, Copy, Debug)]
pub struct CompositorOpts {
    /// Bubble styling constants.
    pub style: BubbleStyle,
    /// Timeline constants (start delay, gap, buffers).
    pub timeline: TimelineOpts,
    /// Screen margins for placement.
    pub margins: Margins,
    /// Prefix each bubble's text with `"{character}: "`. On by default.
    pub speaker_prefix: bool,
}

impl Default for CompositorOpts {
    fn default() -> Self {
        Self {
            style: BubbleStyle::default(),
            timeline: TimelineOpts::default(),
            margins: Margins::default(),
            speaker_prefix: true,
        }
    }
}

/// The orchestrator: resolves the timeline once, then lays out one bubble per
/// valid dialogue and assembles the ordered [`RenderPlan`].
pub struct Compositor {
    metrics: Box<dyn FontMetrics + Send + Sync>,
    opts: CompositorOpts,
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new(ApproxMetrics::default(), CompositorOpts::default())
    }
}

impl Compositor {
    /// Create a compositor over the given font metrics and options.
    pub fn new(metrics: impl FontMetrics + Send + Sync + 'static, opts: CompositorOpts) -> Self {
        Self {
            metrics: Box::new(metrics),
            opts,
        }
    }

    /// Compose the overlay plan for `dialogues` on `canvas`.
    ///
    /// The timeline is resolved once per call in the requested mode. Bubble
    /// layout then runs per entry on the rayon pool (entries are independent
    /// once timed) and results are collected by original dialogue index, so
    /// descriptor order always matches input order regardless of completion
    /// order. A failure in one entry (empty text, degenerate geometry) drops
    /// that overlay with a warning and never aborts the rest.
    pub fn compose(
        &self,
        dialogues: &[Dialogue],
        prefs: &CharacterPrefs,
        canvas: Canvas,
        mode: TimingMode<'_>,
    ) -> RenderPlan {
        let timeline = match mode {
            TimingMode::Fixed => fixed_timeline(dialogues),
            TimingMode::Dynamic(audio) => dynamic_timeline(dialogues, audio, self.opts.timeline),
        };
        let total = total_duration(&timeline, self.opts.timeline);

        let mut overlays: Vec<OverlayDescriptor> = timeline
            .par_iter()
            .filter_map(|entry| self.build_overlay(entry, prefs, canvas))
            .collect();
        // Stacking order must equal input dialogue order.
        overlays.sort_by_key(|o| o.index);

        tracing::debug!(
            dialogues = dialogues.len(),
            overlays = overlays.len(),
            total_duration = total,
            "composed plan"
        );

        RenderPlan {
            canvas,
            total_duration: total,
            background: BackgroundLayer { duration: total },
            overlays,
        }
    }

    /// Compose the overlay plan for a whole scene.
    ///
    /// Same as [`Compositor::compose`] over `scene.dialogues`, except that in
    /// fixed mode the scene's declared `background.end` acts as a floor on the
    /// plan duration: a scene declared to run 30s stays 30s even when the last
    /// dialogue ends at 16s. Dynamic mode retimes everything and ignores the
    /// declared end, as it ignores every other authored timestamp. An absent
    /// or unparseable `background.end` leaves the timeline-derived duration
    /// in place.
    pub fn compose_scene(
        &self,
        scene: &Scene,
        prefs: &CharacterPrefs,
        canvas: Canvas,
        mode: TimingMode<'_>,
    ) -> RenderPlan {
        let mut plan = self.compose(&scene.dialogues, prefs, canvas, mode);
        if matches!(mode, TimingMode::Fixed) {
            match scene.background.end.as_deref().map(parse_timestamp) {
                Some(Ok(declared)) if declared > plan.total_duration => {
                    plan.total_duration = declared;
                    plan.background.duration = declared;
                }
                Some(Err(err)) => {
                    tracing::warn!(%err, "ignoring unusable background end");
                }
                _ => {}
            }
        }
        plan
    }

    fn build_overlay(
        &self,
        entry: &TimedDialogue,
        prefs: &CharacterPrefs,
        canvas: Canvas,
    ) -> Option<OverlayDescriptor> {
        if entry.line.trim().is_empty() {
            tracing::warn!(
                index = entry.index,
                character = %entry.character,
                "empty dialogue line, skipping overlay"
            );
            return None;
        }

        let layout = prefs.layout_for(&entry.character);
        let text = if self.opts.speaker_prefix {
            format!("{}: {}", entry.character, entry.line)
        } else {
            entry.line.clone()
        };

        let metrics: &dyn FontMetrics = self.metrics.as_ref();
        let wrapped = match wrap(
            &text,
            metrics,
            self.opts.style.font_size,
            f64::from(layout.max_width),
        ) {
            Ok(wrapped) => wrapped,
            Err(err) => {
                tracing::warn!(
                    index = entry.index,
                    character = %entry.character,
                    %err,
                    "skipping overlay"
                );
                return None;
            }
        };

        let geometry = bubble::build(&wrapped, metrics, &self.opts.style, layout.resolved_tail_side());
        let (x, y) = place(
            geometry.image_width,
            geometry.image_height,
            canvas,
            layout.side,
            layout.vertical,
            self.opts.margins,
        );
        let fade = fade::envelope(entry.interval.duration());

        Some(OverlayDescriptor {
            index: entry.index,
            character: entry.character.clone(),
            geometry,
            position: kurbo::Point::new(x, y),
            interval: entry.interval,
            fade,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/compositor.rs"]
mod tests;
