use crate::compose::overlay::{BackgroundLayer, OverlayDescriptor, RenderPlan};
use crate::foundation::core::Canvas;
use crate::foundation::error::BubblecastResult;

/// Configuration provided to a [`RendererSink`] at the start of a plan.
///
/// Everything a renderer needs to set itself up travels here explicitly,
/// including any encoder binary path; no component ever reads process
/// environment state.
#[derive(Debug, Clone)]
pub struct SinkConfig {
    /// Output canvas size in pixels.
    pub canvas: Canvas,
    /// Required output duration in seconds.
    pub total_duration: f64,
    /// The full-duration background layer.
    pub background: BackgroundLayer,
    /// Optional path to the compositing/encoding binary the renderer shells
    /// out to, when it needs one.
    pub encoder_binary: Option<std::path::PathBuf>,
}

/// Sink contract for consuming an overlay plan in stacking order.
///
/// Ordering contract: `overlay` is called in descriptor order (input dialogue
/// order), which fixes the stacking of simultaneously visible bubbles.
pub trait RendererSink: Send {
    /// Called once before any overlays are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> BubblecastResult<()>;
    /// Push one overlay in stacking order.
    fn overlay(&mut self, descriptor: &OverlayDescriptor) -> BubblecastResult<()>;
    /// Called once after the last overlay.
    fn end(&mut self) -> BubblecastResult<()>;
}

/// Drive `sink` with the contents of `plan`.
pub fn submit_plan(plan: &RenderPlan, sink: &mut dyn RendererSink) -> BubblecastResult<()> {
    submit_plan_with(plan, sink, None)
}

/// Like [`submit_plan`], with an explicit encoder binary path for renderers
/// that need one.
pub fn submit_plan_with(
    plan: &RenderPlan,
    sink: &mut dyn RendererSink,
    encoder_binary: Option<std::path::PathBuf>,
) -> BubblecastResult<()> {
    sink.begin(SinkConfig {
        canvas: plan.canvas,
        total_duration: plan.total_duration,
        background: plan.background,
        encoder_binary,
    })?;
    for descriptor in &plan.overlays {
        sink.overlay(descriptor)?;
    }
    sink.end()
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    overlays: Vec<OverlayDescriptor>,
    ended: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<&SinkConfig> {
        self.cfg.as_ref()
    }

    /// Borrow the captured overlays, in stacking order.
    pub fn overlays(&self) -> &[OverlayDescriptor] {
        &self.overlays
    }

    /// Return `true` once `end` has been called.
    pub fn is_ended(&self) -> bool {
        self.ended
    }
}

impl RendererSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> BubblecastResult<()> {
        self.cfg = Some(cfg);
        self.overlays.clear();
        self.ended = false;
        Ok(())
    }

    fn overlay(&mut self, descriptor: &OverlayDescriptor) -> BubblecastResult<()> {
        self.overlays.push(descriptor.clone());
        Ok(())
    }

    fn end(&mut self) -> BubblecastResult<()> {
        self.ended = true;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/sink/sink.rs"]
mod tests;
