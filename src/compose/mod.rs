//! Scene composition: the orchestrating fold that turns dialogues into an
//! ordered overlay plan.

/// Compositor driving timeline, layout and placement into a plan.
pub mod compositor;
/// Plain-data render plan and overlay descriptors.
pub mod overlay;
