//! Speech-bubble layout: font metrics, greedy word wrap, bubble shape
//! construction and on-canvas placement.

/// Bubble geometry: rounded body, tail and per-line text origins.
pub mod bubble;
/// Font measurement trait and the character-count approximation.
pub mod metrics;
/// Anchor-based bubble placement inside canvas margins.
pub mod place;
/// Greedy word wrapping against a width limit.
pub mod wrap;
