//! Timeline resolution: timestamp parsing, fixed/dynamic interval assignment
//! and fade envelopes.

/// Fixed and dynamic interval assignment for dialogue sequences.
pub mod builder;
/// Duration-proportional fade-in/fade-out envelopes.
pub mod fade;
/// Colon-separated timestamp parsing.
pub mod timestamp;
