//! Boundary model for scene descriptions and character layout preferences.

/// Serde types for scene files and per-character preferences.
pub mod model;
