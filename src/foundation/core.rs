use crate::foundation::error::{BubblecastError, BubblecastResult};

pub use kurbo::{BezPath, Point, Rect};

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Create a validated, non-empty canvas.
    pub fn new(width: u32, height: u32) -> BubblecastResult<Self> {
        if width == 0 || height == 0 {
            return Err(BubblecastError::validation("Canvas must be non-empty"));
        }
        Ok(Self { width, height })
    }
}

/// Half-open time interval `[start, end)` in seconds, `end > start`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Interval {
    /// Start time in seconds, non-negative.
    pub start: f64,
    /// End time in seconds, strictly greater than `start`.
    pub end: f64,
}

impl Interval {
    /// Create a validated interval.
    ///
    /// Rejects negative starts, non-finite bounds and `end <= start`; a
    /// dialogue that fails this is dropped from the plan, never rendered.
    pub fn new(start: f64, end: f64) -> BubblecastResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(BubblecastError::interval("bounds must be finite"));
        }
        if start < 0.0 {
            return Err(BubblecastError::interval(format!(
                "start must be non-negative, got {start}"
            )));
        }
        if end <= start {
            return Err(BubblecastError::interval(format!(
                "end ({end}) must be greater than start ({start})"
            )));
        }
        Ok(Self { start, end })
    }

    /// Interval length in seconds, always positive.
    pub fn duration(self) -> f64 {
        self.end - self.start
    }

    /// Return `true` when `self` and `other` share any time.
    pub fn overlaps(self, other: Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Fixed screen margins keeping bubbles off the canvas edges.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Margins {
    /// Horizontal margin in pixels.
    pub x: f64,
    /// Vertical margin in pixels.
    pub y: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self { x: 40.0, y: 60.0 }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
