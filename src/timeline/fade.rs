/// Symmetric fade-in/fade-out envelope for one overlay.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Fade {
    /// Fade-in length in seconds.
    pub fade_in: f64,
    /// Fade-out length in seconds, always equal to `fade_in`.
    pub fade_out: f64,
}

/// Hard cap on either fade length, in seconds.
pub const MAX_FADE_SECS: f64 = 0.2;

/// Fraction of the interval each fade may occupy.
pub const FADE_RATIO: f64 = 1.0 / 6.0;

/// Compute the fade envelope for an interval of `duration` seconds using the
/// default cap and ratio.
pub fn envelope(duration: f64) -> Fade {
    envelope_with(duration, MAX_FADE_SECS, FADE_RATIO)
}

/// Compute a fade envelope with explicit cap and ratio.
///
/// Degenerate input (`duration <= 0`, NaN) yields a zero envelope rather than
/// an error; callers have already excluded such intervals from the plan.
pub fn envelope_with(duration: f64, max_fade: f64, ratio: f64) -> Fade {
    if duration.is_nan() || duration <= 0.0 {
        return Fade {
            fade_in: 0.0,
            fade_out: 0.0,
        };
    }
    let fade = (duration * ratio).min(max_fade).max(0.0);
    Fade {
        fade_in: fade,
        fade_out: fade,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/fade.rs"]
mod tests;
