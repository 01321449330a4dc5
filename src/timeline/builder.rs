use std::collections::BTreeMap;

use crate::foundation::core::Interval;
use crate::scene::model::Dialogue;
use crate::timeline::timestamp::parse_timestamp;

/// Timing constants for dynamic-mode resolution and plan duration.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimelineOpts {
    /// Silence before the first dynamic-mode dialogue, in seconds.
    pub start_delay: f64,
    /// Gap between consecutive dynamic-mode dialogues, in seconds.
    pub gap: f64,
    /// Floor applied to every dynamic-mode duration; avoids degenerate
    /// zero-length boxes when an audio clip or timestamp pair is too short.
    pub min_duration: f64,
    /// Silence appended after the last dialogue when computing the total
    /// canvas duration.
    pub trailing_buffer: f64,
    /// Total duration used when the timeline resolves empty.
    pub empty_fallback: f64,
}

impl Default for TimelineOpts {
    fn default() -> Self {
        Self {
            start_delay: 2.0,
            gap: 0.5,
            min_duration: 1.0,
            trailing_buffer: 2.0,
            empty_fallback: 10.0,
        }
    }
}

/// Capability supplying measured audio-clip durations to dynamic mode.
///
/// Built once by the orchestration layer (typically from the speech-synthesis
/// output); the core never probes the filesystem for clips.
pub trait AudioDurationLookup {
    /// Measured duration in seconds for the dialogue at `index` spoken by
    /// `character`, or `None` when no clip exists.
    fn duration_secs(&self, index: usize, character: &str) -> Option<f64>;
}

/// Index-keyed duration map, the common concrete lookup.
impl AudioDurationLookup for BTreeMap<usize, f64> {
    fn duration_secs(&self, index: usize, _character: &str) -> Option<f64> {
        self.get(&index).copied()
    }
}

/// Sparse per-index durations as deserialized from a manifest
/// (`[3.2, null, 4.0]`).
impl AudioDurationLookup for Vec<Option<f64>> {
    fn duration_secs(&self, index: usize, _character: &str) -> Option<f64> {
        self.get(index).copied().flatten()
    }
}

/// One dialogue with its resolved interval.
///
/// `index` is the position in the input dialogue list; the compositor keys
/// descriptor order (and audio lookups) off it.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimedDialogue {
    /// Position in the input dialogue list.
    pub index: usize,
    /// Speaking character's name.
    pub character: String,
    /// Spoken line.
    pub line: String,
    /// Resolved on-screen interval.
    pub interval: Interval,
}

/// Resolve intervals verbatim from each record's own timestamps.
///
/// No cross-record dependency: records with malformed timestamps or
/// `end <= start` are dropped with a warning, the rest keep their relative
/// order. Caller-supplied timestamps are trusted, so fixed-mode intervals may
/// overlap.
pub fn fixed_timeline(dialogues: &[Dialogue]) -> Vec<TimedDialogue> {
    let mut timeline = Vec::with_capacity(dialogues.len());
    for (index, d) in dialogues.iter().enumerate() {
        let bounds = parse_timestamp(&d.start).and_then(|start| {
            let end = parse_timestamp(&d.end)?;
            Interval::new(start, end)
        });
        match bounds {
            Ok(interval) => timeline.push(TimedDialogue {
                index,
                character: d.character.clone(),
                line: d.line.clone(),
                interval,
            }),
            Err(err) => {
                tracing::warn!(index, character = %d.character, %err, "dropping dialogue");
            }
        }
    }
    timeline
}

/// Resolve intervals sequentially from measured audio durations.
///
/// A cursor starts at `opts.start_delay`; each record occupies
/// `[cursor, cursor + duration)` and advances the cursor by
/// `duration + opts.gap`. Duration comes from `audio` when a clip exists,
/// otherwise from the record's own timestamp span; both paths are floored at
/// `opts.min_duration`. Intervals are therefore monotonic and non-overlapping
/// by construction.
///
/// A record is dropped only when it has no audio clip *and* its timestamps do
/// not parse, leaving nothing to derive a duration from.
pub fn dynamic_timeline(
    dialogues: &[Dialogue],
    audio: &dyn AudioDurationLookup,
    opts: TimelineOpts,
) -> Vec<TimedDialogue> {
    let mut timeline = Vec::with_capacity(dialogues.len());
    let mut cursor = opts.start_delay.max(0.0);

    for (index, d) in dialogues.iter().enumerate() {
        let measured = audio.duration_secs(index, &d.character);
        let duration = match measured {
            Some(secs) => secs,
            None => match timestamp_span(d) {
                Ok(span) => span,
                Err(err) => {
                    tracing::warn!(
                        index,
                        character = %d.character,
                        %err,
                        "no audio clip and unusable timestamps, dropping dialogue"
                    );
                    continue;
                }
            },
        };
        let duration = duration.max(opts.min_duration);

        // Floored duration is positive, so the constructor cannot fail here.
        let Ok(interval) = Interval::new(cursor, cursor + duration) else {
            continue;
        };
        timeline.push(TimedDialogue {
            index,
            character: d.character.clone(),
            line: d.line.clone(),
            interval,
        });
        cursor += duration + opts.gap.max(0.0);
    }
    timeline
}

fn timestamp_span(d: &Dialogue) -> crate::BubblecastResult<f64> {
    let start = parse_timestamp(&d.start)?;
    let end = parse_timestamp(&d.end)?;
    Ok(end - start)
}

/// Total canvas duration required by a resolved timeline: the latest interval
/// end plus the trailing buffer, or the empty-timeline fallback.
///
/// In dynamic mode the latest end is always the last entry's; fixed mode
/// trusts caller timestamps, which may put the latest end anywhere.
pub fn total_duration(timeline: &[TimedDialogue], opts: TimelineOpts) -> f64 {
    let latest_end = timeline
        .iter()
        .map(|entry| entry.interval.end)
        .fold(f64::NEG_INFINITY, f64::max);
    if latest_end.is_finite() {
        latest_end + opts.trailing_buffer
    } else {
        opts.empty_fallback
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/builder.rs"]
mod tests;
