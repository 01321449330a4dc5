use crate::foundation::error::{BubblecastError, BubblecastResult};

/// Convert a timestamp string to seconds.
///
/// Accepted forms are `HH:MM:SS`, `MM:SS` and `SS[.fff]` (a bare numeric
/// seconds value). Hours and minutes must be unsigned integers; the seconds
/// field may carry a fractional part. The result is always non-negative.
pub fn parse_timestamp(raw: &str) -> BubblecastResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(BubblecastError::timestamp("empty timestamp"));
    }

    let parts: Vec<&str> = trimmed.split(':').map(str::trim).collect();
    let secs = match parts.as_slice() {
        [h, m, s] => {
            let h = parse_component_u32(h, raw)?;
            let m = parse_component_u32(m, raw)?;
            let s = parse_component_secs(s, raw)?;
            f64::from(h) * 3600.0 + f64::from(m) * 60.0 + s
        }
        [m, s] => {
            let m = parse_component_u32(m, raw)?;
            let s = parse_component_secs(s, raw)?;
            f64::from(m) * 60.0 + s
        }
        [s] => parse_component_secs(s, raw)?,
        _ => {
            return Err(BubblecastError::timestamp(format!(
                "'{raw}' has too many ':' separators"
            )));
        }
    };

    debug_assert!(secs >= 0.0);
    Ok(secs)
}

fn parse_component_u32(part: &str, raw: &str) -> BubblecastResult<u32> {
    part.parse::<u32>()
        .map_err(|_| BubblecastError::timestamp(format!("'{raw}': '{part}' is not an integer")))
}

fn parse_component_secs(part: &str, raw: &str) -> BubblecastResult<f64> {
    let secs = part
        .parse::<f64>()
        .map_err(|_| BubblecastError::timestamp(format!("'{raw}': '{part}' is not a number")))?;
    if !secs.is_finite() || secs < 0.0 {
        return Err(BubblecastError::timestamp(format!(
            "'{raw}': seconds must be finite and non-negative"
        )));
    }
    Ok(secs)
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/timestamp.rs"]
mod tests;
