//! Parsing of raw console lines.
//!
//! Duration and MET are deliberately asymmetric: a bad duration aborts the
//! add-exercise flow, a bad MET falls back to the configured default.

/// Parse a menu or exercise-type choice
pub fn parse_choice(line: &str) -> Option<i64> {
    line.trim().parse().ok()
}

/// Parse a duration in minutes; only positive integers are accepted
pub fn parse_duration(line: &str) -> Option<u32> {
    let minutes: i64 = line.trim().parse().ok()?;
    if minutes <= 0 {
        return None;
    }
    u32::try_from(minutes).ok()
}

/// Parse a MET value, substituting `default` when the line is not a number
pub fn parse_met(line: &str, default: f64) -> f64 {
    match line.trim().parse() {
        Ok(met) => met,
        Err(_) => {
            tracing::debug!("Unparseable MET {:?}, using default {}", line.trim(), default);
            default
        }
    }
}
