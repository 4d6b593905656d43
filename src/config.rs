use std::time::Duration;

/// Glyph drawn for hot cells when none is configured
pub const DEFAULT_CHAR: char = '█';
pub const DEFAULT_PALETTE: &str = "red";
pub const DEFAULT_SPEED: Duration = Duration::from_millis(50);
pub const DEFAULT_DECAY: f64 = 6.0;
/// Ticks never run faster than this
pub const MIN_TICK: Duration = Duration::from_millis(1);

/// Resolved configuration for a fire run
#[derive(Clone, Debug, PartialEq)]
pub struct FireConfig {
    pub draw_char: char,
    pub palette: String,
    pub tick: Duration,
    pub decay: f64,
    pub flicker: bool,
    pub seed: Option<u64>,
}

impl Default for FireConfig {
    fn default() -> Self {
        Self {
            draw_char: DEFAULT_CHAR,
            palette: DEFAULT_PALETTE.to_string(),
            tick: DEFAULT_SPEED,
            decay: DEFAULT_DECAY,
            flicker: true,
            seed: None,
        }
    }
}

impl FireConfig {
    /// Clamp out-of-range values instead of rejecting them
    pub fn clamped(mut self) -> Self {
        self.tick = self.tick.max(MIN_TICK);
        if !(self.decay >= 0.0) {
            self.decay = 0.0;
        }
        self
    }
}

/// First character of `s`, or the default block glyph for empty input
pub fn glyph_from(s: &str) -> char {
    s.chars().next().unwrap_or(DEFAULT_CHAR)
}

/// Parse a duration such as `50ms`, `1.5s` or `2m`.
///
/// Units: `ns`, `us`/`µs`, `ms`, `s`, `m`, `h`. A bare `0` is allowed.
pub fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    if s == "0" {
        return Ok(Duration::ZERO);
    }

    let split = s
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .ok_or_else(|| format!("missing unit in duration '{}'", s))?;
    let (number, unit) = s.split_at(split);

    let value: f64 = number
        .parse()
        .map_err(|_| format!("invalid number in duration '{}'", s))?;

    let nanos_per_unit = match unit {
        "ns" => 1.0,
        "us" | "µs" => 1e3,
        "ms" => 1e6,
        "s" => 1e9,
        "m" => 60e9,
        "h" => 3600e9,
        _ => return Err(format!("unknown unit '{}' in duration '{}'", unit, s)),
    };

    let nanos = (value * nanos_per_unit).round();
    if !nanos.is_finite() || nanos >= u64::MAX as f64 {
        return Err(format!("duration '{}' out of range", s));
    }
    Ok(Duration::from_nanos(nanos as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_durations() {
        assert_eq!(parse_duration("50ms"), Ok(Duration::from_millis(50)));
        assert_eq!(parse_duration("1.5s"), Ok(Duration::from_millis(1500)));
        assert_eq!(parse_duration("2m"), Ok(Duration::from_secs(120)));
        assert_eq!(parse_duration("250us"), Ok(Duration::from_micros(250)));
        assert_eq!(parse_duration("0"), Ok(Duration::ZERO));
    }

    #[test]
    fn rejects_bad_durations() {
        assert!(parse_duration("50").is_err());
        assert!(parse_duration("ms").is_err());
        assert!(parse_duration("10 parsecs").is_err());
        assert!(parse_duration("1.2.3s").is_err());
    }

    #[test]
    fn clamps_tick_and_decay() {
        let cfg = FireConfig {
            tick: Duration::ZERO,
            decay: -3.0,
            ..FireConfig::default()
        }
        .clamped();
        assert_eq!(cfg.tick, MIN_TICK);
        assert_eq!(cfg.decay, 0.0);
    }

    #[test]
    fn glyph_falls_back_to_block() {
        assert_eq!(glyph_from(""), DEFAULT_CHAR);
        assert_eq!(glyph_from("*#"), '*');
    }
}
