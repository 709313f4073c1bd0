use chrono::{SecondsFormat, Utc};

/// Source of commit timestamps.
///
/// The commit digest covers the timestamp, so the clock is injected: with a
/// [`FixedClock`], digest determinism is a testable property rather than a
/// race against wall time.
pub trait Clock: Send + Sync {
    /// Current time as an RFC 3339 string.
    fn now(&self) -> String;
}

/// Wall-clock time in UTC, millisecond precision.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// A clock pinned to one instant, for tests.
#[derive(Debug, Clone)]
pub struct FixedClock(pub String);

impl Clock for FixedClock {
    fn now(&self) -> String {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_emits_rfc3339() {
        let now = SystemClock.now();
        assert!(chrono::DateTime::parse_from_rfc3339(&now).is_ok());
    }

    #[test]
    fn fixed_clock_is_fixed() {
        let clock = FixedClock("2026-01-01T00:00:00Z".into());
        assert_eq!(clock.now(), clock.now());
    }
}
