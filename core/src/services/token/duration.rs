//! Session timeout resolution

use chrono::Duration;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Units accepted for configured session timeouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
}

impl TimeUnit {
    /// Scales `value` by this unit, saturating instead of overflowing
    pub fn duration(self, value: i64) -> Duration {
        let scaled = match self {
            TimeUnit::Seconds => Duration::try_seconds(value),
            TimeUnit::Minutes => Duration::try_minutes(value),
            TimeUnit::Hours => Duration::try_hours(value),
        };

        scaled.unwrap_or(if value < 0 { Duration::MIN } else { Duration::MAX })
    }
}

/// Unit name outside `SECONDS`, `MINUTES`, `HOURS` (matched exactly)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTimeUnit(pub String);

impl fmt::Display for UnknownTimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown time unit '{}'", self.0)
    }
}

impl std::error::Error for UnknownTimeUnit {}

impl FromStr for TimeUnit {
    type Err = UnknownTimeUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SECONDS" => Ok(TimeUnit::Seconds),
            "MINUTES" => Ok(TimeUnit::Minutes),
            "HOURS" => Ok(TimeUnit::Hours),
            _ => Err(UnknownTimeUnit(s.to_string())),
        }
    }
}

/// Converts a configured timeout into a duration
///
/// Unrecognized units are logged once at `warn` and the value is read as
/// seconds. Never fails.
pub fn resolve_duration(value: i64, unit: &str) -> Duration {
    match unit.parse::<TimeUnit>() {
        Ok(unit) => unit.duration(value),
        Err(err) => {
            warn!(
                component = "auth",
                operation = "resolve_duration",
                unit,
                value,
                "{}, defaulting to SECONDS",
                err
            );
            TimeUnit::Seconds.duration(value)
        }
    }
}
