//! Shared wall-clock second.

use chrono::{DateTime, Utc};

/// One wall-clock second published by the shared clock.
///
/// Every label rendered within the same tick reads the same value, so rows
/// never drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Tick(pub i64);

impl Tick {
    /// The current wall-clock second.
    pub fn now() -> Self {
        Self(Utc::now().timestamp())
    }

    pub fn from_datetime(at: DateTime<Utc>) -> Self {
        Self(at.timestamp())
    }

    /// Unix seconds of this tick.
    pub fn as_secs(self) -> i64 {
        self.0
    }

    /// This tick as a timestamp; out-of-range values clamp to the epoch.
    pub fn to_datetime(self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.0, 0).unwrap_or_default()
    }
}

impl From<DateTime<Utc>> for Tick {
    fn from(at: DateTime<Utc>) -> Self {
        Self::from_datetime(at)
    }
}

impl std::fmt::Display for Tick {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
