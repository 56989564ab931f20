use core::fmt;
use std::str::FromStr;

use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::VidashError;

/// Fixed lower bound for lifetime queries; predates the platform's
/// monetization data so it captures everything.
pub const LIFETIME_START: NaiveDate = match NaiveDate::from_ymd_opt(2010, 1, 1) {
    Some(d) => d,
    None => panic!("2010-01-01 is a valid date"),
};

/// Revenue reports lag realtime by roughly this many days.
const REVENUE_LAG_DAYS: u64 = 2;

/// A symbolic reporting range, resolved against "now" at call time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeRange {
    /// The last 24 hours.
    Last24Hours,
    /// The last 7 days.
    Last7Days,
    /// The last 30 days.
    Last30Days,
    /// Everything since [`LIFETIME_START`].
    #[default]
    Lifetime,
}

impl TimeRange {
    /// Resolve to concrete date bounds with `end` = today.
    #[must_use]
    pub fn resolve(self, now: DateTime<Utc>) -> TimeWindow {
        let end = now.date_naive();
        let start = match self {
            Self::Last24Hours => end - Days::new(1),
            Self::Last7Days => end - Days::new(7),
            Self::Last30Days => end - Days::new(30),
            Self::Lifetime => LIFETIME_START,
        };
        TimeWindow { start, end }
    }

    /// Resolve for revenue queries, where the report end must trail
    /// realtime by the ingestion lag.
    #[must_use]
    pub fn resolve_for_revenue(self, now: DateTime<Utc>) -> TimeWindow {
        let mut window = self.resolve(now);
        window.end = window.end - Days::new(REVENUE_LAG_DAYS);
        if window.start > window.end {
            window.start = window.end;
        }
        window
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Last24Hours => "Last 24 hours",
            Self::Last7Days => "Last 7 days",
            Self::Last30Days => "Last 30 days",
            Self::Lifetime => "Lifetime",
        };
        f.write_str(s)
    }
}

impl FromStr for TimeRange {
    type Err = VidashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "24h" | "last-24-hours" | "last 24 hours" => Ok(Self::Last24Hours),
            "7d" | "last-7-days" | "last 7 days" => Ok(Self::Last7Days),
            "30d" | "last-30-days" | "last 30 days" => Ok(Self::Last30Days),
            "lifetime" => Ok(Self::Lifetime),
            other => Err(VidashError::InvalidArg(format!(
                "unknown time range: {other:?}"
            ))),
        }
    }
}

/// Concrete inclusive date bounds produced by resolving a [`TimeRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeWindow {
    /// First day of the window.
    pub start: NaiveDate,
    /// Last day of the window.
    pub end: NaiveDate,
}

impl TimeWindow {
    /// Start bound formatted for query parameters.
    #[must_use]
    pub fn start_param(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    /// End bound formatted for query parameters.
    #[must_use]
    pub fn end_param(&self) -> String {
        self.end.format("%Y-%m-%d").to_string()
    }
}
