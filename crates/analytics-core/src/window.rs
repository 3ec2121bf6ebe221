// File: crates/analytics-core/src/window.rs
// Summary: Window tag selector resolving day/week/month into a concrete date interval.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::AnalyticsError;

/// Selector for the active time range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowTag {
    Day,
    #[default]
    Week,
    Month,
}

impl WindowTag {
    pub const ALL: [WindowTag; 3] = [WindowTag::Day, WindowTag::Week, WindowTag::Month];

    pub fn as_str(&self) -> &'static str {
        match self {
            WindowTag::Day => "day",
            WindowTag::Week => "week",
            WindowTag::Month => "month",
        }
    }
}

impl fmt::Display for WindowTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WindowTag {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| AnalyticsError::UnknownWindowTag(s.to_string()))
    }
}

/// Inclusive `[start, end]` day interval; `end` is always "today".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub tag: WindowTag,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl TimeWindow {
    /// Inclusive membership at day granularity.
    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of calendar days covered, both ends included.
    pub fn days(&self) -> u32 {
        (self.end - self.start).num_days().max(0) as u32 + 1
    }
}

/// Map a window tag to its interval ending at `today`.
pub fn resolve_window(tag: WindowTag, today: NaiveDate) -> TimeWindow {
    let start = match tag {
        WindowTag::Day => today,
        WindowTag::Week => {
            // weekday 0 is Sunday
            let back = u64::from(today.weekday().num_days_from_sunday());
            today.checked_sub_days(Days::new(back)).unwrap_or(today)
        }
        WindowTag::Month => today.with_day(1).unwrap_or(today),
    };
    TimeWindow { tag, start, end: today }
}
