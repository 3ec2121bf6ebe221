// File: crates/analytics-core/src/series.rs
// Summary: Aggregated series models for the trend, category and attendance charts.
// Notes:
// - These are plain values rebuilt on every render pass; hosts may also show
//   them directly (summary tiles, tables, CSV export).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::records::Dated;

/// One performance-trend sample.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DatedValue {
    pub date: NaiveDate,
    pub value: f64,
}

impl DatedValue {
    pub const fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// Usage of one category inside the active window.
/// Contract: `quantity >= 0`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryQuantity {
    pub category: String,
    pub quantity: f64,
}

impl CategoryQuantity {
    pub fn new(category: impl Into<String>, quantity: f64) -> Self {
        Self { category: category.into(), quantity: sanitize_quantity(quantity) }
    }
}

/// Head count for one day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSample {
    pub date: NaiveDate,
    pub present: u32,
    pub absent: u32,
}

impl AttendanceSample {
    pub const fn new(date: NaiveDate, present: u32, absent: u32) -> Self {
        Self { date, present, absent }
    }

    pub fn total(&self) -> u32 { self.present.saturating_add(self.absent) }
}

impl Dated for DatedValue {
    fn calendar_date(&self) -> Option<NaiveDate> { Some(self.date) }
}

impl Dated for AttendanceSample {
    fn calendar_date(&self) -> Option<NaiveDate> { Some(self.date) }
}

/// Negative and non-finite quantities count as nothing.
#[inline]
pub fn sanitize_quantity(q: f64) -> f64 {
    if q.is_finite() && q > 0.0 { q } else { 0.0 }
}
