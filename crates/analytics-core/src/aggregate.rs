// File: crates/analytics-core/src/aggregate.rs
// Summary: Reductions from filtered records to the per-chart series.

use std::collections::HashMap;

use chrono::{Days, NaiveDate};
use indexmap::IndexMap;

use crate::records::{Dated, Material, TaskRecord};
use crate::series::{sanitize_quantity, AttendanceSample, CategoryQuantity, DatedValue};

/// Length of the attendance series, independent of the window tag.
pub const ATTENDANCE_DAYS: u64 = 7;

/// Resolves a category id to a display name.
pub trait CategoryLookup {
    fn display_name(&self, id: &str) -> Option<String>;
}

impl CategoryLookup for [Material] {
    fn display_name(&self, id: &str) -> Option<String> {
        self.iter().find(|m| m.id == id).map(|m| m.name.clone())
    }
}

impl CategoryLookup for Vec<Material> {
    fn display_name(&self, id: &str) -> Option<String> {
        self.as_slice().display_name(id)
    }
}

impl CategoryLookup for HashMap<String, String> {
    fn display_name(&self, id: &str) -> Option<String> {
        self.get(id).cloned()
    }
}

/// Lookup that never resolves; every category shows its raw id.
#[derive(Clone, Copy, Debug, Default)]
pub struct RawIds;

impl CategoryLookup for RawIds {
    fn display_name(&self, _id: &str) -> Option<String> { None }
}

/// One sample per completed task, in input order. Missing ratings count as 0.
pub fn trend_series<'a, I>(tasks: I) -> Vec<DatedValue>
where
    I: IntoIterator<Item = &'a TaskRecord>,
{
    tasks
        .into_iter()
        .filter(|t| t.completed)
        .filter_map(|t| {
            let date = t.calendar_date()?;
            let value = t.rating.filter(|r| r.is_finite()).unwrap_or(0.0);
            Some(DatedValue::new(date, value))
        })
        .collect()
}

/// Sum material quantities per id in first-seen order, then resolve names.
/// Unresolved ids keep the raw id as their name.
pub fn category_totals<'a, I, L>(tasks: I, lookup: &L) -> Vec<CategoryQuantity>
where
    I: IntoIterator<Item = &'a TaskRecord>,
    L: CategoryLookup + ?Sized,
{
    let mut totals: IndexMap<&str, f64> = IndexMap::new();
    for usage in tasks.into_iter().flat_map(|t| t.materials_used.iter()) {
        *totals.entry(usage.material_id.as_str()).or_insert(0.0) += sanitize_quantity(usage.quantity);
    }
    totals
        .into_iter()
        .map(|(id, quantity)| {
            let name = lookup.display_name(id).unwrap_or_else(|| id.to_string());
            CategoryQuantity::new(name, quantity)
        })
        .collect()
}

/// Trailing week ending `today`, oldest first, everyone present.
///
/// There is no attendance source yet: every day reports `employee_count`
/// present and nobody absent, whatever window the host selected.
pub fn attendance_series(employee_count: usize, today: NaiveDate) -> Vec<AttendanceSample> {
    let present = u32::try_from(employee_count).unwrap_or(u32::MAX);
    (0..ATTENDANCE_DAYS)
        .rev()
        .filter_map(|back| today.checked_sub_days(Days::new(back)))
        .map(|date| AttendanceSample::new(date, present, 0))
        .collect()
}
