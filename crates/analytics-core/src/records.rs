// File: crates/analytics-core/src/records.rs
// Summary: Raw record shapes supplied by the host and lenient calendar-date parsing.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One material consumed by a task.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterialUsage {
    #[serde(rename = "materialId")]
    pub material_id: String,
    #[serde(default)]
    pub quantity: f64,
}

impl MaterialUsage {
    pub fn new(material_id: impl Into<String>, quantity: f64) -> Self {
        Self { material_id: material_id.into(), quantity }
    }
}

/// Task as returned by the backend. Dates stay as raw strings; only the
/// filter decides whether they are usable.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub materials_used: Vec<MaterialUsage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

impl TaskRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into(), ..Self::default() }
    }

    pub fn on(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn completed_with(mut self, rating: Option<f64>) -> Self {
        self.completed = true;
        self.rating = rating;
        self
    }

    pub fn using(mut self, material_id: impl Into<String>, quantity: f64) -> Self {
        self.materials_used.push(MaterialUsage::new(material_id, quantity));
        self
    }

    /// Raw date string: `date`, else `completed_at`.
    pub fn raw_date(&self) -> Option<&str> {
        self.date.as_deref().or(self.completed_at.as_deref())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub department: String,
}

/// Catalog entry used to resolve category display names.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    pub id: String,
    pub name: String,
}

impl Material {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into() }
    }
}

/// Anything carrying a (possibly missing or malformed) calendar date.
pub trait Dated {
    /// `None` when the date is absent or does not parse.
    fn calendar_date(&self) -> Option<NaiveDate>;
}

impl Dated for TaskRecord {
    fn calendar_date(&self) -> Option<NaiveDate> {
        self.raw_date().and_then(parse_calendar_date)
    }
}

impl<T: Dated + ?Sized> Dated for &T {
    fn calendar_date(&self) -> Option<NaiveDate> {
        (**self).calendar_date()
    }
}

impl Dated for Option<String> {
    fn calendar_date(&self) -> Option<NaiveDate> {
        self.as_deref().and_then(parse_calendar_date)
    }
}

impl Dated for NaiveDate {
    fn calendar_date(&self) -> Option<NaiveDate> {
        Some(*self)
    }
}

/// Parse `YYYY-MM-DD`, an RFC 3339 timestamp, or a naive `YYYY-MM-DD[T ]HH:MM:SS[.fff]`.
/// Timestamps keep the calendar day of their own offset.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_plain_dates_and_timestamps() {
        assert_eq!(parse_calendar_date("2024-06-10"), Some(ymd(2024, 6, 10)));
        assert_eq!(parse_calendar_date(" 2024-06-10 "), Some(ymd(2024, 6, 10)));
        assert_eq!(parse_calendar_date("2024-06-10T23:30:00Z"), Some(ymd(2024, 6, 10)));
        assert_eq!(parse_calendar_date("2024-06-10T23:30:00-05:00"), Some(ymd(2024, 6, 10)));
        assert_eq!(parse_calendar_date("2024-06-10T08:15:00"), Some(ymd(2024, 6, 10)));
        assert_eq!(parse_calendar_date("2024-06-10 08:15:00.250"), Some(ymd(2024, 6, 10)));
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", "   ", "yesterday", "2024-13-01", "2024-02-30", "10/06/2024"] {
            assert_eq!(parse_calendar_date(bad), None, "{bad:?} should not parse");
        }
    }

    #[test]
    fn task_date_falls_back_to_completed_at() {
        let mut t = TaskRecord::new("t1", "Restock");
        assert_eq!(t.calendar_date(), None);
        t.completed_at = Some("2024-06-03T10:00:00Z".into());
        assert_eq!(t.calendar_date(), Some(ymd(2024, 6, 3)));
        t.date = Some("2024-06-04".into());
        assert_eq!(t.calendar_date(), Some(ymd(2024, 6, 4)));
    }

    #[test]
    fn deserializes_backend_shape() {
        let json = r#"{
            "id": "t9", "name": "Mop floor", "completed": true,
            "date": "2024-06-10",
            "materials_used": [{"materialId": "m1", "quantity": 3}],
            "rating": 4
        }"#;
        let t: TaskRecord = serde_json::from_str(json).unwrap();
        assert!(t.completed);
        assert_eq!(t.rating, Some(4.0));
        assert_eq!(t.materials_used, vec![MaterialUsage::new("m1", 3.0)]);
    }
}
