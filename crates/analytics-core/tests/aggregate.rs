// File: crates/analytics-core/tests/aggregate.rs
// Purpose: Trend, category and attendance reductions.

use std::collections::HashMap;

use analytics_core::{
    attendance_series, category_totals, trend_series, Material, RawIds, Summary, TaskRecord,
};
use chrono::NaiveDate;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn category_quantities_are_summed_in_any_order() {
    let a = TaskRecord::new("a", "A").on("2024-06-10").using("m1", 3.0);
    let b = TaskRecord::new("b", "B").on("2024-06-10").using("m1", 5.0);

    for tasks in [vec![&a, &b], vec![&b, &a]] {
        let totals = category_totals(tasks, &RawIds);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].category, "m1");
        assert_eq!(totals[0].quantity, 8.0);
    }
}

#[test]
fn categories_keep_first_seen_order_and_resolve_names() {
    let tasks = vec![
        TaskRecord::new("a", "A").using("m2", 1.0).using("m1", 2.0),
        TaskRecord::new("b", "B").using("m3", 4.0).using("m2", 1.5),
    ];
    let catalog = vec![Material::new("m1", "Gloves"), Material::new("m2", "Soap")];
    let totals = category_totals(&tasks, &catalog);

    let names: Vec<&str> = totals.iter().map(|c| c.category.as_str()).collect();
    assert_eq!(names, vec!["Soap", "Gloves", "m3"]);
    assert_eq!(totals[0].quantity, 2.5);

    let mut by_map = HashMap::new();
    by_map.insert("m3".to_string(), "Bleach".to_string());
    let totals = category_totals(&tasks, &by_map);
    assert_eq!(totals[2].category, "Bleach");
    assert_eq!(totals[0].category, "m2");
}

#[test]
fn bad_quantities_count_as_zero() {
    let tasks = vec![TaskRecord::new("a", "A").using("m1", -4.0).using("m1", f64::NAN).using("m1", 2.0)];
    let totals = category_totals(&tasks, &RawIds);
    assert_eq!(totals[0].quantity, 2.0);
}

#[test]
fn trend_uses_completed_tasks_and_defaults_rating() {
    let tasks = vec![
        TaskRecord::new("a", "A").on("2024-06-03").completed_with(Some(4.0)),
        TaskRecord::new("b", "B").on("2024-06-04"),
        TaskRecord::new("c", "C").on("2024-06-05").completed_with(None),
    ];
    let trend = trend_series(&tasks);
    assert_eq!(trend.len(), 2);
    assert_eq!((trend[0].date, trend[0].value), (ymd(2024, 6, 3), 4.0));
    assert_eq!((trend[1].date, trend[1].value), (ymd(2024, 6, 5), 0.0));
}

#[test]
fn empty_inputs_reduce_to_empty_series() {
    let none: Vec<TaskRecord> = Vec::new();
    assert!(trend_series(&none).is_empty());
    assert!(category_totals(&none, &RawIds).is_empty());
    assert_eq!(Summary::from_tasks(&none, 0), Summary::default());
}

#[test]
fn attendance_is_a_fixed_trailing_week() {
    let today = ymd(2024, 3, 2);
    let series = attendance_series(12, today);
    assert_eq!(series.len(), 7);
    assert_eq!(series[0].date, ymd(2024, 2, 25));
    assert_eq!(series[6].date, today);
    assert!(series.iter().all(|s| s.present == 12 && s.absent == 0));
    assert!(series.windows(2).all(|w| w[0].date < w[1].date));

    assert!(attendance_series(0, today).iter().all(|s| s.total() == 0));
}

#[test]
fn summary_counts_completion_and_ratings() {
    let tasks = vec![
        TaskRecord::new("a", "A").completed_with(Some(4.0)).using("m1", 2.0),
        TaskRecord::new("b", "B").completed_with(Some(2.0)),
        TaskRecord::new("c", "C").completed_with(None).using("m2", 1.5),
        TaskRecord::new("d", "D"),
    ];
    let s = Summary::from_tasks(&tasks, 5);
    assert_eq!(s.total_tasks, 4);
    assert_eq!(s.completed_tasks, 3);
    assert_eq!(s.completion_rate, 75);
    assert_eq!(s.average_rating, Some(3.0));
    assert_eq!(s.total_material_quantity, 3.5);
    assert_eq!(s.employee_count, 5);
}
